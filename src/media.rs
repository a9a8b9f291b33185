//! Media Token Deriver
//!
//! Collapses media attachments into one-line descriptors for the prompt.
//! The `dataUrl` payload is never read, so attachment size has no effect on
//! prompt size.

use crate::models::MediaAttachment;

const NO_NOTES_PLACEHOLDER: &str = "No notes provided";

/// Derive one textual token per attachment, preserving input order.
pub fn derive_media_tokens(media: &[MediaAttachment]) -> Vec<String> {
    media
        .iter()
        .map(|attachment| {
            let notes = attachment
                .notes
                .as_deref()
                .unwrap_or(NO_NOTES_PLACEHOLDER);
            format!("{} - {} ({})", attachment.kind, attachment.name, notes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;

    fn attachment(name: &str, kind: MediaKind, notes: Option<&str>) -> MediaAttachment {
        MediaAttachment {
            id: format!("media-{}", name),
            name: name.to_string(),
            kind,
            data_url: "data:image/png;base64,iVBORw0KGgo".to_string(),
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_image_without_notes() {
        let tokens = derive_media_tokens(&[attachment("banner.png", MediaKind::Image, None)]);
        assert_eq!(tokens, vec!["IMAGE - banner.png (No notes provided)"]);
    }

    #[test]
    fn test_video_with_notes() {
        let tokens = derive_media_tokens(&[attachment(
            "teaser.mp4",
            MediaKind::Video,
            Some("use first 5 seconds"),
        )]);
        assert_eq!(tokens, vec!["VIDEO - teaser.mp4 (use first 5 seconds)"]);
    }

    #[test]
    fn test_order_preserved() {
        let tokens = derive_media_tokens(&[
            attachment("b.mp4", MediaKind::Video, None),
            attachment("a.png", MediaKind::Image, None),
        ]);
        assert!(tokens[0].starts_with("VIDEO - b.mp4"));
        assert!(tokens[1].starts_with("IMAGE - a.png"));
    }

    #[test]
    fn test_data_url_does_not_leak_into_tokens() {
        let mut big = attachment("banner.png", MediaKind::Image, None);
        big.data_url = "x".repeat(1_000_000);
        let tokens = derive_media_tokens(&[big]);
        assert_eq!(tokens[0], "IMAGE - banner.png (No notes provided)");
    }
}
