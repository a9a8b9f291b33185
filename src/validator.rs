//! Brief Validator
//!
//! Turns an untyped request body into a typed `Brief`, collecting every
//! violated constraint instead of stopping at the first. Pure: no network or
//! filesystem access. Unknown fields are ignored for forward compatibility.

use crate::error::ValidationIssue;
use crate::models::{AdPlatform, Brief, Budget, BudgetCadence, FocusArea, MediaAttachment, MediaKind};
use serde_json::Value;

/// Minimum content threshold for `objective`, counted on the trimmed string.
pub const OBJECTIVE_MIN_CHARS: usize = 10;

/// Validate an untyped body into a `Brief`, or report all field issues.
pub fn validate_brief(body: &Value) -> std::result::Result<Brief, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let objective = match body.get("objective").and_then(Value::as_str) {
        Some(s) if s.trim().chars().count() >= OBJECTIVE_MIN_CHARS => s.trim().to_string(),
        Some(_) => {
            issues.push(ValidationIssue::new(
                "objective",
                format!(
                    "objective must contain at least {} characters",
                    OBJECTIVE_MIN_CHARS
                ),
            ));
            String::new()
        }
        None => {
            issues.push(ValidationIssue::new("objective", "objective is required"));
            String::new()
        }
    };

    let focus_areas = collect_focus_areas(body, &mut issues);
    let tone = optional_string(body, "tone", &mut issues);
    let constraints = optional_string(body, "constraints", &mut issues);
    let target_channels = string_sequence(body, "targetChannels", &mut issues);
    let tasks = string_sequence(body, "tasks", &mut issues);
    let media = collect_media(body, &mut issues);
    let budget = collect_budget(body, &mut issues);

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(Brief {
        objective,
        focus_areas,
        tone,
        constraints,
        target_channels,
        tasks,
        media,
        budget,
    })
}

fn parse_focus_area(value: &str) -> Option<FocusArea> {
    match value {
        "catalog" => Some(FocusArea::Catalog),
        "sales" => Some(FocusArea::Sales),
        "loyalty" => Some(FocusArea::Loyalty),
        "seo" => Some(FocusArea::Seo),
        "automation" => Some(FocusArea::Automation),
        "ads" => Some(FocusArea::Ads),
        "support" => Some(FocusArea::Support),
        _ => None,
    }
}

fn parse_media_kind(value: &str) -> Option<MediaKind> {
    match value {
        "image" => Some(MediaKind::Image),
        "video" => Some(MediaKind::Video),
        _ => None,
    }
}

fn parse_cadence(value: &str) -> Option<BudgetCadence> {
    match value {
        "daily" => Some(BudgetCadence::Daily),
        "weekly" => Some(BudgetCadence::Weekly),
        "monthly" => Some(BudgetCadence::Monthly),
        _ => None,
    }
}

fn parse_platform(value: &str) -> Option<AdPlatform> {
    match value {
        "meta" => Some(AdPlatform::Meta),
        "google" => Some(AdPlatform::Google),
        "both" => Some(AdPlatform::Both),
        _ => None,
    }
}

/// Optional string field; present-but-wrong-type is an issue, absent is fine.
/// Empty or whitespace-only strings are treated as absent.
fn optional_string(body: &Value, field: &str, issues: &mut Vec<ValidationIssue>) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(_) => {
            issues.push(ValidationIssue::new(field, format!("{} must be a string", field)));
            None
        }
    }
}

/// Sequence-of-string field; absent means empty (the UI omits empty lists).
fn string_sequence(body: &Value, field: &str, issues: &mut Vec<ValidationIssue>) -> Vec<String> {
    match body.get(field) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(s) => out.push(s.to_string()),
                    None => issues.push(ValidationIssue::new(
                        format!("{}[{}]", field, i),
                        "entry must be a string",
                    )),
                }
            }
            out
        }
        Some(_) => {
            issues.push(ValidationIssue::new(field, format!("{} must be an array", field)));
            Vec::new()
        }
    }
}

fn collect_focus_areas(body: &Value, issues: &mut Vec<ValidationIssue>) -> Vec<FocusArea> {
    let items = match body.get("focusAreas") {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            issues.push(ValidationIssue::new("focusAreas", "focusAreas must be an array"));
            return Vec::new();
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str().and_then(parse_focus_area) {
            // Set semantics: drop duplicates, keep first-seen order.
            Some(area) if !out.contains(&area) => out.push(area),
            Some(_) => {}
            None => issues.push(ValidationIssue::new(
                format!("focusAreas[{}]", i),
                "must be one of: catalog, sales, loyalty, seo, automation, ads, support",
            )),
        }
    }
    out
}

fn collect_media(body: &Value, issues: &mut Vec<ValidationIssue>) -> Vec<MediaAttachment> {
    let items = match body.get("media") {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            issues.push(ValidationIssue::new("media", "media must be an array"));
            return Vec::new();
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let before = issues.len();

        let id = required_string(item, &format!("media[{}].id", i), issues);
        let name = required_string(item, &format!("media[{}].name", i), issues);
        let data_url = required_string(item, &format!("media[{}].dataUrl", i), issues);
        let notes = item
            .get("notes")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|s| !s.trim().is_empty());

        let kind = match item.get("kind").and_then(Value::as_str).and_then(parse_media_kind) {
            Some(kind) => kind,
            None => {
                issues.push(ValidationIssue::new(
                    format!("media[{}].kind", i),
                    "must be one of: image, video",
                ));
                continue;
            }
        };

        if issues.len() > before {
            continue;
        }

        out.push(MediaAttachment {
            id,
            name,
            kind,
            data_url,
            notes,
        });
    }
    out
}

fn collect_budget(body: &Value, issues: &mut Vec<ValidationIssue>) -> Option<Budget> {
    let budget = match body.get("budget") {
        None | Some(Value::Null) => return None,
        Some(value @ Value::Object(_)) => value,
        Some(_) => {
            issues.push(ValidationIssue::new("budget", "budget must be an object"));
            return None;
        }
    };

    let before = issues.len();

    let amount = match budget.get("amount").and_then(Value::as_f64) {
        Some(amount) if amount > 0.0 => amount,
        Some(_) => {
            issues.push(ValidationIssue::new(
                "budget.amount",
                "amount must be strictly positive",
            ));
            0.0
        }
        None => {
            issues.push(ValidationIssue::new(
                "budget.amount",
                "amount must be a positive number",
            ));
            0.0
        }
    };

    let currency = required_string(budget, "budget.currency", issues);

    let cadence = match budget.get("cadence").and_then(Value::as_str).and_then(parse_cadence) {
        Some(cadence) => cadence,
        None => {
            issues.push(ValidationIssue::new(
                "budget.cadence",
                "must be one of: daily, weekly, monthly",
            ));
            BudgetCadence::Monthly
        }
    };

    let platform = match budget.get("platform") {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_str().and_then(parse_platform) {
            Some(platform) => Some(platform),
            None => {
                issues.push(ValidationIssue::new(
                    "budget.platform",
                    "must be one of: meta, google, both",
                ));
                None
            }
        },
    };

    if issues.len() > before {
        return None;
    }

    Some(Budget {
        amount,
        currency,
        cadence,
        platform,
    })
}

fn required_string(item: &Value, field: &str, issues: &mut Vec<ValidationIssue>) -> String {
    match item
        .get(field.rsplit('.').next().unwrap_or(field))
        .and_then(Value::as_str)
    {
        Some(s) => s.to_string(),
        None => {
            issues.push(ValidationIssue::new(field, format!("{} must be a string", field)));
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_body() -> Value {
        json!({
            "objective": "Launch winter drop and grow loyalty signups",
            "focusAreas": ["catalog", "loyalty"],
            "targetChannels": ["instagram"],
            "tasks": ["List new arrivals"],
            "media": []
        })
    }

    #[test]
    fn test_valid_brief() {
        let brief = validate_brief(&minimal_body()).expect("brief should validate");
        assert_eq!(brief.objective, "Launch winter drop and grow loyalty signups");
        assert_eq!(brief.focus_areas, vec![FocusArea::Catalog, FocusArea::Loyalty]);
        assert_eq!(brief.target_channels, vec!["instagram"]);
        assert!(brief.budget.is_none());
    }

    #[test]
    fn test_short_objective_rejected() {
        let body = json!({ "objective": "hi" });
        let issues = validate_brief(&body).unwrap_err();
        assert!(issues.iter().any(|i| i.field == "objective"));
    }

    #[test]
    fn test_missing_objective_rejected() {
        let issues = validate_brief(&json!({})).unwrap_err();
        assert!(issues.iter().any(|i| i.field == "objective"));
    }

    #[test]
    fn test_all_issues_collected() {
        let body = json!({
            "objective": "no",
            "focusAreas": ["catalog", "blogging"],
            "budget": { "amount": -5, "currency": "USD", "cadence": "hourly" }
        });
        let issues = validate_brief(&body).unwrap_err();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"objective"));
        assert!(fields.contains(&"focusAreas[1]"));
        assert!(fields.contains(&"budget.amount"));
        assert!(fields.contains(&"budget.cadence"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut body = minimal_body();
        body["experimental"] = json!({ "anything": true });
        assert!(validate_brief(&body).is_ok());
    }

    #[test]
    fn test_invalid_media_kind_rejected() {
        let mut body = minimal_body();
        body["media"] = json!([
            { "id": "m1", "name": "clip.gif", "kind": "gif", "dataUrl": "data:..." }
        ]);
        let issues = validate_brief(&body).unwrap_err();
        assert!(issues.iter().any(|i| i.field == "media[0].kind"));
    }

    #[test]
    fn test_budget_with_platform() {
        let mut body = minimal_body();
        body["budget"] = json!({
            "amount": 120.5,
            "currency": "EUR",
            "cadence": "weekly",
            "platform": "both"
        });
        let brief = validate_brief(&body).expect("brief should validate");
        let budget = brief.budget.expect("budget should be present");
        assert_eq!(budget.amount, 120.5);
        assert_eq!(budget.cadence, BudgetCadence::Weekly);
        assert_eq!(budget.platform, Some(AdPlatform::Both));
    }

    #[test]
    fn test_duplicate_focus_areas_deduped() {
        let mut body = minimal_body();
        body["focusAreas"] = json!(["loyalty", "loyalty", "seo"]);
        let brief = validate_brief(&body).expect("brief should validate");
        assert_eq!(brief.focus_areas, vec![FocusArea::Loyalty, FocusArea::Seo]);
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let brief = validate_brief(&minimal_body()).expect("brief should validate");
        let round_tripped = serde_json::to_value(&brief).expect("brief serializes");
        let again = validate_brief(&round_tripped).expect("valid brief revalidates");
        assert_eq!(brief, again);
    }
}
