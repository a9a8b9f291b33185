//! Prompt Builder
//!
//! Deterministically renders a validated `Brief` plus media tokens into a
//! single generation instruction. Identical input always produces
//! byte-identical text, so prompts are cacheable and trivially testable.

use crate::models::Brief;
use std::fmt::Write;

/// Build the generation prompt for a validated brief.
pub fn build_prompt(brief: &Brief, media_tokens: &[String]) -> String {
    let focus_areas: Vec<String> = brief.focus_areas.iter().map(|a| a.to_string()).collect();

    let mut prompt = format!(
        r#"You are a senior e-commerce marketing strategist.

Create an operational marketing plan for the campaign below.

OBJECTIVE:
{}

FOCUS AREAS:
{}

TARGET CHANNELS:
{}

TASKS:
{}
"#,
        brief.objective,
        join_or_none(&focus_areas),
        join_or_none(&brief.target_channels),
        join_or_none(&brief.tasks),
    );

    if let Some(tone) = &brief.tone {
        let _ = write!(prompt, "\nTONE:\n{}\n", tone);
    }

    if let Some(constraints) = &brief.constraints {
        let _ = write!(prompt, "\nCONSTRAINTS:\n{}\n", constraints);
    }

    if let Some(budget) = &brief.budget {
        let _ = write!(
            prompt,
            "\nBUDGET:\n{} {} {}",
            budget.amount, budget.currency, budget.cadence
        );
        if let Some(platform) = budget.platform {
            let _ = write!(prompt, ", allocated to {}", platform);
        }
        prompt.push('\n');
    }

    if !media_tokens.is_empty() {
        let _ = write!(prompt, "\nAVAILABLE MEDIA:\n- {}\n", media_tokens.join("\n- "));
    }

    prompt.push_str(
        r#"
Rules:
- Respond with ONLY a single valid JSON object
- No markdown fences, no explanation text before or after
- The object must have exactly this shape:

{
  "executiveSummary": "string",
  "taskMatrix": [
    { "title": "string", "owner": "string", "cadence": "string", "successMetric": "string" }
  ],
  "automations": [
    { "title": "string", "description": "string", "trigger": "string", "action": "string" }
  ],
  "channelPlaybooks": [
    { "channel": "string", "content": "string", "cadence": "string" }
  ],
  "adStrategy": [
    { "platform": "string", "audience": "string", "creatives": "string", "budgetNotes": "string" }
  ],
  "seoPlan": "string",
  "loyaltyPlan": "string"
}

- Every field is required; use empty arrays where a section does not apply
"#,
    );

    prompt
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none specified)".to_string()
    } else {
        items.join(", ")
    }
}
