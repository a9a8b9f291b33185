//! Plan Parser
//!
//! Parses raw backend text into a `Plan`. Missing fields are a parse failure,
//! never defaulted: a partially-specified plan is worse than a clearly-failed
//! one, and the failure routes the orchestrator to the sample plan.

use crate::error::AgentError;
use crate::models::Plan;
use crate::Result;

/// Parse raw backend output as a `Plan`, or fail with `MalformedPlan`.
pub fn parse_plan(raw: &str) -> Result<Plan> {
    let cleaned = strip_fences(raw);

    serde_json::from_str(cleaned).map_err(|e| {
        AgentError::MalformedPlan(format!("failed to parse backend output: {}", e))
    })
}

/// Models wrap JSON in markdown fences even when told not to; tolerate it.
fn strip_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> &'static str {
        r#"{
            "executiveSummary": "Focus the winter drop on existing customers.",
            "taskMatrix": [
                { "title": "List new arrivals", "owner": "Store manager", "cadence": "Weekly", "successMetric": "All products live" }
            ],
            "automations": [
                { "title": "Welcome flow", "description": "Greet new signups", "trigger": "Signup", "action": "Send welcome email" }
            ],
            "channelPlaybooks": [
                { "channel": "instagram", "content": "Behind-the-scenes reels", "cadence": "3x per week" }
            ],
            "adStrategy": [],
            "seoPlan": "Target winter collection keywords.",
            "loyaltyPlan": "Double points during launch week."
        }"#
    }

    #[test]
    fn test_valid_plan_parses() {
        let plan = parse_plan(valid_payload()).expect("plan should parse");
        assert_eq!(plan.task_matrix.len(), 1);
        assert_eq!(plan.task_matrix[0].owner, "Store manager");
        assert!(plan.ad_strategy.is_empty());
    }

    #[test]
    fn test_fenced_plan_parses() {
        let fenced = format!("```json\n{}\n```", valid_payload());
        assert!(parse_plan(&fenced).is_ok());
    }

    #[test]
    fn test_missing_field_rejected() {
        // No seoPlan
        let raw = r#"{
            "executiveSummary": "x",
            "taskMatrix": [],
            "automations": [],
            "channelPlaybooks": [],
            "adStrategy": [],
            "loyaltyPlan": "y"
        }"#;
        assert!(matches!(parse_plan(raw), Err(AgentError::MalformedPlan(_))));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let raw = r#"{
            "executiveSummary": "x",
            "taskMatrix": "not an array",
            "automations": [],
            "channelPlaybooks": [],
            "adStrategy": [],
            "seoPlan": "y",
            "loyaltyPlan": "z"
        }"#;
        assert!(matches!(parse_plan(raw), Err(AgentError::MalformedPlan(_))));
    }

    #[test]
    fn test_prose_rejected() {
        let raw = "Here is a great marketing plan for your store:\n1. Post more.";
        assert!(matches!(parse_plan(raw), Err(AgentError::MalformedPlan(_))));
    }
}
