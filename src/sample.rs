//! Fallback Provider
//!
//! One static, schema-valid sample plan, substituted whenever the backend is
//! unconfigured, fails, or returns something the parser rejects. Construction
//! cannot fail, so the orchestrator can always degrade to it.

use crate::models::{AdStrategyItem, Automation, ChannelPlaybook, Plan, PlanTask};
use lazy_static::lazy_static;

lazy_static! {
    static ref SAMPLE_PLAN: Plan = Plan {
        executive_summary: "Anchor the next 30 days on one hero campaign: refresh the \
            storefront catalog, run a focused paid push on your strongest channel, and \
            convert first-time buyers into repeat customers with a simple loyalty offer."
            .to_string(),
        task_matrix: vec![
            PlanTask {
                title: "Refresh product catalog".to_string(),
                owner: "Store owner".to_string(),
                cadence: "Week 1".to_string(),
                success_metric: "All active products have updated photos and descriptions"
                    .to_string(),
            },
            PlanTask {
                title: "Publish channel content calendar".to_string(),
                owner: "Marketing lead".to_string(),
                cadence: "Weekly".to_string(),
                success_metric: "3 posts scheduled per channel per week".to_string(),
            },
            PlanTask {
                title: "Review campaign performance".to_string(),
                owner: "Store owner".to_string(),
                cadence: "Every Friday".to_string(),
                success_metric: "Decisions recorded for next week's spend".to_string(),
            },
        ],
        automations: vec![
            Automation {
                title: "Abandoned cart recovery".to_string(),
                description: "Recover shoppers who leave without checking out".to_string(),
                trigger: "Cart inactive for 4 hours".to_string(),
                action: "Send reminder email with the cart contents".to_string(),
            },
            Automation {
                title: "Post-purchase thank you".to_string(),
                description: "Turn first orders into loyalty signups".to_string(),
                trigger: "Order delivered".to_string(),
                action: "Send thank-you note with loyalty program invite".to_string(),
            },
        ],
        channel_playbooks: vec![
            ChannelPlaybook {
                channel: "instagram".to_string(),
                content: "Product close-ups, behind-the-scenes stories, customer reposts"
                    .to_string(),
                cadence: "3x per week".to_string(),
            },
            ChannelPlaybook {
                channel: "email".to_string(),
                content: "New arrivals digest and loyalty progress updates".to_string(),
                cadence: "Weekly".to_string(),
            },
        ],
        ad_strategy: vec![AdStrategyItem {
            platform: "Meta".to_string(),
            audience: "Lookalike of past purchasers, 1%".to_string(),
            creatives: "Short product video plus one static carousel".to_string(),
            budget_notes: "Start small and shift budget to the winning creative after one week"
                .to_string(),
        }],
        seo_plan: "Write one collection page per focus category, target long-tail product \
            keywords, and add alt text to every catalog image."
            .to_string(),
        loyalty_plan: "Offer double points in the first month, a signup bonus at checkout, \
            and a win-back reward for customers inactive for 60 days."
            .to_string(),
    };
    static ref SAMPLE_PLAN_RAW: String = serde_json::to_string_pretty(&*SAMPLE_PLAN)
        .unwrap_or_else(|_| "{}".to_string());
}

/// The process-wide sample plan constant.
pub fn sample_plan() -> &'static Plan {
    &SAMPLE_PLAN
}

/// The sample plan's serialized form, used as the `raw` field on fallback.
pub fn sample_plan_raw() -> &'static str {
    &SAMPLE_PLAN_RAW
}
