//! Core data models for the marketing agent
//!
//! Wire shapes are camelCase JSON; the frontend submits a `Brief` and renders
//! the `AgentResponse` it gets back.

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    Catalog,
    Sales,
    Loyalty,
    Seo,
    Automation,
    Ads,
    Support,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCadence {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdPlatform {
    Meta,
    Google,
    Both,
}

//
// ================= Brief =================
//

/// One media item captured by the frontend. The `data_url` payload is carried
/// for the UI only; the pipeline derives short textual tokens from the other
/// fields and never reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    pub id: String,
    pub name: String,
    pub kind: MediaKind,
    pub data_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub amount: f64,
    pub currency: String,
    pub cadence: BudgetCadence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<AdPlatform>,
}

/// Validated campaign brief. Only the Brief Validator constructs these, so any
/// `Brief` reaching the Prompt Builder already satisfies the input contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub objective: String,
    pub focus_areas: Vec<FocusArea>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    pub target_channels: Vec<String>,
    pub tasks: Vec<String>,
    pub media: Vec<MediaAttachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
}

//
// ================= Plan =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanTask {
    pub title: String,
    pub owner: String,
    pub cadence: String,
    pub success_metric: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    pub title: String,
    pub description: String,
    pub trigger: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPlaybook {
    pub channel: String,
    pub content: String,
    pub cadence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdStrategyItem {
    pub platform: String,
    pub audience: String,
    pub creatives: String,
    pub budget_notes: String,
}

/// The structured operational plan. Every field is required; the Plan Parser
/// rejects backend output that omits any of them rather than defaulting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub executive_summary: String,
    pub task_matrix: Vec<PlanTask>,
    pub automations: Vec<Automation>,
    pub channel_playbooks: Vec<ChannelPlaybook>,
    pub ad_strategy: Vec<AdStrategyItem>,
    pub seo_plan: String,
    pub loyalty_plan: String,
}

//
// ================= Final Result =================
//

/// Sole deliverable of the pipeline, built once per request.
/// `raw` is the verbatim backend output (or the serialized sample plan) and
/// `used_sample` flags whether the fallback constant was substituted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub plan: Plan,
    pub raw: String,
    pub used_sample: bool,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaKind::Image => "IMAGE",
            MediaKind::Video => "VIDEO",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FocusArea::Catalog => "catalog",
            FocusArea::Sales => "sales",
            FocusArea::Loyalty => "loyalty",
            FocusArea::Seo => "seo",
            FocusArea::Automation => "automation",
            FocusArea::Ads => "ads",
            FocusArea::Support => "support",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for BudgetCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BudgetCadence::Daily => "daily",
            BudgetCadence::Weekly => "weekly",
            BudgetCadence::Monthly => "monthly",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for AdPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdPlatform::Meta => "Meta",
            AdPlatform::Google => "Google",
            AdPlatform::Both => "Meta and Google",
        };
        write!(f, "{}", s)
    }
}
