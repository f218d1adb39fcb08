//! Task inputs and prioritization results

use serde::{Deserialize, Serialize};

use super::priority::{Category, PriorityLevel};

/// A task submitted for prioritization
///
/// Transient and caller-supplied; never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Free-form deadline string; interpolated into the prompt as-is
    #[serde(default)]
    pub due_date: Option<String>,
}

/// A task the caller already has, used only for deduplication
///
/// The `id` is an opaque caller-supplied string echoed back through
/// `similar_task_id` when a generated prep task duplicates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingTask {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub due_date: Option<String>,
}

/// Prioritization result for a single task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityResult {
    /// Priority score, 0-100
    #[serde(rename = "priority_score")]
    pub score: u8,

    #[serde(rename = "priority_level")]
    pub level: PriorityLevel,

    /// 1-2 sentence actionable insight
    #[serde(rename = "ai_summary")]
    pub summary: String,

    #[serde(rename = "suggested_category", default)]
    pub category: Option<Category>,
}
