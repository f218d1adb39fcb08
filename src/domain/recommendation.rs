//! Workload recommendations

use serde::{Deserialize, Serialize};

/// The kind of action a recommendation suggests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Reschedule,
    Delegation,
    Priority,
    TimeBlock,
    Batch,
    Break,
}

impl RecommendationKind {
    /// All wire values, matching the serde representation
    pub const LABELS: &'static [&'static str] = &[
        "reschedule", "delegation", "priority", "time_block", "batch", "break",
    ];
}

/// One actionable recommendation
///
/// Responses carry 2-5 of these; the order is generation order, not a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,

    /// Short action-oriented title
    pub title: String,

    /// Specific actionable steps
    pub description: String,
}
