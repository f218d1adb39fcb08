//! Preparatory tasks generated from upcoming events

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::priority::{Category, PriorityLevel};

/// A preparatory task generated for one upcoming event
///
/// Created transiently per request, then mutated once by the deduplication
/// pass to set `is_duplicate` / `similar_task_id`. Persistence is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepTask {
    /// Id of the event this task prepares for (caller-supplied, echoed back)
    pub event_id: String,
    pub event_title: String,

    pub task_title: String,
    pub task_description: String,

    /// Priority score, 0-100, clamped into the temporal band
    pub priority_score: u8,
    pub priority_level: PriorityLevel,
    pub suggested_category: Category,

    /// When the preparation should be done, derived from event proximity
    pub due_date: NaiveDate,

    /// Why this preparation matters
    pub reasoning: String,

    #[serde(default)]
    pub is_duplicate: bool,

    /// Id of the existing task this one duplicates, when `is_duplicate`
    #[serde(default)]
    pub similar_task_id: Option<String>,
}

/// Result of one preparatory-task generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepTaskBatch {
    /// Tasks the caller should create (`is_duplicate == false`)
    pub generated_tasks: Vec<PrepTask>,

    /// Tasks that duplicate an existing one (`is_duplicate == true`)
    pub duplicates_found: Vec<PrepTask>,

    pub total_events_analyzed: usize,
    pub tasks_created: usize,
}

impl PrepTaskBatch {
    /// The empty batch, also used as the fallback value
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_task_deserialize() {
        let json = r#"{
            "event_id": "ev-1",
            "event_title": "Technical Interview",
            "task_title": "Review data structures and practice coding problems",
            "task_description": "Cover arrays, trees, and graphs; do two timed problems.",
            "priority_score": 90,
            "priority_level": "high",
            "suggested_category": "Work",
            "due_date": "2026-09-01",
            "reasoning": "Interviews reward fresh practice.",
            "is_duplicate": false,
            "similar_task_id": null
        }"#;

        let task: PrepTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.event_id, "ev-1");
        assert_eq!(task.priority_level, PriorityLevel::High);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        assert!(!task.is_duplicate);
    }

    #[test]
    fn test_prep_task_dedup_fields_default() {
        let json = r#"{
            "event_id": "ev-2",
            "event_title": "Client call",
            "task_title": "Prepare Q3 metrics summary",
            "task_description": "Pull the latest numbers.",
            "priority_score": 70,
            "priority_level": "high",
            "suggested_category": "Work",
            "due_date": "2026-09-02",
            "reasoning": "Client expects figures."
        }"#;

        let task: PrepTask = serde_json::from_str(json).unwrap();
        assert!(!task.is_duplicate);
        assert!(task.similar_task_id.is_none());
    }

    #[test]
    fn test_empty_batch() {
        let batch = PrepTaskBatch::empty();
        assert!(batch.generated_tasks.is_empty());
        assert!(batch.duplicates_found.is_empty());
        assert_eq!(batch.total_events_analyzed, 0);
        assert_eq!(batch.tasks_created, 0);
    }
}
