//! Static fallback insights
//!
//! When the reasoning gateway fails or its output does not conform, callers
//! still get a usable answer. These values are constants in all but the Rust
//! sense: same input class, same output, no reasoning involved.

use crate::domain::{
    Category, EventAnalysis, PrepTaskBatch, PriorityLevel, PriorityResult, Recommendation,
    RecommendationKind,
};

/// Neutral priority assessment for a task
pub fn task_priority() -> PriorityResult {
    PriorityResult {
        score: 50,
        level: PriorityLevel::Medium,
        summary: "Added to your task list. Consider setting a deadline for better prioritization."
            .to_string(),
        category: Some(Category::Work),
    }
}

/// Neutral importance assessment for an event
pub fn event_analysis() -> EventAnalysis {
    EventAnalysis {
        score: 60,
        summary: "Event scheduled. Review your calendar for potential conflicts.".to_string(),
        suggested_reply: None,
    }
}

/// Two generic productivity recommendations, always in this order
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            kind: RecommendationKind::Priority,
            title: "Review your task priorities".to_string(),
            description: "Take 5 minutes to review your current tasks and ensure the most \
                          important ones are at the top of your list. Focus on impact over \
                          urgency."
                .to_string(),
        },
        Recommendation {
            kind: RecommendationKind::TimeBlock,
            title: "Schedule a focus block".to_string(),
            description: "Block out 2 hours tomorrow morning for deep work on your highest \
                          priority task. Turn off notifications and close unnecessary tabs."
                .to_string(),
        },
    ]
}

/// Empty preparation batch with all-zero counts
pub fn prep_tasks() -> PrepTaskBatch {
    PrepTaskBatch::empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_priority_is_neutral() {
        let result = task_priority();
        assert_eq!(result.score, 50);
        assert_eq!(result.level, PriorityLevel::Medium);
        assert_eq!(
            result.summary,
            "Added to your task list. Consider setting a deadline for better prioritization."
        );
        assert_eq!(result.category, Some(Category::Work));
    }

    #[test]
    fn test_event_analysis_has_no_reply() {
        let result = event_analysis();
        assert_eq!(result.score, 60);
        assert_eq!(
            result.summary,
            "Event scheduled. Review your calendar for potential conflicts."
        );
        assert!(result.suggested_reply.is_none());
    }

    #[test]
    fn test_recommendations_are_exactly_two_in_fixed_order() {
        let recs = recommendations();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].kind, RecommendationKind::Priority);
        assert_eq!(recs[0].title, "Review your task priorities");
        assert_eq!(recs[1].kind, RecommendationKind::TimeBlock);
        assert_eq!(recs[1].title, "Schedule a focus block");
    }

    #[test]
    fn test_prep_batch_has_zero_counts() {
        let batch = prep_tasks();
        assert!(batch.generated_tasks.is_empty());
        assert!(batch.duplicates_found.is_empty());
        assert_eq!(batch.total_events_analyzed, 0);
        assert_eq!(batch.tasks_created, 0);
    }
}
