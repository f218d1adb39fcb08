//! The four result schemas, defined once per process

use crate::domain::{Category, PriorityLevel, RecommendationKind};

use super::{FieldSpec, FieldType, Schema};

/// All result schemas, built once and shared by the orchestrators
#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    pub task_priority: Schema,
    pub event_analysis: Schema,
    pub recommendations: Schema,
    pub prep_tasks: Schema,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self {
            task_priority: task_priority(),
            event_analysis: event_analysis(),
            recommendations: recommendations(),
            prep_tasks: prep_tasks(),
        }
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn score_field() -> FieldType {
    FieldType::Integer { min: 0, max: 100 }
}

fn task_priority() -> Schema {
    Schema::new(
        "task_priority",
        vec![
            FieldSpec::required("priority_score", score_field(), "Priority score from 0-100"),
            FieldSpec::required(
                "priority_level",
                FieldType::Enum(PriorityLevel::LABELS),
                "Priority level",
            ),
            FieldSpec::required("ai_summary", FieldType::Text, "1-2 sentence actionable insight"),
            FieldSpec::required(
                "suggested_category",
                FieldType::Enum(Category::LABELS),
                "Task category",
            ),
        ],
    )
}

fn event_analysis() -> Schema {
    Schema::new(
        "event_analysis",
        vec![
            FieldSpec::required("priority_score", score_field(), "Event priority score"),
            FieldSpec::required("ai_summary", FieldType::Text, "Preparation tip or meeting insight"),
            FieldSpec::optional(
                "suggested_reply",
                FieldType::Text,
                "Professional reply for meeting invites",
            ),
        ],
    )
}

fn recommendations() -> Schema {
    let item = Schema::new(
        "recommendation",
        vec![
            FieldSpec::required(
                "type",
                FieldType::Enum(RecommendationKind::LABELS),
                "Recommendation type",
            ),
            FieldSpec::required("title", FieldType::Text, "Short action-oriented title"),
            FieldSpec::required("description", FieldType::Text, "Specific actionable steps"),
        ],
    );

    Schema::new(
        "recommendations",
        vec![FieldSpec::required(
            "recommendations",
            FieldType::Array { item: Box::new(item), min_items: 2, max_items: 5 },
            "Actionable workload recommendations",
        )],
    )
}

fn prep_tasks() -> Schema {
    let item = Schema::new(
        "prep_task",
        vec![
            FieldSpec::required("event_id", FieldType::Text, "Id of the event this prepares for"),
            FieldSpec::required("event_title", FieldType::Text, "Title of that event"),
            FieldSpec::required("task_title", FieldType::Text, "Specific, actionable task title"),
            FieldSpec::required("task_description", FieldType::Text, "What exactly to prepare"),
            FieldSpec::required("priority_score", score_field(), "Priority score from 0-100"),
            FieldSpec::required(
                "priority_level",
                FieldType::Enum(PriorityLevel::LABELS),
                "Priority level",
            ),
            FieldSpec::required(
                "suggested_category",
                FieldType::Enum(Category::LABELS),
                "Task category",
            ),
            FieldSpec::required("due_date", FieldType::Date, "When the preparation should be done"),
            FieldSpec::required("reasoning", FieldType::Text, "Why this preparation matters"),
            FieldSpec::required("is_duplicate", FieldType::Boolean, "Whether an existing task covers this"),
            FieldSpec::optional(
                "similar_task_id",
                FieldType::Text,
                "Id of the similar existing task, if any",
            ),
        ],
    );

    Schema::new(
        "prep_tasks",
        vec![FieldSpec::required(
            "prep_tasks",
            // Zero tasks is legal: not every event needs preparation
            FieldType::Array { item: Box::new(item), min_items: 0, max_items: 64 },
            "Preparatory tasks for the upcoming events",
        )],
    )
}
