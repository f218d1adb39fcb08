//! Calendar event inputs and analysis results

use serde::{Deserialize, Serialize};

/// A calendar event submitted for standalone analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Free-form time or situational context ("tomorrow 3pm", "no agenda")
    #[serde(default)]
    pub context: Option<String>,
}

/// A calendar event submitted for preparatory-task generation
///
/// Unlike [`EventInput`], this carries a caller-supplied `id` (echoed back in
/// generated prep tasks) and a concrete `start_time` for date arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Event start as a timestamp string (RFC 3339 or bare date)
    pub start_time: String,

    #[serde(default)]
    pub category: Option<String>,
}

/// Analysis result for a single event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAnalysis {
    /// Event priority score, 0-100
    #[serde(rename = "priority_score")]
    pub score: u8,

    /// Preparation tip or meeting insight
    #[serde(rename = "ai_summary")]
    pub summary: String,

    /// Professional reply draft for meeting invites, when one is warranted
    #[serde(default)]
    pub suggested_reply: Option<String>,
}

/// Narrative morning brief
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBrief {
    pub brief: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_analysis_null_reply() {
        let json = r#"{
            "priority_score": 35,
            "ai_summary": "Casual catch-up, no prep needed.",
            "suggested_reply": null
        }"#;

        let analysis: EventAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.score, 35);
        assert!(analysis.suggested_reply.is_none());
    }

    #[test]
    fn test_calendar_event_requires_start_time() {
        let result: Result<CalendarEvent, _> =
            serde_json::from_str(r#"{"id": "e1", "title": "Standup"}"#);
        assert!(result.is_err());
    }
}
