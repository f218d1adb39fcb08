//! Prompt builders
//!
//! One deterministic builder per use case: identical inputs (including the
//! timestamp) always render the identical prompt. User-supplied text is
//! interpolated as-is; the reasoning service's own prompt-injection
//! robustness is the only defense, which is an acknowledged limitation.

use chrono::{DateTime, Utc};
use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{CalendarEvent, EventInput, ExistingTask, TaskInput};
use crate::schema::Schema;
use crate::temporal;

mod templates;

/// Renders the per-use-case prompt templates
pub struct PromptBuilder {
    hbs: Handlebars<'static>,
}

#[derive(Serialize)]
struct TaskContext<'a> {
    title: &'a str,
    description: &'a str,
    due_date: &'a str,
    current_date: String,
    format_instructions: String,
}

#[derive(Serialize)]
struct EventContext<'a> {
    title: &'a str,
    description: &'a str,
    context: &'a str,
    current_date: String,
    format_instructions: String,
}

#[derive(Serialize)]
struct WorkloadContext<'a> {
    tasks: &'a str,
    events: &'a str,
    current_date: String,
    format_instructions: String,
}

#[derive(Serialize)]
struct BriefContext<'a> {
    tasks: &'a str,
    events: &'a str,
    timezone: &'a str,
    current_time: String,
}

#[derive(Serialize)]
struct PrepContext {
    events: String,
    existing_tasks: String,
    current_date: String,
    format_instructions: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        // Prompts are plain text, not HTML
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Prompt for task prioritization
    pub fn prioritize_task(
        &self,
        task: &TaskInput,
        now: DateTime<Utc>,
        schema: &Schema,
    ) -> Result<String> {
        debug!(title = %task.title, "prioritize_task: building prompt");
        let context = TaskContext {
            title: non_empty(&task.title, "Untitled Task"),
            description: task.description.as_deref().unwrap_or("No description provided"),
            due_date: task.due_date.as_deref().unwrap_or("No deadline set"),
            current_date: now.to_rfc3339(),
            format_instructions: schema.format_instructions(),
        };
        self.render("prioritize-task", templates::TASK_PRIORITIZE, &context)
    }

    /// Prompt for standalone event analysis
    pub fn analyze_event(
        &self,
        event: &EventInput,
        now: DateTime<Utc>,
        schema: &Schema,
    ) -> Result<String> {
        debug!(title = %event.title, "analyze_event: building prompt");
        let context = EventContext {
            title: non_empty(&event.title, "Untitled Event"),
            description: event.description.as_deref().unwrap_or("No description provided"),
            context: event.context.as_deref().unwrap_or("Time not specified"),
            current_date: now.to_rfc3339(),
            format_instructions: schema.format_instructions(),
        };
        self.render("analyze-event", templates::EVENT_ANALYZE, &context)
    }

    /// Prompt for workload recommendations
    pub fn recommendations(
        &self,
        tasks_summary: Option<&str>,
        events_summary: Option<&str>,
        now: DateTime<Utc>,
        schema: &Schema,
    ) -> Result<String> {
        debug!("recommendations: building prompt");
        let context = WorkloadContext {
            tasks: tasks_summary.unwrap_or("No active tasks"),
            events: events_summary.unwrap_or("No upcoming events"),
            current_date: now.to_rfc3339(),
            format_instructions: schema.format_instructions(),
        };
        self.render("recommendations", templates::RECOMMENDATIONS, &context)
    }

    /// Prompt for the morning brief (free text, no schema directive)
    pub fn daily_brief(
        &self,
        tasks_summary: Option<&str>,
        events_summary: Option<&str>,
        timezone: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        debug!(%timezone, "daily_brief: building prompt");
        let context = BriefContext {
            tasks: tasks_summary.unwrap_or("No tasks scheduled"),
            events: events_summary.unwrap_or("No events today"),
            timezone,
            current_time: now.to_rfc3339(),
        };
        self.render("daily-brief", templates::DAILY_BRIEF, &context)
    }

    /// Prompt for preparatory-task generation
    ///
    /// Events with an unparsable start time are left out of the rendered
    /// context; that is the per-event skip policy for temporal failures.
    pub fn prep_tasks(
        &self,
        events: &[CalendarEvent],
        existing: &[ExistingTask],
        now: DateTime<Utc>,
        schema: &Schema,
    ) -> Result<String> {
        debug!(event_count = events.len(), "prep_tasks: building prompt");
        let context = PrepContext {
            events: format_events(events, now),
            existing_tasks: format_existing_tasks(existing),
            current_date: now.to_rfc3339(),
            format_instructions: schema.format_instructions(),
        };
        self.render("prep-tasks", templates::PREP_TASKS, &context)
    }

    fn render<T: Serialize>(&self, name: &str, template: &str, context: &T) -> Result<String> {
        self.hbs
            .render_template(template, context)
            .map_err(|e| eyre!("Failed to render {} prompt: {}", name, e))
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() { placeholder } else { value }
}

/// Render upcoming events as a bullet list with day counts
fn format_events(events: &[CalendarEvent], now: DateTime<Utc>) -> String {
    let mut lines = Vec::new();

    for event in events {
        let start = match temporal::parse_timestamp(&event.start_time) {
            Ok(start) => start,
            Err(e) => {
                warn!(event_id = %event.id, error = %e, "format_events: skipping event");
                continue;
            }
        };
        let days = temporal::days_until(now, start);
        let category = event.category.as_deref().unwrap_or("Uncategorized");

        let mut line = format!(
            "- [id: {}] \"{}\" ({}) on {} ({} days away)",
            event.id, event.title, category, event.start_time, days
        );
        if let Some(description) = &event.description {
            line.push_str(&format!(": {}", description));
        }
        lines.push(line);
    }

    if lines.is_empty() {
        "No upcoming events".to_string()
    } else {
        lines.join("\n")
    }
}

/// Render existing tasks as a bullet list for the deduplication section
fn format_existing_tasks(tasks: &[ExistingTask]) -> String {
    if tasks.is_empty() {
        return "No existing tasks".to_string();
    }

    tasks
        .iter()
        .map(|task| {
            let mut line = format!("- [id: {}] \"{}\"", task.id, task.title);
            if let Some(description) = &task.description {
                line.push_str(&format!(": {}", description));
            }
            line.push_str(&format!(
                " (due: {})",
                task.due_date.as_deref().unwrap_or("no deadline")
            ));
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaCatalog;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap()
    }

    fn task(title: &str) -> TaskInput {
        TaskInput { title: title.to_string(), description: None, due_date: None }
    }

    #[test]
    fn test_prioritize_prompt_is_deterministic() {
        let builder = PromptBuilder::new();
        let catalog = SchemaCatalog::new();
        let input = task("Submit tax forms");

        let a = builder.prioritize_task(&input, now(), &catalog.task_priority).unwrap();
        let b = builder.prioritize_task(&input, now(), &catalog.task_priority).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prioritize_prompt_substitutions() {
        let builder = PromptBuilder::new();
        let catalog = SchemaCatalog::new();

        let prompt = builder.prioritize_task(&task("Pay rent"), now(), &catalog.task_priority).unwrap();
        assert!(prompt.contains("- Title: Pay rent"));
        assert!(prompt.contains("No description provided"));
        assert!(prompt.contains("No deadline set"));
        assert!(prompt.contains("90-100: Critical/urgent, deadline within 24h"));
        assert!(prompt.contains("\"priority_score\""));
    }

    #[test]
    fn test_empty_title_gets_placeholder() {
        let builder = PromptBuilder::new();
        let catalog = SchemaCatalog::new();

        let prompt = builder.prioritize_task(&task("  "), now(), &catalog.task_priority).unwrap();
        assert!(prompt.contains("- Title: Untitled Task"));
    }

    #[test]
    fn test_user_text_is_not_html_escaped() {
        let builder = PromptBuilder::new();
        let catalog = SchemaCatalog::new();

        let prompt = builder
            .prioritize_task(&task("Review P&L <draft>"), now(), &catalog.task_priority)
            .unwrap();
        assert!(prompt.contains("Review P&L <draft>"));
    }

    #[test]
    fn test_event_prompt_scoring_bands() {
        let builder = PromptBuilder::new();
        let catalog = SchemaCatalog::new();
        let event = EventInput {
            title: "Coffee with old colleague".to_string(),
            description: None,
            context: Some("informal, no agenda".to_string()),
        };

        let prompt = builder.analyze_event(&event, now(), &catalog.event_analysis).unwrap();
        assert!(prompt.contains("- Time/Context: informal, no agenda"));
        assert!(prompt.contains("30-49: Optional events"));
    }

    #[test]
    fn test_daily_brief_has_no_schema_directive() {
        let builder = PromptBuilder::new();
        let prompt = builder.daily_brief(None, None, "UTC", now()).unwrap();
        assert!(prompt.contains("Tasks: No tasks scheduled"));
        assert!(prompt.contains("Timezone: UTC"));
        assert!(!prompt.contains("JSON"));
    }

    #[test]
    fn test_prep_prompt_event_lines() {
        let builder = PromptBuilder::new();
        let catalog = SchemaCatalog::new();
        let events = vec![CalendarEvent {
            id: "ev-1".to_string(),
            title: "Technical Interview".to_string(),
            description: Some("Onsite, systems round".to_string()),
            start_time: "2026-09-03T10:00:00Z".to_string(),
            category: Some("Work".to_string()),
        }];
        let existing = vec![ExistingTask {
            id: "t-1".to_string(),
            title: "Buy groceries".to_string(),
            description: None,
            due_date: None,
        }];

        let prompt = builder.prep_tasks(&events, &existing, now(), &catalog.prep_tasks).unwrap();
        assert!(prompt.contains("[id: ev-1] \"Technical Interview\" (Work)"));
        assert!(prompt.contains("(2 days away)"));
        assert!(prompt.contains(": Onsite, systems round"));
        assert!(prompt.contains("[id: t-1] \"Buy groceries\" (due: no deadline)"));
    }

    #[test]
    fn test_prep_prompt_skips_unparsable_event() {
        let builder = PromptBuilder::new();
        let catalog = SchemaCatalog::new();
        let events = vec![CalendarEvent {
            id: "bad".to_string(),
            title: "Mystery".to_string(),
            description: None,
            start_time: "sometime soon".to_string(),
            category: None,
        }];

        let prompt = builder.prep_tasks(&events, &[], now(), &catalog.prep_tasks).unwrap();
        assert!(!prompt.contains("Mystery"));
        assert!(prompt.contains("No upcoming events"));
    }
}
