//! Insight orchestration
//!
//! One public method per use case. Each builds the prompt, makes a single
//! gateway call, parses the completion under the matching schema, and - for
//! everything except the daily brief - degrades to a static fallback on any
//! failure along the way. The daily brief has no meaningful static rendition,
//! so its errors surface to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use eyre::Result;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dedup;
use crate::domain::{
    CalendarEvent, DailyBrief, EventAnalysis, EventInput, ExistingTask, PrepTask, PrepTaskBatch,
    PriorityResult, Recommendation, TaskInput,
};
use crate::fallback;
use crate::llm::{self, LlmClient};
use crate::prompts::PromptBuilder;
use crate::schema::SchemaCatalog;
use crate::{parser, temporal};

/// Envelope the recommendations schema wraps its list in
#[derive(Debug, Deserialize)]
struct RecommendationSheet {
    recommendations: Vec<Recommendation>,
}

/// Envelope the prep-tasks schema wraps its list in
#[derive(Debug, Deserialize)]
struct PrepTaskSheet {
    prep_tasks: Vec<PrepTask>,
}

/// Orchestrates prompt building, gateway calls, parsing, and fallbacks
pub struct InsightEngine {
    llm: Arc<dyn LlmClient>,
    prompts: PromptBuilder,
    schemas: SchemaCatalog,
}

impl InsightEngine {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm, prompts: PromptBuilder::new(), schemas: SchemaCatalog::new() }
    }

    /// Build an engine from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        debug!(provider = %config.llm.provider, "from_config: called");
        let client = llm::create_client(&config.llm)?;
        Ok(Self::new(client))
    }

    /// Prioritize a single task
    ///
    /// Total: any failure degrades to the neutral fallback assessment.
    pub async fn prioritize_task(&self, task: &TaskInput, now: DateTime<Utc>) -> PriorityResult {
        debug!(title = %task.title, "prioritize_task: called");
        match self.try_prioritize_task(task, now).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "prioritize_task: degrading to fallback");
                fallback::task_priority()
            }
        }
    }

    async fn try_prioritize_task(
        &self,
        task: &TaskInput,
        now: DateTime<Utc>,
    ) -> Result<PriorityResult> {
        let prompt = self.prompts.prioritize_task(task, now, &self.schemas.task_priority)?;
        let completion = self.llm.complete(&prompt).await?;
        let result = parser::parse(&completion, &self.schemas.task_priority)?;
        Ok(result)
    }

    /// Analyze a single calendar event
    ///
    /// Total: any failure degrades to the neutral fallback analysis.
    pub async fn analyze_event(&self, event: &EventInput, now: DateTime<Utc>) -> EventAnalysis {
        debug!(title = %event.title, "analyze_event: called");
        match self.try_analyze_event(event, now).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "analyze_event: degrading to fallback");
                fallback::event_analysis()
            }
        }
    }

    async fn try_analyze_event(
        &self,
        event: &EventInput,
        now: DateTime<Utc>,
    ) -> Result<EventAnalysis> {
        let prompt = self.prompts.analyze_event(event, now, &self.schemas.event_analysis)?;
        let completion = self.llm.complete(&prompt).await?;
        let result = parser::parse(&completion, &self.schemas.event_analysis)?;
        Ok(result)
    }

    /// Generate workload recommendations from free-text summaries
    ///
    /// Total: any failure degrades to the two generic fallback
    /// recommendations.
    pub async fn recommendations(
        &self,
        tasks_summary: Option<&str>,
        events_summary: Option<&str>,
        now: DateTime<Utc>,
    ) -> Vec<Recommendation> {
        debug!("recommendations: called");
        match self.try_recommendations(tasks_summary, events_summary, now).await {
            Ok(recs) => recs,
            Err(e) => {
                warn!(error = %e, "recommendations: degrading to fallback");
                fallback::recommendations()
            }
        }
    }

    async fn try_recommendations(
        &self,
        tasks_summary: Option<&str>,
        events_summary: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Recommendation>> {
        let prompt = self.prompts.recommendations(
            tasks_summary,
            events_summary,
            now,
            &self.schemas.recommendations,
        )?;
        let completion = self.llm.complete(&prompt).await?;
        let sheet: RecommendationSheet =
            parser::parse(&completion, &self.schemas.recommendations)?;
        Ok(sheet.recommendations)
    }

    /// Generate the morning brief
    ///
    /// Free text, no schema contract, and no static fallback: a canned brief
    /// would be worse than an honest error, so failures surface.
    pub async fn daily_brief(
        &self,
        tasks_summary: Option<&str>,
        events_summary: Option<&str>,
        timezone: &str,
        now: DateTime<Utc>,
    ) -> Result<DailyBrief> {
        debug!(%timezone, "daily_brief: called");
        let prompt = self.prompts.daily_brief(tasks_summary, events_summary, timezone, now)?;
        let text = self.llm.complete(&prompt).await?;
        Ok(DailyBrief { brief: text.trim().to_string() })
    }

    /// Generate preparatory tasks for upcoming events
    ///
    /// Total: any gateway or parse failure degrades to the empty batch with
    /// all-zero counts; `total_events_analyzed` reflects the event count only
    /// when a completion actually parsed. With no events there is nothing to
    /// reason about, so the gateway is not called at all.
    pub async fn generate_prep_tasks(
        &self,
        events: &[CalendarEvent],
        existing: &[ExistingTask],
        now: DateTime<Utc>,
    ) -> PrepTaskBatch {
        debug!(event_count = events.len(), "generate_prep_tasks: called");
        if events.is_empty() {
            return fallback::prep_tasks();
        }

        match self.try_generate_prep_tasks(events, existing, now).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(error = %e, "generate_prep_tasks: degrading to empty batch");
                fallback::prep_tasks()
            }
        }
    }

    async fn try_generate_prep_tasks(
        &self,
        events: &[CalendarEvent],
        existing: &[ExistingTask],
        now: DateTime<Utc>,
    ) -> Result<PrepTaskBatch> {
        let prompt = self.prompts.prep_tasks(events, existing, now, &self.schemas.prep_tasks)?;
        let completion = self.llm.complete(&prompt).await?;
        let sheet: PrepTaskSheet = parser::parse(&completion, &self.schemas.prep_tasks)?;

        let batch = self.finalize_prep_tasks(sheet.prep_tasks, events, existing, now);
        info!(
            generated = batch.generated_tasks.len(),
            duplicates = batch.duplicates_found.len(),
            "try_generate_prep_tasks: batch complete"
        );
        Ok(batch)
    }

    /// Rebuild the temporal fields of each generated task and classify
    /// duplicates
    ///
    /// The gateway's due dates, levels, and duplicate flags are treated as
    /// suggestions only; the deterministic local computation is what ships.
    /// Tasks referencing unknown events or events outside the 1-7 day window
    /// are dropped one by one.
    fn finalize_prep_tasks(
        &self,
        candidates: Vec<PrepTask>,
        events: &[CalendarEvent],
        existing: &[ExistingTask],
        now: DateTime<Utc>,
    ) -> PrepTaskBatch {
        let by_id: HashMap<&str, &CalendarEvent> =
            events.iter().map(|e| (e.id.as_str(), e)).collect();

        let mut generated = Vec::with_capacity(candidates.len());
        let mut duplicates = Vec::new();

        for mut task in candidates {
            let Some(event) = by_id.get(task.event_id.as_str()) else {
                warn!(event_id = %task.event_id, "finalize_prep_tasks: unknown event id, dropping task");
                continue;
            };

            let start = match temporal::parse_timestamp(&event.start_time) {
                Ok(start) => start,
                Err(e) => {
                    warn!(event_id = %event.id, error = %e, "finalize_prep_tasks: dropping task");
                    continue;
                }
            };

            let days = temporal::days_until(now, start);
            let (level, score_range) = match temporal::prep_priority_band(days) {
                Ok(band) => band,
                Err(e) => {
                    warn!(event_id = %event.id, error = %e, "finalize_prep_tasks: dropping task");
                    continue;
                }
            };
            let due_date = match temporal::prep_due_date(start, days) {
                Ok(date) => date,
                Err(e) => {
                    warn!(event_id = %event.id, error = %e, "finalize_prep_tasks: dropping task");
                    continue;
                }
            };

            task.event_title = event.title.clone();
            task.due_date = due_date;
            task.priority_level = level;
            task.priority_score =
                task.priority_score.clamp(*score_range.start(), *score_range.end());

            let outcome = dedup::classify(&task, existing);
            task.is_duplicate = outcome.is_duplicate;
            task.similar_task_id = outcome.matched_id;
            if task.is_duplicate {
                duplicates.push(task);
            } else {
                generated.push(task);
            }
        }

        let tasks_created = generated.len();
        PrepTaskBatch {
            generated_tasks: generated,
            duplicates_found: duplicates,
            total_events_analyzed: events.len(),
            tasks_created,
        }
    }
}
