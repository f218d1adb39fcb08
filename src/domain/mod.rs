//! Domain types for tasks, events, and generated insights
//!
//! All wire field names match the JSON the reasoning service is instructed to
//! produce, so these types deserialize directly from validated completions.

mod event;
mod prep;
mod priority;
mod recommendation;
mod task;

pub use event::{CalendarEvent, DailyBrief, EventAnalysis, EventInput};
pub use prep::{PrepTask, PrepTaskBatch};
pub use priority::{Category, PriorityLevel};
pub use recommendation::{Recommendation, RecommendationKind};
pub use task::{ExistingTask, PriorityResult, TaskInput};
