//! daypilot - LLM-backed insights for personal productivity
//!
//! The core turns tasks and calendar events into prioritization scores,
//! meeting analyses, workload recommendations, a morning brief, and
//! preparatory tasks. One external reasoning call per insight, a schema
//! contract on every structured completion, and a static fallback whenever
//! the gateway or its output lets the caller down. Date arithmetic and
//! deduplication are deterministic and local; the LLM never gets the final
//! word on either.

pub mod config;
pub mod dedup;
pub mod domain;
pub mod engine;
pub mod fallback;
pub mod llm;
pub mod parser;
pub mod prompts;
pub mod schema;
pub mod temporal;

pub use config::Config;
pub use engine::InsightEngine;
