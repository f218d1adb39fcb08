//! Structured parser for LLM completions
//!
//! Extracts the JSON payload from a raw completion, validates it against a
//! [`Schema`], and decodes it into a typed value. All-or-nothing: a value
//! that fails any check produces a [`SchemaError`] and nothing else; defaults
//! come from the fallback policy at the orchestrator boundary.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::schema::{Schema, SchemaError};

/// Extract the JSON object embedded in a completion
///
/// Models frequently wrap JSON in markdown fences or lead with prose, so this
/// takes the outermost `{` .. `}` span after stripping fences.
pub fn extract_json(text: &str) -> Result<Value, SchemaError> {
    debug!(text_len = text.len(), "extract_json: called");

    let stripped = strip_fences(text);

    let start = stripped.find('{').ok_or(SchemaError::NoJson)?;
    let end = stripped.rfind('}').ok_or(SchemaError::NoJson)?;
    if end < start {
        return Err(SchemaError::NoJson);
    }

    serde_json::from_str(&stripped[start..=end]).map_err(SchemaError::InvalidJson)
}

/// Parse a completion into a typed value under a schema contract
pub fn parse<T: DeserializeOwned>(text: &str, schema: &Schema) -> Result<T, SchemaError> {
    debug!(schema = %schema.name, "parse: called");
    let value = extract_json(text)?;
    let conformed = schema.conform(value)?;
    serde_json::from_value(conformed).map_err(SchemaError::Decode)
}

fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
