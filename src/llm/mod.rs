//! Reasoning gateway
//!
//! Wraps the external LLM behind a single `complete(prompt) -> text` entry
//! point. Provider configuration lives in [`crate::config::LlmConfig`] and is
//! fixed for the life of the process.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod groq;

pub use client::LlmClient;
pub use error::LlmError;
pub use groq::GroqClient;

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config
///
/// Currently only the "groq" provider is supported.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "groq" => {
            debug!("create_client: creating Groq client");
            Ok(Arc::new(GroqClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(LlmError::InvalidResponse(format!(
                "Unknown LLM provider: '{}'. Supported: groq",
                other
            )))
        }
    }
}
