//! LlmClient trait definition

use async_trait::async_trait;

use super::LlmError;

/// Stateless reasoning gateway - each call is independent
///
/// The single entry point to the external LLM. One prompt in, one raw
/// completion out, one network round trip; provider configuration (model,
/// temperature, token budget) is fixed at construction and not overridable
/// per call. No conversation state is kept between calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one prompt and return the raw completion text
    ///
    /// Fails with [`LlmError`] on transport, authentication, or
    /// provider-side rejection. No internal retry: callers that want
    /// recovery apply their fallback policy instead.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Scripted LLM client for unit tests
    pub struct MockLlmClient {
        responses: Mutex<Vec<Result<String, LlmError>>>,
        call_count: AtomicUsize,
    }

    impl MockLlmClient {
        /// Responses are consumed in order; a call past the end panics
        pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
            debug!(response_count = %responses.len(), "MockLlmClient::new: called");
            Self {
                responses: Mutex::new(responses),
                call_count: AtomicUsize::new(0),
            }
        }

        pub fn completing(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        pub fn failing() -> Self {
            Self::new(vec![Err(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            })])
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().expect("mock lock poisoned");
            assert!(!responses.is_empty(), "MockLlmClient ran out of scripted responses");
            responses.remove(0)
        }
    }
}
