//! Namewright LLM Provider Layer
//!
//! Pluggable LLM provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `namewright-domain`. Every provider exposes the same blocking interface;
//! network providers drive their HTTP calls on a private runtime.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//! - `OllamaProvider`: Local Ollama API integration
//!
//! `ProviderSettings` builds any of them from configuration.
//!
//! # Examples
//!
//! ```
//! use namewright_llm::MockProvider;
//! use namewright_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod ollama;
pub mod openai;
mod settings;

use namewright_domain::traits::{CollaboratorError, LlmProvider as LlmProviderTrait};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use settings::{ConfiguredProvider, ProviderKind, ProviderSettings};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request did not complete in time
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider rejected the credential
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No credential available for a provider that needs one
    #[error("Missing API key for provider '{0}'")]
    MissingCredential(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl CollaboratorError for LlmError {
    fn is_configuration(&self) -> bool {
        matches!(
            self,
            LlmError::MissingCredential(_) | LlmError::Unauthorized(_) | LlmError::ModelNotAvailable(_)
        )
    }
}

/// Run a provider future to completion on a private current-thread runtime
///
/// Must not be called from inside another Tokio runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, LlmError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
    Ok(runtime.block_on(future))
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
/// Responses are chosen in this order: a per-prompt override, the next queued
/// response, then the default response.
///
/// # Examples
///
/// ```
/// use namewright_llm::MockProvider;
/// use namewright_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Queued responses, one per call
/// let provider = MockProvider::default();
/// provider.push_response("first");
/// provider.push_response("second");
/// assert_eq!(provider.generate("a").unwrap(), "first");
/// assert_eq!(provider.generate("b").unwrap(), "second");
/// assert_eq!(provider.generate("c").unwrap(), "Default mock response");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    queue: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            queue: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), response.into());
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), "ERROR".to_string());
    }

    /// Queue a response for the next call without a per-prompt override
    pub fn push_response(&self, response: impl Into<String>) {
        lock(&self.queue).push_back(Ok(response.into()));
    }

    /// Queue a failure for the next call without a per-prompt override
    pub fn push_error(&self, message: impl Into<String>) {
        self.push_failure(LlmError::Communication(message.into()));
    }

    /// Queue a specific error for the next call
    pub fn push_failure(&self, error: LlmError) {
        lock(&self.queue).push_back(Err(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        // Check if we have a specific response for this prompt
        if let Some(response) = lock(&self.responses).get(prompt) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        match lock(&self.queue).pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(error)) => Err(error),
            None => Ok(self.default_response.clone()),
        }
    }
}
