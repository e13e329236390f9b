//! ChatClient trait and error types.

use async_trait::async_trait;

/// Chat completion capability: prompt text in, generated text out.
///
/// Implementations own transport, authentication, and response parsing. Callers
/// receive their errors unchanged.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as a single user message and return the reply content.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[async_trait]
impl<T: ChatClient + ?Sized> ChatClient for std::sync::Arc<T> {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        (**self).complete(prompt).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("completion error: {0}")]
    Other(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("empty response")]
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    #[error("Unknown operation: {0}")]
    InvalidOperation(String),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}
