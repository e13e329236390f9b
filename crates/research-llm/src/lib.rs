//! Chat completion clients: Ollama and OpenAI-compatible.

mod backend;
#[cfg(feature = "test-util")]
pub mod mock;
pub mod ollama;
pub mod openai;

pub use backend::{ChatBackend, ConfigError, LlmConfig};
pub use ollama::OllamaChatClient;
pub use openai::OpenAiChatClient;
pub use research_types::{ChatClient, CompletionError};

#[cfg(feature = "test-util")]
pub use mock::MockChatClient;
