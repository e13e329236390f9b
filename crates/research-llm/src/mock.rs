//! Mock chat client for tests: fixed reply, records prompts, no network.

use research_types::{ChatClient, CompletionError};
use std::sync::Mutex;

/// Chat client that returns a fixed result and remembers every prompt it was sent.
pub struct MockChatClient {
    reply: Result<String, CompletionError>,
    prompts: Mutex<Vec<String>>,
}

impl MockChatClient {
    /// Always answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with `err`.
    pub fn failing(err: CompletionError) -> Self {
        Self {
            reply: Err(err),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone()
    }
}
