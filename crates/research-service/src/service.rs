//! ResearchService: operation prompt + single chat completion.

use research_types::{ChatClient, ResearchError, ResearchRequest};

/// Turns a [`ResearchRequest`] into a prompt and returns the chat client's reply verbatim.
pub struct ResearchService<C> {
    pub client: C,
}

impl<C> ResearchService<C>
where
    C: ChatClient + Send + Sync,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Instruction prefix for the request's operation followed by its content, unaltered.
    pub fn build_prompt(req: &ResearchRequest) -> Result<String, ResearchError> {
        let operation = req.operation()?;
        let prefix = operation.prefix();
        let mut prompt = String::with_capacity(prefix.len() + req.content.len());
        prompt.push_str(prefix);
        prompt.push_str(&req.content);
        Ok(prompt)
    }

    /// Build the prompt and send it to the chat client. An unknown operation fails
    /// before the client is called; client errors are returned as they are.
    pub async fn process_content(&self, req: &ResearchRequest) -> Result<String, ResearchError> {
        let prompt = Self::build_prompt(req)?;
        tracing::debug!(
            operation = %req.operation,
            content_len = req.content.len(),
            "sending research prompt"
        );
        let response = self.client.complete(&prompt).await.map_err(|e| {
            tracing::warn!(operation = %req.operation, error = %e, "completion failed");
            e
        })?;
        Ok(response)
    }
}
