//! Backend selection from environment configuration.

use crate::{ollama, openai, OllamaChatClient, OpenAiChatClient};
use async_trait::async_trait;
use research_types::{ChatClient, CompletionError};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Which chat backend to talk to, with its connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmConfig {
    Ollama {
        base_url: String,
        model: String,
        timeout: Duration,
    },
    OpenAi {
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    },
}

impl LlmConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable           | Default                                      |
    /// |--------------------|----------------------------------------------|
    /// | `LLM_PROVIDER`     | `ollama` (or `openai`)                       |
    /// | `OLLAMA_BASE_URL`  | `http://localhost:11434`                     |
    /// | `OLLAMA_MODEL`     | `mistral`                                    |
    /// | `LLM_API_URL`      | `https://api.openai.com/v1/chat/completions` |
    /// | `LLM_API_KEY`      | required for `openai`                        |
    /// | `LLM_MODEL`        | `gpt-4o-mini`                                |
    /// | `LLM_TIMEOUT_SECS` | `120`                                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = match lookup("LLM_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidVar {
                    var: "LLM_TIMEOUT_SECS",
                    value: v,
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let provider = lookup("LLM_PROVIDER").unwrap_or_else(|| "ollama".to_string());
        match provider.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(LlmConfig::Ollama {
                base_url: lookup("OLLAMA_BASE_URL")
                    .unwrap_or_else(|| ollama::DEFAULT_BASE_URL.to_string()),
                model: lookup("OLLAMA_MODEL").unwrap_or_else(|| ollama::DEFAULT_MODEL.to_string()),
                timeout,
            }),
            "openai" => Ok(LlmConfig::OpenAi {
                api_url: lookup("LLM_API_URL")
                    .unwrap_or_else(|| openai::DEFAULT_API_URL.to_string()),
                api_key: lookup("LLM_API_KEY").ok_or(ConfigError::MissingVar("LLM_API_KEY"))?,
                model: lookup("LLM_MODEL").unwrap_or_else(|| openai::DEFAULT_MODEL.to_string()),
                timeout,
            }),
            _ => Err(ConfigError::InvalidVar {
                var: "LLM_PROVIDER",
                value: provider,
            }),
        }
    }
}

/// Chat client wrapper over the supported backends.
#[derive(Debug)]
pub enum ChatBackend {
    Ollama(OllamaChatClient),
    OpenAi(OpenAiChatClient),
}

impl ChatBackend {
    pub fn from_config(config: LlmConfig) -> Self {
        match config {
            LlmConfig::Ollama {
                base_url,
                model,
                timeout,
            } => ChatBackend::Ollama(OllamaChatClient::new(base_url, model, timeout)),
            LlmConfig::OpenAi {
                api_url,
                api_key,
                model,
                timeout,
            } => ChatBackend::OpenAi(OpenAiChatClient::new(api_url, api_key, model, timeout)),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        LlmConfig::from_env().map(Self::from_config)
    }

    pub fn provider(&self) -> &'static str {
        match self {
            ChatBackend::Ollama(_) => "ollama",
            ChatBackend::OpenAi(_) => "openai",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            ChatBackend::Ollama(c) => c.model(),
            ChatBackend::OpenAi(c) => c.model(),
        }
    }
}

#[async_trait]
impl ChatClient for ChatBackend {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        match self {
            ChatBackend::Ollama(client) => client.complete(prompt).await,
            ChatBackend::OpenAi(client) => client.complete(prompt).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_to_local_ollama() {
        let cfg = LlmConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            cfg,
            LlmConfig::Ollama {
                base_url: "http://localhost:11434".to_string(),
                model: "mistral".to_string(),
                timeout: Duration::from_secs(120),
            }
        );
        let backend = ChatBackend::from_config(cfg);
        assert_eq!(backend.provider(), "ollama");
        assert_eq!(backend.model(), "mistral");
    }

    #[test]
    fn openai_requires_api_key() {
        let err = LlmConfig::from_lookup(lookup(&[("LLM_PROVIDER", "openai")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("LLM_API_KEY")));

        let cfg = LlmConfig::from_lookup(lookup(&[
            ("LLM_PROVIDER", "OpenAI"),
            ("LLM_API_KEY", "sk-1"),
            ("LLM_MODEL", "gpt-4o"),
            ("LLM_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(
            cfg,
            LlmConfig::OpenAi {
                api_url: openai::DEFAULT_API_URL.to_string(),
                api_key: "sk-1".to_string(),
                model: "gpt-4o".to_string(),
                timeout: Duration::from_secs(30),
            }
        );
    }

    #[test]
    fn rejects_unknown_provider_and_bad_timeout() {
        let err = LlmConfig::from_lookup(lookup(&[("LLM_PROVIDER", "bard")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for LLM_PROVIDER: bard");

        let err = LlmConfig::from_lookup(lookup(&[("LLM_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: "LLM_TIMEOUT_SECS", .. }));
    }
}
