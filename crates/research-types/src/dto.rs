//! Request DTO and the operation tag it carries.

use crate::ResearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instruction prepended to content for [`Operation::Summarize`].
pub const SUMMARIZE_PREFIX: &str =
    "Act as an expert researcher. Summarize the following content clearly in 3-4 sentences:\n\n";

/// Instruction prepended to content for [`Operation::Suggest`].
pub const SUGGEST_PREFIX: &str = "Act as a domain expert. Based on the following content, suggest related topics and recommend further readings. Use markdown format with clear headings and bullet points:\n\n";

/// Process request posted by the client.
///
/// `operation` stays a plain string on the wire so that unknown values reach
/// [`Operation::from_str`] and are reported as `InvalidOperation` with the
/// offending value instead of a generic JSON rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub operation: String,
}

impl ResearchRequest {
    pub fn new(operation: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            operation: operation.into(),
        }
    }

    /// Parse the operation tag.
    pub fn operation(&self) -> Result<Operation, ResearchError> {
        self.operation.parse()
    }
}

/// Operation selecting which fixed instruction is prepended to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Summarize,
    Suggest,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Suggest => "suggest",
        }
    }

    /// Instruction prefix for this operation.
    pub fn prefix(&self) -> &'static str {
        match self {
            Operation::Summarize => SUMMARIZE_PREFIX,
            Operation::Suggest => SUGGEST_PREFIX,
        }
    }
}

impl FromStr for Operation {
    type Err = ResearchError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarize" => Ok(Operation::Summarize),
            "suggest" => Ok(Operation::Suggest),
            other => Err(ResearchError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
