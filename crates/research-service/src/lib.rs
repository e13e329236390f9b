//! Research processing: prompt building and completion forwarding over a ChatClient.

mod service;
pub use research_types::{Operation, ResearchError, ResearchRequest};
pub use service::ResearchService;
