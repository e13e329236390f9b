//! Core types and traits for the research assistant API.
//!
//! The request DTO matches the JSON the browser extension posts to
//! `/api/research/process`.

mod dto;
mod traits;

pub use dto::*;
pub use traits::*;
