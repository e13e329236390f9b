//! HTTP surface for the research assistant.

pub mod server;
