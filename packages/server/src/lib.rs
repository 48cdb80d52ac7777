// Return Insights - API Core
//
// Forwards return-order batches to a language-analysis service and an LLM,
// keeps the combined result in memory, and derives root causes, copilot
// answers and sustainability projections from it.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
