pub mod activities;
pub mod matching;
pub mod models;
pub mod store;

pub use matching::{EvidenceMatcher, WordOverlapMatcher};
pub use store::AnalysisStore;
