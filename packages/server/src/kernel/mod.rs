//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod language;
pub mod test_dependencies;
pub mod traits;

pub use ai::ChatCompletionAI;
pub use deps::ServerDeps;
pub use test_dependencies::{MockAI, MockLanguageService, TestDependencies};
pub use traits::*;
