pub mod analyze;
pub mod copilot;
pub mod load_csv;
pub mod root_causes;

pub use analyze::{analyze_returns, AnalyzeOutcome};
pub use copilot::answer_question;
pub use load_csv::{load_returns_csv, CsvLoadError};
pub use root_causes::derive_root_causes;
