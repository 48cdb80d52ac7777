pub mod analysis;
pub mod language_signals;
pub mod return_record;
pub mod root_cause;
pub mod sustainability;

pub use analysis::{AnalysisSnapshot, AnalysisStatus, AnalysisSummary, CollaboratorStatus};
pub use language_signals::{LanguageSignals, Sentiment, SentimentEntry};
pub use return_record::{ReturnRecord, ReturnsPayload};
pub use root_cause::{Confidence, RootCause, RootCauseStatus, SentimentBreakdown};
pub use sustainability::SustainabilityMetrics;
