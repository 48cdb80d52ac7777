// HTTP routes
pub mod analyze;
pub mod copilot;
pub mod health;
pub mod root_causes;
pub mod sustainability;

pub use analyze::*;
pub use copilot::*;
pub use health::*;
pub use root_causes::*;
pub use sustainability::*;
