//! Classification and history pipeline

pub mod analytics;
pub mod classification;
pub mod interpreter;
pub mod preprocessor;
pub mod session;

pub use analytics::{AnalyticsEngine, DEFAULT_TOP_LABELS};
pub use classification::ClassificationService;
pub use interpreter::PredictionInterpreter;
pub use preprocessor::ImagePreprocessor;
pub use session::{RandomSessionProvider, SessionId, SessionIdentityProvider};
