/// Autoform - Form Text Normalization & Autocorrect Feedback
///
/// Core library providing debounced field formatting, word-level correction
/// detection, and the private-dictionary feedback loop for business-form
/// hosts. Per-record-type glue supplies field lists, policies, and the
/// collaborator implementations in [`host`].

pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod host;
pub mod logging;
pub mod scheduler;
pub mod session;
pub mod text;

pub use config::{AutomationFlag, AutomationSettings, EngineConfig};
pub use engine::FormEngine;
pub use error::HostError;
pub use feedback::{CorrectionCandidate, FeedbackController, ReviewOutcome};
pub use scheduler::DebounceScheduler;
pub use session::{EditingSession, FieldSnapshot, FieldSpec};
pub use text::{detect_changes, normalize, Mode, NormalizationPolicy, WordMismatch};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
