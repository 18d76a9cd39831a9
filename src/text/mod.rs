//! Text Normalization
//!
//! Pure text machinery shared by every form script: the character-policy
//! driven normalizer (realtime and full passes) and the word-level diff
//! detector that feeds the correction-feedback loop.

pub mod diff;
pub mod format;
pub mod policy;

pub use diff::{detect_changes, WordMismatch};
pub use format::{normalize, Mode};
pub use policy::NormalizationPolicy;
