//! Error Types
//!
//! Errors raised by the host-side collaborators. The engine itself never
//! propagates these to the caller of a form event: every external failure is
//! caught at the call site and degraded to a no-op (plus a log line or a
//! user-visible notification where that is useful).

use thiserror::Error;

/// Failures surfaced by collaborator implementations.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Automation settings unavailable: {0}")]
    SettingsUnavailable(String),

    #[error("Dictionary write failed: {0}")]
    DictionaryWrite(String),

    #[error("Dictionary lookup failed: {0}")]
    DictionaryLookup(String),

    #[error("Record reload failed: {0}")]
    RecordReload(String),
}

/// Result type alias for collaborator calls
pub type Result<T> = std::result::Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = HostError::SettingsUnavailable("network down".to_string());
        assert_eq!(
            err.to_string(),
            "Automation settings unavailable: network down"
        );

        let err = HostError::DictionaryWrite("storage offline".to_string());
        assert_eq!(err.to_string(), "Dictionary write failed: storage offline");
    }

    #[test]
    fn test_result_alias_round_trips() {
        fn reload() -> Result<()> {
            Err(HostError::RecordReload("doc vanished".to_string()))
        }
        assert!(reload().is_err());
    }
}
