//! Host Collaborator Interfaces
//!
//! The engine is a library embedded in a form-editing host. Everything the
//! host owns — the settings record, the in-memory document, dialogs, toasts,
//! the learned-corrections store — is reached through the traits below, so a
//! test (or a second open document) can supply its own implementations
//! without sharing state.

use async_trait::async_trait;

use crate::config::AutomationSettings;
use crate::error::Result;

/// Batched read of the host's automation settings record.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    /// Fetch the current snapshot of every automation flag.
    ///
    /// A failure here is treated by the engine as "everything disabled";
    /// implementations should still return `Err` so the degradation gets
    /// logged rather than silently swallowed.
    async fn automation_settings(&self) -> Result<AutomationSettings>;
}

/// The currently edited record plus the host's user-facing surfaces.
#[async_trait]
pub trait RecordHost: Send + Sync {
    /// Read a field's present in-memory value. `None` when the field is unset.
    fn field_value(&self, field_id: &str) -> Option<String>;

    /// Write a value into the record's in-memory state, observable by the
    /// host's own change detection.
    fn commit_field_value(&self, field_id: &str, value: &str);

    /// Show a yes/no confirmation dialog and await the user's answer.
    async fn confirm(&self, message: &str) -> bool;

    /// Fire-and-forget user-visible toast.
    fn notify(&self, message: &str);

    /// Discard unsaved state and re-fetch the canonical record.
    async fn reload_record(&self) -> Result<()>;
}

/// The private dictionary of learned original → corrected word pairs.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up a learned correction for a word, if one exists.
    async fn lookup(&self, word: &str) -> Result<Option<String>>;

    /// Persist a word pair.
    async fn learn(&self, original: &str, corrected: &str) -> Result<()>;
}
