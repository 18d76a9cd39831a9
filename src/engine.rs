//! Form Engine
//!
//! The entry point per-record-type glue talks to. Wires one editing session
//! to its scheduler and feedback controller and maps host form events
//! (load, field change, save, reload) onto them.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::feedback::{CorrectionCandidate, FeedbackController, ReviewOutcome};
use crate::host::{Dictionary, RecordHost, SettingsSource};
use crate::scheduler::DebounceScheduler;
use crate::session::{EditingSession, FieldSpec};

/// One engine per open document. Everything it owns is session-scoped;
/// concurrently open documents get independent engines.
pub struct FormEngine {
    record: Arc<dyn RecordHost>,
    session: EditingSession,
    scheduler: DebounceScheduler,
    feedback: FeedbackController,
}

impl FormEngine {
    pub fn new(
        fields: Vec<FieldSpec>,
        settings: Arc<dyn SettingsSource>,
        record: Arc<dyn RecordHost>,
        dictionary: Arc<dyn Dictionary>,
        config: EngineConfig,
    ) -> Self {
        let scheduler =
            DebounceScheduler::new(settings, Arc::clone(&record), config.debounce_delay());
        let feedback = FeedbackController::new(Arc::clone(&record), dictionary);
        Self {
            record,
            session: EditingSession::new(fields),
            scheduler,
            feedback,
        }
    }

    /// Record loaded, reloaded, or switched to a new one: snapshot original
    /// values and drop all per-session scheduler state.
    pub fn on_record_loaded(&mut self) {
        self.scheduler.reset();
        self.session.capture_originals(self.record.as_ref());
    }

    /// A field's value changed in the host form.
    pub async fn on_field_change(&self, field_id: &str) {
        if !self.session.automation_enabled() {
            return;
        }
        match self.session.field(field_id) {
            Some(spec) => self.scheduler.on_field_change(spec).await,
            None => log::debug!("Change event for unregistered field {field_id}"),
        }
    }

    /// Save is about to run: stop every pending formatting timer so no write
    /// races the persistence, then strip trailing commas and whitespace from
    /// each registered field.
    pub fn before_save(&self) {
        self.scheduler.cancel_all();

        for field in self.session.fields() {
            if let Some(value) = self.record.field_value(&field.field_id) {
                let cleaned = value
                    .trim_end_matches(|c: char| c == ',' || c.is_whitespace())
                    .to_string();
                if cleaned != value {
                    self.record.commit_field_value(&field.field_id, &cleaned);
                }
            }
        }
    }

    /// Save-time correction review; at most one prompt per attempt.
    pub async fn review_on_save(&mut self) -> Option<(CorrectionCandidate, ReviewOutcome)> {
        self.feedback.review(&mut self.session).await
    }

    /// Record-level automation switch (`custom_automate`).
    pub fn set_record_automation(&mut self, enabled: bool) {
        self.session.set_automation_enabled(enabled);
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }
}
