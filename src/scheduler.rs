//! Debounce/Realtime Scheduler
//!
//! Coordinates the two formatting passes for every registered field: an
//! immediate casing-only pass on each change event, and a full pass after a
//! quiet period. One pending timer per field at a time; a new edit supersedes
//! the old timer, so the full pass always runs against the value present at
//! fire time.
//!
//! The scheduler is owned by one editing-session context and injected where
//! needed — never module-global — so concurrently open documents (and tests)
//! do not share timers or caches.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::AutomationFlag;
use crate::host::{RecordHost, SettingsSource};
use crate::session::FieldSpec;
use crate::text::{normalize, Mode};

/// Resolve one automation flag, treating a failed settings read as disabled.
pub(crate) async fn flag_enabled(settings: &dyn SettingsSource, flag: AutomationFlag) -> bool {
    match settings.automation_settings().await {
        Ok(snapshot) => snapshot.is_enabled(flag),
        Err(e) => {
            log::warn!("Automation check failed, treating {flag:?} as disabled: {e}");
            false
        }
    }
}

#[derive(Default)]
struct SchedulerState {
    /// At most one live timer per field id.
    timers: HashMap<String, JoinHandle<()>>,
    /// Last value the full pass produced (or inspected) per field id.
    last_processed: HashMap<String, String>,
}

/// Per-session timer and last-processed-value coordinator.
pub struct DebounceScheduler {
    settings: Arc<dyn SettingsSource>,
    record: Arc<dyn RecordHost>,
    delay: Duration,
    state: Arc<Mutex<SchedulerState>>,
}

impl DebounceScheduler {
    pub fn new(
        settings: Arc<dyn SettingsSource>,
        record: Arc<dyn RecordHost>,
        delay: Duration,
    ) -> Self {
        Self {
            settings,
            record,
            delay,
            state: Arc::new(Mutex::new(SchedulerState::default())),
        }
    }

    /// Handle one change event for a field.
    ///
    /// Runs the realtime pass immediately; if that rewrites the value, the
    /// commit itself re-triggers the host's change event and no delayed pass
    /// is scheduled for this invocation. Otherwise the full pass is
    /// (re)scheduled after the quiet period.
    pub async fn on_field_change(&self, spec: &FieldSpec) {
        if !flag_enabled(self.settings.as_ref(), spec.flag).await {
            return;
        }

        let current = self.record.field_value(&spec.field_id).unwrap_or_default();
        let realtime = normalize(&current, &spec.policy, Mode::Realtime);
        if realtime != current {
            log::debug!("Realtime pass rewrote {}", spec.field_id);
            self.record.commit_field_value(&spec.field_id, &realtime);
            return;
        }

        self.schedule_full_pass(spec.clone());
    }

    /// Schedule the full pass for a field, superseding any pending timer.
    fn schedule_full_pass(&self, spec: FieldSpec) {
        let settings = Arc::clone(&self.settings);
        let record = Arc::clone(&self.record);
        let state = Arc::clone(&self.state);
        let delay = self.delay;
        let field_id = spec.field_id.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if !flag_enabled(settings.as_ref(), spec.flag).await {
                return;
            }

            // Re-read at fire time; the value may have moved on since
            // scheduling.
            let value = record.field_value(&spec.field_id).unwrap_or_default();
            {
                let state = state.lock().expect("scheduler state poisoned");
                if state.last_processed.get(&spec.field_id).map(String::as_str)
                    == Some(value.as_str())
                {
                    return;
                }
            }

            let formatted = normalize(&value, &spec.policy, Mode::Full);
            state
                .lock()
                .expect("scheduler state poisoned")
                .last_processed
                .insert(spec.field_id.clone(), formatted.clone());

            if formatted != value {
                log::debug!("Full pass rewrote {}", spec.field_id);
                record.commit_field_value(&spec.field_id, &formatted);
            }
        });

        let mut state = self.state.lock().expect("scheduler state poisoned");
        if let Some(previous) = state.timers.insert(field_id, handle) {
            previous.abort();
        }
    }

    /// Cancel every pending timer. Called before the host persists the
    /// record, so a formatting write cannot race the save.
    pub fn cancel_all(&self) {
        let mut state = self.state.lock().expect("scheduler state poisoned");
        for (_, handle) in state.timers.drain() {
            handle.abort();
        }
    }

    /// Cancel timers and forget processed values. Called when the session
    /// resets (reload or new record).
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("scheduler state poisoned");
        for (_, handle) in state.timers.drain() {
            handle.abort();
        }
        state.last_processed.clear();
    }
}

impl Drop for DebounceScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
