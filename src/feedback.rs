//! Correction Feedback Controller
//!
//! Save-time review of manual edits. Compares every field's load-time value
//! against its live value, surfaces the first word-level correction to the
//! user, and on acceptance teaches it to the private dictionary. The review
//! is advisory: no outcome here can fail or block the host's save.

use std::sync::Arc;

use crate::host::{Dictionary, RecordHost};
use crate::session::EditingSession;
use crate::text::detect_changes;

/// The single correction surfaced for one save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionCandidate {
    pub field_id: String,
    pub original_word: String,
    pub corrected_word: String,
}

/// What the user decided about a surfaced correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Accepted and persisted to the dictionary.
    Learned,
    /// Accepted, but the dictionary write failed.
    LearnFailed,
    /// Declined.
    Skipped,
}

/// Orchestrates the detect → prompt → learn loop.
pub struct FeedbackController {
    record: Arc<dyn RecordHost>,
    dictionary: Arc<dyn Dictionary>,
}

impl FeedbackController {
    pub fn new(record: Arc<dyn RecordHost>, dictionary: Arc<dyn Dictionary>) -> Self {
        Self { record, dictionary }
    }

    /// Review every non-suppressed field and prompt for at most one
    /// correction.
    ///
    /// Returns the surfaced candidate and the user's decision, or `None`
    /// when nothing differed. The candidate's field is suppressed before the
    /// prompt is shown, so a save retry in the same session cannot re-prompt
    /// for it regardless of the answer.
    pub async fn review(
        &self,
        session: &mut EditingSession,
    ) -> Option<(CorrectionCandidate, ReviewOutcome)> {
        let candidate = self.first_candidate(session)?;
        session.suppress(&candidate.field_id);

        let message = format!(
            "You corrected \"{}\" to \"{}\". Do you want to add it to your Private Dictionary?",
            candidate.original_word, candidate.corrected_word
        );

        let outcome = if self.record.confirm(&message).await {
            self.learn(session, &candidate).await
        } else {
            self.record.notify("Skipped adding to dictionary.");
            ReviewOutcome::Skipped
        };

        Some((candidate, outcome))
    }

    /// First mismatch across all fields, in field-declaration order then
    /// word-position order.
    fn first_candidate(&self, session: &EditingSession) -> Option<CorrectionCandidate> {
        session
            .snapshots(self.record.as_ref())
            .into_iter()
            .filter(|snapshot| !session.is_suppressed(&snapshot.field_id))
            .find_map(|snapshot| {
                detect_changes(&snapshot.original_value, &snapshot.current_value)
                    .into_iter()
                    .next()
                    .map(|mismatch| CorrectionCandidate {
                        field_id: snapshot.field_id,
                        original_word: mismatch.original,
                        corrected_word: mismatch.corrected,
                    })
            })
    }

    async fn learn(
        &self,
        session: &mut EditingSession,
        candidate: &CorrectionCandidate,
    ) -> ReviewOutcome {
        match self
            .dictionary
            .learn(&candidate.original_word, &candidate.corrected_word)
            .await
        {
            Ok(()) => {
                self.record.notify("Word added to Private Dictionary!");
                // Re-fetch the canonical record so original values reset for
                // the next session.
                match self.record.reload_record().await {
                    Ok(()) => session.capture_originals(self.record.as_ref()),
                    Err(e) => log::warn!("Record reload after learning failed: {e}"),
                }
                ReviewOutcome::Learned
            }
            Err(e) => {
                log::warn!("Dictionary write failed: {e}");
                self.record
                    .notify("Could not add the word to your Private Dictionary.");
                ReviewOutcome::LearnFailed
            }
        }
    }
}
