//! Word-Diff Detector
//!
//! Aligns two whitespace-split word sequences position by position and
//! reports in-place substitutions. Words past the shorter sequence's end
//! (insertions and deletions) are deliberately ignored: the feedback loop
//! only cares about word-for-word corrections.

/// A word changed in place between the original and the edited value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMismatch {
    /// Zero-based word position shared by both sequences.
    pub position: usize,
    /// Word from the original value.
    pub original: String,
    /// Word from the current value.
    pub corrected: String,
}

/// Detect positional word substitutions between two values.
///
/// Pure and deterministic; mismatches come back in increasing position order.
pub fn detect_changes(original: &str, current: &str) -> Vec<WordMismatch> {
    if original.is_empty() || current.is_empty() || original == current {
        return Vec::new();
    }

    original
        .split_whitespace()
        .zip(current.split_whitespace())
        .enumerate()
        .filter(|(_, (old_word, new_word))| old_word != new_word)
        .map(|(position, (old_word, new_word))| WordMismatch {
            position,
            original: old_word.to_string(),
            corrected: new_word.to_string(),
        })
        .collect()
}
