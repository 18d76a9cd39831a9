//! Normalization Policies
//!
//! One immutable character/casing policy per field kind. The original form
//! scripts carried several drifted copies of these rules; this module keeps a
//! single canonical set, selected by the glue that registers each field.

use std::collections::{BTreeSet, HashSet};

/// Words kept lower-case inside titles ("City of the Lake").
const SMALL_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "for", "nor", "on", "at", "to", "from", "by", "in",
    "of", "with",
];

/// Character-class and casing policy for one kind of form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationPolicy {
    /// Keep ASCII digits during the full pass.
    pub allow_digits: bool,
    /// Punctuation characters that survive the full pass.
    pub allowed_punctuation: BTreeSet<char>,
    /// Words kept lower-case by the casing rule.
    pub small_words: HashSet<String>,
    /// Capitalize the first word even when it is a small word.
    pub capitalize_first_always: bool,
    /// Apply the word-casing rule at all. Off for fields where input casing
    /// is meaningful (emails, codes).
    pub capitalize_words: bool,
}

impl NormalizationPolicy {
    fn base(allow_digits: bool, punctuation: &str) -> Self {
        Self {
            allow_digits,
            allowed_punctuation: punctuation.chars().collect(),
            small_words: SMALL_WORDS.iter().map(|w| w.to_string()).collect(),
            capitalize_first_always: true,
            capitalize_words: true,
        }
    }

    /// Plain name fields (customer, contact, employee, item, group names):
    /// letters only, title-cased.
    pub fn plain_name() -> Self {
        Self::base(false, "")
    }

    /// Address lines and address-adjacent fields: digits and the small
    /// address punctuation set are meaningful.
    pub fn address_line() -> Self {
        Self::base(true, "#(),/-")
    }

    /// Identifier-like fields (batch names, bank accounts): letters and
    /// digits, casing left exactly as typed.
    pub fn code() -> Self {
        let mut policy = Self::base(true, "-/");
        policy.capitalize_words = false;
        policy
    }

    /// Email-ish fields: keep the address characters, never touch casing.
    pub fn email() -> Self {
        let mut policy = Self::base(true, ".@-_+");
        policy.capitalize_words = false;
        policy
    }
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self::plain_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_rejects_digits() {
        let policy = NormalizationPolicy::plain_name();
        assert!(!policy.allow_digits);
        assert!(policy.allowed_punctuation.is_empty());
        assert!(policy.capitalize_words);
    }

    #[test]
    fn test_address_line_punctuation() {
        let policy = NormalizationPolicy::address_line();
        assert!(policy.allow_digits);
        for ch in "#(),/-".chars() {
            assert!(policy.allowed_punctuation.contains(&ch), "missing {ch}");
        }
    }

    #[test]
    fn test_code_and_email_preserve_casing() {
        assert!(!NormalizationPolicy::code().capitalize_words);
        assert!(!NormalizationPolicy::email().capitalize_words);
    }

    #[test]
    fn test_small_words_present() {
        let policy = NormalizationPolicy::default();
        assert!(policy.small_words.contains("of"));
        assert!(policy.small_words.contains("the"));
        assert!(!policy.small_words.contains("road"));
    }
}
