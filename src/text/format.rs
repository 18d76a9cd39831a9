//! Text Formatter
//!
//! The two formatting passes applied to free-text form fields. Both are pure:
//! same input, policy, and mode always produce the same output.
//!
//! A value ending in a space is returned untouched by either pass — that is
//! the signal that the user is mid-word and the cursor must not be disturbed.

use super::policy::NormalizationPolicy;

/// Which formatting pass to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keystroke-time pass: casing only, operates on the text as typed.
    Realtime,
    /// After-pause pass: character whitelist, whitespace collapse, trailing
    /// cleanup, then the same casing rule.
    Full,
}

/// Normalize `text` under `policy`.
pub fn normalize(text: &str, policy: &NormalizationPolicy, mode: Mode) -> String {
    if text.is_empty() {
        return String::new();
    }
    // Mid-typing sentinel.
    if text.ends_with(' ') {
        return text.to_string();
    }
    match mode {
        Mode::Realtime => realtime_pass(text, policy),
        Mode::Full => full_pass(text, policy),
    }
}

/// Casing-only pass over the text as typed. Splits on single spaces and
/// preserves empty segments so runs of spaces survive untouched.
fn realtime_pass(text: &str, policy: &NormalizationPolicy) -> String {
    let mut word_index = 0usize;
    let cased: Vec<String> = text
        .split(' ')
        .map(|word| {
            if word.is_empty() {
                return String::new();
            }
            let out = case_word(word, word_index, policy);
            word_index += 1;
            out
        })
        .collect();
    cased.join(" ")
}

/// Strict pass: whitelist characters, break words out of parentheses,
/// collapse whitespace, apply casing, strip trailing commas and spaces.
fn full_pass(text: &str, policy: &NormalizationPolicy) -> String {
    let filtered: String = text
        .chars()
        .filter(|&ch| {
            ch.is_alphabetic()
                || ch.is_whitespace()
                || (policy.allow_digits && ch.is_ascii_digit())
                || policy.allowed_punctuation.contains(&ch)
        })
        .collect();

    // "Main(2nd)" reads as two words, not one.
    let mut spaced = String::with_capacity(filtered.len() + 4);
    let mut prev: Option<char> = None;
    for ch in filtered.chars() {
        if ch == '(' && prev.is_some_and(|p| !p.is_whitespace()) {
            spaced.push(' ');
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    let cased: Vec<String> = spaced
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| case_word(word, index, policy))
        .collect();

    cased
        .join(" ")
        .trim_end_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

/// The shared word-casing rule.
///
/// Fully upper-case words are taken as acronyms and preserved verbatim; the
/// rest are lowered, then either kept lower (small words off the first
/// position) or capitalized on their first character.
fn case_word(word: &str, index: usize, policy: &NormalizationPolicy) -> String {
    if !policy.capitalize_words {
        return word.to_string();
    }
    if word == word.to_uppercase() {
        return word.to_string();
    }
    let lower = word.to_lowercase();
    if policy.small_words.contains(&lower) && (!policy.capitalize_first_always || index != 0) {
        return lower;
    }
    capitalize_first(&lower)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn address() -> NormalizationPolicy {
        NormalizationPolicy::address_line()
    }

    fn name() -> NormalizationPolicy {
        NormalizationPolicy::plain_name()
    }

    fn name_keep_small_first() -> NormalizationPolicy {
        let mut policy = NormalizationPolicy::plain_name();
        policy.capitalize_first_always = false;
        policy
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("", &name(), Mode::Full), "");
        assert_eq!(normalize("", &name(), Mode::Realtime), "");
    }

    #[test]
    fn test_trailing_space_passthrough() {
        assert_eq!(normalize("New Delhi ", &name(), Mode::Realtime), "New Delhi ");
        assert_eq!(normalize("New Delhi ", &name(), Mode::Full), "New Delhi ");
    }

    #[rstest]
    #[case("jhon smith", "Jhon Smith")]
    #[case("DLF Road", "DLF Road")]
    #[case("usa dlf road", "Usa Dlf Road")]
    #[case("city of the lake", "City of the Lake")]
    fn test_realtime_casing(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input, &name(), Mode::Realtime), expected);
    }

    #[test]
    fn test_realtime_preserves_spacing_as_typed() {
        // No whitespace collapse in the cheap pass.
        assert_eq!(normalize("new  delhi", &name(), Mode::Realtime), "New  Delhi");
    }

    #[test]
    fn test_acronym_preserved_in_full_pass() {
        assert_eq!(normalize("DLF Road", &address(), Mode::Full), "DLF Road");
        assert_eq!(normalize("USA dlf road", &address(), Mode::Full), "USA Dlf Road");
    }

    #[test]
    fn test_small_word_lowering() {
        assert_eq!(
            normalize("city of the lake", &name_keep_small_first(), Mode::Full),
            "City of the Lake"
        );
        assert_eq!(
            normalize("lake of the city", &name_keep_small_first(), Mode::Full),
            "Lake of the City"
        );
    }

    #[test]
    fn test_lone_small_word_first_position() {
        assert_eq!(normalize("the", &name(), Mode::Full), "The");
        assert_eq!(normalize("the", &name_keep_small_first(), Mode::Full), "the");
    }

    #[test]
    fn test_full_pass_strips_disallowed_characters() {
        // Plain-name policy drops digits and stray punctuation.
        assert_eq!(normalize("123 Main st.", &name(), Mode::Full), "Main St");
        // Address policy keeps them.
        assert_eq!(normalize("123 Main st.", &address(), Mode::Full), "123 Main St");
    }

    #[test]
    fn test_full_pass_collapses_whitespace() {
        assert_eq!(normalize("new   delhi\tcity", &address(), Mode::Full), "New Delhi City");
    }

    #[test]
    fn test_full_pass_strips_trailing_commas() {
        assert_eq!(normalize("New Delhi,,", &address(), Mode::Full), "New Delhi");
    }

    #[test]
    fn test_space_inserted_before_parenthesis() {
        assert_eq!(normalize("main(2nd)", &address(), Mode::Full), "Main (2nd)");
        // Already separated: no double space.
        assert_eq!(normalize("main (2nd)", &address(), Mode::Full), "Main (2nd)");
    }

    #[test]
    fn test_code_policy_keeps_casing() {
        assert_eq!(normalize("BATCH-001a", &NormalizationPolicy::code(), Mode::Full), "BATCH-001a");
    }

    #[test]
    fn test_email_policy_passthrough() {
        assert_eq!(
            normalize("John.Smith@example.com", &NormalizationPolicy::email(), Mode::Full),
            "John.Smith@example.com"
        );
    }

    #[test]
    fn test_digit_words_pass_acronym_check() {
        assert_eq!(normalize("42 main road", &address(), Mode::Full), "42 Main Road");
    }

    proptest! {
        #[test]
        fn prop_full_pass_idempotent(s in "[ -~]{0,40}") {
            let policy = address();
            let once = normalize(&s, &policy, Mode::Full);
            let twice = normalize(&once, &policy, Mode::Full);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_full_pass_idempotent_plain_name(s in "[ -~]{0,40}") {
            let policy = name();
            let once = normalize(&s, &policy, Mode::Full);
            let twice = normalize(&once, &policy, Mode::Full);
            prop_assert_eq!(once, twice);
        }
    }
}
