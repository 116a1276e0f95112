//! Eligibility filter for candidate words

/// Shortest eligible word, in characters
pub const MIN_WORD_LEN: usize = 7;

/// Longest eligible word, in characters
pub const MAX_WORD_LEN: usize = 9;

/// Letters that disqualify a word
pub const FORBIDDEN_CHARS: [char; 4] = ['ä', 'ö', 'ü', 'ß'];

/// Whether a single word may be handed out as a puzzle.
///
/// Length is counted in Unicode scalar values, not bytes. The forbidden
/// letter check is case-sensitive against the lowercase forms.
pub fn is_eligible(word: &str) -> bool {
    let len = word.chars().count();
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) && !word.contains(&FORBIDDEN_CHARS[..])
}

/// Keep the eligible words, preserving input order.
pub fn filter_words(words: &[String]) -> Vec<String> {
    words.iter().filter(|w| is_eligible(w)).cloned().collect()
}
