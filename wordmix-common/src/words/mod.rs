//! Word list handling
//!
//! Raw CSV bytes go through [`parser`] and [`filter`] once at startup to
//! build a [`WordBank`]. The bank is immutable afterwards and is shared
//! read-only between request handlers; each draw pairs a random word with a
//! [`shuffle`]d copy of its letters.

pub mod filter;
pub mod parser;
pub mod shuffle;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

pub use filter::{filter_words, is_eligible};
pub use parser::parse_words;
pub use shuffle::shuffle_word;

/// One puzzle handed to a client
///
/// Serializes as `{"Shuffled": "...", "Solution": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Puzzle {
    /// Uppercase permutation of the solution's letters
    pub shuffled: String,
    /// Uppercase original word
    pub solution: String,
}

/// Non-empty set of eligible words
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
    candidates: usize,
}

impl WordBank {
    /// Filter candidate words into a bank.
    ///
    /// Fails with [`Error::NoEligibleWords`] when nothing survives the
    /// filter, so a bank can always serve a word.
    pub fn new(candidates: Vec<String>) -> Result<Self> {
        let total = candidates.len();
        let words = filter_words(&candidates);
        if words.is_empty() {
            return Err(Error::NoEligibleWords { total });
        }

        debug!("Word list filtered: {} of {} candidates eligible", words.len(), total);
        Ok(Self {
            words,
            candidates: total,
        })
    }

    /// Parse a CSV word list and build a bank from it
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        Self::new(parse_words(bytes)?)
    }

    /// Number of eligible words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed bank
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words in the list before filtering
    pub fn candidate_count(&self) -> usize {
        self.candidates
    }

    /// Eligible words in list order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick one eligible word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    /// Pick a word and scramble it
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Puzzle {
        let word = self.choose(rng);
        let shuffled = shuffle_word(word, rng);
        Puzzle {
            shuffled: shuffled.to_uppercase(),
            solution: word.to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const SCENARIO_CSV: &[u8] = "programming\nhäagen\nweather\nabcde\n".as_bytes();

    #[test]
    fn test_bank_holds_only_eligible_words() {
        let bank = WordBank::from_csv(
            "zeppelin\nab\nanagramm\nBäckerei\nchocolate\nprogramming\n".as_bytes(),
        )
        .unwrap();

        assert_eq!(bank.words(), ["zeppelin", "anagramm", "chocolate"]);
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.candidate_count(), 6);
        for word in bank.words() {
            assert!(is_eligible(word), "{} should not be in the bank", word);
        }
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        let result = WordBank::from_csv(b"abc\nprogramming\n");
        assert!(
            matches!(result, Err(Error::NoEligibleWords { total: 2 })),
            "got {:?}",
            result
        );
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let result = WordBank::new(Vec::new());
        assert!(matches!(result, Err(Error::NoEligibleWords { total: 0 })));
    }

    #[test]
    fn test_malformed_csv_is_rejected() {
        let result = WordBank::from_csv(b"weather,1\nsunshine\n");
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[test]
    fn test_scenario_always_draws_weather() {
        let bank = WordBank::from_csv(SCENARIO_CSV).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let puzzle = bank.draw(&mut rng);
            assert_eq!(puzzle.solution, "WEATHER");

            let mut letters: Vec<char> = puzzle.shuffled.chars().collect();
            letters.sort_unstable();
            assert_eq!(letters, ['A', 'E', 'E', 'H', 'R', 'T', 'W']);
        }
    }

    #[test]
    fn test_choose_covers_all_words() {
        let bank = WordBank::from_csv(b"zeppelin\nanagramm\nchocolate\n").unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let seen: HashSet<&str> = (0..200).map(|_| bank.choose(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_puzzle_serializes_with_capitalized_keys() {
        let puzzle = Puzzle {
            shuffled: "RETHAWE".to_string(),
            solution: "WEATHER".to_string(),
        };
        let json = serde_json::to_string(&puzzle).unwrap();
        assert_eq!(json, r#"{"Shuffled":"RETHAWE","Solution":"WEATHER"}"#);
    }
}
