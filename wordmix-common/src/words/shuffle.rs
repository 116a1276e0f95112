//! Letter shuffling

use rand::Rng;

/// Return a uniformly random permutation of the characters of `word`.
///
/// Fisher-Yates over `char`s, so multi-byte letters stay whole. The result
/// may equal the input; callers get no guarantee that the puzzle differs
/// from its solution, only that this becomes unlikely as words get longer.
pub fn shuffle_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }
    chars.into_iter().collect()
}
