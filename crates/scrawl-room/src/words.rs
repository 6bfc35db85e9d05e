//! The drawing vocabulary.

use rand::Rng;

/// The fixed set of drawable words. Rounds pick uniformly at random;
/// repeats across rounds are allowed.
pub const WORDS: [&str; 5] = ["cat", "car", "house", "tree", "dog"];

/// Picks a word for a new round.
pub fn random_word() -> &'static str {
    WORDS[rand::rng().random_range(0..WORDS.len())]
}
