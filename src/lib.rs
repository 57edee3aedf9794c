#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod word;
pub use word::{Letter, Word};

pub mod score;
pub use score::{Grade, GradedLetter, ScoredWord};

/// A convenient alias for results returned by this crate.
pub type Result<T, E = ScoreError> = std::result::Result<T, E>;

/// The errors that `wordle_score` can produce.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("word construction failed")]
    Word {
        #[from]
        kind: WordError,
    },

    /// The secret and the guess passed to
    /// [`ScoredWord::score()`](score::ScoredWord::score()) have different
    /// lengths.
    #[error("cannot score a {guess}-letter guess against a {secret}-letter secret")]
    LengthMismatch { secret: usize, guess: usize },

    /// A positional lookup went past the end of a word.
    #[error("the index {index} is out of bounds for a word of {len} letters")]
    OutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum WordError {
    /// The string provided when constructing a [`Letter`] does not hold
    /// exactly one character.
    #[error("a letter is exactly one character, but \"{0}\" was provided")]
    NotOneLetter(String),

    /// The string provided when constructing a [`Word`] is empty.
    #[error("cannot construct a word from an empty string")]
    Empty,
}
