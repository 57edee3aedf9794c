//! Letters and words, the inputs to scoring.

use std::{
    fmt::{self, Display},
    ops::Deref,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, ScoreError, WordError};

/// A single letter of a word.
///
/// Every instance holds exactly one character; construction from a string
/// is validated to guarantee it. Converting from a [`char`] cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Letter(char);

impl Letter {
    /// Creates a new [`Letter`] from a string holding a single character.
    ///
    /// Returns an error if the string is empty or holds more than one
    /// character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordle_score::Letter;
    /// #
    /// let q = Letter::from_str("q")?;
    /// assert_eq!(q.as_char(), 'q');
    ///
    /// assert!(Letter::from_str("").is_err());
    /// assert!(Letter::from_str("qu").is_err());
    /// #
    /// # Ok::<_, wordle_score::ScoreError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(letter: &str) -> Result<Self> {
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Letter(c)),
            _ => Err(WordError::NotOneLetter(letter.to_string()).into()),
        }
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Letter {
    fn from(c: char) -> Self {
        Letter(c)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A word to score or to score against.
///
/// A word is a non-empty, immutable sequence of [`Letter`]s along with the
/// string it was built from. Words are plain values: this crate does not
/// check them against any wordlist, and nothing here assumes a particular
/// length.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

impl Word {
    /// Creates a new [`Word`] from a string.
    ///
    /// Returns an error if the string provided is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::ops::Deref;
    /// # use wordle_score::Word;
    /// #
    /// let earth = Word::from_str("earth")?;
    /// assert_eq!(earth.deref(), "earth");
    /// assert_eq!(earth.len(), 5);
    ///
    /// assert!(Word::from_str("").is_err());
    /// #
    /// # Ok::<_, wordle_score::ScoreError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(word: &str) -> Result<Self> {
        if word.is_empty() {
            return Err(WordError::Empty.into());
        }

        Ok(Word {
            text: word.to_string(),
            letters: word.chars().map(Letter).collect(),
        })
    }

    /// Returns the number of letters in the word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if the word has no letters.
    ///
    /// Construction rejects empty strings, so this always returns false.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the word's letters in order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the letter at `index`.
    ///
    /// Returns an error if `index` is past the end of the word.
    pub fn letter_at(&self, index: usize) -> Result<Letter> {
        self.letters
            .get(index)
            .copied()
            .ok_or(ScoreError::OutOfBounds {
                index,
                len: self.letters.len(),
            })
    }

    /// Returns true if the word contains `letter` anywhere.
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
