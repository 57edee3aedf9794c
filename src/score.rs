//! Grading a guess against a secret word.

use std::fmt::{self, Display};

use itertools::Itertools;
#[cfg(feature = "fancy")]
use owo_colors::{OwoColorize, Stream};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Letter, Result, ScoreError, Word};

/// A grade that indicates the correctness of one letter in a guess.
///
/// [`ScoredWord::score()`] produces one of these per guessed letter, in
/// guess order. `Correct` means that the letter is in the correct
/// position. `Almost` means that the letter is in the secret, but not in
/// that position. `Incorrect` means that the secret has no unclaimed
/// occurrence of the letter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Grade {
    /// A grade that indicates the letter guessed is in the correct position.
    Correct,

    /// A grade that indicates the letter guessed is in the secret, but not there.
    Almost,

    /// A grade that indicates no unclaimed occurrence of the letter remains.
    Incorrect,
}

/// One letter of a guess together with its grade.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct GradedLetter {
    letter: Letter,
    grade: Grade,
}

impl GradedLetter {
    /// Returns the guessed letter.
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// Returns the grade the letter received.
    pub fn grade(self) -> Grade {
        self.grade
    }

    /// Returns true if the letter graded [`Grade::Correct`].
    pub fn is_correct(self) -> bool {
        self.grade == Grade::Correct
    }

    /// Returns true if the letter graded [`Grade::Almost`].
    pub fn is_almost(self) -> bool {
        self.grade == Grade::Almost
    }

    /// Returns true if the letter graded [`Grade::Incorrect`].
    pub fn is_incorrect(self) -> bool {
        self.grade == Grade::Incorrect
    }
}

/// A guess graded against a secret word.
///
/// This struct pairs the guessed [`Word`] with one [`Grade`] per position,
/// in guess order. It is produced by [`score()`](ScoredWord::score()) and
/// read-only afterward.
///
/// In the case that a guess contains two or more of the same letter,
/// the following is true:
///
/// 1. All of those letters in the correct position grade
///    [`Grade::Correct`].
/// 2. No more copies of [`Grade::Correct`] and [`Grade::Almost`] together
///    are produced than the copies of that letter in the secret. For
///    instance, if the secret is `sober` and the guess is `spool`, the
///    first `o` grades [`Grade::Almost`] and the second
///    [`Grade::Incorrect`]. For the guess `soaks`, the first `s` grades
///    [`Grade::Correct`] and the second [`Grade::Incorrect`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ScoredWord {
    word: Word,
    grades: Vec<Grade>,
}

impl ScoredWord {
    /// Grades `guess` against `secret`, letter by letter.
    ///
    /// Both words must have the same length; a mismatch returns an error
    /// rather than a truncated grading. The grades are in guess order, so
    /// the first element corresponds to the first letter of the guess, the
    /// second to the second letter, etc.
    ///
    /// Correct positions claim their letters before any misplaced letter
    /// does, regardless of where they sit in the word; the remaining
    /// occurrences of each letter are then claimed left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_score::{Grade::*, ScoredWord, Word};
    ///
    /// let secret = Word::from_str("earth")?;
    /// let guess = Word::from_str("ratio")?;
    ///
    /// let scored = ScoredWord::score(&secret, &guess)?;
    /// assert_eq!(scored.grades(), [Almost, Correct, Almost, Incorrect, Incorrect]);
    /// assert!(!scored.is_all_correct());
    ///
    /// // Words must be the same length to score.
    /// let short = Word::from_str("ear")?;
    /// assert!(ScoredWord::score(&secret, &short).is_err());
    /// #
    /// # Ok::<_, wordle_score::ScoreError>(())
    /// ```
    pub fn score(secret: &Word, guess: &Word) -> Result<Self> {
        use std::cmp::Ordering;

        if secret.len() != guess.len() {
            return Err(ScoreError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let mut used = Vec::new();
        let mut grades = vec![Grade::Incorrect; guess.len()];

        // go through correct letters first, since those get priority
        for (i, (guess_letter, secret_letter)) in guess
            .letters()
            .iter()
            .copied()
            .zip(secret.letters().iter().copied())
            .enumerate()
            .sorted_unstable_by(|&(a_i, (a_guess, a_secret)), &(b_i, (b_guess, b_secret))| {
                let a_correct = a_guess == a_secret;
                let b_correct = b_guess == b_secret;
                match a_correct.cmp(&b_correct).reverse() {
                    Ordering::Equal => a_i.cmp(&b_i),
                    other => other,
                }
            })
        {
            if guess_letter == secret_letter {
                used.push(guess_letter);
                grades[i] = Grade::Correct;
            } else {
                let budget = secret
                    .letters()
                    .iter()
                    .filter(|&&l| l == guess_letter)
                    .count();
                if budget > 0 && used.iter().filter(|&&l| l == guess_letter).count() < budget {
                    used.push(guess_letter);
                    grades[i] = Grade::Almost;
                }
            }
        }

        Ok(ScoredWord {
            word: guess.clone(),
            grades,
        })
    }

    /// Returns the guessed word this grading is for.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the grades, one per letter of the guess, in guess order.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Returns the number of graded letters.
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Returns true if there are no graded letters.
    ///
    /// Words are never empty, so this always returns false.
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Returns the grade at `index`.
    ///
    /// Returns an error if `index` is past the end of the guess.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_score::{Grade, ScoredWord, Word};
    ///
    /// let secret = Word::from_str("abcde")?;
    /// let guess = Word::from_str("acaaa")?;
    ///
    /// let scored = ScoredWord::score(&secret, &guess)?;
    /// assert_eq!(scored.grade_at(0)?, Grade::Correct);
    /// assert_eq!(scored.grade_at(1)?, Grade::Almost);
    /// assert!(scored.grade_at(5).is_err());
    /// #
    /// # Ok::<_, wordle_score::ScoreError>(())
    /// ```
    pub fn grade_at(&self, index: usize) -> Result<Grade> {
        self.grades
            .get(index)
            .copied()
            .ok_or(ScoreError::OutOfBounds {
                index,
                len: self.grades.len(),
            })
    }

    /// Returns the letter at `index` paired with its grade.
    ///
    /// Returns an error if `index` is past the end of the guess.
    pub fn graded_letter_at(&self, index: usize) -> Result<GradedLetter> {
        Ok(GradedLetter {
            letter: self.word.letter_at(index)?,
            grade: self.grade_at(index)?,
        })
    }

    /// Returns an iterator over the guess's letters paired with their
    /// grades, in guess order.
    pub fn graded_letters(&self) -> impl Iterator<Item = GradedLetter> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.grades.iter().copied())
            .map(|(letter, grade)| GradedLetter { letter, grade })
    }

    /// Returns true if every letter graded [`Grade::Correct`], which
    /// happens exactly when the guess equals the secret.
    pub fn is_all_correct(&self) -> bool {
        self.grades.iter().all(|&grade| grade == Grade::Correct)
    }

    /// Returns true if every letter graded [`Grade::Incorrect`], which
    /// happens exactly when the guess shares no letters with the secret.
    pub fn is_all_incorrect(&self) -> bool {
        self.grades.iter().all(|&grade| grade == Grade::Incorrect)
    }

    /// Renders the guess with one colored character per letter: green for
    /// [`Grade::Correct`], yellow for [`Grade::Almost`], and dimmed for
    /// [`Grade::Incorrect`].
    ///
    /// Colors are only applied when stdout supports them.
    #[cfg(feature = "fancy")]
    pub fn colorized(&self) -> String {
        self.graded_letters()
            .map(|graded| {
                let letter = graded.letter();
                match graded.grade() {
                    Grade::Correct => letter
                        .if_supports_color(Stream::Stdout, |l| l.green())
                        .to_string(),
                    Grade::Almost => letter
                        .if_supports_color(Stream::Stdout, |l| l.yellow())
                        .to_string(),
                    Grade::Incorrect => letter
                        .if_supports_color(Stream::Stdout, |l| l.dimmed())
                        .to_string(),
                }
            })
            .collect()
    }
}

impl Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
