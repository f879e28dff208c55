//! Scoring guesses against a secret word.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dict::Word;

/// A mark that indicates the correctness of one letter in a guess.
///
/// The [`score()`] function returns one of these per guess position.
/// `Green` means the letter is in the correct position. `Yellow` means
/// the letter occurs in the secret, but not there. `Black` means the
/// secret does not contain that letter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Mark {
    /// The guessed letter is in the secret at this exact position.
    Green,

    /// The guessed letter occurs in the secret, but not at this position.
    Yellow,

    /// The guessed letter does not occur in the secret.
    Black,
}

impl Mark {
    /// The single-character form used by the compact display: `g`, `y`,
    /// or `b`.
    pub fn to_char(self) -> char {
        match self {
            Mark::Green => 'g',
            Mark::Yellow => 'y',
            Mark::Black => 'b',
        }
    }

    /// Parses a mark from its compact character form.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(Mark::Green),
            'y' => Some(Mark::Yellow),
            'b' => Some(Mark::Black),
            _ => None,
        }
    }
}

/// The positional feedback for one whole guess.
///
/// An outcome holds one [`Mark`] per letter of the guess, in order. Its
/// [`Display`] form is the compact string of `g`/`y`/`b` characters, so
/// the outcome for a guess with the middle letter misplaced and the rest
/// wrong prints as `"bbybb"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Outcome {
    marks: Vec<Mark>,
}

impl Outcome {
    /// Creates an outcome from a list of marks.
    pub fn from_marks(marks: Vec<Mark>) -> Self {
        Outcome { marks }
    }

    /// Parses an outcome from its compact string form.
    ///
    /// Returns `None` if any character is not one of `g`, `y`, or `b`.
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .map(Mark::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Outcome::from_marks)
    }

    /// Returns a slice of the marks in guess order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Iterates over the marks in guess order.
    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        self.marks.iter().copied()
    }

    /// Gets the number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns true if the outcome has no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns true if every mark is [`Mark::Green`], meaning the guess
    /// was the secret.
    pub fn is_all_green(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Green)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

/// Scores `guess` against `secret` one position at a time.
///
/// Position `i` is marked [`Mark::Green`] when the letters match,
/// otherwise [`Mark::Yellow`] when the guessed letter occurs anywhere in
/// the secret, otherwise [`Mark::Black`]. Every position is scored
/// independently, so a letter repeated in the guess can earn more yellow
/// marks than the secret has copies of it. Both words must have the same
/// length.
///
/// # Examples
///
/// ```rust
/// use letterbot::{feedback, Word};
///
/// let secret = Word::new("crane")?;
/// let guess = Word::new("trace")?;
/// assert_eq!(feedback::score(&secret, &guess).to_string(), "bggyg");
/// #
/// # Ok::<_, letterbot::BotError>(())
/// ```
pub fn score(secret: &Word, guess: &Word) -> Outcome {
    debug_assert_eq!(secret.len(), guess.len());

    let marks = secret
        .letters()
        .zip(guess.letters())
        .map(|(s, g)| {
            if g == s {
                Mark::Green
            } else if secret.contains_letter(g) {
                Mark::Yellow
            } else {
                Mark::Black
            }
        })
        .collect();

    Outcome { marks }
}
