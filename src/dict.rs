//! Words and the dictionaries they live in.

use std::{fmt::Display, io::BufRead, ops::Deref, slice};

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DictionaryError, Result};

/// A single guessable word.
///
/// This struct represents one word of a [`Dictionary`], and its
/// construction is validated so that every instance is a non-empty string
/// of ASCII letters. Words are normalized to uppercase, so two instances
/// built from `"crane"` and `"CRANE"` compare equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Word {
    text: Box<str>,
}

impl Word {
    /// Creates a new [`Word`] from a string of ASCII letters.
    ///
    /// Returns an error if the string is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::ops::Deref;
    /// use letterbot::Word;
    ///
    /// let crane = Word::new("crane")?;
    /// assert_eq!(crane.deref(), "CRANE");
    ///
    /// assert!(Word::new("cr4ne").is_err());
    /// #
    /// # Ok::<_, letterbot::BotError>(())
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DictionaryError::NotAlphabetic(text.to_string()).into());
        }

        Ok(Word {
            text: text.to_ascii_uppercase().into_boxed_str(),
        })
    }

    /// Gets the number of letters in the word.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the word has no letters.
    ///
    /// Validation rejects empty strings, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Gets the letter at `position`.
    ///
    /// Panics if `position` is not less than [`len()`](Self::len()).
    pub fn letter_at(&self, position: usize) -> char {
        self.text.as_bytes()[position] as char
    }

    /// Iterates over the letters of the word in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Returns true if `letter` occurs anywhere in the word.
    pub fn contains_letter(&self, letter: char) -> bool {
        self.text.contains(letter)
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// An ordered list of unique words sharing one length.
///
/// A dictionary is loaded once and then shared read-only by everything
/// else: the solver borrows it for candidate filtering, and the
/// [test harness](crate::Harness) draws its secrets from it. The order
/// words were provided in is preserved, and repeated words keep their
/// first position.
///
/// # Examples
///
/// ```rust
/// use letterbot::Dictionary;
///
/// let dict = Dictionary::new(["crane", "slate", "crane"])?;
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.word_len(), 5);
/// assert_eq!(&*dict.words()[0], "CRANE");
/// #
/// # Ok::<_, letterbot::BotError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Dictionary {
    words: Vec<Word>,
    word_len: usize,
}

impl Dictionary {
    /// Builds a dictionary from anything that yields word strings.
    ///
    /// Every word is validated and normalized as by [`Word::new()`], and
    /// all words must have the same length. Returns an error if the list
    /// is empty, if a word fails validation, or if lengths are mixed.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|s| Word::new(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let words: Vec<Word> = words.into_iter().unique().collect();

        let word_len = match words.first() {
            Some(word) => word.len(),
            None => return Err(DictionaryError::Empty.into()),
        };
        if let Some(word) = words.iter().find(|w| w.len() != word_len) {
            return Err(DictionaryError::WrongLength {
                word: word.to_string(),
                expected: word_len,
                found: word.len(),
            }
            .into());
        }

        Ok(Dictionary { words, word_len })
    }

    /// Reads a dictionary from a word list, one word per line.
    ///
    /// Blank lines are skipped and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::io::Cursor;
    /// use letterbot::Dictionary;
    ///
    /// let dict = Dictionary::from_reader(Cursor::new("crane\nslate\n\ntrace\n"))?;
    /// assert_eq!(dict.len(), 3);
    /// #
    /// # Ok::<_, letterbot::BotError>(())
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(DictionaryError::Io)?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                words.push(trimmed.to_string());
            }
        }

        Self::new(words)
    }

    /// Gets the length shared by every word in the dictionary.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Gets the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary has no words.
    ///
    /// Construction rejects empty word lists, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns a slice of the words in dictionary order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterates over the words in dictionary order.
    pub fn iter(&self) -> slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Returns true if `text` names a word in the dictionary.
    ///
    /// The comparison is case-insensitive, matching the normalization
    /// done by [`Word::new()`].
    pub fn contains(&self, text: &str) -> bool {
        let text = text.to_ascii_uppercase();
        self.words.iter().any(|w| **w == *text)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
