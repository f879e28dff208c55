use std::fmt::Display;

use crate::{constraint::ConstraintState, dict::Word, strategy::Strategy};

/// A strategy that guesses the first word that could still be correct.
///
/// The `Basic` strategy simply takes the first candidate in dictionary
/// order each turn. It can be configured with an opening word to play
/// first instead, which is used only while it remains a candidate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Basic {
    first_word: Option<Word>,
}

impl Default for Basic {
    fn default() -> Self {
        Basic { first_word: None }
    }
}

impl Basic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the word to open with.
    pub fn first_word(self, word: Word) -> Self {
        Basic {
            first_word: Some(word),
        }
    }

    /// Removes any configured opening word.
    pub fn no_first_word(self) -> Self {
        Basic { first_word: None }
    }
}

impl Strategy for Basic {
    fn pick<'a>(
        &self,
        view: Vec<&'a Word>,
        _state: &ConstraintState,
        attempt: usize,
    ) -> Option<&'a Word> {
        if attempt == 0 {
            if let Some(opener) = &self.first_word {
                if let Some(word) = view.iter().find(|w| **w == opener).copied() {
                    return Some(word);
                }
            }
        }

        view.first().copied()
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Basic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "letterbot::Basic")?;
        if let Some(word) = &self.first_word {
            write!(f, " (start: {})", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Dictionary;

    fn dict() -> Dictionary {
        Dictionary::new(["CRANE", "SLATE", "TRACE", "GRADE", "CRATE"]).unwrap()
    }

    #[test]
    fn picks_the_first_candidate() {
        let dict = dict();
        let state = ConstraintState::from_dictionary(&dict);
        let view: Vec<_> = dict.iter().collect();

        let picked = Basic::new().pick(view, &state, 0).unwrap();
        assert_eq!(&**picked, "CRANE");
    }

    #[test]
    fn honors_the_opening_word() {
        let dict = dict();
        let state = ConstraintState::from_dictionary(&dict);
        let view: Vec<_> = dict.iter().collect();

        let strategy = Basic::new().first_word(Word::new("TRACE").unwrap());
        let picked = strategy.pick(view.clone(), &state, 0).unwrap();
        assert_eq!(&**picked, "TRACE");

        // Only the opening guess uses the configured word.
        let picked = strategy.pick(view, &state, 1).unwrap();
        assert_eq!(&**picked, "CRANE");
    }

    #[test]
    fn ignores_openers_that_are_not_candidates() {
        let dict = dict();
        let state = ConstraintState::from_dictionary(&dict);
        let view: Vec<_> = dict.iter().collect();

        let strategy = Basic::new().first_word(Word::new("QUERY").unwrap());
        let picked = strategy.pick(view, &state, 0).unwrap();
        assert_eq!(&**picked, "CRANE");

        let cleared = strategy.no_first_word();
        assert_eq!(cleared, Basic::new());
    }
}
