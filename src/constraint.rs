//! Tracking what the feedback so far still allows.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    dict::{Dictionary, Word},
    filter, EngineError, Result,
};

/// The constraints accumulated over one round of guessing.
///
/// The state keeps one frequency table per letter position, mapping each
/// letter that may still occupy that position to how many candidate words
/// put it there, plus the set of letters known to occur in the secret
/// without a confirmed position. Feedback is folded in through the three
/// `apply_*` methods, and [`refresh()`](Self::refresh()) recounts the
/// tables against the current candidates so the frequencies stay honest
/// as the field narrows.
///
/// The state is a plain value: cloning it gives an independent copy, which
/// is how strategies explore hypothetical narrowings without disturbing
/// the live round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintState {
    tables: Vec<BTreeMap<char, u32>>,
    known: BTreeSet<char>,
}

impl ConstraintState {
    /// Creates the state for a fresh round: full-dictionary tallies and no
    /// known letters.
    pub fn from_dictionary(dict: &Dictionary) -> Self {
        ConstraintState {
            tables: filter::tally(dict, dict.word_len()),
            known: BTreeSet::new(),
        }
    }

    /// Restores the fresh-round state for the same dictionary.
    pub fn reset(&mut self, dict: &Dictionary) {
        *self = Self::from_dictionary(dict);
    }

    /// Gets the number of letter positions tracked.
    pub fn word_len(&self) -> usize {
        self.tables.len()
    }

    /// Returns the per-position frequency tables.
    pub fn tables(&self) -> &[BTreeMap<char, u32>] {
        &self.tables
    }

    /// Returns the letters known to occur in the secret but not yet
    /// pinned to a position.
    pub fn known_letters(&self) -> &BTreeSet<char> {
        &self.known
    }

    /// Records that `letter` does not occur in the secret at all.
    ///
    /// The letter is removed from every position's table.
    pub fn apply_black(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        for table in &mut self.tables {
            table.remove(&letter);
        }
    }

    /// Records that `letter` occurs somewhere in the secret, but not at
    /// `position`.
    pub fn apply_yellow(&mut self, letter: char, position: usize) -> Result<()> {
        let letter = letter.to_ascii_uppercase();
        self.table_mut(position)?.remove(&letter);
        self.known.insert(letter);
        Ok(())
    }

    /// Records that the secret has exactly `letter` at `position`.
    ///
    /// The position's table collapses to that single letter.
    pub fn apply_green(&mut self, letter: char, position: usize) -> Result<()> {
        let letter = letter.to_ascii_uppercase();
        let table = self.table_mut(position)?;
        table.clear();
        table.insert(letter, 1);
        Ok(())
    }

    /// Replaces the frequency tables with tallies of `view`, keeping the
    /// known letters.
    ///
    /// Call this after filtering so that the counts describe the words
    /// still in play rather than the original dictionary.
    pub fn refresh<'a, I>(&mut self, view: I)
    where
        I: IntoIterator<Item = &'a Word>,
    {
        self.tables = filter::tally(view, self.tables.len());
    }

    /// Returns true once every position's table holds a single letter.
    pub fn all_positions_resolved(&self) -> bool {
        self.tables.iter().all(|table| table.len() == 1)
    }

    fn table_mut(&mut self, position: usize) -> Result<&mut BTreeMap<char, u32>> {
        let len = self.tables.len();
        self.tables
            .get_mut(position)
            .ok_or_else(|| EngineError::InvalidPosition { position, len }.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{BotError, Dictionary};

    fn dict() -> Dictionary {
        Dictionary::new(["CRANE", "SLATE", "TRACE", "GRADE", "CRATE"]).unwrap()
    }

    #[test]
    fn fresh_state_counts_the_dictionary() {
        let state = ConstraintState::from_dictionary(&dict());
        assert_eq!(state.word_len(), 5);
        assert_eq!(state.tables()[0].get(&'C'), Some(&2));
        assert_eq!(state.tables()[1].get(&'R'), Some(&4));
        assert_eq!(state.tables()[2].get(&'A'), Some(&5));
        assert_eq!(state.tables()[4].get(&'E'), Some(&5));
        assert!(state.known_letters().is_empty());
    }

    #[test]
    fn black_removes_a_letter_everywhere() {
        let mut state = ConstraintState::from_dictionary(&dict());
        state.apply_black('t');
        for table in state.tables() {
            assert!(!table.contains_key(&'T'));
        }
    }

    #[test]
    fn yellow_removes_at_one_position_and_records_the_letter() -> crate::Result<()> {
        let mut state = ConstraintState::from_dictionary(&dict());
        state.apply_yellow('t', 3)?;
        assert!(!state.tables()[3].contains_key(&'T'));
        assert!(state.tables()[0].contains_key(&'T'));
        assert!(state.known_letters().contains(&'T'));
        Ok(())
    }

    #[test]
    fn green_collapses_the_position() -> crate::Result<()> {
        let mut state = ConstraintState::from_dictionary(&dict());
        state.apply_green('c', 0)?;
        assert_eq!(state.tables()[0].len(), 1);
        assert_eq!(state.tables()[0].get(&'C'), Some(&1));
        Ok(())
    }

    #[test]
    fn out_of_bounds_positions_error() {
        let mut state = ConstraintState::from_dictionary(&dict());
        let res = state.apply_yellow('A', 9);
        assert!(matches!(
            res,
            Err(BotError::Engine {
                kind: EngineError::InvalidPosition { position: 9, len: 5 }
            })
        ));
        assert!(state.apply_green('A', 5).is_err());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let dict = dict();
        let mut state = ConstraintState::from_dictionary(&dict);
        let initial = state.clone();

        state.apply_black('E');
        state.apply_green('S', 0).unwrap();
        state.apply_yellow('R', 2).unwrap();
        assert_ne!(state, initial);

        state.reset(&dict);
        assert_eq!(state, initial);

        // A second reset changes nothing.
        state.reset(&dict);
        assert_eq!(state, initial);
    }

    #[test]
    fn refresh_counts_only_the_view() {
        let dict = dict();
        let mut state = ConstraintState::from_dictionary(&dict);
        state.apply_yellow('T', 0).unwrap();

        let view: Vec<_> = dict.iter().take(2).collect();
        state.refresh(view.iter().copied());
        assert_eq!(state.tables()[0].get(&'C'), Some(&1));
        assert_eq!(state.tables()[0].get(&'S'), Some(&1));
        assert_eq!(state.tables()[0].get(&'T'), None);
        // Known letters survive the recount.
        assert!(state.known_letters().contains(&'T'));
    }
}
