use std::{collections::BTreeMap, fmt::Display};

use crate::{constraint::ConstraintState, dict::Word, filter, strategy::Strategy};

/// A strategy that chases the most frequent letter in each position.
///
/// Each turn the strategy repeatedly takes the (letter, position) pair
/// with the highest count across the unresolved positions, keeps only the
/// candidates with that letter there, and discourages reusing the letter
/// at other positions. A pair that no surviving candidate supports is
/// discarded and the next best pair is tried instead. Once every position
/// settles, the guess is the first surviving candidate in dictionary
/// order.
#[derive(Debug, Clone, Default)]
pub struct ModalLetter;

impl Strategy for ModalLetter {
    fn pick<'a>(
        &self,
        view: Vec<&'a Word>,
        state: &ConstraintState,
        _attempt: usize,
    ) -> Option<&'a Word> {
        select(view, state)
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for ModalLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "letterbot::ModalLetter")
    }
}

/// One (letter, position, count) pair proposed from the frequency tables.
type Proposal = (char, usize, u32);

/// Runs the modal-letter narrowing loop over `view` and returns the first
/// word left standing.
///
/// Selection works on a copy of the tables in `state`; the live round
/// state is never touched.
pub(crate) fn select<'a>(mut view: Vec<&'a Word>, state: &ConstraintState) -> Option<&'a Word> {
    let mut updated: Vec<BTreeMap<char, u32>> = state.tables().to_vec();

    let mut proposal = modal(&updated);
    while let Some((letter, position, count)) = proposal {
        view.retain(|word| word.letter_at(position) == letter);

        // Keep the adopted letter selectable elsewhere only as a last
        // resort, then pin the position to it.
        for table in updated.iter_mut() {
            if let Some(c) = table.get_mut(&letter) {
                *c = 1;
            }
        }
        let mut pinned = BTreeMap::new();
        pinned.insert(letter, count);
        updated[position] = pinned;

        let reduced = filter::tally(view.iter().copied(), updated.len());
        proposal = next_feasible(&mut updated, &reduced);
    }

    view.first().copied()
}

/// Picks the next modal pair that at least one narrowed word supports,
/// zeroing out unsupported pairs as it goes.
fn next_feasible(
    updated: &mut [BTreeMap<char, u32>],
    reduced: &[BTreeMap<char, u32>],
) -> Option<Proposal> {
    loop {
        let (letter, position, count) = modal(updated)?;
        if reduced[position].contains_key(&letter) {
            return Some((letter, position, count));
        }
        updated[position].insert(letter, 0);
    }
}

/// Finds the highest-count (letter, position) pair across the unresolved
/// positions.
///
/// Positions whose table holds at most one letter count as resolved and
/// are skipped. Ties go to the lowest position and then to the earliest
/// letter; zero counts are never proposed.
fn modal(tables: &[BTreeMap<char, u32>]) -> Option<Proposal> {
    let mut best: Option<Proposal> = None;
    for (position, table) in tables.iter().enumerate() {
        if table.len() <= 1 {
            continue;
        }
        for (&letter, &count) in table.iter() {
            let beats = match best {
                Some((_, _, freq)) => count > freq,
                None => count > 0,
            };
            if beats {
                best = Some((letter, position, count));
            }
        }
    }

    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Dictionary;

    fn dict() -> Dictionary {
        Dictionary::new(["CRANE", "SLATE", "TRACE", "GRADE", "CRATE"]).unwrap()
    }

    fn pick<'d>(dict: &'d Dictionary) -> Option<&'d str> {
        let state = ConstraintState::from_dictionary(dict);
        select(dict.iter().collect(), &state).map(|w| &**w)
    }

    #[test]
    fn modal_takes_the_highest_count() {
        let dict = dict();
        let tables = filter::tally(&dict, dict.word_len());
        assert_eq!(modal(&tables), Some(('R', 1, 4)));
    }

    #[test]
    fn modal_skips_resolved_positions_and_zero_counts() {
        let dict = Dictionary::new(["CRATE"]).unwrap();
        let tables = filter::tally(&dict, dict.word_len());
        assert_eq!(modal(&tables), None);

        let mut table = BTreeMap::new();
        table.insert('B', 0);
        table.insert('C', 2);
        let tables = vec![table, BTreeMap::new()];
        assert_eq!(modal(&tables), Some(('C', 0, 2)));
    }

    #[test]
    fn modal_ties_break_toward_the_lowest_position_then_letter() {
        let dict = Dictionary::new(["AB", "BA"]).unwrap();
        let tables = filter::tally(&dict, dict.word_len());
        assert_eq!(modal(&tables), Some(('A', 0, 1)));
    }

    #[test]
    fn narrowing_settles_on_the_modal_word() {
        assert_eq!(pick(&dict()), Some("CRATE"));
    }

    #[test]
    fn infeasible_pairs_fall_back_to_the_next_best() {
        // The top pair after adopting A at 0 is B at 1, which no surviving
        // word supports; selection must zero it out and recover.
        let dict = Dictionary::new(["ACD", "ACE", "ADE", "FBD", "GBE", "HBD"]).unwrap();
        assert_eq!(pick(&dict), Some("ACD"));
    }

    #[test]
    fn tied_tables_still_produce_a_guess() {
        let dict = Dictionary::new(["AB", "BA"]).unwrap();
        assert_eq!(pick(&dict), Some("AB"));
    }

    #[test]
    fn empty_views_yield_nothing() {
        let state = ConstraintState::from_dictionary(&dict());
        assert_eq!(select(Vec::new(), &state), None);
    }
}
