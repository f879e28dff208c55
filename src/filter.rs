//! Deriving the candidate view from a dictionary and a constraint state.

use std::collections::BTreeMap;

use crate::{
    constraint::ConstraintState,
    dict::{Dictionary, Word},
};

/// Returns the words of `dict` consistent with `state`, in dictionary
/// order.
///
/// A word is consistent when the letter at each position still appears in
/// that position's frequency table and every known letter occurs
/// somewhere in the word. This is a pure derivation: it never touches
/// `state`, and the same inputs always produce the same view. An empty
/// view is a legitimate result that callers must handle.
pub fn candidates<'d>(dict: &'d Dictionary, state: &ConstraintState) -> Vec<&'d Word> {
    dict.iter().filter(|word| allows(state, word)).collect()
}

fn allows(state: &ConstraintState, word: &Word) -> bool {
    let positions_ok = word
        .letters()
        .zip(state.tables())
        .all(|(letter, table)| table.contains_key(&letter));

    positions_ok
        && state
            .known_letters()
            .iter()
            .all(|&known| word.contains_letter(known))
}

/// Counts, for each position, how many of `words` put each letter there.
///
/// The result has `word_len` tables even when `words` is empty; the
/// tables are then all empty.
pub fn tally<'a, I>(words: I, word_len: usize) -> Vec<BTreeMap<char, u32>>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut tables = vec![BTreeMap::new(); word_len];
    for word in words {
        for (table, letter) in tables.iter_mut().zip(word.letters()) {
            *table.entry(letter).or_insert(0) += 1;
        }
    }

    tables
}
