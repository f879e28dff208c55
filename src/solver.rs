//! The per-round solving handle.

use crate::{
    constraint::ConstraintState,
    dict::{Dictionary, Word},
    feedback::{Mark, Outcome},
    filter,
    strategy::{ModalLetter, Strategy},
    EngineError, Result,
};

/// One round of guessing over a shared dictionary.
///
/// A solver borrows the dictionary, owns the [`ConstraintState`] for the
/// round, and defers guess selection to a [`Strategy`]. Callers alternate
/// between [`next_guess()`](Self::next_guess()) and
/// [`apply_feedback()`](Self::apply_feedback()) until the secret falls
/// out; [`reset()`](Self::reset()) returns the solver to a fresh round
/// without rebuilding anything.
///
/// Running out of candidates is reported by `next_guess()` as
/// [`EngineError::NoCandidates`]. That can only happen when the feedback
/// was inconsistent with the dictionary, since honest feedback never
/// eliminates the secret itself.
///
/// # Examples
///
/// ```rust
/// use letterbot::{feedback, Dictionary, Solver};
///
/// let dict = Dictionary::new(["CRANE", "SLATE", "TRACE", "GRADE", "CRATE"])?;
/// let secret = dict.words()[0].clone();
///
/// let mut solver = Solver::new_round(&dict);
/// let guess = solver.next_guess()?.clone();
/// let outcome = feedback::score(&secret, &guess);
/// solver.apply_feedback(&guess, &outcome)?;
///
/// // One round of feedback narrowed the field to the secret itself.
/// assert_eq!(solver.candidates(), [&secret]);
/// assert!(solver.is_resolved());
/// #
/// # Ok::<_, letterbot::BotError>(())
/// ```
pub struct Solver<'a> {
    dict: &'a Dictionary,
    strategy: &'a dyn Strategy,
    state: ConstraintState,
    attempt: usize,
}

impl<'a> Solver<'a> {
    /// Starts a round over `dict` with the [`ModalLetter`] strategy.
    pub fn new_round(dict: &'a Dictionary) -> Solver<'a> {
        Self::with_strategy(dict, &ModalLetter)
    }

    /// Starts a round over `dict` with the given strategy.
    pub fn with_strategy(dict: &'a Dictionary, strategy: &'a dyn Strategy) -> Solver<'a> {
        Solver {
            dict,
            strategy,
            state: ConstraintState::from_dictionary(dict),
            attempt: 0,
        }
    }

    /// Produces the next guess.
    ///
    /// The solver filters the dictionary down to the current candidates,
    /// refreshes the frequency tables to count exactly those words, and
    /// asks the strategy to pick one. Returns
    /// [`EngineError::NoCandidates`] if no word is consistent with the
    /// feedback applied so far.
    pub fn next_guess(&mut self) -> Result<&'a Word> {
        let view = filter::candidates(self.dict, &self.state);
        if view.is_empty() {
            return Err(EngineError::NoCandidates.into());
        }
        self.state.refresh(view.iter().copied());

        self.strategy
            .pick(view, &self.state, self.attempt)
            .ok_or_else(|| EngineError::NoCandidates.into())
    }

    /// Feeds one guess's outcome back into the constraints.
    ///
    /// Each mark is applied at its position: green pins the position to
    /// the letter, yellow records the letter as present but not there,
    /// and black removes the letter everywhere. The guess and outcome
    /// must have the same length, and positions past the dictionary's
    /// word length produce [`EngineError::InvalidPosition`].
    pub fn apply_feedback(&mut self, guess: &Word, outcome: &Outcome) -> Result<()> {
        debug_assert_eq!(guess.len(), outcome.len());

        for (position, (letter, mark)) in guess.letters().zip(outcome.iter()).enumerate() {
            match mark {
                Mark::Green => self.state.apply_green(letter, position)?,
                Mark::Yellow => self.state.apply_yellow(letter, position)?,
                Mark::Black => self.state.apply_black(letter),
            }
        }
        self.attempt += 1;

        Ok(())
    }

    /// The words still consistent with the feedback so far, in dictionary
    /// order.
    pub fn candidates(&self) -> Vec<&'a Word> {
        filter::candidates(self.dict, &self.state)
    }

    /// Returns true when the round cannot narrow any further: either a
    /// single candidate remains or every position is pinned to one
    /// letter.
    pub fn is_resolved(&self) -> bool {
        self.state.all_positions_resolved() || self.candidates().len() == 1
    }

    /// Restores the fresh-round state so the solver can be reused.
    pub fn reset(&mut self) {
        self.state.reset(self.dict);
        self.attempt = 0;
    }

    /// The dictionary this solver draws guesses from.
    pub fn dictionary(&self) -> &'a Dictionary {
        self.dict
    }

    /// The live constraint state.
    pub fn state(&self) -> &ConstraintState {
        &self.state
    }
}
