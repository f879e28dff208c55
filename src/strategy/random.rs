use std::fmt::Display;

use rand::seq::SliceRandom;

use crate::{constraint::ConstraintState, dict::Word, strategy::Strategy};

use super::modal;

/// A strategy that guesses uniformly at random among the candidates.
///
/// Every guess is still consistent with the feedback so far, so even
/// random play eliminates at least one word per round. Useful mostly as a
/// baseline to compare smarter strategies against.
#[derive(Debug, Clone, Default)]
pub struct Random;

impl Strategy for Random {
    fn pick<'a>(
        &self,
        view: Vec<&'a Word>,
        _state: &ConstraintState,
        _attempt: usize,
    ) -> Option<&'a Word> {
        view.choose(&mut rand::thread_rng()).copied()
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Random {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "letterbot::Random")
    }
}

/// A strategy that opens at random and then narrows like [`ModalLetter`].
///
/// The opening guess is drawn uniformly from the full dictionary; every
/// guess after that uses the modal-letter selection on the narrowed
/// candidates.
///
/// [`ModalLetter`]: super::ModalLetter
#[derive(Debug, Clone, Default)]
pub struct RandomStart;

impl Strategy for RandomStart {
    fn pick<'a>(
        &self,
        view: Vec<&'a Word>,
        state: &ConstraintState,
        attempt: usize,
    ) -> Option<&'a Word> {
        if attempt == 0 {
            view.choose(&mut rand::thread_rng()).copied()
        } else {
            modal::select(view, state)
        }
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for RandomStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "letterbot::RandomStart")
    }
}
