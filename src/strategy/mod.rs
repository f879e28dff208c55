//! Guess-selection strategies.
//!
//! Each strategy consists of a single struct, and everything you need to
//! configure the strategy exists as a method on it. The built-in
//! strategies cover a spread of sophistication, from [`Random`] up to
//! [`ModalLetter`]; implement [`Strategy`] to add your own.

use std::fmt::{Debug, Display};

use crate::{constraint::ConstraintState, dict::Word};

mod basic;
pub use basic::Basic;

mod modal;
pub use modal::ModalLetter;

mod random;
pub use random::{Random, RandomStart};

/// Trait defining a guess-selection strategy.
///
/// To write a strategy, define a new struct and implement this trait on
/// it.
///
/// # How to implement
///
/// First, make a new struct and implement [`Display`] on it. The test
/// harness uses [`Display`] to format the name of the strategy, so do
/// not use linebreaks.
///
/// ```rust
/// use std::fmt::Display;
///
/// #[derive(Debug)]
/// struct Alphabetical;
///
/// impl Display for Alphabetical {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "Alphabetical")
///     }
/// }
/// ```
///
/// Then, implement [`Strategy`]. The solver hands
/// [`pick()`](Strategy::pick()) the current candidate view in dictionary
/// order, the live [`ConstraintState`], and the number of guesses already
/// made this round. Return one word from the view; returning `None` tells
/// the solver you found nothing to guess, which surfaces as
/// [`EngineError::NoCandidates`](crate::EngineError::NoCandidates).
///
/// ```rust
/// # use std::fmt::Display;
/// use letterbot::{constraint::ConstraintState, Strategy, Word};
///
/// # #[derive(Debug)]
/// # struct Alphabetical;
/// #
/// # impl Display for Alphabetical {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
/// #         write!(f, "Alphabetical")
/// #     }
/// # }
/// #
/// impl Strategy for Alphabetical {
///     fn pick<'a>(
///         &self,
///         view: Vec<&'a Word>,
///         _state: &ConstraintState,
///         _attempt: usize,
///     ) -> Option<&'a Word> {
///         view.into_iter().min()
///     }
///
///     fn version(&self) -> &'static str {
///         "0.1.0"
///     }
/// }
/// ```
pub trait Strategy: Display + Debug + Sync {
    /// Picks the next guess from `view`.
    ///
    /// The view holds every dictionary word consistent with the feedback
    /// so far, in dictionary order, and is never empty when called by
    /// [`Solver::next_guess()`](crate::Solver::next_guess()). The
    /// frequency tables in `state` have already been refreshed to count
    /// exactly the words in the view. `attempt` is the number of guesses
    /// whose feedback has been applied this round, so it is `0` for the
    /// opening guess.
    fn pick<'a>(
        &self,
        view: Vec<&'a Word>,
        state: &ConstraintState,
        attempt: usize,
    ) -> Option<&'a Word>;

    /// Provides a version for this strategy.
    ///
    /// You should ensure that this changes each time you update the logic
    /// of the strategy in order to produce meaningful comparisons. The
    /// value of this function should not change for a particular instance
    /// of the strategy after it is configured.
    fn version(&self) -> &'static str;
}
