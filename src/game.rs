//! Driving the guess/feedback loop for whole rounds.

use std::{collections::HashSet, fmt::Display};

use crate::{
    dict::{Dictionary, Word},
    feedback::{self, Outcome},
    solver::Solver,
    GameError, Result,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A game master that plays full rounds against a solver.
///
/// A `Game` knows which words may legally be guessed and how many
/// attempts a round allows. [`play()`](Self::play()) runs the loop of
/// asking the solver for a guess, scoring it against the secret, and
/// feeding the outcome back, until the secret is found or the attempts
/// run out.
///
/// # Examples
///
/// ```rust
/// use letterbot::{Dictionary, Game, Solver};
///
/// let dict = Dictionary::new(["CRANE", "SLATE", "TRACE", "GRADE", "CRATE"])?;
/// let game = Game::new(&dict);
///
/// let mut solver = Solver::new_round(&dict);
/// let result = game.play(&dict.words()[0], &mut solver)?;
/// assert!(result.solved());
/// assert_eq!(result.score(), 2);
/// #
/// # Ok::<_, letterbot::BotError>(())
/// ```
pub struct Game<'v> {
    valid: HashSet<&'v str>,
    attempt_limit: usize,
}

impl<'v> Game<'v> {
    /// The number of attempts a round allows unless configured otherwise.
    pub const DEFAULT_ATTEMPT_LIMIT: usize = 6;

    /// Creates a game whose legal guesses are the words of `valid`.
    pub fn new(valid: &'v Dictionary) -> Game<'v> {
        Game {
            valid: valid.iter().map(|word| &**word).collect(),
            attempt_limit: Self::DEFAULT_ATTEMPT_LIMIT,
        }
    }

    /// Sets how many attempts a round allows, at least one.
    pub fn attempt_limit(self, n: usize) -> Self {
        Game {
            attempt_limit: n.max(1),
            ..self
        }
    }

    /// Plays one full round against `secret`.
    ///
    /// The solver is reset first, so every call is an independent round.
    /// Guesses outside the game's valid words fail with
    /// [`GameError::UnknownWord`]; running out of attempts is not an
    /// error and comes back as a result with
    /// [`solved()`](RoundResult::solved()) false.
    pub fn play(&self, secret: &Word, solver: &mut Solver<'_>) -> Result<RoundResult> {
        solver.reset();
        let mut guesses = Vec::new();

        for _ in 0..self.attempt_limit {
            let guess = solver.next_guess()?;
            if !self.valid.contains(&**guess) {
                return Err(GameError::UnknownWord(guess.to_string()).into());
            }

            let outcome = feedback::score(secret, guess);
            guesses.push((guess.clone(), outcome.clone()));

            if guess == secret {
                return Ok(RoundResult {
                    guesses,
                    solved: true,
                });
            }
            solver.apply_feedback(guess, &outcome)?;
        }

        Ok(RoundResult {
            guesses,
            solved: false,
        })
    }
}

/// The record of one played round.
///
/// Holds every guess with its outcome, in play order, and whether the
/// secret was found. An exhausted round is a normal result: it simply
/// reports [`solved()`](Self::solved()) as false.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct RoundResult {
    guesses: Vec<(Word, Outcome)>,
    solved: bool,
}

impl RoundResult {
    #[cfg(test)]
    pub(crate) fn new(guesses: Vec<(Word, Outcome)>, solved: bool) -> Self {
        RoundResult { guesses, solved }
    }

    /// Returns the guesses in play order with their outcomes.
    pub fn guesses(&self) -> &[(Word, Outcome)] {
        &self.guesses
    }

    /// Returns true if the final guess matched the secret.
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Gets the number of guesses the round used.
    pub fn score(&self) -> usize {
        self.guesses.len()
    }
}

impl Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(((last_word, last_outcome), rest)) = self.guesses.split_last() {
            for (word, outcome) in rest {
                writeln!(f, "{} {}", word, outcome)?;
            }
            write!(f, "{} {}", last_word, last_outcome)?;
        }
        Ok(())
    }
}
