#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod dict;
pub use dict::{Dictionary, Word};

pub mod feedback;
pub use feedback::{score, Mark, Outcome};

pub mod constraint;
pub use constraint::ConstraintState;

pub mod filter;

pub mod strategy;
pub use strategy::Strategy;

pub mod solver;
pub use solver::Solver;

pub mod game;
pub use game::{Game, RoundResult};

pub mod harness;
pub use harness::{Harness, Record};

pub mod perf;
pub use perf::{Perf, Summary};

#[cfg(test)]
pub(crate) mod mock;

/// Convenient alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, BotError>;

/// The errors that `letterbot` can produce.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("solver engine encountered error")]
    Engine {
        #[from]
        kind: EngineError,
    },

    #[error("dictionary could not be built")]
    Dictionary {
        #[from]
        kind: DictionaryError,
    },

    #[error("game round encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("the test harness encountered an error")]
    Harness {
        #[from]
        kind: HarnessError,
    },

    #[error("general IO error")]
    Printing(#[from] std::io::Error),

    #[error("cannot compare a strategy with itself")]
    SelfComparison,
}

/// Errors produced while tracking constraints and picking guesses.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The position handed to a constraint update does not exist in words
    /// of the dictionary's length.
    #[error("position {position} is out of bounds for words of {len} letters")]
    InvalidPosition { position: usize, len: usize },

    /// No word in the dictionary is consistent with the feedback received
    /// so far.
    #[error("no words remain consistent with the feedback so far")]
    NoCandidates,
}

/// Errors produced while building a [`Dictionary`].
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list contained no words at all.
    #[error("cannot build a dictionary from an empty word list")]
    Empty,

    /// A word contained something other than ASCII letters.
    #[error("the string \"{0}\" is not made of ASCII letters")]
    NotAlphabetic(String),

    /// A word did not match the length established by the first word.
    #[error("the word \"{word}\" has {found} letters, expected {expected}")]
    WrongLength {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("could not read the word list")]
    Io(#[from] std::io::Error),
}

/// Errors produced while playing rounds of the game.
#[derive(Debug, Error)]
pub enum GameError {
    /// A strategy produced a guess outside the game's valid-word list.
    #[error("the guess \"{0}\" is not a valid word for this game")]
    UnknownWord(String),
}

/// Errors produced by the test harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no strategies have been added to the harness")]
    NoStrategiesAdded,
}
