//! A scripted strategy for tests.

use std::fmt::Display;

use crate::{constraint::ConstraintState, dict::Word, strategy::Strategy};

/// Replays a fixed list of guesses, one per attempt.
///
/// Each scripted word is looked up in the candidate view, so a script
/// entry that has already been ruled out ends the round early.
#[derive(Debug, Clone)]
pub(crate) struct Mock {
    script: Vec<&'static str>,
}

impl Mock {
    pub(crate) fn new(script: Vec<&'static str>) -> Self {
        Mock { script }
    }
}

impl Strategy for Mock {
    fn pick<'a>(
        &self,
        view: Vec<&'a Word>,
        _state: &ConstraintState,
        attempt: usize,
    ) -> Option<&'a Word> {
        let target = *self.script.get(attempt)?;
        view.into_iter().find(|word| ***word == *target)
    }

    fn version(&self) -> &'static str {
        "1.0.0"
    }
}

impl Display for Mock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mock {:?}", self.script)
    }
}
