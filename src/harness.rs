//! The test harness for running strategies over a dictionary.

use std::{
    ops::Deref,
    sync::{Arc, Mutex},
};

use either::Either;
use indicatif::ParallelProgressIterator;
use rand::seq::index::sample;
use rayon::prelude::*;

use crate::{
    dict::Dictionary,
    game::Game,
    perf::Perf,
    solver::Solver,
    strategy::Strategy,
    BotError, HarnessError, Result, Summary,
};

/// A test harness that can run many strategies on many secrets.
///
/// When you want to test your strategies, create a new test harness
/// with [`new()`](Harness::new()). You can then configure it using various
/// methods. Note that these configuration methods consume the existing
/// [`Harness`] and return a new one.
///
/// # Examples
///
/// ```rust
/// # use letterbot::{Dictionary, Harness};
/// use letterbot::strategy::Basic;
///
/// # fn main() -> Result<(), letterbot::BotError> {
/// let dict = Dictionary::new(["SPOON", "SPORE", "SNORE", "STORE", "SHORE"])?;
/// let harness = Harness::new(&dict)
///     .quiet()
///     .add_strategy(Box::new(Basic::new()))
///     .test_num(3);
///
/// let record = harness.run()?;
/// # assert_eq!(record.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Harness<'d> {
    dict: &'d Dictionary,
    strategies: Vec<Box<dyn Strategy>>,
    verbose: bool,
    num_secrets: Option<usize>,
    attempt_limit: usize,
    baseline: Option<usize>,
}

impl<'d> Harness<'d> {
    /// Creates a new test harness over `dict` with default configuration.
    ///
    /// Defaults:
    /// 1. tests no strategies
    /// 2. quiet mode
    /// 3. runs each strategy on 100 secrets chosen at random
    /// 4. allows six guesses per round
    /// 5. does not compare against a baseline
    pub fn new(dict: &'d Dictionary) -> Self {
        Harness {
            dict,
            strategies: Vec::new(),
            verbose: false,
            num_secrets: Some(100),
            attempt_limit: Game::DEFAULT_ATTEMPT_LIMIT,
            baseline: None,
        }
    }

    /// Makes the harness verbose while testing.
    ///
    /// As of right now, this consists of a progress bar and nothing else.
    pub fn verbose(self) -> Self {
        Harness {
            verbose: true,
            ..self
        }
    }

    /// Makes the harness silent while testing.
    pub fn quiet(self) -> Self {
        Harness {
            verbose: false,
            ..self
        }
    }

    /// Adds a strategy to the harness for testing.
    pub fn add_strategy(self, strat: Box<dyn Strategy>) -> Self {
        let mut strategies = self.strategies;
        strategies.push(strat);
        Harness { strategies, ..self }
    }

    /// Adds a [`Vec`] of strategies to the harness for testing.
    pub fn add_strategies(self, strats: Vec<Box<dyn Strategy>>) -> Self {
        let mut strategies = self.strategies;
        strategies.extend(strats);
        Harness { strategies, ..self }
    }

    /// Adds a strategy to the harness for testing and sets it as the baseline
    /// for comparison.
    pub fn add_baseline(self, strat: Box<dyn Strategy>) -> Self {
        self.add_strategy(strat).and_baseline()
    }

    /// Sets the most recently added strategy as the baseline for comparisons.
    pub fn and_baseline(self) -> Self {
        Self {
            baseline: self.strategies.len().checked_sub(1),
            ..self
        }
    }

    /// Sets the harness to test each strategy on every word in the
    /// dictionary.
    pub fn test_all(self) -> Self {
        Harness {
            num_secrets: None,
            ..self
        }
    }

    /// Sets the harness to test each strategy on `n` random secrets.
    pub fn test_num(self, n: usize) -> Self {
        Harness {
            num_secrets: Some(n.clamp(0, self.dict.len())),
            ..self
        }
    }

    /// Sets how many guesses each round may use.
    ///
    /// Limits below one are raised to one.
    pub fn attempt_limit(self, n: usize) -> Self {
        Harness {
            attempt_limit: n.max(1),
            ..self
        }
    }

    /// Runs the harness and produces performances for each strategy.
    ///
    /// The [`Perf`]s will be in the same order as the strategies were added
    /// to the harness.
    ///
    /// Returns an error if no strategies have been added, or if any round
    /// fails.
    pub fn run(&self) -> Result<Record> {
        if self.strategies.is_empty() {
            return Err(HarnessError::NoStrategiesAdded.into());
        }

        let perfs = Arc::new(Mutex::new(Vec::new()));
        {
            let mut perfs = perfs.lock().unwrap();
            for strat in &self.strategies {
                perfs.push(Perf::new(strat.as_ref(), self.attempt_limit))
            }
        }

        let game = Game::new(self.dict).attempt_limit(self.attempt_limit);

        let mut rng = rand::thread_rng();
        let indices = match self.num_secrets {
            Some(n) => {
                let n = n.min(self.dict.len());
                Either::Left(sample(&mut rng, self.dict.len(), n).into_iter())
            }
            None => Either::Right(0..self.dict.len()),
        };
        let total = indices.len() as u64;

        if self.verbose {
            indices
                .par_bridge()
                .progress_count(total)
                .map(|i| self.run_inner(i, &game, perfs.clone()))
                .collect::<Result<()>>()?;
        } else {
            indices
                .par_bridge()
                .map(|i| self.run_inner(i, &game, perfs.clone()))
                .collect::<Result<()>>()?;
        }

        Ok(Record::new(
            Arc::try_unwrap(perfs).unwrap().into_inner().unwrap(),
            self.baseline,
        ))
    }

    fn run_inner(&self, index: usize, game: &Game<'_>, perfs: Arc<Mutex<Vec<Perf>>>) -> Result<()> {
        let secret = &self.dict.words()[index];

        for (i, strategy) in self.strategies.iter().enumerate() {
            let mut solver = Solver::with_strategy(self.dict, strategy.as_ref());
            let result = game.play(secret, &mut solver)?;
            {
                let mut perfs = perfs.lock().unwrap();
                perfs[i].tries.push((secret.clone(), result));
            }
        }

        Ok(())
    }

    /// Runs the harness (see [`run()`](Harness::run())) and prints performance
    /// summaries of each strategy.
    pub fn run_and_summarize(&self) -> Result<Record> {
        let perfs = self.run()?;
        for perf in perfs.iter() {
            println!("{}", perf);
        }
        Ok(perfs)
    }
}

/// The performances produced by a [`Harness`] run, one per strategy.
#[derive(Debug, Clone, Default)]
pub struct Record {
    perfs: Vec<Perf>,
    baseline: Option<usize>,
}

impl Deref for Record {
    type Target = [Perf];

    fn deref(&self) -> &Self::Target {
        &self.perfs
    }
}

impl Record {
    fn new(perfs: Vec<Perf>, baseline: impl Into<Option<usize>>) -> Self {
        Self {
            perfs,
            baseline: baseline.into(),
        }
    }

    /// Prints a summary and histogram for each strategy, comparing against
    /// the baseline when one was set.
    pub fn print_report(&self) -> Result<()> {
        if let Some(n) = self.baseline {
            let baseline = &self.perfs[n];
            let baseline_summary = baseline.to_summary();

            for perf in self.perfs.iter() {
                let summary = perf.to_summary();
                match summary.print(
                    Summary::print_options()
                        .compare(&baseline_summary)
                        .histogram(true),
                ) {
                    Ok(()) => {}
                    Err(BotError::SelfComparison) => {
                        summary.print(Summary::print_options().histogram(true))?
                    }
                    Err(e) => return Err(e),
                }
            }
        } else {
            for perf in self.perfs.iter() {
                let summary = perf.to_summary();
                summary.print(Summary::print_options().histogram(true))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        mock::Mock,
        strategy::{Basic, ModalLetter},
    };

    fn dict() -> Dictionary {
        Dictionary::new(["CRANE", "SLATE", "TRACE", "GRADE", "CRATE"]).unwrap()
    }

    #[test]
    fn running_without_strategies_errors() {
        let dict = dict();
        let harness = Harness::new(&dict);
        assert!(matches!(
            harness.run(),
            Err(BotError::Harness {
                kind: HarnessError::NoStrategiesAdded
            })
        ));
    }

    #[test]
    fn records_every_strategy_in_order() {
        let dict = dict();
        let record = Harness::new(&dict)
            .add_baseline(Box::new(Basic::new()))
            .add_strategy(Box::new(ModalLetter))
            .test_all()
            .run()
            .unwrap();

        assert_eq!(record.len(), 2);
        assert!(record[0].strategy_name().starts_with("letterbot::Basic"));
        assert!(record[1]
            .strategy_name()
            .starts_with("letterbot::ModalLetter"));
        for perf in record.iter() {
            assert_eq!(perf.num_tried(), 5);
            assert_eq!(perf.num_solved(), 5);
        }
    }

    #[test]
    fn test_num_limits_the_secrets() {
        let dict = dict();
        let record = Harness::new(&dict)
            .add_strategy(Box::new(ModalLetter))
            .test_num(3)
            .run()
            .unwrap();

        assert_eq!(record[0].num_tried(), 3);
    }

    #[test]
    fn oversized_test_num_clamps_to_the_dictionary() {
        let dict = dict();
        let record = Harness::new(&dict)
            .add_strategy(Box::new(Basic::new()))
            .test_num(50)
            .run()
            .unwrap();

        assert_eq!(record[0].num_tried(), 5);
    }

    #[test]
    fn scripted_rounds_land_in_the_right_bins() {
        let dict = Dictionary::new(["AA", "AB", "AC"]).unwrap();
        let record = Harness::new(&dict)
            .add_strategy(Box::new(Mock::new(vec!["AA", "AB", "AC"])))
            .test_all()
            .run()
            .unwrap();

        // Secret AA falls on the first scripted guess, AB on the second,
        // and AC on the third.
        let summary = record[0].to_summary();
        assert_eq!(summary.num_tried(), 3);
        assert_eq!(summary.num_solved(), 3);
        assert_eq!(summary.histogram().to_vec(), vec![1, 1, 1, 0, 0, 0]);
        assert_eq!(summary.cumulative_guesses_solved(), 6);
        assert!((summary.mean_guesses() - 2.0).abs() < f32::EPSILON);
    }
}
