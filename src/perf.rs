//! Evaluating and comparing strategies.

use std::{fmt::Display, io::Write, ops::Deref};

use comfy_table::{Cell, Color, ColumnConstraint, Row, Table, Width};
use owo_colors::{AnsiColors, OwoColorize, Stream};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dict::Word, game::RoundResult, strategy::Strategy, BotError, Result};

/// A record of one strategy's rounds after a run by the
/// [test harness](crate::Harness).
///
/// This struct can provide statistics about the rounds on its own, but it
/// is recommended to produce a [`Summary`] first to cache the
/// computations.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Perf {
    pub(crate) tries: Vec<(Word, RoundResult)>,
    strategy_name: String,
    attempt_limit: usize,
}

impl Perf {
    /// Creates a new empty performance record.
    pub(crate) fn new(strat: &dyn Strategy, attempt_limit: usize) -> Self {
        Perf {
            tries: Vec::new(),
            strategy_name: format!("{} v{}", strat, strat.version()),
            attempt_limit,
        }
    }

    /// Gets the name of the strategy that produced this record.
    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    /// Gets the number of secrets the strategy played.
    pub fn num_tried(&self) -> u32 {
        self.tries.len() as u32
    }

    /// Gets the number of secrets the strategy found.
    pub fn num_solved(&self) -> u32 {
        self.tries
            .iter()
            .filter(|(_, result)| result.solved())
            .count() as u32
    }

    /// Gets the fraction of secrets the strategy found.
    pub fn frac_solved(&self) -> f32 {
        (self.num_solved() as f32) / (self.num_tried() as f32)
    }

    /// Gets the number of guesses across all rounds.
    pub fn cumulative_guesses(&self) -> u32 {
        self.tries.iter().map(|(_, r)| r.score() as u32).sum()
    }

    /// Gets the number of guesses across all solved rounds.
    pub fn cumulative_guesses_solved(&self) -> u32 {
        self.tries
            .iter()
            .filter(|(_, result)| result.solved())
            .map(|(_, r)| r.score() as u32)
            .sum()
    }

    /// Gets the average number of guesses needed to find a secret.
    ///
    /// Guesses spent on rounds the strategy could not finish are not
    /// included.
    pub fn guesses_per_solution(&self) -> f32 {
        (self.cumulative_guesses_solved() as f32) / (self.num_solved() as f32)
    }

    /// Gets the number of secrets the strategy could not find.
    pub fn num_missed(&self) -> u32 {
        self.num_tried() - self.num_solved()
    }

    /// Gets the fraction of secrets the strategy could not find.
    pub fn frac_missed(&self) -> f32 {
        (self.num_missed() as f32) / (self.num_tried() as f32)
    }

    /// Prints the strategy's summary and then a table showing every
    /// round it played.
    pub fn print(&self) {
        print!("{}", self);
        let mut table = Table::new();
        if !table.is_tty() {
            table.set_table_width(80);
        } else {
            table.load_preset(comfy_table::presets::UTF8_FULL);
        }
        let columns = ((table.get_table_width().unwrap_or(80) / 13) as usize).max(1);
        for chunk in self.tries.chunks(columns) {
            let mut row = Row::new();
            for (secret, result) in chunk {
                let mut cell = Cell::new(format!("{}\n-----\n{}", secret, result));
                if !result.solved() {
                    cell = cell.bg(Color::Red).fg(Color::Black);
                }
                row.add_cell(cell);
            }
            table.add_row(row);
        }
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5));
            columns
        ]);
        println!("{}", table);
    }

    /// Converts this performance record to a pre-calculated summary.
    pub fn to_summary(&self) -> Summary {
        let mut bins = vec![0_u32; self.attempt_limit];

        self.tries
            .iter()
            .filter(|(_, result)| result.solved())
            .map(|(_, result)| result.score())
            .for_each(|n| bins[n - 1] += 1);

        assert_eq!(bins.iter().sum::<u32>(), self.num_solved());

        Summary {
            strategy_name: &self.strategy_name,
            num_tried: self.num_tried(),
            num_solved: self.num_solved(),
            cumulative_guesses: self.cumulative_guesses(),
            histogram: bins.into(),
        }
    }
}

impl Display for Perf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_summary())
    }
}

/// A summary of a strategy's performance over a harness run.
///
/// It is recommended to convert a [`Perf`] to this via
/// [`Perf::to_summary()`] when you want to use the numbers more than
/// once.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Summary<'a> {
    strategy_name: &'a str,
    num_tried: u32,
    num_solved: u32,
    cumulative_guesses: u32,
    histogram: Histogram,
}

impl<'a> Summary<'a> {
    /// Gets the name of the strategy that produced this summary.
    pub fn strategy_name(&self) -> &'a str {
        self.strategy_name
    }

    /// Gets the number of secrets the strategy played.
    pub fn num_tried(&self) -> u32 {
        self.num_tried
    }

    /// Gets the number of secrets the strategy found.
    pub fn num_solved(&self) -> u32 {
        self.num_solved
    }

    /// Gets the fraction of secrets the strategy found.
    pub fn frac_solved(&self) -> f32 {
        (self.num_solved as f32) / (self.num_tried as f32)
    }

    /// Gets the number of guesses across all rounds.
    pub fn cumulative_guesses(&self) -> u32 {
        self.cumulative_guesses
    }

    /// Gets the number of guesses across all solved rounds.
    pub fn cumulative_guesses_solved(&self) -> u32 {
        self.histogram
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as u32 + 1) * v)
            .sum::<u32>()
    }

    /// Gets the average number of guesses needed to find a secret.
    ///
    /// Guesses spent on rounds the strategy could not finish are not
    /// included.
    pub fn mean_guesses(&self) -> f32 {
        (self.cumulative_guesses_solved() as f32) / (self.num_solved as f32)
    }

    /// Gets the number of secrets the strategy could not find.
    pub fn num_missed(&self) -> u32 {
        self.num_tried - self.num_solved
    }

    /// Gets the fraction of secrets the strategy could not find.
    pub fn frac_missed(&self) -> f32 {
        (self.num_missed() as f32) / (self.num_tried as f32)
    }

    /// Gets the counts of solved rounds by number of guesses used.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Compares this summary against a baseline.
    ///
    /// Returns [`BotError::SelfComparison`] when both summaries are the
    /// same, since the differences would all be zero.
    pub fn compare<'b>(&self, baseline: &Summary<'b>) -> Result<Comparison<'a, 'b>> {
        if self == baseline {
            return Err(BotError::SelfComparison);
        }

        Ok(Comparison::new(self.clone(), baseline.clone()))
    }

    /// Prints the summary to stdout according to `options`.
    pub fn print(&self, options: SummaryPrintOptions) -> Result<()> {
        let mut stdout = std::io::stdout();
        match options.compare {
            Some(baseline) => {
                let comparison = self.compare(&baseline)?;

                writeln!(stdout, "{:-^80}", self.strategy_name)?;
                writeln!(
                    stdout,
                    "Ran {} words and comp. with {}, {} words",
                    self.num_tried(),
                    baseline.strategy_name(),
                    baseline.num_tried()
                )?;
                writeln!(
                    stdout,
                    "Guessed {} correctly, or {:.1}% ({:+.1}%), and {} incorrectly",
                    self.num_solved(),
                    self.frac_solved() * 100.,
                    (comparison.frac_solved_diff() * 100.).if_supports_color(
                        Stream::Stdout,
                        |text| {
                            if comparison.frac_solved_diff().is_sign_positive() {
                                text.color(AnsiColors::Green)
                            } else {
                                text.color(AnsiColors::Red)
                            }
                        }
                    ),
                    self.num_missed()
                )?;
                writeln!(
                    stdout,
                    "Correct guesses took {:.2} ({:+.2}) attempts on average",
                    self.mean_guesses(),
                    comparison
                        .mean_guesses_diff()
                        .if_supports_color(Stream::Stdout, |text| {
                            if comparison.mean_guesses_diff().is_sign_negative() {
                                text.color(AnsiColors::Green)
                            } else {
                                text.color(AnsiColors::Red)
                            }
                        })
                )?;
            }
            None => {
                write!(stdout, "{}", self)?;
            }
        }

        if options.histogram {
            write!(stdout, "{}", self.histogram)?;
        }

        Ok(())
    }

    /// Creates the default print options.
    pub fn print_options() -> SummaryPrintOptions<'a> {
        SummaryPrintOptions::default()
    }
}

impl<'a> Display for Summary<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:-^80}", self.strategy_name)?;
        writeln!(f, "Ran {} words", self.num_tried())?;

        writeln!(
            f,
            "Guessed {} correctly, or {:.1}%, and {} incorrectly",
            self.num_solved(),
            self.frac_solved() * 100.,
            self.num_missed()
        )?;

        writeln!(
            f,
            "Correct guesses took {:.2} attempts on average",
            self.mean_guesses(),
        )?;

        Ok(())
    }
}

/// Options controlling how [`Summary::print()`] formats its output.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SummaryPrintOptions<'a> {
    compare: Option<Summary<'a>>,
    histogram: bool,
}

impl<'a> SummaryPrintOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints differences against `baseline` alongside the numbers.
    pub fn compare(self, baseline: &Summary<'a>) -> Self {
        Self {
            compare: Some(baseline.clone()),
            ..self
        }
    }

    /// Includes the guess histogram in the output.
    pub fn histogram(self, histogram: bool) -> Self {
        Self { histogram, ..self }
    }
}

/// The differences between two summaries.
#[derive(Debug, Clone)]
pub struct Comparison<'a, 'b> {
    this: Summary<'a>,
    baseline: Summary<'b>,
}

impl<'a, 'b> Comparison<'a, 'b> {
    fn new(this: Summary<'a>, baseline: Summary<'b>) -> Self {
        Self { this, baseline }
    }

    /// Returns true if both summaries played the same number of secrets.
    pub fn tries_eq(&self) -> bool {
        self.this.num_tried == self.baseline.num_tried
    }

    /// The difference in solved secrets, when the counts are comparable.
    pub fn num_solved_diff(&self) -> Option<i64> {
        self.tries_eq()
            .then(|| self.this.num_solved() as i64 - self.baseline.num_solved() as i64)
    }

    /// The difference in missed secrets, when the counts are comparable.
    pub fn num_missed_diff(&self) -> Option<i64> {
        self.tries_eq()
            .then(|| self.this.num_missed() as i64 - self.baseline.num_missed() as i64)
    }

    pub fn frac_solved_diff(&self) -> f32 {
        self.this.frac_solved() - self.baseline.frac_solved()
    }

    pub fn frac_missed_diff(&self) -> f32 {
        self.this.frac_missed() - self.baseline.frac_missed()
    }

    pub fn mean_guesses_diff(&self) -> f32 {
        self.this.mean_guesses() - self.baseline.mean_guesses()
    }
}

/// Counts of solved rounds by the number of guesses they took.
///
/// Bin `0` counts the rounds solved in one guess, bin `1` in two, and so
/// on up to the attempt limit of the run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Histogram {
    bins: Vec<u32>,
}

impl From<Vec<u32>> for Histogram {
    fn from(other: Vec<u32>) -> Self {
        Self { bins: other }
    }
}

impl Deref for Histogram {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.bins
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max = self.iter().max().copied().unwrap_or(0);
        let digits =
            std::iter::successors(Some(max), |&n| (n >= 10).then(|| n / 10)).count() as u32;
        let count_per_mark = (max as f32 / (80. - digits as f32 - 6.)).max(1.0);

        for (i, &bin) in self.bins.iter().enumerate() {
            write!(f, "{} |", i + 1)?;
            let marks = (bin as f32 / count_per_mark).floor() as usize;
            writeln!(f, "{:■>marks$} ({})", "", bin)?;
        }

        Ok(())

        // TODO: check that wide counts cannot push a line past 80 columns
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        feedback::Outcome,
        strategy::{ModalLetter, Random},
    };

    fn round(guesses: &[(&str, &str)], solved: bool) -> (Word, RoundResult) {
        let secret = Word::new(guesses.last().unwrap().0).unwrap();
        let guesses = guesses
            .iter()
            .map(|(w, o)| (Word::new(w).unwrap(), Outcome::parse(o).unwrap()))
            .collect();
        (secret, RoundResult::new(guesses, solved))
    }

    fn sample_perf() -> Perf {
        let mut perf = Perf::new(&ModalLetter, 6);
        perf.tries
            .push(round(&[("CRATE", "gggbg"), ("CRANE", "ggggg")], true));
        perf.tries.push(round(&[("SLATE", "ggggg")], true));
        perf.tries.push(round(
            &[("TRACE", "bgggg"), ("GRADE", "bgbgg"), ("CRATE", "ggbgg")],
            false,
        ));
        perf
    }

    #[test]
    fn counting_methods_add_up() {
        let perf = sample_perf();
        assert_eq!(perf.num_tried(), 3);
        assert_eq!(perf.num_solved(), 2);
        assert_eq!(perf.num_missed(), 1);
        assert_eq!(perf.cumulative_guesses(), 6);
        assert_eq!(perf.cumulative_guesses_solved(), 3);
        assert!((perf.guesses_per_solution() - 1.5).abs() < f32::EPSILON);
        assert!((perf.frac_solved() - 2. / 3.).abs() < 1e-6);
    }

    #[test]
    fn summaries_cache_the_same_numbers() {
        let perf = sample_perf();
        let summary = perf.to_summary();
        assert_eq!(summary.strategy_name(), perf.strategy_name());
        assert_eq!(summary.num_tried(), 3);
        assert_eq!(summary.num_solved(), 2);
        assert_eq!(summary.num_missed(), 1);
        assert_eq!(summary.cumulative_guesses(), 6);
        assert_eq!(summary.cumulative_guesses_solved(), 3);
        assert!((summary.mean_guesses() - 1.5).abs() < f32::EPSILON);
        assert_eq!(summary.histogram().to_vec(), vec![1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn comparisons_reject_identical_summaries() {
        let perf = sample_perf();
        let summary = perf.to_summary();
        assert!(matches!(
            summary.compare(&summary.clone()),
            Err(BotError::SelfComparison)
        ));
    }

    #[test]
    fn comparisons_report_signed_differences() {
        let perf = sample_perf();
        let summary = perf.to_summary();

        let mut other = Perf::new(&Random, 6);
        other.tries.push(round(&[("CRANE", "ggggg")], true));
        let other_summary = other.to_summary();

        let comparison = summary.compare(&other_summary).unwrap();
        assert!(!comparison.tries_eq());
        assert_eq!(comparison.num_solved_diff(), None);
        assert!((comparison.frac_solved_diff() + 1. / 3.).abs() < 1e-6);
        assert!((comparison.mean_guesses_diff() - 0.5).abs() < f32::EPSILON);

        let mut third = Perf::new(&Random, 6);
        third
            .tries
            .push(round(&[("CRATE", "gggbg"), ("CRANE", "ggggg")], true));
        third.tries.push(round(&[("SLATE", "ggggg")], true));
        third.tries.push(round(&[("GRADE", "ggggg")], true));
        let third_summary = third.to_summary();

        let comparison = summary.compare(&third_summary).unwrap();
        assert!(comparison.tries_eq());
        assert_eq!(comparison.num_solved_diff(), Some(-1));
        assert_eq!(comparison.num_missed_diff(), Some(1));
    }

    #[test]
    fn histograms_render_one_line_per_bin() {
        let histogram = Histogram::from(vec![2, 1, 0]);
        let rendered = histogram.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1 |"));
        assert!(lines[0].ends_with("(2)"));
        assert!(lines[2].starts_with("3 |"));
        assert!(lines[2].ends_with("(0)"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn summaries_serde_round_trip() {
        let perf = sample_perf();
        let summary = perf.to_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }
}
