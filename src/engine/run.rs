use crate::algorithms::catalog::Algorithm;
use crate::algorithms::Machine;
use crate::engine::Resume;
use crate::engine::step::Step;
use crate::engine::workspace::Workspace;
use crate::foundation::stats::SortStats;

/// Default cap on bogo sort shuffles before a run gives up.
pub const BOGO_SAFETY_LIMIT: u64 = 100_000;

/// Per-run knobs that only some algorithms consult.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum number of full shuffles bogo sort performs before giving up.
    pub bogo_limit: u64,
    /// Seed for algorithms that draw random numbers. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            bogo_limit: BOGO_SAFETY_LIMIT,
            seed: None,
        }
    }
}

/// How a run terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The array is sorted ascending.
    Sorted,
    /// Bogo sort hit its safety limit; the array is left in whatever order the last shuffle
    /// produced.
    GaveUp {
        /// Number of completed shuffles.
        shuffles: u64,
    },
}

/// Terminal state of a run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    /// Algorithm that produced the run.
    pub algorithm: Algorithm,
    /// Normal completion or safety-limit abort.
    pub outcome: Outcome,
    /// Final counters.
    pub stats: SortStats,
    /// Number of steps emitted before completion.
    pub steps: u64,
    /// Final caller-visible contents, at the caller's original length.
    pub array: Vec<u32>,
}

/// Result of one pull on a [`SortRun`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The algorithm suspended at a comparison or a mutation.
    Step(Step),
    /// The algorithm finished. Returned again on every later pull.
    Done(Summary),
}

/// Pull-driven execution of one algorithm over a caller-owned array.
///
/// Nothing happens between pulls: every [`SortRun::advance`] runs the algorithm up to its next
/// comparison or mutation and no further. Dropping the run at any point cancels it and leaves
/// the caller's array exactly as the last step left it.
///
/// ```
/// use stripsort::{Advance, Algorithm, SortRun};
///
/// let mut strips = vec![5, 2, 8, 1, 9];
/// let mut run = SortRun::new(Algorithm::Quick, &mut strips);
/// let summary = loop {
///     match run.advance() {
///         Advance::Step(step) => assert!(step.is_well_formed()),
///         Advance::Done(summary) => break summary,
///     }
/// };
/// assert_eq!(summary.array, vec![1, 2, 5, 8, 9]);
/// ```
pub struct SortRun<'a> {
    algorithm: Algorithm,
    machine: Machine,
    ws: Workspace<'a>,
    steps: u64,
    summary: Option<Summary>,
}

impl<'a> SortRun<'a> {
    /// Start a run with default [`RunOptions`].
    pub fn new(algorithm: Algorithm, data: &'a mut [u32]) -> Self {
        Self::with_options(algorithm, data, RunOptions::default())
    }

    /// Start a run with explicit options.
    #[tracing::instrument(skip(data, opts), fields(len = data.len()))]
    pub fn with_options(algorithm: Algorithm, data: &'a mut [u32], opts: RunOptions) -> Self {
        tracing::debug!(
            bogo_limit = opts.bogo_limit,
            seeded = opts.seed.is_some(),
            "sort run created"
        );
        Self {
            algorithm,
            machine: Machine::new(algorithm, data.len(), &opts),
            ws: Workspace::new(data),
            steps: 0,
            summary: None,
        }
    }

    /// Run the algorithm up to its next event.
    pub fn advance(&mut self) -> Advance {
        if let Some(summary) = &self.summary {
            return Advance::Done(summary.clone());
        }

        let before = self.ws.stats;
        match self.machine.resume(&mut self.ws) {
            Some(event) => {
                debug_assert!(self.ws.stats.dominates(&before), "statistics went backwards");
                self.steps += 1;
                Advance::Step(Step::from_event(
                    event,
                    self.ws.to_vec(),
                    self.ws.stats,
                    self.ws.public_len(),
                ))
            }
            None => Advance::Done(self.finish()),
        }
    }

    /// Pull until completion and return the terminal summary.
    pub fn drain(mut self) -> Summary {
        loop {
            if let Advance::Done(summary) = self.advance() {
                return summary;
            }
        }
    }

    /// Terminal summary, once the run has finished.
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// `true` once the algorithm has reported completion.
    pub fn is_done(&self) -> bool {
        self.summary.is_some()
    }

    /// Algorithm driving this run.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Counters as of the last emitted step.
    pub fn stats(&self) -> SortStats {
        self.ws.stats
    }

    /// Number of steps emitted so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn finish(&mut self) -> Summary {
        debug_assert!(!self.ws.is_padded(), "padding leaked past completion");
        let outcome = self.machine.outcome();
        debug_assert!(
            outcome != Outcome::Sorted || self.ws.is_sorted(),
            "{} finished unsorted",
            self.algorithm
        );

        match outcome {
            Outcome::Sorted => tracing::debug!(
                algorithm = %self.algorithm,
                steps = self.steps,
                comparisons = self.ws.stats.comparisons,
                array_accesses = self.ws.stats.array_accesses,
                swaps = self.ws.stats.swaps,
                "sort run finished"
            ),
            Outcome::GaveUp { shuffles } => tracing::warn!(
                algorithm = %self.algorithm,
                shuffles,
                "sort run hit its safety limit"
            ),
        }

        let summary = Summary {
            algorithm: self.algorithm,
            outcome,
            stats: self.ws.stats,
            steps: self.steps,
            array: self.ws.public_vec(),
        };
        self.summary = Some(summary.clone());
        summary
    }
}

impl Iterator for SortRun<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.is_done() {
            return None;
        }
        match self.advance() {
            Advance::Step(step) => Some(step),
            Advance::Done(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/run.rs"]
mod tests;
