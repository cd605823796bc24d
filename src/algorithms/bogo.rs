//! Bogo sort: Fisher-Yates shuffle until sorted, capped by a shuffle limit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::run::Outcome;
use crate::engine::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Check,
    Pick,
    Swap { i: usize, j: usize },
    Finished(Outcome),
}

#[derive(Debug)]
pub(crate) struct BogoSort {
    stage: Stage,
    rng: StdRng,
    limit: u64,
    shuffles: u64,
    // Shuffle cursor, walking down from the last slot.
    i: usize,
}

impl BogoSort {
    pub(crate) fn new(limit: u64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            stage: Stage::Check,
            rng,
            limit,
            shuffles: 0,
            i: 0,
        }
    }

    /// Counted sortedness scan; stops at the first descent.
    fn check(ws: &mut Workspace<'_>) -> bool {
        for i in 1..ws.len() {
            ws.stats.compare();
            if ws.get(i) < ws.get(i - 1) {
                return false;
            }
        }
        true
    }
}

impl Resume for BogoSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        loop {
            match self.stage {
                Stage::Finished(_) => return None,
                Stage::Check => {
                    if Self::check(ws) {
                        self.stage = Stage::Finished(Outcome::Sorted);
                    } else if self.shuffles >= self.limit {
                        self.stage = Stage::Finished(Outcome::GaveUp {
                            shuffles: self.shuffles,
                        });
                    } else {
                        self.shuffles += 1;
                        self.i = ws.len() - 1;
                        self.stage = Stage::Pick;
                    }
                }
                Stage::Pick => {
                    let i = self.i;
                    let j = self.rng.gen_range(0..=i);
                    self.stage = Stage::Swap { i, j };
                    // Shown as a comparison but not counted as one.
                    return Some(Event::compare(i, j));
                }
                Stage::Swap { i, j } => {
                    ws.swap(i, j);
                    ws.stats.exchange();
                    self.i -= 1;
                    self.stage = if self.i == 0 { Stage::Check } else { Stage::Pick };
                    return Some(Event::swap(i, j));
                }
            }
        }
    }

    fn outcome(&self) -> Outcome {
        match self.stage {
            Stage::Finished(outcome) => outcome,
            _ => Outcome::Sorted,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/bogo.rs"]
mod tests;
