//! Resumable execution core.
//!
//! Every algorithm is a state machine implementing [`Resume`]. The driver ([`run::SortRun`])
//! calls `resume` once per pull, turns the returned [`event::Event`] into an owned
//! [`step::Step`], and reports a [`run::Summary`] once the machine runs dry.

pub(crate) mod event;
pub(crate) mod run;
pub(crate) mod step;
pub mod strips;
pub(crate) mod workspace;

use crate::engine::event::Event;
use crate::engine::run::Outcome;
use crate::engine::workspace::Workspace;

/// Capability shared by every instrumented algorithm.
pub(crate) trait Resume {
    /// Advance until the next observable event and return it, or `None` once finished.
    ///
    /// After returning `None` once, every later call must return `None` again without
    /// touching the workspace.
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event>;

    /// How the machine terminated. Only meaningful after `resume` returned `None`.
    fn outcome(&self) -> Outcome {
        Outcome::Sorted
    }
}
