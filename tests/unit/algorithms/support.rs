//! Helpers for driving a single machine without the public `SortRun` wrapper.

use crate::engine::Resume;
use crate::engine::event::{Event, Indices};
use crate::engine::workspace::Workspace;
use crate::foundation::stats::SortStats;

pub(crate) struct Trace {
    pub(crate) events: Vec<Event>,
    pub(crate) stats: SortStats,
}

impl Trace {
    pub(crate) fn compares(&self) -> Vec<Indices> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Compare(ix) => Some(ix.clone()),
                Event::Write(_) => None,
            })
            .collect()
    }

    pub(crate) fn writes(&self) -> Vec<Indices> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Write(ix) => Some(ix.clone()),
                Event::Compare(_) => None,
            })
            .collect()
    }
}

/// Resume `machine` until it finishes, checking it stays finished afterwards.
pub(crate) fn drive<M: Resume>(mut machine: M, data: &mut [u32]) -> Trace {
    let mut ws = Workspace::new(data);
    let mut events = Vec::new();
    while let Some(ev) = machine.resume(&mut ws) {
        events.push(ev);
        assert!(events.len() < 5_000_000, "machine does not terminate");
    }
    let stats = ws.stats;
    assert!(machine.resume(&mut ws).is_none(), "machine resumed after finishing");
    assert_eq!(ws.stats, stats, "finished machine touched the counters");
    Trace { events, stats }
}

pub(crate) fn ix(v: &[usize]) -> Indices {
    v.iter().copied().collect()
}
