//! Quick sort with Lomuto partitioning around the last element.

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

/// One in-flight partition of `lo..hi`.
#[derive(Debug, Clone, Copy)]
struct Partition {
    lo: usize,
    hi: usize,
    pivot: u32,
    // Next slot for an element smaller than the pivot.
    store: usize,
    j: usize,
    judging: bool,
}

impl Partition {
    fn pivot_slot(&self) -> usize {
        self.hi - 1
    }
}

#[derive(Debug)]
pub(crate) struct QuickSort {
    // Pending half-open ranges; the top is partitioned next.
    pending: Vec<(usize, usize)>,
    active: Option<Partition>,
}

impl QuickSort {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            pending: vec![(0, len)],
            active: None,
        }
    }
}

impl Resume for QuickSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        loop {
            let Some(mut p) = self.active.take() else {
                let (lo, hi) = self.pending.pop()?;
                if hi.saturating_sub(lo) < 2 {
                    continue;
                }
                let pivot = ws.get(hi - 1);
                ws.stats.access(1);
                self.active = Some(Partition {
                    lo,
                    hi,
                    pivot,
                    store: lo,
                    j: lo,
                    judging: false,
                });
                continue;
            };

            if p.judging {
                p.judging = false;
                let j = p.j;
                p.j += 1;
                if ws.get(j) < p.pivot {
                    let store = p.store;
                    p.store += 1;
                    ws.swap(store, j);
                    ws.stats.exchange();
                    self.active = Some(p);
                    return Some(Event::swap(store, j));
                }
                self.active = Some(p);
                continue;
            }

            if p.j < p.pivot_slot() {
                ws.stats.compare();
                p.judging = true;
                let ev = Event::compare(p.j, p.pivot_slot());
                self.active = Some(p);
                return Some(ev);
            }

            // Drop the pivot between the halves; left half runs first.
            let at = p.store;
            let last = p.pivot_slot();
            ws.swap(at, last);
            ws.stats.exchange();
            self.pending.push((at + 1, p.hi));
            self.pending.push((p.lo, at));
            return Some(Event::swap(at, last));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/quick.rs"]
mod tests;
