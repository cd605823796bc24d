//! Selection family: selection sort, cycle sort, pancake sort.
//!
//! All three scan the unsorted region for a target position before moving anything.

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Start,
    Next,
    Judge,
}

#[derive(Debug)]
pub(crate) struct SelectionSort {
    scan: Scan,
    i: usize,
    j: usize,
    min: usize,
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self {
            scan: Scan::Start,
            i: 0,
            j: 0,
            min: 0,
        }
    }
}

impl Resume for SelectionSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        let n = ws.len();
        loop {
            match self.scan {
                Scan::Start => {
                    if self.i + 1 >= n {
                        return None;
                    }
                    self.min = self.i;
                    self.j = self.i + 1;
                    ws.stats.access(1);
                    self.scan = Scan::Next;
                }
                Scan::Next => {
                    if self.j < n {
                        ws.stats.compare();
                        self.scan = Scan::Judge;
                        return Some(Event::compare(self.min, self.j));
                    }
                    let (i, min) = (self.i, self.min);
                    self.i += 1;
                    self.scan = Scan::Start;
                    if min != i {
                        ws.swap(i, min);
                        ws.stats.exchange();
                        return Some(Event::swap(i, min));
                    }
                }
                Scan::Judge => {
                    if ws.get(self.j) < ws.get(self.min) {
                        self.min = self.j;
                    }
                    self.j += 1;
                    self.scan = Scan::Next;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cycle {
    Begin,
    Scan,
    Judge,
    Place,
}

/// Cycle sort: each element is written straight to its final slot, so the number of writes is
/// minimal. `item` is the value in hand while following a cycle.
#[derive(Debug)]
pub(crate) struct CycleSort {
    cycle: Cycle,
    start: usize,
    item: u32,
    pos: usize,
    i: usize,
    rotating: bool,
}

impl Default for CycleSort {
    fn default() -> Self {
        Self {
            cycle: Cycle::Begin,
            start: 0,
            item: 0,
            pos: 0,
            i: 0,
            rotating: false,
        }
    }
}

impl CycleSort {
    fn rescan(&mut self) {
        self.pos = self.start;
        self.i = self.start + 1;
        self.cycle = Cycle::Scan;
    }

    fn next_cycle(&mut self) {
        self.start += 1;
        self.cycle = Cycle::Begin;
    }
}

impl Resume for CycleSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        let n = ws.len();
        loop {
            match self.cycle {
                Cycle::Begin => {
                    if self.start + 1 >= n {
                        return None;
                    }
                    self.item = ws.get(self.start);
                    ws.stats.access(1);
                    self.rotating = false;
                    self.rescan();
                }
                Cycle::Scan => {
                    if self.i < n {
                        ws.stats.compare();
                        self.cycle = Cycle::Judge;
                        return Some(Event::compare(self.start, self.i));
                    }
                    if !self.rotating && self.pos == self.start {
                        // Already in place.
                        self.next_cycle();
                        continue;
                    }
                    // Skip duplicates of `item` so equal values keep distinct slots.
                    while self.pos < n && ws.get(self.pos) == self.item {
                        ws.stats.comparisons += 1;
                        ws.stats.access(1);
                        self.pos += 1;
                    }
                    self.cycle = Cycle::Place;
                }
                Cycle::Judge => {
                    if ws.get(self.i) < self.item {
                        self.pos += 1;
                    }
                    self.i += 1;
                    self.cycle = Cycle::Scan;
                }
                Cycle::Place => {
                    let pos = self.pos;
                    if pos >= n {
                        debug_assert!(false, "cycle sort ran off the end at {pos}");
                        self.next_cycle();
                        continue;
                    }
                    let displaced = ws.get(pos);
                    ws.set(pos, self.item);
                    self.item = displaced;
                    ws.stats.access(2);
                    ws.stats.swaps += 1;

                    if pos == self.start {
                        self.next_cycle();
                    } else {
                        self.rotating = true;
                        self.rescan();
                    }
                    return Some(Event::write(pos));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flip {
    left: usize,
    right: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pancake {
    Begin,
    Scan,
    Judge,
}

/// Pancake sort: only prefix reversals move data. Each exchange inside a flip is its own step.
#[derive(Debug)]
pub(crate) struct PancakeSort {
    stage: Pancake,
    size: usize,
    i: usize,
    max: usize,
    flip: Option<Flip>,
    queued: Option<usize>,
}

impl PancakeSort {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            stage: Pancake::Begin,
            size: len,
            i: 0,
            max: 0,
            flip: None,
            queued: None,
        }
    }
}

impl Resume for PancakeSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        loop {
            if let Some(flip) = &mut self.flip {
                if flip.left < flip.right {
                    let (l, r) = (flip.left, flip.right);
                    flip.left += 1;
                    flip.right -= 1;
                    ws.swap(l, r);
                    ws.stats.exchange();
                    return Some(Event::swap(l, r));
                }
                self.flip = self.queued.take().map(|k| Flip { left: 0, right: k });
                continue;
            }

            match self.stage {
                Pancake::Begin => {
                    if self.size < 2 {
                        return None;
                    }
                    self.max = 0;
                    self.i = 0;
                    self.stage = Pancake::Scan;
                }
                Pancake::Scan => {
                    if self.i < self.size {
                        ws.stats.compare();
                        self.stage = Pancake::Judge;
                        return Some(Event::compare(self.i, self.max));
                    }
                    let last = self.size - 1;
                    if self.max != last {
                        self.flip = Some(Flip {
                            left: 0,
                            right: self.max,
                        });
                        self.queued = Some(last);
                    }
                    self.size -= 1;
                    self.stage = Pancake::Begin;
                }
                Pancake::Judge => {
                    if ws.get(self.i) > ws.get(self.max) {
                        self.max = self.i;
                    }
                    self.i += 1;
                    self.stage = Pancake::Scan;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/selection.rs"]
mod tests;
