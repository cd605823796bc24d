//! Insertion family: straight insertion, binary insertion, shell sort.

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Pick,
    Probe,
    Shift,
}

/// Straight insertion. Only inversions are announced as comparisons; the final, failing
/// comparison of each inner loop is counted silently.
#[derive(Debug)]
pub(crate) struct InsertionSort {
    stage: Stage,
    i: usize,
    key: u32,
    // Slot currently being filled; the element to its left is the next candidate.
    hole: usize,
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self {
            stage: Stage::Pick,
            i: 1,
            key: 0,
            hole: 0,
        }
    }
}

impl Resume for InsertionSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        let n = ws.len();
        loop {
            match self.stage {
                Stage::Pick => {
                    if self.i >= n {
                        return None;
                    }
                    self.key = ws.get(self.i);
                    ws.stats.access(1);
                    self.hole = self.i;
                    self.stage = Stage::Probe;
                }
                Stage::Probe => {
                    let hole = self.hole;
                    if hole > 0 && ws.get(hole - 1) > self.key {
                        ws.stats.compare();
                        self.stage = Stage::Shift;
                        return Some(Event::compare(hole - 1, hole));
                    }
                    if hole > 0 {
                        ws.stats.comparisons += 1;
                        ws.stats.access(1);
                    }
                    ws.set(hole, self.key);
                    ws.stats.access(1);
                    if hole != self.i {
                        ws.stats.swaps += 1;
                    }
                    self.i += 1;
                    self.stage = Stage::Pick;
                    return Some(Event::write(hole));
                }
                Stage::Shift => {
                    let hole = self.hole;
                    ws.set(hole, ws.get(hole - 1));
                    ws.stats.moved(2);
                    self.hole -= 1;
                    self.stage = Stage::Probe;
                    return Some(Event::write(hole));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchStage {
    Pick,
    Search,
    Narrow { mid: usize },
    Shift,
}

/// Insertion sort that locates the insertion point by binary search over the sorted prefix.
/// Every probe of the search is announced.
#[derive(Debug)]
pub(crate) struct BinaryInsertionSort {
    stage: SearchStage,
    i: usize,
    key: u32,
    // Half-open search window over the sorted prefix `[0, i)`.
    lo: usize,
    hi: usize,
    // One past the next element to shift right.
    shift: usize,
}

impl Default for BinaryInsertionSort {
    fn default() -> Self {
        Self {
            stage: SearchStage::Pick,
            i: 1,
            key: 0,
            lo: 0,
            hi: 0,
            shift: 0,
        }
    }
}

impl Resume for BinaryInsertionSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        let n = ws.len();
        loop {
            match self.stage {
                SearchStage::Pick => {
                    if self.i >= n {
                        return None;
                    }
                    self.key = ws.get(self.i);
                    ws.stats.access(1);
                    self.lo = 0;
                    self.hi = self.i;
                    self.stage = SearchStage::Search;
                }
                SearchStage::Search => {
                    if self.lo < self.hi {
                        let mid = (self.lo + self.hi - 1) / 2;
                        ws.stats.compare();
                        self.stage = SearchStage::Narrow { mid };
                        return Some(Event::compare(mid, self.i));
                    }
                    self.shift = self.i;
                    self.stage = SearchStage::Shift;
                }
                SearchStage::Narrow { mid } => {
                    if ws.get(mid) > self.key {
                        self.hi = mid;
                    } else {
                        self.lo = mid + 1;
                    }
                    self.stage = SearchStage::Search;
                }
                SearchStage::Shift => {
                    let at = self.shift;
                    if at > self.lo {
                        ws.set(at, ws.get(at - 1));
                        ws.stats.moved(2);
                        self.shift -= 1;
                        return Some(Event::write(at));
                    }
                    ws.set(self.lo, self.key);
                    ws.stats.access(1);
                    self.i += 1;
                    self.stage = SearchStage::Pick;
                    return Some(Event::write(self.lo));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GapStage {
    Pick,
    Probe,
    Judge,
    Place,
}

/// Gapped insertion sort with gaps `n/2, n/4, ..., 1`.
#[derive(Debug)]
pub(crate) struct ShellSort {
    stage: GapStage,
    gap: usize,
    i: usize,
    j: usize,
    temp: u32,
}

impl ShellSort {
    pub(crate) fn new(len: usize) -> Self {
        let gap = len / 2;
        Self {
            stage: GapStage::Pick,
            gap,
            i: gap,
            j: 0,
            temp: 0,
        }
    }
}

impl Resume for ShellSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        let n = ws.len();
        loop {
            match self.stage {
                GapStage::Pick => {
                    if self.gap == 0 {
                        return None;
                    }
                    if self.i >= n {
                        self.gap /= 2;
                        self.i = self.gap;
                        continue;
                    }
                    self.temp = ws.get(self.i);
                    ws.stats.access(1);
                    self.j = self.i;
                    self.stage = GapStage::Probe;
                }
                GapStage::Probe => {
                    if self.j >= self.gap {
                        ws.stats.compare();
                        self.stage = GapStage::Judge;
                        return Some(Event::compare(self.j, self.j - self.gap));
                    }
                    self.stage = GapStage::Place;
                }
                GapStage::Judge => {
                    let j = self.j;
                    let from = j - self.gap;
                    if ws.get(from) > self.temp {
                        ws.set(j, ws.get(from));
                        ws.stats.moved(2);
                        self.j = from;
                        self.stage = GapStage::Probe;
                        return Some(Event::write(j));
                    }
                    self.stage = GapStage::Place;
                }
                GapStage::Place => {
                    ws.set(self.j, self.temp);
                    ws.stats.access(1);
                    self.i += 1;
                    self.stage = GapStage::Pick;
                    return Some(Event::write(self.j));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/insertion.rs"]
mod tests;
