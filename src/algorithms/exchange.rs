//! Adjacent and gapped exchange sorts: bubble, cocktail shaker, gnome, comb, odd-even.
//!
//! Each of these compares a pair, suspends, and on the next resume swaps the pair if it is out
//! of order. The pending pair is held in a [`CompareExchange`] between the two resumes.

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

/// A comparison that has been announced but not yet acted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CompareExchange {
    pub(crate) lo: usize,
    pub(crate) hi: usize,
    pub(crate) ascending: bool,
}

impl CompareExchange {
    pub(crate) fn ascending(lo: usize, hi: usize) -> Self {
        Self {
            lo,
            hi,
            ascending: true,
        }
    }

    /// Count the comparison and return the event announcing it.
    pub(crate) fn announce(self, ws: &mut Workspace<'_>) -> Event {
        ws.stats.compare();
        Event::compare(self.lo, self.hi)
    }

    /// Swap the pair if `(a[lo] > a[hi]) == ascending` and return the swap event.
    pub(crate) fn resolve(self, ws: &mut Workspace<'_>) -> Option<Event> {
        if (ws.get(self.lo) > ws.get(self.hi)) != self.ascending {
            return None;
        }
        ws.swap(self.lo, self.hi);
        ws.stats.exchange();
        Some(Event::swap(self.lo, self.hi))
    }
}

#[derive(Debug, Default)]
pub(crate) struct BubbleSort {
    pass: usize,
    j: usize,
    pending: Option<CompareExchange>,
}

impl Resume for BubbleSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if let Some(ev) = self.pending.take().and_then(|x| x.resolve(ws)) {
            return Some(ev);
        }

        let n = ws.len();
        loop {
            if self.pass + 1 >= n {
                return None;
            }
            if self.j + 1 < n - self.pass {
                let x = CompareExchange::ascending(self.j, self.j + 1);
                self.j += 1;
                self.pending = Some(x);
                return Some(x.announce(ws));
            }
            self.pass += 1;
            self.j = 0;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    Forward,
    Backward,
    Done,
}

/// Bubble sort alternating direction; the sorted region grows from both ends.
#[derive(Debug)]
pub(crate) struct CocktailShakerSort {
    sweep: Sweep,
    start: usize,
    end: usize,
    // Forward: next left index. Backward: one past the next left index.
    cursor: usize,
    swapped: bool,
    pending: Option<CompareExchange>,
}

impl CocktailShakerSort {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            sweep: Sweep::Forward,
            start: 0,
            end: len.saturating_sub(1),
            cursor: 0,
            swapped: false,
            pending: None,
        }
    }
}

impl Resume for CocktailShakerSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if let Some(ev) = self.pending.take().and_then(|x| x.resolve(ws)) {
            self.swapped = true;
            return Some(ev);
        }

        loop {
            match self.sweep {
                Sweep::Forward => {
                    if self.cursor < self.end {
                        let x = CompareExchange::ascending(self.cursor, self.cursor + 1);
                        self.cursor += 1;
                        self.pending = Some(x);
                        return Some(x.announce(ws));
                    }
                    if !self.swapped {
                        self.sweep = Sweep::Done;
                        continue;
                    }
                    self.swapped = false;
                    // The forward pass swapped at least once, so `end > start`.
                    self.end -= 1;
                    self.cursor = self.end;
                    self.sweep = Sweep::Backward;
                }
                Sweep::Backward => {
                    if self.cursor > self.start {
                        self.cursor -= 1;
                        let x = CompareExchange::ascending(self.cursor, self.cursor + 1);
                        self.pending = Some(x);
                        return Some(x.announce(ws));
                    }
                    self.start += 1;
                    if !self.swapped {
                        self.sweep = Sweep::Done;
                        continue;
                    }
                    self.swapped = false;
                    self.cursor = self.start;
                    self.sweep = Sweep::Forward;
                }
                Sweep::Done => return None,
            }
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct GnomeSort {
    pos: usize,
    stepping_back: bool,
}

impl Resume for GnomeSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if self.stepping_back {
            self.stepping_back = false;
            let i = self.pos;
            ws.swap(i, i - 1);
            ws.stats.exchange();
            self.pos -= 1;
            return Some(Event::swap(i, i - 1));
        }

        let n = ws.len();
        while self.pos < n {
            let i = self.pos;
            if i == 0 {
                self.pos += 1;
                continue;
            }
            ws.stats.compare();
            if ws.get(i) >= ws.get(i - 1) {
                self.pos += 1;
                continue;
            }
            self.stepping_back = true;
            return Some(Event::compare(i, i - 1));
        }
        None
    }
}

/// Bubble sort over a shrinking gap (`gap = gap * 10 / 13`), finishing with gap-1 passes
/// until one makes no swap.
#[derive(Debug)]
pub(crate) struct CombSort {
    gap: usize,
    i: usize,
    scanning: bool,
    sorted: bool,
    pending: Option<CompareExchange>,
}

impl CombSort {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            gap: len,
            i: 0,
            scanning: false,
            sorted: false,
            pending: None,
        }
    }
}

impl Resume for CombSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if let Some(ev) = self.pending.take().and_then(|x| x.resolve(ws)) {
            self.sorted = false;
            return Some(ev);
        }

        let n = ws.len();
        loop {
            if self.scanning {
                if self.i + self.gap < n {
                    let x = CompareExchange::ascending(self.i, self.i + self.gap);
                    self.i += 1;
                    self.pending = Some(x);
                    return Some(x.announce(ws));
                }
                if self.sorted {
                    return None;
                }
            }
            // Shrink by 1.3 in integer arithmetic.
            self.gap = self.gap * 10 / 13;
            if self.gap <= 1 {
                self.gap = 1;
                self.sorted = true;
            }
            self.i = 0;
            self.scanning = true;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Odd,
    Even,
}

/// Alternating odd/even transposition passes until a full round makes no swap.
#[derive(Debug)]
pub(crate) struct OddEvenSort {
    phase: Phase,
    i: usize,
    sorted: bool,
    pending: Option<CompareExchange>,
}

impl Default for OddEvenSort {
    fn default() -> Self {
        Self {
            phase: Phase::Odd,
            i: 1,
            sorted: true,
            pending: None,
        }
    }
}

impl Resume for OddEvenSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if let Some(ev) = self.pending.take().and_then(|x| x.resolve(ws)) {
            self.sorted = false;
            return Some(ev);
        }

        let n = ws.len();
        loop {
            if self.i + 1 < n {
                let x = CompareExchange::ascending(self.i, self.i + 1);
                self.i += 2;
                self.pending = Some(x);
                return Some(x.announce(ws));
            }
            match self.phase {
                Phase::Odd => {
                    self.phase = Phase::Even;
                    self.i = 0;
                }
                Phase::Even => {
                    if self.sorted {
                        return None;
                    }
                    self.sorted = true;
                    self.phase = Phase::Odd;
                    self.i = 1;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/exchange.rs"]
mod tests;
