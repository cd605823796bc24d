//! Counting sort, and the stable counting pass LSD radix sort is built from.

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

/// What a counting pass tallies by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    /// Decimal digit at place `exp` (1, 10, 100, ...).
    Digit { exp: u64 },
    /// Offset from the smallest value; `max` bounds the table.
    Offset { min: u32, max: u32 },
}

impl Key {
    fn of(self, v: u32) -> usize {
        match self {
            Self::Digit { exp } => ((u64::from(v) / exp) % 10) as usize,
            Self::Offset { min, .. } => (v - min) as usize,
        }
    }

    /// Size of the frequency table: 10 digits, or `max - min + 1` offsets.
    fn table_len(self) -> usize {
        match self {
            Self::Digit { .. } => 10,
            Self::Offset { min, max } => (max - min) as usize + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Tally,
    Write,
}

/// One stable counting pass: tally every element (one read event each), scatter into an
/// output buffer silently, then write the buffer back (one write event each).
#[derive(Debug)]
pub(crate) struct CountingPass {
    key: Key,
    stage: Pass,
    i: usize,
    counts: Vec<usize>,
    output: Vec<u32>,
}

impl CountingPass {
    pub(crate) fn new(key: Key) -> Self {
        Self {
            key,
            stage: Pass::Tally,
            i: 0,
            counts: vec![0; key.table_len()],
            output: Vec::new(),
        }
    }

    fn scatter(&mut self, ws: &mut Workspace<'_>) {
        let n = ws.len();
        let mut running = 0;
        for count in &mut self.counts {
            running += *count;
            *count = running;
        }

        self.output = vec![0; n];
        for i in (0..n).rev() {
            let v = ws.get(i);
            ws.stats.access(1);
            if let Some(end) = self.counts.get_mut(self.key.of(v)) {
                *end -= 1;
                self.output[*end] = v;
            }
        }
    }
}

impl Resume for CountingPass {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        let n = ws.len();
        if self.stage == Pass::Tally {
            if self.i < n {
                let i = self.i;
                let key = self.key.of(ws.get(i));
                ws.stats.access(1);
                if let Some(count) = self.counts.get_mut(key) {
                    *count += 1;
                }
                self.i += 1;
                return Some(Event::probe(i));
            }
            self.scatter(ws);
            self.stage = Pass::Write;
            self.i = 0;
        }

        let i = self.i;
        let v = *self.output.get(i)?;
        ws.set(i, v);
        ws.stats.moved(1);
        self.i += 1;
        Some(Event::write(i))
    }
}

#[derive(Debug, Default)]
pub(crate) struct CountingSort {
    started: bool,
    pass: Option<CountingPass>,
}

impl Resume for CountingSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if !self.started {
            self.started = true;
            let (min, max) = (ws.min()?, ws.max()?);
            ws.stats.access(2 * ws.len() as u64);
            self.pass = Some(CountingPass::new(Key::Offset { min, max }));
        }
        self.pass.as_mut()?.resume(ws)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/counting.rs"]
mod tests;
