//! Decimal radix sorts: least-significant-digit first and most-significant-digit first.

use crate::algorithms::counting::{CountingPass, Key};
use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

/// One stable counting pass per decimal digit of the largest value.
#[derive(Debug, Default)]
pub(crate) struct LsdRadixSort {
    started: bool,
    max: u64,
    exp: u64,
    pass: Option<CountingPass>,
}

impl Resume for LsdRadixSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if !self.started {
            self.started = true;
            self.max = ws.max().map_or(0, u64::from);
            self.exp = 1;
            ws.stats.access(ws.len() as u64);
        }
        loop {
            if let Some(mut pass) = self.pass.take() {
                if let Some(ev) = pass.resume(ws) {
                    self.pass = Some(pass);
                    return Some(ev);
                }
            }
            if self.max / self.exp == 0 {
                return None;
            }
            self.pass = Some(CountingPass::new(Key::Digit { exp: self.exp }));
            self.exp *= 10;
        }
    }
}

/// Number of decimal digits in `v`; zero has one.
pub(crate) fn decimal_digits(v: u32) -> u32 {
    v.checked_ilog10().map_or(1, |d| d + 1)
}

/// Range `lo..hi` still to be bucketed on `places` more digits, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    lo: usize,
    hi: usize,
    places: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucketing {
    Probe,
    Write,
}

/// Distribute `lo..hi` into ten buckets by one digit, then write the buckets back in order.
#[derive(Debug)]
struct BucketPass {
    frame: Frame,
    stage: Bucketing,
    i: usize,
    buckets: [Vec<u32>; 10],
    output: Vec<u32>,
}

impl BucketPass {
    fn new(frame: Frame) -> Self {
        Self {
            frame,
            stage: Bucketing::Probe,
            i: frame.lo,
            buckets: Default::default(),
            output: Vec::new(),
        }
    }

    fn digit(&self, v: u32) -> usize {
        let pow = 10u64.pow(self.frame.places - 1);
        ((u64::from(v) / pow) % 10) as usize
    }

    /// Child ranges for every bucket holding more than one element, in bucket order.
    fn children(&self) -> Vec<Frame> {
        let mut pos = self.frame.lo;
        let mut out = Vec::new();
        for bucket in &self.buckets {
            if bucket.len() > 1 {
                out.push(Frame {
                    lo: pos,
                    hi: pos + bucket.len(),
                    places: self.frame.places - 1,
                });
            }
            pos += bucket.len();
        }
        out
    }
}

impl Resume for BucketPass {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if self.stage == Bucketing::Probe {
            if self.i < self.frame.hi {
                let i = self.i;
                let v = ws.get(i);
                ws.stats.access(1);
                let d = self.digit(v);
                self.buckets[d].push(v);
                self.i += 1;
                return Some(Event::probe(i));
            }
            self.output = self.buckets.iter().flatten().copied().collect();
            self.stage = Bucketing::Write;
            self.i = 0;
        }

        let v = *self.output.get(self.i)?;
        let at = self.frame.lo + self.i;
        ws.set(at, v);
        ws.stats.moved(1);
        self.i += 1;
        Some(Event::write(at))
    }
}

/// Recursive bucketing by the most significant digit, explicit stack, bucket 0 first.
#[derive(Debug, Default)]
pub(crate) struct MsdRadixSort {
    started: bool,
    frames: Vec<Frame>,
    pass: Option<BucketPass>,
}

impl Resume for MsdRadixSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if !self.started {
            self.started = true;
            let n = ws.len();
            ws.stats.access(n as u64);
            if let Some(max) = ws.max() {
                self.frames.push(Frame {
                    lo: 0,
                    hi: n,
                    places: decimal_digits(max),
                });
            }
        }
        loop {
            if let Some(mut pass) = self.pass.take() {
                if let Some(ev) = pass.resume(ws) {
                    self.pass = Some(pass);
                    return Some(ev);
                }
                self.frames.extend(pass.children().into_iter().rev());
            }

            let frame = self.frames.pop()?;
            if frame.hi - frame.lo < 2 || frame.places == 0 {
                continue;
            }
            self.pass = Some(BucketPass::new(frame));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/radix.rs"]
mod tests;
