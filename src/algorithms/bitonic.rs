//! Bitonic sort.
//!
//! The network only works on power-of-two lengths, so the workspace is padded on the first
//! resume with values strictly larger than any real element. Padding sorts to the tail and is
//! dropped again before the machine reports completion.

use crate::algorithms::exchange::CompareExchange;
use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Sort { low: usize, cnt: usize, asc: bool },
    Merge { low: usize, cnt: usize, asc: bool },
}

/// Compare-exchange of `i` with `i + k` for every `i` in `low..low + k`.
#[derive(Debug)]
struct Sweep {
    i: usize,
    end: usize,
    k: usize,
    asc: bool,
    pending: Option<CompareExchange>,
}

impl Resume for Sweep {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        if let Some(ev) = self.pending.take().and_then(|x| x.resolve(ws)) {
            return Some(ev);
        }
        if self.i >= self.end {
            return None;
        }
        let x = CompareExchange {
            lo: self.i,
            hi: self.i + self.k,
            ascending: self.asc,
        };
        self.i += 1;
        self.pending = Some(x);
        Some(x.announce(ws))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pad,
    Network,
    Done,
}

#[derive(Debug)]
pub(crate) struct BitonicSort {
    phase: Phase,
    frames: Vec<Frame>,
    active: Option<Sweep>,
}

impl Default for BitonicSort {
    fn default() -> Self {
        Self {
            phase: Phase::Pad,
            frames: Vec::new(),
            active: None,
        }
    }
}

/// Smallest power of two holding `n` elements; lengths below two need no network.
pub(crate) fn padded_len(n: usize) -> usize {
    if n < 2 { n } else { n.next_power_of_two() }
}

impl BitonicSort {
    fn pad(&mut self, ws: &mut Workspace<'_>) {
        let n = ws.public_len();
        let target = padded_len(n);
        if target > n {
            let base = ws.max().unwrap_or(0).saturating_add(1);
            ws.pad_to(target, |slot| base.saturating_add(slot as u32));
        }
        ws.stats.access(n as u64);
        if target > 1 {
            self.frames.push(Frame::Sort {
                low: 0,
                cnt: target,
                asc: true,
            });
        }
        tracing::trace!(len = n, padded = target, "bitonic network sized");
    }
}

impl Resume for BitonicSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Pad => {
                    self.pad(ws);
                    self.phase = Phase::Network;
                }
                Phase::Network => {}
            }

            if let Some(mut sweep) = self.active.take() {
                if let Some(ev) = sweep.resume(ws) {
                    self.active = Some(sweep);
                    return Some(ev);
                }
            }

            match self.frames.pop() {
                None => {
                    ws.unpad();
                    self.phase = Phase::Done;
                }
                Some(Frame::Sort { low, cnt, asc }) => {
                    if cnt > 1 {
                        let k = cnt / 2;
                        self.frames.push(Frame::Merge { low, cnt, asc });
                        self.frames.push(Frame::Sort {
                            low: low + k,
                            cnt: k,
                            asc: false,
                        });
                        self.frames.push(Frame::Sort {
                            low,
                            cnt: k,
                            asc: true,
                        });
                    }
                }
                Some(Frame::Merge { low, cnt, asc }) => {
                    if cnt > 1 {
                        let k = cnt / 2;
                        self.frames.push(Frame::Merge {
                            low: low + k,
                            cnt: k,
                            asc,
                        });
                        self.frames.push(Frame::Merge { low, cnt: k, asc });
                        self.active = Some(Sweep {
                            i: low,
                            end: low + k,
                            k,
                            asc,
                            pending: None,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/bitonic.rs"]
mod tests;
