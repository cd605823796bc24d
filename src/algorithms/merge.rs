//! Top-down merge sort driven by an explicit frame stack.

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

/// Ranges are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Sort { l: usize, r: usize },
    Merge { l: usize, mid: usize, r: usize },
}

/// Merge of `l..=mid` and `mid+1..=r` from copies of both halves.
#[derive(Debug)]
struct MergeRun {
    left: Vec<u32>,
    right: Vec<u32>,
    l: usize,
    mid: usize,
    i: usize,
    j: usize,
    k: usize,
    // A comparison was announced and the winning element not yet written.
    compared: bool,
}

impl MergeRun {
    fn start(ws: &mut Workspace<'_>, l: usize, mid: usize, r: usize) -> Self {
        let left: Vec<u32> = (l..=mid).map(|i| ws.get(i)).collect();
        let right: Vec<u32> = (mid + 1..=r).map(|i| ws.get(i)).collect();
        ws.stats.access((left.len() + right.len()) as u64);
        Self {
            left,
            right,
            l,
            mid,
            i: 0,
            j: 0,
            k: l,
            compared: false,
        }
    }

    fn emit(&mut self, ws: &mut Workspace<'_>, value: u32) -> Event {
        let k = self.k;
        ws.set(k, value);
        ws.stats.moved(1);
        self.k += 1;
        Event::write(k)
    }
}

impl Resume for MergeRun {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        let (nl, nr) = (self.left.len(), self.right.len());
        if self.i < nl && self.j < nr {
            if !self.compared {
                self.compared = true;
                ws.stats.compare();
                return Some(Event::compare(self.l + self.i, self.mid + 1 + self.j));
            }
            self.compared = false;
            let value = if self.left[self.i] <= self.right[self.j] {
                self.i += 1;
                self.left[self.i - 1]
            } else {
                self.j += 1;
                self.right[self.j - 1]
            };
            return Some(self.emit(ws, value));
        }
        if self.i < nl {
            self.i += 1;
            let value = self.left[self.i - 1];
            return Some(self.emit(ws, value));
        }
        if self.j < nr {
            self.j += 1;
            let value = self.right[self.j - 1];
            return Some(self.emit(ws, value));
        }
        None
    }
}

#[derive(Debug)]
pub(crate) struct MergeSort {
    frames: Vec<Frame>,
    active: Option<MergeRun>,
}

impl MergeSort {
    pub(crate) fn new(len: usize) -> Self {
        let frames = match len {
            0 => Vec::new(),
            n => vec![Frame::Sort { l: 0, r: n - 1 }],
        };
        Self {
            frames,
            active: None,
        }
    }
}

impl Resume for MergeSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        loop {
            if let Some(mut run) = self.active.take() {
                if let Some(ev) = run.resume(ws) {
                    self.active = Some(run);
                    return Some(ev);
                }
            }

            match self.frames.pop()? {
                Frame::Sort { l, r } => {
                    if l >= r {
                        continue;
                    }
                    let mid = (l + r) / 2;
                    self.frames.push(Frame::Merge { l, mid, r });
                    self.frames.push(Frame::Sort { l: mid + 1, r });
                    self.frames.push(Frame::Sort { l, r: mid });
                }
                Frame::Merge { l, mid, r } => {
                    self.active = Some(MergeRun::start(ws, l, mid, r));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/merge.rs"]
mod tests;
