//! Heap sort over a max-heap.

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sift {
    Left,
    JudgeLeft,
    Right,
    JudgeRight,
    Exchange,
}

/// Restores the heap property below `root` within the first `size` slots.
#[derive(Debug)]
struct SiftDown {
    stage: Sift,
    root: usize,
    size: usize,
    largest: usize,
}

impl SiftDown {
    fn new(root: usize, size: usize) -> Self {
        Self {
            stage: Sift::Left,
            root,
            size,
            largest: root,
        }
    }

    fn left(&self) -> usize {
        2 * self.root + 1
    }

    fn right(&self) -> usize {
        2 * self.root + 2
    }
}

impl Resume for SiftDown {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        loop {
            match self.stage {
                Sift::Left => {
                    self.stage = Sift::Right;
                    let child = self.left();
                    if child < self.size {
                        ws.stats.compare();
                        self.stage = Sift::JudgeLeft;
                        return Some(Event::compare(child, self.largest));
                    }
                }
                Sift::JudgeLeft => {
                    let child = self.left();
                    if ws.get(child) > ws.get(self.largest) {
                        self.largest = child;
                    }
                    self.stage = Sift::Right;
                }
                Sift::Right => {
                    self.stage = Sift::Exchange;
                    let child = self.right();
                    if child < self.size {
                        ws.stats.compare();
                        self.stage = Sift::JudgeRight;
                        return Some(Event::compare(child, self.largest));
                    }
                }
                Sift::JudgeRight => {
                    let child = self.right();
                    if ws.get(child) > ws.get(self.largest) {
                        self.largest = child;
                    }
                    self.stage = Sift::Exchange;
                }
                Sift::Exchange => {
                    if self.largest == self.root {
                        return None;
                    }
                    let (root, largest) = (self.root, self.largest);
                    ws.swap(root, largest);
                    ws.stats.exchange();
                    self.root = largest;
                    self.stage = Sift::Left;
                    return Some(Event::swap(root, largest));
                }
            }
        }
    }
}

#[derive(Debug)]
pub(crate) struct HeapSort {
    // Build phase: next root to sift is `build - 1`.
    build: usize,
    // Extract phase: slots `end..` already hold their final values.
    end: usize,
    sift: Option<SiftDown>,
}

impl HeapSort {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            build: len / 2,
            end: len,
            sift: None,
        }
    }
}

impl Resume for HeapSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        loop {
            if let Some(mut sift) = self.sift.take() {
                if let Some(ev) = sift.resume(ws) {
                    self.sift = Some(sift);
                    return Some(ev);
                }
            }

            if self.build > 0 {
                self.build -= 1;
                self.sift = Some(SiftDown::new(self.build, ws.len()));
                continue;
            }

            if self.end <= 1 {
                return None;
            }
            self.end -= 1;
            let end = self.end;
            ws.swap(0, end);
            ws.stats.exchange();
            self.sift = Some(SiftDown::new(0, end));
            return Some(Event::swap(0, end));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/heap.rs"]
mod tests;
