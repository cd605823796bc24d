//! Bucket sort over `ceil(sqrt(n))` equal-width value ranges.

use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::workspace::Workspace;
use crate::foundation::stats::SortStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Distribute,
    Gather,
    Done,
}

#[derive(Debug)]
pub(crate) struct BucketSort {
    stage: Stage,
    min: u32,
    width: f64,
    buckets: Vec<Vec<u32>>,
    i: usize,
    // Gather cursor: bucket, offset inside it, destination slot.
    bucket: usize,
    offset: usize,
    dest: usize,
}

impl Default for BucketSort {
    fn default() -> Self {
        Self {
            stage: Stage::Start,
            min: 0,
            width: 1.0,
            buckets: Vec::new(),
            i: 0,
            bucket: 0,
            offset: 0,
            dest: 0,
        }
    }
}

/// Insertion-sorts a bucket off-screen. Only comparisons are counted; the bucket is private
/// scratch space, not the visualized array.
fn settle(bucket: &mut [u32], stats: &mut SortStats) {
    for i in 1..bucket.len() {
        let key = bucket[i];
        let mut j = i;
        while j > 0 && bucket[j - 1] > key {
            stats.comparisons += 1;
            bucket[j] = bucket[j - 1];
            j -= 1;
        }
        stats.comparisons += 1;
        bucket[j] = key;
    }
}

impl BucketSort {
    fn slot_for(&self, v: u32) -> usize {
        let raw = (f64::from(v - self.min) / self.width).floor() as usize;
        raw.min(self.buckets.len() - 1)
    }
}

impl Resume for BucketSort {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        let n = ws.len();
        loop {
            match self.stage {
                Stage::Done => return None,
                Stage::Start => {
                    let (Some(min), Some(max)) = (ws.min(), ws.max()) else {
                        self.stage = Stage::Done;
                        continue;
                    };
                    if n <= 1 {
                        self.stage = Stage::Done;
                        continue;
                    }
                    ws.stats.access(2 * n as u64);
                    let count = (n as f64).sqrt().ceil() as usize;
                    self.min = min;
                    self.width = f64::from(max - min) / count as f64 + 1.0;
                    self.buckets = vec![Vec::new(); count];
                    self.stage = Stage::Distribute;
                }
                Stage::Distribute => {
                    if self.i < n {
                        let i = self.i;
                        let v = ws.get(i);
                        ws.stats.access(1);
                        let slot = self.slot_for(v);
                        self.buckets[slot].push(v);
                        self.i += 1;
                        return Some(Event::probe(i));
                    }
                    if let Some(first) = self.buckets.first_mut() {
                        settle(first, &mut ws.stats);
                    }
                    self.stage = Stage::Gather;
                }
                Stage::Gather => {
                    let Some(bucket) = self.buckets.get(self.bucket) else {
                        self.stage = Stage::Done;
                        continue;
                    };
                    if let Some(&v) = bucket.get(self.offset) {
                        let dest = self.dest;
                        ws.set(dest, v);
                        ws.stats.moved(1);
                        self.offset += 1;
                        self.dest += 1;
                        return Some(Event::write(dest));
                    }
                    self.bucket += 1;
                    self.offset = 0;
                    if let Some(next) = self.buckets.get_mut(self.bucket) {
                        settle(next, &mut ws.stats);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/bucket.rs"]
mod tests;
