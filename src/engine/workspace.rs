use crate::foundation::stats::SortStats;

/// Mutable state shared by every frame of one sort run.
///
/// The caller's slice is borrowed for the whole run and every write lands in it directly.
/// Algorithms that need a larger working length (bitonic sort) extend it with a side buffer
/// of padding slots; index `i >= public_len()` addresses `pad[i - public_len()]`. The padding
/// is never visible through the caller's slice.
pub(crate) struct Workspace<'a> {
    data: &'a mut [u32],
    pad: Vec<u32>,
    pub(crate) stats: SortStats,
}

impl<'a> Workspace<'a> {
    pub(crate) fn new(data: &'a mut [u32]) -> Self {
        Self {
            data,
            pad: Vec::new(),
            stats: SortStats::default(),
        }
    }

    /// Working length, padding included.
    pub(crate) fn len(&self) -> usize {
        self.data.len() + self.pad.len()
    }

    /// Length of the caller-owned slice.
    pub(crate) fn public_len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_padded(&self) -> bool {
        !self.pad.is_empty()
    }

    pub(crate) fn get(&self, i: usize) -> u32 {
        debug_assert!(i < self.len(), "read {i} out of bounds {}", self.len());
        match self.data.get(i) {
            Some(&v) => v,
            None => self.pad[i - self.data.len()],
        }
    }

    pub(crate) fn set(&mut self, i: usize, v: u32) {
        debug_assert!(i < self.len(), "write {i} out of bounds {}", self.len());
        let n = self.data.len();
        if i < n {
            self.data[i] = v;
        } else {
            self.pad[i - n] = v;
        }
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        let (va, vb) = (self.get(a), self.get(b));
        self.set(a, vb);
        self.set(b, va);
    }

    /// Largest value in the caller's slice.
    pub(crate) fn max(&self) -> Option<u32> {
        self.data.iter().copied().max()
    }

    /// Smallest value in the caller's slice.
    pub(crate) fn min(&self) -> Option<u32> {
        self.data.iter().copied().min()
    }

    /// Extend the working length to `len` with values produced by `fill(slot)`.
    pub(crate) fn pad_to(&mut self, len: usize, mut fill: impl FnMut(usize) -> u32) {
        let n = self.data.len();
        debug_assert!(self.pad.is_empty(), "workspace padded twice");
        self.pad = (n..len).map(&mut fill).collect();
    }

    /// Drop every padding slot, restoring the caller's length.
    pub(crate) fn unpad(&mut self) {
        self.pad.clear();
    }

    /// Owned copy of the full working contents.
    pub(crate) fn to_vec(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.data);
        out.extend_from_slice(&self.pad);
        out
    }

    /// Owned copy of the caller-visible contents.
    pub(crate) fn public_vec(&self) -> Vec<u32> {
        self.data.to_vec()
    }

    /// Uninstrumented sortedness check over the working contents.
    pub(crate) fn is_sorted(&self) -> bool {
        (1..self.len()).all(|i| self.get(i - 1) <= self.get(i))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/workspace.rs"]
mod tests;
