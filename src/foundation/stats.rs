/// Running counters shared by every frame of one sort run.
///
/// All three counters only ever grow. Recursive algorithms never copy this value; every
/// frame bumps the single instance owned by the run.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SortStats {
    /// Number of value comparisons performed.
    pub comparisons: u64,
    /// Number of element reads and writes against the sorted array.
    pub array_accesses: u64,
    /// Number of exchanges or element writes counted as moves.
    pub swaps: u64,
}

impl SortStats {
    /// Record one two-operand comparison (two reads).
    pub(crate) fn compare(&mut self) {
        self.comparisons += 1;
        self.array_accesses += 2;
    }

    /// Record one two-element exchange (two reads, two writes).
    pub(crate) fn exchange(&mut self) {
        self.array_accesses += 4;
        self.swaps += 1;
    }

    /// Record a single element write that counts as a move.
    pub(crate) fn moved(&mut self, accesses: u64) {
        self.array_accesses += accesses;
        self.swaps += 1;
    }

    /// Record `n` plain reads or writes.
    pub(crate) fn access(&mut self, n: u64) {
        self.array_accesses += n;
    }

    /// Return `true` when no counter has moved yet.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Return `true` when every counter in `self` is `>=` its counterpart in `earlier`.
    pub fn dominates(&self, earlier: &Self) -> bool {
        self.comparisons >= earlier.comparisons
            && self.array_accesses >= earlier.array_accesses
            && self.swaps >= earlier.swaps
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/stats.rs"]
mod tests;
