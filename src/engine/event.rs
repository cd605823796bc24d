use smallvec::{SmallVec, smallvec};

/// Index set carried by a snapshot. Almost always 0, 1 or 2 entries.
pub type Indices = SmallVec<[usize; 2]>;

/// One observable suspension point of a running algorithm.
///
/// Comparisons and mutations are never folded into the same event; an algorithm that
/// compares and then swaps suspends twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Compare(Indices),
    Write(Indices),
}

impl Event {
    /// Two operands under comparison. A self-comparison collapses to one index.
    pub(crate) fn compare(a: usize, b: usize) -> Self {
        Self::Compare(pair(a, b))
    }

    /// Single element read (distribution passes).
    pub(crate) fn probe(i: usize) -> Self {
        Self::Compare(smallvec![i])
    }

    /// Single element written.
    pub(crate) fn write(i: usize) -> Self {
        Self::Write(smallvec![i])
    }

    /// Both sides of an exchange.
    pub(crate) fn swap(a: usize, b: usize) -> Self {
        Self::Write(pair(a, b))
    }
}

fn pair(a: usize, b: usize) -> Indices {
    if a == b { smallvec![a] } else { smallvec![a, b] }
}
