use crate::engine::event::{Event, Indices};
use crate::foundation::stats::SortStats;

/// One immutable observation of sort progress.
///
/// Exactly one of [`Step::comparing`] and [`Step::swapping`] is non-empty. `array` is an owned
/// copy taken at the moment of the event, so later progress never changes a step that was
/// already handed out.
///
/// Bitonic sort works on a buffer padded to a power of two; its internal steps carry the padded
/// contents in `array` while `len` keeps the caller's length. Drivers that want to hide the
/// padding render [`Step::visible`] or skip steps where [`Step::is_padded`] is `true`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Full working contents at the time of the event.
    pub array: Vec<u32>,
    /// Indices under comparison (a single index is a plain read).
    pub comparing: Indices,
    /// Indices whose stored value was just written.
    pub swapping: Indices,
    /// Running counters at the time of the event.
    #[serde(flatten)]
    pub stats: SortStats,
    /// Caller-visible length of the sorted array.
    pub len: usize,
}

/// Renderer hint splitting the compared indices by whether they are already in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct OrderHighlight {
    /// Compared indices whose values are already in ascending order.
    pub correct_order: Indices,
    /// Compared indices whose values would need swapping.
    pub wrong_order: Indices,
}

impl Step {
    pub(crate) fn from_event(event: Event, array: Vec<u32>, stats: SortStats, len: usize) -> Self {
        let (comparing, swapping) = match event {
            Event::Compare(ix) => (ix, Indices::new()),
            Event::Write(ix) => (Indices::new(), ix),
        };
        let step = Self {
            array,
            comparing,
            swapping,
            stats,
            len,
        };
        debug_assert!(step.is_well_formed(), "malformed step {step:?}");
        step
    }

    /// `true` for a pure comparison (or single read) event.
    pub fn is_comparison(&self) -> bool {
        !self.comparing.is_empty()
    }

    /// `true` for a pure mutation event.
    pub fn is_mutation(&self) -> bool {
        !self.swapping.is_empty()
    }

    /// `true` when `array` carries internal padding beyond the caller's length.
    pub fn is_padded(&self) -> bool {
        self.array.len() != self.len
    }

    /// Caller-visible prefix of `array`.
    pub fn visible(&self) -> &[u32] {
        &self.array[..self.len.min(self.array.len())]
    }

    /// Check the snapshot contract: exactly one index set populated, every index in bounds.
    pub fn is_well_formed(&self) -> bool {
        let n = self.array.len();
        self.comparing.is_empty() != self.swapping.is_empty()
            && self.comparing.len() <= 2
            && self.comparing.iter().chain(self.swapping.iter()).all(|&i| i < n)
            && self.len <= n
    }

    /// Derive the in-order / out-of-order colouring for a two-index comparison.
    ///
    /// A pair is in order when the lower index holds a value `<=` the higher one. Single reads
    /// and mutation steps produce an empty highlight, as do indices outside `array`.
    pub fn order_highlight(&self) -> OrderHighlight {
        let &[a, b] = self.comparing.as_slice() else {
            return OrderHighlight::default();
        };
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (Some(low), Some(high)) = (self.array.get(lo), self.array.get(hi)) else {
            return OrderHighlight::default();
        };
        let indices: Indices = self.comparing.clone();
        if low <= high {
            OrderHighlight {
                correct_order: indices,
                wrong_order: Indices::new(),
            }
        } else {
            OrderHighlight {
                correct_order: Indices::new(),
                wrong_order: indices,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/step.rs"]
mod tests;
