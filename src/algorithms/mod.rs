//! The twenty instrumented algorithms, grouped by family.
//!
//! Each algorithm is its own state machine. [`Machine`] is the closed dispatch over all of
//! them that a [`crate::SortRun`] holds.

pub(crate) mod bitonic;
pub(crate) mod bogo;
pub(crate) mod bucket;
pub(crate) mod catalog;
pub(crate) mod counting;
pub(crate) mod exchange;
pub(crate) mod heap;
pub(crate) mod insertion;
pub(crate) mod merge;
pub(crate) mod quick;
pub(crate) mod radix;
pub(crate) mod selection;

use crate::algorithms::bitonic::BitonicSort;
use crate::algorithms::bogo::BogoSort;
use crate::algorithms::bucket::BucketSort;
use crate::algorithms::catalog::Algorithm;
use crate::algorithms::counting::CountingSort;
use crate::algorithms::exchange::{BubbleSort, CocktailShakerSort, CombSort, GnomeSort, OddEvenSort};
use crate::algorithms::heap::HeapSort;
use crate::algorithms::insertion::{BinaryInsertionSort, InsertionSort, ShellSort};
use crate::algorithms::merge::MergeSort;
use crate::algorithms::quick::QuickSort;
use crate::algorithms::radix::{LsdRadixSort, MsdRadixSort};
use crate::algorithms::selection::{CycleSort, PancakeSort, SelectionSort};
use crate::engine::Resume;
use crate::engine::event::Event;
use crate::engine::run::{Outcome, RunOptions};
use crate::engine::workspace::Workspace;

#[derive(Debug)]
pub(crate) enum Machine {
    Merge(MergeSort),
    Selection(SelectionSort),
    Insertion(InsertionSort),
    BinaryInsertion(BinaryInsertionSort),
    Quick(QuickSort),
    Bubble(BubbleSort),
    CocktailShaker(CocktailShakerSort),
    Gnome(GnomeSort),
    Comb(CombSort),
    Shell(ShellSort),
    Heap(HeapSort),
    OddEven(OddEvenSort),
    Bitonic(BitonicSort),
    Cycle(CycleSort),
    LsdRadix(LsdRadixSort),
    MsdRadix(MsdRadixSort),
    Bucket(BucketSort),
    Counting(CountingSort),
    Pancake(PancakeSort),
    Bogo(Box<BogoSort>),
}

impl Machine {
    /// Fresh machine for `algorithm` over an array of `len` elements.
    pub(crate) fn new(algorithm: Algorithm, len: usize, opts: &RunOptions) -> Self {
        match algorithm {
            Algorithm::Merge => Self::Merge(MergeSort::new(len)),
            Algorithm::Selection => Self::Selection(SelectionSort::default()),
            Algorithm::Insertion => Self::Insertion(InsertionSort::default()),
            Algorithm::BinaryInsertion => Self::BinaryInsertion(BinaryInsertionSort::default()),
            Algorithm::Quick => Self::Quick(QuickSort::new(len)),
            Algorithm::Bubble => Self::Bubble(BubbleSort::default()),
            Algorithm::CocktailShaker => Self::CocktailShaker(CocktailShakerSort::new(len)),
            Algorithm::Gnome => Self::Gnome(GnomeSort::default()),
            Algorithm::Comb => Self::Comb(CombSort::new(len)),
            Algorithm::Shell => Self::Shell(ShellSort::new(len)),
            Algorithm::Heap => Self::Heap(HeapSort::new(len)),
            Algorithm::OddEven => Self::OddEven(OddEvenSort::default()),
            Algorithm::Bitonic => Self::Bitonic(BitonicSort::default()),
            Algorithm::Cycle => Self::Cycle(CycleSort::default()),
            Algorithm::LsdRadix => Self::LsdRadix(LsdRadixSort::default()),
            Algorithm::MsdRadix => Self::MsdRadix(MsdRadixSort::default()),
            Algorithm::Bucket => Self::Bucket(BucketSort::default()),
            Algorithm::Counting => Self::Counting(CountingSort::default()),
            Algorithm::Pancake => Self::Pancake(PancakeSort::new(len)),
            Algorithm::Bogo => Self::Bogo(Box::new(BogoSort::new(opts.bogo_limit, opts.seed))),
        }
    }

    fn as_resume(&mut self) -> &mut dyn Resume {
        match self {
            Self::Merge(m) => m,
            Self::Selection(m) => m,
            Self::Insertion(m) => m,
            Self::BinaryInsertion(m) => m,
            Self::Quick(m) => m,
            Self::Bubble(m) => m,
            Self::CocktailShaker(m) => m,
            Self::Gnome(m) => m,
            Self::Comb(m) => m,
            Self::Shell(m) => m,
            Self::Heap(m) => m,
            Self::OddEven(m) => m,
            Self::Bitonic(m) => m,
            Self::Cycle(m) => m,
            Self::LsdRadix(m) => m,
            Self::MsdRadix(m) => m,
            Self::Bucket(m) => m,
            Self::Counting(m) => m,
            Self::Pancake(m) => m,
            Self::Bogo(m) => m.as_mut(),
        }
    }
}

impl Resume for Machine {
    fn resume(&mut self, ws: &mut Workspace<'_>) -> Option<Event> {
        self.as_resume().resume(ws)
    }

    fn outcome(&self) -> Outcome {
        match self {
            Self::Bogo(m) => m.outcome(),
            _ => Outcome::Sorted,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/support.rs"]
pub(crate) mod testing;
