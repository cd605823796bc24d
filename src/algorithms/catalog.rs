use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{StripsortError, StripsortResult};

/// Closed set of sorting algorithms the engine can drive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Top-down merge sort.
    Merge,
    /// Selection sort.
    Selection,
    /// Straight insertion sort.
    Insertion,
    /// Insertion sort with a binary search for the insertion point.
    BinaryInsertion,
    /// Quick sort with a Lomuto partition around the last element.
    Quick,
    /// Bubble sort.
    Bubble,
    /// Bidirectional bubble sort.
    CocktailShaker,
    /// Gnome sort.
    Gnome,
    /// Comb sort with a 1.3 shrink factor.
    Comb,
    /// Shell sort with halving gaps.
    Shell,
    /// Heap sort.
    Heap,
    /// Odd-even transposition sort.
    OddEven,
    /// Recursive bitonic sort, padded to a power of two.
    Bitonic,
    /// Cycle sort.
    Cycle,
    /// Least-significant-digit radix sort (base 10).
    LsdRadix,
    /// Most-significant-digit radix sort (base 10).
    MsdRadix,
    /// Bucket sort with `ceil(sqrt(n))` buckets.
    Bucket,
    /// Counting sort.
    Counting,
    /// Pancake sort.
    Pancake,
    /// Shuffle until sorted, capped by a safety limit.
    Bogo,
}

/// Static descriptor consumed by selection UIs and input sizing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AlgorithmInfo {
    /// Stable kebab-case identifier.
    pub id: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Korean display name.
    pub name_korean: &'static str,
    /// Asymptotic time complexity tag.
    pub time_complexity: &'static str,
    /// Input sizing factor: `1.0` for O(n log n) or better, `0.5` for O(n^1.5), `0.25` for
    /// O(n^2) or worse.
    pub complexity_multiplier: f64,
}

const fn info(
    id: &'static str,
    name: &'static str,
    name_korean: &'static str,
    time_complexity: &'static str,
    complexity_multiplier: f64,
) -> AlgorithmInfo {
    AlgorithmInfo {
        id,
        name,
        name_korean,
        time_complexity,
        complexity_multiplier,
    }
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 20] = [
        Self::Merge,
        Self::Selection,
        Self::Insertion,
        Self::BinaryInsertion,
        Self::Quick,
        Self::Bubble,
        Self::CocktailShaker,
        Self::Gnome,
        Self::Comb,
        Self::Shell,
        Self::Heap,
        Self::OddEven,
        Self::Bitonic,
        Self::Cycle,
        Self::LsdRadix,
        Self::MsdRadix,
        Self::Bucket,
        Self::Counting,
        Self::Pancake,
        Self::Bogo,
    ];

    /// Descriptor for this algorithm.
    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::Merge => info("merge", "Merge Sort", "병합 정렬", "O(n log n)", 1.0),
            Self::Selection => info("selection", "Selection Sort", "선택 정렬", "O(n²)", 0.25),
            Self::Insertion => info("insertion", "Insertion Sort", "삽입 정렬", "O(n²)", 0.25),
            Self::BinaryInsertion => info(
                "binary-insertion",
                "Binary Insertion Sort",
                "이진 삽입 정렬",
                "O(n²)",
                0.25,
            ),
            Self::Quick => info("quick", "Quick Sort", "퀵 정렬", "O(n log n)", 1.0),
            Self::Bubble => info("bubble", "Bubble Sort", "버블 정렬", "O(n²)", 0.25),
            Self::CocktailShaker => info(
                "cocktail-shaker",
                "Cocktail Shaker Sort",
                "칵테일 셰이커 정렬",
                "O(n²)",
                0.25,
            ),
            Self::Gnome => info("gnome", "Gnome Sort", "놈 정렬", "O(n²)", 0.25),
            Self::Comb => info("comb", "Comb Sort", "콤 정렬", "O(n^1.5)", 0.5),
            Self::Shell => info("shell", "Shell Sort", "셸 정렬", "O(n^1.5)", 0.5),
            Self::Heap => info("heap", "Heap Sort", "힙 정렬", "O(n log n)", 1.0),
            Self::OddEven => info("odd-even", "Odd-Even Sort", "홀짝 정렬", "O(n²)", 0.25),
            Self::Bitonic => info("bitonic", "Bitonic Sort", "바이토닉 정렬", "O(n log² n)", 1.0),
            Self::Cycle => info("cycle", "Cycle Sort", "사이클 정렬", "O(n²)", 0.25),
            Self::LsdRadix => info("lsd-radix", "LSD Radix Sort", "LSD 기수 정렬", "O(nk)", 1.0),
            Self::MsdRadix => info("msd-radix", "MSD Radix Sort", "MSD 기수 정렬", "O(nk)", 1.0),
            Self::Bucket => info("bucket", "Bucket Sort", "버킷 정렬", "O(n²)", 0.25),
            Self::Counting => info("counting", "Counting Sort", "계수 정렬", "O(n + k)", 1.0),
            Self::Pancake => info("pancake", "Pancake Sort", "팬케이크 정렬", "O(n²)", 0.25),
            Self::Bogo => info("bogo", "Bogo Sort", "보고 정렬", "O(∞)", 0.25),
        }
    }

    /// Stable identifier, e.g. `"binary-insertion"`.
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// `false` only for bogo sort, whose run length depends on random draws.
    pub fn is_deterministic(self) -> bool {
        self != Self::Bogo
    }

    /// Number of strips to sort when the configured count targets an O(n log n) algorithm.
    ///
    /// Slower algorithms get proportionally fewer strips so every run takes a comparable
    /// number of steps. Never returns less than 2 unless `slice_count` itself is smaller.
    pub fn strip_budget(self, slice_count: usize) -> usize {
        let scaled = (slice_count as f64 * self.info().complexity_multiplier).round() as usize;
        scaled.max(slice_count.min(2))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = StripsortError;

    fn from_str(s: &str) -> StripsortResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StripsortError::validation(format!("unknown algorithm id '{wanted}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/catalog.rs"]
mod tests;
