//! Input preparation for strip sorts.
//!
//! A strip array holds the original position of each image strip, so a fully sorted array
//! reassembles the image.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::foundation::error::{StripsortError, StripsortResult};

/// Uniformly shuffled permutation of `0..count` (Fisher-Yates).
///
/// Fails when `count` does not fit strip positions (`u32`).
pub fn shuffled<R: Rng + ?Sized>(count: usize, rng: &mut R) -> StripsortResult<Vec<u32>> {
    let end = u32::try_from(count).map_err(|_| {
        StripsortError::validation(format!("strip count {count} exceeds {}", u32::MAX))
    })?;
    let mut strips: Vec<u32> = (0..end).collect();
    strips.shuffle(rng);
    Ok(strips)
}

/// `true` when `values` is non-decreasing.
pub fn is_sorted(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// `true` when `values` holds exactly the elements of `original`, in any order.
pub fn is_permutation_of(values: &[u32], original: &[u32]) -> bool {
    if values.len() != original.len() {
        return false;
    }
    let mut a = values.to_vec();
    let mut b = original.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
#[path = "../../tests/unit/engine/strips.rs"]
mod tests;
