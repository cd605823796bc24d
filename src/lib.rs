//! Stripsort is an instrumented, resumable sorting engine for image-strip sort visualizations.
//!
//! An image is cut into vertical strips and shuffled; an algorithm then sorts the strip
//! positions back into place while a driver renders and sonifies every step. The public API is
//! pull-oriented:
//!
//! - Pick an [`Algorithm`] (or load a [`SortConfig`])
//! - Start a [`SortRun`] over a caller-owned `&mut [u32]`
//! - Pull [`Step`]s with [`SortRun::advance`] (or iterate) until [`Advance::Done`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod algorithms;
mod engine;
mod foundation;

pub use crate::algorithms::catalog::{Algorithm, AlgorithmInfo};
pub use crate::engine::event::Indices;
pub use crate::engine::run::{Advance, BOGO_SAFETY_LIMIT, Outcome, RunOptions, SortRun, Summary};
pub use crate::engine::step::{OrderHighlight, Step};
pub use crate::engine::strips;
pub use crate::foundation::config::{
    ConfigOverrides, DEFAULT_SLICE_COUNT, MAX_SLICE_COUNT, SortConfig,
};
pub use crate::foundation::error::{StripsortError, StripsortResult};
pub use crate::foundation::stats::SortStats;
