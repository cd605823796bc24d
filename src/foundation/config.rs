use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::algorithms::catalog::Algorithm;
use crate::engine::run::{BOGO_SAFETY_LIMIT, RunOptions};
use crate::foundation::error::{StripsortError, StripsortResult};

/// Strip count used when nothing else is configured.
pub const DEFAULT_SLICE_COUNT: usize = 128;
/// Largest accepted strip count.
pub const MAX_SLICE_COUNT: usize = 4096;

/// Settings for one sort session, as read from JSON.
///
/// Missing fields take their defaults, so `{}` is a valid configuration. Values are layered
/// defaults, then file, then [`ConfigOverrides`], and checked with [`SortConfig::validate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Number of strips the image is cut into before scaling by complexity.
    pub slice_count: usize,
    /// Seed for the initial shuffle and for bogo sort. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Shuffle cap for bogo sort.
    pub bogo_limit: u64,
    /// Shrink the strip count for slow algorithms (see [`Algorithm::strip_budget`]).
    pub scale_to_complexity: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Merge,
            slice_count: DEFAULT_SLICE_COUNT,
            seed: None,
            bogo_limit: BOGO_SAFETY_LIMIT,
            scale_to_complexity: true,
        }
    }
}

/// Explicit values that win over anything loaded from a file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces [`SortConfig::algorithm`].
    pub algorithm: Option<Algorithm>,
    /// Replaces [`SortConfig::slice_count`].
    pub slice_count: Option<usize>,
    /// Replaces [`SortConfig::seed`].
    pub seed: Option<u64>,
    /// Replaces [`SortConfig::bogo_limit`].
    pub bogo_limit: Option<u64>,
    /// Replaces [`SortConfig::scale_to_complexity`].
    pub scale_to_complexity: Option<bool>,
}

impl SortConfig {
    /// Parse a configuration from a JSON reader. The result is not validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> StripsortResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StripsortError::serde(format!("parse sort config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk. The result is not validated.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> StripsortResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StripsortError::config(format!("open sort config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(algorithm = %cfg.algorithm, slice_count = cfg.slice_count, "sort config loaded");
        Ok(cfg)
    }

    /// Parse a configuration from a JSON string. The result is not validated.
    pub fn from_json_str(s: &str) -> StripsortResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| StripsortError::serde(format!("parse sort config JSON: {e}")))
    }

    /// Defaults, then `path` if given, then `overrides`, validated.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> StripsortResult<Self> {
        let base = match path {
            Some(p) => Self::from_path(p)?,
            None => Self::default(),
        };
        let cfg = base.with_overrides(overrides);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply every override that is set.
    pub fn with_overrides(mut self, o: &ConfigOverrides) -> Self {
        if let Some(v) = o.algorithm {
            self.algorithm = v;
        }
        if let Some(v) = o.slice_count {
            self.slice_count = v;
        }
        if let Some(v) = o.seed {
            self.seed = Some(v);
        }
        if let Some(v) = o.bogo_limit {
            self.bogo_limit = v;
        }
        if let Some(v) = o.scale_to_complexity {
            self.scale_to_complexity = v;
        }
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> StripsortResult<()> {
        if !(1..=MAX_SLICE_COUNT).contains(&self.slice_count) {
            return Err(StripsortError::config(format!(
                "slice_count must be in 1..={MAX_SLICE_COUNT}, got {}",
                self.slice_count
            )));
        }
        if self.bogo_limit == 0 {
            return Err(StripsortError::config("bogo_limit must be > 0"));
        }
        Ok(())
    }

    /// Number of strips to actually sort.
    pub fn strip_count(&self) -> usize {
        if self.scale_to_complexity {
            self.algorithm.strip_budget(self.slice_count)
        } else {
            self.slice_count
        }
    }

    /// Engine options derived from this configuration.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            bogo_limit: self.bogo_limit,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
