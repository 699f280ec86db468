// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{BellaError, BellaResult};

/// Which end of a word a Cayley graph step extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Prepend the new letter. Every search and sampler defaults to this.
    #[default]
    Left,
    /// Append the new letter.
    Right,
}

/// Which neighbours of a word count as valid Cayley graph steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    /// Forbid only the letter that immediately cancels the adjacent end.
    #[default]
    Free,
    /// Forbid any letter whose extended word starts with a known relator.
    Reduced,
}

/// How a configured search walks the Cayley graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// `count` random walks of length `depth`.
    #[default]
    MonteCarlo,
    /// Every word of length `1..=depth`, level by level.
    BreadthFirst,
}

/// Construction options for a group cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Allowed deviation of a generator determinant from ±1 before a
    /// warning is logged.
    /// Default: 1e-5.
    pub det_tolerance: f64,

    /// Skip the determinant check entirely. Needed for fields whose
    /// determinant is unreliable or expensive to compare.
    /// Default: false.
    pub disable_det_warning: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            det_tolerance: 1e-5,
            disable_det_warning: false,
        }
    }
}

impl GroupConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> BellaResult<()> {
        if !self.det_tolerance.is_finite() || self.det_tolerance <= 0.0 {
            return Err(BellaError::Config(format!(
                "det_tolerance must be finite and > 0, got {}",
                self.det_tolerance
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> BellaResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| BellaError::Config(format!("JSON parse error: {e}")))
    }
}

/// Parameters for a Cayley graph traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Traversal strategy.
    /// Default: Monte-Carlo.
    pub strategy: Strategy,

    /// Maximum word length produced.
    /// Default: 10.
    pub depth: usize,

    /// Number of independent random walks (Monte-Carlo only).
    /// Default: 1000.
    pub count: usize,

    /// Seed for the walk RNG (Monte-Carlo only).
    /// Default: 0.
    pub seed: u64,

    /// Extension side for the free Monte-Carlo walk.
    /// Default: left.
    pub side: Side,

    /// Neighbour policy used by the traversal.
    /// Default: free.
    pub reduction: Reduction,

    /// Reduced Monte-Carlo: also yield every intermediate prefix of a walk.
    /// Default: true.
    pub yield_shorter: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::MonteCarlo,
            depth: 10,
            count: 1000,
            seed: 0,
            side: Side::Left,
            reduction: Reduction::Free,
            yield_shorter: true,
        }
    }
}

impl SearchConfig {
    /// Validate configuration parameters.
    ///
    /// `count` is only meaningful for Monte-Carlo searches.
    pub fn validate(&self) -> BellaResult<()> {
        if self.depth < 1 {
            return Err(BellaError::Config(format!(
                "depth must be >= 1, got {}",
                self.depth
            )));
        }
        if self.strategy == Strategy::MonteCarlo && self.count < 1 {
            return Err(BellaError::Config(format!(
                "count must be >= 1, got {}",
                self.count
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> BellaResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| BellaError::Config(format!("JSON parse error: {e}")))
    }
}
