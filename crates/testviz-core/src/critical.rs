// =============================================================================
// Critical Values
// =============================================================================
//
// The critical value for a tail probability p is the inverse CDF at p: the
// x where the curve has accumulated exactly p of its total mass. It is the
// boundary of a rejection region.
//
// Which p gets passed in depends on the test side, and the orchestrator
// owns that mapping:
//
//   two-tailed:   alpha/2 (left boundary) and 1 - alpha/2 (right boundary)
//   right-tailed: 1 - alpha
//   left-tailed:  alpha
//
// p must lie strictly inside (0, 1). At exactly 0 or 1 the quantile of an
// unbounded distribution is infinite, which is not drawable.
//
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::curve::CurveSample;
use crate::distributions::Distribution;
use crate::error::{Result, TestVizError};

/// A critical value, located on a curve sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CriticalPoint {
    /// The (already side-adjusted) tail probability this point was resolved at
    pub tail_probability: f64,

    /// The critical value: `quantile(tail_probability)`
    pub value: f64,

    /// Density at the critical value, evaluated exactly
    pub density: f64,

    /// Index of the curve grid point nearest to `value` (drawing only)
    pub index: usize,
}

impl CriticalPoint {
    /// Resolve the critical value at `tail_probability` and locate it on
    /// `curve` (same nearest-neighbor rule as the statistic marker).
    ///
    /// # Errors
    /// `InvalidParameter` unless `0 < tail_probability < 1` (open interval).
    pub fn resolve(
        distribution: &Distribution,
        curve: &CurveSample,
        tail_probability: f64,
    ) -> Result<Self> {
        if !(tail_probability > 0.0 && tail_probability < 1.0) {
            return Err(TestVizError::InvalidParameter {
                param: "tail_probability".to_string(),
                value: tail_probability.to_string(),
                constraint: "in the open interval (0, 1)".to_string(),
            });
        }
        let value = distribution.quantile(tail_probability);
        Ok(Self {
            tail_probability,
            value,
            density: distribution.density(value),
            index: curve.nearest_index(value),
        })
    }

    /// Annotation text for the marker: `"(tail_probability, value)"` with
    /// the probability rounded to 3 decimals and the value to 2.
    pub fn label(&self) -> String {
        format!("({:.3}, {:.2})", self.tail_probability, self.value)
    }
}

// =============================================================================
// Tests
// =============================================================================
