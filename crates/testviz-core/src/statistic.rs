// =============================================================================
// Statistic Location
// =============================================================================
//
// Where does the observed test statistic sit on the drawn curve?
//
// Two different answers are needed, and mixing them up matters:
//
//   - GEOMETRY: the nearest grid index, used for drawing (the vertical
//     marker, and shading the curve up to the statistic). This is a
//     nearest-neighbor lookup on the sampled grid.
//   - NUMBERS: the density and cumulative probability REPORTED next to the
//     marker. These are evaluated exactly at the statistic via the
//     distribution itself, never read off the sampled neighbor, so the
//     grid's discretization error never leaks into the displayed p-value.
//
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::curve::CurveSample;
use crate::distributions::Distribution;
use crate::error::{Result, TestVizError};

/// The observed test statistic, located on a curve sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatisticPoint {
    /// The observed statistic itself
    pub value: f64,

    /// Index of the curve grid point nearest to `value` (drawing only)
    pub index: usize,

    /// Density at `value`, evaluated exactly
    pub density: f64,

    /// Cumulative probability at `value`, evaluated exactly
    pub cumulative: f64,
}

impl StatisticPoint {
    /// Locate `statistic` on `curve`.
    ///
    /// # Errors
    /// `InvalidParameter` if the statistic is NaN or infinite.
    pub fn locate(
        distribution: &Distribution,
        curve: &CurveSample,
        statistic: f64,
    ) -> Result<Self> {
        if !statistic.is_finite() {
            return Err(TestVizError::InvalidParameter {
                param: "statistic".to_string(),
                value: statistic.to_string(),
                constraint: "a finite number".to_string(),
            });
        }
        Ok(Self {
            value: statistic,
            index: curve.nearest_index(statistic),
            density: distribution.density(statistic),
            cumulative: distribution.cumulative(statistic),
        })
    }

    /// Grid range shaded under the curve left of the statistic marker,
    /// i.e. indices `[0, index)`.
    pub fn fill_range(&self) -> std::ops::Range<usize> {
        0..self.index
    }

    /// Annotation text for the marker: `"(cumulative, statistic)"` with the
    /// cumulative probability rounded to 3 decimals and the statistic to 2.
    pub fn label(&self) -> String {
        format!("({:.3}, {:.2})", self.cumulative, self.value)
    }
}

// =============================================================================
// Tests
// =============================================================================
