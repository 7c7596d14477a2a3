// =============================================================================
// Density Curve Sampling
// =============================================================================
//
// To draw a distribution we evaluate its density on a dense, linearly spaced
// grid over a fixed domain - by convention [-5, 5] with 1000 points, which
// comfortably covers both families the library supports.
//
// The sample is computed ONCE per orchestrated test and passed by reference
// to everything that needs it (statistic marker, critical markers, shaded
// regions). Keeping a single grid guarantees all of those agree on the same
// x positions, so shaded regions line up exactly with the drawn markers.
//
// Nothing is cached across calls: the sample is cheap (one linspace plus
// 1000 scalar density evaluations) and recomputing keeps every call a pure
// function of its inputs.
//
// =============================================================================

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::distributions::Distribution;
use crate::error::{Result, TestVizError};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the curve sampling grid.
///
/// The defaults match the conventional plotting window and are what the
/// orchestrator uses unless told otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Evaluation domain, inclusive on both ends.
    /// Default: (-5.0, 5.0)
    pub domain: (f64, f64),

    /// Number of grid points. Kept constant across computations so curves
    /// remain comparable. Default: 1000
    pub points: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            domain: (-5.0, 5.0),
            points: 1000,
        }
    }
}

impl CurveConfig {
    fn validate(&self) -> Result<()> {
        let (lo, hi) = self.domain;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(TestVizError::InvalidParameter {
                param: "domain".to_string(),
                value: format!("({lo}, {hi})"),
                constraint: "a finite interval with domain.0 < domain.1".to_string(),
            });
        }
        if self.points < 2 {
            return Err(TestVizError::InvalidParameter {
                param: "points".to_string(),
                value: self.points.to_string(),
                constraint: "at least 2".to_string(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Curve Sample
// =============================================================================

/// A dense sample of a density curve: grid positions and the density at each.
///
/// Invariants (established by `compute`, relied on everywhere else):
/// - `x` is strictly increasing and spans the configured domain inclusively
/// - `x` and `density` have the same, fixed length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSample {
    /// Grid positions, strictly increasing
    pub x: Array1<f64>,

    /// Density evaluated at each grid position
    pub density: Array1<f64>,
}

impl CurveSample {
    /// Sample `distribution`'s density over the configured grid.
    ///
    /// Deterministic: identical inputs always produce identical samples.
    ///
    /// # Arguments
    /// * `distribution` - The family to evaluate (already validated at construction)
    /// * `config` - Grid domain and resolution
    ///
    /// # Errors
    /// `InvalidParameter` if the config describes an empty or non-finite grid.
    pub fn compute(distribution: &Distribution, config: &CurveConfig) -> Result<Self> {
        config.validate()?;
        let (lo, hi) = config.domain;
        let x = Array1::linspace(lo, hi, config.points);
        let density = x.mapv(|xi| distribution.density(xi));
        Ok(Self { x, density })
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the sample holds no points. Cannot happen for a sample built
    /// by `compute`, which requires at least 2 points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Index of the grid point closest to `value` by absolute difference.
    ///
    /// On exact ties the LOWEST index wins (first minimum). Both the
    /// statistic marker and the critical markers go through this one
    /// function, so their geometry can never disagree.
    pub fn nearest_index(&self, value: f64) -> usize {
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;
        for (i, &xi) in self.x.iter().enumerate() {
            let dist = (xi - value).abs();
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_curve_has_configured_length() {
        let d = Distribution::normal();
        let curve = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        assert_eq!(curve.len(), 1000);
        assert_eq!(curve.density.len(), 1000);
    }

    #[test]
    fn test_curve_spans_domain_inclusive() {
        let d = Distribution::normal();
        let curve = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        assert_abs_diff_eq!(curve.x[0], -5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.x[curve.len() - 1], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_curve_strictly_increasing() {
        let d = Distribution::student_t(5).expect("df=5 is valid");
        let curve = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        for i in 1..curve.len() {
            assert!(curve.x[i] > curve.x[i - 1], "x not increasing at {i}");
        }
    }

    #[test]
    fn test_curve_density_matches_distribution() {
        let d = Distribution::normal();
        let curve = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        for i in [0, 499, 999] {
            assert_abs_diff_eq!(curve.density[i], d.density(curve.x[i]), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_curve_deterministic() {
        let d = Distribution::normal();
        let a = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        let b = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        assert_eq!(a.x, b.x);
        assert_eq!(a.density, b.density);
    }

    #[test]
    fn test_invalid_domain_rejected() {
        let d = Distribution::normal();
        let config = CurveConfig {
            domain: (5.0, -5.0),
            points: 1000,
        };
        assert!(CurveSample::compute(&d, &config).is_err());
    }

    #[test]
    fn test_too_few_points_rejected() {
        let d = Distribution::normal();
        let config = CurveConfig {
            domain: (-5.0, 5.0),
            points: 1,
        };
        assert!(CurveSample::compute(&d, &config).is_err());
    }

    #[test]
    fn test_nearest_index_exact_hit() {
        let d = Distribution::normal();
        let curve = CurveSample::compute(
            &d,
            &CurveConfig {
                domain: (-1.0, 1.0),
                points: 3,
            },
        )
        .expect("valid config");
        // Grid is [-1, 0, 1]
        assert_eq!(curve.nearest_index(-1.0), 0);
        assert_eq!(curve.nearest_index(0.0), 1);
        assert_eq!(curve.nearest_index(1.0), 2);
    }

    #[test]
    fn test_nearest_index_is_true_minimum() {
        let d = Distribution::normal();
        let curve = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        let target = 1.96;
        let idx = curve.nearest_index(target);
        let best = (curve.x[idx] - target).abs();
        for (i, &xi) in curve.x.iter().enumerate() {
            assert!(
                (xi - target).abs() >= best,
                "index {i} is closer than chosen index {idx}"
            );
        }
    }

    #[test]
    fn test_nearest_index_tie_takes_first() {
        let d = Distribution::normal();
        let curve = CurveSample::compute(
            &d,
            &CurveConfig {
                domain: (-1.0, 1.0),
                points: 3,
            },
        )
        .expect("valid config");
        // 0.5 is equidistant from x[1]=0 and x[2]=1; first minimum wins
        assert_eq!(curve.nearest_index(0.5), 1);
    }

    #[test]
    fn test_nearest_index_clamps_outside_domain() {
        let d = Distribution::normal();
        let curve = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        assert_eq!(curve.nearest_index(-100.0), 0);
        assert_eq!(curve.nearest_index(100.0), curve.len() - 1);
    }
}
