// =============================================================================
// Test Orchestration
// =============================================================================
//
// This is the one entry point the rendering layer calls. Given a
// distribution, an observed statistic, a tail selection, and a significance
// level, it assembles the complete set of draw instructions for one plot:
//
//   1. Sample the density curve ONCE
//   2. Locate the statistic on it (marker + exact reported numbers)
//   3. Resolve one or two critical values, depending on the side
//   4. Partition the curve into the matching rejection region(s)
//
// WHICH TAIL GETS WHICH PROBABILITY
// ---------------------------------
// For significance level alpha:
//
//   two-tailed:   critical at alpha/2 (shade left) and 1 - alpha/2 (shade right)
//   right-tailed: critical at 1 - alpha (shade right)
//   left-tailed:  critical at alpha (shade left)
//
// The side is an enum matched exhaustively. An unrecognized side name fails
// at parse time with a typed error - it is never coerced to a default tail,
// which would silently draw a different test than the one asked for.
//
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::critical::CriticalPoint;
use crate::curve::{CurveConfig, CurveSample};
use crate::distributions::Distribution;
use crate::error::{Result, TestVizError};
use crate::regions::{RejectionRegion, TailDirection};
use crate::statistic::StatisticPoint;

// =============================================================================
// Side
// =============================================================================

/// Which tail(s) the rejection region occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Rejection mass split between both tails
    Two,
    /// Rejection region in the left tail only
    Left,
    /// Rejection region in the right tail only
    Right,
}

impl FromStr for Side {
    type Err = TestVizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "two" => Ok(Side::Two),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(TestVizError::InvalidSide {
                given: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Two => "two",
            Side::Left => "left",
            Side::Right => "right",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// Result Structure
// =============================================================================

/// Everything the rendering layer needs to draw one hypothesis-test plot.
///
/// Plain data with no behavior beyond accessors; nothing in here outlives
/// the call that produced it, and nothing is shared across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// The tail selection this result was computed for
    pub side: Side,

    /// The significance level this result was computed for
    pub alpha: f64,

    /// The sampled density curve
    pub curve: CurveSample,

    /// The observed statistic, located on the curve
    pub statistic: StatisticPoint,

    /// One critical point per shaded tail (1 for one-sided, 2 for two-sided),
    /// in left-to-right order
    pub critical_points: Vec<CriticalPoint>,

    /// One rejection region per critical point, same order
    pub rejection_regions: Vec<RejectionRegion>,
}

impl TestResult {
    /// True if the observed statistic's marker falls inside any of the
    /// rejection regions (reject the null at this alpha).
    pub fn statistic_in_rejection_region(&self) -> bool {
        self.rejection_regions
            .iter()
            .any(|r| r.indices().contains(&self.statistic.index))
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Run one hypothesis-test visualization with the default curve grid.
///
/// # Arguments
/// * `distribution` - Family to test against (validated at construction)
/// * `statistic` - Observed test statistic
/// * `side` - Tail selection (`Two`, `Left`, `Right`)
/// * `alpha` - Significance level, strictly inside (0, 1)
///
/// # Returns
/// * `Ok(TestResult)` - Complete draw instructions for one plot
/// * `Err(TestVizError)` - Invalid alpha or statistic
pub fn run_test(
    distribution: &Distribution,
    statistic: f64,
    side: Side,
    alpha: f64,
) -> Result<TestResult> {
    run_test_with(distribution, statistic, side, alpha, &CurveConfig::default())
}

/// Same as [`run_test`] but with an explicit curve grid configuration.
pub fn run_test_with(
    distribution: &Distribution,
    statistic: f64,
    side: Side,
    alpha: f64,
    config: &CurveConfig,
) -> Result<TestResult> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(TestVizError::InvalidParameter {
            param: "alpha".to_string(),
            value: alpha.to_string(),
            constraint: "in the open interval (0, 1)".to_string(),
        });
    }

    debug!(
        family = distribution.name(),
        statistic, %side, alpha, "running hypothesis test visualization"
    );

    // Curve and statistic are computed exactly once, whatever the side
    let curve = CurveSample::compute(distribution, config)?;
    let statistic = StatisticPoint::locate(distribution, &curve, statistic)?;

    let (critical_points, rejection_regions) = match side {
        Side::Two => {
            let lower = CriticalPoint::resolve(distribution, &curve, alpha / 2.0)?;
            let upper = CriticalPoint::resolve(distribution, &curve, 1.0 - alpha / 2.0)?;
            let left = RejectionRegion::partition(&curve, &lower, TailDirection::Left);
            let right = RejectionRegion::partition(&curve, &upper, TailDirection::Right);
            (vec![lower, upper], vec![left, right])
        }
        Side::Right => {
            let upper = CriticalPoint::resolve(distribution, &curve, 1.0 - alpha)?;
            let right = RejectionRegion::partition(&curve, &upper, TailDirection::Right);
            (vec![upper], vec![right])
        }
        Side::Left => {
            let lower = CriticalPoint::resolve(distribution, &curve, alpha)?;
            let left = RejectionRegion::partition(&curve, &lower, TailDirection::Left);
            (vec![lower], vec![left])
        }
    };

    Ok(TestResult {
        side,
        alpha,
        curve,
        statistic,
        critical_points,
        rejection_regions,
    })
}

// =============================================================================
// Tests
// =============================================================================
