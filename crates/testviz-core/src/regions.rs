// =============================================================================
// Rejection Regions
// =============================================================================
//
// A rejection region is the part of the curve on one side of a critical
// value. Partitioning is pure index slicing at the critical point's grid
// index - no numerics beyond the nearest-neighbor lookup already done when
// the critical point was resolved:
//
//   left  tail: indices [0, idx)
//   right tail: indices [idx, len)
//
// Using the critical point's own index (instead of re-deriving it) keeps
// the shaded band exactly flush with the drawn critical marker.
//
// =============================================================================

use ndarray::{s, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::critical::CriticalPoint;
use crate::curve::CurveSample;

/// Which tail of the curve a region covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailDirection {
    /// Everything left of the critical value
    Left,
    /// The critical value and everything right of it
    Right,
}

/// A contiguous index range of a curve sample to be shaded as rejection area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionRegion {
    /// Which side of the critical value this region covers
    pub direction: TailDirection,

    /// First index in the region (inclusive)
    pub start: usize,

    /// One past the last index in the region (exclusive)
    pub end: usize,
}

impl RejectionRegion {
    /// Slice `curve` on one side of `critical`.
    pub fn partition(
        curve: &CurveSample,
        critical: &CriticalPoint,
        direction: TailDirection,
    ) -> Self {
        let (start, end) = match direction {
            TailDirection::Left => (0, critical.index),
            TailDirection::Right => (critical.index, curve.len()),
        };
        Self {
            direction,
            start,
            end,
        }
    }

    /// Number of grid points in the region.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the region covers no grid points (critical value at the
    /// very edge of the domain).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The region's index range.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The region's grid positions, borrowed from the owning curve.
    pub fn x<'a>(&self, curve: &'a CurveSample) -> ArrayView1<'a, f64> {
        curve.x.slice(s![self.start..self.end])
    }

    /// The region's density values, borrowed from the owning curve.
    pub fn density<'a>(&self, curve: &'a CurveSample) -> ArrayView1<'a, f64> {
        curve.density.slice(s![self.start..self.end])
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveConfig;
    use crate::distributions::Distribution;

    fn normal_curve() -> (Distribution, CurveSample) {
        let d = Distribution::normal();
        let curve = CurveSample::compute(&d, &CurveConfig::default()).expect("valid config");
        (d, curve)
    }

    #[test]
    fn test_left_region_slices_up_to_index() {
        let (d, curve) = normal_curve();
        let critical = CriticalPoint::resolve(&d, &curve, 0.025).expect("p in (0,1)");
        let region = RejectionRegion::partition(&curve, &critical, TailDirection::Left);
        assert_eq!(region.start, 0);
        assert_eq!(region.end, critical.index);
    }

    #[test]
    fn test_right_region_slices_from_index() {
        let (d, curve) = normal_curve();
        let critical = CriticalPoint::resolve(&d, &curve, 0.975).expect("p in (0,1)");
        let region = RejectionRegion::partition(&curve, &critical, TailDirection::Right);
        assert_eq!(region.start, critical.index);
        assert_eq!(region.end, curve.len());
    }

    #[test]
    fn test_left_and_right_at_same_index_cover_curve_once() {
        let (d, curve) = normal_curve();
        let critical = CriticalPoint::resolve(&d, &curve, 0.5).expect("p in (0,1)");
        let left = RejectionRegion::partition(&curve, &critical, TailDirection::Left);
        let right = RejectionRegion::partition(&curve, &critical, TailDirection::Right);
        // Union covers every index exactly once, no overlap
        assert_eq!(left.end, right.start);
        assert_eq!(left.len() + right.len(), curve.len());
    }

    #[test]
    fn test_region_views_match_indices() {
        let (d, curve) = normal_curve();
        let critical = CriticalPoint::resolve(&d, &curve, 0.95).expect("p in (0,1)");
        let region = RejectionRegion::partition(&curve, &critical, TailDirection::Right);
        let xs = region.x(&curve);
        assert_eq!(xs.len(), region.len());
        assert_eq!(xs[0], curve.x[region.start]);
        assert_eq!(region.density(&curve).len(), region.len());
    }
}
