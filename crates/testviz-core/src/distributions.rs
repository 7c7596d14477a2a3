// =============================================================================
// Distribution Families
// =============================================================================
//
// The two families a hypothesis-test plot can be drawn against:
//
//   - NORMAL:    the standard normal (z-tests, large samples)
//   - STUDENT-T: Student's t with integer degrees of freedom (small samples)
//
// Both expose the same three pure functions, and everything downstream is
// written against that uniform surface:
//
//   density(x)    -> pdf value at x        (height of the curve)
//   cumulative(x) -> cdf value at x        (area to the left of x)
//   quantile(p)   -> inverse cdf at p      (x where the cdf reaches p)
//
// FOR STUDENTS:
// -------------
// The t-distribution looks like the normal but with heavier tails. As the
// degrees of freedom grow it converges to the normal - try df=2 versus
// df=30 and watch the tails pull in.
//
// Adding a family means adding a variant here and nothing else: the curve,
// critical-value, and orchestration code only ever talk to these three
// methods. No ad-hoc branching on family names outside this module.
//
// =============================================================================

use statrs::distribution::{Continuous, ContinuousCDF, Normal, StudentsT};

use crate::error::{Result, TestVizError};

/// A distribution family a test can be run against.
///
/// Immutable once constructed; construction is the only place shape
/// parameters are validated, so a `Distribution` value is always usable.
#[derive(Debug, Clone)]
pub enum Distribution {
    /// Standard normal N(0, 1).
    Normal(Normal),

    /// Student's t with `df` degrees of freedom.
    StudentT {
        /// Degrees of freedom (integer, >= 1)
        df: u64,
        /// The underlying statrs distribution
        inner: StudentsT,
    },
}

impl Distribution {
    /// The standard normal distribution.
    pub fn normal() -> Self {
        // Parameters are compile-time constants, construction cannot fail
        Distribution::Normal(Normal::new(0.0, 1.0).unwrap())
    }

    /// Student's t-distribution with `df` degrees of freedom.
    ///
    /// # Errors
    /// `InvalidParameter` if `df < 1`.
    pub fn student_t(df: u64) -> Result<Self> {
        if df < 1 {
            return Err(TestVizError::InvalidParameter {
                param: "degrees_of_freedom".to_string(),
                value: df.to_string(),
                constraint: "an integer >= 1".to_string(),
            });
        }
        let inner =
            StudentsT::new(0.0, 1.0, df as f64).map_err(|_| TestVizError::InvalidParameter {
                param: "degrees_of_freedom".to_string(),
                value: df.to_string(),
                constraint: "a valid Student-t shape parameter".to_string(),
            })?;
        Ok(Distribution::StudentT { df, inner })
    }

    /// Build a distribution from the string identifier the presentation
    /// layer collects (`"normal"` or `"student_t"`).
    ///
    /// Degrees of freedom are required for `student_t` and ignored for
    /// `normal`. Unknown names are a hard error, not a fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use testviz_core::Distribution;
    ///
    /// let z = Distribution::from_name("normal", None).unwrap();
    /// let t = Distribution::from_name("student_t", Some(10)).unwrap();
    /// assert_eq!(z.name(), "normal");
    /// assert_eq!(t.name(), "student_t");
    /// ```
    pub fn from_name(name: &str, degrees_of_freedom: Option<u64>) -> Result<Self> {
        match name {
            "normal" => Ok(Self::normal()),
            "student_t" => match degrees_of_freedom {
                Some(df) => Self::student_t(df),
                None => Err(TestVizError::InvalidParameter {
                    param: "degrees_of_freedom".to_string(),
                    value: "missing".to_string(),
                    constraint: "provided when the family is `student_t`".to_string(),
                }),
            },
            other => Err(TestVizError::InvalidParameter {
                param: "distribution".to_string(),
                value: other.to_string(),
                constraint: "one of `normal`, `student_t`".to_string(),
            }),
        }
    }

    /// Name of this family, matching the identifiers `from_name` accepts.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Normal(_) => "normal",
            Distribution::StudentT { .. } => "student_t",
        }
    }

    /// Probability density at `x` (the height of the curve).
    pub fn density(&self, x: f64) -> f64 {
        match self {
            Distribution::Normal(d) => d.pdf(x),
            Distribution::StudentT { inner, .. } => inner.pdf(x),
        }
    }

    /// Cumulative probability at `x` (area under the curve left of `x`).
    pub fn cumulative(&self, x: f64) -> f64 {
        match self {
            Distribution::Normal(d) => d.cdf(x),
            Distribution::StudentT { inner, .. } => inner.cdf(x),
        }
    }

    /// Inverse CDF: the x at which the cumulative probability reaches `p`.
    ///
    /// Callers must keep `p` strictly inside (0, 1); the critical-value
    /// resolver validates this before calling.
    pub fn quantile(&self, p: f64) -> f64 {
        match self {
            Distribution::Normal(d) => d.inverse_cdf(p),
            Distribution::StudentT { inner, .. } => inner.inverse_cdf(p),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
