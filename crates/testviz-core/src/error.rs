//! Error types for TestViz operations.
//!
//! Every failure here is a deterministic function of bad input: there is
//! nothing transient to retry, so errors are surfaced immediately to the
//! caller and never defaulted away.

use thiserror::Error;

/// Main error type for TestViz operations.
///
/// # Examples
///
/// ```
/// use testviz_core::TestVizError;
///
/// let err = TestVizError::InvalidParameter {
///     param: "alpha".to_string(),
///     value: "0".to_string(),
///     constraint: "in the open interval (0, 1)".to_string(),
/// };
/// assert!(err.to_string().contains("alpha"));
/// ```
#[derive(Debug, Error)]
pub enum TestVizError {
    /// A numeric parameter is outside its valid range, or a required
    /// parameter is missing (e.g. degrees of freedom for Student-t).
    #[error("invalid parameter `{param}`: got {value}, must be {constraint}")]
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The test side is not one of `two`, `left`, `right`.
    ///
    /// Unknown sides fail loudly instead of falling back to a default tail,
    /// so a typo in the caller never silently changes the test being drawn.
    #[error("invalid test side `{given}`: expected one of `two`, `left`, `right`")]
    InvalidSide {
        /// The value the caller supplied
        given: String,
    },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, TestVizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = TestVizError::InvalidParameter {
            param: "degrees_of_freedom".to_string(),
            value: "0".to_string(),
            constraint: "an integer >= 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("degrees_of_freedom"));
        assert!(msg.contains(">= 1"));
    }

    #[test]
    fn test_invalid_side_message() {
        let err = TestVizError::InvalidSide {
            given: "up".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("up"));
        assert!(msg.contains("two"));
    }
}
