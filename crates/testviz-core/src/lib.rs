// =============================================================================
// TestViz Core Library
// =============================================================================
//
// This is the computational core behind interactive hypothesis-test plots.
// Given a test statistic, a significance level, a tail selection, and a
// distribution, it produces everything a charting layer needs to draw the
// picture - no rendering code lives here.
//
// STRUCTURE:
// ----------
// The library is organized into modules, each handling a specific concern:
//
//   - distributions: Distribution families (standard normal, Student-t)
//   - curve:         Dense sampling of the density curve over a fixed domain
//   - statistic:     Locating the observed statistic on the sampled curve
//   - critical:      Critical values (inverse CDF at a tail probability)
//   - regions:       Splitting the curve into rejection / non-rejection parts
//   - hypothesis:    The per-side orchestrator tying it all together
//   - error:         Error types used throughout the library
//
// FOR MAINTAINERS:
// ----------------
// When adding new functionality:
//   1. Add it to the appropriate module (or create a new one)
//   2. Write tests in that module (see existing tests for examples)
//   3. Re-export public items here so users can access them easily
//
// =============================================================================

// Declare our modules - each is in its own file
pub mod critical;
pub mod curve;
pub mod distributions;
pub mod error;
pub mod hypothesis;
pub mod regions;
pub mod statistic;

// Re-export commonly used items at the top level for convenience
// Users can write `use testviz_core::Distribution` instead of
// `use testviz_core::distributions::Distribution`
pub use critical::CriticalPoint;
pub use curve::{CurveConfig, CurveSample};
pub use distributions::Distribution;
pub use error::{Result, TestVizError};
pub use hypothesis::{run_test, run_test_with, Side, TestResult};
pub use regions::{RejectionRegion, TailDirection};
pub use statistic::StatisticPoint;
