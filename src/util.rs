/// Numeric conversion helpers.
///
/// This module provides functions for moving between whole numbers and reals
/// without silent saturation: truncation rejects out-of-range reals, and
/// mixed comparisons never round the whole operand.
pub mod num;
