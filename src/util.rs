/// Numeric conversion and arithmetic helpers.
///
/// This module provides the conversions between `i64` and `f64` used by the
/// numeric literal type, the checked integer factorial used by constant
/// folding, and the floored modulo shared by constant folding and evaluation.
pub mod num;
