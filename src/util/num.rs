/// Converts an `i64` to the nearest `f64`.
///
/// The conversion is exact for magnitudes up to `2^53`; larger values are
/// rounded to the nearest representable double.
///
/// ## Example
/// ```
/// use doppio::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Computes the floored modulo `x - n * floor(x / n)`.
///
/// Unlike the `%` operator on floats (a truncated remainder), the result takes
/// the sign of the divisor. A zero divisor yields NaN.
///
/// ## Example
/// ```
/// use doppio::util::num::floored_mod;
///
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);
/// assert!((floored_mod(1.0, -0.3) - -0.2).abs() < 1e-12);
/// assert!(floored_mod(1.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn floored_mod(x: f64, n: f64) -> f64 {
    x - n * (x / n).floor()
}

/// Computes `n!` as the product `2 * 3 * ... * n` in `i64` arithmetic.
///
/// Values below `2` give `1`. Returns `None` when the product overflows
/// (`n > 20`).
///
/// ## Example
/// ```
/// use doppio::util::num::checked_factorial;
///
/// assert_eq!(checked_factorial(5), Some(120));
/// assert_eq!(checked_factorial(0), Some(1));
/// assert_eq!(checked_factorial(-3), Some(1));
/// assert_eq!(checked_factorial(20), Some(2_432_902_008_176_640_000));
/// assert_eq!(checked_factorial(21), None);
/// ```
#[must_use]
pub fn checked_factorial(n: i64) -> Option<i64> {
    (2..=n).try_fold(1i64, i64::checked_mul)
}

/// Computes the product `2 * 3 * ...` of every integer not greater than `x`.
///
/// `x` is treated as a count: a fractional part is ignored, and anything
/// below `2` (NaN included) gives `1`. The loop stops as soon as the product
/// becomes infinite, so huge inputs return infinity promptly.
///
/// ## Example
/// ```
/// use doppio::util::num::float_factorial;
///
/// assert_eq!(float_factorial(4.0), 24.0);
/// assert_eq!(float_factorial(4.7), 24.0);
/// assert_eq!(float_factorial(-1.0), 1.0);
/// assert_eq!(float_factorial(1e300), f64::INFINITY);
/// ```
#[must_use]
pub fn float_factorial(x: f64) -> f64 {
    let mut result = 1.0_f64;
    let mut i = 2.0;
    while i <= x && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    result
}
