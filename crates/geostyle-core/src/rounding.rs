//! Rounding to a human-readable decimal scale
//!
//! Each function keeps `scale` significant digits of `n`, counting the
//! digits of the integer part of `|n|` (values below one count as a single
//! digit), and rescales by `10^(digits - scale)`:
//!
//! ```
//! use geostyle_core::rounding::{ceil_scale, round_scale, trunc_scale};
//!
//! assert_eq!(trunc_scale(111.0, 2), 110.0);
//! assert_eq!(round_scale(117.0, 2), 120.0);
//! assert_eq!(ceil_scale(117.0, 1), 200.0);
//! ```

/// Default number of significant digits kept by [`boundaries_round`]
pub const DEFAULT_SCALE: u32 = 2;

/// Number of digits of the integer part of `|n|`, at least one
fn integer_digits(n: f64) -> i32 {
    let mut integer = n.abs().trunc();
    let mut digits = 1;
    while integer >= 10.0 {
        integer = (integer / 10.0).trunc();
        digits += 1;
    }
    digits
}

#[inline]
fn rescale(n: f64, scale: u32, op: impl Fn(f64) -> f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let factor = 10f64.powi(integer_digits(n) - scale as i32);
    op(n / factor) * factor
}

/// Truncate `n` to `scale` significant digits
pub fn trunc_scale(n: f64, scale: u32) -> f64 {
    rescale(n, scale, f64::trunc)
}

/// Round `n` to `scale` significant digits, ties to even
pub fn round_scale(n: f64, scale: u32) -> f64 {
    rescale(n, scale, f64::round_ties_even)
}

/// Round `n` up to `scale` significant digits
pub fn ceil_scale(n: f64, scale: u32) -> f64 {
    rescale(n, scale, f64::ceil)
}

/// Round a boundary list so it still encloses the data
///
/// The first value is truncated, interior values are rounded and the last
/// value is rounded up.
pub fn boundaries_round(boundaries: &[f64], scale: u32) -> Vec<f64> {
    let last = boundaries.len().saturating_sub(1);
    boundaries
        .iter()
        .enumerate()
        .map(|(i, &b)| match i {
            0 => trunc_scale(b, scale),
            i if i == last => ceil_scale(b, scale),
            _ => round_scale(b, scale),
        })
        .collect()
}
