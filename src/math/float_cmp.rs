//! Float comparison utilities.
//!
//! Three comparison modes: ULP-relative (tolerance scales with the
//! precision available near the compared values), absolute, and
//! relative (tolerance scales with operand magnitude). The crate's
//! degeneracy guards compare squared lengths against `EPSILON`; the test
//! suites use these functions as their tolerance basis.

/// Acceptable tolerance for comparisons between floats that are not
/// much larger than 1.0. One ULP of 1.0.
pub const EPSILON: f32 = f32::EPSILON;

/// Default ULP multiplier for [`float_eq_ulp`].
const DEFAULT_NUM_ULP: u32 = 5;

/// Distance from `value` to the next representable f32 of greater magnitude.
///
/// NaN propagates; infinite input yields positive infinity. `ulp(0.0)` is
/// the smallest positive subnormal.
pub fn ulp(value: f32) -> f32 {
    if value.is_nan() {
        return value;
    }
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        return f32::INFINITY;
    }
    if magnitude == f32::MAX {
        // The gap above MAX is not representable as a difference.
        return 2.0f32.powi(104);
    }
    f32::from_bits(magnitude.to_bits() + 1) - magnitude
}

/// ULP-relative equality with the default multiplier.
///
/// True if the distance between `a` and `b` is within 5 ULPs of their
/// average.
pub fn float_eq_ulp(a: f32, b: f32) -> bool {
    float_eq_ulp_n(a, b, DEFAULT_NUM_ULP)
}

/// ULP-relative equality with a caller-supplied multiplier.
pub fn float_eq_ulp_n(a: f32, b: f32, num_ulp: u32) -> bool {
    (a - b).abs() <= num_ulp as f32 * ulp(0.5 * (a + b))
}

/// Absolute equality within [`EPSILON`].
pub fn float_eq_abs(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}

/// Absolute equality within a caller-supplied tolerance.
pub fn float_eq_abs_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Relative equality.
///
/// The tolerance is adjusted automatically based on the magnitudes of the
/// compared floats; the `+ 1` term keeps it useful near zero.
pub fn float_eq_rel(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * (a.abs() + b.abs() + 1.0)
}

#[cfg(test)]
#[path = "float_cmp_tests.rs"]
mod tests;
