//! Math module — quaternion algebra and float comparison utilities.
//!
//! The quaternion is the only non-trivial numeric type this crate owns;
//! vectors and matrices come from glam. Float comparisons are shared by
//! the degeneracy guards in this module and by every test suite in the
//! crate.

pub mod float_cmp;
mod quaternion;

pub use float_cmp::{
    EPSILON,
    ulp,
    float_eq_ulp, float_eq_ulp_n,
    float_eq_abs, float_eq_abs_eps,
    float_eq_rel,
};
pub use quaternion::{Quaternion, mult_raw};
