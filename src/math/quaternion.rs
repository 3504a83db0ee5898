//! Quaternion — rotation algebra with a lazily cached rotation matrix.
//!
//! Represents q = xi + yj + zk + w with imaginary parts x, y, z and
//! scalar part w. A quaternion of norm 1 encodes a pure rotation; the
//! rotation matrix derived from it is cached until the next mutating
//! operation invalidates it, so repeated `rotate_*` calls with the same
//! rotor pay for one matrix build.
//!
//! Degenerate-input policy: a zero-norm quaternion cannot be inverted or
//! used as a rotor, so `invert` and the `rotate_*` family are defined as
//! no-ops for it. Only axis-angle construction can fail, and only when
//! handed a zero-length axis.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{Mat4, Vec3, Vec4};

use crate::error::{Error, Result};
use crate::math::float_cmp::{float_eq_ulp, EPSILON};

/// Hamilton product over plain components, `[x, y, z, w]` order.
///
/// This is the multiplication kernel behind `Mul`/`MulAssign`, exposed as
/// a free function so it can be micro-benchmarked without constructing
/// quaternion values. Composition order: `mult_raw(lhs, rhs)` applies
/// `rhs` first, then `lhs`.
pub fn mult_raw(lhs: [f32; 4], rhs: [f32; 4]) -> [f32; 4] {
    let [lx, ly, lz, lw] = lhs;
    let [rx, ry, rz, rw] = rhs;
    [
        (ly * rz) - (lz * ry) + (rw * lx) + (lw * rx),
        (lz * rx) - (lx * rz) + (rw * ly) + (lw * ry),
        (lx * ry) - (ly * rx) + (rw * lz) + (lw * rz),
        (lw * rw) - (lx * rx) - (ly * ry) - (lz * rz),
    ]
}

/// Quaternion of the form q = xi + yj + zk + w.
///
/// Components are public; the cached rotation matrix is private state
/// that every mutating operation invalidates (`None` is the dirty state).
#[derive(Debug, Clone, Copy)]
pub struct Quaternion {
    /// Imaginary i component
    pub x: f32,
    /// Imaginary j component
    pub y: f32,
    /// Imaginary k component
    pub z: f32,
    /// Real component
    pub w: f32,

    rotation_matrix: Option<Mat4>,
}

impl Quaternion {
    /// The zero quaternion (all components 0).
    pub const ZERO: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
        rotation_matrix: None,
    };

    /// The identity rotation (0, 0, 0, 1).
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
        rotation_matrix: None,
    };

    /// Create a quaternion from components.
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            x,
            y,
            z,
            w,
            rotation_matrix: None,
        }
    }

    /// Construct a unit quaternion representing a ccw rotation by `angle`
    /// radians about `axis`.
    ///
    /// The axis does not need to be normalized, but it must be non-zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `axis` has (near-)zero length.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Result<Self> {
        let mut q = Self::ZERO;
        q.set_from_axis_angle(axis, angle)?;
        Ok(q)
    }

    /// Set this quaternion so that it represents a ccw rotation about
    /// `axis` by `angle` radians.
    ///
    /// A side effect is that this will be a unit quaternion.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `axis` has (near-)zero length; the
    /// quaternion is left unmodified in that case.
    pub fn set_from_axis_angle(&mut self, axis: Vec3, angle: f32) -> Result<()> {
        if axis.length_squared() < EPSILON {
            return Err(Error::InvalidArgument(
                "rotation axis cannot have zero length".to_string(),
            ));
        }

        // q = (sin(angle/2)u, cos(angle/2)) with u a unit vector.
        let u = axis / axis.length();
        let s = (0.5 * angle).sin();

        self.x = u.x * s;
        self.y = u.y * s;
        self.z = u.z * s;
        self.w = (0.5 * angle).cos();

        self.invalidate();
        Ok(())
    }

    /// Construct a quaternion from an orthonormal basis.
    ///
    /// `x_axis`, `y_axis`, `z_axis` are the world-space directions of the
    /// rotated local X, Y, Z axes (the columns of the rotation matrix).
    /// The basis is assumed orthonormal; behavior is unspecified if it is
    /// not. This precondition is documented, not runtime-checked.
    pub fn from_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        let mut q = Self::ZERO;
        q.set_from_axes(x_axis, y_axis, z_axis);
        q
    }

    /// Set this quaternion from an orthonormal basis. See [`Self::from_axes`].
    pub fn set_from_axes(&mut self, x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) {
        let mat = Mat4::from_cols(
            x_axis.extend(0.0),
            y_axis.extend(0.0),
            z_axis.extend(0.0),
            Vec4::W,
        );
        self.set_from_rotation_matrix(&mat);
    }

    /// Construct a quaternion representing the rotation matrix `mat`.
    ///
    /// Assumes the upper-left 3x3 of `mat` is orthonormal (documented
    /// precondition, not runtime-checked).
    pub fn from_rotation_matrix(mat: &Mat4) -> Self {
        let mut q = Self::ZERO;
        q.set_from_rotation_matrix(mat);
        q
    }

    /// Set this quaternion so that it represents the rotation matrix `mat`.
    ///
    /// Uses Ken Shoemake's branch-select algorithm: when the trace is
    /// non-negative, |w| >= 1/2 and it is safe to derive w first;
    /// otherwise the largest diagonal entry identifies the largest
    /// imaginary component, which is derived first to avoid a near-zero
    /// divide. A naive trace-only formula loses precision when w is
    /// small.
    pub fn set_from_rotation_matrix(&mut self, mat: &Mat4) {
        // m[column][row], matching glam's column-major storage.
        let m = mat.to_cols_array_2d();

        let trace = m[0][0] + m[1][1] + m[2][2] + m[3][3];

        if trace >= 0.0 {
            let s = trace.sqrt();
            self.w = 0.5 * s;
            let s = 1.0 / (4.0 * self.w);
            self.x = (m[1][2] - m[2][1]) * s;
            self.y = (m[2][0] - m[0][2]) * s;
            self.z = (m[0][1] - m[1][0]) * s;
        } else if m[0][0] >= m[1][1] && m[0][0] >= m[2][2] {
            // |x| is largest.
            let s = (m[0][0] - (m[1][1] + m[2][2]) + m[3][3]).sqrt();
            self.x = 0.5 * s;
            self.w = (m[1][2] - m[2][1]) / (4.0 * self.x);
            let s = 1.0 / (4.0 * self.w);
            self.y = (m[2][0] - m[0][2]) * s;
            self.z = (m[0][1] - m[1][0]) * s;
        } else if m[1][1] >= m[2][2] {
            // |y| is largest.
            let s = (m[1][1] - (m[0][0] + m[2][2]) + m[3][3]).sqrt();
            self.y = 0.5 * s;
            self.w = (m[2][0] - m[0][2]) / (4.0 * self.y);
            let s = 1.0 / (4.0 * self.w);
            self.x = (m[1][2] - m[2][1]) * s;
            self.z = (m[0][1] - m[1][0]) * s;
        } else {
            // |z| is largest.
            let s = (m[2][2] - (m[0][0] + m[1][1]) + m[3][3]).sqrt();
            self.z = 0.5 * s;
            self.w = (m[0][1] - m[1][0]) / (4.0 * self.z);
            let s = 1.0 / (4.0 * self.w);
            self.x = (m[1][2] - m[2][1]) * s;
            self.y = (m[2][0] - m[0][2]) * s;
        }

        // Undo a homogeneous scale if the input carried one.
        if m[3][3] != 1.0 && m[3][3] > EPSILON {
            let s = 1.0 / m[3][3].sqrt();
            self.scale(s);
        }

        self.invalidate();
    }

    /// Set all four components.
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self.invalidate();
    }

    /// The Euclidean norm (2-norm) squared.
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// The Euclidean norm (2-norm).
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit norm.
    ///
    /// The caller must ensure the norm is non-zero.
    pub fn normalize(&mut self) {
        let s = 1.0 / self.norm();
        self.scale(s);
    }

    /// Return a unit-norm copy. The caller must ensure the norm is non-zero.
    pub fn normalized(&self) -> Quaternion {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Multiply each component by `s`.
    pub fn scale(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self.w *= s;
        self.invalidate();
    }

    /// Conjugate in place: (v, w) becomes (-v, w).
    pub fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self.invalidate();
    }

    /// Return the conjugate.
    pub fn conjugated(&self) -> Quaternion {
        let mut q = *self;
        q.conjugate();
        q
    }

    /// Invert in place: conjugate divided by the squared norm.
    ///
    /// A (near-)zero-norm quaternion is left unchanged to prevent a
    /// divide-by-zero.
    pub fn invert(&mut self) {
        let norm_squared = self.norm_squared();
        if norm_squared < EPSILON {
            return;
        }
        self.conjugate();
        self.scale(1.0 / norm_squared);
    }

    /// Return the inverse. Zero-norm input returns the zero quaternion.
    pub fn inverse(&self) -> Quaternion {
        let mut q = *self;
        q.invert();
        q
    }

    /// Rotate a 4-component vector by this quaternion.
    ///
    /// Uses the cached rotation matrix, regenerating it first if a
    /// mutation invalidated it. A (near-)zero-norm rotor returns the
    /// input unchanged (identity rotation).
    pub fn rotate_vec4(&mut self, vec: Vec4) -> Vec4 {
        if self.norm_squared() < EPSILON {
            return vec;
        }
        self.to_rotation_matrix() * vec
    }

    /// Rotate a 3-component vector by this quaternion.
    ///
    /// Same caching and degenerate behavior as [`Self::rotate_vec4`].
    pub fn rotate_vec3(&mut self, vec: Vec3) -> Vec3 {
        self.rotate_vec4(vec.extend(0.0)).truncate()
    }

    /// Rotate another quaternion's components, treated as a 4-vector.
    ///
    /// Let this quaternion be p; the result is equivalent to the vector
    /// part of p * q * p^-1 for unit p. The result starts with an empty
    /// matrix cache.
    pub fn rotate_quaternion(&mut self, q: &Quaternion) -> Quaternion {
        let v = self.rotate_vec4(Vec4::new(q.x, q.y, q.z, q.w));
        Quaternion::new(v.x, v.y, v.z, v.w)
    }

    /// The rotation matrix for this quaternion as a 4x4 homogeneous
    /// matrix (columns are the rotated basis vectors).
    ///
    /// Cached: the matrix is rebuilt only if a mutating operation ran
    /// since the last derivation, so identical inputs yield bit-identical
    /// matrices. Uses `s = 2 / norm()`, which treats a non-unit
    /// quaternion as a scaled rotation.
    pub fn to_rotation_matrix(&mut self) -> Mat4 {
        if let Some(cached) = self.rotation_matrix {
            return cached;
        }

        let s = 2.0 / self.norm();
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);

        let mat = Mat4::from_cols(
            Vec4::new(
                1.0 - s * (y * y + z * z),
                s * (x * y + w * z),
                s * (x * z - w * y),
                0.0,
            ),
            Vec4::new(
                s * (x * y - w * z),
                1.0 - s * (x * x + z * z),
                s * (y * z + w * x),
                0.0,
            ),
            Vec4::new(
                s * (x * z + w * y),
                s * (y * z - w * x),
                1.0 - s * (x * x + y * y),
                0.0,
            ),
            Vec4::W,
        );

        self.rotation_matrix = Some(mat);
        mat
    }

    /// Component-wise ULP-tolerance equality (5 ULPs per component).
    ///
    /// Deliberately not a `PartialEq` impl: tolerance comparison is not
    /// transitive.
    pub fn approx_eq(&self, other: &Quaternion) -> bool {
        float_eq_ulp(self.x, other.x)
            && float_eq_ulp(self.y, other.y)
            && float_eq_ulp(self.z, other.z)
            && float_eq_ulp(self.w, other.w)
    }

    fn invalidate(&mut self) {
        self.rotation_matrix = None;
    }

    #[cfg(test)]
    fn has_cached_matrix(&self) -> bool {
        self.rotation_matrix.is_some()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({}, {}, {}, {})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Quaternion) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
        self.invalidate();
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Quaternion) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
        self.invalidate();
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Hamilton product. Non-commutative: `lhs * rhs` composes "rhs first,
/// then lhs".
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        let [x, y, z, w] = mult_raw(
            [self.x, self.y, self.z, self.w],
            [rhs.x, rhs.y, rhs.z, rhs.w],
        );
        Quaternion::new(x, y, z, w)
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        let [x, y, z, w] = mult_raw(
            [self.x, self.y, self.z, self.w],
            [rhs.x, rhs.y, rhs.z, rhs.w],
        );
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self.invalidate();
    }
}

impl Mul<f32> for Quaternion {
    type Output = Quaternion;

    fn mul(self, s: f32) -> Quaternion {
        Quaternion::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl MulAssign<f32> for Quaternion {
    fn mul_assign(&mut self, s: f32) {
        self.scale(s);
    }
}

#[cfg(test)]
#[path = "quaternion_tests.rs"]
mod tests;
