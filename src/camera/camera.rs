//! Camera — eye position, orientation, and view matrix derivation.

use glam::{Mat4, Vec3};

use crate::math::{Quaternion, EPSILON};
use crate::nova_debug;

const LOG_SOURCE: &str = "nova3d::Camera";

/// A viewpoint in world space.
///
/// Holds an eye position, a look-at center (used only by the targeting
/// operations), and an orientation quaternion giving the camera's
/// local-to-world basis. The local `left`, `up`, and `forward` unit
/// vectors are cached alongside the orientation and kept consistent with
/// it: targeting recomputes them from scratch, incremental rotations
/// rotate them in place.
///
/// Degenerate inputs (coincident eye/center, zero-length rotation axes)
/// are absorbed as no-ops so a per-frame update loop never drives the
/// camera into a NaN orientation. Ignored calls are logged at debug
/// severity.
///
/// The default camera sits at the origin looking down -Z with +Y up.
#[derive(Debug, Clone)]
pub struct Camera {
    eye_position: Vec3,
    center_position: Vec3,

    /// Local-to-world rotation. The matrix columns are the camera's
    /// local X (-left), Y (up), and Z (-forward) axes in world space.
    orientation: Quaternion,

    left: Vec3,
    up: Vec3,
    forward: Vec3,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            eye_position: Vec3::ZERO,
            center_position: Vec3::NEG_Z,
            orientation: Quaternion::IDENTITY,
            left: Vec3::NEG_X,
            up: Vec3::Y,
            forward: Vec3::NEG_Z,
        }
    }

    // ===== GETTERS =====

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        self.eye_position
    }

    /// Look-at center in world space, as set by the last targeting call.
    pub fn center(&self) -> Vec3 {
        self.center_position
    }

    /// Orientation quaternion (local-to-world rotation).
    pub fn orientation(&self) -> &Quaternion {
        &self.orientation
    }

    /// Local left direction in world space.
    pub fn left(&self) -> Vec3 {
        self.left
    }

    /// Local up direction in world space.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Local forward (viewing) direction in world space.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    // ===== POSITIONING =====

    /// Place the eye at `position`, keeping the current orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.eye_position = position;
    }

    /// Move the eye by a world-space delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.eye_position += delta;
    }

    /// Move the eye by a delta expressed in the camera's own basis:
    /// `delta.x` along local left, `delta.y` along local up, `delta.z`
    /// along local forward.
    pub fn translate_relative(&mut self, delta: Vec3) {
        self.eye_position += delta.x * self.left + delta.y * self.up + delta.z * self.forward;
    }

    // ===== TARGETING =====

    /// Position the camera at `eye`, facing `center`, with `up` hinting
    /// the world-space up direction.
    ///
    /// The stored basis is re-derived from scratch: `forward` points at
    /// the center, `left = normalize(up x forward)`, and up is then
    /// recomputed as `forward x left` so the basis is orthonormal even
    /// when the caller's `up` is not orthogonal to the view direction.
    ///
    /// No-op if `center` coincides with `eye` or `up` is parallel to the
    /// view direction; the camera is left fully unmodified.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        let direction = center - eye;
        if direction.length_squared() < EPSILON {
            nova_debug!(
                LOG_SOURCE,
                "look_at ignored: center {} coincides with eye",
                center
            );
            return;
        }
        let forward = direction / direction.length();

        let left = up.cross(forward);
        if left.length_squared() < EPSILON {
            nova_debug!(
                LOG_SOURCE,
                "look_at ignored: up {} is parallel to the view direction",
                up
            );
            return;
        }
        let left = left / left.length();
        let up = forward.cross(left);

        self.eye_position = eye;
        self.center_position = center;
        self.forward = forward;
        self.left = left;
        self.up = up;
        self.orientation.set_from_axes(-left, up, -forward);
    }

    /// Point the camera at a new center, keeping the eye position fixed.
    ///
    /// The previous up vector is re-projected onto the plane orthogonal
    /// to the new forward direction, so the camera rolls as little as
    /// possible while retargeting. If the previous up is parallel to the
    /// new view direction, up is rebuilt from the previous left instead.
    ///
    /// No-op if `center` coincides with the eye position.
    pub fn retarget(&mut self, center: Vec3) {
        let direction = center - self.eye_position;
        if direction.length_squared() < EPSILON {
            nova_debug!(
                LOG_SOURCE,
                "retarget ignored: center {} coincides with eye",
                center
            );
            return;
        }
        let forward = direction / direction.length();

        let mut up = self.up - forward * forward.dot(self.up);
        if up.length_squared() < EPSILON {
            // Looking straight along the old up; keep the old left and
            // rebuild up perpendicular to both.
            up = forward.cross(self.left);
        }
        let up = up / up.length();
        let left = up.cross(forward);

        self.center_position = center;
        self.forward = forward;
        self.up = up;
        self.left = left;
        self.orientation.set_from_axes(-left, up, -forward);
    }

    // ===== INCREMENTAL ROTATION =====

    /// Rotate the camera about a world-space axis.
    ///
    /// The incremental rotation is composed in front of the stored
    /// orientation, which is then renormalized to counteract drift. The
    /// cached basis vectors are rotated in place. No-op on a zero-length
    /// axis.
    pub fn rotate(&mut self, axis: Vec3, angle: f32) {
        let Ok(mut incremental) = Quaternion::from_axis_angle(axis, angle) else {
            nova_debug!(LOG_SOURCE, "rotate ignored: zero-length axis");
            return;
        };

        self.orientation = incremental * self.orientation;
        self.orientation.normalize();

        self.left = incremental.rotate_vec3(self.left);
        self.up = incremental.rotate_vec3(self.up);
        self.forward = incremental.rotate_vec3(self.forward);
    }

    /// Rotate about the camera's current local X axis.
    ///
    /// Positive angles pitch the view upward. Only the up and forward
    /// basis vectors change; the rotation axis itself is fixed.
    pub fn pitch(&mut self, angle: f32) {
        let axis = self.orientation.rotate_vec3(Vec3::X);
        let Ok(mut incremental) = Quaternion::from_axis_angle(axis, angle) else {
            nova_debug!(LOG_SOURCE, "pitch ignored: degenerate local axis");
            return;
        };

        self.orientation = incremental * self.orientation;
        self.orientation.normalize();

        self.up = incremental.rotate_vec3(self.up);
        self.forward = incremental.rotate_vec3(self.forward);
    }

    /// Rotate about the camera's current local Y axis.
    ///
    /// Positive angles yaw the view leftward. Only the left and forward
    /// basis vectors change.
    pub fn yaw(&mut self, angle: f32) {
        let axis = self.orientation.rotate_vec3(Vec3::Y);
        let Ok(mut incremental) = Quaternion::from_axis_angle(axis, angle) else {
            nova_debug!(LOG_SOURCE, "yaw ignored: degenerate local axis");
            return;
        };

        self.orientation = incremental * self.orientation;
        self.orientation.normalize();

        self.left = incremental.rotate_vec3(self.left);
        self.forward = incremental.rotate_vec3(self.forward);
    }

    /// Rotate about the camera's current local Z axis.
    ///
    /// Only the left and up basis vectors change; forward is the
    /// rotation axis (negated) and stays fixed.
    pub fn roll(&mut self, angle: f32) {
        let axis = self.orientation.rotate_vec3(Vec3::Z);
        let Ok(mut incremental) = Quaternion::from_axis_angle(axis, angle) else {
            nova_debug!(LOG_SOURCE, "roll ignored: degenerate local axis");
            return;
        };

        self.orientation = incremental * self.orientation;
        self.orientation.normalize();

        self.left = incremental.rotate_vec3(self.left);
        self.up = incremental.rotate_vec3(self.up);
    }

    // ===== VIEW MATRIX =====

    /// The view matrix: transforms world-space points into camera space.
    ///
    /// The orientation is renormalized first, then its rotation matrix is
    /// transposed (the inverse of a pure rotation) and composed with a
    /// translation by the negated eye position, applied before the
    /// rotation.
    pub fn view_matrix(&mut self) -> Mat4 {
        self.orientation.normalize();

        self.orientation.to_rotation_matrix().transpose()
            * Mat4::from_translation(-self.eye_position)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
