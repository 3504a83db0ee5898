//! Projection matrix builders.
//!
//! Column-major matrices for a camera at the origin facing down -Z,
//! mapping the view volume to clip space with depth in [-1, 1]. These
//! are the other half of the `projection * view` pair the caller
//! uploads; they do not depend on any camera state.

use glam::{Mat4, Vec4};

use crate::error::{Error, Result};

/// Perspective projection from a vertical field of view.
///
/// `fov_y` is the full vertical angle of the frustum in radians;
/// `aspect_ratio` is width over height.
///
/// # Errors
///
/// Returns `InvalidArgument` for a negative, equal, or inverted
/// near/far pair.
pub fn perspective_fov(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Result<Mat4> {
    validate_depth_range(z_near, z_far)?;

    let y_scale = 1.0 / (0.5 * fov_y).tan();
    let x_scale = y_scale / aspect_ratio;
    let frustum_length = z_far - z_near;

    Ok(Mat4::from_cols(
        Vec4::new(x_scale, 0.0, 0.0, 0.0),
        Vec4::new(0.0, y_scale, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -(z_far + z_near) / frustum_length, -1.0),
        Vec4::new(0.0, 0.0, -(2.0 * z_near * z_far) / frustum_length, 0.0),
    ))
}

/// Perspective projection from explicit near-plane bounds.
///
/// `left`/`right`/`bottom`/`top` bound the frustum's near face.
///
/// # Errors
///
/// Returns `InvalidArgument` for a negative, equal, or inverted
/// near/far pair.
pub fn perspective_frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    z_near: f32,
    z_far: f32,
) -> Result<Mat4> {
    validate_depth_range(z_near, z_far)?;

    let width = right - left;
    let height = top - bottom;
    let frustum_length = z_far - z_near;

    Ok(Mat4::from_cols(
        Vec4::new(2.0 * z_near / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * z_near / height, 0.0, 0.0),
        Vec4::new(
            (right + left) / width,
            (top + bottom) / height,
            -(z_far + z_near) / frustum_length,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -(2.0 * z_far * z_near) / frustum_length, 0.0),
    ))
}

/// Perspective projection from a centered near-face size.
///
/// # Errors
///
/// Returns `InvalidArgument` for a negative, equal, or inverted
/// near/far pair.
pub fn perspective(width: f32, height: f32, z_near: f32, z_far: f32) -> Result<Mat4> {
    let right = 0.5 * width;
    let top = 0.5 * height;
    perspective_frustum(-right, right, -top, top, z_near, z_far)
}

/// Orthographic projection over an axis-aligned box.
///
/// # Errors
///
/// Returns `InvalidArgument` for a negative, equal, or inverted
/// near/far pair.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    z_near: f32,
    z_far: f32,
) -> Result<Mat4> {
    validate_depth_range(z_near, z_far)?;

    Ok(Mat4::from_cols(
        Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
        Vec4::new(0.0, 0.0, -2.0 / (z_far - z_near), 0.0),
        Vec4::new(
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            -(z_far + z_near) / (z_far - z_near),
            1.0,
        ),
    ))
}

fn validate_depth_range(z_near: f32, z_far: f32) -> Result<()> {
    if z_near < 0.0 {
        return Err(Error::InvalidArgument(
            "z_near cannot be negative".to_string(),
        ));
    }
    if z_far < 0.0 {
        return Err(Error::InvalidArgument(
            "z_far cannot be negative".to_string(),
        ));
    }
    if z_near == z_far {
        return Err(Error::InvalidArgument(
            "z_near cannot equal z_far".to_string(),
        ));
    }
    if z_near > z_far {
        return Err(Error::InvalidArgument(
            "z_near cannot be greater than z_far".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
