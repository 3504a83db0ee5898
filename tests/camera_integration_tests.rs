//! Integration tests for the camera stack.
//!
//! Drives the public API the way a frame loop would: mutate the camera
//! from simulated input, derive view and projection matrices, and pack
//! them into the GPU uniform block. No GPU required.
//!
//! Run with: cargo test --test camera_integration_tests

use glam::{Mat4, Vec3};
use nova_3d_math::nova3d::camera::{perspective_fov, Camera, CameraUniform};
use nova_3d_math::nova3d::math::{float_eq_abs_eps, Quaternion};
use std::f32::consts::PI;

fn assert_vec3_eq(a: Vec3, b: Vec3) {
    for i in 0..3 {
        assert!(
            float_eq_abs_eps(a[i], b[i], 1.0e-5),
            "component {} differs: {} vs {}",
            i,
            a,
            b
        );
    }
}

// ============================================================================
// FRAME LOOP SIMULATION
// ============================================================================

#[test]
fn test_integration_orbit_keeps_focus_centered() {
    let focus = Vec3::new(2.0, 1.0, -3.0);
    let radius = 10.0;
    let mut camera = Camera::new();

    // Orbit the focus point in the horizontal plane, retargeting every
    // frame. The focus must stay on the view axis throughout.
    for step in 0..32 {
        let angle = 2.0 * PI * (step as f32) / 32.0;
        camera.set_position(focus + radius * Vec3::new(angle.cos(), 0.0, angle.sin()));
        camera.retarget(focus);

        let view = camera.view_matrix();
        let in_camera_space = view.transform_point3(focus);

        assert!(float_eq_abs_eps(in_camera_space.x, 0.0, 1.0e-4));
        assert!(float_eq_abs_eps(in_camera_space.y, 0.0, 1.0e-4));
        assert!(float_eq_abs_eps(in_camera_space.z, -radius, 1.0e-4));
    }
}

#[test]
fn test_integration_fly_forward_after_turn() {
    let mut camera = Camera::new();

    // Turn left a quarter turn, then fly forward two units: the camera
    // ends up two units down -X, still level.
    camera.yaw(0.5 * PI);
    camera.translate_relative(Vec3::new(0.0, 0.0, 2.0));

    assert_vec3_eq(camera.position(), Vec3::new(-2.0, 0.0, 0.0));
    assert_vec3_eq(camera.up(), Vec3::Y);
}

#[test]
fn test_integration_four_quarter_turns_return_home() {
    let mut camera = Camera::new();

    for _ in 0..4 {
        camera.yaw(0.5 * PI);
    }

    assert_vec3_eq(camera.forward(), Vec3::NEG_Z);
    assert_vec3_eq(camera.left(), Vec3::NEG_X);
    assert_vec3_eq(camera.up(), Vec3::Y);
}

// ============================================================================
// QUATERNION / CAMERA AGREEMENT
// ============================================================================

#[test]
fn test_integration_camera_rotation_matches_quaternion() {
    let axis = Vec3::new(0.4, 1.0, -0.3);
    let angle = 0.85;

    let mut camera = Camera::new();
    camera.rotate(axis, angle);

    let mut q = Quaternion::from_axis_angle(axis, angle).unwrap();

    assert_vec3_eq(camera.forward(), q.rotate_vec3(Vec3::NEG_Z));
    assert_vec3_eq(camera.up(), q.rotate_vec3(Vec3::Y));
    assert_vec3_eq(camera.left(), q.rotate_vec3(Vec3::NEG_X));
}

// ============================================================================
// UNIFORM PACKING
// ============================================================================

#[test]
fn test_integration_uniform_projects_look_at_center() {
    let eye = Vec3::new(0.0, 3.0, 8.0);
    let center = Vec3::new(1.0, 0.0, -2.0);

    let mut camera = Camera::new();
    camera.look_at(eye, center, Vec3::Y);
    let projection = perspective_fov(0.5 * PI, 16.0 / 9.0, 0.1, 100.0).unwrap();

    let mut uniform = CameraUniform::new();
    uniform.update(&mut camera, &projection);

    // Rebuild the matrices from the packed arrays and push the look-at
    // center through the full transform: it must land in the middle of
    // the clip region.
    let view = Mat4::from_cols_array_2d(&uniform.view);
    let proj = Mat4::from_cols_array_2d(&uniform.projection);
    let ndc = (proj * view).project_point3(center);

    assert!(float_eq_abs_eps(ndc.x, 0.0, 1.0e-4));
    assert!(float_eq_abs_eps(ndc.y, 0.0, 1.0e-4));

    assert_eq!(uniform.position, eye.to_array());
}
