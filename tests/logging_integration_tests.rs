//! Integration tests for the logging system.
//!
//! Verify that degenerate camera inputs are absorbed silently but leave
//! a trace through the global logger slot. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use glam::Vec3;
use nova_3d_math::log::{reset_logger, set_logger, LogEntry, LogSeverity, Logger};
use nova_3d_math::nova3d::camera::Camera;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification.
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                entries: entries.clone(),
            },
            entries,
        )
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(entry.clone());
    }
}

// ============================================================================
// DEGENERATE CAMERA INPUT LOGGING
// ============================================================================

#[test]
#[serial]
fn test_integration_degenerate_look_at_logs_debug() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    let mut camera = Camera::new();
    let eye = Vec3::new(1.0, 2.0, 3.0);
    camera.look_at(eye, eye, Vec3::Y);

    reset_logger();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Debug);
    assert_eq!(captured[0].source, "nova3d::Camera");
    assert!(captured[0].message.contains("look_at ignored"));
}

#[test]
#[serial]
fn test_integration_degenerate_rotations_log_per_call() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    let mut camera = Camera::new();
    camera.rotate(Vec3::ZERO, 1.0);
    camera.retarget(camera.position());

    reset_logger();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(captured[0].message.contains("rotate ignored"));
    assert!(captured[1].message.contains("retarget ignored"));
}

#[test]
#[serial]
fn test_integration_healthy_camera_calls_stay_silent() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    let mut camera = Camera::new();
    camera.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    camera.rotate(Vec3::Y, 0.1);
    camera.pitch(0.05);
    let _ = camera.view_matrix();

    reset_logger();

    assert!(entries.lock().unwrap().is_empty());
}
