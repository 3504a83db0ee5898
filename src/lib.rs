/*!
# Nova 3D Math

Quaternion algebra and camera orientation for a right-handed 3D space.

This crate provides the spatial-math core consumed by rendering and demo
callers: a `Quaternion` type with lazy rotation-matrix derivation, a
`Camera` that tracks an eye position and orientation and derives view
matrices on demand, perspective/orthographic projection builders, and the
float-comparison utilities the rest of the crate (and its test suites)
use as tolerance basis.

## Architecture

- **Quaternion**: rotation algebra, axis-angle and orthonormal-basis
  construction, cached rotation matrix
- **Camera**: eye/orientation state, absolute and relative translation,
  two look-at modes, incremental axis rotations, view-matrix derivation
- **Projection**: frustum / field-of-view / orthographic matrix builders
- **CameraUniform**: GPU-uploadable column-major matrix block

Callers own and drive the camera; the crate holds no windowing, GPU, or
input state.
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;
pub mod math;

// Main nova3d namespace module
pub mod nova3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: nova_* macros are NOT re-exported here - they are internal only
    }

    // Math sub-module with quaternion and float comparison utilities
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
