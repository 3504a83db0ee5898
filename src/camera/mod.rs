//! Camera module — view-point orientation, view matrix derivation,
//! projection builders, and the GPU uniform block.
//!
//! The camera is a value-like object owned and driven by the caller,
//! typically mutated once per frame from an input-polling loop. Nothing
//! here touches the GPU; [`CameraUniform`] only lays the matrices out
//! for upload.

mod camera;
mod projection;
mod uniform;

pub use camera::Camera;
pub use projection::{orthographic, perspective, perspective_fov, perspective_frustum};
pub use uniform::CameraUniform;
