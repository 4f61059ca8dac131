//! Procedural starfield: a point cloud scattered once, turned and breathed every frame.

pub mod error;
pub mod motion;
pub mod starfield;

pub use error::StarfieldError;
pub use motion::{FrameTransform, ROTATION_AMPLITUDE, StarfieldState};
pub use starfield::{DEFAULT_EXTENT, StarPoint, Starfield, generate_points, generate_points_with};
