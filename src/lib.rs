//! Marble Ring - deterministic marble scattering for procedural scenes
//!
//! Core modules:
//! - `packing`: Deterministic annulus packer (rejection sampling, parity colors)
//! - `record`: Per-frame parameter lines
//! - `renderer`: Scene sinks (RIB stream, JSON lines)
//! - `driver`: Frame session loop tying records, packer and sink together
//! - `settings`: Seed and output format

pub mod driver;
pub mod error;
pub mod packing;
pub mod record;
pub mod renderer;
pub mod settings;

pub use driver::{Driver, RunSummary};
pub use error::{Error, Result};
pub use settings::{OutputFormat, Settings};

use glam::{DVec2, DVec3};

/// Packing and output constants
pub mod consts {
    /// Seed applied before every record so identical frames produce identical marbles
    pub const DEFAULT_SEED: u64 = 1;

    /// Palette (linear RGB in [0, 1])
    pub const GREEN: [f32; 3] = [0.347, 0.856, 0.347];
    pub const BLUE: [f32; 3] = [0.347, 0.521, 0.738];
    pub const RED: [f32; 3] = [0.856, 0.445, 0.347];
    pub const YELLOW: [f32; 3] = [0.856, 0.840, 0.374];

    /// Full sweep for sphere primitives (degrees)
    pub const SPHERE_SWEEP: f64 = 360.0;

    /// Upper bound (exclusive) of the random marble rotation angle (degrees)
    pub const MAX_ROTATION_DEGREES: f64 = 360.0;
}

/// Project a 3D position onto the ground (x-z) plane
#[inline]
pub fn to_planar(position: DVec3) -> DVec2 {
    DVec2::new(position.x, position.z)
}

/// Lift a planar (x, z) point to a 3D position at the given height
#[inline]
pub fn from_planar(point: DVec2, height: f64) -> DVec3 {
    DVec3::new(point.x, height, point.y)
}

/// Distance between two positions sharing the same height
#[inline]
pub fn planar_distance(a: DVec3, b: DVec3) -> f64 {
    to_planar(a).distance(to_planar(b))
}
