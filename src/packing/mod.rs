//! Deterministic packing module
//!
//! All placement logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed in by the caller
//! - Stable acceptance order
//! - No I/O or rendering dependencies

pub mod annulus;
pub mod clearance;
pub mod config;
pub mod packer;
pub mod placement;

pub use annulus::Annulus;
pub use clearance::{ClearanceTally, clears, tally_clearance};
pub use config::PackingConfig;
pub use packer::{PackStats, Packer, pack};
pub use placement::{ColorPair, Parity, Placement, Rotation};
