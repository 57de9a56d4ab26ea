//! Annulus geometry for the marble scatter region
//!
//! The region is a flat ring on the ground plane:
//! - inner_radius: edge of the empty centre
//! - outer_radius: furthest allowed marble centre
//!
//! Both edges are inclusive.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A ring-shaped planar region centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annulus {
    /// Smallest allowed distance from the origin
    pub inner_radius: f64,
    /// Largest allowed distance from the origin
    pub outer_radius: f64,
}

impl Annulus {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
        }
    }

    /// True when no point can satisfy both edges
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outer_radius < self.inner_radius
    }

    /// Radial width of the ring (zero when empty)
    #[inline]
    pub fn width(&self) -> f64 {
        (self.outer_radius - self.inner_radius).max(0.0)
    }

    /// Check a distance from the origin against both edges (inclusive)
    #[inline]
    pub fn contains_distance(&self, distance: f64) -> bool {
        distance >= self.inner_radius && distance <= self.outer_radius
    }

    /// Check if a planar point lies inside the ring
    #[inline]
    pub fn contains_point(&self, point: DVec2) -> bool {
        self.contains_distance(point.length())
    }

    /// Area of the ring (zero when empty)
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        std::f64::consts::PI
            * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius)
    }
}
