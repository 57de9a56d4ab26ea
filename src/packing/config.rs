//! Per-record packing parameters

use std::fmt;

use serde::{Deserialize, Serialize};

use super::annulus::Annulus;
use crate::error::{Error, Result};

/// Parameters for packing one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackingConfig {
    /// Radius of every marble
    pub marble_radius: f64,
    /// Radius of the whole scatter disc
    pub outer_radius: f64,
    /// Extra gap required between marble surfaces
    pub padding: f64,
    /// Rejections tolerated since the last accepted marble
    pub max_consecutive_failures: u32,
}

impl PackingConfig {
    /// Build a validated config
    pub fn new(
        marble_radius: f64,
        outer_radius: f64,
        padding: f64,
        max_consecutive_failures: u32,
    ) -> Result<Self> {
        let config = Self {
            marble_radius,
            outer_radius,
            padding,
            max_consecutive_failures,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the parameter constraints
    ///
    /// A config whose ring is empty (outer radius smaller than twice the
    /// diameter) is still valid; it just never places a marble.
    pub fn validate(&self) -> Result<()> {
        if !self.marble_radius.is_finite()
            || !self.outer_radius.is_finite()
            || !self.padding.is_finite()
        {
            return Err(Error::InvalidConfig(format!("non-finite value in {self}")));
        }
        if self.marble_radius <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "marble radius must be positive, got {}",
                self.marble_radius
            )));
        }
        if self.outer_radius <= self.marble_radius {
            return Err(Error::InvalidConfig(format!(
                "outer radius {} must exceed marble radius {}",
                self.outer_radius, self.marble_radius
            )));
        }
        if self.padding < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "padding must not be negative, got {}",
                self.padding
            )));
        }
        Ok(())
    }

    /// Edge of the empty centre
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius / 2.0
    }

    #[inline]
    pub fn marble_diameter(&self) -> f64 {
        self.marble_radius * 2.0
    }

    /// Largest coordinate (and distance from origin) a marble centre may take
    #[inline]
    pub fn placement_bound(&self) -> f64 {
        self.outer_radius - self.marble_diameter()
    }

    /// Centre-to-centre distance two marbles must strictly exceed
    #[inline]
    pub fn clearance(&self) -> f64 {
        self.marble_diameter() + self.padding
    }

    /// The ring marble centres must fall in
    pub fn annulus(&self) -> Annulus {
        Annulus::new(self.inner_radius(), self.placement_bound())
    }
}

impl fmt::Display for PackingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radius={} outer={} padding={} attempts={}",
            self.marble_radius, self.outer_radius, self.padding, self.max_consecutive_failures
        )
    }
}
