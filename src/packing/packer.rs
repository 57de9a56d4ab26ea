//! Rejection-sampling annulus packer
//!
//! Candidates are drawn uniformly from the square around the ring and kept
//! only if they land inside the ring and clear every marble already placed.
//! Each rejection (and each conflicting neighbour) is charged to a failure
//! budget that resets on every acceptance; packing stops once the budget is
//! exceeded.

use std::iter::FusedIterator;

use glam::DVec2;
use rand::Rng;

use super::annulus::Annulus;
use super::clearance::tally_clearance;
use super::config::PackingConfig;
use super::placement::{ColorPair, Parity, Placement, Rotation};
use crate::from_planar;

/// Counters for one packing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackStats {
    /// Candidate points drawn
    pub candidates: u64,
    /// Candidates outside the ring
    pub annulus_rejections: u64,
    /// Conflicting neighbours across all in-ring candidates
    pub clearance_violations: u64,
    /// Marbles placed
    pub accepted: usize,
}

/// Uniform sample in [low, high); tolerates low > high
#[inline]
fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.random::<f64>()
}

/// Lazy packer yielding marbles in acceptance order
///
/// Borrowing the RNG keeps the packer free of hidden state: reseed the
/// generator and the same config yields the same marbles.
pub struct Packer<'a, R: Rng> {
    config: PackingConfig,
    annulus: Annulus,
    rng: &'a mut R,
    /// Planar centres of accepted marbles, in order
    occupied: Vec<DVec2>,
    parity: Parity,
    /// Failures since the last acceptance
    failed_attempts: u64,
    stats: PackStats,
}

impl<'a, R: Rng> Packer<'a, R> {
    pub fn new(config: PackingConfig, rng: &'a mut R) -> Self {
        Self {
            annulus: config.annulus(),
            config,
            rng,
            occupied: Vec::new(),
            parity: Parity::Even,
            failed_attempts: 0,
            stats: PackStats::default(),
        }
    }

    pub fn config(&self) -> &PackingConfig {
        &self.config
    }

    pub fn stats(&self) -> PackStats {
        self.stats
    }

    /// Planar centres accepted so far
    pub fn occupied(&self) -> &[DVec2] {
        &self.occupied
    }

    fn budget_left(&self) -> bool {
        self.failed_attempts <= u64::from(self.config.max_consecutive_failures)
    }

    fn accept(&mut self, candidate: DVec2) -> Placement {
        let index = self.occupied.len();
        let parity = self.parity;
        let rotation = Rotation::random(self.rng);

        self.occupied.push(candidate);
        self.parity = parity.flip();
        self.failed_attempts = 0;
        self.stats.accepted += 1;

        Placement {
            index,
            position: from_planar(candidate, self.config.marble_radius),
            rotation,
            parity,
            colors: ColorPair::for_parity(parity),
        }
    }
}

impl<R: Rng> Iterator for Packer<'_, R> {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        let bound = self.config.placement_bound();
        let clearance = self.config.clearance();

        while self.budget_left() {
            let x = uniform(self.rng, -bound, bound);
            let z = uniform(self.rng, -bound, bound);
            let candidate = DVec2::new(x, z);
            self.stats.candidates += 1;

            if !self.annulus.contains_point(candidate) {
                self.failed_attempts += 1;
                self.stats.annulus_rejections += 1;
                continue;
            }

            let tally = tally_clearance(candidate, &self.occupied, clearance);
            self.failed_attempts += tally.violations as u64;
            self.stats.clearance_violations += tally.violations as u64;

            if tally.is_clear(self.occupied.len()) {
                return Some(self.accept(candidate));
            }
        }

        None
    }
}

// Once the budget is exhausted it stays exhausted
impl<R: Rng> FusedIterator for Packer<'_, R> {}

/// Run a packer to completion and collect every marble
pub fn pack<R: Rng>(config: PackingConfig, rng: &mut R) -> Vec<Placement> {
    Packer::new(config, rng).collect()
}
