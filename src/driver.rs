//! Frame session driver
//!
//! Reads one record per line, packs it with a freshly seeded RNG and streams
//! the marbles to a sink. Reseeding before every record keeps identical
//! frames identical, so marbles don't pop between frames of an animation.

use std::io::BufRead;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::Result;
use crate::packing::{PackStats, Packer};
use crate::record::FrameRecord;
use crate::renderer::SceneSink;
use crate::settings::Settings;

/// Totals for a whole input stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub marbles: usize,
}

pub struct Driver {
    seed: u64,
}

impl Driver {
    pub fn new(settings: &Settings) -> Self {
        Self {
            seed: settings.seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Process records until end of input
    ///
    /// A malformed line aborts the run; everything written for earlier
    /// records has already been flushed by the sink.
    pub fn run<I, S>(&self, input: I, sink: &mut S) -> Result<RunSummary>
    where
        I: BufRead,
        S: SceneSink + ?Sized,
    {
        let mut summary = RunSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let record = FrameRecord::parse(&line).map_err(|e| e.at_line(index + 1))?;
            let stats = self.process_record(&record, sink)?;

            summary.records += 1;
            summary.marbles += stats.accepted;
        }

        log::info!(
            "End of input after {} records ({} marbles)",
            summary.records,
            summary.marbles
        );
        Ok(summary)
    }

    /// Pack one record and write its scene
    pub fn process_record<S>(&self, record: &FrameRecord, sink: &mut S) -> Result<PackStats>
    where
        S: SceneSink + ?Sized,
    {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let mut packer = Packer::new(record.config, &mut rng);

        sink.begin_scene(record)?;
        for placement in packer.by_ref() {
            log::debug!(
                "marble {} at ({:.3}, {:.3}) r={:.3}",
                placement.index,
                placement.position.x,
                placement.position.z,
                placement.distance_from_center()
            );
            sink.draw_marble(&placement)?;
        }

        let stats = packer.stats();
        sink.end_scene(&stats)?;

        let annulus = record.config.annulus();
        let coverage = if annulus.area() > 0.0 {
            let r = record.config.marble_radius;
            stats.accepted as f64 * std::f64::consts::PI * r * r / annulus.area()
        } else {
            0.0
        };
        log::info!(
            "Record {} [{}]: {} marbles from {} candidates ({:.1}% coverage)",
            record.discriminator,
            record.config,
            stats.accepted,
            stats.candidates,
            coverage * 100.0
        );
        if stats.accepted == 0 {
            log::warn!(
                "Record {} placed no marbles (ring {:.3}..{:.3}, width {:.3})",
                record.discriminator,
                annulus.inner_radius,
                annulus.outer_radius,
                annulus.width()
            );
        }

        Ok(stats)
    }
}
