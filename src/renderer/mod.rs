//! Scene output
//!
//! The packer never draws anything itself. The driver hands each accepted
//! marble to a `SceneSink`, which turns it into renderer input:
//! - `RibSink`: RenderMan RIB for the procedural program protocol
//! - `JsonSink`: one JSON object per marble, for inspection
//! - `VecSink`: in-memory capture

pub mod json;
pub mod rib;

use std::io::Write;

pub use json::JsonSink;
pub use rib::{END_OF_SCENE, RibSink};

use crate::error::Result;
use crate::packing::{PackStats, Placement};
use crate::record::FrameRecord;
use crate::settings::OutputFormat;

/// Receives one scene per record, marble by marble
pub trait SceneSink {
    /// Open the output block for a record
    fn begin_scene(&mut self, record: &FrameRecord) -> Result<()>;

    /// Draw one marble; called in acceptance order
    fn draw_marble(&mut self, placement: &Placement) -> Result<()>;

    /// Write the end-of-scene marker and close the block
    fn end_scene(&mut self, stats: &PackStats) -> Result<()>;
}

impl<S: SceneSink + ?Sized> SceneSink for Box<S> {
    fn begin_scene(&mut self, record: &FrameRecord) -> Result<()> {
        (**self).begin_scene(record)
    }

    fn draw_marble(&mut self, placement: &Placement) -> Result<()> {
        (**self).draw_marble(placement)
    }

    fn end_scene(&mut self, stats: &PackStats) -> Result<()> {
        (**self).end_scene(stats)
    }
}

/// Build the sink for an output format
pub fn sink_for<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn SceneSink + 'a> {
    match format {
        OutputFormat::Rib => Box::new(RibSink::new(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
    }
}

/// A scene captured by `VecSink`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturedScene {
    pub discriminator: String,
    pub placements: Vec<Placement>,
    /// Set once `end_scene` ran
    pub stats: Option<PackStats>,
}

/// Keeps every scene in memory
#[derive(Debug, Default)]
pub struct VecSink {
    pub scenes: Vec<CapturedScene>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total marbles across all scenes
    pub fn marble_count(&self) -> usize {
        self.scenes.iter().map(|s| s.placements.len()).sum()
    }
}

impl SceneSink for VecSink {
    fn begin_scene(&mut self, record: &FrameRecord) -> Result<()> {
        self.scenes.push(CapturedScene {
            discriminator: record.discriminator.clone(),
            ..Default::default()
        });
        Ok(())
    }

    fn draw_marble(&mut self, placement: &Placement) -> Result<()> {
        if let Some(scene) = self.scenes.last_mut() {
            scene.placements.push(placement.clone());
        }
        Ok(())
    }

    fn end_scene(&mut self, stats: &PackStats) -> Result<()> {
        if let Some(scene) = self.scenes.last_mut() {
            scene.stats = Some(*stats);
        }
        Ok(())
    }
}
