//! JSON lines output
//!
//! One object per marble, then a footer line per record. Handy for piping
//! placements into plotting tools without a renderer.

use std::io::Write;

use serde::Serialize;

use super::SceneSink;
use crate::error::Result;
use crate::packing::{PackStats, Placement};
use crate::record::FrameRecord;

/// Footer written after each record's marbles
#[derive(Debug, Serialize)]
struct SceneFooter<'a> {
    end_of_scene: bool,
    discriminator: &'a str,
    marbles: usize,
    candidates: u64,
}

pub struct JsonSink<W: Write> {
    writer: W,
    discriminator: String,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            discriminator: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> SceneSink for JsonSink<W> {
    fn begin_scene(&mut self, record: &FrameRecord) -> Result<()> {
        self.discriminator.clone_from(&record.discriminator);
        Ok(())
    }

    fn draw_marble(&mut self, placement: &Placement) -> Result<()> {
        self.write_line(placement)
    }

    fn end_scene(&mut self, stats: &PackStats) -> Result<()> {
        let discriminator = std::mem::take(&mut self.discriminator);
        self.write_line(&SceneFooter {
            end_of_scene: true,
            discriminator: &discriminator,
            marbles: stats.accepted,
            candidates: stats.candidates,
        })?;
        self.writer.flush()?;
        Ok(())
    }
}
