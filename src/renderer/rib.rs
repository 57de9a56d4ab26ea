//! RenderMan RIB output for the procedural program protocol
//!
//! Each record produces a block like:
//!
//! ```text
//! ##RenderMan RIB
//! TransformBegin
//!     Translate 5 1 0
//!     Rotate 90 0.5 0.5 0.5
//!     Attribute "user" "color main_color" [0.347 0.521 0.738] "color accent_color" [0.347 0.856 0.347]
//!     Sphere 1 -1 1 360
//! TransformEnd
//! #
//! \xff
//! ```
//!
//! The renderer keeps reading until it sees the 0xFF byte, so the marker
//! must be written (and flushed) even when no marble was placed.

use std::io::Write;

use super::SceneSink;
use crate::consts::SPHERE_SWEEP;
use crate::error::Result;
use crate::packing::{PackStats, Placement};
use crate::record::FrameRecord;

/// Structure comment opening every block
pub const RIB_HEADER: &str = "##RenderMan RIB";

/// Comment record whose text is a newline and the 0xFF terminator
pub const END_OF_SCENE: &[u8] = b"#\n\xff\n";

const INDENT: &str = "    ";

/// Writes RIB to any byte stream
pub struct RibSink<W: Write> {
    writer: W,
}

impl<W: Write> RibSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn color(rgb: [f32; 3]) -> String {
        format!("[{} {} {}]", rgb[0], rgb[1], rgb[2])
    }
}

impl<W: Write> SceneSink for RibSink<W> {
    fn begin_scene(&mut self, _record: &FrameRecord) -> Result<()> {
        writeln!(self.writer, "{RIB_HEADER}")?;
        Ok(())
    }

    fn draw_marble(&mut self, placement: &Placement) -> Result<()> {
        let p = placement.position;
        let rot = placement.rotation;
        let r = placement.radius();
        let w = &mut self.writer;

        writeln!(w, "TransformBegin")?;
        writeln!(w, "{INDENT}Translate {} {} {}", p.x, p.y, p.z)?;
        writeln!(
            w,
            "{INDENT}Rotate {} {} {} {}",
            rot.angle_degrees, rot.axis.x, rot.axis.y, rot.axis.z
        )?;
        // Attributes must precede the primitive they apply to
        writeln!(
            w,
            "{INDENT}Attribute \"user\" \"color main_color\" {} \"color accent_color\" {}",
            Self::color(placement.colors.main),
            Self::color(placement.colors.accent)
        )?;
        writeln!(w, "{INDENT}Sphere {} {} {} {}", r, -r, r, SPHERE_SWEEP)?;
        writeln!(w, "TransformEnd")?;
        Ok(())
    }

    fn end_scene(&mut self, _stats: &PackStats) -> Result<()> {
        self.writer.write_all(END_OF_SCENE)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{ColorPair, PackingConfig, Parity, Rotation};
    use glam::DVec3;

    fn record() -> FrameRecord {
        FrameRecord {
            discriminator: "1".to_string(),
            config: PackingConfig::new(1.0, 10.0, 0.0, 10).unwrap(),
        }
    }

    fn marble(parity: Parity) -> Placement {
        Placement {
            index: 0,
            position: DVec3::new(5.0, 1.0, -0.5),
            rotation: Rotation {
                angle_degrees: 90.0,
                axis: DVec3::new(0.5, 0.25, 0.0),
            },
            parity,
            colors: ColorPair::for_parity(parity),
        }
    }

    #[test]
    fn test_marble_block() {
        let mut sink = RibSink::new(Vec::new());
        sink.begin_scene(&record()).unwrap();
        sink.draw_marble(&marble(Parity::Even)).unwrap();
        sink.end_scene(&PackStats::default()).unwrap();

        let out = sink.into_inner();
        let text = String::from_utf8_lossy(&out);
        let expected = "##RenderMan RIB\n\
            TransformBegin\n    \
            Translate 5 1 -0.5\n    \
            Rotate 90 0.5 0.25 0\n    \
            Attribute \"user\" \"color main_color\" [0.347 0.521 0.738] \"color accent_color\" [0.347 0.856 0.347]\n    \
            Sphere 1 -1 1 360\n\
            TransformEnd\n";
        assert!(text.starts_with(expected), "unexpected RIB:\n{text}");
        assert!(out.ends_with(END_OF_SCENE));
    }

    #[test]
    fn test_odd_marble_colors() {
        let mut sink = RibSink::new(Vec::new());
        sink.draw_marble(&marble(Parity::Odd)).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains(
            "\"color main_color\" [0.856 0.84 0.374] \"color accent_color\" [0.856 0.445 0.347]"
        ));
    }

    #[test]
    fn test_empty_scene_still_terminated() {
        let mut sink = RibSink::new(Vec::new());
        sink.begin_scene(&record()).unwrap();
        sink.end_scene(&PackStats::default()).unwrap();

        let out = sink.into_inner();
        let mut expected = format!("{RIB_HEADER}\n").into_bytes();
        expected.extend_from_slice(END_OF_SCENE);
        assert_eq!(out, expected);
        assert!(out.contains(&0xff));
    }
}
