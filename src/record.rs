//! Per-frame parameter records
//!
//! The renderer sends one line per procedural request:
//!
//! ```text
//! <detail> <marble_radius> <outer_radius> <padding> <number_of_attempts>
//! ```
//!
//! The leading token (the detail size the renderer computed for the
//! primitive) is kept for logging only. The remaining four fields are the
//! `data` string the host scene node writes from its UI attributes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::packing::PackingConfig;

/// Number of numeric fields after the discriminator
pub const PAYLOAD_FIELDS: usize = 4;

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// Leading token, passed through untouched
    pub discriminator: String,
    pub config: PackingConfig,
}

impl FrameRecord {
    /// Parse a full input line
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (discriminator, payload) = line
            .split_once(char::is_whitespace)
            .ok_or(Error::MissingPayload)?;
        Ok(Self {
            discriminator: discriminator.to_string(),
            config: parse_payload(payload)?,
        })
    }
}

impl FromStr for FrameRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FrameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.discriminator, format_payload(&self.config))
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parse the four whitespace-separated payload fields
pub fn parse_payload(payload: &str) -> Result<PackingConfig> {
    let fields: Vec<&str> = payload.split_whitespace().collect();
    if fields.is_empty() {
        return Err(Error::MissingPayload);
    }
    if fields.len() != PAYLOAD_FIELDS {
        return Err(Error::FieldCount {
            expected: PAYLOAD_FIELDS,
            found: fields.len(),
        });
    }

    PackingConfig::new(
        parse_field("marble radius", fields[0])?,
        parse_field("outer radius", fields[1])?,
        parse_field("padding", fields[2])?,
        parse_field("number of attempts", fields[3])?,
    )
}

/// Render a config as the host frontend's `data` string
pub fn format_payload(config: &PackingConfig) -> String {
    format!(
        "{} {} {} {}",
        config.marble_radius, config.outer_radius, config.padding, config.max_consecutive_failures
    )
}
