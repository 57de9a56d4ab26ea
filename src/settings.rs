//! Driver settings
//!
//! Defaults reproduce the classic behaviour (seed 1, RIB on stdout). A JSON
//! settings file can be pointed to with `MARBLE_RING_SETTINGS`, and
//! `MARBLE_RING_FORMAT` overrides the output format on its own.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SEED;
use crate::error::{Error, Result};

/// What the driver writes to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Rib,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Rib => "rib",
            OutputFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rib" => Some(OutputFormat::Rib),
            "json" | "jsonl" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed applied before every record
    pub seed: u64,
    /// Output format
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            format: OutputFormat::Rib,
        }
    }
}

impl Settings {
    /// Path to a JSON settings file
    pub const PATH_VAR: &'static str = "MARBLE_RING_SETTINGS";
    /// Output format override
    pub const FORMAT_VAR: &'static str = "MARBLE_RING_FORMAT";

    /// Load settings from the environment
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(Self::PATH_VAR);
        let format = std::env::var(Self::FORMAT_VAR).ok();
        Self::load_from(path.as_deref().map(Path::new), format.as_deref())
    }

    /// Load from an optional file, then apply an optional format override
    pub fn load_from(path: Option<&Path>, format: Option<&str>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(name) = format {
            settings.format = OutputFormat::from_str(name)
                .ok_or_else(|| Error::Settings(format!("unknown output format {name:?}")))?;
        }

        log::debug!(
            "Settings: seed={} format={}",
            settings.seed,
            settings.format.as_str()
        );
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("{}: {e}", path.display())))?;
        let settings: Self = serde_json::from_str(&json)
            .map_err(|e| Error::Settings(format!("{}: {e}", path.display())))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Settings(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.seed, 1);
        assert_eq!(settings.format, OutputFormat::Rib);
        assert_eq!(Settings::load_from(None, None).unwrap(), settings);
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("RIB"), Some(OutputFormat::Rib));
        assert_eq!(OutputFormat::from_str(" json "), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("jsonl"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("obj"), None);
        assert_eq!(OutputFormat::Json.as_str(), "json");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"format": "json"}"#).unwrap();
        assert_eq!(settings.seed, DEFAULT_SEED);
        assert_eq!(settings.format, OutputFormat::Json);

        let settings = Settings::from_json(r#"{"seed": 99}"#).unwrap();
        assert_eq!(settings.seed, 99);
        assert_eq!(settings.format, OutputFormat::Rib);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Settings::from_json(r#"{"format": "svg"}"#),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn test_format_override() {
        let settings = Settings::load_from(None, Some("json")).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(matches!(
            Settings::load_from(None, Some("png")),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "marble-ring-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"seed": 7, "format": "rib"}"#).unwrap();

        let settings = Settings::load_from(Some(&path), Some("json")).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.format, OutputFormat::Json);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            Settings::from_file(&path),
            Err(Error::Settings(_))
        ));
    }
}
