use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level terma configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TermaConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Date rendering style: "long" or "short".
    #[serde(default = "default_style")]
    pub style: String,
    /// Include the time of day when rendering dates.
    #[serde(default)]
    pub with_time: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            with_time: false,
        }
    }
}

fn default_style() -> String {
    "long".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit JSON by default.
    #[serde(default)]
    pub json: bool,
}

impl TermaConfig {
    /// Loads configuration from `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TermaConfig::default();
        assert_eq!(config.display.style, "long");
        assert!(!config.display.with_time);
        assert!(!config.output.json);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: TermaConfig = toml::from_str(
            r#"
            [display]
            style = "short"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.style, "short");
        assert!(!config.display.with_time);
        assert!(!config.output.json);
    }

    #[test]
    fn full_toml() {
        let config: TermaConfig = toml::from_str(
            r#"
            [display]
            style = "long"
            with_time = true

            [output]
            json = true
            "#,
        )
        .unwrap();
        assert!(config.display.with_time);
        assert!(config.output.json);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: std::result::Result<TermaConfig, _> = toml::from_str(
            r#"
            [display]
            locale = "de-DE"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = TermaConfig::load(Path::new("/nonexistent/terma.toml")).unwrap();
        assert_eq!(config.display.style, "long");
    }
}
