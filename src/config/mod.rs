//! Configuration file support for overmark.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/overmark/config.toml`. Settings include stroke appearance,
//! arrowhead geometry, toolbar behavior and the default surface size.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{ArrowConfig, DrawingConfig, SurfaceConfig, ToolbarConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// color = "red"
/// shape_thickness = 6.0
/// freehand_thickness = 3.0
///
/// [arrow]
/// length = 40.0
/// angle_degrees = 30.0
///
/// [toolbar]
/// initial_x = 20
/// initial_y = 200
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub drawing: DrawingConfig,

    #[serde(default)]
    pub arrow: ArrowConfig,

    #[serde(default)]
    pub toolbar: ToolbarConfig,

    #[serde(default)]
    pub surface: SurfaceConfig,
}

fn clamp_logged(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(&*value) {
        warn!("Invalid {name} {value:.2}, clamping to {min:.1}-{max:.1} range");
        *value = if value.is_nan() { min } else { value.clamp(min, max) };
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    pub fn validate_and_clamp(&mut self) {
        clamp_logged(
            "shape_thickness",
            &mut self.drawing.shape_thickness,
            1.0,
            30.0,
        );
        clamp_logged(
            "freehand_thickness",
            &mut self.drawing.freehand_thickness,
            1.0,
            30.0,
        );
        clamp_logged("arrow length", &mut self.arrow.length, 5.0, 120.0);
        clamp_logged("arrow angle", &mut self.arrow.angle_degrees, 10.0, 80.0);
        clamp_logged(
            "inactive_alpha",
            &mut self.toolbar.inactive_alpha,
            0.1,
            1.0,
        );
        clamp_logged(
            "restore_drag_threshold",
            &mut self.toolbar.restore_drag_threshold,
            1.0,
            100.0,
        );

        for (name, value) in [
            ("surface width", &mut self.surface.width),
            ("surface height", &mut self.surface.height),
        ] {
            if !(1..=16384).contains(&*value) {
                warn!("Invalid {name} {value}, clamping to 1-16384 range");
                *value = (*value).clamp(1, 16384);
            }
        }
    }

    /// Returns the path to the configuration file (`~/.config/overmark/config.toml`).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("overmark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::StrokeStyle;
    use std::io::Write;

    #[test]
    fn example_config_parses_to_defaults() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).expect("example parses");
        let style = StrokeStyle::from_config(&config);
        assert_eq!(style, StrokeStyle::default());
        assert_eq!(config.toolbar.initial_x, 20);
        assert_eq!(config.toolbar.initial_y, 200);
        assert_eq!(config.toolbar.restore_drag_threshold, 10.0);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = toml::from_str("[arrow]\nlength = 25.0\n").unwrap();
        assert_eq!(config.arrow.length, 25.0);
        assert_eq!(config.arrow.angle_degrees, 30.0);
        assert_eq!(config.drawing.shape_thickness, 6.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.drawing.shape_thickness = 0.0;
        config.arrow.angle_degrees = 170.0;
        config.toolbar.inactive_alpha = f64::NAN;
        config.surface.width = -4;

        config.validate_and_clamp();

        assert_eq!(config.drawing.shape_thickness, 1.0);
        assert_eq!(config.arrow.angle_degrees, 80.0);
        assert_eq!(config.toolbar.inactive_alpha, 0.1);
        assert_eq!(config.surface.width, 1);
    }

    #[test]
    fn load_from_reads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drawing]\ncolor = [0, 0, 255]\nfreehand_thickness = 99.0").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.drawing.freehand_thickness, 30.0);
        assert_eq!(config.drawing.color, ColorSpec::Rgb([0, 0, 255]));
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drawing\ncolor = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["drawing", "arrow", "toolbar", "surface"] {
            assert!(schema.contains(section), "schema lacks {section}");
        }
    }
}
