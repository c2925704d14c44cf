//! Configuration file support for boxedit.
//!
//! This module handles loading and validating the plot/tool setup from the
//! configuration file located at `~/.config/boxedit/config.toml` (or a path
//! given on the command line). Settings cover the edit tool's behavior, the
//! plot frame, and the renderers with their glyph bindings and scales.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{Dimensions, SelectionMode};
pub use types::{FrameConfig, RendererConfig, ScaleConfig, ToolConfig};

use crate::error::ToolError;
use crate::input::BoxEditTool;
use crate::renderer::GlyphRenderer;
use crate::scale::CoordinateMapping;
use crate::source::ColumnDataSource;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
///
/// # Example TOML
/// ```toml
/// [tool]
/// dimensions = "both"
/// num_objects = 3
///
/// [frame]
/// width = 600.0
/// height = 400.0
///
/// [[renderers]]
/// name = "boxes"
/// glyph = { type = "quad", left = "x0", right = "x1", bottom = "y0", top = "y1" }
/// x_scale = { type = "linear", data = [0.0, 10.0] }
/// y_scale = { type = "linear", data = [0.0, 10.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Edit tool behavior
    #[serde(default)]
    pub tool: ToolConfig,

    /// Plot frame placement on screen
    #[serde(default)]
    pub frame: FrameConfig,

    /// Renderers edited by the tool; the first one receives new boxes
    #[serde(default = "default_renderers")]
    pub renderers: Vec<RendererConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: ToolConfig::default(),
            frame: FrameConfig::default(),
            renderers: default_renderers(),
        }
    }
}

fn default_renderers() -> Vec<RendererConfig> {
    vec![RendererConfig::default()]
}

impl Config {
    /// Validates and repairs values that would make the tool unusable.
    ///
    /// Invalid values are replaced and a warning is logged:
    /// - frame `width`/`height` must be positive (reset to the default frame size)
    /// - linear scales need a non-empty data range (reset to identity)
    /// - log scales need a positive data range (fall back to a linear scale)
    /// - initial data columns must have equal lengths (short ones are padded
    ///   with `tool.empty_value`)
    fn validate_and_clamp(&mut self) {
        let defaults = FrameConfig::default();
        if !(self.frame.width > 0.0) {
            warn!(
                "Invalid frame width {:.1}, using {:.1}",
                self.frame.width, defaults.width
            );
            self.frame.width = defaults.width;
        }
        if !(self.frame.height > 0.0) {
            warn!(
                "Invalid frame height {:.1}, using {:.1}",
                self.frame.height, defaults.height
            );
            self.frame.height = defaults.height;
        }

        let frame = self.frame.to_frame();
        let (top, bottom) = frame.v_range();
        for renderer in &mut self.renderers {
            repair_scale(&renderer.name, "x", &mut renderer.x_scale, frame.h_range());
            repair_scale(&renderer.name, "y", &mut renderer.y_scale, (bottom, top));

            let rows = renderer.data.values().map(Vec::len).max().unwrap_or(0);
            for (column, values) in &mut renderer.data {
                if values.len() < rows {
                    warn!(
                        "Column '{}' of renderer '{}' has {} of {} rows, padding with {:?}",
                        column,
                        renderer.name,
                        values.len(),
                        rows,
                        self.tool.empty_value
                    );
                    values.resize(rows, self.tool.empty_value.clone());
                }
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/boxedit/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("boxedit");

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

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    /// Parses configuration from a TOML string without validation.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Serializes the config to TOML and writes it to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Builds an edit tool with one renderer per configured renderer.
    ///
    /// # Errors
    /// Fails when there are no renderers, names repeat, a glyph binds no
    /// columns, initial data columns differ in length, or a scale cannot be
    /// inverted.
    pub fn build_tool(&self) -> Result<BoxEditTool, ToolError> {
        let frame = self.frame.to_frame();
        let (top, bottom) = frame.v_range();
        let mut renderers: Vec<GlyphRenderer> = Vec::with_capacity(self.renderers.len());

        for entry in &self.renderers {
            if renderers.iter().any(|r| r.name == entry.name) {
                return Err(ToolError::DuplicateRenderer(entry.name.clone()));
            }
            if entry.glyph.bound_columns().is_empty() {
                return Err(ToolError::UnboundGlyph(entry.name.clone()));
            }

            let invalid = |axis: &'static str| {
                move |reason: String| ToolError::InvalidScale {
                    renderer: entry.name.clone(),
                    axis,
                    reason,
                }
            };
            let x_scale = entry.x_scale.build(frame.h_range()).map_err(invalid("x"))?;
            let y_scale = entry.y_scale.build((bottom, top)).map_err(invalid("y"))?;

            let source = ColumnDataSource::from_columns(entry.data.clone());
            if !source.is_consistent() {
                return Err(ToolError::RaggedColumns(entry.name.clone()));
            }
            let mut renderer =
                GlyphRenderer::new(entry.name.clone(), entry.glyph.clone(), source);
            if entry.attached {
                renderer.coordinates = Some(CoordinateMapping { x_scale, y_scale });
            }
            renderers.push(renderer);
        }

        BoxEditTool::new(self.tool.clone(), frame, renderers)
    }
}

fn repair_scale(renderer: &str, axis: &str, scale: &mut ScaleConfig, default_screen: (f64, f64)) {
    let Err(reason) = scale.build(default_screen) else {
        return;
    };
    let replacement = match scale {
        ScaleConfig::Log { data, screen } if data[0] != data[1] => ScaleConfig::Linear {
            data: *data,
            screen: *screen,
        },
        _ => ScaleConfig::Identity,
    };
    warn!("Invalid {axis} scale for renderer '{renderer}' ({reason}), using {replacement:?}");
    *scale = replacement;
    // A linear fallback can still be degenerate (e.g. an empty screen range).
    if scale.build(default_screen).is_err() {
        *scale = ScaleConfig::Identity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::BoxGlyph;
    use crate::source::Value;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.renderers.len(), 1);
        assert_eq!(config.renderers[0].glyph, BoxGlyph::rect());
    }

    #[test]
    fn validate_repairs_frame_and_scales() {
        let mut config = Config::from_toml(
            r#"
            [frame]
            width = -5.0
            height = 0.0

            [[renderers]]
            name = "a"
            x_scale = { type = "log", data = [0.0, 10.0] }
            y_scale = { type = "linear", data = [2.0, 2.0] }
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.frame.width, 600.0);
        assert_eq!(config.frame.height, 400.0);
        assert_eq!(
            config.renderers[0].x_scale,
            ScaleConfig::Linear {
                data: [0.0, 10.0],
                screen: None
            }
        );
        assert_eq!(config.renderers[0].y_scale, ScaleConfig::Identity);
    }

    #[test]
    fn build_tool_rejects_bad_renderer_sets() {
        let mut config = Config::default();
        config.renderers.clear();
        assert_eq!(config.build_tool().err(), Some(ToolError::NoRenderers));

        let mut config = Config::default();
        config.renderers.push(RendererConfig::default());
        assert_eq!(
            config.build_tool().err(),
            Some(ToolError::DuplicateRenderer("boxes".into()))
        );

        let mut config = Config::default();
        config.renderers[0].glyph = BoxGlyph::Quad {
            left: None,
            bottom: None,
            right: None,
            top: None,
        };
        assert_eq!(
            config.build_tool().err(),
            Some(ToolError::UnboundGlyph("boxes".into()))
        );
    }

    #[test]
    fn ragged_data_is_padded_on_load_and_rejected_otherwise() {
        let ragged = r#"
            [tool]
            empty_value = -1.0

            [[renderers]]
            name = "r"

            [renderers.data]
            x = [1.0, 2.0]
            y = [1.0]
            width = [1.0, 1.0]
            height = [1.0, 1.0]
            "#;

        let config = Config::from_toml(ragged).unwrap();
        assert_eq!(
            config.build_tool().err(),
            Some(ToolError::RaggedColumns("r".into()))
        );

        let mut config = Config::from_toml(ragged).unwrap();
        config.validate_and_clamp();
        assert_eq!(
            config.renderers[0].data["y"],
            vec![Value::from(1.0), Value::from(-1.0)]
        );
        let tool = config.build_tool().unwrap();
        assert!(tool.renderers()[0].source.is_consistent());
    }

    #[test]
    fn build_tool_honors_attachment() {
        let mut config = Config::default();
        config.renderers.push(RendererConfig {
            name: "ghost".into(),
            attached: false,
            ..RendererConfig::default()
        });
        let tool = config.build_tool().unwrap();
        assert!(tool.renderers()[0].is_attached());
        assert!(!tool.renderers()[1].is_attached());
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.tool.num_objects = 4;
        config.tool.dimensions = Dimensions::Width;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("renderers"));
        assert!(schema.contains("num_objects"));
    }
}
