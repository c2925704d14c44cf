//! Configuration type definitions.

use super::enums::{Dimensions, SelectionMode};
use crate::glyph::BoxGlyph;
use crate::scale::{LinearScale, LogScale, PlotFrame, Scale};
use crate::source::Value;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Edit tool behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolConfig {
    /// Axes a draw or drag may edit: "width", "height" or "both"
    #[serde(default)]
    pub dimensions: Dimensions,

    /// Maximum number of boxes kept; the oldest are dropped first (0 = unlimited)
    #[serde(default)]
    pub num_objects: usize,

    /// Value written into columns that receive no value when a box is appended
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub empty_value: Value,

    /// Selection mode of an unmodified tap ("replace", "append", "intersect", "subtract")
    #[serde(default)]
    pub default_select_mode: SelectionMode,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::Both,
            num_objects: 0,
            empty_value: Value::Null,
            default_select_mode: SelectionMode::Replace,
        }
    }
}

/// Screen-space placement of the plot frame, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameConfig {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default = "default_frame_width")]
    pub width: f64,
    #[serde(default = "default_frame_height")]
    pub height: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: default_frame_width(),
            height: default_frame_height(),
        }
    }
}

impl FrameConfig {
    pub fn to_frame(&self) -> PlotFrame {
        PlotFrame::new(self.left, self.top, self.width, self.height)
    }
}

/// Scale of one axis.
///
/// `screen` defaults to the frame's range on that axis (bottom-to-top for y).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScaleConfig {
    /// Screen pixels equal data units
    Identity,
    /// Linear mapping of `data` onto `screen`
    Linear {
        data: [f64; 2],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        screen: Option<[f64; 2]>,
    },
    /// Logarithmic mapping; both data bounds must be positive
    Log {
        data: [f64; 2],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        screen: Option<[f64; 2]>,
    },
}

impl ScaleConfig {
    /// Builds the scale, falling back to `default_screen` for the screen range.
    ///
    /// # Errors
    /// Returns a description of the problem when the ranges are not invertible.
    pub fn build(&self, default_screen: (f64, f64)) -> Result<Box<dyn Scale>, String> {
        let screen_of = |screen: &Option<[f64; 2]>| {
            screen.map(|[s0, s1]| (s0, s1)).unwrap_or(default_screen)
        };
        match self {
            ScaleConfig::Identity => Ok(Box::new(LinearScale::identity())),
            ScaleConfig::Linear { data, screen } => {
                LinearScale::new((data[0], data[1]), screen_of(screen))
                    .map(|s| Box::new(s) as Box<dyn Scale>)
                    .ok_or_else(|| format!("empty range {data:?}"))
            }
            ScaleConfig::Log { data, screen } => {
                LogScale::new((data[0], data[1]), screen_of(screen))
                    .map(|s| Box::new(s) as Box<dyn Scale>)
                    .ok_or_else(|| format!("range {data:?} must be positive and non-empty"))
            }
        }
    }
}

/// One box renderer: glyph bindings, scales and initial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RendererConfig {
    /// Unique renderer name
    pub name: String,

    /// Glyph shape and the columns its fields are bound to
    #[serde(default = "default_glyph")]
    pub glyph: BoxGlyph,

    /// Horizontal scale (identity when omitted)
    #[serde(default = "default_scale")]
    pub x_scale: ScaleConfig,

    /// Vertical scale (identity when omitted)
    #[serde(default = "default_scale")]
    pub y_scale: ScaleConfig,

    /// Whether the renderer's view is attached; detached renderers ignore edits
    #[serde(default = "default_attached")]
    pub attached: bool,

    /// Initial column data
    #[serde(default)]
    pub data: BTreeMap<String, Vec<Value>>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            name: default_renderer_name(),
            glyph: default_glyph(),
            x_scale: default_scale(),
            y_scale: default_scale(),
            attached: default_attached(),
            data: BTreeMap::new(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_frame_width() -> f64 {
    600.0
}

fn default_frame_height() -> f64 {
    400.0
}

fn default_glyph() -> BoxGlyph {
    BoxGlyph::rect()
}

fn default_scale() -> ScaleConfig {
    ScaleConfig::Identity
}

fn default_attached() -> bool {
    true
}

pub(super) fn default_renderer_name() -> String {
    "boxes".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_defaults_to_given_screen_range() {
        let scale = ScaleConfig::Linear {
            data: [0.0, 10.0],
            screen: None,
        }
        .build((0.0, 100.0))
        .unwrap();
        assert_eq!(scale.invert(50.0), 5.0);
    }

    #[test]
    fn invalid_scales_are_reported() {
        let log = ScaleConfig::Log {
            data: [-1.0, 10.0],
            screen: None,
        };
        assert!(log.build((0.0, 100.0)).is_err());

        let linear = ScaleConfig::Linear {
            data: [3.0, 3.0],
            screen: Some([0.0, 1.0]),
        };
        assert!(linear.build((0.0, 100.0)).is_err());
    }

    #[test]
    fn renderer_defaults_fill_missing_fields() {
        let renderer: RendererConfig = toml::from_str("name = \"r\"").unwrap();
        assert_eq!(renderer.glyph, BoxGlyph::rect());
        assert_eq!(renderer.x_scale, ScaleConfig::Identity);
        assert!(renderer.attached);
        assert!(renderer.data.is_empty());
    }
}
