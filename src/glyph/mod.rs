//! Box glyph shapes and their column bindings.
//!
//! The edit tool supports two ways of describing an axis-aligned box:
//! - [`BoxGlyph::Rect`]: center coordinates plus width and height
//! - [`BoxGlyph::Quad`]: left, bottom, right and top edges
//!
//! Every field optionally names the column it is read from and written to. An
//! unbound field (`None`) is never written.

mod extent;
mod hit;

pub use extent::ExtentOptions;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A box glyph together with its column bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BoxGlyph {
    /// Center-form box
    Rect {
        #[serde(default)]
        x: Option<String>,
        #[serde(default)]
        y: Option<String>,
        #[serde(default)]
        width: Option<String>,
        #[serde(default)]
        height: Option<String>,
    },
    /// Edge-form box
    Quad {
        #[serde(default)]
        left: Option<String>,
        #[serde(default)]
        bottom: Option<String>,
        #[serde(default)]
        right: Option<String>,
        #[serde(default)]
        top: Option<String>,
    },
}

impl BoxGlyph {
    /// Center-form glyph bound to columns of the same names as its fields.
    pub fn rect() -> Self {
        BoxGlyph::Rect {
            x: Some("x".into()),
            y: Some("y".into()),
            width: Some("width".into()),
            height: Some("height".into()),
        }
    }

    /// Edge-form glyph bound to columns of the same names as its fields.
    pub fn quad() -> Self {
        BoxGlyph::Quad {
            left: Some("left".into()),
            bottom: Some("bottom".into()),
            right: Some("right".into()),
            top: Some("top".into()),
        }
    }

    /// Short name of the shape variant.
    pub fn kind(&self) -> &'static str {
        match self {
            BoxGlyph::Rect { .. } => "rect",
            BoxGlyph::Quad { .. } => "quad",
        }
    }

    /// Names of the bound columns, in field order.
    pub fn bound_columns(&self) -> Vec<&str> {
        let fields = match self {
            BoxGlyph::Rect {
                x,
                y,
                width,
                height,
            } => [x, y, width, height],
            BoxGlyph::Quad {
                left,
                bottom,
                right,
                top,
            } => [left, bottom, right, top],
        };
        fields.into_iter().filter_map(|f| f.as_deref()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_parses_with_partial_bindings() {
        let glyph: BoxGlyph =
            toml::from_str("type = \"quad\"\nleft = \"l\"\nright = \"r\"").unwrap();
        assert_eq!(
            glyph,
            BoxGlyph::Quad {
                left: Some("l".into()),
                bottom: None,
                right: Some("r".into()),
                top: None,
            }
        );
        assert_eq!(glyph.bound_columns(), vec!["l", "r"]);
        assert_eq!(glyph.kind(), "quad");
    }

    #[test]
    fn default_bindings_use_field_names() {
        assert_eq!(
            BoxGlyph::rect().bound_columns(),
            vec!["x", "y", "width", "height"]
        );
        assert_eq!(
            BoxGlyph::quad().bound_columns(),
            vec!["left", "bottom", "right", "top"]
        );
    }
}
