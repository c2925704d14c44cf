//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which screen axes a draw or drag gesture may edit.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dimensions {
    /// Horizontal only; the vertical extent spans the whole frame
    Width,
    /// Vertical only; the horizontal extent spans the whole frame
    Height,
    /// Both axes, unrestricted
    #[default]
    Both,
}

impl Dimensions {
    /// Whether the horizontal axis follows the pointer.
    pub fn edits_width(self) -> bool {
        matches!(self, Dimensions::Width | Dimensions::Both)
    }

    /// Whether the vertical axis follows the pointer.
    pub fn edits_height(self) -> bool {
        matches!(self, Dimensions::Height | Dimensions::Both)
    }
}

/// How a new hit combines with the existing selection.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// The hit becomes the selection
    #[default]
    Replace,
    /// The hit is added to the selection
    Append,
    /// Only rows both selected and hit stay selected
    Intersect,
    /// The hit is removed from the selection
    Subtract,
}
