//! Error types for building an edit tool.

use thiserror::Error;

/// Errors raised while assembling a [`BoxEditTool`](crate::input::BoxEditTool).
///
/// Event handling itself never fails; these only come from construction and
/// configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    #[error("box edit tool needs at least one renderer")]
    NoRenderers,

    #[error("duplicate renderer name '{0}'")]
    DuplicateRenderer(String),

    #[error("renderer '{0}' binds no columns")]
    UnboundGlyph(String),

    #[error("renderer '{0}' has columns of different lengths")]
    RaggedColumns(String),

    #[error("invalid {axis} scale for renderer '{renderer}': {reason}")]
    InvalidScale {
        renderer: String,
        axis: &'static str,
        reason: String,
    },
}
