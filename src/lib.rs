//! Interactive box editing for plots.
//!
//! [`BoxEditTool`] turns generic pointer and key events into edits of the
//! column data sources behind box glyphs: drawing new boxes, dragging the
//! selected ones, selecting by tap and deleting with Backspace. The
//! configuration layer builds a tool from a TOML file, and the replay module
//! drives one from a recorded gesture script.

pub mod config;
pub mod error;
pub mod glyph;
pub mod input;
pub mod renderer;
pub mod replay;
pub mod scale;
pub mod source;
pub mod util;

pub use config::Config;
pub use error::ToolError;
pub use input::{BoxEditTool, GestureState};
