//! Gesture state machine and edit tool state.

use crate::config::{SelectionMode, ToolConfig};
use crate::error::ToolError;
use crate::glyph::ExtentOptions;
use crate::renderer::GlyphRenderer;
use crate::scale::PlotFrame;
use crate::util;
use log::debug;

/// Current gesture of the edit tool.
///
/// Drawing a new box and dragging the selected boxes are mutually exclusive:
/// a gesture can only start from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A new box is being drawn from `anchor` (screen coordinates)
    Drawing {
        /// Where the draw started
        anchor: (f64, f64),
    },
    /// Selected boxes are being dragged
    Dragging {
        /// Pointer position of the previous drag step
        anchor: (f64, f64),
    },
}

/// Interactive box edit tool.
///
/// Creates boxes (Shift+drag, or double-tap twice), drags the selected boxes
/// (plain drag), selects by tapping, and deletes or deselects with
/// Backspace/Escape. New boxes always go to the first renderer; drags and
/// selection apply to all renderers.
#[derive(Debug)]
pub struct BoxEditTool {
    /// Tool behavior (dimensions, object cap, padding value)
    pub(crate) config: ToolConfig,
    /// Screen-space plot frame
    pub(crate) frame: PlotFrame,
    /// Edited renderers, in priority order (never empty)
    pub(crate) renderers: Vec<GlyphRenderer>,
    /// Current gesture
    pub(crate) gesture: GestureState,
    /// Whether the tool is the active one on its plot
    pub(crate) active: bool,
    /// Whether the pointer is currently inside the plot frame
    pub(crate) pointer_in_frame: bool,
}

impl BoxEditTool {
    /// Creates an active tool over `renderers`.
    ///
    /// # Errors
    /// Returns [`ToolError::NoRenderers`] when `renderers` is empty.
    pub fn new(
        config: ToolConfig,
        frame: PlotFrame,
        renderers: Vec<GlyphRenderer>,
    ) -> Result<Self, ToolError> {
        if renderers.is_empty() {
            return Err(ToolError::NoRenderers);
        }
        Ok(Self {
            config,
            frame,
            renderers,
            gesture: GestureState::Idle,
            active: true,
            pointer_in_frame: false,
        })
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn frame(&self) -> &PlotFrame {
        &self.frame
    }

    /// Updates the frame after a plot layout change.
    pub fn set_frame(&mut self, frame: PlotFrame) {
        self.frame = frame;
    }

    pub fn renderers(&self) -> &[GlyphRenderer] {
        &self.renderers
    }

    pub fn renderers_mut(&mut self) -> &mut [GlyphRenderer] {
        &mut self.renderers
    }

    /// Looks up a renderer by name.
    pub fn renderer(&self, name: &str) -> Option<&GlyphRenderer> {
        self.renderers.iter().find(|r| r.name == name)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pointer_in_frame(&self) -> bool {
        self.pointer_in_frame
    }

    /// Drops any gesture in progress without committing it.
    ///
    /// Rows already written by an unfinished draw stay in the source.
    pub fn reset(&mut self) {
        if self.gesture != GestureState::Idle {
            debug!("Resetting gesture {:?}", self.gesture);
        }
        self.gesture = GestureState::Idle;
    }

    /// Writes the box from `anchor` to `current` into the first renderer.
    ///
    /// The rectangle is limited to the configured dimensions before it is mapped
    /// to data space. Returns whether anything was written.
    pub(crate) fn update_box(
        &mut self,
        anchor: (f64, f64),
        current: (f64, f64),
        append: bool,
    ) -> bool {
        let (sx, sy) = util::dim_limits(anchor, current, &self.frame, self.config.dimensions);
        let options = ExtentOptions {
            num_objects: self.config.num_objects,
            empty_value: &self.config.empty_value,
        };
        match self.renderers.first_mut() {
            Some(target) => target.set_extent(sx, sy, append, options),
            None => false,
        }
    }

    /// Commits the first renderer's source (end of a draw).
    ///
    /// A detached target never received the box, so nothing is committed.
    pub(crate) fn commit_target(&mut self) {
        match self.renderers.first_mut() {
            Some(target) if target.is_attached() => target.source.commit(),
            _ => {}
        }
    }

    /// Applies one drag step from the stored anchor to `current` on every renderer.
    pub(crate) fn drag_step(&mut self, anchor: (f64, f64), current: (f64, f64)) {
        let dims = self.config.dimensions;
        for renderer in &mut self.renderers {
            if !renderer.drag_selected(&self.frame, anchor, current, dims) {
                debug!("Renderer '{}' skipped drag step", renderer.name);
            }
        }
    }

    /// Hit-tests `point` on every renderer, combining hits with `mode`.
    pub(crate) fn select_at(&mut self, point: (f64, f64), mode: SelectionMode) {
        if !self.frame.contains(point.0, point.1) {
            return;
        }
        for renderer in &mut self.renderers {
            renderer.select_point(&self.frame, point.0, point.1, mode);
        }
    }
}
