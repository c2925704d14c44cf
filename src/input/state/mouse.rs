use crate::config::SelectionMode;
use crate::input::events::PointerEvent;
use log::debug;

use super::{BoxEditTool, GestureState};

impl BoxEditTool {
    /// Processes a single tap.
    ///
    /// Selects the boxes under the pointer, combining them with the current
    /// selection according to the held modifiers. Ignored while a box is being
    /// drawn or dragged.
    pub fn on_tap(&mut self, ev: &PointerEvent) {
        if self.gesture != GestureState::Idle {
            return;
        }
        let mode = ev.modifiers.select_mode(self.config.default_select_mode);
        self.select_at(ev.point(), mode);
    }

    /// Processes a double tap.
    ///
    /// # Behavior
    /// - While idle: starts drawing at the tap, appends the tapped boxes to the
    ///   selection and adds a zero-size box there
    /// - While drawing: finishes the box at the tap and commits it
    /// - While dragging: ignored
    pub fn on_double_tap(&mut self, ev: &PointerEvent) {
        if !self.active {
            return;
        }
        match self.gesture {
            GestureState::Drawing { anchor } => {
                self.update_box(anchor, ev.point(), false);
                self.commit_target();
                self.gesture = GestureState::Idle;
                debug!("Double tap finished box at {:?}", ev.point());
            }
            GestureState::Idle => {
                self.begin_draw(ev);
                self.select_at(ev.point(), SelectionMode::Append);
                self.update_box(ev.point(), ev.point(), true);
            }
            GestureState::Dragging { .. } => {}
        }
    }

    /// Processes pointer motion without a button held.
    ///
    /// While drawing, the last box follows the pointer (live preview, no commit).
    pub fn on_move(&mut self, ev: &PointerEvent) {
        if let GestureState::Drawing { anchor } = self.gesture {
            self.update_box(anchor, ev.point(), false);
        }
    }

    /// Processes the start of a pan (drag) gesture.
    ///
    /// # Behavior
    /// - Shift held: starts drawing a new box from the pointer
    /// - Otherwise: appends the boxes under the pointer to the selection and
    ///   starts dragging the selection
    ///
    /// Ignored unless the tool is idle.
    pub fn on_pan_start(&mut self, ev: &PointerEvent) {
        if self.gesture != GestureState::Idle {
            debug!("Pan start ignored during {:?}", self.gesture);
            return;
        }
        if ev.modifiers.shift {
            self.begin_draw(ev);
            self.update_box(ev.point(), ev.point(), true);
        } else {
            self.select_at(ev.point(), SelectionMode::Append);
            self.gesture = GestureState::Dragging { anchor: ev.point() };
            debug!("Drag started at {:?}", ev.point());
        }
    }

    /// Processes pan motion.
    ///
    /// With Shift held the box being drawn follows the pointer; without it the
    /// selected boxes move by the delta since the previous pan event.
    pub fn on_pan(&mut self, ev: &PointerEvent) {
        match (ev.modifiers.shift, self.gesture) {
            (true, GestureState::Drawing { anchor }) => {
                self.update_box(anchor, ev.point(), false);
            }
            (false, GestureState::Dragging { anchor }) => {
                self.drag_step(anchor, ev.point());
                self.gesture = GestureState::Dragging { anchor: ev.point() };
            }
            _ => {}
        }
    }

    /// Processes the end of a pan gesture.
    ///
    /// Applies a final pan step, then either finishes the Shift-drawn box
    /// (committing the first renderer) or ends the drag, clearing and
    /// committing every renderer's source.
    pub fn on_pan_end(&mut self, ev: &PointerEvent) {
        self.on_pan(ev);

        if ev.modifiers.shift && matches!(self.gesture, GestureState::Drawing { .. }) {
            self.commit_target();
            self.gesture = GestureState::Idle;
            debug!("Draw finished at {:?}", ev.point());
            return;
        }

        if matches!(self.gesture, GestureState::Dragging { .. }) {
            self.gesture = GestureState::Idle;
            debug!("Drag finished at {:?}", ev.point());
        }
        for renderer in &mut self.renderers {
            renderer.source.clear_selection();
            renderer.source.commit();
        }
    }

    fn begin_draw(&mut self, ev: &PointerEvent) {
        self.gesture = GestureState::Drawing { anchor: ev.point() };
        debug!("Draw started at {:?}", ev.point());
    }
}
