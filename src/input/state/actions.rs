use crate::input::events::{Key, UiEvent};
use log::debug;

use super::BoxEditTool;

impl BoxEditTool {
    /// Processes a key release.
    ///
    /// Only handled while the tool is active and the pointer is inside the frame:
    /// - `Backspace` deletes the selected boxes of every renderer
    /// - `Escape` clears every renderer's selection (a gesture in progress keeps going)
    pub fn on_key_up(&mut self, key: &Key) {
        if !self.active || !self.pointer_in_frame {
            return;
        }
        match key {
            Key::Backspace => {
                for renderer in &mut self.renderers {
                    renderer.delete_selected();
                }
            }
            Key::Escape => {
                for renderer in &mut self.renderers {
                    renderer.source.clear_selection();
                }
            }
            Key::Other(_) => {}
        }
    }

    /// Pointer entered the plot frame.
    pub fn on_pointer_enter(&mut self) {
        self.pointer_in_frame = true;
    }

    /// Pointer left the plot frame.
    pub fn on_pointer_leave(&mut self) {
        self.pointer_in_frame = false;
    }

    /// Marks the tool as the plot's active tool.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Deactivates the tool and drops any gesture in progress.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.reset();
    }

    /// Dispatches a generic UI event to the matching handler.
    pub fn handle_event(&mut self, event: &UiEvent) {
        debug!("Event: {:?}", event);
        match event {
            UiEvent::Tap(ev) => self.on_tap(ev),
            UiEvent::DoubleTap(ev) => self.on_double_tap(ev),
            UiEvent::Move(ev) => self.on_move(ev),
            UiEvent::PanStart(ev) => self.on_pan_start(ev),
            UiEvent::Pan(ev) => self.on_pan(ev),
            UiEvent::PanEnd(ev) => self.on_pan_end(ev),
            UiEvent::KeyUp { key } => self.on_key_up(key),
            UiEvent::Enter => self.on_pointer_enter(),
            UiEvent::Leave => self.on_pointer_leave(),
            UiEvent::Activate => self.activate(),
            UiEvent::Deactivate => self.deactivate(),
        }
    }
}
