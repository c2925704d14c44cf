//! Keyboard modifier state.

use crate::config::SelectionMode;
use serde::{Deserialize, Serialize};

/// Modifier keys held while a pointer event happened.
///
/// Shift switches a pan gesture from dragging boxes to drawing a new one, and
/// Shift/Ctrl pick how a tap combines with the existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Determines how a tap selection combines with the current selection.
    ///
    /// # Priority
    /// 1. Shift+Ctrl → Subtract
    /// 2. Ctrl → Intersect
    /// 3. Shift → Append
    /// 4. None → `default`
    pub fn select_mode(&self, default: SelectionMode) -> SelectionMode {
        match (self.shift, self.ctrl) {
            (true, true) => SelectionMode::Subtract,
            (false, true) => SelectionMode::Intersect,
            (true, false) => SelectionMode::Append,
            (false, false) => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_mode_follows_modifiers() {
        let mut mods = Modifiers::new();
        assert_eq!(mods.select_mode(SelectionMode::Replace), SelectionMode::Replace);
        assert_eq!(mods.select_mode(SelectionMode::Append), SelectionMode::Append);

        mods.shift = true;
        assert_eq!(mods.select_mode(SelectionMode::Replace), SelectionMode::Append);

        mods.ctrl = true;
        assert_eq!(mods.select_mode(SelectionMode::Replace), SelectionMode::Subtract);

        mods.shift = false;
        assert_eq!(mods.select_mode(SelectionMode::Replace), SelectionMode::Intersect);
    }
}
