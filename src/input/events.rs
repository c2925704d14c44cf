//! Generic UI event types delivered to the edit tool.

use super::modifiers::Modifiers;
use serde::{Deserialize, Serialize};

/// Generic key representation.
///
/// Hosts map their native key identifiers onto these values; only the keys
/// the edit tool reacts to get their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    /// Escape key (clear selection)
    Escape,
    /// Backspace key (delete selection)
    Backspace,
    /// Any other key, by name
    Other(String),
}

impl Key {
    /// Maps a DOM-style key name (`"Escape"`, `"Backspace"`, ...) to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Backspace" => Key::Backspace,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Escape => "Escape",
            Key::Backspace => "Backspace",
            Key::Other(name) => name,
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::from_name(&name)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.name().to_string()
    }
}

/// A pointer event in screen coordinates with the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub sx: f64,
    pub sy: f64,
    #[serde(flatten)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            modifiers: Modifiers::new(),
        }
    }

    /// Same position with Shift held.
    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Same position with Ctrl held.
    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn point(&self) -> (f64, f64) {
        (self.sx, self.sy)
    }
}

/// Every event the edit tool understands, as delivered by the host (or a replay script).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Tap(PointerEvent),
    DoubleTap(PointerEvent),
    Move(PointerEvent),
    PanStart(PointerEvent),
    Pan(PointerEvent),
    PanEnd(PointerEvent),
    KeyUp { key: Key },
    /// Pointer entered the plot frame
    Enter,
    /// Pointer left the plot frame
    Leave,
    Activate,
    Deactivate,
}
