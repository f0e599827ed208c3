//! Keyboard shortcut resolution.
//!
//! | Keys | Action |
//! |---|---|
//! | Ctrl/Cmd+Z | undo |
//! | Ctrl/Cmd+Y, Ctrl/Cmd+Shift+Z | redo |
//! | V Z W F L | select / zone / wall / flow / label tool |
//! | Escape | abandon the shape being drawn |
//! | Enter | finish the shape being drawn |
//! | Delete, Backspace | delete the selection |
//!
//! Nothing resolves while focus is in a text input, so typing into a
//! property field never edits the canvas.

use crate::canvas::Tool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Delete,
    Backspace,
}

/// A key press with modifier state and focus context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
    pub shift: bool,
    pub in_text_input: bool,
}

impl KeyInput {
    /// Unmodified key press on the canvas.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
            in_text_input: false,
        }
    }

    /// Ctrl (or Cmd) chord.
    pub fn command(key: Key) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    pub fn with_shift(self) -> Self {
        Self { shift: true, ..self }
    }

    pub fn in_text_input(self) -> Self {
        Self {
            in_text_input: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Undo,
    Redo,
    SelectTool(Tool),
    CancelShape,
    FinishShape,
    DeleteSelection,
}

/// Maps a key press to an editor action.
pub fn resolve(input: &KeyInput) -> Option<EditorAction> {
    if input.in_text_input {
        return None;
    }

    if input.ctrl || input.meta {
        return match input.key {
            Key::Char(c) => match c.to_ascii_lowercase() {
                'z' if input.shift => Some(EditorAction::Redo),
                'z' => Some(EditorAction::Undo),
                'y' => Some(EditorAction::Redo),
                _ => None,
            },
            _ => None,
        };
    }

    match input.key {
        Key::Char(c) => Tool::from_shortcut(c).map(EditorAction::SelectTool),
        Key::Escape => Some(EditorAction::CancelShape),
        Key::Enter => Some(EditorAction::FinishShape),
        Key::Delete | Key::Backspace => Some(EditorAction::DeleteSelection),
    }
}
