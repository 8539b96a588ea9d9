use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// Identifier of a key on the layout, named after the DOM `code` values.
///
/// Declaration order is layout order, so `KeyId::iter()` walks the keyboard
/// row by row from the top-left corner.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum KeyId {
    Backquote,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Digit0,
    Minus,
    Equal,
    Backspace,
    Tab,
    KeyQ,
    KeyW,
    KeyE,
    KeyR,
    KeyT,
    KeyY,
    KeyU,
    KeyI,
    KeyO,
    KeyP,
    BracketLeft,
    BracketRight,
    Backslash,
    Delete,
    CapsLock,
    KeyA,
    KeyS,
    KeyD,
    KeyF,
    KeyG,
    KeyH,
    KeyJ,
    KeyK,
    KeyL,
    Semicolon,
    Quote,
    Enter,
    ShiftLeft,
    KeyZ,
    KeyX,
    KeyC,
    KeyV,
    KeyB,
    KeyN,
    KeyM,
    Comma,
    Period,
    Slash,
    ArrowUp,
    ShiftRight,
    ControlLeft,
    MetaLeft,
    AltLeft,
    Space,
    AltRight,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
    ControlRight,
}

impl KeyId {
    /// Stable slot of this key in per-key tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The unshifted character of a character key.
    pub fn base_char(self) -> Option<char> {
        let c = match self {
            KeyId::Backquote => '`',
            KeyId::Digit1 => '1',
            KeyId::Digit2 => '2',
            KeyId::Digit3 => '3',
            KeyId::Digit4 => '4',
            KeyId::Digit5 => '5',
            KeyId::Digit6 => '6',
            KeyId::Digit7 => '7',
            KeyId::Digit8 => '8',
            KeyId::Digit9 => '9',
            KeyId::Digit0 => '0',
            KeyId::Minus => '-',
            KeyId::Equal => '=',
            KeyId::KeyQ => 'q',
            KeyId::KeyW => 'w',
            KeyId::KeyE => 'e',
            KeyId::KeyR => 'r',
            KeyId::KeyT => 't',
            KeyId::KeyY => 'y',
            KeyId::KeyU => 'u',
            KeyId::KeyI => 'i',
            KeyId::KeyO => 'o',
            KeyId::KeyP => 'p',
            KeyId::BracketLeft => '[',
            KeyId::BracketRight => ']',
            KeyId::Backslash => '\\',
            KeyId::KeyA => 'a',
            KeyId::KeyS => 's',
            KeyId::KeyD => 'd',
            KeyId::KeyF => 'f',
            KeyId::KeyG => 'g',
            KeyId::KeyH => 'h',
            KeyId::KeyJ => 'j',
            KeyId::KeyK => 'k',
            KeyId::KeyL => 'l',
            KeyId::Semicolon => ';',
            KeyId::Quote => '\'',
            KeyId::KeyZ => 'z',
            KeyId::KeyX => 'x',
            KeyId::KeyC => 'c',
            KeyId::KeyV => 'v',
            KeyId::KeyB => 'b',
            KeyId::KeyN => 'n',
            KeyId::KeyM => 'm',
            KeyId::Comma => ',',
            KeyId::Period => '.',
            KeyId::Slash => '/',
            _ => return None,
        };
        Some(c)
    }

    /// Returns true for the nine digit keys that carry Lithuanian letters.
    pub fn is_localized(self) -> bool {
        matches!(
            self,
            KeyId::Digit1
                | KeyId::Digit2
                | KeyId::Digit3
                | KeyId::Digit4
                | KeyId::Digit5
                | KeyId::Digit6
                | KeyId::Digit7
                | KeyId::Digit8
                | KeyId::Digit9
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Semantic class of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyClass {
    Character,
    Backspace,
    Delete,
    Enter,
    Tab,
    CapsLock,
    Shift(Side),
    Ctrl(Side),
    Alt(Side),
    Meta,
    Space,
    Arrow(Direction),
}

impl KeyClass {
    pub fn is_character(self) -> bool {
        self == KeyClass::Character
    }
}

/// Held and latched modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifierState {
    pub shift_active: bool,
    pub caps_lock_active: bool,
}

impl ModifierState {
    /// Alphabetic glyphs are uppercase when either modifier is on.
    pub fn uppercase(&self) -> bool {
        self.shift_active || self.caps_lock_active
    }
}

/// What a key face shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Char(char),
    Label(&'static str),
}

impl Glyph {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Glyph::Char(c) => Some(*c),
            Glyph::Label(_) => None,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Char(c) => write!(f, "{c}"),
            Glyph::Label(label) => f.write_str(label),
        }
    }
}

/// How the arrow keys behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowMode {
    /// Move the caret.
    #[default]
    Move,
    /// Insert an arrow glyph into the text.
    Insert,
}

/// Semantic action produced by pressing a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Insert(String),
    Backspace,
    DeleteForward,
    Shift,
    ToggleCapsLock,
    MoveCaret(Direction),
    /// Ctrl or Alt: tracked while held, inserts nothing.
    Modifier,
    None,
}
