//! Static keyboard data: layout rows, glyph tables and key classification.
//!
//! Everything here is a pure lookup. The classification of each key is
//! computed once when the [`Layout`] is built and stored on the [`Key`].

use std::ops::Range;

use lazy_static::lazy_static;
use strum::IntoEnumIterator;

use super::{
    key::{ArrowMode, Direction, Glyph, KeyAction, KeyClass, KeyId, ModifierState, Side},
    language::Language,
};

/// Letters placed on digit keys 1-9 by the Lithuanian layout.
const LT_DIGIT_ROW: [char; 9] = ['ą', 'č', 'ę', 'ė', 'į', 'š', 'ų', 'ū', 'ž'];

/// Keys that end a row.
const ROW_ENDS: [KeyId; 5] = [
    KeyId::Backspace,
    KeyId::Delete,
    KeyId::Enter,
    KeyId::ShiftRight,
    KeyId::ControlRight,
];

pub const DEFAULT_TAB_WIDTH: usize = 3;

lazy_static! {
    static ref STANDARD_LAYOUT: Layout = Layout::build();
}

/// A key placed on the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub id: KeyId,
    pub class: KeyClass,
    pub row: usize,
}

/// The fixed ordered set of keys grouped into rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    keys: Vec<Key>,
    rows: Vec<Range<usize>>,
}

impl Layout {
    /// The single layout shared by both languages.
    pub fn standard() -> &'static Layout {
        &STANDARD_LAYOUT
    }

    fn build() -> Self {
        let mut keys = Vec::new();
        let mut rows = Vec::new();
        let mut row_start = 0;
        for id in KeyId::iter() {
            keys.push(Key {
                id,
                class: class_of(id),
                row: rows.len(),
            });
            if ROW_ENDS.contains(&id) {
                rows.push(row_start..keys.len());
                row_start = keys.len();
            }
        }
        Self { keys, rows }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Looks up a key by id in O(1).
    pub fn key(&self, id: KeyId) -> &Key {
        &self.keys[id.index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Key]> + '_ {
        self.rows.iter().map(|range| &self.keys[range.clone()])
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Options that change what a key press produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOptions {
    pub arrow_mode: ArrowMode,
    pub tab_width: usize,
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            arrow_mode: ArrowMode::default(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

pub fn class_of(key: KeyId) -> KeyClass {
    match key {
        KeyId::Backspace => KeyClass::Backspace,
        KeyId::Delete => KeyClass::Delete,
        KeyId::Enter => KeyClass::Enter,
        KeyId::Tab => KeyClass::Tab,
        KeyId::CapsLock => KeyClass::CapsLock,
        KeyId::ShiftLeft => KeyClass::Shift(Side::Left),
        KeyId::ShiftRight => KeyClass::Shift(Side::Right),
        KeyId::ControlLeft => KeyClass::Ctrl(Side::Left),
        KeyId::ControlRight => KeyClass::Ctrl(Side::Right),
        KeyId::AltLeft => KeyClass::Alt(Side::Left),
        KeyId::AltRight => KeyClass::Alt(Side::Right),
        KeyId::MetaLeft => KeyClass::Meta,
        KeyId::Space => KeyClass::Space,
        KeyId::ArrowUp => KeyClass::Arrow(Direction::Up),
        KeyId::ArrowDown => KeyClass::Arrow(Direction::Down),
        KeyId::ArrowLeft => KeyClass::Arrow(Direction::Left),
        KeyId::ArrowRight => KeyClass::Arrow(Direction::Right),
        _ => KeyClass::Character,
    }
}

/// Shifted counterpart of a digit or punctuation character.
fn shifted(c: char) -> Option<char> {
    let s = match c {
        '`' => '~',
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        _ => return None,
    };
    Some(s)
}

fn localized(key: KeyId, base: char, language: Language) -> char {
    match language {
        Language::Lt if key.is_localized() => base
            .to_digit(10)
            .and_then(|d| LT_DIGIT_ROW.get((d as usize).wrapping_sub(1)))
            .copied()
            .unwrap_or(base),
        _ => base,
    }
}

fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

fn label(class: KeyClass) -> &'static str {
    match class {
        KeyClass::Character => "",
        KeyClass::Backspace => "Backspace",
        KeyClass::Delete => "DEL",
        KeyClass::Enter => "Enter",
        KeyClass::Tab => "Tab",
        KeyClass::CapsLock => "CapsLock",
        KeyClass::Shift(_) => "Shift",
        KeyClass::Ctrl(_) => "Ctrl",
        KeyClass::Alt(_) => "Alt",
        KeyClass::Meta => "Win",
        KeyClass::Space => "",
        KeyClass::Arrow(Direction::Up) => "▲",
        KeyClass::Arrow(Direction::Down) => "▼",
        KeyClass::Arrow(Direction::Left) => "◀",
        KeyClass::Arrow(Direction::Right) => "▶",
    }
}

/// Glyph displayed on `key` for the given language and modifiers.
///
/// With shift held, digit and punctuation keys show their fixed shifted
/// symbol regardless of language. Otherwise the nine localized digit keys
/// show the Lithuanian letter under [`Language::Lt`]. Alphabetic glyphs
/// (including those letters) are uppercase when shift or caps lock is on.
pub fn glyph_for(key: KeyId, language: Language, modifiers: ModifierState) -> Glyph {
    let Some(base) = key.base_char() else {
        return Glyph::Label(label(class_of(key)));
    };
    if modifiers.shift_active {
        if let Some(symbol) = shifted(base) {
            return Glyph::Char(symbol);
        }
    }
    let c = localized(key, base, language);
    if c.is_alphabetic() && modifiers.uppercase() {
        Glyph::Char(to_upper(c))
    } else {
        Glyph::Char(c)
    }
}

/// Maps a key press to the action it performs.
pub fn action_for(
    key: KeyId,
    language: Language,
    modifiers: ModifierState,
    options: KeyOptions,
) -> KeyAction {
    match class_of(key) {
        KeyClass::Character => match glyph_for(key, language, modifiers).as_char() {
            Some(c) => KeyAction::Insert(c.to_string()),
            None => KeyAction::None,
        },
        KeyClass::Backspace => KeyAction::Backspace,
        KeyClass::Delete => KeyAction::DeleteForward,
        KeyClass::Enter => KeyAction::Insert("\n".to_owned()),
        KeyClass::Tab => KeyAction::Insert(" ".repeat(options.tab_width)),
        KeyClass::Space => KeyAction::Insert(" ".to_owned()),
        KeyClass::CapsLock => KeyAction::ToggleCapsLock,
        KeyClass::Shift(_) => KeyAction::Shift,
        KeyClass::Ctrl(_) | KeyClass::Alt(_) => KeyAction::Modifier,
        KeyClass::Meta => KeyAction::None,
        KeyClass::Arrow(direction) => match options.arrow_mode {
            ArrowMode::Move => KeyAction::MoveCaret(direction),
            ArrowMode::Insert => KeyAction::Insert(arrow_glyph(direction).to_string()),
        },
    }
}

fn arrow_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '↟',
        Direction::Left => '↞',
        Direction::Down => '↡',
        Direction::Right => '↠',
    }
}

/// Resolves a character typed on a physical keyboard back to its key.
///
/// The flag is true when the character implies that shift was held.
/// Lithuanian letters resolve to their digit key unshifted.
pub fn key_for_char(c: char) -> Option<(KeyId, bool)> {
    if c == ' ' {
        return Some((KeyId::Space, false));
    }
    if let Some(pos) = LT_DIGIT_ROW
        .iter()
        .position(|&lt| lt == c || to_upper(lt) == c)
    {
        return KeyId::iter()
            .filter(|k| k.is_localized())
            .nth(pos)
            .map(|k| (k, false));
    }
    let lower = c.to_lowercase().next().unwrap_or(c);
    KeyId::iter().find_map(|key| {
        let base = key.base_char()?;
        if base == c {
            Some((key, false))
        } else if shifted(base) == Some(c) {
            Some((key, true))
        } else if base.is_alphabetic() && base == lower {
            Some((key, c.is_uppercase()))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn mods(shift: bool, caps: bool) -> ModifierState {
        ModifierState {
            shift_active: shift,
            caps_lock_active: caps,
        }
    }

    #[test]
    fn test_layout_rows() {
        let layout = Layout::standard();
        let lens: Vec<usize> = layout.rows().map(|row| row.len()).collect();
        assert_eq!(lens, vec![14, 15, 13, 13, 9]);
        assert_eq!(layout.keys().len(), 64);
        assert_eq!(layout.key(KeyId::Enter).row, 2);
        assert_eq!(layout.key(KeyId::ShiftRight).class, KeyClass::Shift(Side::Right));
    }

    #[rstest]
    #[case(KeyId::Digit2, Language::En, false, '2')]
    #[case(KeyId::Digit2, Language::Lt, false, 'č')]
    #[case(KeyId::Digit1, Language::En, true, '!')]
    #[case(KeyId::Digit1, Language::Lt, true, '!')]
    #[case(KeyId::Digit9, Language::Lt, true, '(')]
    #[case(KeyId::Digit0, Language::Lt, false, '0')]
    #[case(KeyId::Minus, Language::En, true, '_')]
    #[case(KeyId::Semicolon, Language::Lt, true, ':')]
    #[case(KeyId::Quote, Language::En, true, '"')]
    #[case(KeyId::KeyQ, Language::En, false, 'q')]
    #[case(KeyId::KeyQ, Language::Lt, true, 'Q')]
    fn test_glyph_for(
        #[case] key: KeyId,
        #[case] language: Language,
        #[case] shift: bool,
        #[case] expected: char,
    ) {
        assert_eq!(
            glyph_for(key, language, mods(shift, false)),
            Glyph::Char(expected)
        );
    }

    #[test]
    fn test_caps_lock_only_changes_letters() {
        assert_eq!(
            glyph_for(KeyId::KeyA, Language::En, mods(false, true)),
            Glyph::Char('A')
        );
        assert_eq!(
            glyph_for(KeyId::Digit5, Language::En, mods(false, true)),
            Glyph::Char('5')
        );
        assert_eq!(
            glyph_for(KeyId::Digit5, Language::Lt, mods(false, true)),
            Glyph::Char('Į')
        );
        assert_eq!(
            glyph_for(KeyId::Slash, Language::En, mods(false, true)),
            Glyph::Char('/')
        );
    }

    #[test]
    fn test_shift_and_caps_together_stay_uppercase() {
        assert_eq!(
            glyph_for(KeyId::KeyM, Language::En, mods(true, true)),
            Glyph::Char('M')
        );
    }

    #[test]
    fn test_control_keys_have_labels() {
        assert_eq!(
            glyph_for(KeyId::Delete, Language::En, mods(true, true)),
            Glyph::Label("DEL")
        );
        assert_eq!(
            glyph_for(KeyId::Space, Language::Lt, ModifierState::default()).to_string(),
            ""
        );
    }

    #[test]
    fn test_action_for_control_keys() {
        let m = ModifierState::default();
        let opts = KeyOptions::default();
        assert_eq!(
            action_for(KeyId::Tab, Language::En, m, opts),
            KeyAction::Insert("   ".into())
        );
        assert_eq!(
            action_for(KeyId::Enter, Language::En, m, opts),
            KeyAction::Insert("\n".into())
        );
        assert_eq!(
            action_for(KeyId::ArrowLeft, Language::En, m, opts),
            KeyAction::MoveCaret(Direction::Left)
        );
        assert_eq!(
            action_for(KeyId::AltRight, Language::En, m, opts),
            KeyAction::Modifier
        );
        assert_eq!(action_for(KeyId::MetaLeft, Language::En, m, opts), KeyAction::None);
    }

    #[test]
    fn test_action_for_arrow_insert_mode() {
        let opts = KeyOptions {
            arrow_mode: ArrowMode::Insert,
            tab_width: 4,
        };
        let m = ModifierState::default();
        assert_eq!(
            action_for(KeyId::ArrowUp, Language::En, m, opts),
            KeyAction::Insert("↟".into())
        );
        assert_eq!(
            action_for(KeyId::Tab, Language::En, m, opts),
            KeyAction::Insert("    ".into())
        );
    }

    #[rstest]
    #[case('a', Some((KeyId::KeyA, false)))]
    #[case('A', Some((KeyId::KeyA, true)))]
    #[case('!', Some((KeyId::Digit1, true)))]
    #[case('1', Some((KeyId::Digit1, false)))]
    #[case('š', Some((KeyId::Digit6, false)))]
    #[case('Ž', Some((KeyId::Digit9, false)))]
    #[case('?', Some((KeyId::Slash, true)))]
    #[case(' ', Some((KeyId::Space, false)))]
    #[case('é', None)]
    fn test_key_for_char(#[case] c: char, #[case] expected: Option<(KeyId, bool)>) {
        assert_eq!(key_for_char(c), expected);
    }
}
