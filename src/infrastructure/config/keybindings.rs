use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize};

use crate::action::Action;

/// Key events bound to actions, keyed by a normalized press event.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    /// Looks up the action bound to `key`, ignoring the event kind and
    /// lock state so repeats and releases match their press binding.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.0
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parses `"<ctrl-c>"` style notation into a key event.
pub fn parse_key_sequence(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`"))?;
    parse_key_event(inner)
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().unwrap_or_default();
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_keys() {
        assert_eq!(
            parse_key_event("a"),
            Ok(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty()))
        );
        assert_eq!(
            parse_key_event("esc"),
            Ok(KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()))
        );
        assert_eq!(
            parse_key_event("f2"),
            Ok(KeyEvent::new(KeyCode::F(2), KeyModifiers::empty()))
        );
    }

    #[test]
    fn test_with_modifiers() {
        assert_eq!(
            parse_key_event("ctrl-a"),
            Ok(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            parse_key_event("ctrl-alt-l"),
            Ok(KeyEvent::new(
                KeyCode::Char('l'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            ))
        );
    }

    #[test]
    fn test_sequence_requires_brackets() {
        assert_eq!(
            parse_key_sequence("<ctrl-c>"),
            Ok(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
        assert!(parse_key_sequence("ctrl-c").is_err());
        assert!(parse_key_sequence("<ctrl-nope>").is_err());
    }

    #[test]
    fn test_deserialize_and_lookup() -> Result<(), json5::Error> {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<ctrl-c>": "Quit", "<f2>": "ToggleCapsLock" }"#)?;
        let repeat = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::CAPS_LOCK,
        };
        assert_eq!(bindings.action_for(&repeat), Some(Action::Quit));
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
            Some(Action::ToggleCapsLock)
        );
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
        Ok(())
    }
}
