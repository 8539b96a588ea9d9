//! Translation of terminal events into domain messages.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::{
    action::Action,
    core::{msg::Msg, state::ui::KeyHitMap},
    domain::{class_of, key_for_char, KeyClass, KeyId},
    infrastructure::{config::KeyBindings, tui::Event},
};

/// What the translator needs to know besides the event itself
#[derive(Debug, Clone, Copy)]
pub struct TranslationContext<'a> {
    pub keybindings: &'a KeyBindings,
    pub hit_map: &'a KeyHitMap,
    pub reports_key_release: bool,
}

pub fn translate(event: &Event, ctx: &TranslationContext<'_>) -> Vec<Msg> {
    match event {
        Event::Key(key) => translate_key(key, ctx),
        Event::Mouse(mouse) => translate_mouse(mouse, ctx.hit_map),
        Event::Paste(text) => vec![Msg::Paste(text.clone())],
        Event::FocusGained => vec![Msg::Open],
        Event::FocusLost => vec![Msg::FocusLost],
        Event::Tick => vec![Msg::Tick],
        Event::Quit | Event::Closed => vec![Msg::Quit],
        Event::Error => vec![Msg::ShowStatus("Failed to read terminal event".to_owned())],
        Event::Init | Event::Render | Event::Resize(..) => vec![],
    }
}

fn action_msg(action: Action) -> Msg {
    match action {
        Action::Quit => Msg::Quit,
        Action::ToggleLanguage => Msg::ToggleLanguage,
        Action::ToggleCapsLock => Msg::ToggleCapsLock,
    }
}

/// Key on the layout for a terminal key event, with the shift it implies.
pub fn key_id_of(key: &KeyEvent) -> Option<(KeyId, bool)> {
    let id = match key.code {
        KeyCode::Char(c) => return key_for_char(c),
        KeyCode::BackTab => return Some((KeyId::Tab, true)),
        KeyCode::Backspace => KeyId::Backspace,
        KeyCode::Enter => KeyId::Enter,
        KeyCode::Tab => KeyId::Tab,
        KeyCode::Delete => KeyId::Delete,
        KeyCode::CapsLock => KeyId::CapsLock,
        KeyCode::Left => KeyId::ArrowLeft,
        KeyCode::Right => KeyId::ArrowRight,
        KeyCode::Up => KeyId::ArrowUp,
        KeyCode::Down => KeyId::ArrowDown,
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift => KeyId::ShiftLeft,
            ModifierKeyCode::RightShift => KeyId::ShiftRight,
            ModifierKeyCode::LeftControl => KeyId::ControlLeft,
            ModifierKeyCode::RightControl => KeyId::ControlRight,
            ModifierKeyCode::LeftAlt => KeyId::AltLeft,
            ModifierKeyCode::RightAlt | ModifierKeyCode::IsoLevel3Shift => KeyId::AltRight,
            ModifierKeyCode::LeftSuper
            | ModifierKeyCode::RightSuper
            | ModifierKeyCode::LeftMeta
            | ModifierKeyCode::RightMeta => KeyId::MetaLeft,
            _ => return None,
        },
        _ => return None,
    };
    Some((id, false))
}

fn translate_key(key: &KeyEvent, ctx: &TranslationContext<'_>) -> Vec<Msg> {
    if key.kind != KeyEventKind::Release {
        if let Some(action) = ctx.keybindings.action_for(key) {
            log::info!("Got action: {action}");
            return vec![action_msg(action)];
        }
    }

    let Some((id, implied_shift)) = key_id_of(key) else {
        if let KeyCode::Char(c) = key.code {
            log::debug!("No key on the layout for {c:?}, dropped");
        }
        return vec![];
    };
    if key.kind == KeyEventKind::Release {
        return vec![Msg::KeyUp(id)];
    }

    let shift = implied_shift || key.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let class = class_of(id);

    if ctx.reports_key_release {
        // Ctrl and Alt arrive as their own key events; the chord is tracked
        // from those. Only the typed character is suppressed here.
        if (ctrl || alt) && inserts_text(class) {
            return vec![];
        }
        return vec![Msg::KeyDown { key: id, shift }];
    }

    if ctrl && alt {
        return vec![Msg::ToggleLanguage];
    }
    if (ctrl || alt) && inserts_text(class) {
        return vec![];
    }
    vec![Msg::KeyTap { key: id, shift }]
}

fn inserts_text(class: KeyClass) -> bool {
    matches!(class, KeyClass::Character | KeyClass::Space)
}

fn translate_mouse(mouse: &MouseEvent, hit_map: &KeyHitMap) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hit_map
            .key_at(mouse.column, mouse.row)
            .map(Msg::PointerDown)
            .into_iter()
            .collect(),
        MouseEventKind::Up(MouseButton::Left) => vec![Msg::PointerUp],
        MouseEventKind::Drag(MouseButton::Left) => {
            vec![Msg::PointerMoved(hit_map.key_at(mouse.column, mouse.row))]
        }
        _ => vec![],
    }
}
