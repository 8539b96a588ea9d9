use crate::{
    core::{cmd::Cmd, msg::Msg, state::AppState},
    domain::{KeyAction, KeyId},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    let mut commands = vec![];
    match msg {
        Msg::Open => state.open_editor(),

        Msg::FocusLost => {
            state.text_box.set_focused(false);
            state.ui.pointer_key = None;
            state.ui.flashed_keys.clear();
            state.editor.release_all();
        }

        Msg::KeyDown { key, shift } => {
            press_key(&mut state, key, shift, &mut commands);
        }

        Msg::KeyUp(key) => state.editor.release(key),

        Msg::KeyTap { key, shift } => {
            press_key(&mut state, key, shift, &mut commands);
            if !state.ui.flashed_keys.contains(&key) {
                state.ui.flashed_keys.push(key);
            }
        }

        Msg::PointerDown(key) => {
            if let Some(previous) = state.ui.pointer_key.take() {
                state.editor.release(previous);
            }
            state.ui.pointer_key = Some(key);
            press_key(&mut state, key, false, &mut commands);
        }

        Msg::PointerUp => {
            if let Some(key) = state.ui.pointer_key.take() {
                state.editor.release(key);
            }
        }

        Msg::PointerMoved(under) => {
            if let Some(key) = state.ui.pointer_key {
                if under != Some(key) {
                    state.ui.pointer_key = None;
                    state.editor.release(key);
                }
            }
        }

        Msg::Paste(text) => state.editor.insert_at(&mut state.text_box, &text),

        Msg::ToggleLanguage => {
            let language = state.editor.toggle_language();
            commands.push(Cmd::PersistLanguage(language));
        }

        Msg::ToggleCapsLock => state.editor.toggle_caps_lock(),

        Msg::Tick => {
            state.system.tick();
            for key in std::mem::take(&mut state.ui.flashed_keys) {
                if state.ui.pointer_key != Some(key) {
                    state.editor.release(key);
                }
            }
        }

        Msg::ShowStatus(message) => state.system.set_status_message(message),

        Msg::Quit => state.system.quit(),
    }

    (state, commands)
}

/// Presses `key` and applies its action. Held modifiers and Caps Lock act
/// only on the initial press, not on auto-repeat.
fn press_key(state: &mut AppState, key: KeyId, shift: bool, commands: &mut Vec<Cmd>) {
    let repeated = state.editor.is_pressed(key);
    if state.editor.press(key) {
        let language = state.editor.toggle_language();
        commands.push(Cmd::PersistLanguage(language));
    }

    let action = state.editor.action_for(key, shift);
    if repeated && matches!(action, KeyAction::Shift | KeyAction::ToggleCapsLock) {
        return;
    }
    state.editor.apply(&action, &mut state.text_box);
}
