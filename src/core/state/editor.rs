//! The editing engine behind the on-screen keyboard.
//!
//! [`EditorState`] owns the text buffer, the modifier and language state,
//! the set of held keys and the key faces. Every mutation is synchronous:
//! the visible text box and the output callback are updated before the
//! operation returns.

pub mod buffer;
pub mod key_faces;

use std::collections::HashSet;
use std::fmt;

use crate::domain::{
    action_for, Direction, KeyAction, KeyClass, KeyId, KeyOptions, Language, Layout,
    ModifierState,
};

use buffer::{CursorPosition, EditorBuffer};
use key_faces::KeyFaces;

use super::text_box::TextSurface;

/// Output callback receiving the full text after every mutation.
pub type OnInput = Box<dyn FnMut(&str) + Send>;

pub struct EditorState {
    buffer: EditorBuffer,
    modifiers: ModifierState,
    language: Language,
    options: KeyOptions,
    pressed: HashSet<KeyId>,
    chord_fired: bool,
    faces: KeyFaces,
    on_input: Option<OnInput>,
}

impl fmt::Debug for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorState")
            .field("buffer", &self.buffer)
            .field("modifiers", &self.modifiers)
            .field("language", &self.language)
            .field("options", &self.options)
            .field("pressed", &self.pressed)
            .field("on_input", &self.on_input.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Language::default(), KeyOptions::default())
    }
}

impl EditorState {
    pub fn new(language: Language, options: KeyOptions) -> Self {
        let modifiers = ModifierState::default();
        Self {
            buffer: EditorBuffer::default(),
            modifiers,
            language,
            options,
            pressed: HashSet::new(),
            chord_fired: false,
            faces: KeyFaces::new(language, modifiers),
            on_input: None,
        }
    }

    /// Seeds the buffer with the text box's current value and stores the
    /// callback that receives future updates.
    pub fn open(&mut self, initial_value: impl Into<String>, on_input: OnInput) {
        self.buffer = EditorBuffer::new(initial_value);
        self.on_input = Some(on_input);
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn faces(&self) -> &KeyFaces {
        &self.faces
    }

    pub fn is_pressed(&self, key: KeyId) -> bool {
        self.pressed.contains(&key)
    }

    /// Reads the live caret from the text box, clamped to the buffer.
    fn sample_caret(&mut self, surface: &dyn TextSurface) -> usize {
        self.buffer.set_caret(surface.selection_start())
    }

    /// Mirrors the buffer into the text box and notifies the callback.
    fn publish(&mut self, surface: &mut dyn TextSurface) {
        let caret = self.buffer.caret();
        surface.set_value(self.buffer.text());
        surface.set_selection(caret, caret);
        if let Some(on_input) = self.on_input.as_mut() {
            on_input(self.buffer.text());
        }
    }

    /// Inserts `text` at the caret and advances the caret past it.
    pub fn insert_at(&mut self, surface: &mut dyn TextSurface, text: &str) {
        self.sample_caret(surface);
        self.buffer.insert(text);
        self.publish(surface);
    }

    /// Removes the character before the caret. At position 0 this only
    /// pins the caret to 0.
    pub fn backspace(&mut self, surface: &mut dyn TextSurface) {
        self.sample_caret(surface);
        if self.buffer.remove_before() {
            self.publish(surface);
        } else {
            surface.set_selection(0, 0);
        }
    }

    /// Removes the character at the caret; no-op at the end of the text.
    pub fn delete_forward(&mut self, surface: &mut dyn TextSurface) {
        self.sample_caret(surface);
        if self.buffer.remove_at() {
            self.publish(surface);
        }
    }

    /// Moves the caret without touching the text.
    pub fn move_caret(&mut self, surface: &mut dyn TextSurface, direction: Direction) {
        let caret = self.sample_caret(surface);
        let target = match direction {
            Direction::Left => caret.saturating_sub(1),
            Direction::Right => caret + 1,
            Direction::Up => {
                let position = self.buffer.position_of(caret);
                if position.line == 0 {
                    0
                } else {
                    self.buffer.index_of(CursorPosition {
                        line: position.line - 1,
                        column: position.column,
                    })
                }
            }
            Direction::Down => {
                let position = self.buffer.position_of(caret);
                self.buffer.index_of(CursorPosition {
                    line: position.line + 1,
                    column: position.column,
                })
            }
        };
        let caret = self.buffer.set_caret(target);
        surface.set_selection(caret, caret);
    }

    pub fn toggle_caps_lock(&mut self) {
        self.modifiers.caps_lock_active = !self.modifiers.caps_lock_active;
        self.faces
            .set_latched(KeyId::CapsLock, self.modifiers.caps_lock_active);
        self.refresh_character_keys();
        log::debug!("caps lock: {}", self.modifiers.caps_lock_active);
    }

    /// Sets shift unless caps lock is latched.
    pub fn set_shift(&mut self, active: bool) {
        if self.modifiers.caps_lock_active || self.modifiers.shift_active == active {
            return;
        }
        self.modifiers.shift_active = active;
        self.refresh_character_keys();
    }

    /// Flips the language and returns the new one for persisting.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.faces
            .refresh(self.language, self.modifiers, KeyId::is_localized);
        log::info!("language: {}", self.language);
        self.language
    }

    fn refresh_character_keys(&mut self) {
        let layout = Layout::standard();
        self.faces.refresh(self.language, self.modifiers, |key| {
            layout.key(key).class.is_character()
        });
    }

    fn shift_held(&self) -> bool {
        self.pressed
            .iter()
            .any(|key| matches!(Layout::standard().key(*key).class, KeyClass::Shift(_)))
    }

    fn chord_held(&self) -> bool {
        let layout = Layout::standard();
        let held = |pred: fn(KeyClass) -> bool| {
            self.pressed
                .iter()
                .any(|key| pred(layout.key(*key).class))
        };
        held(|c| matches!(c, KeyClass::Ctrl(_))) && held(|c| matches!(c, KeyClass::Alt(_)))
    }

    /// Action for `key` under the current state. `extra_shift` reports a
    /// shift seen on the input event itself.
    pub fn action_for(&self, key: KeyId, extra_shift: bool) -> KeyAction {
        let mut modifiers = self.modifiers;
        modifiers.shift_active |= extra_shift;
        action_for(key, self.language, modifiers, self.options)
    }

    /// Marks `key` as held. Returns true when this press completes a
    /// Ctrl + Alt chord, which fires once until one of them is released.
    pub fn press(&mut self, key: KeyId) -> bool {
        self.pressed.insert(key);
        self.faces.set_pressed(key, true);
        if !self.chord_fired && self.chord_held() {
            self.chord_fired = true;
            return true;
        }
        false
    }

    /// Releases `key`. Letting go of the last shift key clears shift even
    /// while caps lock is latched; only shift presses are suppressed.
    pub fn release(&mut self, key: KeyId) {
        self.pressed.remove(&key);
        self.faces.set_pressed(key, false);
        if !self.chord_held() {
            self.chord_fired = false;
        }
        let is_shift = matches!(Layout::standard().key(key).class, KeyClass::Shift(_));
        if is_shift && self.modifiers.shift_active && !self.shift_held() {
            self.modifiers.shift_active = false;
            self.refresh_character_keys();
        }
    }

    /// Releases every held key.
    pub fn release_all(&mut self) {
        let held: Vec<KeyId> = self.pressed.iter().copied().collect();
        for key in held {
            self.release(key);
        }
    }

    /// Applies a key action to the buffer or the modifier state.
    pub fn apply(&mut self, action: &KeyAction, surface: &mut dyn TextSurface) {
        match action {
            KeyAction::Insert(text) => self.insert_at(surface, text),
            KeyAction::Backspace => self.backspace(surface),
            KeyAction::DeleteForward => self.delete_forward(surface),
            KeyAction::Shift => self.set_shift(true),
            KeyAction::ToggleCapsLock => self.toggle_caps_lock(),
            KeyAction::MoveCaret(direction) => self.move_caret(surface, *direction),
            KeyAction::Modifier | KeyAction::None => {}
        }
    }
}
