use strum::{EnumCount, IntoEnumIterator};

use crate::domain::{glyph_for, Glyph, KeyId, Language, ModifierState};

/// Visual slot of a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFace {
    pub glyph: Glyph,
    /// Held down by the mouse or the physical keyboard
    pub pressed: bool,
    /// Latched toggle (Caps Lock)
    pub latched: bool,
}

/// Per-key faces indexed by [`KeyId::index`], read by the keyboard widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFaces {
    faces: Vec<KeyFace>,
}

impl KeyFaces {
    pub fn new(language: Language, modifiers: ModifierState) -> Self {
        let mut faces = Vec::with_capacity(KeyId::COUNT);
        faces.extend(KeyId::iter().map(|key| KeyFace {
            glyph: glyph_for(key, language, modifiers),
            pressed: false,
            latched: false,
        }));
        Self { faces }
    }

    pub fn get(&self, key: KeyId) -> &KeyFace {
        &self.faces[key.index()]
    }

    pub fn glyph(&self, key: KeyId) -> Glyph {
        self.get(key).glyph
    }

    /// Recomputes the glyph of every key matching `filter`.
    pub fn refresh(
        &mut self,
        language: Language,
        modifiers: ModifierState,
        filter: impl Fn(KeyId) -> bool,
    ) {
        for key in KeyId::iter().filter(|k| filter(*k)) {
            self.faces[key.index()].glyph = glyph_for(key, language, modifiers);
        }
    }

    pub fn set_pressed(&mut self, key: KeyId, pressed: bool) {
        self.faces[key.index()].pressed = pressed;
    }

    pub fn set_latched(&mut self, key: KeyId, latched: bool) {
        self.faces[key.index()].latched = latched;
    }
}
