//! Domain model
//!
//! This module contains the static keyboard model:
//! - Key identifiers and classes
//! - Languages
//! - Glyph tables and key actions

pub mod key;
pub mod keymodel;
pub mod language;

pub use key::{ArrowMode, Direction, Glyph, KeyAction, KeyClass, KeyId, ModifierState, Side};
pub use keymodel::{action_for, class_of, glyph_for, key_for_char, Key, KeyOptions, Layout};
pub use language::Language;
