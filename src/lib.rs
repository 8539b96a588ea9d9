//! # vkeyboard - On-screen keyboard for the terminal
//!
//! An on-screen keyboard with English and Lithuanian layouts, Shift and
//! Caps Lock, editing a text box through a caret. Built with Rust and
//! Ratatui around an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Domain** (`domain`): the static key model, i.e. which glyph and
//!   action a key produces for a language and modifier state
//! - **State** (`core::state`): the editor, its buffer and caret, and the
//!   text box it writes into
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): the function that applies a message
//! - **Command** (`core::cmd`): side effects, i.e. persisting the language
//! - **View** (`presentation`): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use vkeyboard::core::{msg::Msg, state::AppState, update::update};
//! use vkeyboard::domain::{KeyId, KeyOptions, Language};
//!
//! let mut state = AppState::new("", Language::Lt, KeyOptions::default());
//! state.open_editor();
//!
//! let (state, _) = update(Msg::PointerDown(KeyId::Digit1), state);
//! let (state, _) = update(Msg::PointerUp, state);
//! assert_eq!(state.editor.text(), "ą");
//!
//! let (state, commands) = update(Msg::ToggleLanguage, state);
//! assert_eq!(state.editor.language(), Language::En);
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Keys, layouts and languages
//! - [`core`] - State, messages, update and commands
//! - [`infrastructure`] - Terminal, CLI, configuration and storage
//! - [`presentation`] - Components and widgets
//! - [`integration`] - The application runner
//! - [`utils`] - Logging, panic handling and paths

pub mod action;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{msg::Msg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
