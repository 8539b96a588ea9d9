//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless screen components
//! - Reusable widgets (keyboard, text box)

pub mod components;
pub mod widgets;
