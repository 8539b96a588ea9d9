//! Reusable widgets
//!
//! Widgets draw borrowed state into a buffer and hold no state of their own.

pub mod keyboard;
pub mod text_box;
