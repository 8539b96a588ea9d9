//! Infrastructure layer
//!
//! This module handles everything that touches the outside world:
//! - TUI foundation and terminal events
//! - CLI argument processing
//! - Configuration files
//! - Language persistence

pub mod cli;
pub mod config;
pub mod storage;
pub mod tui;
