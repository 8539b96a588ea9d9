//! Integration layer
//!
//! Wires terminal events, the update function, command execution and
//! rendering into the application loop.

pub mod app_runner;
