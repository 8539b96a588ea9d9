//! Common utilities
//!
//! - Logging to a file in the data directory
//! - Panic handling that restores the terminal
//! - Data and config directory resolution

pub mod logging;
pub mod panic;
pub mod paths;

pub use logging::initialize_logging;
pub use panic::initialize_panic_handler;
pub use paths::{get_config_dir, get_data_dir, version};
