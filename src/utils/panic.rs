//! Panic handling
//!
//! A panic must leave the terminal usable: the hook restores it before any
//! report is printed.

use std::panic::{self, PanicHookInfo};
use std::process;

use better_panic::Settings;
use color_eyre::config::{HookBuilder, PanicHook};
use color_eyre::eyre::Result;
use tracing::error;

use crate::infrastructure::tui::real;

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section("This is a bug. Please report it along with the log file.")
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    panic::set_hook(Box::new(move |panic_info| {
        if let Err(r) = real::restore() {
            error!("Unable to restore terminal: {r:?}");
        }

        #[cfg(not(debug_assertions))]
        print_human_report(&panic_hook, panic_info);

        let report = panic_hook.panic_report(panic_info).to_string();
        log::error!("Error: {}", strip_ansi_escapes::strip_str(report));

        #[cfg(debug_assertions)]
        print_debug_trace(panic_info);

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// Release builds write a crash dump and a short apology to stderr.
#[cfg_attr(debug_assertions, allow(dead_code))]
fn print_human_report(panic_hook: &PanicHook, panic_info: &PanicHookInfo<'_>) {
    use human_panic::{handle_dump, print_msg, Metadata};

    let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "));
    let file_path = handle_dump(&meta, panic_info);
    if let Err(e) = print_msg(file_path, &meta) {
        eprintln!("{} crashed and could not print a report: {e}", env!("CARGO_PKG_NAME"));
    }
    eprintln!("{}", panic_hook.panic_report(panic_info));
}

/// Debug builds print the full backtrace with source lines.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
fn print_debug_trace(panic_info: &PanicHookInfo<'_>) {
    Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(panic_info);
}
