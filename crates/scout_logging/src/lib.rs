#![deny(missing_docs)]
//! Shared logging utilities for the scout workspace.
//!
//! This crate provides the `scout_*` logging macros used across the codebase,
//! a per-thread poll tick that hosts stamp into their log lines, and a minimal
//! test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current host poll tick.
    static POLL_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the poll tick for the current thread.
/// Hosts call this once per delivered progress snapshot.
pub fn set_poll_tick(tick: u64) {
    POLL_TICK.with(|v| v.set(tick));
}

/// Retrieves the poll tick for the current thread.
/// Returns 0 if no snapshot has been delivered yet.
pub fn poll_tick() -> u64 {
    POLL_TICK.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the current poll tick.
#[macro_export]
macro_rules! scout_trace {
    ($($arg:tt)*) => {{
        log::trace!("[tick {}] {}", $crate::poll_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the current poll tick.
#[macro_export]
macro_rules! scout_debug {
    ($($arg:tt)*) => {{
        log::debug!("[tick {}] {}", $crate::poll_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message prefixed with the current poll tick.
#[macro_export]
macro_rules! scout_info {
    ($($arg:tt)*) => {{
        log::info!("[tick {}] {}", $crate::poll_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message prefixed with the current poll tick.
#[macro_export]
macro_rules! scout_warn {
    ($($arg:tt)*) => {{
        log::warn!("[tick {}] {}", $crate::poll_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message prefixed with the current poll tick.
#[macro_export]
macro_rules! scout_error {
    ($($arg:tt)*) => {{
        log::error!("[tick {}] {}", $crate::poll_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    // Debug level in debug builds so effect decisions show up in failing tests.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
