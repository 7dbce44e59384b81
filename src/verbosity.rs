// Global verbosity gate for console output
use std::sync::atomic::{AtomicU8, Ordering};

pub const MAX_VERBOSITY: u8 = 2;

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(0);

/// Levels above `MAX_VERBOSITY` are clamped.
pub fn set_verbosity_level(level: u8) {
    let level = level.min(MAX_VERBOSITY);
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > 0 {
        println!("📢 Verbosity level: {} (0=views only, 1=store activity, 2=full)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

/// CLI `-v` count wins over the configured level when given.
pub fn resolve_level(cli_count: u8, configured: u8) -> u8 {
    if cli_count > 0 { cli_count } else { configured }.min(MAX_VERBOSITY)
}

#[macro_export]
macro_rules! v_print {
    ($level:expr, $($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= $level {
            println!($($arg)*);
        }
    };
}

// Always shown
#[macro_export]
macro_rules! v_summary {
    ($($arg:tt)*) => { println!($($arg)*) };
}

#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => { $crate::v_print!(1, $($arg)*) };
}

#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => { $crate::v_print!(2, $($arg)*) };
}

// Errors go to stderr regardless of verbosity
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => { eprintln!($($arg)*) };
}
