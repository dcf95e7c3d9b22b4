// Conditional logging macros - only active in debug builds.
// Release builds still reference the arguments, so nothing becomes unused.

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

use log::LevelFilter;
use std::io::Write;

/// Maps repeated `-v` flags to a level; warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs to stderr with local timestamps. `RUST_LOG` overrides the level.
pub fn init_logging(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
