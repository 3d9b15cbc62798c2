//! Formatting macros over [`Logger`](crate::Logger)
//!
//! Each macro takes an optional `logger;` prefix. Without it the process-wide
//! logger from [`global`](crate::global) is used.
//!
//! ```rust
//! use debugger::{Config, Logger, debugf, output};
//!
//! let logger = Logger::new(Config::plain()).unwrap();
//! output!(logger; "listening on {}", 8080);
//! debugf!(logger; "only printed when verbose");
//! ```

/// Print a message regardless of verbosity (respects silent)
#[macro_export]
macro_rules! output {
    ($logger:expr; $($arg:tt)+) => {
        $logger.output(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().output(::core::format_args!($($arg)+))
    };
}

/// Print a message only when verbose; alias for [`debugf!`]
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($arg:tt)+) => {
        $logger.debug(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().debug(::core::format_args!($($arg)+))
    };
}

/// Print a message only when verbose
#[macro_export]
macro_rules! debugf {
    ($logger:expr; $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().debugf(::core::format_args!($($arg)+))
    };
}
