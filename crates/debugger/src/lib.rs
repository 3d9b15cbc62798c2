//! # debugger
//!
//! Minimal debug output: a silent switch, a verbose switch for `debug`
//! messages, optional timestamp prefixes and a printer for nested error
//! chains that doubles as an exit code.
//!
//! ## Quick Start
//!
//! ```rust
//! use debugger::prelude::*;
//!
//! let logger = Logger::new(Config::verbose()).unwrap();
//! output!(logger; "starting");
//! debugf!(logger; "value={}", 5);
//!
//! let err = std::io::Error::other("disk full");
//! let code = logger.dump_error_stack(Some(&err));
//! assert_eq!(code, 1);
//! ```
//!
//! A process-wide logger configured from `DEBUGGER_*` environment variables
//! is available through [`global`] and the macros without a `logger;` prefix.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod chain;
mod config;
mod core;
mod format;
mod logger;
mod macros;
mod writer;

use std::error::Error;
use std::sync::OnceLock;

// Public API
pub use crate::core::{DebugError, DebugResult};
pub use chain::{Layers, depth, layers};
pub use config::{Config, ENV_SILENT, ENV_TIMESTAMP_FORMAT, ENV_TIMESTAMPS, ENV_VERBOSE};
pub use format::{DEFAULT_TIMESTAMP_FORMAT, TimestampFormat};
pub use logger::{Logger, STACK_BRANCH, STACK_HEADER};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, DebugError, DebugResult, Logger, debug, debugf, dump_error_stack, global,
        init_with, output,
    };
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

// ============================================================================
// Process-wide logger
// ============================================================================

/// The process-wide logger, created from the environment on first use
///
/// An invalid `DEBUGGER_TIMESTAMP_FORMAT` is reported through `tracing` and
/// the defaults are used instead.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| {
        Logger::new(Config::from_env()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring debugger environment configuration");
            Logger::default()
        })
    })
}

/// Replace the process-wide logger's configuration
///
/// # Errors
///
/// Returns error if the timestamp format cannot be parsed
pub fn init_with(config: Config) -> DebugResult<&'static Logger> {
    let logger = global();
    logger.reconfigure(config)?;
    Ok(logger)
}

/// [`Logger::add_timestamp`] on the process-wide logger
pub fn add_timestamp(s: &str) -> String {
    global().add_timestamp(s)
}

/// [`Logger::dump_error_stack`] on the process-wide logger
pub fn dump_error_stack(err: Option<&(dyn Error + 'static)>) -> i32 {
    global().dump_error_stack(err)
}
