//! Core configuration struct

use serde::{Deserialize, Serialize};

use crate::core::DebugResult;
use crate::format::{DEFAULT_TIMESTAMP_FORMAT, TimestampFormat};

/// Output configuration
///
/// Read on every output call. Hand it to a [`Logger`](crate::Logger) at
/// construction or swap it later with [`Logger::reconfigure`](crate::Logger::reconfigure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suppress all output, including error stacks
    pub silent: bool,

    /// Enable output from `debug` / `debugf`
    pub verbose: bool,

    /// Prefix output lines with the current time
    pub timestamps: bool,

    /// `time` format description used for the prefix
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            silent: false,
            verbose: false,
            timestamps: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Check that the timestamp format parses
    pub fn validate(&self) -> DebugResult<()> {
        self.compile_timestamp_format().map(drop)
    }

    pub(crate) fn compile_timestamp_format(&self) -> DebugResult<TimestampFormat> {
        if self.timestamp_format == DEFAULT_TIMESTAMP_FORMAT {
            return Ok(TimestampFormat::default());
        }
        TimestampFormat::parse(&self.timestamp_format)
    }
}
