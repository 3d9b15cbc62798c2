//! Configuration presets for common scenarios

use super::Config;

/// Suppress all output when set to a truthy value
pub const ENV_SILENT: &str = "DEBUGGER_SILENT";
/// Enable `debug` / `debugf` output when set to a truthy value
pub const ENV_VERBOSE: &str = "DEBUGGER_VERBOSE";
/// Toggle timestamp prefixes
pub const ENV_TIMESTAMPS: &str = "DEBUGGER_TIMESTAMPS";
/// Override the timestamp format description
pub const ENV_TIMESTAMP_FORMAT: &str = "DEBUGGER_TIMESTAMP_FORMAT";

impl Config {
    /// Create configuration from environment variables
    ///
    /// Flags are off for `"0"` and `"false"`, on for any other value, and
    /// keep their default when unset. The format is not validated here.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = var(ENV_SILENT) {
            config.silent = truthy(&v);
        }
        if let Some(v) = var(ENV_VERBOSE) {
            config.verbose = truthy(&v);
        }
        if let Some(v) = var(ENV_TIMESTAMPS) {
            config.timestamps = truthy(&v);
        }
        if let Some(format) = var(ENV_TIMESTAMP_FORMAT) {
            config.timestamp_format = format;
        }

        config
    }

    /// Verbose configuration (debug output enabled)
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Self::default()
        }
    }

    /// Quiet configuration (nothing is printed)
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }

    /// Plain configuration (no timestamp prefixes)
    #[must_use]
    pub fn plain() -> Self {
        Self {
            timestamps: false,
            ..Self::default()
        }
    }
}

fn truthy(v: &str) -> bool {
    v != "0" && !v.eq_ignore_ascii_case("false")
}
