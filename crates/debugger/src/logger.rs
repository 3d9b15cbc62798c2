//! The logger facade
//!
//! A [`Logger`] owns a swappable configuration snapshot and an output writer.
//! Every output path goes through one write primitive, which applies the
//! silent flag and, when asked to, the timestamp prefix. Error-stack lines
//! never carry a timestamp.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::chain::Layers;
use crate::config::Config;
use crate::core::DebugResult;
use crate::format::{self, TimestampFormat};
use crate::writer;

/// Prefix of the first line of an error stack
pub const STACK_HEADER: &str = "Error stack: ";

/// Prefix of every nested line of an error stack, aligned under the header
pub const STACK_BRANCH: &str = "           └ ";

/// Configuration plus its parsed timestamp format
#[derive(Debug)]
struct State {
    config: Config,
    timestamp: TimestampFormat,
}

impl State {
    fn compile(config: Config) -> DebugResult<Self> {
        let timestamp = config.compile_timestamp_format()?;
        Ok(Self { config, timestamp })
    }
}

/// Verbose/silent output with optional timestamps
///
/// Cloning is cheap and clones share configuration: a change made through
/// one handle is seen by all of them on their next call.
#[derive(Clone)]
pub struct Logger {
    state: Arc<ArcSwap<State>>,
    writer: Arc<BoxMakeWriter>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.state.load().config)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_state(
            State {
                config: Config::default(),
                timestamp: TimestampFormat::default(),
            },
            writer::stdout(),
        )
    }
}

impl Logger {
    /// Create a logger writing to stdout
    ///
    /// # Errors
    ///
    /// Returns error if the timestamp format cannot be parsed
    pub fn new(config: Config) -> DebugResult<Self> {
        Self::with_writer(config, writer::stdout())
    }

    /// Create a logger writing through `make_writer`
    ///
    /// # Errors
    ///
    /// Returns error if the timestamp format cannot be parsed
    pub fn with_writer<W>(config: Config, make_writer: W) -> DebugResult<Self>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let state = State::compile(config)?;
        Ok(Self::from_state(state, BoxMakeWriter::new(make_writer)))
    }

    fn from_state(state: State, writer: BoxMakeWriter) -> Self {
        Self {
            state: Arc::new(ArcSwap::from_pointee(state)),
            writer: Arc::new(writer),
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Snapshot of the current configuration
    pub fn config(&self) -> Config {
        self.state.load().config.clone()
    }

    /// Replace the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the timestamp format cannot be parsed; the previous
    /// configuration stays in effect.
    pub fn reconfigure(&self, config: Config) -> DebugResult<()> {
        let state = State::compile(config)?;
        tracing::debug!(config = ?state.config, "debugger reconfigured");
        self.state.store(Arc::new(state));
        Ok(())
    }

    /// Edit a copy of the current configuration and apply it
    ///
    /// Concurrent updates are last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns error if the edited timestamp format cannot be parsed; the
    /// previous configuration stays in effect.
    pub fn update(&self, edit: impl FnOnce(&mut Config)) -> DebugResult<()> {
        let mut config = self.config();
        edit(&mut config);
        self.reconfigure(config)
    }

    /// Suppress or allow all output
    pub fn set_silent(&self, silent: bool) {
        self.set_flag(|config| config.silent = silent);
    }

    /// Enable or disable `debug` / `debugf` output
    pub fn set_verbose(&self, verbose: bool) {
        self.set_flag(|config| config.verbose = verbose);
    }

    /// Enable or disable timestamp prefixes
    pub fn set_timestamps(&self, timestamps: bool) {
        self.set_flag(|config| config.timestamps = timestamps);
    }

    // Flag edits keep the parsed format, so they cannot fail.
    fn set_flag(&self, edit: impl Fn(&mut Config)) {
        self.state.rcu(|current| {
            let mut config = current.config.clone();
            edit(&mut config);
            State {
                config,
                timestamp: current.timestamp.clone(),
            }
        });
    }

    /// Whether output is suppressed
    pub fn is_silent(&self) -> bool {
        self.state.load().config.silent
    }

    /// Whether `debug` / `debugf` print
    pub fn is_verbose(&self) -> bool {
        self.state.load().config.verbose
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Print a message regardless of verbosity
    ///
    /// Nothing is printed when silent. The line gets exactly one trailing
    /// newline and, if enabled, a timestamp prefix.
    pub fn output(&self, args: fmt::Arguments<'_>) {
        self.write_line(args, true);
    }

    /// Alias for [`Logger::debugf`]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.debugf(args);
    }

    /// Print a message only when verbose
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.is_verbose() {
            self.output(args);
        }
    }

    /// Prefix `s` with the current time when timestamps are enabled
    pub fn add_timestamp(&self, s: &str) -> String {
        let state = self.state.load();
        if state.config.timestamps {
            format::with_timestamp(&state.timestamp.now(), s)
        } else {
            s.to_string()
        }
    }

    /// Print every layer of `err` and return an exit code
    ///
    /// Returns `1` when there was an error to print and `0` for `None`. The
    /// first line is prefixed with [`STACK_HEADER`], nested ones with
    /// [`STACK_BRANCH`]. Lines carry no timestamp and ignore the verbose
    /// flag; silent still suppresses them.
    pub fn dump_error_stack(&self, err: Option<&(dyn Error + 'static)>) -> i32 {
        let mut code = 0;
        for (depth, layer) in Layers::new(err).enumerate() {
            code = 1;
            let prefix = if depth == 0 {
                STACK_HEADER
            } else {
                STACK_BRANCH
            };
            self.write_line(format_args!("{prefix}{layer}"), false);
        }
        code
    }

    /// [`Logger::dump_error_stack`] for the error side of a result
    pub fn dump_result<T, E>(&self, result: &Result<T, E>) -> i32
    where
        E: Error + 'static,
    {
        match result {
            Ok(_) => 0,
            Err(e) => {
                let err: &(dyn Error + 'static) = e;
                self.dump_error_stack(Some(err))
            }
        }
    }

    fn write_line(&self, args: fmt::Arguments<'_>, with_timestamp: bool) {
        let state = self.state.load();
        if state.config.silent {
            return;
        }

        let mut line = format::terminate_line(args.to_string());
        if with_timestamp && state.config.timestamps {
            line = format::with_timestamp(&state.timestamp.now(), &line);
        }

        if let Err(e) = writer::write_line(&self.writer, &line) {
            tracing::warn!(error = %e, "failed to write debug output");
        }
    }
}
