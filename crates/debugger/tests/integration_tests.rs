//! Integration tests for debugger
//!
//! These tests drive the public API the way an embedding application would.

use std::error::Error;
use std::io;
use std::sync::{Arc, LazyLock, Mutex};

use debugger::{Config, Logger, STACK_BRANCH, STACK_HEADER, debug, debugf, output};
use pretty_assertions::assert_eq;
use rstest::rstest;

// Serialization lock for tests using the process-wide logger
static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capturing(config: Config) -> (Logger, Capture) {
    let capture = Capture::default();
    let sink = capture.clone();
    let logger = Logger::with_writer(config, move || sink.clone()).unwrap();
    (logger, capture)
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("failed to start service")]
    Startup(#[source] ConfigError),
}

#[derive(Debug, thiserror::Error)]
enum ConfigError {
    #[error("could not load settings")]
    Load(#[source] io::Error),
}

fn startup_failure() -> AppError {
    AppError::Startup(ConfigError::Load(io::Error::new(
        io::ErrorKind::PermissionDenied,
        "permission denied",
    )))
}

#[test]
fn test_debugf_scenario() {
    let (logger, capture) = capturing(Config {
        silent: false,
        verbose: true,
        timestamps: false,
        ..Config::default()
    });

    debugf!(logger; "value={}", 5);

    assert_eq!(capture.contents(), "value=5\n");
}

#[test]
fn test_single_error_scenario() {
    let (logger, capture) = capturing(Config::default());
    let err = io::Error::other("disk full");

    assert_eq!(logger.dump_error_stack(Some(&err)), 1);
    assert_eq!(capture.contents(), "Error stack: disk full\n");
}

#[test]
fn test_thiserror_chain() {
    let (logger, capture) = capturing(Config::default());
    let err = startup_failure();

    assert_eq!(debugger::depth(&err), 3);
    assert_eq!(logger.dump_error_stack(Some(&err)), 1);
    assert_eq!(
        capture.lines(),
        [
            "Error stack: failed to start service",
            "           └ could not load settings",
            "           └ permission denied",
        ]
    );
}

#[test]
fn test_anyhow_context_chain() {
    let (logger, capture) = capturing(Config::default());
    let err = anyhow::anyhow!("connection refused")
        .context("fetch manifest")
        .context("sync repository");
    let err: &(dyn Error + 'static) = err.as_ref();

    assert_eq!(logger.dump_error_stack(Some(err)), 1);
    assert_eq!(
        capture.contents(),
        "Error stack: sync repository\n           └ fetch manifest\n           └ connection refused\n"
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_chain_of_depth_n(#[case] n: usize) {
    #[derive(Debug)]
    struct Layer {
        level: usize,
        inner: Option<Box<Layer>>,
    }

    impl std::fmt::Display for Layer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "level {}", self.level)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.inner.as_deref().map(|e| e as &(dyn Error + 'static))
        }
    }

    let err = (0..n)
        .rev()
        .fold(None, |inner, level| {
            Some(Layer {
                level,
                inner: inner.map(Box::new),
            })
        })
        .unwrap();

    let (logger, capture) = capturing(Config::default());
    assert_eq!(logger.dump_error_stack(Some(&err)), 1);

    let lines = capture.lines();
    assert_eq!(lines.len(), n);
    assert_eq!(lines[0], format!("{STACK_HEADER}level 0"));
    for (level, line) in lines.iter().enumerate().skip(1) {
        assert_eq!(*line, format!("{STACK_BRANCH}level {level}"));
    }
}

#[test]
fn test_no_error_prints_nothing() {
    let (logger, capture) = capturing(Config::default());
    let ok: Result<(), AppError> = Ok(());

    assert_eq!(logger.dump_error_stack(None), 0);
    assert_eq!(logger.dump_result(&ok), 0);
    assert_eq!(capture.contents(), "");
}

#[test]
fn test_silent_wins_over_everything() {
    let (logger, capture) = capturing(Config {
        silent: true,
        verbose: true,
        timestamps: true,
        ..Config::default()
    });

    output!(logger; "output");
    debug!(logger; "debug");
    debugf!(logger; "debugf");
    let code = logger.dump_result(&Err::<(), _>(startup_failure()));

    assert_eq!(code, 1);
    assert_eq!(capture.contents(), "");
}

#[test]
fn test_output_carries_timestamp_but_stack_does_not() {
    let (logger, capture) = capturing(Config {
        timestamp_format: "[year]-[month]-[day]".to_string(),
        ..Config::default()
    });
    let err = io::Error::other("boom");

    output!(logger; "before");
    logger.dump_error_stack(Some(&err));

    let lines = capture.lines();
    let (stamp, message) = lines[0].split_once(": ").unwrap();
    assert_eq!(stamp.len(), "2024-01-01".len());
    assert_eq!(message, "before");
    assert_eq!(lines[1], "Error stack: boom");
}

#[test]
fn test_runtime_reconfiguration() {
    let (logger, capture) = capturing(Config::plain());

    debug!(logger; "not yet");
    logger
        .update(|config| {
            config.verbose = true;
        })
        .unwrap();
    debug!(logger; "now");
    logger.reconfigure(Config::quiet()).unwrap();
    output!(logger; "silenced");

    assert_eq!(capture.contents(), "now\n");
    assert!(logger.is_silent());
}

#[test]
fn test_config_from_json_file_contents() {
    let config: Config =
        serde_json::from_str(r#"{"timestamps": false, "timestamp_format": "[hour]"}"#).unwrap();
    let (logger, capture) = capturing(config);

    output!(logger; "loaded");

    assert_eq!(logger.config().timestamp_format, "[hour]");
    assert_eq!(capture.contents(), "loaded\n");
}

#[test]
fn test_invalid_json_format_rejected_on_construction() {
    let config: Config = serde_json::from_str(r#"{"timestamp_format": "[hour"}"#).unwrap();
    let err = Logger::new(config).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_global_logger() {
    let _guard = TEST_LOCK.lock().unwrap();

    let logger = debugger::init_with(Config::quiet()).unwrap();
    assert!(logger.is_silent());
    assert!(debugger::global().is_silent());

    // Silent: nothing reaches stdout, exit codes still reflect the input.
    output!("global output");
    debugf!("global debug");
    let err = io::Error::other("global failure");
    assert_eq!(debugger::dump_error_stack(Some(&err)), 1);
    assert_eq!(debugger::dump_error_stack(None), 0);

    debugger::init_with(Config::plain()).unwrap();
    assert_eq!(debugger::add_timestamp("raw"), "raw");

    assert!(debugger::init_with(Config {
        timestamp_format: "[nope]".to_string(),
        ..Config::default()
    })
    .is_err());
    assert_eq!(debugger::global().config(), Config::plain());
}
