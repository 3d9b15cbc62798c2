//! Writer implementations

// Standard library
use std::io::{self, Write};

// External dependencies
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

// Internal crates
use crate::core::DebugResult;

/// Default output writer
pub fn stdout() -> BoxMakeWriter {
    BoxMakeWriter::new(io::stdout)
}

/// Write one complete line through `make_writer` and flush it
pub(crate) fn write_line(make_writer: &BoxMakeWriter, line: &str) -> DebugResult<()> {
    let mut writer = make_writer.make_writer();
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}
