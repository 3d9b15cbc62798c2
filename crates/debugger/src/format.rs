//! Format utilities (time, line termination)

use time::OffsetDateTime;
use time::format_description::{self, BorrowedFormatItem, OwnedFormatItem};
use time::macros::format_description;

use crate::core::{DebugError, DebugResult};

/// Default timestamp format description (`2006-01-02 15:04:05` style)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

const DEFAULT_ITEMS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Separator between a timestamp and the message it prefixes
pub const TIMESTAMP_SEPARATOR: &str = ": ";

/// A parsed timestamp format description
///
/// Parsing happens once when configuration is applied, so rendering a
/// timestamp on the output path cannot fail on a bad description.
#[derive(Debug, Clone)]
pub struct TimestampFormat {
    description: String,
    items: OwnedFormatItem,
}

impl TimestampFormat {
    /// Parse a `time` format description such as `"[hour]:[minute]"`
    ///
    /// # Errors
    ///
    /// Returns [`DebugError::TimestampFormat`] if the description is malformed
    pub fn parse(description: &str) -> DebugResult<Self> {
        let items = format_description::parse_owned::<1>(description)
            .map_err(|e| DebugError::timestamp_format(description, e))?;
        Ok(Self {
            description: description.to_string(),
            items,
        })
    }

    /// The description this format was parsed from
    pub fn as_str(&self) -> &str {
        &self.description
    }

    /// Render `at` with this format
    ///
    /// A component the value cannot provide is rendered inline as a marker
    /// instead of failing the whole line.
    pub fn render(&self, at: OffsetDateTime) -> String {
        at.format(&self.items)
            .unwrap_or_else(|e| format!("<bad timestamp: {e}>"))
    }

    /// Render the current wall-clock time
    pub fn now(&self) -> String {
        self.render(now())
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            description: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            items: OwnedFormatItem::from(DEFAULT_ITEMS),
        }
    }
}

/// Current local time, or UTC when the local offset cannot be determined
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Join a rendered timestamp and a message
pub fn with_timestamp(timestamp: &str, s: &str) -> String {
    let mut out = String::with_capacity(timestamp.len() + TIMESTAMP_SEPARATOR.len() + s.len());
    out.push_str(timestamp);
    out.push_str(TIMESTAMP_SEPARATOR);
    out.push_str(s);
    out
}

/// Terminate `line` with exactly one newline unless it already ends in one
pub fn terminate_line(mut line: String) -> String {
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}
