//! Per-handler configuration, fixed at construction. Re-configuration means
//! building a new handler.

use crate::level::Level;

/// Millisecond-precision ISO-8601 with offset — the default for both the
/// timestamp column and time-typed attribute values.
pub const RFC3339_MILLI: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Microsecond-precision ISO-8601 with offset, for logs that need to order
/// events closer together than a millisecond.
pub const RFC3339_MICRO: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Every knob in one struct so handler construction doesn't take a half-dozen
/// loose parameters. Copied by value into the handler and never mutated after.
#[derive(Debug, Clone)]
pub struct Options {
    /// Records below this level are discarded.
    pub level: Level,
    /// Renders the captured call site as a `file:line` column.
    pub add_source: bool,
    /// strftime format for the timestamp column; `None` omits the column.
    pub time_format: Option<String>,
    /// Timestamp column in UTC instead of the local time zone.
    pub time_in_utc: bool,
    /// strftime format for time-typed attribute values. Never empty — an
    /// empty string is re-defaulted at handler construction.
    pub time_attr_format: String,
    /// Time-typed attribute values in UTC instead of the local time zone.
    pub time_attr_in_utc: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            level: Level::Info,
            add_source: false,
            time_format: Some(RFC3339_MILLI.to_string()),
            time_in_utc: false,
            time_attr_format: RFC3339_MILLI.to_string(),
            time_attr_in_utc: false,
        }
    }
}

impl Options {
    /// Defaults: Info level, no source capture, millisecond ISO-8601
    /// timestamps in local time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Noisy low-level records slow down production sinks — Info is the safe default.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Source capture costs a column per line; off unless asked for.
    #[must_use]
    pub const fn add_source(mut self, enabled: bool) -> Self {
        self.add_source = enabled;
        self
    }

    /// An empty format string disables the timestamp column entirely.
    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        self.time_format = if format.is_empty() { None } else { Some(format) };
        self
    }

    /// Local time reads naturally during development; UTC keeps multi-host
    /// logs comparable.
    #[must_use]
    pub const fn time_in_utc(mut self, enabled: bool) -> Self {
        self.time_in_utc = enabled;
        self
    }

    /// Unlike the timestamp column, time attributes always render — an empty
    /// string falls back to the default format instead of disabling them.
    #[must_use]
    pub fn time_attr_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        self.time_attr_format = if format.is_empty() {
            RFC3339_MILLI.to_string()
        } else {
            format
        };
        self
    }

    /// Timezone choice for time-typed attribute values, independent of the
    /// timestamp column's.
    #[must_use]
    pub const fn time_attr_in_utc(mut self, enabled: bool) -> Self {
        self.time_attr_in_utc = enabled;
        self
    }
}
