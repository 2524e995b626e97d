//! One structured log event, built per call and consumed exactly once.

use std::panic::Location;

use chrono::{DateTime, Utc};

use crate::attr::Attr;
use crate::level::Level;

/// Carries all data a handler needs to render one log line — avoids passing
/// a half-dozen loose parameters.
///
/// `None` for `time` means "no timestamp was captured" and the timestamp
/// column is omitted even when a time format is configured.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: Option<DateTime<Utc>>,
    pub level: Level,
    pub message: String,
    /// Captured call site, rendered as `file:line` when the handler opts in.
    pub source: Option<&'static Location<'static>>,
    pub attrs: Vec<Attr>,
}

impl Record {
    /// Minimal record — no timestamp, no source, no attributes. The `Logger`
    /// fills the rest in; direct handler users set only what they need.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: None,
            level,
            message: message.into(),
            source: None,
            attrs: Vec::new(),
        }
    }

    /// Timestamps are optional so tests can render deterministic lines.
    #[must_use]
    pub const fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Call-site capture is the logger's job — handlers only render it.
    #[must_use]
    pub const fn source(mut self, source: &'static Location<'static>) -> Self {
        self.source = Some(source);
        self
    }

    /// The record's own attributes, rendered after all inherited frames.
    #[must_use]
    pub fn attrs(mut self, attrs: Vec<Attr>) -> Self {
        self.attrs = attrs;
        self
    }
}
