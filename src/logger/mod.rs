//! The facade handle callers log through. A `Logger` is a thin wrapper over a
//! shared handler: it gates on `enabled`, stamps the record with time and call
//! site, and hands it off. Derivation (`with_attrs` / `with_group` /
//! `with_tag`) wraps the handler's own derivation, so child loggers inherit
//! context without touching the parent.

mod fmtf;

pub use fmtf::FmtLogger;

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;

use crate::attr::{Attr, tag};
use crate::handler::Handler;
use crate::level::Level;
use crate::record::Record;

/// Immutable handle — cloning and deriving are cheap, and a shared `Logger`
/// can be logged through from any number of threads.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    /// Wraps any handler. Most callers pass a [`TabHandler`](crate::TabHandler)
    /// or a [`LevelRouter`](crate::LevelRouter).
    pub fn new(handler: impl Handler + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Shares an existing handler instead of wrapping a fresh one — used when
    /// several loggers must write through the same mutex lineage.
    #[must_use]
    pub fn from_handler(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    /// Whether a record at `level` would be written. Cheap; use it to skip
    /// expensive message construction upstream.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Builds and submits one record. Handler write errors are discarded —
    /// logging failures must not become control flow at the call site.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, attrs: Vec<Attr>) {
        if !self.handler.enabled(level) {
            return;
        }
        let record = Record {
            time: Some(Utc::now()),
            level,
            message: msg.to_string(),
            source: Some(Location::caller()),
            attrs,
        };
        let _ = self.handler.handle(&record);
    }

    /// Development-time diagnostics that are too noisy for normal operation.
    #[track_caller]
    pub fn debug(&self, msg: &str, attrs: Vec<Attr>) {
        self.log(Level::Debug, msg, attrs);
    }

    /// Normal operational milestones — user logged in, config loaded, etc.
    #[track_caller]
    pub fn info(&self, msg: &str, attrs: Vec<Attr>) {
        self.log(Level::Info, msg, attrs);
    }

    /// Non-fatal anomalies — retries, deprecated features, recoverable errors.
    #[track_caller]
    pub fn warn(&self, msg: &str, attrs: Vec<Attr>) {
        self.log(Level::Warn, msg, attrs);
    }

    /// Unrecoverable failures — I/O errors, invalid state, broken invariants.
    #[track_caller]
    pub fn error(&self, msg: &str, attrs: Vec<Attr>) {
        self.log(Level::Error, msg, attrs);
    }

    /// Child logger with extra attributes bound ahead of every record's own.
    /// Empty `attrs` returns a handle to the same handler.
    #[must_use]
    pub fn with_attrs(&self, attrs: Vec<Attr>) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        Self {
            handler: self.handler.with_attrs(attrs),
        }
    }

    /// Child logger whose subsequently bound and logged attributes render
    /// under a dotted `name.` prefix. An empty name returns the same handler.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        Self {
            handler: self.handler.with_group(name),
        }
    }

    /// Child logger whose records render `[name]` after the level field.
    #[must_use]
    pub fn with_tag(&self, name: impl Into<String>) -> Self {
        self.with_attrs(vec![tag(name)])
    }

    /// Direct handler access, for composing routers or sharing lineages.
    #[must_use]
    pub fn handler(&self) -> Arc<dyn Handler> {
        Arc::clone(&self.handler)
    }
}
