//! Printf-style convenience layer. `format_args!` builds its `Arguments`
//! without performing any substitution, so checking `enabled` before calling
//! `.to_string()` means a suppressed level costs nothing but the check.
//!
//! Substitution arguments are folded into the message text, not turned into
//! structured attributes — use `Logger::log` with `attrs!` when the values
//! need to stay queryable.

use std::fmt;

use crate::level::Level;
use crate::logger::Logger;

/// Wraps a [`Logger`] with formatted-message methods. Pair with the
/// [`logf!`](crate::logf)-family macros, which supply the `format_args!` call.
#[derive(Clone)]
pub struct FmtLogger {
    inner: Logger,
}

impl FmtLogger {
    #[must_use]
    pub const fn new(inner: Logger) -> Self {
        Self { inner }
    }

    /// Formats and logs only if `level` is enabled — the substitution itself
    /// is the cost being avoided.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.inner.enabled(level) {
            self.inner.log(level, &args.to_string(), Vec::new());
        }
    }

    /// Formatted debug message.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    /// Formatted info message.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    /// Formatted warning message.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    /// Formatted error message.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// The wrapped handle, for structured calls alongside formatted ones.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.inner
    }
}

/// Logs a formatted message at an explicit level: `logf!(log, Level::Warn, "{n} retries", n = 3)`.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.logf($level, ::core::format_args!($($arg)*))
    };
}

/// Logs a formatted debug message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debugf(::core::format_args!($($arg)*))
    };
}

/// Logs a formatted info message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(::core::format_args!($($arg)*))
    };
}

/// Logs a formatted warning message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warnf(::core::format_args!($($arg)*))
    };
}

/// Logs a formatted error message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(::core::format_args!($($arg)*))
    };
}
