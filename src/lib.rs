#![forbid(unsafe_code)]

//! `tablog` - Tab-delimited structured logging with inherited context.
//!
//! A logging library built around one renderer: each record becomes a single
//! tab-delimited line — timestamp, level, optional `[tag]`, optional
//! `file:line`, message, then `key=value` attributes — written to an injected
//! sink. Around it:
//! - A [`Logger`] facade with structural derivation: `with_attrs`,
//!   `with_group` (dotted key prefixes), and `with_tag` produce child loggers
//!   that inherit context without mutating the parent
//! - A printf-style wrapper ([`FmtLogger`] and the [`logf!`]-family macros)
//!   that only performs format substitution when the level is enabled
//! - A [`LevelRouter`] that dispatches each record to the handler owning its
//!   level, with a stdout/stderr split constructor
//! - A bounded [`BufPool`] that reuses render buffers under load
//!
//! # Example
//!
//! ```
//! use tablog::{Logger, Options, TabHandler, attrs};
//!
//! let logger = Logger::new(TabHandler::new(
//!     std::io::stdout(),
//!     Options::new().time_format(""),
//! ));
//!
//! logger.info("User is logged in", attrs!["username" => "user"]);
//!
//! let net = logger.with_tag("NET");
//! net.warn("Connection timeout", attrs!["attempt" => 2]);
//! ```

pub mod attr;
pub mod bufpool;
pub mod config;
pub mod error;
pub mod handler;
pub mod level;
pub mod logger;
pub mod record;
pub mod router;
pub mod value;

// Re-exports for convenience
pub use attr::{Attr, TAG_KEY, tag};
pub use bufpool::BufPool;
pub use config::Config;
pub use error::Error;
pub use handler::{Handler, Options, RFC3339_MICRO, RFC3339_MILLI, TabHandler};
pub use level::{Level, ParseLevelError};
pub use logger::{FmtLogger, Logger};
pub use record::Record;
pub use router::LevelRouter;
pub use value::Value;
