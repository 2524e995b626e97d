//! Attribute values as a closed sum type — adding a new kind is a
//! compile-time-checked decision, not an open-ended type switch.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};

use crate::attr::Attr;

/// One attribute value. Every kind the renderer understands is a variant here,
/// so the formatter's match is exhaustive.
#[derive(Clone)]
pub enum Value {
    /// Rendered double-quoted with escapes that round-trip.
    Str(String),
    /// Rendered as `true` / `false`.
    Bool(bool),
    /// Rendered in base 10.
    I64(i64),
    /// Rendered in base 10.
    U64(u64),
    /// Rendered as the shortest round-trip decimal.
    F64(f64),
    /// Rendered in compact canonical form (`1m30s`, `90ms`).
    Duration(Duration),
    /// Rendered per the handler's time-attribute format and timezone flag.
    Time(DateTime<Utc>),
    /// Nested attributes — extends the dotted key prefix and recurses.
    Group(Vec<Attr>),
    /// Deferred value, resolved at render time. May itself yield another
    /// `Lazy`; resolution is bounded to avoid unbounded chains.
    Lazy(Arc<dyn Fn() -> Value + Send + Sync>),
    /// Catch-all for anything else — rendered via its `Display` impl, unquoted.
    Display(Arc<dyn fmt::Display + Send + Sync>),
}

impl Value {
    /// Wraps a closure whose result is only computed if the record is rendered.
    #[must_use]
    pub fn lazy(f: impl Fn() -> Self + Send + Sync + 'static) -> Self {
        Self::Lazy(Arc::new(f))
    }

    /// Wraps an arbitrary `Display` type without committing to a concrete kind.
    #[must_use]
    pub fn display(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Display(Arc::new(value))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::I64(i) => f.debug_tuple("I64").field(i).finish(),
            Self::U64(u) => f.debug_tuple("U64").field(u).finish(),
            Self::F64(x) => f.debug_tuple("F64").field(x).finish(),
            Self::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Self::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Self::Group(attrs) => f.debug_tuple("Group").field(attrs).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
            Self::Display(d) => write!(f, "Display({d})"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::I64(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::I64(i)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Self::U64(u64::from(u))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Self::U64(u)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::F64(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::F64(x)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Self::Duration(d)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Time(t)
    }
}

impl From<SystemTime> for Value {
    fn from(t: SystemTime) -> Self {
        Self::Time(t.into())
    }
}

impl From<Vec<Attr>> for Value {
    fn from(attrs: Vec<Attr>) -> Self {
        Self::Group(attrs)
    }
}
