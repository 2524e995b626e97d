//! Key/value attributes bound to records or inherited through derived handlers.

use crate::value::Value;

/// The reserved key used to carry a tag through the inherited-context chain.
/// The tag value is rendered in square brackets after the level, never as a
/// normal `key=value` pair.
pub const TAG_KEY: &str = "__tag__";

/// One key/value pair attached to a record or bound via `with_attrs`.
#[derive(Debug, Clone)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    /// Accepts anything with a `Value` conversion so call sites stay terse.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Nested attributes under a shared dotted prefix — `group("db", ...)`
    /// renders its children as `db.host=... db.port=...`.
    #[must_use]
    pub fn group(key: impl Into<String>, attrs: Vec<Self>) -> Self {
        Self {
            key: key.into(),
            value: Value::Group(attrs),
        }
    }
}

/// Builds the reserved tag attribute. Bind it through `with_attrs` (or
/// `Logger::with_tag`) to render `[name]` after the level on every record
/// logged through that derived lineage. The first tag bound in frame order
/// wins; later tags are ignored.
#[must_use]
pub fn tag(name: impl Into<String>) -> Attr {
    Attr {
        key: TAG_KEY.to_string(),
        value: Value::Str(name.into()),
    }
}

/// Builds a `Vec<Attr>` from `key => value` pairs.
///
/// ```
/// use tablog::attrs;
///
/// let attrs = attrs!["user" => "bob", "attempts" => 3];
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::Attr>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Attr::new($key, $value)),+]
    };
}
