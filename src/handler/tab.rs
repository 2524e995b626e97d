//! The tab-delimited line renderer — the core of the crate. One record in,
//! one line out, written to the shared sink under the lineage mutex.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Local, Utc};

use crate::attr::{Attr, TAG_KEY};
use crate::bufpool::BufPool;
use crate::error::Error;
use crate::handler::{Handler, Options, RFC3339_MILLI};
use crate::level::Level;
use crate::record::Record;
use crate::value::Value;

/// Lazy values may themselves yield lazy values; resolution is bounded so a
/// self-returning closure cannot hang the renderer.
const MAX_LAZY_DEPTH: usize = 8;

/// One unit of inherited context, accumulated via chained derivation.
#[derive(Debug, Clone)]
enum Frame {
    /// Named group marker — extends the dotted key prefix for everything bound
    /// or logged after it.
    Group(String),
    /// Attributes bound at `with_attrs` time, rendered before the record's own.
    Attrs(Vec<Attr>),
}

/// Shared across a whole derivation lineage: every derived handler writes
/// through the same mutex (so lines from concurrent threads never interleave)
/// and reuses the same buffer pool.
struct Shared {
    sink: Mutex<Box<dyn Write + Send>>,
    pool: BufPool,
}

/// Renders records as one tab-delimited line each:
///
/// ```text
/// [<time>\t]<LEVEL>[\t[<tag>]][\t<file>:<line>]\t<message>[ key="val" ...]
/// ```
///
/// Derivation (`with_attrs` / `with_group`) returns a new immutable value
/// sharing the sink and pool but holding an extended frame sequence — the
/// parent is never mutated, so concurrent derivation from a shared handler
/// needs no locking. Formatting itself is lock-free; only the final write
/// holds the mutex.
#[derive(Clone)]
pub struct TabHandler {
    opts: Options,
    frames: Vec<Frame>,
    shared: Arc<Shared>,
}

impl TabHandler {
    /// Wraps `sink` with the given options. An empty time-attribute format is
    /// re-defaulted here rather than rejected.
    pub fn new(sink: impl Write + Send + 'static, opts: Options) -> Self {
        let mut opts = opts;
        if opts.time_attr_format.is_empty() {
            opts.time_attr_format = RFC3339_MILLI.to_string();
        }
        Self {
            opts,
            frames: Vec::new(),
            shared: Arc::new(Shared {
                sink: Mutex::new(Box::new(sink)),
                pool: BufPool::new(),
            }),
        }
    }

    fn derive(&self, frame: Frame) -> Self {
        let mut frames = self.frames.clone();
        frames.push(frame);
        Self {
            opts: self.opts.clone(),
            frames,
            shared: Arc::clone(&self.shared),
        }
    }

    /// The first tag bound anywhere in the frame sequence wins; later tags
    /// are ignored.
    fn first_tag(&self) -> Option<&Value> {
        for frame in &self.frames {
            if let Frame::Attrs(attrs) = frame {
                for attr in attrs {
                    if attr.key == TAG_KEY {
                        return Some(&attr.value);
                    }
                }
            }
        }
        None
    }

    /// Tag values render in their raw textual form — no key, and strings
    /// unquoted. Group values have no single-line text form and render
    /// nothing between the brackets.
    fn append_tag_text(&self, buf: &mut Vec<u8>, value: &Value) {
        match value {
            Value::Str(s) => buf.extend_from_slice(s.as_bytes()),
            Value::Bool(b) => {
                let _ = write!(buf, "{b}");
            }
            Value::I64(i) => {
                let _ = write!(buf, "{i}");
            }
            Value::U64(u) => {
                let _ = write!(buf, "{u}");
            }
            Value::F64(x) => {
                let _ = write!(buf, "{x}");
            }
            Value::Duration(d) => append_duration(buf, *d),
            Value::Time(t) => {
                append_time(buf, *t, &self.opts.time_attr_format, self.opts.time_attr_in_utc);
            }
            Value::Display(d) => {
                let _ = write!(buf, "{d}");
            }
            Value::Lazy(f) => {
                if let Some(resolved) = resolve_lazy(f.as_ref()) {
                    self.append_tag_text(buf, &resolved);
                }
            }
            Value::Group(_) => {}
        }
    }

    fn render(&self, record: &Record, buf: &mut Vec<u8>) {
        if let (Some(format), Some(time)) = (self.opts.time_format.as_deref(), record.time) {
            append_time(buf, time, format, self.opts.time_in_utc);
            buf.push(b'\t');
        }

        buf.extend_from_slice(record.level.as_str().as_bytes());

        if let Some(tag) = self.first_tag() {
            buf.extend_from_slice(b"\t[");
            self.append_tag_text(buf, tag);
            buf.push(b']');
        }

        if self.opts.add_source
            && let Some(source) = record.source
        {
            buf.push(b'\t');
            let _ = write!(buf, "{}:{}", source.file(), source.line());
        }

        buf.push(b'\t');
        buf.extend_from_slice(record.message.as_bytes());

        // A trailing group with nothing under it would produce a dangling
        // dotted prefix, so drop trailing group markers when the record
        // carries no attributes of its own.
        let mut frames = self.frames.as_slice();
        if record.attrs.is_empty() {
            while matches!(frames.last(), Some(Frame::Group(_))) {
                frames = &frames[..frames.len() - 1];
            }
        }

        let mut prefix = String::new();
        for frame in frames {
            match frame {
                Frame::Group(name) => {
                    prefix.push_str(name);
                    prefix.push('.');
                }
                Frame::Attrs(attrs) => {
                    for attr in attrs {
                        if attr.key != TAG_KEY {
                            self.append_attr(buf, attr, &prefix);
                        }
                    }
                }
            }
        }

        for attr in &record.attrs {
            self.append_attr(buf, attr, &prefix);
        }

        buf.push(b'\n');
    }

    fn append_attr(&self, buf: &mut Vec<u8>, attr: &Attr, prefix: &str) {
        let resolved;
        let value = if let Value::Lazy(f) = &attr.value {
            match resolve_lazy(f.as_ref()) {
                Some(v) => {
                    resolved = v;
                    &resolved
                }
                // Resolution exhausted — drop the attribute rather than fail.
                None => return,
            }
        } else {
            &attr.value
        };

        // An attr with an empty key and an empty string value is the no-op
        // sentinel and renders nothing.
        if attr.key.is_empty() && matches!(value, Value::Str(s) if s.is_empty()) {
            return;
        }

        match value {
            Value::Group(attrs) => {
                // Empty groups contribute nothing, not even a separator.
                if attrs.is_empty() {
                    return;
                }
                // A non-empty group gets its own separating space before its
                // children add theirs.
                buf.push(b' ');
                let nested = if attr.key.is_empty() {
                    prefix.to_string()
                } else {
                    format!("{prefix}{}.", attr.key)
                };
                for child in attrs {
                    self.append_attr(buf, child, &nested);
                }
            }
            Value::Lazy(_) => {}
            Value::Str(s) => {
                append_key(buf, prefix, &attr.key);
                let _ = write!(buf, "{s:?}");
            }
            Value::Time(t) => {
                append_key(buf, prefix, &attr.key);
                append_time(buf, *t, &self.opts.time_attr_format, self.opts.time_attr_in_utc);
            }
            Value::Bool(b) => {
                append_key(buf, prefix, &attr.key);
                let _ = write!(buf, "{b}");
            }
            Value::Duration(d) => {
                append_key(buf, prefix, &attr.key);
                append_duration(buf, *d);
            }
            Value::I64(i) => {
                append_key(buf, prefix, &attr.key);
                let _ = write!(buf, "{i}");
            }
            Value::U64(u) => {
                append_key(buf, prefix, &attr.key);
                let _ = write!(buf, "{u}");
            }
            Value::F64(x) => {
                append_key(buf, prefix, &attr.key);
                let _ = write!(buf, "{x}");
            }
            Value::Display(d) => {
                append_key(buf, prefix, &attr.key);
                let _ = write!(buf, "{d}");
            }
        }
    }
}

impl Handler for TabHandler {
    fn enabled(&self, level: Level) -> bool {
        level >= self.opts.level
    }

    fn handle(&self, record: &Record) -> Result<(), Error> {
        let mut buf = self.shared.pool.acquire();
        self.render(record, &mut buf);

        let result = self
            .shared
            .sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(&buf);

        self.shared.pool.release(buf);
        result.map_err(Error::Io)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        if attrs.is_empty() {
            return Arc::new(self.clone());
        }
        Arc::new(self.derive(Frame::Attrs(attrs)))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        if name.is_empty() {
            return Arc::new(self.clone());
        }
        Arc::new(self.derive(Frame::Group(name.to_string())))
    }
}

fn append_key(buf: &mut Vec<u8>, prefix: &str, key: &str) {
    buf.push(b' ');
    buf.extend_from_slice(prefix.as_bytes());
    buf.extend_from_slice(key.as_bytes());
    buf.push(b'=');
}

/// A malformed format string degrades to partial output rather than failing
/// the whole write.
fn append_time(buf: &mut Vec<u8>, time: DateTime<Utc>, format: &str, in_utc: bool) {
    if in_utc {
        let _ = write!(buf, "{}", time.format(format));
    } else {
        let _ = write!(buf, "{}", time.with_timezone(&Local).format(format));
    }
}

fn resolve_lazy(f: &(dyn Fn() -> Value + Send + Sync)) -> Option<Value> {
    let mut value = f();
    for _ in 0..MAX_LAZY_DEPTH {
        match value {
            Value::Lazy(next) => value = next(),
            other => return Some(other),
        }
    }
    None
}

/// Compact canonical duration text: largest fitting unit, fractional part
/// with trailing zeros trimmed (`90ms`, `1.5s`, `1m30s`, `1h0m0s`).
fn append_duration(buf: &mut Vec<u8>, d: Duration) {
    let nanos = d.as_nanos();
    if nanos == 0 {
        buf.extend_from_slice(b"0s");
    } else if nanos < 1_000 {
        let _ = write!(buf, "{nanos}ns");
    } else if nanos < 1_000_000 {
        append_scaled(buf, nanos, 1_000, 3, "\u{b5}s");
    } else if nanos < 1_000_000_000 {
        append_scaled(buf, nanos, 1_000_000, 6, "ms");
    } else {
        let total_secs = nanos / 1_000_000_000;
        let frac = nanos % 1_000_000_000;
        let hours = total_secs / 3600;
        let mins = (total_secs % 3600) / 60;
        let secs = total_secs % 60;
        if hours > 0 {
            let _ = write!(buf, "{hours}h{mins}m");
        } else if mins > 0 {
            let _ = write!(buf, "{mins}m");
        }
        let _ = write!(buf, "{secs}");
        append_frac_digits(buf, frac, 9);
        buf.push(b's');
    }
}

fn append_scaled(buf: &mut Vec<u8>, nanos: u128, scale: u128, width: usize, unit: &str) {
    let whole = nanos / scale;
    let _ = write!(buf, "{whole}");
    append_frac_digits(buf, nanos % scale, width);
    buf.extend_from_slice(unit.as_bytes());
}

fn append_frac_digits(buf: &mut Vec<u8>, frac: u128, width: usize) {
    if frac == 0 {
        return;
    }
    let mut digits = format!("{frac:0width$}");
    while digits.ends_with('0') {
        digits.pop();
    }
    buf.push(b'.');
    buf.extend_from_slice(digits.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::append_duration;
    use std::time::Duration;

    fn rendered(d: Duration) -> String {
        let mut buf = Vec::new();
        append_duration(&mut buf, d);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn duration_canonical_forms() {
        assert_eq!(rendered(Duration::ZERO), "0s");
        assert_eq!(rendered(Duration::from_nanos(100)), "100ns");
        assert_eq!(rendered(Duration::from_nanos(1_500)), "1.5\u{b5}s");
        assert_eq!(rendered(Duration::from_micros(1_500)), "1.5ms");
        assert_eq!(rendered(Duration::from_millis(90)), "90ms");
        assert_eq!(rendered(Duration::from_millis(1_500)), "1.5s");
        assert_eq!(rendered(Duration::from_secs(90)), "1m30s");
        assert_eq!(rendered(Duration::from_secs(3_600)), "1h0m0s");
        assert_eq!(rendered(Duration::from_secs(3_661)), "1h1m1s");
    }

    #[test]
    fn duration_trims_trailing_fraction_zeros() {
        assert_eq!(rendered(Duration::from_nanos(1_050)), "1.05\u{b5}s");
        assert_eq!(rendered(Duration::from_millis(61_250)), "1m1.25s");
    }
}
