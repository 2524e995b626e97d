//! The record-rendering core. The `Handler` trait is the seam between the
//! `Logger` facade and concrete renderers — the tab formatter and the level
//! router both live behind it, so users can add custom handlers without
//! modifying tablog itself.

mod options;
mod tab;

pub use options::{Options, RFC3339_MICRO, RFC3339_MILLI};
pub use tab::TabHandler;

use std::sync::Arc;

use crate::attr::Attr;
use crate::error::Error;
use crate::level::Level;
use crate::record::Record;

/// `Send + Sync` bounds enable concurrent logging from multiple threads
/// through a shared handler.
pub trait Handler: Send + Sync {
    /// Whether `level` meets this handler's minimum. Side-effect-free;
    /// callers use it to skip formatting work upstream.
    fn enabled(&self, level: Level) -> bool;

    /// Renders exactly one line and writes it to the sink. The sink's write
    /// error is surfaced unmodified — no retry, no buffering across calls.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn handle(&self, record: &Record) -> Result<(), Error>;

    /// Derived handler with one more attribute frame. The parent is never
    /// mutated — deriving from a shared handler is safe without locking.
    /// An empty `attrs` derives an identical handler.
    #[must_use]
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;

    /// Derived handler with one more group-marker frame, establishing a
    /// dotted key prefix for subsequently bound and logged attributes.
    /// An empty name derives an identical handler.
    #[must_use]
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}
