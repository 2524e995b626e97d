//! Fans records out to different handlers by severity — the common case is
//! routine levels on stdout and errors on stderr.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use crate::attr::Attr;
use crate::error::Error;
use crate::handler::{Handler, Options, TabHandler};
use crate::level::Level;
use crate::record::Record;

/// Maps each level to the one handler that owns it. Levels absent from the
/// map are not logged at all; there is no merging across entries.
#[derive(Default)]
pub struct LevelRouter {
    routes: HashMap<Level, Arc<dyn Handler>>,
}

impl LevelRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` as the owner of `level`, replacing any previous owner.
    #[must_use]
    pub fn route(mut self, level: Level, handler: impl Handler + 'static) -> Self {
        self.routes.insert(level, Arc::new(handler));
        self
    }

    /// Same as [`route`](Self::route) for an already-shared handler — lets two
    /// levels share one mutex lineage.
    #[must_use]
    pub fn route_shared(mut self, level: Level, handler: Arc<dyn Handler>) -> Self {
        self.routes.insert(level, handler);
        self
    }

    /// Debug, Info, and Warn on stdout, Error on stderr, levels below
    /// `min_level` pruned from the map entirely (so nothing downstream ever
    /// sees them).
    #[must_use]
    pub fn split(min_level: Level, opts: Options) -> Self {
        let mut routes: HashMap<Level, Arc<dyn Handler>> = HashMap::new();
        for level in Level::all() {
            if level < min_level {
                continue;
            }
            let handler: Arc<dyn Handler> = if level == Level::Error {
                Arc::new(TabHandler::new(io::stderr(), opts.clone()))
            } else {
                Arc::new(TabHandler::new(io::stdout(), opts.clone()))
            };
            routes.insert(level, handler);
        }
        Self { routes }
    }
}

impl Handler for LevelRouter {
    /// Unmapped levels are disabled outright; mapped levels defer to the
    /// owning handler's own check.
    fn enabled(&self, level: Level) -> bool {
        self.routes.get(&level).is_some_and(|h| h.enabled(level))
    }

    /// Delegates entirely to the owning handler, including its formatting.
    /// Records at unmapped levels vanish without error.
    fn handle(&self, record: &Record) -> Result<(), Error> {
        match self.routes.get(&record.level) {
            Some(handler) => handler.handle(record),
            None => Ok(()),
        }
    }

    /// Derives every routed handler so inherited context and tags survive
    /// the level split.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let routes = self
            .routes
            .iter()
            .map(|(level, handler)| (*level, handler.with_attrs(attrs.clone())))
            .collect();
        Arc::new(Self { routes })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let routes = self
            .routes
            .iter()
            .map(|(level, handler)| (*level, handler.with_group(name)))
            .collect();
        Arc::new(Self { routes })
    }
}
