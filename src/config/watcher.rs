//! Route schema file watcher for hot reload.
//!
//! # Responsibilities
//! - Reload the schema file when it changes on disk
//! - Rebuild the `RouteSchema` and render tree for every accepted reload
//!
//! # Design Decisions
//! - A reload that fails to parse or validate is logged and dropped; the
//!   receiver keeps whatever it last got
//! - A reload equal to the last accepted config is not forwarded, since one
//!   save usually produces several filesystem events

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::RouterConfig;
use crate::routing::{RouteObject, RouteSchema};

/// A validated reload with its tree already built.
#[derive(Debug)]
pub struct SchemaUpdate {
    pub config: RouterConfig,
    pub schema: RouteSchema,
    pub render_tree: RouteObject,
}

/// Watches a route schema file and forwards valid changes.
pub struct ConfigWatcher {
    path: PathBuf,
    current: Option<RouterConfig>,
    update_tx: mpsc::UnboundedSender<SchemaUpdate>,
}

impl ConfigWatcher {
    /// Returns the watcher and a receiver for schema updates. The receiver
    /// works both inside a runtime (`recv`) and from plain threads
    /// (`blocking_recv`).
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<SchemaUpdate>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                current: None,
                update_tx,
            },
            update_rx,
        )
    }

    /// Treat `config` as already delivered.
    pub fn with_current(mut self, config: RouterConfig) -> Self {
        self.current = Some(config);
        self
    }

    /// Load the file once and forward it if it is valid and differs from the
    /// last accepted config. Returns whether an update was sent.
    pub fn reload(&mut self) -> bool {
        let config = match load_config(&self.path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to reload route schema, keeping current one"
                );
                return false;
            }
        };

        if self.current.as_ref() == Some(&config) {
            tracing::debug!(path = %self.path.display(), "Route schema unchanged");
            return false;
        }

        let schema = config.schema();
        let render_tree = schema.render_tree();
        tracing::info!(
            path = %self.path.display(),
            routes = render_tree.node_count(),
            "Route schema reloaded"
        );
        self.current = Some(config.clone());

        self.update_tx
            .send(SchemaUpdate {
                config,
                schema,
                render_tree,
            })
            .is_ok()
    }

    /// Start watching the file. Watching stops when the returned watcher is
    /// dropped.
    pub fn run(mut self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    tracing::debug!(kind = ?event.kind, "Route schema change detected");
                    self.reload();
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Route schema watcher started");
        Ok(watcher)
    }
}
