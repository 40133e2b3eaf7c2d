//! # Hot Reload Module
//!
//! Watches a declaration file and swaps the registry contents when it changes,
//! so helper names follow the file without restarting the process.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use route_helpers::hot_reload::watch_declarations;
//! use route_helpers::registry::Registry;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::new());
//! let watcher = watch_declarations("routes.yaml", Arc::clone(&registry), |catalog| {
//!     println!("Reloaded {} helpers", catalog.helper_names().len());
//! })?;
//!
//! // Keep watcher alive
//! std::mem::forget(watcher);
//! ```
//!
//! ## Reload Process
//!
//! 1. **Detection** - the watcher sees a modify or create event
//! 2. **Load** - the file is parsed and validated
//! 3. **Swap** - the registry's APIs are replaced and its catalog invalidated
//! 4. **Hook** - the callback receives the rebuilt catalog
//!
//! If the file fails to load, the error is logged and the previous routes stay
//! active.

use crate::helpers::Catalog;
use crate::registry::Registry;
use crate::spec;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Load `path` into `registry`, replacing its APIs. Returns the helper count.
///
/// On error the registry is left untouched.
pub fn reload_declarations(path: &Path, registry: &Registry) -> anyhow::Result<usize> {
    let apis = spec::load_declarations(path)?;
    registry.replace(apis);
    let catalog = registry.decorated_routes();
    info!(
        path = %path.display(),
        routes = catalog.len(),
        helpers = catalog.helper_names().len(),
        "hot-reload: route helpers rebuilt"
    );
    Ok(catalog.helper_names().len())
}

/// Watch a declaration file and reload `registry` when it changes.
///
/// `on_reload` runs after every successful reload with the new catalog.
pub fn watch_declarations<P, F>(
    declarations: P,
    registry: Arc<Registry>,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&Catalog) + Send + 'static,
{
    let path: PathBuf = declarations.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    match reload_declarations(&watch_path, &registry) {
                        Ok(_) => on_reload(&registry.decorated_routes()),
                        Err(e) => warn!(
                            path = %watch_path.display(),
                            error = ?e,
                            "hot-reload: keeping previous routes"
                        ),
                    }
                }
            }
            Err(e) => error!(error = %e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
