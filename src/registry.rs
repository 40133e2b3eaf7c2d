//! # Registry Module
//!
//! The host registry: the set of registered APIs and the catalog built from
//! them. The catalog is built on first access and reused until the registry
//! changes; [`Registry::register`] and [`Registry::replace`] invalidate it, and
//! [`Registry::invalidate`] forces a rebuild explicitly.
//!
//! A process-wide registry is available through [`Registry::global`].

use crate::api::Api;
use crate::helpers::{build_catalog, Catalog, CatalogCache, RouteHelpers};
use crate::route::RouteDescriptor;
use crate::runtime_config::HelperConfig;
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

static GLOBAL_REGISTRY: Lazy<Registry> =
    Lazy::new(|| Registry::with_config(HelperConfig::from_env()));

/// Registered APIs plus their memoized helper catalog
#[derive(Debug, Default)]
pub struct Registry {
    apis: RwLock<Vec<Arc<Api>>>,
    cache: CatalogCache,
    config: HelperConfig,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: HelperConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The process-wide registry, configured from the environment.
    #[must_use]
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    #[must_use]
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Register an API and invalidate the catalog.
    pub fn register(&self, api: Arc<Api>) {
        let mut apis = self.apis.write().unwrap_or_else(PoisonError::into_inner);
        info!(api = %api.name(), routes = api.routes().len(), "Registering API");
        apis.push(api);
        self.cache.invalidate();
    }

    /// Swap the whole API set (e.g. after reloading declarations).
    pub fn replace(&self, new_apis: Vec<Arc<Api>>) {
        let mut apis = self.apis.write().unwrap_or_else(PoisonError::into_inner);
        info!(apis = new_apis.len(), "Replacing registered APIs");
        *apis = new_apis;
        self.cache.invalidate();
    }

    /// Drop every registered API.
    pub fn clear(&self) {
        self.replace(Vec::new());
    }

    #[must_use]
    pub fn apis(&self) -> Vec<Arc<Api>> {
        self.apis
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every route of every registered API, mounts included. May contain duplicates.
    #[must_use]
    pub fn all_routes(&self) -> Vec<Arc<RouteDescriptor>> {
        let apis = self.apis.read().unwrap_or_else(PoisonError::into_inner);
        Self::flatten(&apis)
    }

    fn flatten(apis: &[Arc<Api>]) -> Vec<Arc<RouteDescriptor>> {
        apis.iter().flat_map(|api| api.all_routes()).collect()
    }

    /// The memoized catalog. Repeated calls return the same `Arc` until the
    /// registry changes.
    #[must_use]
    pub fn decorated_routes(&self) -> Arc<Catalog> {
        if let Some(catalog) = self.cache.current() {
            return catalog;
        }
        // Hold the read lock while building so a concurrent replace cannot
        // publish between our read and our publish.
        let apis = self.apis.read().unwrap_or_else(PoisonError::into_inner);
        self.cache
            .get_or_build(|| build_catalog(Self::flatten(&apis), &self.config))
    }

    /// Callable helpers over the current catalog.
    #[must_use]
    pub fn helpers(&self) -> RouteHelpers {
        RouteHelpers::new(self.decorated_routes())
    }

    /// Forget the catalog; the next access rebuilds it.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}
