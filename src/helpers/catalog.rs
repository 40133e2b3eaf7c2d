//! Catalog of decorated routes, ordered most-specific first, plus the cache
//! that builds it once per registry.

use super::decorated::DecoratedRoute;
use super::error::HelperError;
use super::matcher::{self, MatchOutcome};
use crate::route::RouteDescriptor;
use crate::runtime_config::HelperConfig;
use arc_swap::ArcSwapOption;
use serde_json::Value;
use smallvec::SmallVec;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Catalog positions sharing one helper name, in catalog order.
type NameSlots = SmallVec<[usize; 4]>;

/// Ordered, immutable list of decorated routes with a name index
///
/// Routes are sorted by descending number of dynamic segments; routes with the
/// same count keep their declaration order. Lookups by helper name go through
/// the index and visit candidates in that same order.
#[derive(Debug, Default)]
pub struct Catalog {
    routes: Vec<DecoratedRoute>,
    by_name: HashMap<Arc<str>, NameSlots>,
    duplicates_dropped: usize,
}

impl Catalog {
    #[inline]
    #[must_use]
    pub fn routes(&self) -> &[DecoratedRoute] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecoratedRoute> {
        self.routes.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of descriptors collapsed as duplicates while building.
    #[must_use]
    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    /// Whether any route carries helper `name`.
    #[inline]
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Routes named `name`, most specific first.
    pub fn routes_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a DecoratedRoute> + 'a {
        self.by_name
            .get(name)
            .into_iter()
            .flat_map(|slots| slots.iter())
            .filter_map(move |&slot| self.routes.get(slot))
    }

    /// Distinct helper names, sorted.
    #[must_use]
    pub fn helper_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|n| n.as_ref()).collect();
        names.sort_unstable();
        names
    }

    /// See [`matcher::match_route`].
    pub fn match_route(&self, name: &str, params: &Value) -> Result<MatchOutcome<'_>, HelperError> {
        matcher::match_route(self, name, params)
    }

    /// Match and render in one step, reporting a variant mismatch as
    /// [`HelperError::NoMatchingVariant`] instead of folding it into
    /// [`HelperError::UnknownRouteName`].
    pub fn path_for(&self, name: &str, params: &Value) -> Result<String, HelperError> {
        match self.match_route(name, params)? {
            MatchOutcome::Matched(route) => route.render(params),
            MatchOutcome::UnknownName => Err(HelperError::UnknownRouteName {
                name: name.to_string(),
            }),
            MatchOutcome::NoMatchingVariant => Err(HelperError::NoMatchingVariant {
                name: name.to_string(),
                supplied: matcher::supplied_segments(params),
            }),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DecoratedRoute;
    type IntoIter = std::slice::Iter<'a, DecoratedRoute>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Build the catalog from a flat descriptor list.
///
/// 1. Descriptors that compare equal are collapsed (first one wins)
/// 2. Each remaining descriptor is decorated once per declared version
/// 3. Routes are stably sorted by descending dynamic segment count
/// 4. The helper name index is built over the sorted list
#[must_use]
pub fn build_catalog<I>(descriptors: I, config: &HelperConfig) -> Catalog
where
    I: IntoIterator<Item = Arc<RouteDescriptor>>,
{
    let mut unique: Vec<Arc<RouteDescriptor>> = Vec::new();
    let mut seen_paths: HashMap<String, SmallVec<[usize; 2]>> = HashMap::new();
    let mut duplicates_dropped = 0;

    for descriptor in descriptors {
        let slots = seen_paths.entry(descriptor.path.to_string()).or_default();
        if slots.iter().any(|&i| *unique[i] == *descriptor) {
            debug!(
                verb = %descriptor.verb,
                path = %descriptor.path,
                "Dropping duplicate route descriptor"
            );
            duplicates_dropped += 1;
            continue;
        }
        slots.push(unique.len());
        unique.push(descriptor);
    }

    let default_format = config.default_format.as_deref();
    let mut routes: Vec<DecoratedRoute> = Vec::with_capacity(unique.len());
    for descriptor in &unique {
        if descriptor.versions.is_empty() {
            routes.push(DecoratedRoute::new(
                Arc::clone(descriptor),
                None,
                default_format,
            ));
        } else {
            for version in &descriptor.versions {
                routes.push(DecoratedRoute::new(
                    Arc::clone(descriptor),
                    Some(version),
                    default_format,
                ));
            }
        }
    }

    // Stable: equal counts keep declaration order.
    routes.sort_by_key(|r| Reverse(r.dynamic_segments().len()));

    let mut by_name: HashMap<Arc<str>, NameSlots> = HashMap::new();
    for (slot, route) in routes.iter().enumerate() {
        by_name.entry(route.shared_name()).or_default().push(slot);
    }

    info!(
        routes_count = routes.len(),
        helper_count = by_name.len(),
        duplicates_dropped,
        "Route helper catalog built"
    );

    Catalog {
        routes,
        by_name,
        duplicates_dropped,
    }
}

/// Memoized catalog for one registry
///
/// The first [`get_or_build`](Self::get_or_build) computes and publishes the
/// catalog atomically; later calls return the same `Arc`. Two callers racing
/// on an empty cache may both build, but only the first publish is kept and
/// both receive it. [`invalidate`](Self::invalidate) forgets the catalog so the
/// next access rebuilds.
#[derive(Debug, Default)]
pub struct CatalogCache {
    slot: ArcSwapOption<Catalog>,
}

impl CatalogCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build<F>(&self, build: F) -> Arc<Catalog>
    where
        F: FnOnce() -> Catalog,
    {
        if let Some(catalog) = self.slot.load_full() {
            return catalog;
        }

        let built = Arc::new(build());
        let empty: Option<Arc<Catalog>> = None;
        let previous = self
            .slot
            .compare_and_swap(&empty, Some(Arc::clone(&built)));
        match &*previous {
            Some(winner) => Arc::clone(winner),
            None => built,
        }
    }

    /// The published catalog, if one has been built.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Catalog>> {
        self.slot.load_full()
    }

    pub fn invalidate(&self) {
        if self.slot.swap(None).is_some() {
            debug!("Route helper catalog invalidated");
        }
    }
}
