//! Name-based dispatch: every helper name in the catalog as a callable.

use super::catalog::Catalog;
use super::error::HelperError;
use super::matcher::{self, MatchOutcome};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Callable path helpers over a catalog
///
/// ```rust,ignore
/// let helpers = registry.helpers();
/// assert_eq!(helpers.call("api_v1_cats_path", Some(&json!({"id": 1})))?, "/api/v1/cats/1.json");
/// assert_eq!(helpers.call("api_v1_cats_path", None)?, "/api/v1/cats.json");
/// ```
#[derive(Debug, Clone)]
pub struct RouteHelpers {
    catalog: Arc<Catalog>,
}

impl RouteHelpers {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Whether a helper with this name exists.
    #[inline]
    #[must_use]
    pub fn responds_to(&self, name: &str) -> bool {
        self.catalog.contains_name(name)
    }

    /// All helper names, sorted.
    #[must_use]
    pub fn helper_names(&self) -> Vec<&str> {
        self.catalog.helper_names()
    }

    /// The helper named `name`, if any.
    #[must_use]
    pub fn helper<'a>(&'a self, name: &'a str) -> Option<PathHelper<'a>> {
        self.responds_to(name).then_some(PathHelper {
            helpers: self,
            name,
        })
    }

    /// Call helper `name`; `None` means no arguments.
    ///
    /// Errors:
    /// - [`HelperError::UnknownRouteName`] when no route has this name, and
    ///   also when the name exists but no route takes the supplied segments
    /// - [`HelperError::InvalidArgument`] when `args` is not a mapping
    pub fn call(&self, name: &str, args: Option<&Value>) -> Result<String, HelperError> {
        if !self.responds_to(name) {
            return Err(HelperError::UnknownRouteName {
                name: name.to_string(),
            });
        }

        let empty = Value::Object(Map::new());
        let params = args.unwrap_or(&empty);
        match matcher::match_route(&self.catalog, name, params)? {
            MatchOutcome::Matched(route) => route.render(params),
            MatchOutcome::UnknownName | MatchOutcome::NoMatchingVariant => {
                debug!(
                    helper = %name,
                    supplied = ?matcher::supplied_segments(params),
                    "Helper call matched no route variant"
                );
                Err(HelperError::UnknownRouteName {
                    name: name.to_string(),
                })
            }
        }
    }
}

/// A single named helper bound to its catalog
#[derive(Debug, Clone, Copy)]
pub struct PathHelper<'a> {
    helpers: &'a RouteHelpers,
    name: &'a str,
}

impl PathHelper<'_> {
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn call(&self, args: Option<&Value>) -> Result<String, HelperError> {
        self.helpers.call(self.name, args)
    }
}
