//! Helper-name + parameter matching against the catalog.

use super::catalog::Catalog;
use super::decorated::{is_reserved, DecoratedRoute};
use super::error::HelperError;
use serde_json::Value;
use tracing::debug;

/// Result of looking up a helper call in the catalog
#[derive(Debug, Clone, Copy)]
pub enum MatchOutcome<'a> {
    /// The first (most specific) route whose segments equal the supplied keys
    Matched(&'a DecoratedRoute),
    /// No route carries the requested name
    UnknownName,
    /// The name exists but no route takes exactly the supplied keys
    NoMatchingVariant,
}

impl<'a> MatchOutcome<'a> {
    #[inline]
    #[must_use]
    pub fn route(self) -> Option<&'a DecoratedRoute> {
        match self {
            MatchOutcome::Matched(route) => Some(route),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Find the route helper `name` resolves to for `params`.
///
/// `params` must be a JSON object, otherwise [`HelperError::InvalidArgument`].
/// The keys of `params`, minus the reserved `format` and `params` keys, must
/// equal a route's dynamic segments as a set. Same-named routes are tried in
/// catalog order, so a route demanding more segments is never shadowed by one
/// demanding fewer.
///
/// # Example
///
/// ```rust,ignore
/// match catalog.match_route("api_v1_cats_path", &json!({"id": 1}))? {
///     MatchOutcome::Matched(route) => println!("{}", route.path()),
///     MatchOutcome::UnknownName | MatchOutcome::NoMatchingVariant => {}
/// }
/// ```
pub fn match_route<'a>(
    catalog: &'a Catalog,
    name: &str,
    params: &Value,
) -> Result<MatchOutcome<'a>, HelperError> {
    let supplied = params
        .as_object()
        .ok_or_else(|| HelperError::invalid_argument(name, "a mapping", params))?;

    if !catalog.contains_name(name) {
        debug!(helper = %name, "No route carries this helper name");
        return Ok(MatchOutcome::UnknownName);
    }

    let keys = || supplied.keys().map(String::as_str);
    if let Some(route) = catalog.routes_named(name).find(|r| r.uses_segments(keys())) {
        debug!(
            helper = %name,
            path = %route.path(),
            version = ?route.version(),
            "Route helper matched"
        );
        return Ok(MatchOutcome::Matched(route));
    }

    debug!(
        helper = %name,
        supplied = ?supplied_segments(params),
        candidates = catalog.routes_named(name).count(),
        "Helper name exists but no route takes these segments"
    );
    Ok(MatchOutcome::NoMatchingVariant)
}

/// Non-reserved keys of a parameter mapping, in the order given.
pub(crate) fn supplied_segments(params: &Value) -> Vec<String> {
    params
        .as_object()
        .map(|map| {
            map.keys()
                .filter(|k| !is_reserved(k))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
