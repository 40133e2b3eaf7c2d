//! Decorated routes: a descriptor bound to one version, with its helper name,
//! required segments and format suffix computed once.

use super::error::HelperError;
use super::render;
use crate::route::{PathTemplate, RouteDescriptor, Segment};
use serde_json::Value;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// Segment lists stay inline up to this many names.
pub const MAX_INLINE_SEGMENTS: usize = 4;

/// Ordered segment names. Names are shared with the catalog index via `Arc<str>`.
pub type SegmentNames = SmallVec<[Arc<str>; MAX_INLINE_SEGMENTS]>;

/// Parameter key carrying the query-string mapping.
pub const PARAMS_KEY: &str = "params";
/// Parameter key overriding the format suffix.
pub const FORMAT_KEY: &str = "format";
/// Keys that are never treated as path segments.
pub const RESERVED_KEYS: [&str; 2] = [FORMAT_KEY, PARAMS_KEY];

/// Template segment the route binds to its own version.
const VERSION_SEGMENT: &str = "version";

/// Suffix appended to every helper name.
const HELPER_SUFFIX: &str = "_path";

#[inline]
pub(crate) fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Turn an arbitrary string into a bare lowercase identifier.
///
/// Every character outside `[a-z0-9_]` becomes `_`, and so does a leading digit.
///
/// ```
/// use route_helpers::helpers::sanitize_helper_name;
///
/// assert_eq!(sanitize_helper_name("beta-1_Ping"), "beta_1_ping");
/// assert_eq!(sanitize_helper_name("2fa"), "_fa");
/// ```
#[must_use]
pub fn sanitize_helper_name(raw: &str) -> String {
    raw.chars()
        .enumerate()
        .map(|(i, c)| {
            let c = c.to_ascii_lowercase();
            if (c.is_ascii_alphanumeric() && !(i == 0 && c.is_ascii_digit())) || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Normalize a format token (`json`, `.json`) into a suffix (`.json`).
///
/// Empty input means "no suffix".
pub(crate) fn format_suffix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!(".{trimmed}"))
    }
}

/// A route descriptor as seen by the helper machinery
#[derive(Debug, Clone)]
pub struct DecoratedRoute {
    route: Arc<RouteDescriptor>,
    version: Option<Arc<str>>,
    name: Arc<str>,
    dynamic_segments: SegmentNames,
    format_suffix: Option<Arc<str>>,
}

impl DecoratedRoute {
    /// Decorate `route` for one of its versions (or none if versionless).
    ///
    /// `default_format` applies when the template declares no extension.
    #[must_use]
    pub fn new(
        route: Arc<RouteDescriptor>,
        version: Option<&str>,
        default_format: Option<&str>,
    ) -> Self {
        let mut decorated = Self {
            version: version.map(Arc::from),
            name: Arc::from(""),
            dynamic_segments: SegmentNames::new(),
            format_suffix: route
                .path
                .extension()
                .map(str::to_string)
                .or_else(|| default_format.and_then(format_suffix))
                .map(Arc::from),
            route,
        };

        let dynamic_segments: SegmentNames = decorated
            .route
            .path
            .dynamic_names()
            .filter(|name| decorated.bound_value(name).is_none())
            .map(Arc::from)
            .collect();
        let name = decorated.helper_name();

        decorated.dynamic_segments = dynamic_segments;
        decorated.name = Arc::from(name);
        decorated
    }

    fn helper_name(&self) -> String {
        let base = match self.route.explicit_name() {
            Some(explicit) => explicit.to_string(),
            None => {
                let parts: Vec<Cow<'_, str>> = self
                    .route
                    .path
                    .segments()
                    .iter()
                    .filter_map(|segment| match segment {
                        Segment::Literal(text) => Some(Cow::Borrowed(text.as_str())),
                        Segment::Param(name) | Segment::Wildcard(name) => self.bound_value(name),
                    })
                    .collect();
                if parts.is_empty() {
                    "root".to_string()
                } else {
                    parts.join("_")
                }
            }
        };
        let mut name = sanitize_helper_name(&base);
        name.push_str(HELPER_SUFFIX);
        name
    }

    /// Value the route supplies itself for `segment`: its version for
    /// `:version`, otherwise a same-named scalar option.
    #[must_use]
    pub fn bound_value(&self, segment: &str) -> Option<Cow<'_, str>> {
        if segment == VERSION_SEGMENT {
            if let Some(version) = &self.version {
                return Some(Cow::Borrowed(version.as_ref()));
            }
        }
        self.route.option_binding(segment).map(Cow::Owned)
    }

    /// Helper name, e.g. `api_v1_cats_path`.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Segments the caller must supply, in template order.
    #[inline]
    #[must_use]
    pub fn dynamic_segments(&self) -> &[Arc<str>] {
        &self.dynamic_segments
    }

    /// Alias of [`dynamic_segments`](Self::dynamic_segments).
    #[inline]
    #[must_use]
    pub fn required_segments(&self) -> &[Arc<str>] {
        self.dynamic_segments()
    }

    #[inline]
    #[must_use]
    pub fn route(&self) -> &RouteDescriptor {
        &self.route
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &PathTemplate {
        &self.route.path
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn format_suffix(&self) -> Option<&str> {
        self.format_suffix.as_deref()
    }

    /// True when `keys`, ignoring reserved keys, are exactly this route's
    /// dynamic segments.
    #[must_use]
    pub fn uses_segments<'k, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k str>,
    {
        let mut recognized = 0;
        for key in keys.into_iter().filter(|k| !is_reserved(k)) {
            if !self.dynamic_segments.iter().any(|s| s.as_ref() == key) {
                return false;
            }
            recognized += 1;
        }
        recognized == self.dynamic_segments.len()
    }

    /// Whether a call to helper `name` with `params` resolves to this route.
    ///
    /// A different name is simply `false`; `params` is only inspected (and
    /// must be a mapping) when the name matches.
    pub fn route_match(&self, name: &str, params: &Value) -> Result<bool, HelperError> {
        if self.name() != name {
            return Ok(false);
        }
        let supplied = params
            .as_object()
            .ok_or_else(|| HelperError::invalid_argument(name, "a mapping", params))?;
        Ok(self.uses_segments(supplied.keys().map(String::as_str)))
    }

    /// Render this route's path; see [`crate::helpers::render_path`].
    pub fn render(&self, params: &Value) -> Result<String, HelperError> {
        render::render(self, params)
    }
}
