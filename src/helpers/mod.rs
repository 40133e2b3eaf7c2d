//! # Helpers Module
//!
//! Synthesizes named path helpers from the route table.
//!
//! ## Overview
//!
//! Every declared route gets a helper name derived from its path template
//! (`/api/:version/cats/:id` bound to `v1` becomes `api_v1_cats_path`).
//! Several routes may share a name; the segments the caller passes decide which
//! one is used:
//!
//! ```text
//! api_v1_cats_path({})          → GET /api/:version/cats      → /api/v1/cats.json
//! api_v1_cats_path({id: 1})     → GET /api/:version/cats/:id  → /api/v1/cats/1.json
//! ```
//!
//! ## Architecture
//!
//! 1. **Decoration** ([`DecoratedRoute`]): name, required segments and format
//!    suffix are computed once per route and version.
//! 2. **Catalog** ([`build_catalog`], [`Catalog`]): duplicates collapsed, routes
//!    ordered by descending segment count, name index built. [`CatalogCache`]
//!    memoizes it per registry.
//! 3. **Matching** ([`match_route`]): the supplied keys, minus the reserved
//!    `format` and `params` keys, must equal a route's segments.
//! 4. **Rendering** ([`render_path`]): segments substituted, suffix appended,
//!    `params` encoded as the query string.
//! 5. **Dispatch** ([`RouteHelpers`]): helpers looked up and called by name.

mod catalog;
mod decorated;
mod error;
mod facade;
mod matcher;
mod render;

pub use catalog::{build_catalog, Catalog, CatalogCache};
pub use decorated::{
    sanitize_helper_name, DecoratedRoute, SegmentNames, FORMAT_KEY, MAX_INLINE_SEGMENTS,
    PARAMS_KEY, RESERVED_KEYS,
};
pub use error::HelperError;
pub use facade::{PathHelper, RouteHelpers};
pub use matcher::{match_route, MatchOutcome};
pub use render::{render, render_path, to_query};
