//! # API Declaration Module
//!
//! A small declaration layer in the style of Grape: APIs carry a prefix, one or
//! more versions and a response format, and declare endpoints inside nested
//! namespaces. APIs can mount other APIs.
//!
//! ## Example
//!
//! ```
//! use route_helpers::api::Api;
//! use route_helpers::route::Verb;
//!
//! let api = Api::builder("support")
//!     .prefix("api")
//!     .version("v1")
//!     .format("json")
//!     .routes(|r| {
//!         r.get_as("custom_name", "my_custom_route_name")
//!             .get("ping")
//!             .resource("cats", |cats| {
//!                 cats.get("/")
//!                     .route_param("id", |cat| cat.get(""))
//!                     .get(":id/owners")
//!                     .get(":id/owners/:owner_id")
//!             })
//!             .route(Verb::Any, "*path")
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(api.routes().len(), 7);
//! ```
//!
//! The resulting paths are `/api/:version/cats/:id(.json)` and so on; the
//! `:version` segment is bound per version when routes are decorated.

mod builder;

pub use builder::{ApiBuilder, Scope};

use crate::route::RouteDescriptor;
use std::sync::Arc;

/// A declared API: its own routes plus the APIs mounted into it
#[derive(Debug, Clone)]
pub struct Api {
    name: String,
    routes: Vec<Arc<RouteDescriptor>>,
    mounts: Vec<Arc<Api>>,
}

impl Api {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ApiBuilder {
        ApiBuilder::new(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Routes declared directly on this API.
    #[must_use]
    pub fn routes(&self) -> &[Arc<RouteDescriptor>] {
        &self.routes
    }

    #[must_use]
    pub fn mounts(&self) -> &[Arc<Api>] {
        &self.mounts
    }

    /// Own routes followed by every mounted API's routes, depth first.
    ///
    /// An API mounted twice yields its routes twice; the catalog collapses them.
    #[must_use]
    pub fn all_routes(&self) -> Vec<Arc<RouteDescriptor>> {
        let mut out = Vec::with_capacity(self.routes.len());
        self.collect_routes(&mut out);
        out
    }

    fn collect_routes(&self, out: &mut Vec<Arc<RouteDescriptor>>) {
        out.extend(self.routes.iter().map(Arc::clone));
        for mounted in &self.mounts {
            mounted.collect_routes(out);
        }
    }
}
