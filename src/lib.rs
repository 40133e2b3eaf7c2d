//! # route-helpers
//!
//! **route-helpers** turns the route table of a versioned web API into named,
//! callable path helpers. Every declared route gets a deterministic helper
//! name; routes that share a name are told apart at call time by the path
//! segments the caller supplies.
//!
//! ## Overview
//!
//! ```text
//! GET /api/:version/cats            (v1)  ┐
//! GET /api/:version/cats/:id        (v1)  ┘ api_v1_cats_path
//! GET /api/:version/cats/:id/owners (v1)    api_v1_cats_owners_path
//! ```
//!
//! `api_v1_cats_path({})` renders `/api/v1/cats.json`, and
//! `api_v1_cats_path({"id": 1})` renders `/api/v1/cats/1.json`.
//!
//! ## Architecture
//!
//! - **[`route`]** - Path templates, verbs and route descriptors
//! - **[`api`]** - Builder for declaring versioned APIs with nested namespaces and mounts
//! - **[`spec`]** - Loading API declarations from YAML, JSON or TOML files
//! - **[`helpers`]** - Naming, catalog building, matching and path rendering
//! - **[`registry`]** - Registered APIs and their memoized helper catalog
//! - **[`runtime_config`]** - Environment-driven helper configuration
//! - **[`hot_reload`]** - Rebuilding helpers when a declaration file changes
//! - **[`logging`]** - Structured logging setup
//! - **[`cli`]** - The `route-helpers` command-line tool
//!
//! ### Call Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Helpers as RouteHelpers
//!     participant Catalog
//!     participant Route as DecoratedRoute
//!
//!     Caller->>Helpers: call("api_v1_cats_path", {"id": 1})
//!     Helpers->>Catalog: responds_to(name)?
//!     Helpers->>Catalog: match_route(name, params)
//!     Catalog->>Catalog: name index → candidates<br/>(most segments first)
//!     Catalog-->>Helpers: Matched(route)
//!     Helpers->>Route: render(params)
//!     Route-->>Caller: "/api/v1/cats/1.json"
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use route_helpers::api::Api;
//! use route_helpers::registry::Registry;
//! use route_helpers::runtime_config::HelperConfig;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let api = Api::builder("support")
//!     .prefix("api")
//!     .version("v1")
//!     .format("json")
//!     .routes(|r| r.resource("cats", |cats| cats.get("/").route_param("id", |cat| cat.get(""))))
//!     .build()
//!     .unwrap();
//!
//! let registry = Registry::with_config(HelperConfig::default());
//! registry.register(Arc::new(api));
//!
//! let helpers = registry.helpers();
//! assert_eq!(helpers.call("api_v1_cats_path", None).unwrap(), "/api/v1/cats.json");
//! assert_eq!(
//!     helpers.call("api_v1_cats_path", Some(&json!({"id": 1}))).unwrap(),
//!     "/api/v1/cats/1.json"
//! );
//! ```
//!
//! ## Memoization
//!
//! The catalog is built on first access and shared as an `Arc` until the
//! registry changes. Registering or replacing APIs invalidates it;
//! [`Registry::invalidate`](registry::Registry::invalidate) forces a rebuild.

pub mod api;
pub mod cli;
pub mod helpers;
pub mod hot_reload;
pub mod logging;
pub mod registry;
pub mod route;
pub mod runtime_config;
pub mod spec;
pub mod validator;

pub use api::Api;
pub use helpers::{build_catalog, Catalog, DecoratedRoute, HelperError, RouteHelpers};
pub use registry::Registry;
pub use route::{PathTemplate, RouteDescriptor, Verb};
pub use spec::load_declarations;
