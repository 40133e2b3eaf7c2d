//! # Route Module
//!
//! Route descriptors are the plain records the declaration layer hands to the
//! helper machinery: one per declared endpoint, carrying its verb, parsed path
//! template, versions, namespace and declared options.
//!
//! ## Path templates
//!
//! Templates use named segments and a single trailing catch-all:
//!
//! ```text
//! /api/:version/cats/:id/owners(.json)
//!  │    │        │    │          └── fixed extension
//!  │    │        │    └── named dynamic segment
//!  │    │        └── literal
//!  │    └── bound by the route's version
//!  └── literal prefix
//!
//! /api/:version/*path
//!               └── catch-all (must be last)
//! ```
//!
//! Malformed templates are rejected here with a [`TemplateError`], so every
//! descriptor reaching the catalog is well formed.

mod template;
mod types;
#[cfg(test)]
mod tests;

pub use template::{PathTemplate, Segment, TemplateError};
pub use types::{RouteDescriptor, UnknownVerb, Verb, EXPLICIT_NAME_OPTION};
