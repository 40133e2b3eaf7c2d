//! Route declaration files.
//!
//! APIs can be declared in YAML, JSON or TOML instead of through the
//! [`Api`](crate::api::Api) builder. Each API may mount other APIs of the same
//! file by name:
//!
//! ```yaml
//! apis:
//!   - name: main
//!     prefix: api
//!     versions: [v1]
//!     format: json
//!     mounts: [other]
//!     routes:
//!       - { method: GET, namespace: /cats, path: ":id", as: cat }
//! ```
mod build;
mod load;
mod types;

pub use build::{build_apis, validate_declarations};
pub use load::{load_declarations, parse_declarations, DeclarationFormat};
pub use types::{ApiDecl, DeclarationFile, RouteDecl};
