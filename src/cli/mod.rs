//! # CLI Module
//!
//! Command-line access to the helpers a declaration file produces.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! List every helper, most specific route first:
//!
//! ```bash
//! route-helpers routes --spec routes.yaml
//! route-helpers routes --spec routes.yaml --json
//! route-helpers routes --spec routes.yaml --method post
//! route-helpers routes --spec routes.yaml --watch
//! ```
//!
//! ### `path`
//!
//! Render one helper call:
//!
//! ```bash
//! route-helpers path --spec routes.yaml api_v1_cats_path --params '{"id": 1}'
//! # /api/v1/cats/1.json
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use route_helpers::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(cli)?;
//! ```

mod commands;


pub use commands::{format_table, parse_method, parse_params, route_rows, run, run_cli, Cli, Commands, RouteRow};
