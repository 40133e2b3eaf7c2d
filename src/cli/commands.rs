use crate::helpers::{Catalog, DecoratedRoute};
use crate::hot_reload::watch_declarations;
use crate::registry::Registry;
use crate::runtime_config::HelperConfig;
use crate::spec::load_declarations;
use anyhow::Context;
use clap::{Parser, Subcommand};
use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command-line interface for route helpers
///
/// Lists the helpers a declaration file produces and renders individual
/// helper calls.
#[derive(Parser, Debug)]
#[command(name = "route-helpers")]
#[command(about = "Named path helpers for declared API routes", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every helper with its verb, template and required segments
    Routes {
        /// Path to the declaration file (YAML, JSON or TOML)
        #[arg(short, long)]
        spec: PathBuf,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Keep running and print the listing again whenever the file changes
        #[arg(long, default_value_t = false)]
        watch: bool,

        /// Only list routes reachable with this HTTP method (ANY routes always are)
        #[arg(short, long, value_parser = parse_method)]
        method: Option<Method>,
    },
    /// Render the path for one helper call
    Path {
        /// Path to the declaration file (YAML, JSON or TOML)
        #[arg(short, long)]
        spec: PathBuf,

        /// Helper name, e.g. api_v1_cats_path
        name: String,

        /// Helper arguments as a JSON object, e.g. '{"id": 1}'
        #[arg(short, long)]
        params: Option<String>,
    },
}

/// One row of the `routes` listing
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RouteRow {
    pub name: String,
    pub verb: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub required_segments: Vec<String>,
}

impl From<&DecoratedRoute> for RouteRow {
    fn from(route: &DecoratedRoute) -> Self {
        RouteRow {
            name: route.name().to_string(),
            verb: route.route().verb.to_string(),
            path: route.path().to_string(),
            version: route.version().map(str::to_string),
            required_segments: route
                .required_segments()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Rows in catalog order, optionally limited to routes accepting `method`.
#[must_use]
pub fn route_rows(catalog: &Catalog, method: Option<&Method>) -> Vec<RouteRow> {
    catalog
        .iter()
        .filter(|route| method.map_or(true, |m| route.route().verb.accepts(m)))
        .map(RouteRow::from)
        .collect()
}

/// Parse `--method`, case-insensitively.
pub fn parse_method(raw: &str) -> Result<Method, String> {
    Method::from_bytes(raw.to_ascii_uppercase().as_bytes())
        .map_err(|e| format!("invalid HTTP method '{raw}': {e}"))
}

/// Render the listing as an aligned text table.
#[must_use]
pub fn format_table(rows: &[RouteRow]) -> String {
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let path_width = rows.iter().map(|r| r.path.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let line = format!(
            "{:<name_width$}  {:<7}  {:<path_width$}  {}",
            row.name,
            row.verb,
            row.path,
            row.required_segments.join(", ")
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn print_routes(catalog: &Catalog, method: Option<&Method>, json: bool) -> anyhow::Result<()> {
    let rows = route_rows(catalog, method);
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &rows)?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(format_table(&rows).as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

/// Parse `--params`; absent means no arguments.
pub fn parse_params(raw: Option<&str>) -> anyhow::Result<Value> {
    match raw {
        None => Ok(Value::Object(serde_json::Map::new())),
        Some(raw) => serde_json::from_str(raw).context("--params must be valid JSON"),
    }
}

/// Parse arguments from the process and run the selected command.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Routes {
            spec,
            json,
            watch,
            method,
        } => {
            let registry = Arc::new(Registry::with_config(HelperConfig::from_env()));
            registry.replace(load_declarations(&spec)?);
            print_routes(&registry.decorated_routes(), method.as_ref(), json)?;

            if watch {
                let _watcher = watch_declarations(&spec, Arc::clone(&registry), move |catalog| {
                    if let Err(e) = print_routes(catalog, method.as_ref(), json) {
                        eprintln!("failed to print routes: {e}");
                    }
                })
                .with_context(|| format!("failed to watch {}", spec.display()))?;
                info!(path = %spec.display(), "Watching route declarations");
                loop {
                    std::thread::park();
                }
            }
            Ok(())
        }
        Commands::Path { spec, name, params } => {
            let args = parse_params(params.as_deref())?;
            let registry = Registry::global();
            registry.replace(load_declarations(&spec)?);
            let path = registry
                .decorated_routes()
                .path_for(&name, &args)
                .with_context(|| format!("failed to render '{name}'"))?;
            println!("{path}");
            Ok(())
        }
    }
}
