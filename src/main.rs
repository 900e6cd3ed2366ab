//! Route schema inspector.
//!
//! Loads a TOML route schema and prints what the library derives from it.
//!
//! # Architecture Overview
//!
//! ```text
//!   schema.toml ──▶ config (load + validate) ──▶ RouteSchema
//!                                                   │
//!                    ┌──────────────────────────────┼──────────────────────┐
//!                    ▼                              ▼                      ▼
//!              paths / href                  render (JSON)        nav (MemoryRouter)
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use route_schema::config::{load_config, ConfigWatcher, ObservabilityConfig, RouterConfig};
use route_schema::navigation::{MemoryHistory, MemoryRouter, Nav, NavigateOptions, Target};
use route_schema::observability::{apply_log_level, init_logging};
use route_schema::routing::{resolve_paths, RouteSchema};

#[derive(Parser)]
#[command(name = "route-schema")]
#[command(about = "Inspect typed route schemas", long_about = None)]
struct Cli {
    /// Route schema file (TOML).
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the schema file
    Check,
    /// List every route with its path template
    Paths,
    /// Print the render tree as JSON
    Render,
    /// Build a concrete path from route keys and parameters
    Href {
        /// Route keys from the root, e.g. `users user`
        keys: Vec<String>,
        /// Parameters consumed by parameterized routes, in order
        #[arg(short, long = "param")]
        params: Vec<String>,
    },
    /// Simulate a navigation on an in-memory history
    Nav {
        /// Current URL before navigating
        #[arg(long, default_value = "/")]
        from: String,
        /// Target path, or a history delta such as -1
        #[arg(allow_hyphen_values = true)]
        target: String,
        /// Keep every current query parameter
        #[arg(long)]
        keep_search: bool,
        /// Keep only these current query parameters
        #[arg(long = "keep")]
        keep: Vec<String>,
        /// Extra query parameters as KEY=VALUE
        #[arg(long)]
        search: Vec<String>,
        #[arg(long)]
        hash: Option<String>,
        #[arg(long)]
        replace: bool,
        /// Update history without a route render
        #[arg(long)]
        silent: bool,
    },
    /// Reprint the path list whenever the file changes
    Watch,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let logging = init_logging(&ObservabilityConfig::default());
    let config = load_config(&cli.file)?;

    match logging {
        Ok(handle) => {
            if let Err(e) = apply_log_level(&handle, &config.observability) {
                eprintln!("Failed to apply log level: {}", e);
            }
        }
        Err(e) => eprintln!("Logging already initialized: {}", e),
    }
    tracing::debug!(file = %cli.file.display(), "Route schema loaded");

    match cli.command {
        Commands::Check => {
            let count = config.schema().render_tree().node_count();
            println!("OK: {} route object(s)", count);
        }
        Commands::Paths => print_paths(&config),
        Commands::Render => {
            let tree = config.schema().render_tree();
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        Commands::Href { keys, params } => {
            let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            let params: Vec<&str> = params.iter().map(String::as_str).collect();
            let paths = config.schema().paths().href(&keys, &params)?;
            println!("{}", paths);
        }
        Commands::Nav {
            from,
            target,
            keep_search,
            keep,
            search,
            hash,
            replace,
            silent,
        } => {
            let history = MemoryHistory::new(&from);
            let router = MemoryRouter::new(history.clone());
            let nav = Nav::new(router.clone(), history.clone())
                .with_fallback_path(config.navigation.fallback_path.clone());

            let mut options = NavigateOptions::new().replace(replace).silent(silent);
            if keep_search {
                options = options.keep_search();
            } else if !keep.is_empty() {
                options = options.keep_search_keys(keep);
            }
            if !search.is_empty() {
                options = options.search(parse_pairs(&search)?);
            }
            if let Some(hash) = hash {
                options = options.hash(hash);
            }

            let target = match target.parse::<i32>() {
                Ok(delta) => Target::Delta(delta),
                Err(_) => Target::Path(target),
            };
            nav.navigate(target, options)?;

            println!("{}", history.current().url);
            println!("entries: {}, renders: {}", history.len(), router.renders());
        }
        Commands::Watch => watch(&cli.file, &config)?,
    }

    Ok(())
}

fn print_paths(config: &RouterConfig) {
    fn walk(schema: &RouteSchema, keys: &str, prefix: &str) {
        let template = resolve_paths(prefix, schema.config().kind.router_path().unwrap_or(""));
        let marker = if schema.config().kind.is_param() { " (params)" } else { "" };
        let label = if keys.is_empty() { "<root>" } else { keys };
        println!("{:<32} {}{}", label, template, marker);
        for (key, child) in schema.children() {
            let child_keys = if keys.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", keys, key)
            };
            walk(child, &child_keys, &template);
        }
    }
    walk(&config.schema(), "", "");
}

fn parse_pairs(raw: &[String]) -> Result<Vec<(String, String)>, String> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| format!("Expected KEY=VALUE, got '{}'", pair))
        })
        .collect()
}

fn watch(file: &std::path::Path, config: &RouterConfig) -> Result<(), Box<dyn Error>> {
    print_paths(config);
    let (watcher, mut updates) = ConfigWatcher::new(file);
    let _watcher = watcher.with_current(config.clone()).run()?;
    while let Some(update) = updates.blocking_recv() {
        println!();
        print_paths(&update.config);
    }
    Ok(())
}
