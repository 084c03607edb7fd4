//! CLI entry point for the `routes` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use route_graph::cli::commands;
use route_graph::types::{RouteError, DEFAULT_READERS, DEFAULT_ROUNDS};

#[derive(Parser)]
#[command(
    name = "routes",
    about = "Cheapest-price lookups over a concurrent graph of city routes"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample network with concurrent readers and writers
    Demo {
        /// Number of reader threads
        #[arg(long, default_value_t = DEFAULT_READERS)]
        readers: usize,
        /// Operations per worker thread
        #[arg(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,
    },
    /// Find the cheapest price between two cities
    Price {
        /// Route as FROM:TO:PRICE (repeatable)
        #[arg(long = "route")]
        routes: Vec<String>,
        /// Origin city
        from: String,
        /// Destination city
        to: String,
    },
    /// Rename a city, merging it into an existing one if needed
    Rename {
        /// Route as FROM:TO:PRICE (repeatable)
        #[arg(long = "route")]
        routes: Vec<String>,
        /// Current city name
        old: String,
        /// New city name
        new: String,
    },
    /// List the cities and routes
    Routes {
        /// Route as FROM:TO:PRICE (repeatable)
        #[arg(long = "route")]
        routes: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let result = match cli.command {
        Commands::Demo { readers, rounds } => commands::cmd_demo(readers, rounds, json),
        Commands::Price { routes, from, to } => commands::cmd_price(&routes, &from, &to, json),
        Commands::Rename { routes, old, new } => commands::cmd_rename(&routes, &old, &new, json),
        Commands::Routes { routes } => commands::cmd_routes(&routes, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            RouteError::Io(_) => 1,
            RouteError::InvalidRouteSpec(_) | RouteError::InvalidPrice { .. } => 3,
            RouteError::Json(_) => 5,
        };
        process::exit(code);
    }
}
