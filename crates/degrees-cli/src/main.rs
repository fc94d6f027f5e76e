//! Degrees CLI - how many movies apart are two actors?
//!
//! Loads a people/movies/stars data directory and finds the shortest chain
//! of co-starring credits between two people.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod prompt;

#[derive(Parser)]
#[command(name = "degrees")]
#[command(author = "Degrees Contributors")]
#[command(version)]
#[command(about = "Degrees of separation between actors", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest chain of movies between two people
    Connect {
        /// Data directory with people.csv, movies.csv and stars.csv
        #[arg(default_value = "large")]
        path: PathBuf,

        /// Source person (prompted for if omitted)
        #[arg(long)]
        from: Option<String>,

        /// Target person (prompted for if omitted)
        #[arg(long)]
        to: Option<String>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show counts for a data directory
    Stats {
        /// Data directory with people.csv, movies.csv and stars.csv
        #[arg(default_value = "large")]
        path: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Connect {
            path,
            from,
            to,
            json,
        } => commands::connect(&path, from.as_deref(), to.as_deref(), json),
        Commands::Stats { path, json } => commands::stats(&path, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
