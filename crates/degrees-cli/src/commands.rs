//! CLI command implementations.

use crate::prompt::Prompt;
use colored::Colorize;
use degrees_graph::{NameResolver, SearchEngine};
use degrees_loader::{load_directory, LoadResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Error)]
enum CliError {
    #[error("Source person not found.")]
    SourceNotFound,
    #[error("Target person not found.")]
    TargetNotFound,
}

/// Loads a data directory behind a spinner.
fn load(path: &Path, quiet: bool) -> Result<LoadResult> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Loading data...");

    let result = load_directory(path)?;

    spinner.finish_and_clear();

    if !quiet {
        println!(
            "{} Data loaded: {} people, {} movies, {} stars in {}ms",
            "✓".green(),
            result.people_loaded.to_string().cyan(),
            result.groups_loaded.to_string().cyan(),
            result.memberships_loaded.to_string().cyan(),
            result.duration_ms
        );
        if result.rows_skipped > 0 {
            println!(
                "{} skipped {} malformed rows",
                "⚠".yellow(),
                result.rows_skipped
            );
        }
    }

    Ok(result)
}

/// Finds and prints the shortest chain between two people.
pub fn connect(path: &Path, from: Option<&str>, to: Option<&str>, json: bool) -> Result<()> {
    let loaded = load(path, json)?;
    let store = &loaded.store;
    let resolver = NameResolver::new(store);

    // Keep stdout clean for the JSON document.
    let output: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut prompt = Prompt::new(io::stdin().lock(), output);

    let source_name = match from {
        Some(name) => name.to_string(),
        None => prompt.ask("Name: ")?,
    };
    let source = prompt
        .pick_person(&resolver, &source_name)?
        .ok_or(CliError::SourceNotFound)?;

    let target_name = match to {
        Some(name) => name.to_string(),
        None => prompt.ask("Name: ")?,
    };
    let target = prompt
        .pick_person(&resolver, &target_name)?
        .ok_or(CliError::TargetNotFound)?;

    debug!(%source, %target, "resolved names");

    let report = SearchEngine::new(store).search(source.as_str(), target.as_str())?;

    if json {
        let hops = report
            .path
            .as_ref()
            .map(|path| path.describe(store, source.as_str()));
        let output = serde_json::json!({
            "source": source,
            "target": target,
            "connected": report.is_connected(),
            "degrees": report.path.as_ref().map(|path| path.degrees()),
            "path": report.path,
            "hops": hops,
            "explored": report.explored,
            "nodesCreated": report.nodes_created,
            "frontierPeak": report.frontier_peak,
            "queryTimeMs": report.query_time_ms,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &report.path {
        None => println!("{}", "Not connected.".yellow()),
        Some(path) => {
            println!(
                "{} degrees of separation.",
                path.degrees().to_string().cyan().bold()
            );
            for hop in path.describe(store, source.as_str()) {
                println!("{}", hop);
            }
        }
    }

    Ok(())
}

/// Prints counts for a data directory.
pub fn stats(path: &Path, json: bool) -> Result<()> {
    let loaded = load(path, true)?;
    let stats = loaded.store.stats();

    if json {
        let output = serde_json::json!({
            "people": stats.people,
            "movies": stats.groups,
            "stars": stats.memberships,
            "skippedRows": loaded.rows_skipped,
            "loadTimeMs": loaded.duration_ms,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Degrees Status".cyan().bold());
    println!("  Data:     {}", path.display());
    println!("  People:   {}", stats.people);
    println!("  Movies:   {}", stats.groups);
    println!("  Stars:    {}", stats.memberships);
    println!("  Skipped:  {}", loaded.rows_skipped);
    println!("  Loaded in {}ms", loaded.duration_ms);

    Ok(())
}
