//! Pkgmirror CLI - mirror package artifacts from explicit spec files
//!
//! Usage: pkgmirror <COMMAND>
//!
//! Commands:
//!   list    Print the aggregated locator list without downloading anything
//!   mirror  Mirror the aggregated locators into a local directory tree

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use pkgmirror::cli::{Cli, Commands, SelectArgs};
use pkgmirror::{
    find_spec_files, logging, render, HttpFetcher, MirrorEngine, SpecDocument, TransferFailure,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::List { select } => cmd_list(&select, cli.json),
        Commands::Mirror { select, dest } => cmd_mirror(&select, &dest, cli.json),
    }
}

/// Aggregate locators from every matching spec file under the base dir:
/// parse, apply replace pairs, filter by the search glob, dedup and sort.
fn collect_locators(select: &SelectArgs) -> Result<Vec<String>> {
    let mut locators: Vec<String> = Vec::new();

    for path in find_spec_files(&select.basedir, &select.extension)? {
        let mut doc = SpecDocument::parse(&path)
            .with_context(|| format!("failed to read spec file {}", path.display()))?;

        for (old, new) in &select.replace_pattern {
            doc.replace(old, new);
        }

        locators.extend(doc.search(&select.search_pattern)?.map(str::to_string));
    }

    locators.sort();
    locators.dedup();
    Ok(locators)
}

fn cmd_list(select: &SelectArgs, json: bool) -> Result<()> {
    let locators = collect_locators(select)?;

    if locators.is_empty() {
        eprintln!("No spec files found (extension: '{}')", select.extension);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string(&locators)?);
    } else {
        for locator in &locators {
            println!("{locator}");
        }
    }

    Ok(())
}

fn cmd_mirror(select: &SelectArgs, dest: &Path, json: bool) -> Result<()> {
    let locators = collect_locators(select)?;

    if locators.is_empty() {
        eprintln!("No spec files found (extension: '{}')", select.extension);
        return Ok(());
    }

    if !json {
        println!("📦 Pkgmirror");
        println!("Destination: {}", dest.display());
        println!("\n✓ Collected {} locators", locators.len());
    }

    fs::create_dir_all(dest)
        .with_context(|| format!("failed to create destination {}", dest.display()))?;

    let engine = MirrorEngine::new(HttpFetcher::new(), dest);
    let stats = engine.run(&locators)?;

    if json {
        let output = serde_json::json!({
            "event": "mirror",
            "status": if stats.is_clean() { "success" } else { "partial" },
            "read": stats.read,
            "written": stats.written,
            "success": stats.success,
            "skipped": stats.skipped,
            "fatal": stats.fatal.iter().map(failure_json).collect::<Vec<_>>(),
            "fail": stats.fail.iter().map(failure_json).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!();
        print!("{}", render(&stats));
    }

    Ok(())
}

fn failure_json(failure: &TransferFailure) -> serde_json::Value {
    serde_json::json!({
        "locator": failure.locator,
        "reason": failure.reason,
    })
}
