use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Pkgmirror - mirror package artifacts from explicit spec files
#[derive(Parser, Debug)]
#[command(name = "pkgmirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts/CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command that assembles a locator list
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Search for spec files under this path
    #[arg(short = 'd', long, default_value = ".")]
    pub basedir: PathBuf,

    /// Match spec file names by glob
    #[arg(short, long, default_value = "*.txt")]
    pub extension: String,

    /// Keep only locators matching this glob
    #[arg(short, long, default_value = "*")]
    pub search_pattern: String,

    /// Replace a path segment, given as OLD,NEW (repeatable)
    #[arg(short = 'r', long, value_name = "OLD,NEW", value_parser = parse_replace_pair)]
    pub replace_pattern: Vec<(String, String)>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the aggregated locator list without downloading anything
    List {
        #[command(flatten)]
        select: SelectArgs,
    },

    /// Mirror the aggregated locators into a local directory tree
    Mirror {
        #[command(flatten)]
        select: SelectArgs,

        /// Destination root for the mirror tree (created if missing)
        #[arg(long, value_name = "DIR")]
        dest: PathBuf,
    },
}

fn parse_replace_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(',') {
        Some((old, new)) if !old.is_empty() => Ok((old.to_string(), new.to_string())),
        _ => Err("expected OLD,NEW with a non-empty OLD".to_string()),
    }
}
