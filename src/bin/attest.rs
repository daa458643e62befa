//! # Attest CLI - verify directory trees against checksum manifests
//!
//! Command-line interface for the attest library.
//!
//! ## Usage
//! ```bash
//! # Report the recorded metadata of every tracked file
//! attest list tree.manifest ./data
//!
//! # Reconcile the tree against the manifest, one line per record
//! attest compare tree.manifest ./data --verbose
//!
//! # Human-readable sizes, several candidate directories
//! attest compare tree.manifest ./primary ./fallback -v -p
//! ```

use attest::{Comparer, Result, VerifyOptions};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Attest CLI - checksum-manifest verification for directory trees
#[derive(Parser)]
#[command(name = "attest")]
#[command(version)]
#[command(about = "Verify directory trees against binary checksum manifests")]
#[command(long_about = None)]
struct Cli {
    /// Emit one report line per manifest record
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Display sizes in human units instead of raw bytes
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recorded metadata without reading file contents
    #[command(alias = "ls")]
    List {
        /// Manifest file to read
        manifest: PathBuf,

        /// Candidate root directories, first match wins
        #[arg(default_value = ".")]
        dirs: Vec<PathBuf>,
    },

    /// Reconcile a directory tree against the manifest
    #[command(alias = "cmp")]
    Compare {
        /// Manifest file to read
        manifest: PathBuf,

        /// Candidate root directories, first match wins
        #[arg(default_value = ".")]
        dirs: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Log level comes from RUST_LOG; reporting verbosity is a separate flag.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main command runner
fn run(cli: Cli) -> Result<()> {
    let options = VerifyOptions {
        verbose: cli.verbose,
        pretty: cli.pretty,
    };

    match cli.command {
        Commands::List { manifest, dirs } => cmd_list(manifest, dirs, options),
        Commands::Compare { manifest, dirs } => cmd_compare(manifest, dirs, options),
    }
}

fn cmd_list(manifest: PathBuf, dirs: Vec<PathBuf>, options: VerifyOptions) -> Result<()> {
    let mut comparer = Comparer::open(&manifest, options)?;
    let totals = comparer.list(&dirs)?;

    println!(
        "{} {} ({})",
        "✓ Listed".green().bold(),
        totals,
        comparer.algorithm()
    );
    Ok(())
}

fn cmd_compare(manifest: PathBuf, dirs: Vec<PathBuf>, options: VerifyOptions) -> Result<()> {
    let mut comparer = Comparer::open(&manifest, options)?;
    let totals = comparer.compare(&dirs)?;

    println!(
        "{} {} ({}:{})",
        "✓ Verified".green().bold(),
        totals,
        comparer.algorithm(),
        hex::encode(comparer.checksum())
    );
    Ok(())
}
