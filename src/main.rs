//! dayfill: fill a daily note with checkbox tasks gathered from a vault.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use dayfill::config::Config;
use dayfill::pipeline::{self, Context};
use dayfill::store::VaultStore;
use dayfill::surface::LineBuffer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dayfill")]
#[command(about = "Fill day todo list items", long_about = None)]
struct Args {
    /// Note whose `complete`, `incomplete` and `task_index` sections are rewritten
    #[arg(value_name = "TARGET")]
    target: PathBuf,

    /// Vault root to gather documents from
    #[arg(long, default_value = ".")]
    vault: PathBuf,

    /// Name of the current document (defaults to the target's file stem)
    #[arg(long)]
    current: Option<String>,

    /// Load settings from this file instead of ./dayfill.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the rewrite plan as JSON instead of writing the target
    #[arg(long)]
    dry_run: bool,

    /// Log progress
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("DAYFILL_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> dayfill::Result<()> {
    let cfg = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let current = args.current.or_else(|| {
        args.target
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    });

    let store = VaultStore::open(&args.vault, &cfg.file_extensions)?;

    if args.dry_run {
        let aggregation = pipeline::aggregate(&store, &cfg, current.as_deref())?;
        println!("{}", serde_json::to_string_pretty(&aggregation)?);
        return Ok(());
    }

    let mut buffer = LineBuffer::load(&args.target)?;
    let ctx = Context {
        store: &store,
        surface: &mut buffer,
        current,
    };
    let aggregation = pipeline::run(ctx, &cfg)?;
    if aggregation.applied.is_empty() {
        eprintln!("No target sections found in {}", args.target.display());
        return Ok(());
    }
    buffer.save(&args.target)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
