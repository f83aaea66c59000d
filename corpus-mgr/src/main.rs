//! corpus-mgr — speech corpus directory manager
//!
//! Bookkeeping CLI over the standardized corpus layout: flat-folder
//! import, scratch clearing, naming-convention migration, completion
//! statistics and completed-recording listing. The pipeline stages
//! themselves (resampling, diarization, transcription) are external tools
//! that deposit their outputs into the layout this tool maintains.

use anyhow::Result;
use clap::{ArgGroup, Parser};
use corpus_common::config::{self, TomlConfig};
use corpus_mgr::ops;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for corpus-mgr
#[derive(Parser, Debug)]
#[command(name = "corpus-mgr")]
#[command(about = "Directory bookkeeping for a speech-annotation corpus")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
struct Args {
    /// Import a flat folder of audio files into the data root
    #[arg(short = 'i', long = "import", value_name = "DIR", group = "mode")]
    import: Option<PathBuf>,

    /// Clear temp/ scratch directories under a corpus root
    #[arg(short = 'c', long = "clear", value_name = "DIR", group = "mode")]
    clear: Option<PathBuf>,

    /// Rename old-convention stage files under a corpus root
    #[arg(short = 'm', long = "migrate", value_name = "DIR", group = "mode")]
    migrate: Option<PathBuf>,

    /// Report completed-recording count and total audio time
    #[arg(short = 's', long = "stats", value_name = "DIR", group = "mode")]
    stats: Option<PathBuf>,

    /// List recordings with a finished aligned transcript
    #[arg(short = 'p', long = "print-completed", value_name = "DIR", group = "mode")]
    print_completed: Option<PathBuf>,

    /// Corpus data root receiving imports (overrides CORPUS_DATA_ROOT and
    /// the config file)
    #[arg(short = 'd', long = "data-root", value_name = "DIR")]
    data_root: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = TomlConfig::load();

    // Initialize tracing; RUST_LOG overrides the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!("Starting corpus-mgr v{}", env!("CARGO_PKG_VERSION"));

    if let Some(source) = &args.import {
        let data_root = config::resolve_data_root(args.data_root.as_deref(), &config);
        info!("Data root: {}", data_root.display());
        let report = ops::import_folder(source, &data_root)?;
        info!(
            "Imported {} recordings ({} entries skipped)",
            report.imported.len(),
            report.skipped
        );
    } else if let Some(root) = &args.clear {
        let report = ops::clear_temp(root)?;
        info!("Cleared scratch data for {} recordings", report.processed);
    } else if let Some(root) = &args.migrate {
        let report = ops::migrate(root)?;
        info!(
            "Migrated {} directories, {} files renamed",
            report.processed, report.renamed
        );
    } else if let Some(root) = &args.stats {
        ops::stats(root)?;
    } else if let Some(root) = &args.print_completed {
        ops::print_completed(root)?;
    }

    Ok(())
}
