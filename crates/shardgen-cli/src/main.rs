//! shardgen - renders sharded model build scripts for parallel CI runners.
//!
//! Each runner invokes this binary with its own `--index` and the shared
//! `--total`; the deterministic partitioner guarantees the runners cover
//! the whole catalog between them with no coordination.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use shardgen_core::model::catalogs;
use shardgen_core::{partition, render_scripts, Catalog, ShardSpec};

/// Render the build scripts for this runner's slice of the model catalog
#[derive(Parser)]
#[command(
    name = "shardgen",
    about = "Renders sharded model build scripts for parallel CI runners",
    version = env!("CARGO_PKG_VERSION"),
)]
struct Cli {
    /// Number of runners
    #[arg(long, default_value_t = 1)]
    total: usize,

    /// Index of the current runner
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Which job's catalog and output scripts to render
    #[arg(long, value_enum, default_value_t = Job::VadAsr)]
    job: Job,

    /// Load the model catalog from a TOML file instead of the built-in data
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

/// The two supported build jobs, each with its own catalog and script set
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Job {
    /// VAD + ASR APK/HAP build scripts
    VadAsr,
    /// QNN-accelerated VAD + ASR build script
    QnnVadAsr,
}

impl Job {
    fn builtin_catalog(self) -> Catalog {
        match self {
            Self::VadAsr => catalogs::vad_asr(),
            Self::QnnVadAsr => catalogs::qnn_vad_asr(),
        }
    }

    const fn scripts(self) -> &'static [&'static str] {
        match self {
            Self::VadAsr => catalogs::VAD_ASR_SCRIPTS,
            Self::QnnVadAsr => catalogs::QNN_VAD_ASR_SCRIPTS,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let spec = ShardSpec::new(cli.total, cli.index)?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_toml_file(path)?,
        None => cli.job.builtin_catalog(),
    };

    let assignment = partition(&catalog, &spec)?;
    println!("{}", assignment.summary());
    if let Some(extra) = assignment.extra_index {
        println!("{extra}/{}", assignment.catalog_len);
    }

    let written = render_scripts(cli.job.scripts(), &assignment.models)?;
    tracing::info!(
        "rendered {} of {} scripts",
        written.len(),
        cli.job.scripts().len()
    );
    Ok(())
}
