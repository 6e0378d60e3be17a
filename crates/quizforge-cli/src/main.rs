//! quizforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "Adaptive quiz tutor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive quiz session
    Run {
        /// Path to a .toml question catalog
        #[arg(long)]
        catalog: PathBuf,

        /// Learner name for new sessions
        #[arg(long, default_value = "Learner")]
        name: String,

        /// Session snapshot file (created if missing, resumed if present)
        #[arg(long, default_value = "./quizforge-session.json")]
        snapshot: PathBuf,

        /// Seed for deterministic question selection
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of questions this sitting
        #[arg(long)]
        limit: Option<usize>,

        /// Delegate to the remote engine service (falls back locally)
        #[arg(long)]
        remote: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question catalog TOML files
    Validate {
        /// Path to a catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Show statistics and insights for a saved session
    Stats {
        /// Session snapshot file
        #[arg(long)]
        snapshot: PathBuf,

        /// Catalog file, for the per-topic progress table
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Create starter config and example catalog
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            catalog,
            name,
            snapshot,
            seed,
            limit,
            remote,
            config,
        } => commands::run::execute(catalog, name, snapshot, seed, limit, remote, config).await,
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Stats { snapshot, catalog } => commands::stats::execute(snapshot, catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
