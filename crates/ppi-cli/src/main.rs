#![forbid(unsafe_code)]
//! `ppi` — import tab-separated protein-protein interaction data and run
//! topology analysis over the resulting multigraph.

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use output::OutputMode;
use ppi_core::StoreConfig;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ppi: protein-protein interaction network analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Override the storage file location (default: ~/.ppi/ppi.sqlite3).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    fn store_config(&self) -> StoreConfig {
        self.db
            .as_ref()
            .map_or_else(StoreConfig::default, StoreConfig::new)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Import a data.tsv file, replacing the stored snapshot",
        after_help = "EXAMPLES:\n    ppi import -p data.tsv\n    ppi import -p data.tsv --db /tmp/ppi.sqlite3"
    )]
    Import(cmd::import::ImportArgs),

    #[command(
        about = "Report the protein with the highest betweenness centrality",
        after_help = "EXAMPLES:\n    ppi bcentrality -p data.tsv\n    ppi bcentrality -p data.tsv --confidence-gte 0.5 --json"
    )]
    Bcentrality(cmd::bcentrality::BcentralityArgs),

    #[command(
        about = "Count the nodes of the (filtered) interaction graph",
        after_help = "EXAMPLES:\n    ppi number-of-nodes -p data.tsv\n    ppi number-of-nodes -p data.tsv --no-self-interaction"
    )]
    NumberOfNodes(cmd::nodes::NodesArgs),

    #[command(
        about = "List the interaction partners of a named protein",
        after_help = "EXAMPLES:\n    ppi neighbors -p data.tsv -n ProtB"
    )]
    Neighbors(cmd::neighbors::NeighborsArgs),

    #[command(
        about = "Occurrence statistics over the stored interaction table",
        after_help = "EXAMPLES:\n    ppi stats --by detection-method\n    ppi stats --by pmid --json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(about = "List the materialized tables")]
    Tables(cmd::tables::TablesArgs),

    #[command(about = "List the column names of a materialized table")]
    Columns(cmd::columns::ColumnsArgs),

    #[command(about = "Permanently delete the storage file")]
    Drop(cmd::drop::DropArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("PPI_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "ppi=debug,info"
        } else {
            "ppi=info,warn"
        })
    });

    let format = env::var("PPI_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry.with(fmt::layer().json().with_ansi(false)).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = cli.store_config();
    let output = cli.output_mode();

    match cli.command {
        Commands::Import(ref args) => cmd::import::run_import(args, &config, output),
        Commands::Bcentrality(ref args) => cmd::bcentrality::run_bcentrality(args, &config, output),
        Commands::NumberOfNodes(ref args) => cmd::nodes::run_nodes(args, &config, output),
        Commands::Neighbors(ref args) => cmd::neighbors::run_neighbors(args, &config, output),
        Commands::Stats(ref args) => cmd::stats::run_stats(args, &config, output),
        Commands::Tables(ref args) => cmd::tables::run_tables(args, &config, output),
        Commands::Columns(ref args) => cmd::columns::run_columns(args, &config, output),
        Commands::Drop(ref args) => cmd::drop::run_drop(args, &config, output),
    }
}
