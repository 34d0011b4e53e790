//! `ppi neighbors` — list the interaction partners of a named protein.

use std::io::Write as _;
use std::path::PathBuf;

use clap::Args;

use ppi_analysis::{load_graph, neighbors_of_name};
use ppi_core::StoreConfig;

use crate::cmd::FilterArgs;
use crate::output::{OutputMode, render};

#[derive(Args, Debug)]
pub struct NeighborsArgs {
    /// Path to the data.tsv source file.
    #[arg(short, long)]
    pub path: PathBuf,

    /// Protein name to look up (names may be ambiguous; the last matching
    /// node wins).
    #[arg(short, long)]
    pub name: String,

    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run_neighbors(
    args: &NeighborsArgs,
    config: &StoreConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let store = super::import_from_path(config, &args.path)?;
    let graph = load_graph(&store, &args.filter.to_filter())?;
    let neighbors = neighbors_of_name(&graph, &args.name)?;

    render(output, &neighbors, |names, w| {
        for name in names {
            writeln!(w, "{name}")?;
        }
        Ok(())
    })
}
