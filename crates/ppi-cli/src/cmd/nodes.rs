//! `ppi number-of-nodes` — count the proteins in the (filtered) graph.

use std::io::Write as _;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use ppi_analysis::{load_graph, node_count};
use ppi_core::StoreConfig;

use crate::cmd::FilterArgs;
use crate::output::{OutputMode, render};

#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Path to the data.tsv source file.
    #[arg(short, long)]
    pub path: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Serialize)]
struct NodeCountReport {
    node_count: usize,
}

pub fn run_nodes(args: &NodesArgs, config: &StoreConfig, output: OutputMode) -> anyhow::Result<()> {
    let store = super::import_from_path(config, &args.path)?;
    let graph = load_graph(&store, &args.filter.to_filter())?;

    let report = NodeCountReport {
        node_count: node_count(&graph),
    };
    render(output, &report, |r, w| {
        writeln!(w, "Number of nodes: {}", r.node_count)
    })
}
