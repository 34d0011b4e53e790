//! `ppi bcentrality` — report the protein with the highest betweenness
//! centrality.

use std::path::PathBuf;

use clap::Args;

use ppi_analysis::{highest_betweenness, load_graph};
use ppi_core::StoreConfig;

use crate::cmd::FilterArgs;
use crate::output::{OutputMode, kv_line, render};

#[derive(Args, Debug)]
pub struct BcentralityArgs {
    /// Path to the data.tsv source file.
    #[arg(short, long)]
    pub path: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run_bcentrality(
    args: &BcentralityArgs,
    config: &StoreConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let store = super::import_from_path(config, &args.path)?;
    let graph = load_graph(&store, &args.filter.to_filter())?;
    let central = highest_betweenness(&graph)?;

    render(output, &central, |c, w| {
        kv_line(w, "accession", &c.accession)?;
        kv_line(w, "name", &c.name)?;
        kv_line(w, "taxid", &c.taxid)?;
        kv_line(w, "node_id", c.node_id)?;
        kv_line(w, "bc_value", c.bc_value)
    })
}
