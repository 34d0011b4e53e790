//! `ppi import` — normalize a source file and replace the stored snapshot.

use std::io::Write as _;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use ppi_core::StoreConfig;

use crate::output::{OutputMode, render};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the data.tsv source file.
    #[arg(short, long)]
    pub path: PathBuf,
}

#[derive(Serialize)]
struct ImportReport {
    proteins: usize,
    interactions: usize,
}

pub fn run_import(args: &ImportArgs, config: &StoreConfig, output: OutputMode) -> anyhow::Result<()> {
    let store = super::import_from_path(config, &args.path)?;

    let proteins = ppi_core::db::query::all_proteins(&store)?;
    let interactions =
        ppi_core::db::query::filtered_interactions(&store, &ppi_core::InteractionFilter::default())?;

    let report = ImportReport {
        proteins: proteins.len(),
        interactions: interactions.len(),
    };
    render(output, &report, |r, w| {
        writeln!(
            w,
            "Imported {} proteins and {} interactions",
            r.proteins, r.interactions
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_flag_is_required() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ImportArgs,
        }

        let w = Wrapper::parse_from(["test", "-p", "data.tsv"]);
        assert_eq!(w.args.path, PathBuf::from("data.tsv"));

        assert!(Wrapper::try_parse_from(["test"]).is_err());
    }
}
