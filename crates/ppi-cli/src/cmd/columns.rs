//! `ppi columns` — list the column names of a materialized table.

use std::io::Write as _;

use clap::Args;

use ppi_core::StoreConfig;
use ppi_core::db::Store;

use crate::output::{OutputMode, render};

#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Table name: protein or interaction.
    pub table: String,
}

pub fn run_columns(
    args: &ColumnsArgs,
    config: &StoreConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let store = Store::open(config)?;
    let columns = store.columns(&args.table)?;

    render(output, &columns, |columns, w| {
        for column in columns {
            writeln!(w, "{column}")?;
        }
        Ok(())
    })
}
