//! `ppi tables` — list the materialized tables in the store.

use std::io::Write as _;

use clap::Args;

use ppi_core::StoreConfig;
use ppi_core::db::Store;

use crate::output::{OutputMode, render};

#[derive(Args, Debug)]
pub struct TablesArgs {}

pub fn run_tables(
    _args: &TablesArgs,
    config: &StoreConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let store = Store::open(config)?;
    let names = store.table_names()?;

    render(output, &names, |names, w| {
        if names.is_empty() {
            writeln!(w, "No tables (nothing imported yet)")?;
        }
        for name in names {
            writeln!(w, "{name}")?;
        }
        Ok(())
    })
}
