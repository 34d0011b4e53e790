//! `ppi drop` — permanently delete the storage file.

use clap::Args;

use ppi_core::{StoreConfig, drop_database};

use crate::output::{OutputMode, render_success};

#[derive(Args, Debug)]
pub struct DropArgs {}

pub fn run_drop(_args: &DropArgs, config: &StoreConfig, output: OutputMode) -> anyhow::Result<()> {
    // Missing storage is an error, not a silent success.
    drop_database(config)?;
    render_success(output, "Storage dropped")
}
