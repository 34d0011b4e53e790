//! `ppi stats` — occurrence statistics over the stored interaction table.

use std::io::Write as _;

use clap::{Args, ValueEnum};

use ppi_core::db::Store;
use ppi_core::db::query::interaction_counts_by;
use ppi_core::{StatsColumn, StoreConfig};

use crate::output::{OutputMode, render};

/// Which interaction column to aggregate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsBy {
    Pmid,
    DetectionMethod,
    InteractionType,
    ConfidenceValue,
}

impl StatsBy {
    const fn column(self) -> StatsColumn {
        match self {
            Self::Pmid => StatsColumn::Pmid,
            Self::DetectionMethod => StatsColumn::DetectionMethod,
            Self::InteractionType => StatsColumn::InteractionType,
            Self::ConfidenceValue => StatsColumn::ConfidenceValue,
        }
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Column to aggregate: pmid, detection-method, interaction-type,
    /// confidence-value.
    #[arg(long, value_enum)]
    pub by: StatsBy,
}

pub fn run_stats(args: &StatsArgs, config: &StoreConfig, output: OutputMode) -> anyhow::Result<()> {
    let store = Store::open(config)?;
    let counts = interaction_counts_by(&store, args.by.column())?;

    render(output, &counts, |counts, w| {
        for c in counts {
            writeln!(w, "{}\t{}", c.value, c.count)?;
        }
        Ok(())
    })
}
