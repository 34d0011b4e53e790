//! Subcommand handlers.
//!
//! Each module owns one subcommand: a clap `Args` struct plus a `run_*`
//! function taking the parsed args, the store configuration, and the
//! output mode.

pub mod bcentrality;
pub mod columns;
pub mod drop;
pub mod import;
pub mod neighbors;
pub mod nodes;
pub mod stats;
pub mod tables;

use std::path::Path;

use clap::Args;

use ppi_core::db::Store;
use ppi_core::normalize::{build_interactions, build_proteins};
use ppi_core::{InteractionFilter, StoreConfig, loader};

/// Interaction filter flags shared by the analysis subcommands.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Keep only interactions reported by this publication.
    #[arg(long)]
    pub pmid: Option<String>,

    /// Keep only interactions found with this detection method.
    #[arg(long)]
    pub detection_method: Option<String>,

    /// Keep only interactions of this type.
    #[arg(long)]
    pub interaction_type: Option<String>,

    /// Keep only interactions with at least this confidence (inclusive).
    #[arg(long = "confidence-gte")]
    pub confidence_value_gte: Option<f64>,

    /// Exclude interactions of a protein with itself.
    #[arg(long = "no-self-interaction")]
    pub disallow_self_interaction: bool,
}

impl FilterArgs {
    /// Convert the flags into the query layer's filter value.
    #[must_use]
    pub fn to_filter(&self) -> InteractionFilter {
        InteractionFilter {
            pmid: self.pmid.clone(),
            detection_method: self.detection_method.clone(),
            interaction_type: self.interaction_type.clone(),
            confidence_value_gte: self.confidence_value_gte,
            disallow_self_interaction: self.disallow_self_interaction,
        }
    }
}

/// Load a source file, normalize it, and replace the store contents.
///
/// Returns the open store so analysis commands can query it directly.
pub fn import_from_path(config: &StoreConfig, path: &Path) -> anyhow::Result<Store> {
    let records = loader::load_records(path)?;
    let proteins = build_proteins(&records);
    let interactions = build_interactions(&records, &proteins);

    let mut store = Store::open(config)?;
    store.import(&proteins, &interactions)?;
    Ok(store)
}
