#![forbid(unsafe_code)]
//! Core pipeline for protein-protein interaction (PPI) datasets.
//!
//! Pipeline:
//!
//! ```text
//! data.tsv
//!    ↓  loader::load_records()
//! Vec<RawInteractionRecord>
//!    ↓  normalize::build_proteins() / build_interactions()
//! protein registry + interaction table
//!    ↓  db::Store::import()            (full transactional replace)
//! SQLite snapshot
//!    ↓  db::query::filtered_interactions() / all_proteins()
//! typed rows for graph assembly (ppi-analysis)
//! ```
//!
//! # Conventions
//!
//! - **Errors**: typed [`PpiError`] everywhere; no retries.
//! - **Logging**: `tracing` macros (`info!`, `debug!`, `#[instrument]`).

pub mod config;
pub mod db;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod record;

pub use config::StoreConfig;
pub use db::query::{InteractionFilter, StatsColumn, ValueCount};
pub use db::{Store, drop_database};
pub use error::{PpiError, Result};
pub use record::{Interaction, Protein, RawInteractionRecord};
