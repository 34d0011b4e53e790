#![forbid(unsafe_code)]
//! Graph assembly and topology metrics for PPI snapshots.
//!
//! # Overview
//!
//! Consumes the typed rows served by `ppi-core`'s query layer and derives a
//! transient undirected multigraph for topological analysis:
//!
//! ```text
//! filtered interactions + protein registry
//!        ↓  build::InteractionGraph::build()
//! InteractionGraph (petgraph UnGraph, parallel edges kept)
//!        ↓  betweenness::betweenness_centrality()
//!        ↓  analyze::{neighbors_of_name, highest_betweenness, node_count}
//! ```
//!
//! # Conventions
//!
//! - **Errors**: typed `ppi_core::PpiError` variants.
//! - **Logging**: `tracing` macros (`info!`, `debug!`, `#[instrument]`).

pub mod analyze;
pub mod betweenness;
pub mod build;

pub use analyze::{CentralProtein, highest_betweenness, load_graph, neighbors_of_name, node_count};
pub use betweenness::betweenness_centrality;
pub use build::{InteractionEdge, InteractionGraph, ProteinNode};
