//! Topology queries over an assembled interaction graph.
//!
//! The operations here back the analysis command surface: neighbor lookup
//! by protein name, the highest-betweenness protein, and node counts. A
//! convenience loader pulls the filtered snapshot out of the store and
//! assembles the graph in one call.

use serde::Serialize;
use tracing::{info, instrument};

use ppi_core::db::query::{self, InteractionFilter};
use ppi_core::db::Store;
use ppi_core::error::{PpiError, Result};

use crate::betweenness::betweenness_centrality;
use crate::build::InteractionGraph;

/// The highest-betweenness protein with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralProtein {
    pub node_id: i64,
    pub accession: String,
    pub name: String,
    pub taxid: String,
    pub bc_value: f64,
}

/// Build the graph for the filtered snapshot currently in the store.
///
/// # Errors
///
/// Propagates query errors ([`PpiError::Query`] before any import) and the
/// builder's integrity check.
#[instrument(skip(store))]
pub fn load_graph(store: &Store, filter: &InteractionFilter) -> Result<InteractionGraph> {
    let interactions = query::filtered_interactions(store, filter)?;
    let proteins = query::all_proteins(store)?;
    InteractionGraph::build(&interactions, &proteins)
}

/// Names of the neighbors of the node whose `name` attribute matches.
///
/// Protein names are not unique: when several nodes share the name, the
/// scan runs over all nodes in index order and the last match wins (an
/// overwrite, not a first-match guarantee). Each neighbor name appears
/// once even when parallel edges connect the pair. A self-interacting
/// protein is its own neighbor: a loop edge puts the node in its own
/// adjacency, so its name shows up in the result.
///
/// # Errors
///
/// [`PpiError::NotFound`] when no node carries the name.
pub fn neighbors_of_name(ig: &InteractionGraph, name: &str) -> Result<Vec<String>> {
    let mut matched = None;
    for idx in ig.graph.node_indices() {
        if ig.graph[idx].name == name {
            matched = Some(idx);
        }
    }

    let Some(node) = matched else {
        return Err(PpiError::NotFound(format!("protein named '{name}'")));
    };

    let mut seen = std::collections::HashSet::new();
    let mut names = Vec::new();
    for neighbor in ig.graph.neighbors(node) {
        if seen.insert(neighbor) {
            names.push(ig.graph[neighbor].name.clone());
        }
    }
    Ok(names)
}

/// The protein with the highest betweenness centrality.
///
/// Ranking is ascending by score with ties broken by protein id ascending,
/// last one wins — so among equal scores the numerically largest id is
/// returned.
///
/// # Errors
///
/// [`PpiError::EmptyGraph`] when the graph has zero nodes.
#[instrument(skip_all)]
pub fn highest_betweenness(ig: &InteractionGraph) -> Result<CentralProtein> {
    if ig.node_count() == 0 {
        return Err(PpiError::EmptyGraph);
    }

    let scores = betweenness_centrality(ig);

    let mut best: Option<(i64, f64)> = None;
    for idx in ig.graph.node_indices() {
        let id = ig.graph[idx].id;
        let score = scores[idx.index()];
        let take = match best {
            None => true,
            Some((best_id, best_score)) => match score.partial_cmp(&best_score) {
                Some(std::cmp::Ordering::Greater) => true,
                Some(std::cmp::Ordering::Equal) => id > best_id,
                _ => false,
            },
        };
        if take {
            best = Some((id, score));
        }
    }

    // node_count > 0 guarantees a winner.
    let (id, bc_value) = best.ok_or(PpiError::EmptyGraph)?;
    let idx = ig
        .node_map
        .get(&id)
        .copied()
        .ok_or_else(|| PpiError::Integrity(format!("winner id {id} missing from node map")))?;
    let node = &ig.graph[idx];

    info!(protein = %node.accession, bc_value, "highest betweenness centrality");
    Ok(CentralProtein {
        node_id: node.id,
        accession: node.accession.clone(),
        name: node.name.clone(),
        taxid: node.taxid.clone(),
        bc_value,
    })
}

/// Cardinality of the node set.
#[must_use]
pub fn node_count(ig: &InteractionGraph) -> usize {
    ig.node_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::fixtures::{interaction, protein};
    use ppi_core::record::{Interaction, Protein};

    fn path_graph() -> InteractionGraph {
        // ProtB sits between ProtA and ProtC.
        let proteins = vec![
            protein(1, "P1", "ProtA"),
            protein(2, "P2", "ProtB"),
            protein(3, "P3", "ProtC"),
        ];
        let interactions = vec![interaction(1, 2, 3, 0.5), interaction(2, 1, 2, 0.9)];
        InteractionGraph::build(&interactions, &proteins).expect("build graph")
    }

    #[test]
    fn neighbors_by_name() {
        let ig = path_graph();
        let mut names = neighbors_of_name(&ig, "ProtB").expect("neighbors");
        names.sort();
        assert_eq!(names, vec!["ProtA", "ProtC"]);

        let names = neighbors_of_name(&ig, "ProtA").expect("neighbors");
        assert_eq!(names, vec!["ProtB"]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let ig = path_graph();
        let err = neighbors_of_name(&ig, "ProtZ").expect_err("unknown name");
        assert!(matches!(err, PpiError::NotFound(_)));
    }

    #[test]
    fn duplicate_names_resolve_to_the_last_match() {
        // Two distinct proteins named "Shared"; the scan's last match is
        // the higher node index, connected only to ProtD.
        let proteins = vec![
            protein(1, "P1", "Shared"),
            protein(2, "P2", "ProtB"),
            protein(3, "P3", "Shared"),
            protein(4, "P4", "ProtD"),
        ];
        let interactions = vec![interaction(1, 1, 2, 0.5), interaction(2, 3, 4, 0.9)];
        let ig = InteractionGraph::build(&interactions, &proteins).expect("build graph");

        let names = neighbors_of_name(&ig, "Shared").expect("neighbors");
        assert_eq!(names, vec!["ProtD"]);
    }

    #[test]
    fn self_interacting_protein_is_its_own_neighbor() {
        let proteins = vec![protein(1, "P1", "ProtA"), protein(2, "P2", "ProtB")];
        let interactions = vec![interaction(1, 1, 2, 0.5), interaction(2, 1, 1, 0.9)];
        let ig = InteractionGraph::build(&interactions, &proteins).expect("build graph");

        let mut names = neighbors_of_name(&ig, "ProtA").expect("neighbors");
        names.sort();
        assert_eq!(names, vec!["ProtA", "ProtB"]);

        // ProtB has no loop, so it only sees ProtA.
        let names = neighbors_of_name(&ig, "ProtB").expect("neighbors");
        assert_eq!(names, vec!["ProtA"]);
    }

    #[test]
    fn parallel_edges_do_not_duplicate_neighbors() {
        let proteins = vec![protein(1, "P1", "ProtA"), protein(2, "P2", "ProtB")];
        let interactions = vec![interaction(1, 1, 2, 0.5), interaction(2, 1, 2, 0.9)];
        let ig = InteractionGraph::build(&interactions, &proteins).expect("build graph");

        let names = neighbors_of_name(&ig, "ProtA").expect("neighbors");
        assert_eq!(names, vec!["ProtB"]);
    }

    #[test]
    fn path_center_wins_betweenness() {
        let ig = path_graph();
        let central = highest_betweenness(&ig).expect("central protein");

        assert_eq!(central.node_id, 2);
        assert_eq!(central.accession, "P2");
        assert_eq!(central.name, "ProtB");
        assert!((central.bc_value - 1.0).abs() < 1e-10);
    }

    #[test]
    fn all_zero_ties_resolve_to_largest_id() {
        // Single edge: both nodes score 0.0, the larger id wins.
        let proteins = vec![protein(1, "P1", "ProtA"), protein(2, "P2", "ProtB")];
        let interactions = vec![interaction(1, 1, 2, 0.5)];
        let ig = InteractionGraph::build(&interactions, &proteins).expect("build graph");

        let central = highest_betweenness(&ig).expect("central protein");
        assert_eq!(central.node_id, 2);
        assert!(central.bc_value.abs() < 1e-10);
    }

    #[test]
    fn empty_graph_is_an_error() {
        let ig = InteractionGraph::build(&[], &[]).expect("build graph");
        let err = highest_betweenness(&ig).expect_err("empty graph");
        assert!(matches!(err, PpiError::EmptyGraph));
        assert_eq!(node_count(&ig), 0);
    }

    #[test]
    fn node_count_matches_distinct_referenced_ids() {
        let proteins: Vec<Protein> = (1..=5)
            .map(|id| protein(id, &format!("P{id}"), &format!("Prot{id}")))
            .collect();
        let interactions: Vec<Interaction> = vec![
            interaction(1, 1, 2, 0.5),
            interaction(2, 2, 1, 0.6),
            interaction(3, 2, 3, 0.7),
        ];
        let ig = InteractionGraph::build(&interactions, &proteins).expect("build graph");
        assert_eq!(node_count(&ig), 3);
    }
}
