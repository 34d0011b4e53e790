//! Multigraph construction from a filtered interaction set.
//!
//! Nodes are proteins referenced by at least one surviving interaction;
//! a protein with zero interactions after filtering gets no node. Every
//! interaction row becomes exactly one edge — parallel edges between the
//! same pair are preserved, never collapsed. The graph is transient: built
//! fresh per analysis request and never persisted.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, instrument};

use ppi_core::error::{PpiError, Result};
use ppi_core::record::{Interaction, Protein};

/// Node payload: the matching protein's attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinNode {
    pub id: i64,
    pub accession: String,
    pub name: String,
    pub taxid: String,
}

/// Edge payload: the interaction row's attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionEdge {
    pub id: i64,
    pub confidence_value: f64,
    pub pmid: String,
    pub interaction_type: String,
    pub detection_method: String,
}

/// An undirected multigraph over the filtered interaction set.
#[derive(Debug)]
pub struct InteractionGraph {
    /// Undirected graph: nodes = proteins, edges = interactions.
    pub graph: UnGraph<ProteinNode, InteractionEdge>,
    /// Mapping from protein id to petgraph `NodeIndex`.
    pub node_map: HashMap<i64, NodeIndex>,
}

impl InteractionGraph {
    /// Assemble the multigraph from interaction rows and the protein
    /// registry.
    ///
    /// # Errors
    ///
    /// [`PpiError::Integrity`] when an interaction references a protein id
    /// with no registry row. The normalizer's inner join makes this
    /// unreachable for data it produced, but the check stays.
    #[instrument(skip_all, fields(interactions = interactions.len()))]
    pub fn build(interactions: &[Interaction], proteins: &[Protein]) -> Result<Self> {
        let registry: HashMap<i64, &Protein> = proteins.iter().map(|p| (p.id, p)).collect();

        let mut graph = UnGraph::new_undirected();
        let mut node_map: HashMap<i64, NodeIndex> = HashMap::new();

        for interaction in interactions {
            let a = ensure_node(&mut graph, &mut node_map, &registry, interaction.protein_a_id)?;
            let b = ensure_node(&mut graph, &mut node_map, &registry, interaction.protein_b_id)?;

            graph.add_edge(
                a,
                b,
                InteractionEdge {
                    id: interaction.id,
                    confidence_value: interaction.confidence_value,
                    pmid: interaction.pmid.clone(),
                    interaction_type: interaction.interaction_type.clone(),
                    detection_method: interaction.detection_method.clone(),
                },
            );
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "assembled interaction graph"
        );
        Ok(Self { graph, node_map })
    }

    /// Number of nodes (distinct referenced proteins).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges (interaction rows, parallel edges included).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn ensure_node(
    graph: &mut UnGraph<ProteinNode, InteractionEdge>,
    node_map: &mut HashMap<i64, NodeIndex>,
    registry: &HashMap<i64, &Protein>,
    protein_id: i64,
) -> Result<NodeIndex> {
    if let Some(&idx) = node_map.get(&protein_id) {
        return Ok(idx);
    }

    let protein = registry.get(&protein_id).ok_or_else(|| {
        PpiError::Integrity(format!("interaction references unknown protein id {protein_id}"))
    })?;

    let idx = graph.add_node(ProteinNode {
        id: protein.id,
        accession: protein.accession.clone(),
        name: protein.name.clone(),
        taxid: protein.taxid.clone(),
    });
    node_map.insert(protein_id, idx);
    Ok(idx)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use ppi_core::record::{Interaction, Protein};

    pub fn protein(id: i64, accession: &str, name: &str) -> Protein {
        Protein {
            id,
            accession: accession.to_string(),
            name: name.to_string(),
            taxid: "9606".to_string(),
        }
    }

    pub fn interaction(id: i64, a: i64, b: i64, confidence: f64) -> Interaction {
        Interaction {
            id,
            protein_a_id: a,
            protein_b_id: b,
            confidence_value: confidence,
            pmid: "111".to_string(),
            interaction_type: "physical".to_string(),
            detection_method: "Y2H".to_string(),
        }
    }
}
