//! Betweenness centrality via Brandes' algorithm.
//!
//! Works on the undirected interaction multigraph. Shortest paths treat
//! parallel edges as a single connection — two reported interactions
//! between the same pair still cost one hop, and the path count does not
//! multiply. Scores use the standard normalization for n > 2,
//! `1 / ((n - 1) * (n - 2))`, under which both endpoints of a two-node
//! graph score 0.0.
//!
//! Complexity: O(V * E) for unweighted graphs.

use std::collections::{HashSet, VecDeque};

use petgraph::visit::EdgeRef;
use tracing::instrument;

use crate::build::InteractionGraph;

/// Compute betweenness centrality for every node.
///
/// Returns scores indexed by petgraph node index. Disconnected nodes and
/// nodes no shortest path passes through score 0.0.
#[must_use]
#[instrument(skip_all)]
pub fn betweenness_centrality(ig: &InteractionGraph) -> Vec<f64> {
    let g = &ig.graph;
    let n = g.node_count();

    if n == 0 {
        return Vec::new();
    }

    // Collapse parallel edges: unique neighbor lists per node, loops dropped.
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for node in g.node_indices() {
        let vi = node.index();
        let mut seen = HashSet::new();
        for edge in g.edges(node) {
            let wi = if edge.source() == node {
                edge.target().index()
            } else {
                edge.source().index()
            };
            if wi != vi && seen.insert(wi) {
                adjacency[vi].push(wi);
            }
        }
    }

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    // For each source node s, run Brandes' BFS-based accumulation.
    for si in 0..n {
        // Stack: nodes in order of discovery (farthest popped first).
        let mut stack: Vec<usize> = Vec::with_capacity(n);

        // predecessors[w] = nodes immediately preceding w on shortest paths
        // from s.
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma: Vec<f64> = vec![0.0; n];
        sigma[si] = 1.0;

        // dist[t]: distance from s to t (-1 = unvisited).
        let mut dist: Vec<i64> = vec![-1; n];
        dist[si] = 0;

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);

        while let Some(vi) = queue.pop_front() {
            stack.push(vi);

            for &wi in &adjacency[vi] {
                // First visit to w?
                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(wi);
                }

                // Shortest path to w via v?
                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(vi);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order.
        let mut delta: Vec<f64> = vec![0.0; n];

        while let Some(wi) = stack.pop() {
            for &vi in &predecessors[wi] {
                if sigma[wi] > 0.0 {
                    delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
                }
            }

            if wi != si {
                cb[wi] += delta[wi];
            }
        }
    }

    // Both directions of every unordered pair were accumulated; the
    // normalization factor absorbs the doubling. For n <= 2 no node can lie
    // between two others, so everything stays at 0.0.
    if n > 2 {
        #[allow(clippy::cast_precision_loss)]
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for score in &mut cb {
            *score *= scale;
        }
    }

    cb
}
