//! Per-month distance oracle.
//!
//! For a fixed network snapshot, [`PathOracle`] answers "how many edge hops
//! separate node `n` from the nearest node of category `c`?".  Shortcuts are
//! free; edges cost one hop.  The table is rebuilt once per month and stays
//! fixed while the days of that month are simulated.
//!
//! # Search order
//!
//! Each source runs a FIFO breadth-first search.  When a node is dequeued,
//! its outgoing shortcut (only if the node is the shortcut's entry) is
//! relaxed first at cost 0, then its incident edges in creation order at
//! cost 1.  A zero-cost shortcut target is appended to the back of the queue
//! like any other node, and the first distance assigned to a node is final.
//! This exact order decides which distances the daily simulator sees, so it
//! must not be replaced by a 0-1 BFS or Dijkstra.
//!
//! Node degree is capped by the slot limit, so one search is O(N) and a full
//! recompute is O(N²).

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tc_core::{Category, NodeId};

use crate::NetworkGraph;

/// `node → category → minimum hop distance`.  A missing entry means the
/// category is unreachable from that node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOracle {
    nearest: Vec<FxHashMap<Category, u32>>,
}

impl PathOracle {
    /// An oracle with no nodes; every query returns `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the table for the current state of `graph`.
    pub fn compute(graph: &NetworkGraph) -> Self {
        let mut oracle = Self::empty();
        oracle.recompute(graph);
        oracle
    }

    /// Rebuild the table for the current state of `graph`.
    pub fn recompute(&mut self, graph: &NetworkGraph) {
        let nodes = graph.nodes();
        self.nearest = nodes
            .iter()
            .map(|source| {
                let dist = single_source_hops(graph, source.id);
                let mut nearest: FxHashMap<Category, u32> = FxHashMap::default();
                for (node, d) in nodes.iter().zip(dist) {
                    let Some(d) = d else { continue };
                    nearest
                        .entry(node.category)
                        .and_modify(|best| *best = (*best).min(d))
                        .or_insert(d);
                }
                nearest
            })
            .collect();
        tracing::debug!(nodes = nodes.len(), "path oracle recomputed");
    }

    /// Hop distance from `node` to the nearest node of `category`.
    #[inline]
    pub fn distance(&self, node: NodeId, category: Category) -> Option<u32> {
        self.nearest.get(node.index())?.get(&category).copied()
    }

    /// Number of nodes covered by the table.
    pub fn node_count(&self) -> usize {
        self.nearest.len()
    }
}

/// Hop distances from `source` to every node (indexed by `NodeId`), `None`
/// for unreachable nodes.
pub fn single_source_hops(graph: &NetworkGraph, source: NodeId) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    dist[source.index()] = Some(0);
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let Some(here) = dist[node.index()] else { continue };

        if let Some(exit) = graph.shortcut_exit(node) {
            if dist[exit.index()].is_none() {
                dist[exit.index()] = Some(here);
                queue.push_back(exit);
            }
        }

        for edge in graph.incident_edges(node) {
            let next = edge.other(node);
            if dist[next.index()].is_none() {
                dist[next.index()] = Some(here + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}
