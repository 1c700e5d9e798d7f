//! The city transit network and its construction economy.
//!
//! # Data layout
//!
//! Nodes live in an arena indexed by [`NodeId`] (ids are assigned densely in
//! insertion order).  Edges are stored once in `edges` and referenced from:
//!
//! - `edge_index`: normalized `(min, max)` node pair → edge slot, so lookups
//!   succeed in either ordering;
//! - `adjacency[n]`: edge slots incident to node `n`, in creation order.
//!   Breadth-first search in the oracle walks this list, so its order is
//!   part of the deterministic contract.
//!
//! Shortcuts are indexed by their directed `(entry, exit)` pair and by each
//! endpoint.  Pods are kept in a `BTreeMap` so iteration is by ascending id,
//! which is also their dispatch priority.
//!
//! Every mutating operation validates completely before touching any field:
//! a [`Rejection`] always leaves the graph exactly as it was.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tc_core::geo::{lies_on_segment, segments_cross};
use tc_core::{Category, EdgeId, NodeId, PodId, Point, SimConfig};

use crate::{NetworkResult, Rejection, TransportUnit};

// ── Entities ──────────────────────────────────────────────────────────────────

/// Scenario description of a node, before it is placed in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSpec {
    pub category: Category,
    pub pos: Point,
    /// Destination categories of the agents landing here every month.
    /// Only meaningful on arrival nodes.
    pub manifest: Vec<Category>,
}

impl NodeSpec {
    /// A landing pad with its monthly arrival manifest.
    pub fn arrival(x: i32, y: i32, manifest: Vec<Category>) -> Self {
        Self { category: Category::ARRIVAL, pos: Point::new(x, y), manifest }
    }

    /// A work node of the given category.
    pub fn work(category: Category, x: i32, y: i32) -> Self {
        Self { category, pos: Point::new(x, y), manifest: Vec::new() }
    }
}

/// A placed node (building).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
    pub category: Category,
    pub manifest: Vec<Category>,
    pub remaining_slots: u8,
    pub has_shortcut: bool,
}

/// A bidirectional, capacity-limited connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Endpoints in the order they were requested.
    pub a: NodeId,
    pub b: NodeId,
    /// Pods allowed to depart through this edge per day.
    pub capacity: u32,
}

impl Edge {
    /// The endpoint opposite `from`.
    #[inline]
    pub fn other(&self, from: NodeId) -> NodeId {
        if self.a == from { self.b } else { self.a }
    }
}

/// A zero-cost, one-directional link from `entry` to `exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shortcut {
    pub entry: NodeId,
    pub exit: NodeId,
}

#[inline]
fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

// ── NetworkGraph ──────────────────────────────────────────────────────────────

/// Nodes, edges, shortcuts, pods, and the shared construction budget.
pub struct NetworkGraph {
    config: SimConfig,

    nodes: Vec<Node>,

    edges:      Vec<Edge>,
    edge_index: FxHashMap<(NodeId, NodeId), EdgeId>,
    adjacency:  Vec<Vec<EdgeId>>,

    shortcuts:        Vec<Shortcut>,
    shortcut_index:   FxHashMap<(NodeId, NodeId), usize>,
    shortcut_by_node: FxHashMap<NodeId, usize>,

    pods: BTreeMap<PodId, TransportUnit>,

    budget: i64,
}

impl NetworkGraph {
    /// Create an empty network with no budget.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            nodes:            Vec::new(),
            edges:            Vec::new(),
            edge_index:       FxHashMap::default(),
            adjacency:        Vec::new(),
            shortcuts:        Vec::new(),
            shortcut_index:   FxHashMap::default(),
            shortcut_by_node: FxHashMap::default(),
            pods:             BTreeMap::new(),
            budget:           0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Nodes and budget ──────────────────────────────────────────────────

    /// Place a node and return its id (sequential from 0).
    pub fn add_node(&mut self, spec: NodeSpec) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            pos:             spec.pos,
            category:        spec.category,
            manifest:        spec.manifest,
            remaining_slots: self.config.max_edges_per_node,
            has_shortcut:    false,
        });
        self.adjacency.push(Vec::new());
        id
    }

    pub fn budget(&self) -> i64 {
        self.budget
    }

    /// Add `amount` to the budget.  Negative amounts never take the budget
    /// below zero.
    pub fn credit(&mut self, amount: i64) {
        self.budget = (self.budget + amount).max(0);
    }

    /// Grow the budget by `percent` (integer arithmetic, rounded down).
    pub fn apply_interest(&mut self, percent: i64) {
        self.budget = self.budget * percent / 100;
    }

    fn charge(&self, needed: i64) -> NetworkResult<()> {
        if needed > self.budget {
            return Err(Rejection::InsufficientBudget { needed, available: self.budget });
        }
        Ok(())
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn require_node(&self, id: NodeId) -> NetworkResult<&Node> {
        self.node(id).ok_or(Rejection::NodeNotFound(id))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Id of the edge between `a` and `b`, in either ordering.
    #[inline]
    pub fn edge_id_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.edge_index.get(&pair_key(a, b)).copied()
    }

    /// Edge between `a` and `b` in either ordering.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edge_id_between(a, b).map(|id| &self.edges[id.index()])
    }

    /// Edges incident to `node`, in creation order.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .get(node.index())
            .into_iter()
            .flatten()
            .map(|id| &self.edges[id.index()])
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// The shortcut `node` participates in, as entry or exit.
    pub fn shortcut_at(&self, node: NodeId) -> Option<Shortcut> {
        self.shortcut_by_node.get(&node).map(|&i| self.shortcuts[i])
    }

    /// The shortcut from `entry` to `exit` (direction matters).
    pub fn shortcut_between(&self, entry: NodeId, exit: NodeId) -> Option<Shortcut> {
        self.shortcut_index.get(&(entry, exit)).map(|&i| self.shortcuts[i])
    }

    /// Exit node reachable from `node` through a shortcut it is the entry of.
    #[inline]
    pub fn shortcut_exit(&self, node: NodeId) -> Option<NodeId> {
        self.shortcut_at(node).filter(|s| s.entry == node).map(|s| s.exit)
    }

    pub fn pods(&self) -> impl Iterator<Item = &TransportUnit> + '_ {
        self.pods.values()
    }

    pub fn pod(&self, id: PodId) -> Option<&TransportUnit> {
        self.pods.get(&id)
    }

    pub fn pod_count(&self) -> usize {
        self.pods.len()
    }

    /// Ids of all pods in ascending order (dispatch priority).
    pub fn pod_ids(&self) -> Vec<PodId> {
        self.pods.keys().copied().collect()
    }

    /// Mutable access for the daily simulator, which moves pods and seats
    /// passengers.  The route itself is immutable once created.
    pub fn pod_mut(&mut self, id: PodId) -> Option<&mut TransportUnit> {
        self.pods.get_mut(&id)
    }

    // ── Costs ─────────────────────────────────────────────────────────────

    /// Construction cost of an edge between two placed nodes:
    /// `floor(distance × edge_cost_per_unit)`.
    pub fn edge_base_cost(&self, a: &Node, b: &Node) -> i64 {
        (a.pos.distance(b.pos) * self.config.edge_cost_per_unit as f64).floor() as i64
    }

    // ── Construction operations ───────────────────────────────────────────

    /// Build an edge between `id1` and `id2`.
    pub fn create_edge(&mut self, id1: NodeId, id2: NodeId) -> NetworkResult<()> {
        let n1 = self.require_node(id1)?;
        let n2 = self.require_node(id2)?;
        if id1 == id2 {
            return Err(Rejection::SelfLoop(id1));
        }
        if self.edge_between(id1, id2).is_some() {
            return Err(Rejection::DuplicateEdge { a: id1, b: id2 });
        }
        if n1.remaining_slots == 0 {
            return Err(Rejection::SlotsExhausted(id1));
        }
        if n2.remaining_slots == 0 {
            return Err(Rejection::SlotsExhausted(id2));
        }

        let (p1, p2) = (n1.pos, n2.pos);
        if let Some(blocking) = self
            .nodes
            .iter()
            .find(|n| n.id != id1 && n.id != id2 && lies_on_segment(n.pos, p1, p2))
        {
            return Err(Rejection::NodeOnSegment { a: id1, b: id2, node: blocking.id });
        }
        if let Some(crossed) = self.edges.iter().find(|e| {
            segments_cross(p1, p2, self.nodes[e.a.index()].pos, self.nodes[e.b.index()].pos)
        }) {
            return Err(Rejection::EdgesCross {
                a: id1,
                b: id2,
                other_a: crossed.a,
                other_b: crossed.b,
            });
        }

        let cost = self.edge_base_cost(n1, n2);
        self.charge(cost)?;

        // ── Commit ────────────────────────────────────────────────────────
        self.budget -= cost;
        self.nodes[id1.index()].remaining_slots -= 1;
        self.nodes[id2.index()].remaining_slots -= 1;

        let slot = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge { a: id1, b: id2, capacity: 1 });
        self.edge_index.insert(pair_key(id1, id2), slot);
        self.adjacency[id1.index()].push(slot);
        self.adjacency[id2.index()].push(slot);
        Ok(())
    }

    /// Add one unit of capacity to the edge between `id1` and `id2`.
    ///
    /// Costs `(capacity + 1) × base cost`, so each upgrade is dearer than
    /// the last.
    pub fn upgrade_edge(&mut self, id1: NodeId, id2: NodeId) -> NetworkResult<()> {
        let slot = self
            .edge_id_between(id1, id2)
            .ok_or(Rejection::EdgeNotFound { a: id1, b: id2 })?
            .index();
        let edge = &self.edges[slot];
        let base = self.edge_base_cost(&self.nodes[edge.a.index()], &self.nodes[edge.b.index()]);
        let cost = (edge.capacity as i64 + 1) * base;
        self.charge(cost)?;

        self.budget -= cost;
        self.edges[slot].capacity += 1;
        Ok(())
    }

    /// Build a one-way shortcut from `entry` to `exit`.
    pub fn create_shortcut(&mut self, entry: NodeId, exit: NodeId) -> NetworkResult<()> {
        let n1 = self.require_node(entry)?;
        let n2 = self.require_node(exit)?;
        if entry == exit {
            return Err(Rejection::SelfLoop(entry));
        }
        if n1.has_shortcut {
            return Err(Rejection::AlreadyHasShortcut(entry));
        }
        if n2.has_shortcut {
            return Err(Rejection::AlreadyHasShortcut(exit));
        }
        let cost = self.config.shortcut_cost;
        self.charge(cost)?;

        self.budget -= cost;
        let slot = self.shortcuts.len();
        self.shortcuts.push(Shortcut { entry, exit });
        self.shortcut_index.insert((entry, exit), slot);
        self.shortcut_by_node.insert(entry, slot);
        self.shortcut_by_node.insert(exit, slot);
        self.nodes[entry.index()].has_shortcut = true;
        self.nodes[exit.index()].has_shortcut = true;
        Ok(())
    }

    /// Create pod `id` following `route`.
    pub fn create_pod(&mut self, id: PodId, route: Vec<NodeId>) -> NetworkResult<()> {
        if self.pods.contains_key(&id) {
            return Err(Rejection::DuplicatePod(id));
        }
        if id.0 > self.config.max_pod_id {
            return Err(Rejection::PodIdOutOfRange { id, max: self.config.max_pod_id });
        }
        if route.is_empty() {
            return Err(Rejection::EmptyRoute(id));
        }
        for &stop in &route {
            self.require_node(stop)?;
        }
        for leg in route.windows(2) {
            if self.edge_between(leg[0], leg[1]).is_none() {
                return Err(Rejection::NoPath { from: leg[0], to: leg[1] });
            }
        }
        let cost = self.config.pod_cost;
        self.charge(cost)?;

        self.budget -= cost;
        let pod = TransportUnit::new(
            id,
            route,
            self.config.max_route_len(),
            self.config.pod_capacity,
        );
        self.pods.insert(id, pod);
        Ok(())
    }

    /// Remove pod `id`, crediting the partial refund.
    pub fn destroy_pod(&mut self, id: PodId) -> NetworkResult<()> {
        if self.pods.remove(&id).is_none() {
            return Err(Rejection::PodNotFound(id));
        }
        self.budget += self.config.pod_refund;
        Ok(())
    }

    /// Send every pod back to its first stop with all seats free.
    pub fn reset_pods(&mut self) {
        for pod in self.pods.values_mut() {
            pod.reset_capacity();
            pod.reset_position();
        }
    }
}
