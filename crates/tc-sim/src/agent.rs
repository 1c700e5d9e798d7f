//! Agents (astronauts) and the per-month active set.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tc_core::{AgentId, Category, NodeId};
use tc_network::NetworkGraph;

/// One agent travelling towards any node of its destination category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:          AgentId,
    pub destination: Category,
    pub node:        NodeId,
}

/// Active agents keyed by id.  Iteration is in ascending id order, which is
/// the boarding priority.
#[derive(Debug, Clone, Default)]
pub struct AgentSet {
    agents: BTreeMap<AgentId, Agent>,
}

impl AgentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set with this month's arrivals: one agent per manifest
    /// entry of every arrival node.  Returns the number spawned.
    ///
    /// An id that overflows or is already taken by another pad's agent is
    /// skipped; the earlier agent keeps it.
    pub fn spawn_month(&mut self, graph: &NetworkGraph) -> usize {
        let multiplier = graph.config().agent_id_multiplier;
        self.agents.clear();
        for node in graph.nodes().iter().filter(|n| n.category.is_arrival()) {
            let base = multiplier.checked_mul(node.id.0);
            for (i, &destination) in node.manifest.iter().enumerate() {
                let raw = base.zip(u32::try_from(i).ok()).and_then(|(b, i)| b.checked_add(i));
                let Some(id) = raw.map(AgentId) else {
                    tracing::warn!(node = %node.id, index = i, "agent id out of range; arrival dropped");
                    continue;
                };
                match self.agents.entry(id) {
                    Entry::Vacant(slot) => {
                        slot.insert(Agent { id, destination, node: node.id });
                    }
                    Entry::Occupied(_) => {
                        tracing::warn!(agent = %id, node = %node.id, "agent id already taken; arrival dropped");
                    }
                }
            }
        }
        self.agents.len()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.agents.remove(&id)
    }

    /// Snapshot of the current ids, ascending.  Phases iterate over this so
    /// they can remove delivered agents as they go.
    pub fn ids(&self) -> Vec<AgentId> {
        self.agents.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    /// Agents currently standing on `node`.
    pub fn at(&self, node: NodeId) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values().filter(move |a| a.node == node)
    }

    /// Drop every agent; returns how many were left.
    pub fn clear(&mut self) -> usize {
        let left = self.agents.len();
        self.agents.clear();
        left
    }
}
