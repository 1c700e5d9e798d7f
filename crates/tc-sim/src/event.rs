//! Movement and scoring events emitted by the daily simulator.

use tc_core::{AgentId, Category, NodeId, PodId};

/// One thing that happened during a day.  Events are emitted in the order
/// they are decided, so replaying them reproduces the day exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    /// Agents landed at an arrival node at month launch.
    Spawn { node: NodeId, count: usize },
    /// An agent used a shortcut.
    Teleport { agent: AgentId, from: NodeId, to: NodeId },
    /// A pod left `from` for `to`.
    Departure { pod: PodId, from: NodeId, to: NodeId },
    /// An agent rode `pod` from `from` to `to`.
    Board { agent: AgentId, pod: PodId, from: NodeId, to: NodeId },
    /// An agent reached a node of its destination category.
    Delivered {
        agent:     AgentId,
        node:      NodeId,
        category:  Category,
        speed:     u32,
        diversity: u32,
    },
    /// Agents still travelling when the month ended.
    Abandoned { count: usize },
}

impl SimEvent {
    /// Short tag used in logs and output rows.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::Spawn { .. }     => "spawn",
            SimEvent::Teleport { .. }  => "teleport",
            SimEvent::Departure { .. } => "departure",
            SimEvent::Board { .. }     => "board",
            SimEvent::Delivered { .. } => "delivered",
            SimEvent::Abandoned { .. } => "abandoned",
        }
    }

    /// Points scored by this event.
    pub fn points(&self) -> i64 {
        match self {
            SimEvent::Delivered { speed, diversity, .. } => *speed as i64 + *diversity as i64,
            _ => 0,
        }
    }
}
