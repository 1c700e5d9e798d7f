//! Construction requests: the five ways a month's action phase can change
//! the network.

use std::fmt;

use tc_core::{NodeId, PodId};

use crate::{NetworkGraph, NetworkResult};

/// One construction action, already parsed and typed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionRequest {
    /// Build an edge (tube) between two nodes.
    Edge { a: NodeId, b: NodeId },
    /// Add one unit of capacity to an existing edge.
    Upgrade { a: NodeId, b: NodeId },
    /// Build a one-way shortcut (teleporter) from `entry` to `exit`.
    Shortcut { entry: NodeId, exit: NodeId },
    /// Create a pod with the given route.
    Pod { id: PodId, route: Vec<NodeId> },
    /// Destroy a pod for a partial refund.
    Destroy { id: PodId },
}

impl ConstructionRequest {
    /// Short verb used in logs and output rows.
    pub fn verb(&self) -> &'static str {
        match self {
            ConstructionRequest::Edge { .. }     => "TUBE",
            ConstructionRequest::Upgrade { .. }  => "UPGRADE",
            ConstructionRequest::Shortcut { .. } => "TELEPORT",
            ConstructionRequest::Pod { .. }      => "POD",
            ConstructionRequest::Destroy { .. }  => "DESTROY",
        }
    }
}

impl fmt::Display for ConstructionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionRequest::Edge { a, b } | ConstructionRequest::Upgrade { a, b } => {
                write!(f, "{} {a} {b}", self.verb())
            }
            ConstructionRequest::Shortcut { entry, exit } => {
                write!(f, "{} {entry} {exit}", self.verb())
            }
            ConstructionRequest::Pod { id, route } => {
                write!(f, "{} {id}", self.verb())?;
                for stop in route {
                    write!(f, " {stop}")?;
                }
                Ok(())
            }
            ConstructionRequest::Destroy { id } => write!(f, "{} {id}", self.verb()),
        }
    }
}

impl NetworkGraph {
    /// Apply one request.  On rejection the graph is unchanged.
    pub fn apply(&mut self, request: ConstructionRequest) -> NetworkResult<()> {
        let budget_before = self.budget();
        let label = request.to_string();
        let result = match request {
            ConstructionRequest::Edge { a, b }           => self.create_edge(a, b),
            ConstructionRequest::Upgrade { a, b }        => self.upgrade_edge(a, b),
            ConstructionRequest::Shortcut { entry, exit } => self.create_shortcut(entry, exit),
            ConstructionRequest::Pod { id, route }       => self.create_pod(id, route),
            ConstructionRequest::Destroy { id }          => self.destroy_pod(id),
        };
        match &result {
            Ok(()) => tracing::debug!(
                request = %label,
                spent = budget_before - self.budget(),
                budget = self.budget(),
                "construction accepted"
            ),
            Err(reason) => tracing::debug!(request = %label, %reason, "construction rejected"),
        }
        result
    }
}
