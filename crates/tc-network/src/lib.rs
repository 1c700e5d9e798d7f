//! `tc-network`: the city transit network, its construction economy, and
//! the per-month distance oracle.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`graph`]   | `NetworkGraph`, `Node`, `NodeSpec`, `Edge`, `Shortcut`       |
//! | [`pod`]     | `TransportUnit`, capacity-bounded vehicle on a fixed route  |
//! | [`request`] | `ConstructionRequest` and `NetworkGraph::apply`              |
//! | [`oracle`]  | `PathOracle`, shortcut-aware BFS distance table             |
//! | [`error`]   | `Rejection`, `RejectionKind`, `NetworkResult<T>`             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod oracle;
pub mod pod;
pub mod request;

#[cfg(test)]
mod tests;

pub use error::{NetworkResult, Rejection, RejectionKind};
pub use graph::{Edge, NetworkGraph, Node, NodeSpec, Shortcut};
pub use oracle::PathOracle;
pub use pod::TransportUnit;
pub use request::ConstructionRequest;
