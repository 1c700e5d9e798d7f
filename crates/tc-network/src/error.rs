//! Construction rejections.
//!
//! A [`Rejection`] is the expected, recoverable outcome of a well-formed
//! construction request that cannot be carried out.  The graph is left
//! untouched whenever one is returned.

use thiserror::Error;

use tc_core::{NodeId, PodId};

/// Why a construction request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    #[error("cannot connect node {0} to itself")]
    SelfLoop(NodeId),

    #[error("an edge already exists between nodes {a} and {b}")]
    DuplicateEdge { a: NodeId, b: NodeId },

    #[error("node {0} already has the maximum number of edges")]
    SlotsExhausted(NodeId),

    #[error("edge between nodes {a} and {b} would pass through node {node}")]
    NodeOnSegment { a: NodeId, b: NodeId, node: NodeId },

    #[error("edge between nodes {a} and {b} would cross the edge between nodes {other_a} and {other_b}")]
    EdgesCross { a: NodeId, b: NodeId, other_a: NodeId, other_b: NodeId },

    #[error("no edge exists between nodes {a} and {b}")]
    EdgeNotFound { a: NodeId, b: NodeId },

    #[error("node {0} already has a shortcut entrance or exit")]
    AlreadyHasShortcut(NodeId),

    #[error("pod {0} already exists")]
    DuplicatePod(PodId),

    #[error("pod id {id} is outside 0..={max}")]
    PodIdOutOfRange { id: PodId, max: u32 },

    #[error("pod {0} has an empty route")]
    EmptyRoute(PodId),

    #[error("no edge between route stops {from} and {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("pod {0} does not exist")]
    PodNotFound(PodId),

    #[error("not enough resources (have {available}, need {needed})")]
    InsufficientBudget { needed: i64, available: i64 },
}

/// Coarse classification of a [`Rejection`], independent of the ids involved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    NotFound,
    SelfLoop,
    Duplicate,
    SlotsExhausted,
    GeometryConflict,
    AlreadyHasShortcut,
    DuplicateId,
    IdOutOfRange,
    EmptyRoute,
    NoPath,
    InsufficientBudget,
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::NodeNotFound(_)
            | Rejection::EdgeNotFound { .. }
            | Rejection::PodNotFound(_) => RejectionKind::NotFound,
            Rejection::SelfLoop(_) => RejectionKind::SelfLoop,
            Rejection::DuplicateEdge { .. } => RejectionKind::Duplicate,
            Rejection::SlotsExhausted(_) => RejectionKind::SlotsExhausted,
            Rejection::NodeOnSegment { .. } | Rejection::EdgesCross { .. } => {
                RejectionKind::GeometryConflict
            }
            Rejection::AlreadyHasShortcut(_) => RejectionKind::AlreadyHasShortcut,
            Rejection::DuplicatePod(_) => RejectionKind::DuplicateId,
            Rejection::PodIdOutOfRange { .. } => RejectionKind::IdOutOfRange,
            Rejection::EmptyRoute(_) => RejectionKind::EmptyRoute,
            Rejection::NoPath { .. } => RejectionKind::NoPath,
            Rejection::InsufficientBudget { .. } => RejectionKind::InsufficientBudget,
        }
    }
}

/// Result of a single construction operation.
pub type NetworkResult<T> = Result<T, Rejection>;
