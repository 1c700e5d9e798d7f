//! Simulation configuration.
//!
//! Every tunable constant of the network economy and the daily simulator
//! lives in [`SimConfig`].  `SimConfig::default()` reproduces the reference
//! game balance; tests shrink individual values to build small scenarios.

use crate::{CoreError, CoreResult};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    // ── Network economy ───────────────────────────────────────────────────
    /// Edge attachment slots every node starts with.
    pub max_edges_per_node: u8,

    /// Edge cost per unit of euclidean length (rounded down after scaling).
    pub edge_cost_per_unit: i64,

    /// Flat cost of a shortcut.
    pub shortcut_cost: i64,

    /// Flat cost of a transport unit.
    pub pod_cost: i64,

    /// Budget credited back when a transport unit is destroyed.
    pub pod_refund: i64,

    /// Highest accepted pod id (inclusive).
    pub max_pod_id: u32,

    /// Budget growth applied at the end of every month, in percent.
    pub resource_interest_percent: i64,

    // ── Daily simulator ───────────────────────────────────────────────────
    /// Passenger seats per transport unit per departure.
    pub pod_capacity: u32,

    /// Maximum number of simulated days in one month.
    pub days_per_month: u32,

    /// Speed points for an arrival on day 0; one point is lost per day.
    pub max_speed_points: u32,

    /// Diversity points for the first arrival at a node; one point is lost
    /// per earlier arrival at the same node this month.
    pub max_diversity_points: u32,

    /// `AgentId = multiplier × origin node + spawn index`.  Also the largest
    /// manifest `Sim::begin_month` accepts.
    pub agent_id_multiplier: u32,

    // ── Orchestration ─────────────────────────────────────────────────────
    /// Rejection messages surfaced per month before they are summarised.
    pub max_warnings_displayed: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_edges_per_node:        5,
            edge_cost_per_unit:        10,
            shortcut_cost:             5_000,
            pod_cost:                  1_000,
            pod_refund:                750,
            max_pod_id:                500,
            resource_interest_percent: 110,
            pod_capacity:              10,
            days_per_month:            20,
            max_speed_points:          50,
            max_diversity_points:      50,
            agent_id_multiplier:       1_000,
            max_warnings_displayed:    5,
        }
    }
}

impl SimConfig {
    /// Maximum stored route length for a transport unit.  Stops beyond this
    /// can never be reached within a month.
    #[inline]
    pub fn max_route_len(&self) -> usize {
        self.days_per_month as usize + 1
    }

    /// Reject configurations the simulator cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.days_per_month == 0 {
            return Err(CoreError::Config("days_per_month must be at least 1".into()));
        }
        if self.pod_capacity == 0 {
            return Err(CoreError::Config("pod_capacity must be at least 1".into()));
        }
        if self.agent_id_multiplier == 0 {
            return Err(CoreError::Config("agent_id_multiplier must be at least 1".into()));
        }
        if self.edge_cost_per_unit < 0
            || self.shortcut_cost < 0
            || self.pod_cost < 0
            || self.pod_refund < 0
        {
            return Err(CoreError::Config("costs and refunds must be non-negative".into()));
        }
        if self.resource_interest_percent < 0 {
            return Err(CoreError::Config("resource_interest_percent must be non-negative".into()));
        }
        Ok(())
    }
}
