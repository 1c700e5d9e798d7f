//! In-memory scenario description.

use tc_network::NodeSpec;

/// Everything that happens to the city at the start of one month.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthPlan {
    /// Budget credited when the month opens.
    pub budget_delta: i64,
    /// Nodes placed when the month opens, in id order.
    pub nodes: Vec<NodeSpec>,
}

/// A full campaign: the sequence of months to play.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Optional playback speed ratio (`xN` header).  Not used by the
    /// simulation; kept for output writers.
    pub playback_ratio: Option<u32>,
    /// `simplified` header flag.  Not used by the simulation.
    pub simplified: bool,
    pub months: Vec<MonthPlan>,
}

impl Scenario {
    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// Total number of nodes placed over the whole campaign.
    pub fn node_count(&self) -> usize {
        self.months.iter().map(|m| m.nodes.len()).sum()
    }
}
