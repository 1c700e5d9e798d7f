//! The `Planner` trait: where a month's construction actions come from.

use std::collections::VecDeque;

use tc_core::NodeId;
use tc_network::NetworkGraph;

/// What a planner gets to see at the start of a month.
pub struct MonthView<'a> {
    /// 0-based month index.
    pub month: u32,
    /// Budget available for this month's actions.
    pub budget: i64,
    /// The network as it stands, including this month's new nodes.
    pub graph: &'a NetworkGraph,
    /// Ids of the nodes placed this month.
    pub new_nodes: &'a [NodeId],
}

/// Pluggable source of construction actions.
///
/// Called once per month, after new nodes and budget have been added and
/// before the month launches.  Returns one action line in command syntax
/// (`TUBE 0 1;POD 1 0 1 0`, or `WAIT`).
pub trait Planner {
    fn plan(&mut self, view: &MonthView<'_>) -> String;
}

/// Never builds anything.
pub struct WaitPlanner;

impl Planner for WaitPlanner {
    fn plan(&mut self, _view: &MonthView<'_>) -> String {
        "WAIT".to_string()
    }
}

/// Replays pre-written action lines, one per month.  Waits once the script
/// runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlanner {
    lines: VecDeque<String>,
}

impl ScriptedPlanner {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }

    /// One month per line of `text`.  Lines are kept verbatim, so a blank
    /// line is a protocol error when its month comes up.
    pub fn from_script(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Planner for ScriptedPlanner {
    fn plan(&mut self, _view: &MonthView<'_>) -> String {
        self.lines.pop_front().unwrap_or_else(|| "WAIT".to_string())
    }
}
