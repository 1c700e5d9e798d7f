//! A simple planner: one tube and one shuttle pod per (new pad, wanted
//! category) pair, towards the nearest node of that category.

use std::collections::BTreeSet;
use std::fmt::Write;

use tc_core::{Category, NodeId};
use tc_network::NetworkGraph;
use tc_sim::{MonthView, Planner};

#[derive(Default)]
pub struct GreedyPlanner {
    next_pod: u32,
}

impl GreedyPlanner {
    fn nearest(graph: &NetworkGraph, from: NodeId, category: Category) -> Option<NodeId> {
        let origin = graph.node(from)?.pos;
        graph
            .nodes()
            .iter()
            .filter(|n| n.category == category)
            .min_by(|a, b| origin.distance(a.pos).total_cmp(&origin.distance(b.pos)))
            .map(|n| n.id)
    }
}

impl Planner for GreedyPlanner {
    fn plan(&mut self, view: &MonthView<'_>) -> String {
        let mut line = String::new();
        let mut budget = view.budget;
        let config = view.graph.config();

        for &pad in view.new_nodes {
            let Some(node) = view.graph.node(pad) else { continue };
            if !node.category.is_arrival() {
                continue;
            }
            let wanted: BTreeSet<Category> = node.manifest.iter().copied().collect();
            for category in wanted {
                let Some(target) = Self::nearest(view.graph, pad, category) else { continue };
                let (Some(a), Some(b)) = (view.graph.node(pad), view.graph.node(target)) else {
                    continue;
                };
                let cost = view.graph.edge_base_cost(a, b) + config.pod_cost;
                if cost > budget || self.next_pod > config.max_pod_id {
                    continue;
                }
                budget -= cost;
                let _ = write!(line, "TUBE {pad} {target};POD {} {pad} {target} {pad};", self.next_pod);
                self.next_pod += 1;
            }
        }

        if line.is_empty() {
            tracing::debug!(month = view.month, "greedy planner waits");
            "WAIT".to_string()
        } else {
            line
        }
    }
}
