//! The per-day movement and scoring pass.
//!
//! # Phases
//!
//! ```text
//! ① Teleport : agents on a shortcut entry jump to the exit when that is
//!              no worse for reaching their destination category.
//! ② Dispatch : pods in ascending id order leave through the next edge of
//!              their route while the edge has departures left today.
//! ③ Boarding : agents in ascending id order ride the first pod that left
//!              their node with a free seat and ends strictly closer.
//! ```
//!
//! Scoring is settled the moment an agent arrives, inside ① or ③.  The
//! oracle and the network topology are read-only here; only agent positions
//! and pod position/seats change.

use rustc_hash::FxHashMap;
use tc_core::{AgentId, Category, EdgeId, NodeId, PodId};
use tc_network::{NetworkGraph, PathOracle};

use crate::{AgentSet, SimEvent};

/// Result of one simulated day, before month-end bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayOutcome {
    /// Points scored by arrivals this day.
    pub score: i64,
    /// `true` if at least one teleport or pod departure happened.
    pub moved: bool,
}

/// Agent state and per-month arrival counters.
#[derive(Debug, Default)]
pub struct DailySimulator {
    agents:   AgentSet,
    /// Arrivals per node this month; drives the diversity score.
    arrivals: FxHashMap<NodeId, u32>,
}

impl DailySimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agents(&self) -> &AgentSet {
        &self.agents
    }

    pub fn active_agents(&self) -> usize {
        self.agents.len()
    }

    /// Arrivals recorded at `node` since the month started.
    pub fn arrivals_at(&self, node: NodeId) -> u32 {
        self.arrivals.get(&node).copied().unwrap_or(0)
    }

    /// Spawn this month's agents, send every pod back to its first stop and
    /// clear the arrival counters.  Returns the number of agents spawned.
    pub fn start_month(&mut self, graph: &mut NetworkGraph, events: &mut Vec<SimEvent>) -> usize {
        let spawned = self.agents.spawn_month(graph);
        for node in graph.nodes().iter().filter(|n| n.category.is_arrival()) {
            if !node.manifest.is_empty() {
                events.push(SimEvent::Spawn { node: node.id, count: node.manifest.len() });
            }
        }
        graph.reset_pods();
        self.arrivals.clear();
        spawned
    }

    /// Drop the agents that did not make it this month.
    pub fn abandon_all(&mut self) -> usize {
        self.agents.clear()
    }

    /// Simulate day `day` (0-based within the month).
    pub fn simulate_day(
        &mut self,
        graph:  &mut NetworkGraph,
        oracle: &PathOracle,
        day:    u32,
        events: &mut Vec<SimEvent>,
    ) -> DayOutcome {
        let mut outcome = DayOutcome::default();

        // ── Phase 1: teleports ────────────────────────────────────────────
        let teleported = self.teleport_phase(graph, oracle, day, events, &mut outcome);

        // ── Phase 2: pod dispatch ─────────────────────────────────────────
        let departed = dispatch_phase(graph, events, &mut outcome);

        // ── Phase 3: boarding ─────────────────────────────────────────────
        let boarded = self.boarding_phase(graph, oracle, day, &departed, events, &mut outcome);

        tracing::trace!(
            day,
            teleported,
            departures = departed.values().map(Vec::len).sum::<usize>(),
            boarded,
            score = outcome.score,
            "day simulated"
        );
        outcome
    }

    fn teleport_phase(
        &mut self,
        graph:   &NetworkGraph,
        oracle:  &PathOracle,
        day:     u32,
        events:  &mut Vec<SimEvent>,
        outcome: &mut DayOutcome,
    ) -> usize {
        let mut count = 0;
        for id in self.agents.ids() {
            let Some(&agent) = self.agents.get(id) else { continue };
            let Some(exit) = graph.shortcut_exit(agent.node) else { continue };

            let here = oracle.distance(agent.node, agent.destination);
            let there = oracle.distance(exit, agent.destination);
            if !teleport_helps(here, there) {
                continue;
            }

            outcome.moved = true;
            count += 1;
            events.push(SimEvent::Teleport { agent: id, from: agent.node, to: exit });
            if let Some(a) = self.agents.get_mut(id) {
                a.node = exit;
            }
            if is_destination(graph, exit, agent.destination) {
                outcome.score += self.settle(graph, id, exit, agent.destination, day, events);
            }
        }
        count
    }

    fn boarding_phase(
        &mut self,
        graph:    &mut NetworkGraph,
        oracle:   &PathOracle,
        day:      u32,
        departed: &FxHashMap<NodeId, Vec<PodId>>,
        events:   &mut Vec<SimEvent>,
        outcome:  &mut DayOutcome,
    ) -> usize {
        let mut count = 0;
        for id in self.agents.ids() {
            let Some(&agent) = self.agents.get(id) else { continue };
            let Some(leaving) = departed.get(&agent.node) else { continue };
            let Some(here) = oracle.distance(agent.node, agent.destination) else { continue };

            // Pods have already moved, so their current stop is where the
            // ride ends.
            let choice = leaving.iter().find_map(|&pod_id| {
                let pod = graph.pod(pod_id)?;
                let to = pod.current_stop()?;
                let closer = oracle.distance(to, agent.destination).is_some_and(|d| d < here);
                (pod.remaining_capacity > 0 && closer).then_some((pod_id, to))
            });
            let Some((pod_id, to)) = choice else { continue };

            if let Some(pod) = graph.pod_mut(pod_id) {
                pod.board();
            }
            if let Some(a) = self.agents.get_mut(id) {
                a.node = to;
            }
            count += 1;
            events.push(SimEvent::Board { agent: id, pod: pod_id, from: agent.node, to });

            // The ride takes the whole day.
            if is_destination(graph, to, agent.destination) {
                outcome.score += self.settle(graph, id, to, agent.destination, day + 1, events);
            }
        }
        count
    }

    /// Score an arrival at `node` after `elapsed` days and retire the agent.
    fn settle(
        &mut self,
        graph:    &NetworkGraph,
        id:       AgentId,
        node:     NodeId,
        category: Category,
        elapsed:  u32,
        events:   &mut Vec<SimEvent>,
    ) -> i64 {
        let config = graph.config();
        let already = self.arrivals.entry(node).or_insert(0);
        let speed = config.max_speed_points.saturating_sub(elapsed);
        let diversity = config.max_diversity_points.saturating_sub(*already);
        *already += 1;

        self.agents.remove(id);
        let event = SimEvent::Delivered { agent: id, node, category, speed, diversity };
        let points = event.points();
        events.push(event);
        points
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a shortcut from a node at distance `here` to an exit at `there`
/// is worth taking.  Ties go through the shortcut.
#[inline]
pub(crate) fn teleport_helps(here: Option<u32>, there: Option<u32>) -> bool {
    match (here, there) {
        (_, None)          => false,
        (None, Some(_))    => true,
        (Some(h), Some(t)) => t <= h,
    }
}

#[inline]
fn is_destination(graph: &NetworkGraph, node: NodeId, destination: Category) -> bool {
    graph.node(node).is_some_and(|n| n.category == destination)
}

/// Send pods through their next edge in ascending id order, honouring each
/// edge's per-day capacity.  Returns the pods that left each node, in
/// dispatch order.
fn dispatch_phase(
    graph:   &mut NetworkGraph,
    events:  &mut Vec<SimEvent>,
    outcome: &mut DayOutcome,
) -> FxHashMap<NodeId, Vec<PodId>> {
    let mut used: FxHashMap<EdgeId, u32> = FxHashMap::default();
    let mut departed: FxHashMap<NodeId, Vec<PodId>> = FxHashMap::default();

    for pod_id in graph.pod_ids() {
        let Some(pod) = graph.pod(pod_id) else { continue };
        let (Some(from), Some(to)) = (pod.current_stop(), pod.next_stop()) else { continue };
        let Some(edge) = graph.edge_id_between(from, to) else { continue };
        let capacity = graph.edge(edge).map_or(0, |e| e.capacity);

        let count = used.entry(edge).or_insert(0);
        if *count >= capacity {
            continue;
        }
        *count += 1;

        if let Some(pod) = graph.pod_mut(pod_id) {
            pod.reset_capacity();
            pod.advance();
        }
        departed.entry(from).or_default().push(pod_id);
        outcome.moved = true;
        events.push(SimEvent::Departure { pod: pod_id, from, to });
    }
    departed
}
