//! The `Sim` struct: month lifecycle around the daily simulator.

use tc_core::{NodeId, SimConfig};
use tc_network::{
    ConstructionRequest, Edge, NetworkGraph, Node, NodeSpec, PathOracle, Shortcut, TransportUnit,
};

use crate::{AgentSet, DailySimulator, SimError, SimEvent, SimObserver, SimResult};

/// Summary of one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayResult {
    pub month:         u32,
    pub day:           u32,
    pub score_delta:   i64,
    pub is_month_end:  bool,
    /// Agents still travelling after the day (before month-end abandonment).
    pub active_agents: usize,
    pub budget:        i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonthPhase {
    /// No month open: before the first month or after a month ended.
    Closed,
    /// Nodes and budget added; construction requests accepted.
    Planning,
    /// Days are being simulated.
    Running,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The month-by-month simulation runner.
///
/// A month goes through three steps:
///
/// 1. [`begin_month`](Self::begin_month): interest on the carried budget
///    (every month after the first), new nodes, new budget.
/// 2. Any number of [`apply`](Self::apply) calls.
/// 3. [`launch_month`](Self::launch_month): oracle recompute, agent spawn,
///    pod reset.  Then [`simulate_one_day`](Self::simulate_one_day) until a
///    [`DayResult`] reports `is_month_end`.  The first `simulate_one_day`
///    launches the month itself if needed.
pub struct Sim {
    graph:     NetworkGraph,
    oracle:    PathOracle,
    simulator: DailySimulator,

    phase:        MonthPhase,
    months_begun: u32,
    day:          u32,

    month_score: i64,
    total_score: i64,

    /// Scratch buffer handed to the simulator, drained into the observer.
    events: Vec<SimEvent>,
}

impl Sim {
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            graph:        NetworkGraph::new(config),
            oracle:       PathOracle::empty(),
            simulator:    DailySimulator::new(),
            phase:        MonthPhase::Closed,
            months_begun: 0,
            day:          0,
            month_score:  0,
            total_score:  0,
            events:       Vec::new(),
        })
    }

    // ── Month lifecycle ───────────────────────────────────────────────────

    /// Open the next month: place `nodes` (ids are returned in order) and
    /// credit `added_budget`.
    pub fn begin_month(&mut self, nodes: Vec<NodeSpec>, added_budget: i64) -> SimResult<Vec<NodeId>> {
        if self.phase != MonthPhase::Closed {
            return Err(SimError::MonthInProgress { month: self.current_month() });
        }
        let limit = self.graph.config().agent_id_multiplier;
        if let Some((position, spec)) = nodes
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.manifest.len() > limit as usize)
        {
            return Err(SimError::ManifestTooLarge { position, len: spec.manifest.len(), limit });
        }
        if self.months_begun > 0 {
            let percent = self.graph.config().resource_interest_percent;
            self.graph.apply_interest(percent);
        }
        let ids = nodes.into_iter().map(|spec| self.graph.add_node(spec)).collect();
        self.graph.credit(added_budget);

        self.months_begun += 1;
        self.phase = MonthPhase::Planning;
        self.day = 0;
        self.month_score = 0;
        tracing::debug!(month = self.current_month(), budget = self.graph.budget(), "month opened");
        Ok(ids)
    }

    /// Apply one construction request.  Only allowed between `begin_month`
    /// and the month's launch, while the oracle is not yet frozen.  A
    /// [`SimError::Rejected`] leaves everything as it was.
    pub fn apply(&mut self, request: ConstructionRequest) -> SimResult<()> {
        match self.phase {
            MonthPhase::Closed   => Err(SimError::NoOpenMonth),
            MonthPhase::Running  => Err(SimError::MonthInProgress { month: self.current_month() }),
            MonthPhase::Planning => Ok(self.graph.apply(request)?),
        }
    }

    /// Freeze the network for the month: recompute the oracle, spawn agents,
    /// reset pods.  Returns the number of agents spawned.
    pub fn launch_month<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        match self.phase {
            MonthPhase::Closed  => return Err(SimError::NoOpenMonth),
            MonthPhase::Running => {
                return Err(SimError::MonthInProgress { month: self.current_month() });
            }
            MonthPhase::Planning => {}
        }
        let month = self.current_month();

        self.oracle.recompute(&self.graph);
        let spawned = self.simulator.start_month(&mut self.graph, &mut self.events);
        self.phase = MonthPhase::Running;

        tracing::info!(
            month,
            spawned,
            budget = self.graph.budget(),
            nodes = self.graph.node_count(),
            pods = self.graph.pod_count(),
            "month launched"
        );
        observer.on_month_start(month, self.graph.budget(), spawned);
        self.flush_events(month, 0, observer);
        Ok(spawned)
    }

    /// Simulate the next day of the open month.
    pub fn simulate_one_day<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DayResult> {
        match self.phase {
            MonthPhase::Closed   => return Err(SimError::NoOpenMonth),
            MonthPhase::Planning => {
                self.launch_month(observer)?;
            }
            MonthPhase::Running  => {}
        }
        let month = self.current_month();
        let day = self.day;

        let outcome = self.simulator.simulate_day(&mut self.graph, &self.oracle, day, &mut self.events);
        self.month_score += outcome.score;
        self.flush_events(month, day, observer);

        let active_agents = self.simulator.active_agents();
        let is_month_end = !outcome.moved
            || active_agents == 0
            || day + 1 >= self.graph.config().days_per_month;

        let result = DayResult {
            month,
            day,
            score_delta: outcome.score,
            is_month_end,
            active_agents,
            budget: self.graph.budget(),
        };

        if is_month_end {
            let abandoned = self.simulator.abandon_all();
            if abandoned > 0 {
                self.events.push(SimEvent::Abandoned { count: abandoned });
                self.flush_events(month, day, observer);
            }
            self.total_score += self.month_score;
            self.phase = MonthPhase::Closed;
            tracing::info!(
                month,
                days = day + 1,
                month_score = self.month_score,
                total_score = self.total_score,
                abandoned,
                "month ended"
            );
        } else {
            self.day += 1;
        }

        observer.on_day_end(&result);
        if is_month_end {
            observer.on_month_end(month, self.month_score, self.total_score);
        }
        Ok(result)
    }

    /// Simulate days until the open month ends.  Returns the month's score.
    pub fn run_month<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<i64> {
        loop {
            if self.simulate_one_day(observer)?.is_month_end {
                return Ok(self.month_score);
            }
        }
    }

    fn flush_events<O: SimObserver>(&mut self, month: u32, day: u32, observer: &mut O) {
        for event in self.events.drain(..) {
            observer.on_event(month, day, &event);
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        self.graph.config()
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    pub fn oracle(&self) -> &PathOracle {
        &self.oracle
    }

    pub fn budget(&self) -> i64 {
        self.graph.budget()
    }

    pub fn nodes(&self) -> &[Node] {
        self.graph.nodes()
    }

    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        self.graph.shortcuts()
    }

    pub fn pods(&self) -> impl Iterator<Item = &TransportUnit> + '_ {
        self.graph.pods()
    }

    pub fn agents(&self) -> &AgentSet {
        self.simulator.agents()
    }

    pub fn active_agents(&self) -> usize {
        self.simulator.active_agents()
    }

    /// Index of the open (or most recently ended) month, 0-based.
    pub fn current_month(&self) -> u32 {
        self.months_begun.saturating_sub(1)
    }

    pub fn months_begun(&self) -> u32 {
        self.months_begun
    }

    /// The day the next `simulate_one_day` call will simulate.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_month_open(&self) -> bool {
        self.phase != MonthPhase::Closed
    }

    pub fn month_score(&self) -> i64 {
        self.month_score
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }
}
