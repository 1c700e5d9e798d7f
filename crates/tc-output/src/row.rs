//! Plain data row types written by output backends.

use tc_sim::{DayResult, SimEvent};

/// Summary of one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummaryRow {
    pub month:         u32,
    pub day:           u32,
    pub score_delta:   i64,
    pub month_end:     bool,
    pub active_agents: u64,
    pub budget:        i64,
}

impl From<&DayResult> for DaySummaryRow {
    fn from(r: &DayResult) -> Self {
        Self {
            month:         r.month,
            day:           r.day,
            score_delta:   r.score_delta,
            month_end:     r.is_month_end,
            active_agents: r.active_agents as u64,
            budget:        r.budget,
        }
    }
}

/// One movement or scoring event, flattened.  Columns that do not apply to
/// an event kind are `None` and written empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub month:  u32,
    pub day:    u32,
    pub kind:   &'static str,
    pub from:   Option<u32>,
    pub to:     Option<u32>,
    pub agent:  Option<u32>,
    pub pod:    Option<u32>,
    pub count:  u64,
    pub points: i64,
}

impl EventRow {
    pub fn new(month: u32, day: u32, event: &SimEvent) -> Self {
        let mut row = EventRow {
            month,
            day,
            kind:   event.kind(),
            from:   None,
            to:     None,
            agent:  None,
            pod:    None,
            count:  1,
            points: event.points(),
        };
        match *event {
            SimEvent::Spawn { node, count } => {
                row.to = Some(node.0);
                row.count = count as u64;
            }
            SimEvent::Teleport { agent, from, to } => {
                row.agent = Some(agent.0);
                row.from = Some(from.0);
                row.to = Some(to.0);
            }
            SimEvent::Departure { pod, from, to } => {
                row.pod = Some(pod.0);
                row.from = Some(from.0);
                row.to = Some(to.0);
            }
            SimEvent::Board { agent, pod, from, to } => {
                row.agent = Some(agent.0);
                row.pod = Some(pod.0);
                row.from = Some(from.0);
                row.to = Some(to.0);
            }
            SimEvent::Delivered { agent, node, .. } => {
                row.agent = Some(agent.0);
                row.to = Some(node.0);
            }
            SimEvent::Abandoned { count } => row.count = count as u64,
        }
        row
    }
}
