//! Simulation observer trait for progress reporting and data collection.

use tc_network::{ConstructionRequest, Rejection};

use crate::{CampaignOutcome, DayResult, SimEvent};

/// Callbacks invoked by [`Sim`][crate::Sim] and
/// [`Campaign`][crate::Campaign] at key points of a month.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl SimObserver for ScorePrinter {
///     fn on_month_end(&mut self, month: u32, month_score: i64, total: i64) {
///         println!("month {month}: +{month_score} (total {total})");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called when a month is launched, after agents have been spawned.
    fn on_month_start(&mut self, _month: u32, _budget: i64, _spawned: usize) {}

    /// Called for every construction request of the action phase, accepted
    /// or not.
    fn on_request(
        &mut self,
        _month:   u32,
        _request: &ConstructionRequest,
        _result:  &Result<(), Rejection>,
    ) {}

    /// Called for every movement or scoring event, in the order it happened.
    fn on_event(&mut self, _month: u32, _day: u32, _event: &SimEvent) {}

    /// Called at the end of each simulated day.
    fn on_day_end(&mut self, _result: &DayResult) {}

    /// Called once the month's last day has been simulated.
    fn on_month_end(&mut self, _month: u32, _month_score: i64, _total_score: i64) {}

    /// Called once after the campaign has finished (won or lost).
    fn on_campaign_end(&mut self, _outcome: &CampaignOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// An event tagged with the month and day it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggedEvent {
    pub month: u32,
    pub day:   u32,
    pub event: SimEvent,
}

/// Append-only recorder of everything the simulation reports.  Used for
/// playback and by tests.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events:   Vec<LoggedEvent>,
    pub days:     Vec<DayResult>,
    pub requests: Vec<(u32, ConstructionRequest, Result<(), Rejection>)>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of one kind (see [`SimEvent::kind`]).
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a LoggedEvent> + 'a {
        self.events.iter().filter(move |e| e.event.kind() == kind)
    }

    /// Sum of points over all logged deliveries.
    pub fn delivered_points(&self) -> i64 {
        self.events.iter().map(|e| e.event.points()).sum()
    }
}

impl SimObserver for EventLog {
    fn on_request(
        &mut self,
        month:   u32,
        request: &ConstructionRequest,
        result:  &Result<(), Rejection>,
    ) {
        self.requests.push((month, request.clone(), result.clone()));
    }

    fn on_event(&mut self, month: u32, day: u32, event: &SimEvent) {
        self.events.push(LoggedEvent { month, day, event: event.clone() });
    }

    fn on_day_end(&mut self, result: &DayResult) {
        self.days.push(*result);
    }
}
