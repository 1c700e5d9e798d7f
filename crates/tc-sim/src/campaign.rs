//! Campaign runner: a whole scenario played month by month.

use tc_core::SimConfig;
use tc_scenario::{Scenario, parse_actions};

use crate::{MonthView, Planner, Sim, SimError, SimObserver, SimResult};

/// How a campaign ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Win,
    Loss(String),
}

/// Final result of [`Campaign::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampaignOutcome {
    pub total_score:   i64,
    pub months_played: usize,
    pub verdict:       Verdict,
    /// Rejection messages surfaced to the player, capped per month.
    pub warnings:      Vec<String>,
}

impl CampaignOutcome {
    pub fn is_win(&self) -> bool {
        self.verdict == Verdict::Win
    }
}

/// Plays a [`Scenario`] against a [`Planner`].
pub struct Campaign<'a> {
    scenario: &'a Scenario,
    config:   SimConfig,
}

impl<'a> Campaign<'a> {
    pub fn new(scenario: &'a Scenario, config: SimConfig) -> Self {
        Self { scenario, config }
    }

    /// Run every month of the scenario.
    ///
    /// A malformed action line ends the campaign immediately as a loss.
    /// Otherwise the campaign is won iff the total score is positive.
    pub fn run<P: Planner, O: SimObserver>(
        &self,
        planner:  &mut P,
        observer: &mut O,
    ) -> SimResult<CampaignOutcome> {
        let mut sim = Sim::new(self.config.clone())?;
        let max_warnings = self.config.max_warnings_displayed;
        let mut warnings = Vec::new();
        let mut months_played = 0;
        let mut verdict = None;

        for plan in &self.scenario.months {
            let new_nodes = sim.begin_month(plan.nodes.clone(), plan.budget_delta)?;
            let month = sim.current_month();

            let line = planner.plan(&MonthView {
                month,
                budget: sim.budget(),
                graph: sim.graph(),
                new_nodes: &new_nodes,
            });
            let requests = match parse_actions(&line) {
                Ok(requests) => requests,
                Err(e) => {
                    tracing::warn!(month, error = %e, "action line rejected");
                    verdict = Some(Verdict::Loss(e.to_string()));
                    break;
                }
            };

            let mut rejected = 0usize;
            for request in requests {
                let result = match sim.apply(request.clone()) {
                    Ok(())                          => Ok(()),
                    Err(SimError::Rejected(reason)) => Err(reason),
                    Err(e)                          => return Err(e),
                };
                observer.on_request(month, &request, &result);
                if let Err(reason) = result {
                    rejected += 1;
                    if rejected <= max_warnings {
                        warnings.push(reason.to_string());
                    }
                }
            }
            if let Some(summary) = hidden_warnings(rejected, max_warnings) {
                warnings.push(summary);
            }

            sim.launch_month(observer)?;
            sim.run_month(observer)?;
            months_played += 1;
        }

        let total_score = sim.total_score();
        let verdict = verdict.unwrap_or_else(|| {
            if total_score > 0 {
                Verdict::Win
            } else {
                Verdict::Loss("no points scored".to_string())
            }
        });
        tracing::info!(total_score, months_played, ?verdict, "campaign finished");

        let outcome = CampaignOutcome { total_score, months_played, verdict, warnings };
        observer.on_campaign_end(&outcome);
        Ok(outcome)
    }
}

/// Summary line for rejections beyond the displayed ones.
fn hidden_warnings(rejected: usize, shown: usize) -> Option<String> {
    match rejected.saturating_sub(shown) {
        0 => None,
        1 => Some("... and 1 other warning not displayed.".to_string()),
        n => Some(format!("... and {n} other warnings not displayed.")),
    }
}
