//! Seeded random scenario generator.
//!
//! The same seed and parameters always produce the same scenario, so
//! generated cities can be used in regression tests and benchmarks.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use tc_core::{Category, Point};
use tc_network::NodeSpec;

use crate::{MonthPlan, Scenario};

/// Shape of a generated scenario.
#[derive(Debug, Clone)]
pub struct GenParams {
    pub months: usize,
    /// Landing pads added per month.
    pub arrivals_per_month: usize,
    /// Work nodes added per month.
    pub work_per_month: usize,
    /// Work categories are drawn from `1..=work_categories`.
    pub work_categories: u16,
    /// Agents listed in each landing pad's manifest.
    pub agents_per_arrival: usize,
    /// Budget credited at the start of every month.
    pub budget_per_month: i64,
    /// Board extent; positions are drawn from `0..width` × `0..height`.
    pub width: i32,
    pub height: i32,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            months:             3,
            arrivals_per_month: 2,
            work_per_month:     4,
            work_categories:    3,
            agents_per_arrival: 20,
            budget_per_month:   4_000,
            width:              160,
            height:             90,
        }
    }
}

/// Generate a scenario from `seed`.
///
/// Positions never repeat.  Every category that appears in a manifest has at
/// least one work node somewhere in the campaign.
pub fn generate_scenario(seed: u64, params: &GenParams) -> Scenario {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut taken: HashSet<Point> = HashSet::new();
    let categories = params.work_categories.max(1);

    let mut fresh_point = |rng: &mut SmallRng| loop {
        let p = Point::new(rng.gen_range(0..params.width.max(1)), rng.gen_range(0..params.height.max(1)));
        if taken.insert(p) || taken.len() as i64 >= params.width as i64 * params.height as i64 {
            return p;
        }
    };

    let mut months = Vec::with_capacity(params.months);
    for m in 0..params.months {
        let mut nodes = Vec::with_capacity(params.arrivals_per_month + params.work_per_month);

        for w in 0..params.work_per_month {
            // Cycle through categories in the first month so each exists.
            let category = if m == 0 && w < categories as usize {
                Category(w as u16 + 1)
            } else {
                Category(rng.gen_range(1..=categories))
            };
            let p = fresh_point(&mut rng);
            nodes.push(NodeSpec::work(category, p.x, p.y));
        }

        for _ in 0..params.arrivals_per_month {
            let manifest = (0..params.agents_per_arrival)
                .map(|_| Category(rng.gen_range(1..=categories)))
                .collect();
            let p = fresh_point(&mut rng);
            nodes.push(NodeSpec::arrival(p.x, p.y, manifest));
        }

        months.push(MonthPlan { budget_delta: params.budget_per_month, nodes });
    }

    Scenario { playback_ratio: None, simplified: false, months }
}
