//! solo: play one tube_city campaign from the command line.
//!
//! ```text
//! solo [SCENARIO] [ACTIONS] [OUTPUT_DIR]
//! ```
//!
//! Without a scenario file a city is generated from a fixed seed.  Without
//! an action script the built-in greedy planner links every new landing pad
//! to the nearest node of each category its astronauts want.  Day summaries
//! and events are written as CSV to `OUTPUT_DIR` (default `output/solo`).
//! Set `RUST_LOG=debug` to see every construction decision.

mod greedy;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tc_core::SimConfig;
use tc_output::{CsvWriter, SimOutputObserver};
use tc_scenario::{GenParams, generate_scenario, load_scenario};
use tc_sim::{Campaign, CampaignOutcome, Planner, ScriptedPlanner, Verdict};

use greedy::GreedyPlanner;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64  = 42;
const DEFAULT_OUT: &str = "output/solo";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let scenario_path = args.next().map(PathBuf::from);
    let actions_path = args.next().map(PathBuf::from);
    let out_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUT), PathBuf::from);

    // 1. Scenario.
    let scenario = match &scenario_path {
        Some(path) => load_scenario(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => generate_scenario(SEED, &GenParams::default()),
    };
    println!("=== solo: tube_city ===");
    println!(
        "Months: {}  |  Nodes: {}  |  Source: {}",
        scenario.month_count(),
        scenario.node_count(),
        scenario_path.as_deref().map_or("generated".into(), |p| p.display().to_string()),
    );

    // 2. Output.
    let writer = CsvWriter::new(&out_dir)
        .with_context(|| format!("creating output in {}", out_dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);

    // 3. Run.
    let config = SimConfig::default();
    let campaign = Campaign::new(&scenario, config);
    let t0 = Instant::now();
    let outcome = match &actions_path {
        Some(path) => {
            let script = std::fs::read_to_string(path)
                .with_context(|| format!("reading actions {}", path.display()))?;
            run(&campaign, &mut ScriptedPlanner::from_script(&script), &mut obs)?
        }
        None => run(&campaign, &mut GreedyPlanner::default(), &mut obs)?,
    };
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    report(&outcome, &out_dir);
    println!("Campaign complete in {:.3} s", elapsed.as_secs_f64());
    Ok(())
}

fn run<P: Planner>(
    campaign: &Campaign<'_>,
    planner:  &mut P,
    obs:      &mut SimOutputObserver<CsvWriter>,
) -> Result<CampaignOutcome> {
    Ok(campaign.run(planner, obs)?)
}

fn report(outcome: &CampaignOutcome, out_dir: &Path) {
    println!();
    for warning in &outcome.warnings {
        println!("  warning: {warning}");
    }
    match &outcome.verdict {
        Verdict::Win => println!("Win: final score {}", outcome.total_score),
        Verdict::Loss(reason) => println!("Loss: {reason} (score {})", outcome.total_score),
    }
    println!("Months played: {}", outcome.months_played);
    println!("  {}", out_dir.join("day_summaries.csv").display());
    println!("  {}", out_dir.join("events.csv").display());
}
