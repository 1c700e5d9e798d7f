//! `tc-sim`: daily simulator and month orchestration for tube_city.
//!
//! # One month
//!
//! ```text
//! begin_month(nodes, budget)   interest, new nodes, new budget
//! apply(request) × N           construction (before launch only); rejections are recoverable
//! launch_month()               oracle recompute, agent spawn, pod reset
//! simulate_one_day() …         ① teleports  ② pod dispatch  ③ boarding
//!                              until the day reports is_month_end
//! ```
//!
//! A month ends when nothing moved during a day, when no agents are left,
//! or after `days_per_month` days.  Agents still travelling are abandoned.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tc_core::SimConfig;
//! use tc_scenario::load_scenario_str;
//! use tc_sim::{Campaign, NoopObserver, ScriptedPlanner};
//!
//! let scenario = load_scenario_str(text)?;
//! let mut planner = ScriptedPlanner::from_script("TUBE 0 1;POD 1 0 1 0");
//! let outcome = Campaign::new(&scenario, SimConfig::default())
//!     .run(&mut planner, &mut NoopObserver)?;
//! ```

pub mod agent;
pub mod campaign;
pub mod error;
pub mod event;
pub mod observer;
pub mod planner;
pub mod sim;
pub mod simulator;


pub use agent::{Agent, AgentSet};
pub use campaign::{Campaign, CampaignOutcome, Verdict};
pub use error::{SimError, SimResult};
pub use event::SimEvent;
pub use observer::{EventLog, LoggedEvent, NoopObserver, SimObserver};
pub use planner::{MonthView, Planner, ScriptedPlanner, WaitPlanner};
pub use sim::{DayResult, Sim};
pub use simulator::{DailySimulator, DayOutcome};
