//! `tc-scenario`: scenario input and turn commands for the tube_city
//! simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`scenario`] | `Scenario`, `MonthPlan`                                   |
//! | [`loader`]   | `load_scenario`, `load_scenario_reader`, `load_scenario_str` |
//! | [`command`]  | `parse_action`, `parse_actions`, `split_actions`          |
//! | [`generate`] | `generate_scenario`, `GenParams` (seeded, via `rand`)     |
//! | [`error`]    | `ScenarioError`, `CommandError`                           |

pub mod command;
pub mod error;
pub mod generate;
pub mod loader;
pub mod scenario;


pub use command::{parse_action, parse_actions, split_actions};
pub use error::{CommandError, CommandResult, ScenarioError, ScenarioResult};
pub use generate::{GenParams, generate_scenario};
pub use loader::{load_scenario, load_scenario_reader, load_scenario_str};
pub use scenario::{MonthPlan, Scenario};
