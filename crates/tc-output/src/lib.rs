//! `tc-output`: simulation output writers for tube_city.
//!
//! | Backend | Files created                        |
//! |---------|--------------------------------------|
//! | CSV     | `day_summaries.csv`, `events.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `tc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let outcome = Campaign::new(&scenario, config).run(&mut planner, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DaySummaryRow, EventRow};
pub use writer::OutputWriter;
