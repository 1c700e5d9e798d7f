//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `day_summaries.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DaySummaryRow, EventRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (creating `dir` if needed) and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("day_summaries.csv"))?;
        summaries.write_record(["month", "day", "score_delta", "month_end", "active_agents", "budget"])?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["month", "day", "kind", "from", "to", "agent", "pod", "count", "points"])?;

        Ok(Self { summaries, events, finished: false })
    }
}

fn opt(v: Option<u32>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.month.to_string(),
            row.day.to_string(),
            row.score_delta.to_string(),
            (row.month_end as u8).to_string(),
            row.active_agents.to_string(),
            row.budget.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.month.to_string(),
            row.day.to_string(),
            row.kind.to_string(),
            opt(row.from),
            opt(row.to),
            opt(row.agent),
            opt(row.pod),
            row.count.to_string(),
            row.points.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
