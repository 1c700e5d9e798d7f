//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tc_sim::{CampaignOutcome, DayResult, SimEvent, SimObserver};

use crate::row::{DaySummaryRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes day summaries and events to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  [`on_campaign_end`](SimObserver::on_campaign_end)
    /// does this too; call it directly when driving a `Sim` by hand.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, month: u32, day: u32, event: &SimEvent) {
        let result = self.writer.write_event(&EventRow::new(month, day, event));
        self.store_err(result);
    }

    fn on_day_end(&mut self, result: &DayResult) {
        let result = self.writer.write_day_summary(&DaySummaryRow::from(result));
        self.store_err(result);
    }

    fn on_campaign_end(&mut self, _outcome: &CampaignOutcome) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
