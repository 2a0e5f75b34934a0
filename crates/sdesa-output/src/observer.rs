//! `OutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use sdesa_sim::{Observation, SimObserver};

use crate::row::ObservationRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, RunSummary};

/// A [`SimObserver`] that streams every completed service to an
/// [`OutputWriter`] as it happens.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, call [`finish`][Self::finish] to
/// write the resource table and surface the first stored error.
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Number of observation rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write the per-resource table from `summary`, flush, and return the
    /// first error seen during or after the run.
    pub fn finish(&mut self, summary: &RunSummary) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.write_resources(&summary.resource_rows())?;
        self.writer.finish()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_service_end(&mut self, observation: &Observation) {
        let result = self.writer.write_observation(&ObservationRow::from(observation));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }
}
