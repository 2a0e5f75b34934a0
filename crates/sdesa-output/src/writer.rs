//! The `OutputWriter` trait implemented by backend writers.

use crate::{ObservationRow, OutputResult, ResourceRow};

pub trait OutputWriter {
    /// Append one completed service.
    fn write_observation(&mut self, row: &ObservationRow) -> OutputResult<()>;

    /// Write the per-resource table.  Called once, after the run.
    fn write_resources(&mut self, rows: &[ResourceRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
