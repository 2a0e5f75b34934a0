//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `observations.csv`
//! - `resources.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ObservationRow, OutputResult, ResourceRow};

pub struct CsvWriter {
    observations: Writer<File>,
    resources:    Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut observations = Writer::from_path(dir.join("observations.csv"))?;
        observations.write_record([
            "activity_id",
            "flow_id",
            "arrival",
            "service_start",
            "service_end",
            "waiting_time",
            "service_time",
            "resources",
        ])?;

        let mut resources = Writer::from_path(dir.join("resources.csv"))?;
        resources.write_record(["resource_id", "label", "kind", "uses", "busy_time", "utilization", "live"])?;

        Ok(Self { observations, resources, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_observation(&mut self, row: &ObservationRow) -> OutputResult<()> {
        self.observations.write_record(&[
            row.activity_id.to_string(),
            row.flow_id.to_string(),
            row.arrival.to_string(),
            row.service_start.to_string(),
            row.service_end.to_string(),
            row.waiting_time.to_string(),
            row.service_time.to_string(),
            row.resources.clone(),
        ])?;
        Ok(())
    }

    fn write_resources(&mut self, rows: &[ResourceRow]) -> OutputResult<()> {
        for row in rows {
            self.resources.write_record(&[
                row.resource_id.to_string(),
                row.label.clone(),
                row.kind.clone(),
                row.uses.to_string(),
                row.busy_time.to_string(),
                row.utilization.to_string(),
                (row.live as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.observations.flush()?;
        self.resources.flush()?;
        Ok(())
    }
}
