//! Unit tests for sdesa-output.

use sdesa_core::{ActivityId, SimConfig};
use sdesa_model::{ActivityDef, Fixed, InitialFlow, InitialResource, Model};
use sdesa_sim::{EngineBuilder, NoopObserver, RunReport, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three jobs of 5 on one crew, plus one job that consumes a charge.
fn model() -> Model {
    let mut m = Model::new("yard");
    let crew = m.types.declare("crew").unwrap();
    let charge = m.types.declare("charge").unwrap();
    let job = m
        .graph
        .add("job", ActivityDef::new(Fixed(5.0)).requires([crew]).releases([crew]))
        .unwrap();
    let blast = m.graph.add("blast", ActivityDef::new(Fixed(2.0)).requires([charge])).unwrap();
    m.add_resource(InitialResource::new("crew_1", crew));
    m.add_resource(InitialResource::new("charge_1", charge).disposable());
    for i in 0..3 {
        m.add_flow(InitialFlow::new(format!("j{i}"), job));
    }
    m.add_flow(InitialFlow::new("face", blast));
    m
}

fn run_with<O: SimObserver>(config: SimConfig, observer: &mut O) -> RunReport {
    EngineBuilder::new(config, model()).build().unwrap().run(observer).unwrap()
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{CsvWriter, OutputObserver, OutputWriter, RunSummary};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn files_and_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("observations.csv")),
            [
                "activity_id",
                "flow_id",
                "arrival",
                "service_start",
                "service_end",
                "waiting_time",
                "service_time",
                "resources"
            ]
        );
        assert_eq!(
            headers(dir.path().join("resources.csv")),
            ["resource_id", "label", "kind", "uses", "busy_time", "utilization", "live"]
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        CsvWriter::new(&nested).unwrap();
        assert!(nested.join("observations.csv").exists());
    }

    #[test]
    fn streams_observations_and_resource_table() {
        let dir = tmp();
        let mut obs = OutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let report = run_with(SimConfig::unbounded(1), &mut obs);
        assert_eq!(obs.rows_written(), 4);

        let summary = RunSummary::from_report(&report);
        obs.finish(&summary).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("observations.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 4);
        // blast (flow 3) ends first at t=2.
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[0][7], "1");
        // Last crew job waited 10.
        assert_eq!(&rows[3][5], "10");

        let mut rdr = csv::Reader::from_path(dir.path().join("resources.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "crew_1");
        assert_eq!(&rows[0][3], "3");
        assert_eq!(&rows[0][6], "1");
        assert_eq!(&rows[1][2], "charge");
        assert_eq!(&rows[1][6], "0");
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use super::*;
    use crate::RunSummary;

    #[test]
    fn completed_run() {
        let report = run_with(SimConfig::unbounded(1), &mut NoopObserver);
        let s = RunSummary::from_report(&report);
        assert_eq!(s.final_clock, 15.0);
        assert_eq!(s.total_completions(), 4);

        let job = &s.activities[0];
        assert_eq!(job.name, "job");
        assert_eq!(job.completions, 3);
        assert_eq!(job.mean_waiting, 5.0);
        assert_eq!(job.max_waiting, 10.0);
        assert_eq!(job.mean_service, 5.0);

        let crew = &s.resources[0];
        assert_eq!((crew.uses, crew.busy_time, crew.utilization), (3, 15.0, 1.0));
        let charge = &s.resources[1];
        assert!(!charge.live);
        assert_eq!(charge.busy_time, 2.0);
    }

    #[test]
    fn cutoff_counts_partial_busy_time() {
        let report = run_with(SimConfig::bounded(7.0, 1), &mut NoopObserver);
        let s = RunSummary::from_report(&report);
        assert_eq!(s.final_clock, 7.0);
        assert_eq!(s.activities[0].completions, 1);
        assert_eq!(s.activities[0].in_progress, 1);
        // [0, 5) done plus [5, 7) of the running job.
        assert_eq!(s.resources[0].busy_time, 7.0);
        assert_eq!(s.resources[0].utilization, 1.0);
    }

    #[test]
    fn display_lists_every_activity() {
        let report = run_with(SimConfig::unbounded(1), &mut NoopObserver);
        let text = RunSummary::from_report(&report).to_string();
        assert!(text.starts_with("Completed"));
        assert!(text.contains("job"));
        assert!(text.contains("blast"));
        assert!(text.contains("crew_1"));
    }

    #[test]
    fn empty_report_has_zero_utilization() {
        let report = EngineBuilder::new(SimConfig::unbounded(0), Model::new("empty"))
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        let s = RunSummary::from_report(&report);
        assert!(s.activities.is_empty());
        assert_eq!(s.overall_utilization(), 0.0);
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{ObservationRecorder, TracingObserver};

    #[test]
    fn recorder_mirrors_report() {
        let mut rec = ObservationRecorder::new();
        let report = run_with(SimConfig::unbounded(1), &mut rec);
        assert_eq!(rec.observations, report.observations);
        assert_eq!(rec.starts, 4);
        assert_eq!(rec.outcome, Some(report.outcome));
        assert_eq!(rec.for_activity(ActivityId(0)).count(), 3);
    }

    #[test]
    fn tracing_observer_composes() {
        // No subscriber installed: every event is a no-op.
        let mut obs = (TracingObserver::new(), ObservationRecorder::new());
        let report = run_with(SimConfig::unbounded(1), &mut obs);
        assert!(report.outcome.is_completed());
        assert_eq!(obs.1.observations.len(), 4);
    }
}
