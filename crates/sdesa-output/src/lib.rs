//! `sdesa-output`: everything downstream of the engine loop.
//!
//! The engine itself neither logs nor writes files; this crate supplies the
//! observers and writers that do.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`tracer`]   | `TracingObserver`: engine hooks as `tracing` events       |
//! | [`recorder`] | `ObservationRecorder`: in-memory copy of the log          |
//! | [`observer`] | `OutputObserver<W>`: streams the log to an `OutputWriter` |
//! | [`csv`]      | `CsvWriter`: `observations.csv`, `resources.csv`          |
//! | [`summary`]  | `RunSummary`, `ActivitySummary`, `ResourceUtilization`     |
//! | [`row`]      | Plain row types shared by writers                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sdesa_output::{CsvWriter, OutputObserver, RunSummary, TracingObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = (TracingObserver::new(), OutputObserver::new(writer));
//! let report = engine.run(&mut obs)?;
//! let summary = RunSummary::from_report(&report);
//! obs.1.finish(&summary)?;
//! println!("{summary}");
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod recorder;
pub mod row;
pub mod summary;
pub mod tracer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use recorder::ObservationRecorder;
pub use row::{ObservationRow, ResourceRow};
pub use summary::{ActivitySummary, ResourceUtilization, RunSummary};
pub use tracer::TracingObserver;
pub use writer::OutputWriter;
