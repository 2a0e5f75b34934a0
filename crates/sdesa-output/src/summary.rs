//! End-of-run statistics derived from a [`RunReport`].
//!
//! Per activity: completions, mean and max waiting time, mean service time.
//! Per resource: number of uses, busy time, and utilization (busy time over
//! the final clock).  Services still running at a cutoff count as busy up to
//! the final clock.

use std::collections::BTreeMap;
use std::fmt;

use sdesa_core::{ActivityId, ResourceId};
use sdesa_entity::ResourceEntity;
use sdesa_sim::{RunReport, RunStatus};

use crate::ResourceRow;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub activity:     ActivityId,
    pub name:         String,
    pub completions:  u64,
    pub mean_waiting: f64,
    pub max_waiting:  f64,
    pub mean_service: f64,
    /// Services of this activity still running when the run halted.
    pub in_progress:  usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceUtilization {
    pub resource:    ResourceId,
    pub label:       String,
    pub kind:        String,
    pub uses:        u64,
    pub busy_time:   f64,
    pub utilization: f64,
    pub live:        bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub status:      RunStatus,
    pub final_clock: f64,
    pub activities:  Vec<ActivitySummary>,
    pub resources:   Vec<ResourceUtilization>,
}

#[derive(Default)]
struct Acc {
    completions: u64,
    waiting:     f64,
    max_waiting: f64,
    service:     f64,
    in_progress: usize,
}

impl RunSummary {
    pub fn from_report(report: &RunReport) -> Self {
        let final_clock = report.outcome.final_clock;
        let horizon = final_clock.as_f64();

        // ── Activities ────────────────────────────────────────────────────
        let mut acc: Vec<Acc> = (0..report.activity_names.len()).map(|_| Acc::default()).collect();
        for o in &report.observations {
            if let Some(a) = acc.get_mut(o.activity.index()) {
                a.completions += 1;
                a.waiting += o.waiting_time();
                a.max_waiting = a.max_waiting.max(o.waiting_time());
                a.service += o.service_time();
            }
        }
        for p in &report.in_progress {
            if let Some(a) = acc.get_mut(p.activity.index()) {
                a.in_progress += 1;
            }
        }
        let activities = acc
            .into_iter()
            .enumerate()
            .map(|(i, a)| {
                let id = ActivityId(i as u16);
                ActivitySummary {
                    activity:     id,
                    name:         report.activity_name(id).to_owned(),
                    completions:  a.completions,
                    mean_waiting: mean(a.waiting, a.completions),
                    max_waiting:  a.max_waiting,
                    mean_service: mean(a.service, a.completions),
                    in_progress:  a.in_progress,
                }
            })
            .collect();

        // ── Resources ─────────────────────────────────────────────────────
        let mut usage: BTreeMap<ResourceId, (u64, f64)> = BTreeMap::new();
        for o in &report.observations {
            for &r in &o.resources_held {
                let e = usage.entry(r).or_default();
                e.0 += 1;
                e.1 += o.service_time();
            }
        }
        for p in &report.in_progress {
            for &r in &p.held {
                let e = usage.entry(r).or_default();
                e.0 += 1;
                e.1 += final_clock.since(p.service_start);
            }
        }

        let mut known: BTreeMap<ResourceId, (&ResourceEntity, bool)> = BTreeMap::new();
        known.extend(report.resources.iter().map(|r| (r.id, (r, true))));
        known.extend(report.disposed.iter().map(|r| (r.id, (r, false))));

        let resources = known
            .into_iter()
            .map(|(id, (r, live))| {
                let (uses, busy_time) = usage.get(&id).copied().unwrap_or_default();
                ResourceUtilization {
                    resource: id,
                    label: r.label.clone(),
                    kind: report
                        .type_names
                        .get(r.kind.index())
                        .cloned()
                        .unwrap_or_default(),
                    uses,
                    busy_time,
                    utilization: if horizon > 0.0 { busy_time / horizon } else { 0.0 },
                    live,
                }
            })
            .collect();

        Self { status: report.outcome.status, final_clock: horizon, activities, resources }
    }

    /// Mean utilization across every resource.
    pub fn overall_utilization(&self) -> f64 {
        let total: f64 = self.resources.iter().map(|r| r.utilization).sum();
        mean(total, self.resources.len() as u64)
    }

    pub fn total_completions(&self) -> u64 {
        self.activities.iter().map(|a| a.completions).sum()
    }

    pub fn resource_rows(&self) -> Vec<ResourceRow> {
        self.resources
            .iter()
            .map(|r| ResourceRow {
                resource_id: r.resource.0,
                label:       r.label.clone(),
                kind:        r.kind.clone(),
                uses:        r.uses,
                busy_time:   r.busy_time,
                utilization: r.utilization,
                live:        r.live,
            })
            .collect()
    }
}

fn mean(sum: f64, n: u64) -> f64 {
    if n == 0 { 0.0 } else { sum / n as f64 }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} at t={:.2}", self.status, self.final_clock)?;
        writeln!(f, "{:<12} {:>6} {:>10} {:>10} {:>10}", "activity", "done", "mean wait", "max wait", "mean svc")?;
        for a in &self.activities {
            writeln!(
                f,
                "{:<12} {:>6} {:>10.2} {:>10.2} {:>10.2}",
                a.name, a.completions, a.mean_waiting, a.max_waiting, a.mean_service
            )?;
        }
        writeln!(f, "{:<12} {:>6} {:>10} {:>10}", "resource", "uses", "busy", "util")?;
        for r in &self.resources {
            writeln!(f, "{:<12} {:>6} {:>10.2} {:>9.1}%", r.label, r.uses, r.busy_time, r.utilization * 100.0)?;
        }
        Ok(())
    }
}
