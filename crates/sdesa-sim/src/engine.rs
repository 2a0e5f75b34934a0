//! The `Engine` and its scan / end-service loop.

use std::cmp::Reverse;

use sdesa_core::{ActivityId, CoreError, FlowId, ResourceId, SimClock, SimConfig, SimTime};
use sdesa_entity::{EntityError, FlowEntity, FlowRegistry, ResourceEntity, ResourcePool};
use sdesa_model::{Activity, ActivityGraph, AllSuccessors, ModelError, ResourceTypes, Router};

use crate::{
    EventCalendar, InProgress, Observation, RunOutcome, RunReport, RunStatus, SimError,
    SimObserver, SimResult, Wake, WakeQueue,
};

/// The simulation engine.
///
/// Owns every piece of mutable run state: the clock, the resource pool, the
/// flow registry, the event calendar, and the wake queue.  The model's
/// activity graph and resource types are moved in at build time and treated
/// as read-only apart from the samplers they carry.
///
/// An engine executes exactly one run; a second call to [`run`](Self::run)
/// returns [`SimError::AlreadyRun`].
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<R: Router = AllSuccessors> {
    pub(crate) config:       SimConfig,
    pub(crate) clock:        SimClock,
    pub(crate) types:        ResourceTypes,
    pub(crate) graph:        ActivityGraph,
    pub(crate) router:       R,
    pub(crate) pool:         ResourcePool,
    pub(crate) flows:        FlowRegistry,
    pub(crate) calendar:     EventCalendar,
    pub(crate) wake:         WakeQueue,
    pub(crate) observations: Vec<Observation>,
    pub(crate) disposed:     Vec<ResourceEntity>,
    pub(crate) has_run:      bool,
}

impl<R: Router> Engine<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the system completes, drains, or reaches
    /// `config.duration`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        let limit = self.config.run_limit()?;
        self.run_until(limit, observer)
    }

    /// Run with an explicit limit instead of `config.duration`.
    pub fn run_for<O: SimObserver>(&mut self, duration: f64, observer: &mut O) -> SimResult<RunReport> {
        let limit = SimTime::new(duration)?;
        self.run_until(Some(limit), observer)
    }

    /// Put a resource in or out of service right now.
    ///
    /// A resource taken out of service while held finishes its current use
    /// and is then not acquired again until switched back on.
    pub fn set_available(&mut self, resource: ResourceId, available: bool) -> SimResult<()> {
        self.pool.set_available(resource, available)?;
        Ok(())
    }

    /// Toggle a resource's in-service flag at a future time `at`.
    pub fn schedule_availability(
        &mut self,
        resource:  ResourceId,
        at:        SimTime,
        available: bool,
    ) -> SimResult<()> {
        if self.pool.get(resource).is_none() {
            return Err(EntityError::UnknownResource(resource).into());
        }
        let now = self.clock.now();
        if at < now {
            return Err(CoreError::ClockBackwards { now, requested: at }.into());
        }
        self.wake.push(at, Wake::Toggle { resource, available });
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    pub fn flows(&self) -> &FlowRegistry {
        &self.flows
    }

    pub fn graph(&self) -> &ActivityGraph {
        &self.graph
    }

    pub fn types(&self) -> &ResourceTypes {
        &self.types
    }

    pub fn calendar(&self) -> &EventCalendar {
        &self.calendar
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }

    // ── Main loop ─────────────────────────────────────────────────────────

    fn run_until<O: SimObserver>(
        &mut self,
        limit:    Option<SimTime>,
        observer: &mut O,
    ) -> SimResult<RunReport> {
        if self.has_run {
            return Err(SimError::AlreadyRun);
        }
        self.has_run = true;

        observer.on_run_start(self.clock.now(), limit);
        self.apply_wakes(self.clock.now(), observer)?;
        self.scan(observer)?;

        let status = loop {
            let next = match (self.wake.next_time(), self.calendar.peek_time()) {
                (Some(w), Some(e)) => Some(w.min(e)),
                (w, e) => w.or(e),
            };

            let Some(t) = next else {
                // Nothing pending: in-service entities always have an event,
                // so anyone left is waiting for something that never comes.
                break if self.flows.waiting_count() == 0 {
                    RunStatus::Completed
                } else {
                    RunStatus::Drained
                };
            };

            if let Some(limit) = limit {
                if t > limit {
                    self.advance(limit, observer)?;
                    break RunStatus::Cutoff;
                }
            }

            self.advance(t, observer)?;
            self.apply_wakes(t, observer)?;

            if self.calendar.peek_time() == Some(t) {
                if let Some(event) = self.calendar.pop_next() {
                    self.end_service(event.flow, observer)?;
                }
            }

            self.scan(observer)?;
        };

        let outcome = RunOutcome { status, final_clock: self.clock.now() };
        observer.on_run_end(&outcome);
        Ok(self.report(outcome))
    }

    fn advance<O: SimObserver>(&mut self, to: SimTime, observer: &mut O) -> SimResult<()> {
        let from = self.clock.now();
        self.clock.advance_to(to)?;
        if to > from {
            observer.on_clock_advance(from, to);
        }
        Ok(())
    }

    fn apply_wakes<O: SimObserver>(&mut self, t: SimTime, observer: &mut O) -> SimResult<()> {
        let Some(wakes) = self.wake.drain_at(t) else {
            return Ok(());
        };
        // Arrivals and ready times need no state change: the scan that
        // follows sees them through `now`.
        for wake in wakes {
            if let Wake::Toggle { resource, available } = wake {
                // The resource may have been consumed since the toggle was
                // scheduled; there is nothing left to switch.
                if self.pool.get(resource).is_none() {
                    continue;
                }
                let previous = self.pool.set_available(resource, available)?;
                if previous != available {
                    observer.on_resource_toggle(t, resource, available);
                }
            }
        }
        Ok(())
    }

    // ── Scan phase ────────────────────────────────────────────────────────

    /// Try to start every waiting entity that has arrived, highest priority
    /// first, then earliest arrival, then lowest id.  A successful start
    /// does not restart the scan.
    fn scan<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now();

        let mut queue: Vec<(Reverse<i32>, SimTime, FlowId, ActivityId)> = Vec::new();
        for id in self.flows.waiting() {
            let flow = self.flows.get(id).ok_or(EntityError::UnknownFlow(id))?;
            if flow.arrival > now {
                continue;
            }
            let priority = self.activity(flow.activity)?.priority;
            queue.push((Reverse(priority), flow.arrival, id, flow.activity));
        }
        queue.sort_unstable();

        for (_, _, flow, activity) in queue {
            let required = &self
                .graph
                .get(activity)
                .ok_or(ModelError::UnknownActivity(activity))?
                .required;
            let Some(held) = self.pool.try_acquire_all(required, flow, now) else {
                continue;
            };

            let value = self
                .graph
                .sample_duration(activity)
                .ok_or(ModelError::UnknownActivity(activity))?;
            if !(value.is_finite() && value >= 0.0) {
                // Leave the pool as it was before the failed start.
                self.pool.abandon(&held, flow)?;
                return Err(SimError::MalformedDuration { activity, flow, value });
            }
            let end = now.after(value)?;

            self.flows.begin_service(flow, now, held.clone())?;
            self.calendar.schedule(end, flow, activity);
            observer.on_service_start(now, flow, activity, &held);
        }
        Ok(())
    }

    // ── End-service phase ─────────────────────────────────────────────────

    fn end_service<O: SimObserver>(&mut self, flow: FlowId, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now();
        let entity = self.flows.complete(flow)?;
        let activity = self.activity(entity.activity)?.clone();

        self.hand_back(&entity, now)?;

        for &kind in &activity.generated {
            let name = self.types.name(kind).unwrap_or("resource");
            let label = format!("{name}_{}", self.pool.created_count());
            self.pool.generate(kind, label, now)?;
        }

        let observation = Observation {
            activity:       activity.id,
            flow,
            arrival:        entity.arrival,
            service_start:  entity.service_start.unwrap_or(entity.arrival),
            service_end:    now,
            resources_held: entity.held.clone(),
        };
        observer.on_service_end(&observation);
        self.observations.push(observation);

        self.spawn_successors(&activity, &entity, now)
    }

    /// Settle every resource the entity held: disposable ones are removed,
    /// every other one goes back to the pool ready at `now`.
    fn hand_back(&mut self, entity: &FlowEntity, now: SimTime) -> SimResult<()> {
        for &id in &entity.held {
            let disposable = self
                .pool
                .get(id)
                .map(|r| r.disposable)
                .ok_or(EntityError::UnknownResource(id))?;
            if disposable {
                let gone = self.pool.dispose(id, entity.id)?;
                self.disposed.push(gone);
            } else {
                self.pool.release(id, entity.id, now)?;
            }
        }
        Ok(())
    }

    fn spawn_successors(&mut self, activity: &Activity, entity: &FlowEntity, now: SimTime) -> SimResult<()> {
        let chosen = self.router.route(activity, entity);
        for next in chosen {
            if !activity.successors.contains(&next) {
                return Err(SimError::InvalidRoute {
                    activity: activity.id,
                    chosen:   next,
                    flow:     entity.id,
                });
            }
            let name = self.graph.name(next).unwrap_or("?");
            let label = format!("{}_{name}", entity.label);
            self.flows
                .admit(label, next, now, Some(entity.id), entity.attributes.clone())?;
        }
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn activity(&self, id: ActivityId) -> SimResult<&Activity> {
        self.graph
            .get(id)
            .ok_or_else(|| ModelError::UnknownActivity(id).into())
    }

    fn report(&mut self, outcome: RunOutcome) -> RunReport {
        let in_progress = self
            .calendar
            .iter()
            .filter_map(|event| {
                let flow = self.flows.get(event.flow)?;
                Some(InProgress {
                    flow:          event.flow,
                    activity:      event.activity,
                    arrival:       flow.arrival,
                    service_start: flow.service_start?,
                    due:           event.time,
                    held:          flow.held.clone(),
                })
            })
            .collect();

        RunReport {
            outcome,
            observations:   std::mem::take(&mut self.observations),
            in_progress,
            flows:          self.flows.active().cloned().collect(),
            resources:      self.pool.live().cloned().collect(),
            disposed:       std::mem::take(&mut self.disposed),
            activity_names: (0..self.graph.len())
                .map(|i| self.graph.name(ActivityId(i as u16)).unwrap_or("?").to_owned())
                .collect(),
            type_names:     self.types.iter().map(|(_, n)| n.to_owned()).collect(),
        }
    }
}
