//! Fluent builder for constructing an [`Engine`].

use sdesa_core::{SimClock, SimConfig, SimTime};
use sdesa_entity::{FlowRegistry, ResourcePool};
use sdesa_model::{AllSuccessors, Model, Router};

use crate::{Engine, EventCalendar, SimResult, Wake, WakeQueue};

/// Fluent builder for [`Engine<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: run limit and seed
/// - [`Model`]: resource types, activity graph, initial entities
///
/// # Optional inputs
///
/// | Method       | Default          |
/// |--------------|------------------|
/// | `.router(r)` | `AllSuccessors`  |
///
/// `build` validates the model and the configuration before creating any
/// state, so an invalid model never yields a partially initialised engine.
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(config, model)
///     .router(MyRouter::default())
///     .build()?;
/// ```
pub struct EngineBuilder<R: Router = AllSuccessors> {
    config: SimConfig,
    model:  Model,
    router: R,
}

impl EngineBuilder<AllSuccessors> {
    pub fn new(config: SimConfig, model: Model) -> Self {
        Self { config, model, router: AllSuccessors }
    }
}

impl<R: Router> EngineBuilder<R> {
    /// Replace the successor-selection policy.
    pub fn router<R2: Router>(self, router: R2) -> EngineBuilder<R2> {
        EngineBuilder { config: self.config, model: self.model, router }
    }

    pub fn build(self) -> SimResult<Engine<R>> {
        // ── Validate before touching anything ─────────────────────────────
        self.model.validate()?;
        self.config.run_limit()?;

        let Model { types, graph, flows: initial_flows, resources: initial_resources, .. } =
            self.model;

        let mut wake = WakeQueue::new();

        // ── Resource pool ─────────────────────────────────────────────────
        let mut pool = ResourcePool::new();
        for r in initial_resources {
            let ready = r.ready_time;
            let id = pool.insert(r.label, r.kind, ready, r.available, r.disposable, r.attributes)?;
            if ready > SimTime::ZERO {
                wake.push(ready, Wake::Ready(id));
            }
        }

        // ── Flow registry ─────────────────────────────────────────────────
        let mut flows = FlowRegistry::new();
        for f in initial_flows {
            let arrival = f.arrival;
            let id = flows.admit(f.label, f.activity, arrival, None, f.attributes)?;
            if arrival > SimTime::ZERO {
                wake.push(arrival, Wake::Arrival(id));
            }
        }

        Ok(Engine {
            config:       self.config,
            clock:        SimClock::new(),
            types,
            graph,
            router:       self.router,
            pool,
            flows,
            calendar:     EventCalendar::new(),
            wake,
            observations: Vec::new(),
            disposed:     Vec::new(),
            has_run:      false,
        })
    }
}
