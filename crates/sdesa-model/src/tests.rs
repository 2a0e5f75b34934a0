//! Unit tests for sdesa-model.

use sdesa_core::{ActivityId, ResourceTypeId, SamplerRng, SimTime};

use crate::{
    ActivityDef, ActivityGraph, Distributed, Fixed, FnSampler, InitialFlow, InitialResource, Model,
    ModelError, ResourceTypes, Sampler,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// load → haul → dump → return → load, one loader and one spotter.
fn earthmoving() -> Model {
    let mut m = Model::new("earthmoving");
    let loader = m.types.declare("loader").unwrap();
    let spotter = m.types.declare("spotter").unwrap();

    let load = m.graph.declare("load").unwrap();
    let haul = m.graph.declare("haul").unwrap();
    let dump = m.graph.declare("dump").unwrap();
    let ret = m.graph.declare("return").unwrap();

    m.graph
        .define(load, ActivityDef::new(Fixed(8.0)).requires([loader]).releases([loader]).successor(haul))
        .unwrap();
    m.graph.define(haul, ActivityDef::new(Fixed(20.0)).successor(dump)).unwrap();
    m.graph
        .define(dump, ActivityDef::new(Fixed(5.0)).requires([spotter]).releases([spotter]).successor(ret))
        .unwrap();
    m.graph.define(ret, ActivityDef::new(Fixed(15.0)).successor(load)).unwrap();

    m.add_resource(InitialResource::new("loader_1", loader));
    m.add_resource(InitialResource::new("spotter_1", spotter));
    for i in 0..5 {
        m.add_flow(InitialFlow::new(format!("truck_{i}"), load));
    }
    m
}

// ── ResourceTypes ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod types {
    use super::*;

    #[test]
    fn declare_is_idempotent() {
        let mut types = ResourceTypes::new();
        let a = types.declare("loader").unwrap();
        let b = types.declare("spotter").unwrap();
        assert_eq!(types.declare("loader").unwrap(), a);
        assert_eq!((a, b), (ResourceTypeId(0), ResourceTypeId(1)));
        assert_eq!(types.len(), 2);
        assert_eq!(types.name(b), Some("spotter"));
        assert_eq!(types.lookup("spotter"), Some(b));
        assert!(!types.contains(ResourceTypeId(2)));
    }
}

// ── ActivityGraph ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use super::*;

    #[test]
    fn declare_then_define() {
        let mut g = ActivityGraph::new();
        let a = g.declare("a").unwrap();
        assert!(g.get(a).is_none());
        g.define(a, ActivityDef::new(Fixed(1.0)).priority(3)).unwrap();
        let act = g.get(a).unwrap();
        assert_eq!(act.name, "a");
        assert_eq!(act.priority, 3);
        assert!(act.is_terminal());
        assert!(act.is_unconstrained());
    }

    #[test]
    fn define_twice_is_an_error() {
        let mut g = ActivityGraph::new();
        let a = g.add("a", ActivityDef::new(Fixed(1.0))).unwrap();
        assert_eq!(
            g.define(a, ActivityDef::new(Fixed(2.0))),
            Err(ModelError::AlreadyDefined("a".into()))
        );
    }

    #[test]
    fn define_unknown_id_is_an_error() {
        let mut g = ActivityGraph::new();
        assert_eq!(
            g.define(ActivityId(4), ActivityDef::new(Fixed(1.0))),
            Err(ModelError::UnknownActivity(ActivityId(4)))
        );
    }

    #[test]
    fn sample_duration_uses_the_activity_sampler() {
        let mut g = ActivityGraph::new();
        let a = g.add("a", ActivityDef::new(Fixed(2.5))).unwrap();
        assert_eq!(g.sample_duration(a), Some(2.5));
        assert_eq!(g.sample_duration(ActivityId(9)), None);
    }

    #[test]
    fn lookup_by_name() {
        let m = earthmoving();
        assert_eq!(m.graph.lookup("dump"), Some(ActivityId(2)));
        assert_eq!(m.graph.name(ActivityId(3)), Some("return"));
        assert_eq!(m.graph.iter().count(), 4);
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn earthmoving_is_valid() {
        earthmoving().validate().unwrap();
    }

    #[test]
    fn undeclared_successor() {
        let mut m = Model::new("bad");
        m.graph.add("a", ActivityDef::new(Fixed(1.0)).successor(ActivityId(7))).unwrap();
        assert_eq!(
            m.validate(),
            Err(ModelError::UndeclaredSuccessor { activity: "a".into(), successor: ActivityId(7) })
        );
    }

    #[test]
    fn declared_but_undefined_activity() {
        let mut m = Model::new("bad");
        let b = m.graph.declare("b").unwrap();
        m.graph.add("a", ActivityDef::new(Fixed(1.0)).successor(b)).unwrap();
        assert_eq!(m.validate(), Err(ModelError::UndefinedActivity("b".into())));
    }

    #[test]
    fn undeclared_required_type() {
        let mut m = Model::new("bad");
        m.graph.add("a", ActivityDef::new(Fixed(1.0)).requires([ResourceTypeId(0)])).unwrap();
        assert!(matches!(m.validate(), Err(ModelError::UndeclaredResourceType { .. })));
    }

    #[test]
    fn undeclared_generated_type() {
        let mut m = Model::new("bad");
        m.types.declare("soil").unwrap();
        m.graph.add("a", ActivityDef::new(Fixed(1.0)).generates([ResourceTypeId(1)])).unwrap();
        assert!(matches!(m.validate(), Err(ModelError::UndeclaredResourceType { .. })));
    }

    #[test]
    fn released_more_than_required() {
        let mut m = Model::new("bad");
        let crew = m.types.declare("crew").unwrap();
        m.graph
            .add("a", ActivityDef::new(Fixed(1.0)).requires([crew]).releases([crew, crew]))
            .unwrap();
        assert_eq!(
            m.validate(),
            Err(ModelError::ReleasedNotRequired { activity: "a".into(), kind: "crew".into() })
        );
    }

    #[test]
    fn flow_on_unknown_activity() {
        let mut m = earthmoving();
        m.add_flow(InitialFlow::new("stray", ActivityId(40)));
        assert!(matches!(m.validate(), Err(ModelError::UnknownStartActivity { .. })));
    }

    #[test]
    fn resource_of_unknown_type() {
        let mut m = earthmoving();
        m.add_resource(InitialResource::new("mystery", ResourceTypeId(9)));
        assert!(matches!(m.validate(), Err(ModelError::UnknownResourceType { .. })));
    }

    #[test]
    fn initial_entity_builders() {
        let r = InitialResource::new("pile", ResourceTypeId(0))
            .ready_at(SimTime::new(3.0).unwrap())
            .disposable()
            .unavailable()
            .attr("m3", 12.0);
        assert!(r.disposable && !r.available);
        assert_eq!(r.attributes.number("m3"), Some(12.0));

        let f = InitialFlow::new("truck", ActivityId(0)).attr("capacity", 20.0);
        assert_eq!(f.arrival, SimTime::ZERO);
        assert_eq!(f.attributes.number("capacity"), Some(20.0));
    }
}

// ── Samplers ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod samplers {
    use super::*;

    #[test]
    fn fn_sampler_follows_script() {
        let mut script = vec![4.0, 1.0].into_iter();
        let mut s = FnSampler(move || script.next().unwrap_or(-1.0));
        assert_eq!(s.sample(), 4.0);
        assert_eq!(s.sample(), 1.0);
        assert_eq!(s.sample(), -1.0);
    }

    #[test]
    fn triangular_stays_in_bounds() {
        let mut s = Distributed::triangular(5.0, 8.0, 12.0, SamplerRng::new(42, 0)).unwrap();
        for _ in 0..1_000 {
            let d = s.sample();
            assert!((5.0..=12.0).contains(&d), "got {d}");
        }
    }

    #[test]
    fn same_stream_same_draws() {
        let mut a = Distributed::exponential(0.5, SamplerRng::new(7, 1)).unwrap();
        let mut b = Distributed::exponential(0.5, SamplerRng::new(7, 1)).unwrap();
        let xs: Vec<f64> = (0..10).map(|_| a.sample()).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.sample()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn scaled_beta_stays_in_range() {
        let mut s = Distributed::scaled_beta(2.0, 3.0, 10.0, 20.0, SamplerRng::new(1, 2)).unwrap();
        for _ in 0..500 {
            let d = s.sample();
            assert!((10.0..=20.0).contains(&d), "got {d}");
        }
    }

    #[test]
    fn invalid_parameters_rejected() {
        let rng = || SamplerRng::new(0, 0);
        assert!(Distributed::uniform(3.0, 3.0, rng()).is_err());
        assert!(Distributed::triangular(5.0, 20.0, 12.0, rng()).is_err());
        assert!(Distributed::normal(1.0, -1.0, rng()).is_err());
        assert!(Distributed::exponential(-2.0, rng()).is_err());
        assert!(Distributed::scaled_beta(1.0, 1.0, 5.0, 1.0, rng()).is_err());
    }
}

// ── Routers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routers {
    use sdesa_core::Attributes;
    use sdesa_entity::FlowRegistry;

    use super::*;
    use crate::{AllSuccessors, Router};

    #[test]
    fn all_successors_in_declared_order() {
        let mut g = ActivityGraph::new();
        let a = g.declare("a").unwrap();
        let b = g.declare("b").unwrap();
        let c = g.declare("c").unwrap();
        g.define(a, ActivityDef::new(Fixed(1.0)).successors([c, b])).unwrap();

        let mut flows = FlowRegistry::new();
        let id = flows.admit("f", a, SimTime::ZERO, None, Attributes::new()).unwrap();

        let next = AllSuccessors.route(g.get(a).unwrap(), flows.get(id).unwrap());
        assert_eq!(next, vec![c, b]);
    }
}
