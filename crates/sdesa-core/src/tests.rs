//! Unit tests for sdesa-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActivityId, FlowId, ResourceId, ResourceTypeId};

    #[test]
    fn index_roundtrip() {
        let id = FlowId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(FlowId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(FlowId(0) < FlowId(1));
        assert!(ResourceId(100) > ResourceId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(FlowId::INVALID.0, u32::MAX);
        assert_eq!(ActivityId::INVALID.0, u16::MAX);
        assert_eq!(ResourceTypeId::default(), ResourceTypeId::INVALID);
    }

    #[test]
    fn activity_id_overflow_rejected() {
        assert!(ActivityId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(FlowId(7).to_string(), "FlowId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, SimClock, SimConfig, SimTime};

    fn t(v: f64) -> SimTime {
        SimTime::new(v).unwrap()
    }

    #[test]
    fn rejects_nan_infinite_and_negative() {
        assert!(SimTime::new(f64::NAN).is_err());
        assert!(SimTime::new(f64::INFINITY).is_err());
        assert!(SimTime::new(-1.0).is_err());
        assert!(SimTime::new(0.0).is_ok());
    }

    #[test]
    fn negative_zero_equals_zero() {
        assert_eq!(t(-0.0), SimTime::ZERO);
    }

    #[test]
    fn after_and_since() {
        let start = t(2.5);
        assert_eq!(start.after(3.0).unwrap(), t(5.5));
        assert_eq!(t(5.5).since(start), 3.0);
        assert_eq!(start.since(t(10.0)), 0.0);
        assert_eq!(t(5.0) - t(2.0), 3.0);
    }

    #[test]
    fn after_rejects_bad_durations() {
        assert_eq!(SimTime::ZERO.after(-1.0), Err(CoreError::InvalidTime(-1.0)));
        assert!(SimTime::ZERO.after(f64::NAN).is_err());
        assert!(t(f64::MAX).after(f64::MAX).is_err());
    }

    #[test]
    fn total_order() {
        let mut v = vec![t(3.0), t(0.5), t(2.0)];
        v.sort();
        assert_eq!(v, vec![t(0.5), t(2.0), t(3.0)]);
    }

    #[test]
    fn clock_advances_forward_only() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), SimTime::ZERO);
        clock.advance_to(t(4.0)).unwrap();
        clock.advance_to(t(4.0)).unwrap();
        assert_eq!(clock.now(), t(4.0));
        let err = clock.advance_to(t(1.0)).unwrap_err();
        assert!(matches!(err, CoreError::ClockBackwards { .. }));
        assert_eq!(clock.now(), t(4.0));
    }

    #[test]
    fn config_run_limit() {
        assert_eq!(SimConfig::unbounded(1).run_limit().unwrap(), None);
        assert_eq!(SimConfig::bounded(480.0, 1).run_limit().unwrap(), Some(t(480.0)));
        assert!(matches!(
            SimConfig::bounded(-5.0, 1).run_limit(),
            Err(CoreError::Config(_))
        ));
    }
}

#[cfg(test)]
mod attrs {
    use crate::{AttrValue, Attributes};

    #[test]
    fn typed_getters() {
        let a = Attributes::new()
            .with("capacity", 12.0)
            .with("crew", "night")
            .with("loaded", true);
        assert_eq!(a.number("capacity"), Some(12.0));
        assert_eq!(a.text("crew"), Some("night"));
        assert_eq!(a.flag("loaded"), Some(true));
        // Wrong type → None, not a panic.
        assert_eq!(a.number("crew"), None);
        assert_eq!(a.flag("missing"), None);
    }

    #[test]
    fn set_returns_previous() {
        let mut a = Attributes::new();
        assert_eq!(a.set("n", 1i64), None);
        assert_eq!(a.set("n", 2i64), Some(AttrValue::Number(1.0)));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn iteration_is_key_ordered() {
        let a: Attributes = [("zeta", 1.0), ("alpha", 2.0), ("mid", 3.0)].into_iter().collect();
        let keys: Vec<&str> = a.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{ActivityId, SamplerRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = SamplerRng::for_activity(42, ActivityId(3));
        let mut b = SamplerRng::for_activity(42, ActivityId(3));
        for _ in 0..16 {
            assert_eq!(a.inner().gen_range(0.0..1.0_f64), b.inner().gen_range(0.0..1.0_f64));
        }
    }

    #[test]
    fn different_activities_diverge() {
        let mut a = SamplerRng::for_activity(42, ActivityId(0));
        let mut b = SamplerRng::for_activity(42, ActivityId(1));
        let xs: Vec<u32> = (0..8).map(|_| a.inner().gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.inner().gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn stream_matches_explicit_activity_number() {
        let mut a = SamplerRng::for_activity(7, ActivityId(5));
        let mut b = SamplerRng::new(7, 5);
        assert_eq!(a.inner().r#gen::<u64>(), b.inner().r#gen::<u64>());
    }
}
