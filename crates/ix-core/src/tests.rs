//! Unit tests for ix-core primitives.

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
        assert_eq!(VehicleId::default(), VehicleId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::Point3;

    #[test]
    fn zero_distance() {
        let p = Point3::new(12.5, -3.0, 0.2);
        assert!(p.distance_to(p) < f32::EPSILON);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn distance_uses_all_three_axes() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 3.0, 6.0);
        assert!((a.distance_to(b) - 7.0).abs() < 1e-5);
    }

    #[test]
    fn box_check_is_boundary_inclusive() {
        let center = Point3::new(10.0, 10.0, 0.0);
        assert!(Point3::new(18.0, 10.0, 0.0).within_box_xy(center, 8.0));
        assert!(Point3::new(10.0, 2.0, 0.0).within_box_xy(center, 8.0));
        assert!(!Point3::new(18.1, 10.0, 0.0).within_box_xy(center, 8.0));
    }

    #[test]
    fn box_check_ignores_z() {
        let center = Point3::new(0.0, 0.0, 0.0);
        let overhead = Point3::new(1.0, 1.0, 50.0);
        assert!(overhead.within_box_xy(center, 8.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, SimTime, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_advances_in_fixed_steps() {
        let mut clock = SimClock::new(0.05);
        assert_eq!(clock.now(), SimTime::ZERO);
        clock.advance();
        clock.advance();
        assert!((clock.now().secs() - 0.10).abs() < 1e-12);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn sim_time_total_order() {
        let mut times = vec![SimTime(2.0), SimTime(0.5), SimTime(1.0)];
        times.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(times, vec![SimTime(0.5), SimTime(1.0), SimTime(2.0)]);
    }

    #[test]
    fn config_end_tick() {
        let config = SimConfig { total_ticks: 100, ..SimConfig::default() };
        assert_eq!(config.end_tick(), Tick(100));
        let clock = config.make_clock();
        assert!((clock.delta_secs - 0.05).abs() < 1e-12);
    }
}
