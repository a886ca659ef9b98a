//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, RiderId};

    #[test]
    fn index_roundtrip() {
        let id = CarId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CarId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CarId(0) < CarId(1));
        assert!(RiderId(100) > RiderId(99));
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
    }
}

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor};

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(2).distance(Floor(9)), 7);
        assert_eq!(Floor(9).distance(Floor(2)), 7);
        assert_eq!(Floor(4).distance(Floor(4)), 0);
    }

    #[test]
    fn step_toward_moves_one_floor() {
        assert_eq!(Floor(3).step_toward(Floor(8)), Floor(4));
        assert_eq!(Floor(3).step_toward(Floor(0)), Floor(2));
        assert_eq!(Floor(3).step_toward(Floor(3)), Floor(3));
    }

    #[test]
    fn direction_between() {
        assert_eq!(Direction::between(Floor(1), Floor(5)), Some(Direction::Up));
        assert_eq!(Direction::between(Floor(5), Floor(1)), Some(Direction::Down));
        assert_eq!(Direction::between(Floor(5), Floor(5)), None);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn display() {
        assert_eq!(Floor(12).to_string(), "F12");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod between {
    use crate::{Floor, is_between};

    #[test]
    fn strictly_inside_either_orientation() {
        assert!(is_between(Floor(5), Floor(2), Floor(8)));
        assert!(is_between(Floor(5), Floor(8), Floor(2)));
    }

    #[test]
    fn bounds_and_degenerate_interval_are_excluded() {
        assert!(!is_between(Floor(2), Floor(2), Floor(8)));
        assert!(!is_between(Floor(8), Floor(2), Floor(8)));
        assert!(!is_between(Floor(3), Floor(3), Floor(3)));
        assert!(!is_between(Floor(4), Floor(3), Floor(3)));
    }

    #[test]
    fn symmetric_over_a_small_building() {
        for v in 0..8 {
            for a in 0..8 {
                for b in 0..8 {
                    let (v, a, b) = (Floor(v), Floor(a), Floor(b));
                    assert_eq!(is_between(v, a, b), is_between(v, b, a), "v={v} a={a} b={b}");
                    if a == b || v == a || v == b {
                        assert!(!is_between(v, a, b));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod path_queue {
    use crate::{Floor, PathQueue};

    fn queue(from: u32, floors: &[u32]) -> PathQueue {
        let mut q = PathQueue::new();
        for &f in floors {
            q.insert(Floor(from), Floor(f));
        }
        q
    }

    fn floors(q: &PathQueue) -> Vec<u32> {
        q.iter().map(|f| f.0).collect()
    }

    #[test]
    fn first_insert_becomes_head() {
        let q = queue(3, &[10]);
        assert_eq!(q.head(), Some(Floor(10)));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn splices_into_first_leg_that_passes_it() {
        let mut q = queue(5, &[9, 2]);
        assert!(q.insert(Floor(5), Floor(7)));
        assert_eq!(floors(&q), vec![7, 9, 2]);

        assert!(q.insert(Floor(5), Floor(4)));
        assert_eq!(floors(&q), vec![7, 9, 4, 2]);
    }

    #[test]
    fn appends_when_no_leg_passes_it() {
        let mut q = queue(5, &[9, 2]);
        assert!(q.insert(Floor(5), Floor(0)));
        assert_eq!(floors(&q), vec![9, 2, 0]);
    }

    #[test]
    fn duplicate_is_ignored_even_behind_an_insertion_point() {
        // Leg 2 → 9 passes 4, but 4 is already queued further back.
        let mut q = queue(2, &[9]);
        q.insert(Floor(9), Floor(4));
        assert_eq!(floors(&q), vec![9, 4]);
        assert!(!q.insert(Floor(2), Floor(4)));
        assert_eq!(floors(&q), vec![9, 4]);
    }

    #[test]
    fn current_floor_is_ignored() {
        let mut q = PathQueue::new();
        assert!(!q.insert(Floor(6), Floor(6)));
        assert!(q.is_empty());
    }

    #[test]
    fn pop_head_if_only_pops_matching_head() {
        let mut q = queue(0, &[3, 6]);
        assert!(!q.pop_head_if(Floor(6)));
        assert!(q.pop_head_if(Floor(3)));
        assert_eq!(q.to_vec(), vec![Floor(6)]);
    }

    #[test]
    fn never_holds_a_floor_twice() {
        let mut q = PathQueue::new();
        let from = Floor(6);
        for f in [1, 11, 3, 9, 1, 6, 11, 0, 3, 12, 9, 7, 5, 7] {
            q.insert(from, Floor(f));
        }
        let mut seen = q.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), q.len());
        assert!(!q.contains(from));
    }
}

#[cfg(test)]
mod time {
    use crate::{LiftError, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(9)), 0);
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.tick_limit(), Tick(cfg.max_ticks));
    }

    #[test]
    fn zero_cars_rejected() {
        let cfg = SimConfig { car_count: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn single_floor_rejected() {
        let cfg = SimConfig { floor_count: 1, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn floor_range_check() {
        let cfg = SimConfig { floor_count: 5, ..SimConfig::default() };
        assert!(cfg.check_floor(crate::Floor(4)).is_ok());
        assert!(matches!(
            cfg.check_floor(crate::Floor(5)),
            Err(LiftError::FloorOutOfRange { floor_count: 5, .. })
        ));
    }
}

#[cfg(test)]
mod snapshot {
    use crate::{CarSnapshot, Direction, Floor};

    #[test]
    fn idle_and_direction() {
        let idle = CarSnapshot::new(Floor(4), Floor(4));
        assert!(idle.is_idle());
        assert_eq!(idle.direction(), None);

        let down = CarSnapshot::new(Floor(4), Floor(1));
        assert!(!down.is_idle());
        assert_eq!(down.direction(), Some(Direction::Down));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..13);
            let b: u32 = r2.gen_range(0..13);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
