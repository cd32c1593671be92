//! Unit tests for af-schedule.

#[cfg(test)]
mod assign {
    use af_core::{ErrorKind, PathId, Round};

    use crate::{ScheduleError, assign_greedy};

    #[test]
    fn diamond_three_ants() {
        // Two 3-room paths: 2/1 split, last ant arrives in round 3.
        let a = assign_greedy(&[3, 3], 3).unwrap();
        assert_eq!(a.per_path(), &[2, 1]);
        assert_eq!(a.makespan(), Round(3));
        assert_eq!(a.total_ants(), 3);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let a = assign_greedy(&[4, 4, 4], 2).unwrap();
        assert_eq!(a.per_path(), &[1, 1, 0]);
        assert_eq!(a.used_paths().collect::<Vec<_>>(), vec![PathId(0), PathId(1)]);
    }

    #[test]
    fn single_ant_takes_shortest() {
        let a = assign_greedy(&[3, 5, 2], 1).unwrap();
        assert_eq!(a.per_path(), &[0, 0, 1]);
        assert_eq!(a.makespan(), Round(1));
    }

    #[test]
    fn long_path_unused_until_worth_it() {
        // Short path: arrivals 1, 2, 3, 4, …  Long path: 5, 6, …
        let a = assign_greedy(&[2, 6], 4).unwrap();
        assert_eq!(a.per_path(), &[4, 0]);
        assert_eq!(a.makespan(), Round(4));

        let a = assign_greedy(&[2, 6], 6).unwrap();
        assert_eq!(a.per_path(), &[5, 1]);
        assert_eq!(a.makespan(), Round(5));
    }

    #[test]
    fn arrival_rounds() {
        let a = assign_greedy(&[3, 4], 4).unwrap();
        // path 0: 2, 3, 4   path 1: 3
        assert_eq!(a.per_path(), &[3, 1]);
        assert_eq!(a.arrival(PathId(0), 0), Round(2));
        assert_eq!(a.arrival(PathId(0), 2), Round(4));
        assert_eq!(a.arrival(PathId(1), 0), Round(3));
        assert_eq!(a.makespan(), Round(4));
    }

    #[test]
    fn no_paths() {
        let err = assign_greedy(&[], 3).unwrap_err();
        assert!(matches!(err, ScheduleError::NoPaths));
        assert_eq!(err.kind(), ErrorKind::InternalInvariantViolation);
    }

    #[test]
    fn no_ants() {
        let err = assign_greedy(&[3], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn degenerate_path() {
        let err = assign_greedy(&[3, 1], 2).unwrap_err();
        assert!(matches!(err, ScheduleError::DegeneratePath { path: PathId(1), rooms: 1 }));
    }
}

#[cfg(test)]
mod optimality {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use crate::assign_greedy;

    /// Smallest makespan over every way of splitting `ants` across paths.
    fn exhaustive(moves: &[u64], ants: u32) -> u64 {
        fn go(moves: &[u64], left: u32, worst: u64) -> u64 {
            let Some((&m, rest)) = moves.split_first() else {
                return if left == 0 { worst } else { u64::MAX };
            };
            (0..=left)
                .map(|c| {
                    let here = if c == 0 { worst } else { worst.max(m + c as u64 - 1) };
                    go(rest, left - c, here)
                })
                .min()
                .unwrap_or(u64::MAX)
        }
        go(moves, ants, 0)
    }

    #[test]
    fn greedy_matches_exhaustive() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..300 {
            let k = rng.gen_range(1..=4);
            let rooms: Vec<usize> = (0..k).map(|_| rng.gen_range(2..=9)).collect();
            let ants = rng.gen_range(1..=12);
            let moves: Vec<u64> = rooms.iter().map(|&r| r as u64 - 1).collect();

            let a = assign_greedy(&rooms, ants).unwrap();
            assert_eq!(a.total_ants(), ants as u64);
            assert_eq!(a.makespan().0, exhaustive(&moves, ants), "rooms {rooms:?}, ants {ants}");
        }
    }
}

#[cfg(test)]
mod roster {
    use af_core::{AntId, PathId, Round};

    use crate::{Roster, assign_greedy};

    #[test]
    fn ids_grouped_by_path() {
        let a = assign_greedy(&[3, 3], 3).unwrap();
        let r = Roster::from_assignment(&a);
        assert_eq!(r.len(), 3);
        let paths: Vec<PathId> = r.entries().iter().map(|e| e.path).collect();
        assert_eq!(paths, vec![PathId(0), PathId(0), PathId(1)]);
        let ids: Vec<u32> = r.entries().iter().map(|e| e.ant.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn planned_arrivals() {
        let a = assign_greedy(&[3, 3], 3).unwrap();
        let r = Roster::from_assignment(&a);
        let arrivals: Vec<(AntId, Round)> = r.entries().iter().map(|e| (e.ant, e.arrival)).collect();
        assert_eq!(arrivals, vec![(AntId(1), Round(2)), (AntId(2), Round(3)), (AntId(3), Round(2))]);
        assert_eq!(arrivals.iter().map(|&(_, r)| r).max(), Some(a.makespan()));
    }

    #[test]
    fn lookup() {
        let a = assign_greedy(&[2], 2).unwrap();
        let r = Roster::from_assignment(&a);
        assert_eq!(r.get(AntId(2)).unwrap().queue_pos, 1);
        assert!(r.get(AntId(0)).is_none());
        assert!(r.get(AntId(3)).is_none());
    }
}
