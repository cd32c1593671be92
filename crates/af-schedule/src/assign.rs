//! Greedy makespan-minimising assignment of ants to paths.
//!
//! Ants are handed out one at a time.  Each goes to the path whose next
//! arrival round, `moves + already_assigned`, is smallest; ties go to the
//! lowest path index.  A min-heap keyed on `(arrival, path)` gives both
//! rules at once, and one push per assignment keeps it current.
//!
//! Because every path's arrival sequence is `moves, moves + 1, …`, picking
//! the smallest available arrival round for each ant in turn yields the N
//! smallest values across all sequences, which is the optimal makespan.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use af_core::{PathId, Round};

use crate::{ScheduleError, ScheduleResult};

/// How many ants each path carries, and the rounds that implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Moves needed to walk each path (`rooms − 1`), by path index.
    moves:    Vec<u64>,
    /// Ants assigned to each path, by path index.
    per_path: Vec<u32>,
}

impl Assignment {
    /// Ant counts by path index.
    #[inline]
    pub fn per_path(&self) -> &[u32] {
        &self.per_path
    }

    #[inline]
    pub fn count(&self, path: PathId) -> u32 {
        self.per_path[path.index()]
    }

    /// Moves an ant needs on `path`.
    #[inline]
    pub fn moves(&self, path: PathId) -> u64 {
        self.moves[path.index()]
    }

    pub fn path_count(&self) -> usize {
        self.per_path.len()
    }

    /// Paths that carry at least one ant.
    pub fn used_paths(&self) -> impl Iterator<Item = PathId> + '_ {
        self.per_path
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, _)| PathId(i as u32))
    }

    pub fn total_ants(&self) -> u64 {
        self.per_path.iter().map(|&n| n as u64).sum()
    }

    /// Round in which the `k`-th ant (0-based) on `path` reaches the end.
    #[inline]
    pub fn arrival(&self, path: PathId, k: u32) -> Round {
        Round(self.moves(path) + k as u64)
    }

    /// Round in which the last ant arrives.
    pub fn makespan(&self) -> Round {
        self.used_paths()
            .map(|p| self.arrival(p, self.count(p) - 1))
            .max()
            .unwrap_or(Round::ZERO)
    }
}

/// Distribute `ant_count` ants over paths of the given room counts.
///
/// `path_rooms[i]` is the number of rooms on path `i`, endpoints included,
/// so every entry must be at least 2.
pub fn assign_greedy(path_rooms: &[usize], ant_count: u32) -> ScheduleResult<Assignment> {
    if path_rooms.is_empty() {
        return Err(ScheduleError::NoPaths);
    }
    if ant_count == 0 {
        return Err(ScheduleError::NoAnts);
    }
    if let Some((i, &rooms)) = path_rooms.iter().enumerate().find(|&(_, &r)| r < 2) {
        return Err(ScheduleError::DegeneratePath { path: PathId(i as u32), rooms });
    }

    let moves: Vec<u64> = path_rooms.iter().map(|&r| (r - 1) as u64).collect();
    let mut per_path = vec![0u32; moves.len()];

    // (next arrival round on this path, path index)
    let mut heap: BinaryHeap<Reverse<(u64, u32)>> = moves
        .iter()
        .enumerate()
        .map(|(i, &m)| Reverse((m, i as u32)))
        .collect();

    for _ in 0..ant_count {
        let Some(Reverse((arrival, idx))) = heap.pop() else {
            return Err(ScheduleError::NoPaths);
        };
        per_path[idx as usize] += 1;
        heap.push(Reverse((arrival + 1, idx)));
    }

    let assignment = Assignment { moves, per_path };
    log::debug!(
        "assigned {ant_count} ant(s) over {} of {} path(s), makespan {}",
        assignment.used_paths().count(),
        assignment.path_count(),
        assignment.makespan()
    );
    Ok(assignment)
}
