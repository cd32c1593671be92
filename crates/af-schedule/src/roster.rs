//! Per-ant view of an [`Assignment`].
//!
//! Ant ids run from 1 to N and are handed out path by path: path 0's ants
//! come first, then path 1's, and so on.  Within a path, lower ids leave the
//! start room earlier.  Processing ants in id order therefore moves the
//! leading ant of each path before the ones queued behind it.

use af_core::{AntId, PathId, Round};

use crate::Assignment;

/// One ant's place in the plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub ant: AntId,
    pub path: PathId,
    /// Position in the path's queue (0 = first to leave).
    pub queue_pos: u32,
    /// Round in which this ant should reach the end room.
    pub arrival: Round,
}

/// Every ant in id order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn from_assignment(assignment: &Assignment) -> Self {
        let mut entries = Vec::with_capacity(assignment.total_ants() as usize);
        let mut next_id = 1u32;
        for path in assignment.used_paths() {
            for queue_pos in 0..assignment.count(path) {
                entries.push(RosterEntry {
                    ant: AntId(next_id),
                    path,
                    queue_pos,
                    arrival: assignment.arrival(path, queue_pos),
                });
                next_id += 1;
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Entry for `ant`, or `None` if the id is out of range.
    pub fn get(&self, ant: AntId) -> Option<&RosterEntry> {
        (ant.0 as usize)
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
    }
}
