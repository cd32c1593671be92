//! The `AntStore`: movement state for every ant, indexed by ant id.

use af_core::AntId;
use af_schedule::Roster;

use crate::AntState;

/// Holds one [`AntState`] per ant.
///
/// `states[i]` belongs to `AntId(i + 1)`; ids start at 1 to match the
/// printed move format.
#[derive(Debug, Clone)]
pub struct AntStore {
    pub states: Vec<AntState>,
    arrived: usize,
}

impl AntStore {
    /// Every ant in the start room, on the path the roster gives it.
    pub fn from_roster(roster: &Roster) -> Self {
        let states = roster
            .entries()
            .iter()
            .map(|e| AntState::at_start(e.path))
            .collect();
        Self { states, arrived: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Ants in id order.
    pub fn ids(&self) -> impl Iterator<Item = AntId> + use<> {
        (1..=self.states.len() as u32).map(AntId)
    }

    #[inline]
    pub fn get(&self, ant: AntId) -> &AntState {
        &self.states[ant.index() - 1]
    }

    #[inline]
    pub fn get_mut(&mut self, ant: AntId) -> &mut AntState {
        &mut self.states[ant.index() - 1]
    }

    /// Ants already in the end room.
    #[inline]
    pub fn arrived(&self) -> usize {
        self.arrived
    }

    /// Ants not yet in the end room.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.states.len() - self.arrived
    }

    pub(crate) fn mark_arrived(&mut self) {
        self.arrived += 1;
    }
}
