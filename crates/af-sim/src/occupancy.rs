//! Single-occupancy bookkeeping for interior rooms.

use af_core::{AntId, RoomId};
use af_graph::RoomGraph;

use crate::{SimError, SimResult};

/// Which ant, if any, is standing in each room.
///
/// The start and end rooms hold any number of ants and are never tracked:
/// [`enter`](Self::enter) and [`leave`](Self::leave) ignore them and
/// [`is_free`](Self::is_free) always reports them free.
#[derive(Debug, Clone)]
pub struct Occupancy {
    occupant: Vec<Option<AntId>>,
    start:    RoomId,
    end:      RoomId,
}

impl Occupancy {
    pub fn new(graph: &RoomGraph) -> Self {
        Self {
            occupant: vec![None; graph.room_count()],
            start:    graph.start(),
            end:      graph.end(),
        }
    }

    #[inline]
    fn exempt(&self, room: RoomId) -> bool {
        room == self.start || room == self.end
    }

    #[inline]
    pub fn is_free(&self, room: RoomId) -> bool {
        self.exempt(room) || self.occupant[room.index()].is_none()
    }

    /// Put `ant` in `room`.  Entering an occupied interior room is a bug in
    /// the caller and is reported as an invariant violation.
    pub fn enter(&mut self, room: RoomId, ant: AntId) -> SimResult<()> {
        if self.exempt(room) {
            return Ok(());
        }
        let slot = &mut self.occupant[room.index()];
        if let Some(other) = *slot {
            return Err(SimError::InvariantViolation(format!(
                "{ant} entered {room}, already held by {other}"
            )));
        }
        *slot = Some(ant);
        Ok(())
    }

    pub fn leave(&mut self, room: RoomId) {
        if !self.exempt(room) {
            self.occupant[room.index()] = None;
        }
    }

    /// Number of interior rooms currently holding an ant.
    pub fn occupied(&self) -> usize {
        self.occupant.iter().filter(|o| o.is_some()).count()
    }
}
