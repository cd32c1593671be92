//! Per-ant movement state.

use af_core::{PathId, Round};

/// Where one ant is along its assigned path.
///
/// `position` indexes into the path's rooms: 0 is the start room and
/// `path.len() − 1` is the end room.  Once the ant reaches the end room,
/// `arrived` records the round it happened in and the ant never moves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntState {
    pub path: PathId,
    pub position: u32,
    pub arrived: Option<Round>,
}

impl AntState {
    /// An ant waiting in the start room.
    #[inline]
    pub fn at_start(path: PathId) -> Self {
        Self { path, position: 0, arrived: None }
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.arrived.is_some()
    }
}
