//! Decomposed start-to-end room path.

use af_core::RoomId;
use af_graph::RoomGraph;

/// An ordered sequence of rooms from the start room to the end room.
///
/// Paths produced by one decomposition share no rooms other than start and
/// end.  Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPath {
    rooms: Vec<RoomId>,
}

impl RoomPath {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    /// Rooms from start to end, both included.
    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of moves an ant needs to walk the path: `len − 1`.
    #[inline]
    pub fn moves(&self) -> u64 {
        self.rooms.len().saturating_sub(1) as u64
    }

    /// Room at `position` (0 = start).
    #[inline]
    pub fn room_at(&self, position: usize) -> RoomId {
        self.rooms[position]
    }

    /// Interior rooms (everything except the two endpoints).
    pub fn interior(&self) -> &[RoomId] {
        match self.rooms.len() {
            0..=2 => &[],
            n => &self.rooms[1..n - 1],
        }
    }

    /// Room names in order.
    pub fn names<'g>(&self, graph: &'g RoomGraph) -> Vec<&'g str> {
        self.rooms.iter().map(|&r| graph.name(r)).collect()
    }

    /// Confirm the path runs from `graph.start()` to `graph.end()`, visits no
    /// room twice, and only steps along existing corridors.
    pub fn check_against(&self, graph: &RoomGraph) -> Result<(), String> {
        let (Some(&first), Some(&last)) = (self.rooms.first(), self.rooms.last()) else {
            return Err("empty path".into());
        };
        if first != graph.start() || last != graph.end() {
            return Err(format!(
                "path runs {} → {}, expected {} → {}",
                graph.name(first),
                graph.name(last),
                graph.name(graph.start()),
                graph.name(graph.end())
            ));
        }
        let mut seen = vec![false; graph.room_count()];
        for &r in &self.rooms {
            if std::mem::replace(&mut seen[r.index()], true) {
                return Err(format!("room {} visited twice", graph.name(r)));
            }
        }
        for pair in self.rooms.windows(2) {
            if !graph.has_corridor(pair[0], pair[1]) {
                return Err(format!(
                    "no corridor {}-{}",
                    graph.name(pair[0]),
                    graph.name(pair[1])
                ));
            }
        }
        Ok(())
    }
}
