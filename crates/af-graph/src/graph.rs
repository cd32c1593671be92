//! Room graph representation and builder.
//!
//! # Data layout
//!
//! Rooms are indexed by `RoomId` in declaration order.  Adjacency uses
//! **Compressed Sparse Row (CSR)** format: the neighbours of room `r` occupy
//!
//! ```text
//! adj_to[ adj_start[r] .. adj_start[r+1] ]
//! ```
//!
//! Each undirected corridor appears twice (once per endpoint).  Within one
//! room's slice neighbours keep the order in which the corridors were added,
//! so every traversal of the graph (and therefore every plan) is
//! deterministic for a given input.

use rustc_hash::{FxHashMap, FxHashSet};

use af_core::{Coord, RoomId};

use crate::{GraphError, GraphResult};

// ── RoomGraph ─────────────────────────────────────────────────────────────────

/// Undirected room graph with a designated start and end room.
///
/// Immutable once built.  Construct with [`RoomGraphBuilder`].
#[derive(Debug, Clone)]
pub struct RoomGraph {
    // ── Room data (indexed by RoomId) ─────────────────────────────────────
    room_name: Vec<String>,
    room_pos:  Vec<Coord>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Length = `room_count + 1`.
    adj_start: Vec<u32>,
    adj_to:    Vec<RoomId>,

    /// Corridors in the order they were first added, duplicates removed.
    corridors: Vec<(RoomId, RoomId)>,

    name_index: FxHashMap<String, RoomId>,
    start:      RoomId,
    end:        RoomId,
}

impl RoomGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.room_name.len()
    }

    pub fn corridor_count(&self) -> usize {
        self.corridors.len()
    }

    /// All room ids in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.room_name.len()).map(|i| RoomId(i as u32))
    }

    // ── Endpoints ─────────────────────────────────────────────────────────

    #[inline]
    pub fn start(&self) -> RoomId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> RoomId {
        self.end
    }

    /// `true` for the start or end room.
    #[inline]
    pub fn is_endpoint(&self, room: RoomId) -> bool {
        room == self.start || room == self.end
    }

    // ── Room attributes ───────────────────────────────────────────────────

    #[inline]
    pub fn name(&self, room: RoomId) -> &str {
        &self.room_name[room.index()]
    }

    #[inline]
    pub fn pos(&self, room: RoomId) -> Coord {
        self.room_pos[room.index()]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Neighbours of `room` in corridor order.  Contiguous slice, no
    /// allocation.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        let start = self.adj_start[room.index()] as usize;
        let end   = self.adj_start[room.index() + 1] as usize;
        &self.adj_to[start..end]
    }

    pub fn has_corridor(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Corridors in insertion order, each listed once.
    pub fn corridors(&self) -> &[(RoomId, RoomId)] {
        &self.corridors
    }
}

// ── RoomGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoomGraph`] incrementally, then call [`build`](Self::build).
///
/// Topology rules are enforced as data arrives: duplicate names, self-loops
/// and corridors to unknown rooms are rejected immediately, and a repeated
/// corridor between the same pair is silently collapsed.  `build()` checks
/// that a distinct start and end were designated.
///
/// # Example
///
/// ```
/// use af_core::Coord;
/// use af_graph::RoomGraphBuilder;
///
/// let mut b = RoomGraphBuilder::new();
/// let s = b.add_room("start", Coord::new(0, 0)).unwrap();
/// let e = b.add_room("end", Coord::new(1, 0)).unwrap();
/// b.set_start(s).unwrap();
/// b.set_end(e).unwrap();
/// b.add_corridor(s, e).unwrap();
/// let graph = b.build().unwrap();
/// assert_eq!(graph.room_count(), 2);
/// assert_eq!(graph.corridor_count(), 1);
/// ```
#[derive(Default)]
pub struct RoomGraphBuilder {
    names:      Vec<String>,
    positions:  Vec<Coord>,
    name_index: FxHashMap<String, RoomId>,
    corridors:  Vec<(RoomId, RoomId)>,
    seen:       FxHashSet<(RoomId, RoomId)>,
    start:      Option<RoomId>,
    end:        Option<RoomId>,
}

impl RoomGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: impl Into<String>, pos: Coord) -> GraphResult<RoomId> {
        let name = name.into();
        if !is_valid_room_name(&name) {
            return Err(GraphError::InvalidRoomName(name));
        }
        if self.name_index.contains_key(&name) {
            return Err(GraphError::DuplicateRoom(name));
        }
        let id = RoomId(self.names.len() as u32);
        self.name_index.insert(name.clone(), id);
        self.names.push(name);
        self.positions.push(pos);
        Ok(id)
    }

    pub fn set_start(&mut self, room: RoomId) -> GraphResult<()> {
        self.check_known(room)?;
        if self.start.is_some() {
            return Err(GraphError::DuplicateStart);
        }
        self.start = Some(room);
        Ok(())
    }

    pub fn set_end(&mut self, room: RoomId) -> GraphResult<()> {
        self.check_known(room)?;
        if self.end.is_some() {
            return Err(GraphError::DuplicateEnd);
        }
        self.end = Some(room);
        Ok(())
    }

    /// Add an undirected corridor between `a` and `b`.
    ///
    /// Returns `false` when the corridor already existed (in either
    /// direction) and was collapsed.
    pub fn add_corridor(&mut self, a: RoomId, b: RoomId) -> GraphResult<bool> {
        self.check_known(a)?;
        self.check_known(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(self.names[a.index()].clone()));
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if !self.seen.insert(key) {
            return Ok(false);
        }
        self.corridors.push((a, b));
        Ok(true)
    }

    /// Name-based variant of [`add_corridor`](Self::add_corridor).
    pub fn link(&mut self, a: &str, b: &str) -> GraphResult<bool> {
        let ra = self.room_id(a).ok_or_else(|| GraphError::UnknownRoom(a.to_owned()))?;
        let rb = self.room_id(b).ok_or_else(|| GraphError::UnknownRoom(b.to_owned()))?;
        self.add_corridor(ra, rb)
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    pub fn room_count(&self) -> usize { self.names.len() }
    pub fn corridor_count(&self) -> usize { self.corridors.len() }

    /// Consume the builder and produce a [`RoomGraph`].
    pub fn build(self) -> GraphResult<RoomGraph> {
        let start = self.start.ok_or(GraphError::MissingStart)?;
        let end   = self.end.ok_or(GraphError::MissingEnd)?;
        if start == end {
            return Err(GraphError::StartIsEnd(self.names[start.index()].clone()));
        }

        let room_count = self.names.len();

        // Both directions of every corridor; the stable sort keeps corridor
        // order within each room's slice.
        let mut half: Vec<(RoomId, RoomId)> = Vec::with_capacity(self.corridors.len() * 2);
        for &(a, b) in &self.corridors {
            half.push((a, b));
            half.push((b, a));
        }
        half.sort_by_key(|&(from, _)| from.0);

        let adj_to: Vec<RoomId> = half.iter().map(|&(_, to)| to).collect();

        let mut adj_start = vec![0u32; room_count + 1];
        for &(from, _) in &half {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=room_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[room_count] as usize, adj_to.len());

        log::debug!(
            "room graph: {} rooms, {} corridors, start={:?} end={:?}",
            room_count,
            self.corridors.len(),
            self.names[start.index()],
            self.names[end.index()],
        );

        Ok(RoomGraph {
            room_name: self.names,
            room_pos: self.positions,
            adj_start,
            adj_to,
            corridors: self.corridors,
            name_index: self.name_index,
            start,
            end,
        })
    }

    fn check_known(&self, room: RoomId) -> GraphResult<()> {
        if room.index() < self.names.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownRoomId(room))
        }
    }
}

/// Room names must survive the text format: non-empty, no whitespace, no
/// `-` (link separator), and must not start with `L` (move prefix) or `#`
/// (comment/command prefix).
pub fn is_valid_room_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('L')
        && !name.starts_with('#')
        && !name.contains('-')
        && !name.chars().any(char::is_whitespace)
}
