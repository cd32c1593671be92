//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into `Vec`s via `id.0 as usize`, but callers should prefer
//! the `.index()` helpers for clarity.
//!
//! `AntId` is the exception to the "index" reading: ants are numbered from 1
//! because that number is what the output format prints (`L1-room`).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID", equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a room in the room graph, in declaration order.
    pub struct RoomId(u32);
}

typed_id! {
    /// Index of a flow-network vertex.  Room `r` owns vertices `2r` (in) and
    /// `2r + 1` (out).
    pub struct VertexId(u32);
}

typed_id! {
    /// Handle into the flow network's flat edge arena.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Index of a decomposed path in the ordered path set.
    pub struct PathId(u32);
}

typed_id! {
    /// Ant number, starting at 1.
    pub struct AntId(u32);
}

impl VertexId {
    /// The "in" half of `room`.
    #[inline(always)]
    pub fn room_in(room: RoomId) -> VertexId {
        VertexId(room.0 * 2)
    }

    /// The "out" half of `room`.
    #[inline(always)]
    pub fn room_out(room: RoomId) -> VertexId {
        VertexId(room.0 * 2 + 1)
    }

    /// The room this vertex belongs to.
    #[inline(always)]
    pub fn room(self) -> RoomId {
        RoomId(self.0 / 2)
    }
}
