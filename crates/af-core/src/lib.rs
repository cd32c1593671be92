//! `af-core`: foundational types for the `antfarm` routing planner.
//!
//! This crate is a dependency of every other `af-*` crate.  It has no `af-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `RoomId`, `VertexId`, `EdgeId`, `PathId`, `AntId`          |
//! | [`coord`]  | `Coord`: integer display coordinate of a room              |
//! | [`round`]  | `Round`: synchronized movement step counter                |
//! | [`config`] | `PlanConfig`, `EndpointCapacity`                           |
//! | [`error`]  | `CoreError`, `CoreResult`, `ErrorKind`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod round;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EndpointCapacity, PlanConfig};
pub use coord::Coord;
pub use error::{CoreError, CoreResult, ErrorKind};
pub use ids::{AntId, EdgeId, PathId, RoomId, VertexId};
pub use round::Round;
