//! `af-graph`: room graph, topology validation, and text loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`graph`]  | `RoomGraph` (CSR adjacency), `RoomGraphBuilder`              |
//! | [`loader`] | `Colony`, `parse_colony`, `load_colony`, `load_colony_reader` |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates `Serialize`/`Deserialize` to `af-core` types.     |

pub mod error;
pub mod graph;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{RoomGraph, RoomGraphBuilder};
pub use loader::{Colony, load_colony, load_colony_reader, parse_colony};
