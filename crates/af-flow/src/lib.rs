//! `af-flow`: flow network, maximum flow, and path decomposition.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`network`]   | `FlowNetwork` (CSR + flat edge arena), `FlowNetworkBuilder` |
//! | [`solver`]    | `MaxFlowSolver` trait, `EdmondsKarp`                       |
//! | [`decompose`] | `PathDecomposer`                                           |
//! | [`path`]      | `RoomPath`                                                 |
//! | [`error`]     | `FlowError`, `FlowResult<T>`                               |
//!
//! # Pipeline
//!
//! ```text
//! RoomGraph ──FlowNetwork::from_graph──▶ FlowNetwork
//!           ──EdmondsKarp::max_flow────▶ saturated residual graph + value F
//!           ──PathDecomposer::decompose▶ F vertex-disjoint RoomPaths
//! ```
//!
//! The network moves through these stages by `&mut` hand-off; a network can
//! be solved once and decomposed once.

pub mod decompose;
pub mod error;
pub mod network;
pub mod path;
pub mod solver;


pub use decompose::PathDecomposer;
pub use error::{FlowError, FlowResult};
pub use network::{FlowNetwork, FlowNetworkBuilder, FlowStage};
pub use path::RoomPath;
pub use solver::{EdmondsKarp, MaxFlowSolver};
