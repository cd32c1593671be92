//! `af-sim`: planning pipeline and round-by-round movement.
//!
//! # Round loop
//!
//! ```text
//! round = 0
//! while ants remain outside the end room:
//!   round += 1
//!   clear the set of corridors walked this round
//!   for ant in 1..=N:
//!     skip if arrived
//!     next = following room on its path
//!     skip if next is an occupied interior room
//!     skip if corridor (here, next) was already walked this round
//!     move: leave here (unless start), enter next (unless end)
//!   error if nobody moved
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use af_core::PlanConfig;
//! use af_sim::{NoopObserver, Planner};
//!
//! let colony = af_graph::parse_colony(text)?;
//! let report = Planner::new(PlanConfig::new(colony.ant_count))
//!     .run(&colony.graph, &mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod occupancy;
pub mod planner;
pub mod sim;
pub mod state;
pub mod store;


pub use error::{SimError, SimResult};
pub use observer::{Move, NoopObserver, RoundMoves, RoundObserver, RoundRecorder, SimSummary};
pub use occupancy::Occupancy;
pub use planner::{Plan, PlanReport, Planner};
pub use sim::Simulation;
pub use state::AntState;
pub use store::AntStore;
