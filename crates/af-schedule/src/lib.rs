//! `af-schedule`: distributing ants over decomposed paths.
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`assign`] | `Assignment`, `assign_greedy`                        |
//! | [`roster`] | `Roster`, `RosterEntry` (ant → path, planned arrival) |
//! | [`error`]  | `ScheduleError`, `ScheduleResult<T>`                 |
//!
//! # Cost model
//!
//! A path of `L` rooms takes `L − 1` moves.  Ants on the same path leave the
//! start room one round apart, so the `k`-th ant (0-based) on that path
//! arrives in round `(L − 1) + k`:
//!
//! ```text
//! arrival(path, k) = moves(path) + k
//! makespan         = max over used paths of moves(path) + count(path) − 1
//! ```
//!
//! The assignment only needs path lengths, so this crate does not depend on
//! the flow layer.

pub mod assign;
pub mod error;
pub mod roster;

#[cfg(test)]
mod tests;

pub use assign::{Assignment, assign_greedy};
pub use error::{ScheduleError, ScheduleResult};
pub use roster::{Roster, RosterEntry};
