//! `af-output`: rendering plans and rounds.
//!
//! Two [`OutputWriter`] backends are provided:
//!
//! | Backend        | Output                                        |
//! |----------------|-----------------------------------------------|
//! | [`TextWriter`] | one `L<ant>-<room> …` line per round          |
//! | [`CsvWriter`]  | `moves.csv`, `rounds.csv` in a directory      |
//!
//! Both are driven by [`RoundOutputObserver`], which implements
//! `af_sim::RoundObserver`.  A pair `(A, B)` of writers and an
//! `Option<W>` are writers too, so one run can feed several backends.
//!
//! The [`text`] module also renders the input echo printed ahead of the
//! moves.
//!
//! # Usage
//!
//! ```rust,ignore
//! use af_output::{CsvWriter, RoundOutputObserver, TextWriter};
//!
//! let writer = (TextWriter::new(std::io::stdout().lock()), CsvWriter::new(dir)?);
//! let mut obs = RoundOutputObserver::new(writer, &colony.graph);
//! planner.run(&colony.graph, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RoundOutputObserver;
pub use row::{MoveRow, RoundRow};
pub use text::{TextWriter, format_moves, format_path, write_colony};
pub use writer::OutputWriter;
