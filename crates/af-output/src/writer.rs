//! The `OutputWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult, RoundRow};

/// Trait implemented by the text and CSV writers.
///
/// Errors are stored by the observer and retrieved with
/// [`RoundOutputObserver::take_error`][crate::RoundOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the moves of one round, in ant-id order.
    fn write_moves(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()>;

    /// Write one round summary row.
    fn write_round_summary(&mut self, row: &RoundRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_moves(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        self.0.write_moves(rows)?;
        self.1.write_moves(rows)
    }

    fn write_round_summary(&mut self, row: &RoundRow) -> OutputResult<()> {
        self.0.write_round_summary(row)?;
        self.1.write_round_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

impl<W: OutputWriter> OutputWriter for Option<W> {
    fn write_moves(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        match self {
            Some(w) => w.write_moves(rows),
            None => Ok(()),
        }
    }

    fn write_round_summary(&mut self, row: &RoundRow) -> OutputResult<()> {
        match self {
            Some(w) => w.write_round_summary(row),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None => Ok(()),
        }
    }
}
