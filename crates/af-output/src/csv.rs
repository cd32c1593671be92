//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `moves.csv`  (`round,ant,room`)
//! - `rounds.csv` (`round,moves,arrived_total`)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult, RoundRow};

/// Writes a run to two CSV files.
pub struct CsvWriter {
    moves:    Writer<File>,
    rounds:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut moves = Writer::from_path(dir.join("moves.csv"))?;
        moves.write_record(["round", "ant", "room"])?;

        let mut rounds = Writer::from_path(dir.join("rounds.csv"))?;
        rounds.write_record(["round", "moves", "arrived_total"])?;

        Ok(Self { moves, rounds, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_moves(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        for row in rows {
            self.moves.write_record(&[
                row.round.to_string(),
                row.ant.to_string(),
                row.room.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundRow) -> OutputResult<()> {
        self.rounds.write_record(&[
            row.round.to_string(),
            row.moves.to_string(),
            row.arrived_total.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        self.rounds.flush()?;
        Ok(())
    }
}
