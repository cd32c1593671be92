//! `RoundOutputObserver<W>` bridges `RoundObserver` to an `OutputWriter`.

use af_graph::RoomGraph;
use af_sim::{RoundMoves, RoundObserver, SimSummary};

use crate::row::{MoveRow, RoundRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RoundObserver`] that turns each round into rows for any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `RoundObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].  Once a write fails, later rounds
/// are not written.
pub struct RoundOutputObserver<'g, W: OutputWriter> {
    writer:        W,
    graph:         &'g RoomGraph,
    arrived_total: u32,
    last_error:    Option<OutputError>,
}

impl<'g, W: OutputWriter> RoundOutputObserver<'g, W> {
    /// `graph` supplies room names for the rows.
    pub fn new(writer: W, graph: &'g RoomGraph) -> Self {
        Self { writer, graph, arrived_total: 0, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RoundObserver for RoundOutputObserver<'_, W> {
    fn on_round_end(&mut self, moves: &RoundMoves) {
        if self.last_error.is_some() {
            return;
        }
        let graph = self.graph;
        let round = moves.round.0;
        let rows: Vec<MoveRow<'_>> = moves
            .moves
            .iter()
            .map(|m| MoveRow { round, ant: m.ant.0, room: graph.name(m.room) })
            .collect();
        self.arrived_total += moves.arrived;
        let summary = RoundRow {
            round,
            moves: rows.len() as u32,
            arrived_total: self.arrived_total,
        };

        let result = self
            .writer
            .write_moves(&rows)
            .and_then(|()| self.writer.write_round_summary(&summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &SimSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
