//! Round observer trait and the per-round move record.

use af_core::{AntId, RoomId, Round};

/// One ant stepping into `room`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub ant:  AntId,
    pub room: RoomId,
}

/// Everything that happened in one round, moves in ant-id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundMoves {
    pub round:   Round,
    pub moves:   Vec<Move>,
    /// Ants that reached the end room in this round.
    pub arrived: u32,
}

/// Totals for a finished simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimSummary {
    /// Last round in which anything moved (0 if nothing ever did).
    pub rounds:      Round,
    pub arrived:     u32,
    pub total_moves: u64,
}

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at each
/// round boundary.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl RoundObserver for Progress {
///     fn on_round_end(&mut self, moves: &RoundMoves) {
///         eprintln!("{}: {} move(s)", moves.round, moves.moves.len());
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called before a round is processed.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called after a round in which at least one ant moved.
    fn on_round_end(&mut self, _moves: &RoundMoves) {}

    /// Called once after the last ant has arrived.
    fn on_sim_end(&mut self, _summary: &SimSummary) {}
}

/// A [`RoundObserver`] that does nothing.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// Keeps every round in memory.
#[derive(Debug, Default)]
pub struct RoundRecorder {
    pub rounds:  Vec<RoundMoves>,
    pub summary: Option<SimSummary>,
}

impl RoundObserver for RoundRecorder {
    fn on_round_end(&mut self, moves: &RoundMoves) {
        self.rounds.push(moves.clone());
    }

    fn on_sim_end(&mut self, summary: &SimSummary) {
        self.summary = Some(*summary);
    }
}

impl<O: RoundObserver + ?Sized> RoundObserver for &mut O {
    fn on_round_start(&mut self, round: Round) {
        (**self).on_round_start(round);
    }

    fn on_round_end(&mut self, moves: &RoundMoves) {
        (**self).on_round_end(moves);
    }

    fn on_sim_end(&mut self, summary: &SimSummary) {
        (**self).on_sim_end(summary);
    }
}
