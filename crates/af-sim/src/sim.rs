//! The `Simulation` struct and its round loop.

use af_core::{AntId, RoomId, Round};
use af_flow::RoomPath;
use af_graph::RoomGraph;
use af_schedule::Roster;
use rustc_hash::FxHashSet;

use crate::{AntStore, Move, Occupancy, RoundMoves, RoundObserver, SimError, SimResult, SimSummary};

/// Round-by-round movement of every ant along its assigned path.
///
/// Each round visits ants in ascending id order.  An ant that has not yet
/// arrived advances one room along its path when both hold:
///
/// - the next room is the end room or currently empty, and
/// - no ant has already walked the same corridor in the same direction this
///   round.
///
/// On a move the ant leaves its old room (the start room is never marked)
/// and enters the new one (the end room is never marked).  Because ids are
/// grouped by path with the leading ant first, an ant always sees the room
/// ahead of it freshly vacated when its predecessor has just moved.
///
/// A round in which nobody moves while ants remain is reported as an
/// invariant violation; it cannot happen with disjoint paths.
pub struct Simulation<'a> {
    graph:     &'a RoomGraph,
    paths:     &'a [RoomPath],
    roster:    &'a Roster,
    store:     AntStore,
    occupancy: Occupancy,
    round:     Round,
    /// Directed corridors walked in the current round.
    walked:    FxHashSet<(RoomId, RoomId)>,
    total_moves: u64,
    verify:    bool,
}

impl<'a> Simulation<'a> {
    /// Place every ant of `roster` in the start room.
    ///
    /// `paths` must be indexed the way the roster's `PathId`s expect.  With
    /// `verify`, every arrival is checked against the roster's planned round
    /// and the final round against the planned makespan.
    pub fn new(graph: &'a RoomGraph, paths: &'a [RoomPath], roster: &'a Roster, verify: bool) -> Self {
        Self {
            graph,
            paths,
            roster,
            store: AntStore::from_roster(roster),
            occupancy: Occupancy::new(graph),
            round: Round::ZERO,
            walked: FxHashSet::default(),
            total_moves: 0,
            verify,
        }
    }

    /// Last completed round.
    #[inline]
    pub fn round(&self) -> Round {
        self.round
    }

    #[inline]
    pub fn store(&self) -> &AntStore {
        &self.store
    }

    #[inline]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// `true` once every ant is in the end room.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.store.remaining() == 0
    }

    /// Room `ant` currently stands in.
    pub fn room_of(&self, ant: AntId) -> RoomId {
        let state = self.store.get(ant);
        self.paths[state.path.index()].room_at(state.position as usize)
    }

    pub fn summary(&self) -> SimSummary {
        SimSummary {
            rounds:      self.round,
            arrived:     self.store.arrived() as u32,
            total_moves: self.total_moves,
        }
    }

    /// Run rounds until every ant has arrived.
    pub fn run<O: RoundObserver>(&mut self, observer: &mut O) -> SimResult<SimSummary> {
        while !self.is_finished() {
            observer.on_round_start(self.round.next());
            if let Some(moves) = self.step()? {
                observer.on_round_end(&moves);
            }
        }

        let summary = self.summary();
        if self.verify {
            let planned = self.planned_makespan();
            if summary.rounds != planned {
                return Err(SimError::InvariantViolation(format!(
                    "simulation took {} round(s), assignment planned {}",
                    summary.rounds.0, planned.0
                )));
            }
        }
        log::info!(
            "simulation finished: {} ant(s) in {} round(s), {} move(s)",
            summary.arrived,
            summary.rounds.0,
            summary.total_moves
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Process one round.
    ///
    /// Returns `Ok(None)` without advancing when every ant has already
    /// arrived.
    pub fn step(&mut self) -> SimResult<Option<RoundMoves>> {
        if self.is_finished() {
            return Ok(None);
        }
        let round = self.round.next();
        self.walked.clear();

        let end = self.graph.end();
        let mut moves = Vec::new();
        let mut arrived = 0u32;

        for ant in self.store.ids() {
            let state = *self.store.get(ant);
            if state.has_arrived() {
                continue;
            }
            let path = &self.paths[state.path.index()];
            let pos  = state.position as usize;
            let from = path.room_at(pos);
            let to   = path.room_at(pos + 1);

            if !self.occupancy.is_free(to) || self.walked.contains(&(from, to)) {
                continue;
            }

            self.walked.insert((from, to));
            self.occupancy.leave(from);
            self.occupancy.enter(to, ant)?;

            let state = self.store.get_mut(ant);
            state.position += 1;
            if to == end {
                state.arrived = Some(round);
                self.store.mark_arrived();
                arrived += 1;
                if self.verify {
                    self.check_arrival(ant, round)?;
                }
            }
            moves.push(Move { ant, room: to });
        }

        if moves.is_empty() {
            return Err(SimError::InvariantViolation(format!(
                "no ant could move in {round} with {} still travelling",
                self.store.remaining()
            )));
        }

        self.round = round;
        self.total_moves += moves.len() as u64;
        log::debug!(
            "{round}: {} move(s), {arrived} arrival(s), {} room(s) occupied",
            moves.len(),
            self.occupancy.occupied()
        );
        Ok(Some(RoundMoves { round, moves, arrived }))
    }

    fn check_arrival(&self, ant: AntId, round: Round) -> SimResult<()> {
        match self.roster.get(ant) {
            Some(entry) if entry.arrival == round => Ok(()),
            Some(entry) => Err(SimError::InvariantViolation(format!(
                "{ant} arrived in {round}, planned for {}",
                entry.arrival
            ))),
            None => Err(SimError::InvariantViolation(format!("{ant} is not on the roster"))),
        }
    }

    fn planned_makespan(&self) -> Round {
        self.roster
            .entries()
            .iter()
            .map(|e| e.arrival)
            .max()
            .unwrap_or(Round::ZERO)
    }
}
