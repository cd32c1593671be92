//! The end-to-end planning pipeline.

use af_core::{PlanConfig, RoomId};
use af_flow::{EdmondsKarp, FlowNetwork, MaxFlowSolver, PathDecomposer, RoomPath};
use af_graph::RoomGraph;
use af_schedule::{Assignment, Roster, assign_greedy};

use crate::{RoundObserver, SimError, SimResult, SimSummary, Simulation};

/// Paths, assignment, and roster for one graph, ready to simulate.
#[derive(Debug, Clone)]
pub struct Plan {
    pub max_flow:   u32,
    /// Ordered by ascending room count; ties keep decomposition order.
    pub paths:      Vec<RoomPath>,
    pub assignment: Assignment,
    pub roster:     Roster,
    verify:         bool,
}

impl Plan {
    /// A fresh simulation of this plan over `graph`.
    pub fn simulation<'a>(&'a self, graph: &'a RoomGraph) -> Simulation<'a> {
        Simulation::new(graph, &self.paths, &self.roster, self.verify)
    }
}

/// Result of [`Planner::run`].
#[derive(Debug, Clone)]
pub struct PlanReport {
    pub plan:    Plan,
    pub summary: SimSummary,
}

/// Drives a room graph through flow, decomposition, assignment, and
/// simulation.
///
/// Planning always runs [`EdmondsKarp`]; the only input is a [`PlanConfig`]
/// (ant count, endpoint capacity, verification switch).
///
/// # Example
///
/// ```rust,ignore
/// let colony  = af_graph::load_colony(path)?;
/// let planner = Planner::new(PlanConfig::new(colony.ant_count));
/// let report  = planner.run(&colony.graph, &mut NoopObserver)?;
/// println!("{} rounds", report.summary.rounds.0);
/// ```
pub struct Planner {
    config: PlanConfig,
}

impl Planner {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Build and solve the flow network, extract and order the paths, and
    /// assign every ant to one.
    pub fn prepare(&self, graph: &RoomGraph) -> SimResult<Plan> {
        self.config.validate()?;

        let mut network = FlowNetwork::from_graph(graph, &self.config);
        log::debug!(
            "flow network: {} vertices, {} arena edges",
            network.vertex_count(),
            network.edge_count()
        );
        let (source, sink) = (network.source(), network.sink());
        let max_flow = EdmondsKarp.max_flow(&mut network, source, sink)?;
        if self.config.verify {
            network.check_invariants()?;
        }

        let mut paths = PathDecomposer::new(&mut network)?.decompose()?;
        paths.sort_by_key(RoomPath::len);
        if self.config.verify {
            check_paths(graph, &paths)?;
        }
        for (i, p) in paths.iter().enumerate() {
            log::info!("path {i}: {} room(s): {}", p.len(), p.names(graph).join(" "));
        }

        let lengths: Vec<usize> = paths.iter().map(RoomPath::len).collect();
        let assignment = assign_greedy(&lengths, self.config.ant_count)?;
        let roster = Roster::from_assignment(&assignment);
        log::info!(
            "max flow {max_flow}, {} ant(s) over {} path(s), planned makespan {}",
            self.config.ant_count,
            assignment.used_paths().count(),
            assignment.makespan().0
        );

        Ok(Plan { max_flow, paths, assignment, roster, verify: self.config.verify })
    }

    /// [`prepare`](Self::prepare) then simulate to completion, reporting
    /// each round to `observer`.
    pub fn run<O: RoundObserver>(&self, graph: &RoomGraph, observer: &mut O) -> SimResult<PlanReport> {
        let plan = self.prepare(graph)?;
        let summary = plan.simulation(graph).run(observer)?;
        Ok(PlanReport { plan, summary })
    }
}

/// Every path must be a simple start-to-end walk over real corridors, and
/// no interior room may appear on two paths.
fn check_paths(graph: &RoomGraph, paths: &[RoomPath]) -> SimResult<()> {
    let mut owner: Vec<Option<usize>> = vec![None; graph.room_count()];
    for (i, path) in paths.iter().enumerate() {
        path.check_against(graph)
            .map_err(|e| SimError::InvariantViolation(format!("path {i}: {e}")))?;
        for &room in path.interior() {
            if let Some(j) = owner[room.index()].replace(i) {
                return Err(shared_room(graph, room, j, i));
            }
        }
    }
    Ok(())
}

fn shared_room(graph: &RoomGraph, room: RoomId, a: usize, b: usize) -> SimError {
    SimError::InvariantViolation(format!(
        "room {} lies on paths {a} and {b}",
        graph.name(room)
    ))
}
