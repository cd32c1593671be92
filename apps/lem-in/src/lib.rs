//! lem-in: the planner behind the command-line binary.
//!
//! [`run`] takes a parsed colony and writes exactly what the binary prints
//! on stdout, so the whole pipeline can be exercised without a process.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};

use af_core::{EndpointCapacity, ErrorKind, PlanConfig};
use af_graph::{Colony, GraphError};
use af_output::{CsvWriter, RoundOutputObserver, TextWriter, format_path, write_colony};
use af_sim::{Planner, SimError};

/// Message printed when start and end are not connected.
pub const NO_ROUTE_MESSAGE: &str = "no path between start and end room";

/// What to print besides the moves.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Print the input echo and a blank line ahead of the moves.
    pub echo:              bool,
    /// Print `# path <i>: …` lines after the moves.
    pub paths:             bool,
    /// Also write `moves.csv` and `rounds.csv` into this directory.
    pub csv_dir:           Option<PathBuf>,
    pub endpoint_capacity: EndpointCapacity,
}

/// Figures for the optional statistics lines.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    pub rounds:  u64,
    pub arrived: u32,
    pub elapsed: Duration,
}

/// Plan and simulate `colony`, writing the echo, moves, and paths to `out`.
///
/// The move lines are buffered until the simulation finishes, so a run that
/// fails at any stage writes nothing to `out`.
pub fn run<W: Write>(colony: &Colony, opts: &Options, out: &mut W) -> Result<RunStats> {
    let started = Instant::now();
    let graph = &colony.graph;

    let config = PlanConfig {
        endpoint_capacity: opts.endpoint_capacity,
        ..PlanConfig::new(colony.ant_count)
    };
    let plan = Planner::new(config).prepare(graph)?;

    let csv = match &opts.csv_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .map_err(|e| anyhow!("cannot create {}: {e}", dir.display()))?;
            Some(CsvWriter::new(dir)?)
        }
        None => None,
    };
    let mut obs = RoundOutputObserver::new((TextWriter::new(Vec::new()), csv), graph);
    let summary = plan.simulation(graph).run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e.into());
    }
    let (moves, _) = obs.into_writer();

    if opts.echo {
        write_colony(out, colony)?;
        writeln!(out)?;
    }
    out.write_all(&moves.into_inner())?;

    if opts.paths {
        for (i, path) in plan.paths.iter().enumerate() {
            writeln!(out, "{}", format_path(i, path, graph))?;
        }
    }

    Ok(RunStats {
        rounds:  summary.rounds.0,
        arrived: summary.arrived,
        elapsed: started.elapsed(),
    })
}

/// The `ERROR: …` line for a failed run.
pub fn error_line(err: &anyhow::Error) -> String {
    if error_kind(err) == Some(ErrorKind::NoRoute) {
        return format!("ERROR: {NO_ROUTE_MESSAGE}");
    }
    format!("ERROR: {err}")
}

fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    if let Some(e) = err.downcast_ref::<SimError>() {
        return Some(e.kind());
    }
    err.downcast_ref::<GraphError>().map(GraphError::kind)
}
