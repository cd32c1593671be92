//! lem-in: route an ant colony from `##start` to `##end` in as few rounds
//! as possible.
//!
//! Reads a colony description, prints it back, then one line of moves per
//! round.  Diagnostics go to stderr through `RUST_LOG` (default `warn`).

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use af_core::EndpointCapacity;
use lem_in::{Options, RunStats, error_line, run};

/// Ant-farm planner for lem-in colony files.
#[derive(Parser, Debug)]
#[command(name = "lem-in", version)]
struct Cli {
    /// Colony description file
    file: PathBuf,
    /// Print round count, arrivals and planning time to stderr
    #[arg(long)]
    stats: bool,
    /// Print the chosen paths after the moves
    #[arg(long)]
    paths: bool,
    /// Also write moves.csv and rounds.csv into this directory
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,
    /// Give start and end rooms unbounded capacity instead of the ant count
    #[arg(long)]
    unbounded_endpoints: bool,
    /// Do not echo the colony before the moves
    #[arg(long)]
    no_echo: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(stats) => {
            if cli.stats {
                eprintln!("rounds: {}", stats.rounds);
                eprintln!("ants arrived: {}", stats.arrived);
                eprintln!("planning time: {:.3} ms", stats.elapsed.as_secs_f64() * 1e3);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("run failed: {e:?}");
            println!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<RunStats> {
    let colony = af_graph::load_colony(&cli.file)?;
    log::info!(
        "loaded {}: {} ant(s), {} room(s), {} corridor(s)",
        cli.file.display(),
        colony.ant_count,
        colony.graph.room_count(),
        colony.graph.corridor_count()
    );

    let opts = Options {
        echo:              !cli.no_echo,
        paths:             cli.paths,
        csv_dir:           cli.csv.clone(),
        endpoint_capacity: if cli.unbounded_endpoints {
            EndpointCapacity::Unbounded
        } else {
            EndpointCapacity::AntCount
        },
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stats = run(&colony, &opts, &mut out)?;
    out.flush()?;
    Ok(stats)
}
