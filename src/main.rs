//! Four Knights -- compares A* and branch-and-bound on the Four Knights puzzle.
//!
//! Solves the puzzle once per requested algorithm, each run on a freshly
//! reset session, and prints a timing/expansion summary to stdout. Logs go
//! to stderr; raise the level with `-v` or `RUST_LOG`.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use fourknights::board::Board;
use fourknights::engine::{Engine, SolverConfig};
use fourknights::movegen::random_walk;
use fourknights::protocol::{encode_layout, parse_layout};
use fourknights::report::{write_json, write_path, write_table, RunReport};
use fourknights::search::{Algorithm, TieBreak, DEFAULT_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// A* with the cycle-distance heuristic
    Astar,
    /// Branch-and-bound ordered by moves alone
    Bnb,
    /// A* then branch-and-bound
    Both,
}

impl AlgorithmArg {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmArg::Astar => &[Algorithm::AStar],
            AlgorithmArg::Bnb => &[Algorithm::BranchAndBound],
            AlgorithmArg::Both => &[Algorithm::AStar, Algorithm::BranchAndBound],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TieBreakArg {
    /// Incidental heap order
    Heap,
    /// Lowest board fingerprint first
    Fingerprint,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Heap => TieBreak::Heap,
            TieBreakArg::Fingerprint => TieBreak::LowestFingerprint,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fourknights")]
#[command(version, about = "Compare A* and branch-and-bound on the Four Knights puzzle", long_about = None)]
struct Cli {
    /// Which search to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Both)]
    algorithm: AlgorithmArg,

    /// Start layout, rows separated by '/' (e.g. "B.b/.../W.w")
    #[arg(long, conflicts_with = "scramble")]
    start: Option<String>,

    /// Goal layout, rows separated by '/' (e.g. "w.W/.../b.B")
    #[arg(long)]
    goal: Option<String>,

    /// Start from this many random moves away from the goal
    #[arg(long)]
    scramble: Option<usize>,

    /// Random seed for --scramble, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum number of frontier entries
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Ordering among frontier entries with equal cost
    #[arg(long, value_enum, default_value_t = TieBreakArg::Heap)]
    tie_break: TieBreakArg,

    /// Print reports as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print each solution path board by board
    #[arg(long)]
    show_path: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let goal = match &cli.goal {
        Some(layout) => parse_layout(layout).with_context(|| format!("invalid --goal '{}'", layout))?,
        None => Board::goal(),
    };

    let initial = match (&cli.start, cli.scramble) {
        (Some(layout), _) => {
            parse_layout(layout).with_context(|| format!("invalid --start '{}'", layout))?
        }
        (None, Some(steps)) => {
            let mut rng = if cli.seed != 0 {
                SmallRng::seed_from_u64(cli.seed)
            } else {
                SmallRng::from_entropy()
            };
            random_walk(&goal, steps, &mut rng)
        }
        (None, None) => Board::initial(),
    };

    log::info!(
        "start {} goal {} capacity {}",
        encode_layout(&initial),
        encode_layout(&goal),
        cli.capacity
    );

    let config = SolverConfig {
        frontier_capacity: cli.capacity,
        tie_break: cli.tie_break.into(),
    };
    let mut engine = Engine::new(initial, goal, config);
    let runs = engine
        .compare(cli.algorithm.algorithms())
        .context("search failed")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.show_path {
        for run in &runs {
            write_path(&run.solution, &mut out)?;
        }
    }

    let reports: Vec<RunReport> = runs.into_iter().map(|r| r.report).collect();
    if cli.json {
        write_json(&reports, &mut out)?;
    } else {
        writeln!(out)?;
        write_table(&reports, &mut out)?;
    }
    Ok(())
}
