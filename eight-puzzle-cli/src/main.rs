mod logger;
mod preset;
mod utils;

use crate::preset::{Preset, scramble};
use crate::utils::*;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser, ValueEnum};
use eight_puzzle_solver::{Board, Heuristic, count_inversions};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use std::{
    io::{IsTerminal, Read, stdin},
    path::PathBuf,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    group(ArgGroup::new("source").args(["preset", "scramble", "file", "board"]))
)]
struct Cli {
    /// Solve a built-in board
    #[arg(short, long, value_enum, value_name = "NAME")]
    preset: Option<Preset>,
    /// Solve a board made by sliding the goal NUM random moves
    #[arg(long, value_name = "NUM")]
    scramble: Option<usize>,
    /// Seed for --scramble (random when omitted)
    #[arg(long, value_name = "SEED", requires = "scramble")]
    seed: Option<u64>,
    /// Search algorithm to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,
    /// Max nodes to expand per search
    #[arg(short = 's', long, value_name = "NUM")]
    max_expansions: Option<usize>,
    /// Print statistics only, without the solution path
    #[arg(short, long)]
    quiet: bool,
    /// Preview the initial board without solving
    #[arg(long)]
    preview: bool,
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Path to a file holding the board
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// Board tiles in row-major order with 0 as the blank (e.g. 136502478 or 1,3,6,5,0,2,4,7,8)
    board: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Uniform Cost Search
    Ucs,
    /// A* with the misplaced tile heuristic
    Misplaced,
    /// A* with the Manhattan distance heuristic
    Manhattan,
    /// All three, followed by a comparison
    All,
}

impl Algorithm {
    fn heuristics(&self) -> Vec<Heuristic> {
        match self {
            Algorithm::Ucs => vec![Heuristic::Zero],
            Algorithm::Misplaced => vec![Heuristic::MisplacedTiles],
            Algorithm::Manhattan => vec![Heuristic::ManhattanDistance],
            Algorithm::All => Heuristic::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let Cli {
        preset,
        scramble: scramble_steps,
        seed,
        algorithm,
        max_expansions,
        quiet,
        preview,
        verbose,
        file,
        board,
    } = Cli::parse();
    logger::init(verbose)?;

    let board = if let Some(content) = board {
        Board::parse(&content).context("Failed to parse board")?
    } else if let Some(file) = file {
        let content = std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read '{}'", file.display()))?;
        Board::parse(&content).context("Failed to parse board")?
    } else if let Some(preset) = preset {
        info!("using preset {preset:?}, optimal depth {}", preset.depth());
        preset.board()?
    } else if let Some(steps) = scramble_steps {
        let seed = seed.unwrap_or_else(rand::random);
        println!("Scrambled {steps} moves with seed {seed}");
        scramble(steps, &mut StdRng::seed_from_u64(seed))
    } else if !stdin().is_terminal() {
        let mut content = String::new();
        stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Board::parse(&content).context("Failed to parse board")?
    } else {
        bail!("No `board`, `--file`, `--preset` or `--scramble` provided.");
    };

    if preview {
        println!("{}", board.to_pretty_string());
        return Ok(());
    }
    if !board.is_solvable() {
        bail!(
            "Board is unsolvable; it has {} inversions (must be even).\n{}",
            count_inversions(board.tiles()),
            board.to_pretty_string()
        );
    }

    let options = SolveOptions {
        max_expansions,
        quiet,
        spinner: verbose == 0,
    };
    do_solve(board, &algorithm.heuristics(), &options)?;

    Ok(())
}
