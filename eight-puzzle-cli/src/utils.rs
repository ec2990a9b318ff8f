use anyhow::Result;
use eight_puzzle_solver::{Board, Heuristic, Solution, Solver, format_directions};
use log::info;

use std::{
    io::{IsTerminal, Write, stderr},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

pub struct SolveOptions {
    pub max_expansions: Option<usize>,
    pub quiet: bool,
    pub spinner: bool,
}

/// Run each algorithm in turn on `board`, printing each solution as it lands.
pub fn do_solve(
    board: Board,
    heuristics: &[Heuristic],
    options: &SolveOptions,
) -> Result<Vec<Solution>> {
    println!("{}\n", board.to_pretty_string());

    let mut solutions = Vec::with_capacity(heuristics.len());
    for &heuristic in heuristics {
        let mut solver = Solver::new(heuristic);
        if let Some(limit) = options.max_expansions {
            solver = solver.with_max_expansions(limit);
        }
        info!("running {heuristic}");
        let message = format!("Solving with {heuristic}...");
        let solution = if options.spinner {
            with_spinner(&message, move || solver.solve(board))?
        } else {
            solver.solve(board)?
        };
        print_solution(&solution, options.quiet);
        solutions.push(solution);
    }

    if solutions.len() > 1 {
        println!("{}", format_summary(&solutions));
    }
    Ok(solutions)
}

fn print_solution(solution: &Solution, quiet: bool) {
    let Solution {
        heuristic,
        depth,
        nodes_expanded,
        max_frontier_size,
        elapsed,
        ..
    } = solution;
    let elapsed = format_elapsed(*elapsed);
    println!("===== {heuristic} =====");
    println!(
        "✓ Solved in {depth} Moves — Expanded: {nodes_expanded}, Max frontier: {max_frontier_size}, Time: {elapsed}\n"
    );
    if quiet {
        return;
    }
    for (i, (board, direction)) in solution
        .path
        .iter()
        .skip(1)
        .zip(&solution.moves)
        .enumerate()
    {
        println!("Move {}: {direction}\n{}\n", i + 1, board.to_pretty_string());
    }
    if !solution.moves.is_empty() {
        println!("{}", format_directions(&solution.moves));
    }
}

pub fn format_summary(solutions: &[Solution]) -> String {
    let width = solutions
        .iter()
        .map(|s| s.heuristic.algorithm_name().len())
        .max()
        .unwrap_or_default()
        + 2;
    let mut output = String::new();
    output.push_str("===== SUMMARY =====\n");
    output.push_str(&format!(
        "{:<width$}{:>7}{:>11}{:>11}{:>10}\n",
        "Algorithm", "Depth", "Expanded", "Frontier", "Time"
    ));
    for solution in solutions {
        output.push_str(&format!(
            "{:<width$}{:>7}{:>11}{:>11}{:>10}\n",
            solution.heuristic.algorithm_name(),
            solution.depth,
            solution.nodes_expanded,
            solution.max_frontier_size,
            format_elapsed(solution.elapsed),
        ));
    }
    output
}

fn with_spinner<T, F: FnOnce() -> T>(message: &str, f: F) -> T {
    if stderr().is_terminal() {
        let spinning = Arc::new(AtomicBool::new(true));
        let spinning_clone = Arc::clone(&spinning);
        let message = message.to_string();

        let handle = std::thread::spawn(move || {
            let spinner_chars = ['|', '/', '-', '\\'];
            let mut i = 0;
            let stderr = stderr();
            let mut handle = stderr.lock();

            let _ = write!(handle, "\x1b[?25l"); // hide cursor
            let _ = handle.flush();

            while spinning_clone.load(Ordering::Relaxed) {
                let spinner_char = spinner_chars[i % spinner_chars.len()];
                let _ = write!(handle, "\r{spinner_char} {message}",);
                let _ = handle.flush();
                std::thread::sleep(Duration::from_millis(100));
                i += 1;
            }

            let _ = write!(handle, "\r\x1b[2K\r\x1b[?25h"); // clear line and show cursor
            let _ = handle.flush();
        });

        let result = f();
        spinning.store(false, Ordering::Relaxed);
        let _ = handle.join();
        result
    } else {
        f()
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 90 {
        let ms = elapsed.subsec_millis();
        format!("{secs}.{ms:03}s")
    } else {
        let minutes = secs / 60;
        let secs = secs % 60;
        format!("{minutes}m {secs}s")
    }
}
