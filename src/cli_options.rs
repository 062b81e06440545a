/*
cli_options.rs

Copyright 2026 Hervé Quatremain

This file is part of Hydraheads.

Hydraheads is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hydraheads is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hydraheads. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers working on the catalogs and the solver.
//! In command-line mode, Hydraheads can solve a single configuration, or generate batches of
//! random puzzles and report solver statistics.
//!
//! # Examples
//!
//! List the weapon catalogs:
//!
//! ```
//! $ hydraheads --ls
//! Arbalest -1
//! Axe -2
//! ...
//! Bisector /2
//! Trisector /3
//! ```
//!
//! Solve one configuration:
//!
//! ```
//! $ hydraheads --heads 10 --sub 3 --add 4 --div 2
//! 5 moves from 10 heads:
//!   Bisector /2 -> 5 heads
//!   Lance +4 -> 9 heads
//!   Canon -3 -> 6 heads
//!   Canon -3 -> 3 heads
//!   Canon -3 -> 0 heads
//! ```
//!
//! Generate five random puzzles and print statistics:
//!
//! ```
//! $ hydraheads -c 5 -s
//! 74 heads  Knife -9  Halberd +2  Bisector /2  optimal 9 moves
//! ...
//! ```

use clap::Parser;
use log::debug;
use std::env;

use crate::generator::puzzle::{Generator, Puzzle, PuzzleError};
use crate::generator::solver::{Solver, SolverError};
use crate::generator::weapons::{
    self, ADDING_WEAPONS, DIVIDING_WEAPONS, SUBTRACTING_WEAPONS, Weapon, WeaponKind,
};

/// Solve hydra configurations and build random puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, ignore_errors = true)]
struct Args {
    /// List the weapon catalogs
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Solve a single configuration: starting head count
    #[arg(long, group = "solve")]
    heads: Option<u64>,

    /// Magnitude of the subtracting weapon for --heads
    #[arg(long, requires = "solve")]
    sub: Option<u64>,

    /// Magnitude of the adding weapon for --heads
    #[arg(long, requires = "solve")]
    add: Option<u64>,

    /// Magnitude of the dividing weapon for --heads
    #[arg(long, requires = "solve")]
    div: Option<u64>,

    /// Number of random puzzles to generate
    #[arg(short, long, default_value_t = 0)]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
///
/// Return None when no command-line mode was requested, in which case the interactive game
/// starts, or the exit code of the requested mode.
pub fn parse() -> Option<u8> {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.ls {
        return Some(list_catalogs());
    }
    if let Some(heads) = args.heads {
        return Some(solve_configuration(heads, args.sub, args.add, args.div));
    }
    if args.count > 0 {
        return Some(generate_batch(args.count, args.summary));
    }
    None
}

/// Print the three weapon catalogs.
fn list_catalogs() -> u8 {
    for weapon in SUBTRACTING_WEAPONS
        .iter()
        .chain(&ADDING_WEAPONS)
        .chain(&DIVIDING_WEAPONS)
    {
        println!("{}", weapon.label());
    }
    0
}

/// Solve the requested configuration and print the optimal weapon sequence.
fn solve_configuration(
    heads: u64,
    sub: Option<u64>,
    add: Option<u64>,
    div: Option<u64>,
) -> u8 {
    let (Some(sub), Some(add), Some(div)) = (sub, add, div) else {
        eprintln!("--heads requires --sub, --add, and --div");
        return 1;
    };

    /// Retrieve a catalog weapon, or print an error message.
    fn lookup(kind: WeaponKind, value: u64) -> Option<Weapon> {
        let weapon: Option<Weapon> = weapons::find(kind, value);
        if weapon.is_none() {
            eprintln!(
                "No weapon {kind}{value} in the catalogs. Use --ls to list the available \
                 weapons."
            );
        }
        weapon
    }

    let (Some(sub), Some(add), Some(div)) = (
        lookup(WeaponKind::Subtract, sub),
        lookup(WeaponKind::Add, add),
        lookup(WeaponKind::Divide, div),
    ) else {
        return 1;
    };

    let mut solver: Solver = Solver::new([sub, add, div]);
    match solver.solve(heads) {
        Ok(sequence) => {
            println!("{} moves from {} heads:", sequence.len(), heads);
            let mut current: u64 = heads;
            for weapon in &sequence {
                match weapon.apply(current) {
                    Some(h) => current = h,
                    None => {
                        eprintln!("Unplayable move in solution: {}", weapon.label());
                        panic!("Bug: the solver returned an unplayable sequence");
                    }
                }
                println!("  {} -> {} heads", weapon.label(), current);
            }
            if current != 0 {
                eprintln!("Sequence ends at {current} heads instead of 0");
                panic!("Bug: the solver returned a sequence that does not reach zero");
            }
            0
        }
        Err(SolverError::NoSolution) => {
            println!("No solution: zero heads is not reachable from this configuration.");
            1
        }
        Err(SolverError::BudgetExceeded) => {
            println!("No solution found within the search budget.");
            1
        }
    }
}

/// Generate the requested number of random puzzles, and print statistics about the solver
/// runs when requested.
fn generate_batch(count: usize, summary: bool) -> u8 {
    let mut generator: Generator = Generator::new();
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    let mut errors: usize = 0;

    for i in 0..count {
        debug!("Iteration {i}");

        let ret: Result<Puzzle, PuzzleError> = generator.generate();
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iterations;
        errors += generator.discarded;

        match ret {
            Ok(puzzle) => {
                println!(
                    "{} heads  {}  {}  {}  optimal {} moves{}",
                    puzzle.start_heads,
                    puzzle.weapons[0].label(),
                    puzzle.weapons[1].label(),
                    puzzle.weapons[2].label(),
                    puzzle.optimal_turns,
                    if puzzle.coprime {
                        ""
                    } else {
                        "  (coprime precondition missed)"
                    }
                );
            }
            Err(PuzzleError::NoSolvablePuzzle) => {
                eprintln!("No solvable puzzle found");
                return 1;
            }
        }
    }

    // Print some stats
    if summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
 discarded puzzles = {}",
            total,
            total / count as f32,
            max,
            iterations / count,
            errors
        );
    }
    0
}
