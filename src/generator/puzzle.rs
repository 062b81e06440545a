/*
puzzle.rs

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

//! Generate random puzzles.
//!
//! A puzzle is a starting head count plus one weapon from each catalog.
//! The adding weapon is redrawn until its magnitude is coprime with the subtracting one.
//! Coprimality makes the subtracting and adding pair able to express arbitrary integer
//! offsets, but it does not prove on its own that zero heads is reachable once the dividing
//! weapon and the no-negative-heads floor come into play.
//! The generator therefore runs the solver on every candidate and discards the ones the
//! solver rejects: a [`Puzzle`] handed to the caller is always solvable, and its
//! [`Puzzle::optimal_turns`] value is always defined, so the hit-point budget is never
//! calibrated from a failed search.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::solver::{Solver, SolverError};
use super::weapons::{self, Weapon};

/// Smallest possible starting head count.
pub const MIN_START_HEADS: u64 = 5;

/// Largest possible starting head count.
pub const MAX_START_HEADS: u64 = 120;

// Maximum number of adding-weapon draws before accepting a non-coprime pair.
const COPRIME_DRAWS: usize = 100;

// Maximum number of candidates to try before giving up. With the build-time catalogs the
// first candidate is almost always accepted; the bound only guards against a future catalog
// change that would make solvable triples rare.
const GENERATION_ATTEMPTS: usize = 20;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// No solvable candidate was found within the attempt bound.
    NoSolvablePuzzle,
}

/// A generated puzzle.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Puzzle {
    /// Starting head count, in [`MIN_START_HEADS`]..=[`MAX_START_HEADS`].
    pub start_heads: u64,

    /// The weapon triple: subtracting, adding, and dividing, in that order.
    pub weapons: [Weapon; 3],

    /// Hydra display color, in `#rrggbb` form.
    pub color: String,

    /// Minimum number of weapon applications to reach zero heads. The player's hit points are
    /// twice this value.
    pub optimal_turns: usize,

    /// Whether the coprimality precondition was met. When false, the candidate survived the
    /// solver check anyway, but the miss is worth surfacing in tests and logs.
    pub coprime: bool,
}

/// Generate [`Puzzle`] objects and keep statistics about the generation runs.
pub struct Generator {
    /// Number of search iterations for the last generated puzzle.
    pub iterations: usize,

    /// Duration in seconds of the solver run for the last generated puzzle.
    pub duration: f32,

    /// Number of candidates that the solver rejected during the last generation.
    pub discarded: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a [`Generator`] object.
    pub fn new() -> Self {
        Self {
            iterations: 0,
            duration: 0.0,
            discarded: 0,
        }
    }

    /// Generate a random solvable puzzle.
    ///
    /// # Errors
    ///
    /// The method returns an error when no candidate passed the solver check within the
    /// attempt bound. With the build-time catalogs this is not expected to happen.
    pub fn generate(&mut self) -> Result<Puzzle, PuzzleError> {
        self.iterations = 0;
        self.duration = 0.0;
        self.discarded = 0;

        for attempt in 1..=GENERATION_ATTEMPTS {
            let (start_heads, weapons, coprime) = Self::draw_candidate();
            let mut solver: Solver = Solver::new(weapons);
            let res: Result<Vec<Weapon>, SolverError> = solver.solve(start_heads);
            self.iterations = solver.iterations;
            self.duration = solver.duration;

            match res {
                Ok(sequence) => {
                    debug!(
                        "Attempt {attempt}: {start_heads} heads, optimal {} moves",
                        sequence.len()
                    );
                    return Ok(Puzzle {
                        start_heads,
                        weapons,
                        color: Self::random_color(),
                        optimal_turns: sequence.len(),
                        coprime,
                    });
                }
                Err(SolverError::NoSolution) => {
                    self.discarded += 1;
                    debug!("Attempt {attempt}: unsolvable candidate discarded");
                }
                Err(SolverError::BudgetExceeded) => {
                    self.discarded += 1;
                    debug!("Attempt {attempt}: search budget exceeded, candidate discarded");
                }
            }
        }
        Err(PuzzleError::NoSolvablePuzzle)
    }

    /// Draw a random starting head count and weapon triple, and report whether the
    /// coprimality precondition was met.
    fn draw_candidate() -> (u64, [Weapon; 3], bool) {
        let mut rng = rand::rng();

        let start_heads: u64 = rng.random_range(MIN_START_HEADS..=MAX_START_HEADS);

        let sub: Weapon =
            weapons::SUBTRACTING_WEAPONS[rng.random_range(0..weapons::SUBTRACTING_WEAPONS.len())];

        // Redraw the adding weapon until its magnitude is coprime with the subtracting one.
        // The last draw is accepted when the bound is exhausted; the solver check catches the
        // candidates this lets through.
        let mut add: Weapon =
            weapons::ADDING_WEAPONS[rng.random_range(0..weapons::ADDING_WEAPONS.len())];
        let mut draws: usize = COPRIME_DRAWS;
        while draws > 0 && weapons::gcd(sub.value, add.value) != 1 {
            add = weapons::ADDING_WEAPONS[rng.random_range(0..weapons::ADDING_WEAPONS.len())];
            draws -= 1;
        }
        let coprime: bool = weapons::gcd(sub.value, add.value) == 1;
        if !coprime {
            warn!(
                "No adding weapon coprime with {} found in {COPRIME_DRAWS} draws",
                sub.label()
            );
        }

        let div: Weapon =
            weapons::DIVIDING_WEAPONS[rng.random_range(0..weapons::DIVIDING_WEAPONS.len())];

        (start_heads, [sub, add, div], coprime)
    }

    /// Return a random `#rrggbb` color string for the hydra body.
    fn random_color() -> String {
        format!("#{:06x}", rand::rng().random_range(0..0x0100_0000u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::weapons::WeaponKind;

    #[test]
    fn generated_puzzle_is_well_formed() {
        let puzzle: Puzzle = Generator::new().generate().unwrap();

        assert!(puzzle.start_heads >= MIN_START_HEADS);
        assert!(puzzle.start_heads <= MAX_START_HEADS);
        assert_eq!(puzzle.weapons[0].kind, WeaponKind::Subtract);
        assert_eq!(puzzle.weapons[1].kind, WeaponKind::Add);
        assert_eq!(puzzle.weapons[2].kind, WeaponKind::Divide);
        assert!(puzzle.optimal_turns > 0);
        assert_eq!(puzzle.color.len(), 7);
        assert!(puzzle.color.starts_with('#'));
    }

    #[test]
    fn optimal_turns_matches_solver() {
        let puzzle: Puzzle = Generator::new().generate().unwrap();
        let sequence: Vec<Weapon> = Solver::new(puzzle.weapons)
            .solve(puzzle.start_heads)
            .unwrap();
        assert_eq!(puzzle.optimal_turns, sequence.len());
    }

    #[test]
    fn generation_is_always_solvable() {
        // The generator validates every candidate with the solver, so repeated generation
        // must never surface an unsolvable puzzle.
        let mut generator: Generator = Generator::new();
        for _ in 0..50 {
            let puzzle: Puzzle = generator.generate().unwrap();
            assert!(Solver::new(puzzle.weapons).solve(puzzle.start_heads).is_ok());
        }
    }
}
