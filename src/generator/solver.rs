/*
solver.rs

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

//! Compute optimal weapon sequences.
//!
//! The solver runs a breadth-first search over the head counts that are reachable from a
//! starting count with the three weapons of a puzzle.
//! Because the search explores the states in non-decreasing path length order, and because a
//! head count is recorded the first time it is taken off the frontier, the sequence that
//! [`Solver::solve`] returns is always one of minimum length.
//!
//! An adding weapon is always usable, so the reachable state space is unbounded and an
//! unsolvable configuration could keep the search running forever.
//! The solver therefore caps the number of distinct head counts it visits, and reports
//! [`SolverError::BudgetExceeded`] when the cap is hit before zero heads is reached.

use log::debug;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use super::weapons::Weapon;

/// Default cap on the number of distinct head counts a search may visit.
pub const DEFAULT_MAX_VISITED: usize = 100_000;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum SolverError {
    /// The frontier was exhausted: no sequence of weapons reaches zero heads.
    NoSolution,

    /// The visited-state cap was hit before zero heads was reached. The configuration may or
    /// may not be solvable.
    BudgetExceeded,
}

/// A reachable head count, with the shortest path information recorded when the state was
/// first taken off the frontier.
#[derive(Debug, Clone)]
struct SearchNode {
    /// Head count. This is the state key.
    heads: u64,

    /// Number of weapon applications from the starting count.
    score: usize,

    /// Weapon applied to reach this state, or None for the starting state.
    weapon: Option<Weapon>,

    /// Head count of the predecessor state, or None for the starting state.
    parent: Option<u64>,
}

/// Breadth-first solver for one weapon triple.
pub struct Solver {
    /// The weapon triple. The array order fixes the exploration order, which makes the solver
    /// deterministic.
    weapons: [Weapon; 3],

    /// Cap on the number of distinct head counts to visit.
    max_visited: usize,

    /// Number of states taken off the frontier during the last search.
    pub iterations: usize,

    /// Duration in seconds of the last search.
    pub duration: f32,

    /// Time when the last search started. Used to compute the [`Solver::duration`].
    start: Instant,
}

impl Solver {
    /// Create a [`Solver`] object with the default search budget.
    pub fn new(weapons: [Weapon; 3]) -> Self {
        Self::with_budget(weapons, DEFAULT_MAX_VISITED)
    }

    /// Create a [`Solver`] object with the given cap on visited states.
    pub fn with_budget(weapons: [Weapon; 3], max_visited: usize) -> Self {
        Self {
            weapons,
            max_visited,
            iterations: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Return a minimum-length weapon sequence that brings the given head count to zero.
    ///
    /// The sequence is in playing order. It is empty when the head count is already zero.
    ///
    /// # Errors
    ///
    /// The method returns [`SolverError::NoSolution`] when the whole reachable space was
    /// explored without finding zero heads, and [`SolverError::BudgetExceeded`] when the
    /// visited-state cap was hit first. It never returns a partial sequence.
    pub fn solve(&mut self, heads: u64) -> Result<Vec<Weapon>, SolverError> {
        let visited: HashMap<u64, SearchNode> = self.search(heads)?;

        let mut node: &SearchNode = visited.get(&0).ok_or(SolverError::NoSolution)?;
        let mut sequence: Vec<Weapon> = Vec::with_capacity(node.score);
        while let Some(parent) = node.parent {
            if let Some(w) = node.weapon {
                sequence.push(w);
            }
            node = visited.get(&parent).ok_or(SolverError::NoSolution)?;
        }
        sequence.reverse();
        debug!(
            "Optimal solution from {heads} heads: {} weapons",
            sequence.len()
        );
        Ok(sequence)
    }

    /// Run the breadth-first search and return the visited map, which contains a zero-head
    /// entry with shortest-path back-pointers.
    fn search(&mut self, heads: u64) -> Result<HashMap<u64, SearchNode>, SolverError> {
        self.iterations = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let mut visited: HashMap<u64, SearchNode> = HashMap::new();
        let mut queue: VecDeque<SearchNode> = VecDeque::new();
        queue.push_back(SearchNode {
            heads,
            score: 0,
            weapon: None,
            parent: None,
        });

        while let Some(node) = queue.pop_front() {
            // A shorter or equal path already claimed this head count.
            if visited.contains_key(&node.heads) {
                continue;
            }
            if visited.len() >= self.max_visited {
                self.duration = self.start.elapsed().as_secs_f32();
                debug!(
                    "Search budget of {} states exceeded after {}s",
                    self.max_visited, self.duration
                );
                return Err(SolverError::BudgetExceeded);
            }
            self.iterations += 1;

            let node_heads: u64 = node.heads;
            let node_score: usize = node.score;
            visited.insert(node_heads, node);

            if node_heads == 0 {
                self.duration = self.start.elapsed().as_secs_f32();
                debug!(
                    "Search done: {} states visited in {}s",
                    visited.len(),
                    self.duration
                );
                return Ok(visited);
            }

            for weapon in &self.weapons {
                let Some(new_heads) = weapon.apply(node_heads) else {
                    continue;
                };
                if !visited.contains_key(&new_heads) {
                    queue.push_back(SearchNode {
                        heads: new_heads,
                        score: node_score + 1,
                        weapon: Some(*weapon),
                        parent: Some(node_heads),
                    });
                }
            }
        }

        self.duration = self.start.elapsed().as_secs_f32();
        Err(SolverError::NoSolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::weapons::{self, WeaponKind, gcd};

    /// Build a triple from the catalogs: subtracting, adding, and dividing magnitudes.
    fn triple(sub: u64, add: u64, div: u64) -> [Weapon; 3] {
        [
            weapons::find(WeaponKind::Subtract, sub).unwrap(),
            weapons::find(WeaponKind::Add, add).unwrap(),
            weapons::find(WeaponKind::Divide, div).unwrap(),
        ]
    }

    #[test]
    fn zero_heads_needs_no_weapon() {
        let sequence: Vec<Weapon> = Solver::new(triple(1, 1, 2)).solve(0).unwrap();
        assert!(sequence.is_empty());
    }

    #[test]
    fn minimal_solution_length() {
        // With Canon -3, Lance +4, and Bisector /2, the best play from 10 heads takes five
        // moves (10 /2 5 +4 9 -3 6 -3 3 -3 0). Zero heads is only reachable from three heads,
        // and no path reaches three heads in fewer than four moves.
        let sequence: Vec<Weapon> = Solver::new(triple(3, 4, 2)).solve(10).unwrap();
        assert_eq!(sequence.len(), 5);

        // The sequence must be playable and end at exactly zero heads.
        let mut heads: u64 = 10;
        for weapon in &sequence {
            heads = weapon.apply(heads).unwrap();
        }
        assert_eq!(heads, 0);
    }

    #[test]
    fn regression_fixture_seven_heads() {
        // Arbalest -1, Dagger +1, Bisector /2, from seven heads:
        // 7 -1 6 /2 3 -1 2 -1 1 -1 0.
        let sequence: Vec<Weapon> = Solver::new(triple(1, 1, 2)).solve(7).unwrap();
        let names: Vec<&str> = sequence.iter().map(|w| w.name).collect();
        assert_eq!(
            names,
            ["Arbalest", "Bisector", "Arbalest", "Arbalest", "Arbalest"]
        );
    }

    #[test]
    fn solve_is_deterministic() {
        let first: Vec<Weapon> = Solver::new(triple(7, 5, 3)).solve(97).unwrap();
        let second: Vec<Weapon> = Solver::new(triple(7, 5, 3)).solve(97).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn budget_exceeded_is_reported() {
        // With -2, +2, and /2 from an odd count, every reachable count stays odd, so the
        // dividing weapon is never usable and zero heads is unreachable. The adding weapon
        // keeps the frontier growing until the cap stops the search.
        let mut solver: Solver = Solver::with_budget(triple(2, 2, 2), 500);
        assert_eq!(solver.solve(7), Err(SolverError::BudgetExceeded));
    }

    #[test]
    fn solver_records_statistics() {
        let mut solver: Solver = Solver::new(triple(3, 4, 2));
        solver.solve(10).unwrap();
        assert!(solver.iterations > 0);
    }

    #[test]
    fn coprime_triples_are_solvable() {
        // Empirical check of the generation precondition: when the subtracting and adding
        // magnitudes are coprime, the search finds a solution for every sampled head count.
        let samples: [u64; 12] = [0, 1, 2, 3, 5, 7, 19, 59, 97, 113, 120, 200];
        for sub in &weapons::SUBTRACTING_WEAPONS {
            for add in &weapons::ADDING_WEAPONS {
                if gcd(sub.value, add.value) != 1 {
                    continue;
                }
                for div in &weapons::DIVIDING_WEAPONS {
                    for heads in samples {
                        let mut solver: Solver = Solver::new([*sub, *add, *div]);
                        assert!(
                            solver.solve(heads).is_ok(),
                            "no solution for {} {} {} from {} heads",
                            sub.label(),
                            add.label(),
                            div.label(),
                            heads
                        );
                    }
                }
            }
        }
    }
}
