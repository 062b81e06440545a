/*
generator.rs

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

//! Generate puzzles and compute their optimal solutions.
//!
//! The [`weapons`] module holds the three build-time weapon catalogs and the usability and
//! transition rules shared by the solver and the interactive game.
//!
//! The [`solver`] module computes a minimum-length weapon sequence from a head count to zero
//! with a bounded breadth-first search.
//! You create a [`solver::Solver`] object for a weapon triple and use its
//! [`solver::Solver::solve`] method.
//! If the search budget is exhausted before a solution is found, then the method returns an
//! error.
//!
//! The [`puzzle`] module draws random puzzle candidates, applies the coprimality precondition
//! to the subtracting and adding weapons, and validates every candidate with the solver.
//! You create a [`puzzle::Generator`] object and use its [`puzzle::Generator::generate`]
//! method to obtain a [`puzzle::Puzzle`] object that is guaranteed to be solvable.

pub mod puzzle;
pub mod solver;
pub mod weapons;
