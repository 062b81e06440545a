/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object is a plain value owned by the application layer: all the transitions
//! go through its methods, and nothing in this module touches global state.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::generator::puzzle::Puzzle;
use crate::generator::solver::{Solver, SolverError};
use crate::generator::weapons::Weapon;
use crate::saver::game::instant;

/// Outcome of a fight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The fight is still on.
    Playing,

    /// The hydra is dead and the player used the fewest hits possible.
    FlawlessVictory,

    /// The hydra is dead and the player has no hit point left.
    NarrowVictory,

    /// The hydra is dead.
    Victory,

    /// The player is dead and the hydra has grown beyond a hundred heads.
    Overrun,

    /// The player is dead.
    Defeat,
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct Game {
    /// Puzzle details.
    pub puzzle: Puzzle,

    /// Current head count.
    pub heads: u64,

    /// Remaining hit points. Every weapon use costs one hit point, including the killing
    /// blow, and the value goes negative when the player dies.
    pub hp: i64,

    /// Whether the game has started.
    pub started: bool,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Time when the game started. Used to compute game duration.
    #[serde(with = "instant")]
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,
}

impl Game {
    /// Create a [`Game`] object for the given puzzle.
    ///
    /// The hit points are set to twice the optimal move count.
    pub fn new(puzzle: Puzzle) -> Self {
        let hp: i64 = 2 * puzzle.optimal_turns as i64;
        Self {
            heads: puzzle.start_heads,
            hp,
            puzzle,
            started: true,
            paused: false,
            start_time: Instant::now(),
            pause_duration: None,
        }
    }

    /// Return the weapon triple for this game.
    pub fn weapons(&self) -> &[Weapon; 3] {
        &self.puzzle.weapons
    }

    /// Apply the weapon with the given index (0 to 2) to the hydra.
    ///
    /// Return false when the weapon is not usable on the current head count, when the index
    /// is out of range, or when the game is over or paused.
    pub fn apply_weapon(&mut self, index: usize) -> bool {
        if self.paused || self.outcome() != Outcome::Playing {
            return false;
        }
        let Some(weapon) = self.puzzle.weapons.get(index) else {
            return false;
        };
        match weapon.apply(self.heads) {
            Some(new_heads) => {
                self.heads = new_heads;
                self.hp -= 1;
                debug!(
                    "{}: {} heads left, {} hit points left",
                    weapon.label(),
                    self.heads,
                    self.hp
                );
                true
            }
            None => false,
        }
    }

    /// Return the outcome of the fight.
    pub fn outcome(&self) -> Outcome {
        if self.heads == 0 && self.hp >= 0 {
            if self.hp == self.puzzle.optimal_turns as i64 {
                Outcome::FlawlessVictory
            } else if self.hp == 0 {
                Outcome::NarrowVictory
            } else {
                Outcome::Victory
            }
        } else if self.hp < 0 {
            if self.heads > 100 {
                Outcome::Overrun
            } else {
                Outcome::Defeat
            }
        } else {
            Outcome::Playing
        }
    }

    /// Return an optimal weapon sequence from the current head count.
    ///
    /// # Errors
    ///
    /// The method returns an error when no sequence reaches zero heads from the current
    /// count, which can happen when the player maneuvered into a dead part of the state
    /// space.
    pub fn hint(&self) -> Result<Vec<Weapon>, SolverError> {
        Solver::new(self.puzzle.weapons).solve(self.heads)
    }

    /// Return the number of hits the player used beyond the optimal count.
    pub fn extra_hits(&self) -> usize {
        let optimal: i64 = self.puzzle.optimal_turns as i64;
        (optimal - self.hp).max(0) as usize
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration.
    pub fn get_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Return the game duration in hours, minutes, and seconds.
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.start_time.elapsed().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::weapons::{self, WeaponKind};

    /// Fixed puzzle: Arbalest -1, Dagger +1, Bisector /2, from seven heads, optimal in five
    /// moves.
    fn fixture() -> Puzzle {
        Puzzle {
            start_heads: 7,
            weapons: [
                weapons::find(WeaponKind::Subtract, 1).unwrap(),
                weapons::find(WeaponKind::Add, 1).unwrap(),
                weapons::find(WeaponKind::Divide, 2).unwrap(),
            ],
            color: String::from("#336699"),
            optimal_turns: 5,
            coprime: true,
        }
    }

    #[test]
    fn new_game_calibrates_hit_points() {
        let game: Game = Game::new(fixture());
        assert_eq!(game.heads, 7);
        assert_eq!(game.hp, 10);
        assert_eq!(game.outcome(), Outcome::Playing);
    }

    #[test]
    fn unusable_weapon_is_rejected() {
        let mut game: Game = Game::new(fixture());
        // Seven heads: the Bisector is not usable.
        assert!(!game.apply_weapon(2));
        assert_eq!(game.heads, 7);
        assert_eq!(game.hp, 10);
        // Out-of-range index.
        assert!(!game.apply_weapon(3));
    }

    #[test]
    fn optimal_play_is_a_flawless_victory() {
        let mut game: Game = Game::new(fixture());
        // 7 -1 6 /2 3 -1 2 -1 1 -1 0
        for index in [0, 2, 0, 0, 0] {
            assert!(game.apply_weapon(index));
        }
        assert_eq!(game.heads, 0);
        assert_eq!(game.hp, 5);
        assert_eq!(game.outcome(), Outcome::FlawlessVictory);
        assert_eq!(game.extra_hits(), 0);

        // The game is over: no more weapon use.
        assert!(!game.apply_weapon(1));
    }

    #[test]
    fn suboptimal_play_is_a_plain_victory() {
        let mut game: Game = Game::new(fixture());
        // Waste two hits: 7 +1 8 -1 7, then play the optimal line.
        for index in [1, 0, 0, 2, 0, 0, 0] {
            assert!(game.apply_weapon(index));
        }
        assert_eq!(game.outcome(), Outcome::Victory);
        assert_eq!(game.extra_hits(), 2);
    }

    #[test]
    fn exhausting_hit_points_is_a_defeat() {
        let mut game: Game = Game::new(fixture());
        // Eleven adds: more moves than the budget allows, hydra still small.
        for _ in 0..11 {
            assert!(game.apply_weapon(1));
        }
        assert_eq!(game.hp, -1);
        assert_eq!(game.outcome(), Outcome::Defeat);
    }

    #[test]
    fn large_hydra_defeat_is_an_overrun() {
        let mut game: Game = Game::new(fixture());
        game.heads = 101;
        game.hp = -1;
        assert_eq!(game.outcome(), Outcome::Overrun);
    }

    #[test]
    fn winning_with_no_hit_point_left_is_narrow() {
        let mut game: Game = Game::new(fixture());
        game.heads = 1;
        game.hp = 1;
        assert!(game.apply_weapon(0));
        assert_eq!(game.hp, 0);
        assert_eq!(game.outcome(), Outcome::NarrowVictory);
    }

    #[test]
    fn hint_follows_the_current_position() {
        let mut game: Game = Game::new(fixture());
        assert_eq!(game.hint().unwrap().len(), 5);
        assert!(game.apply_weapon(0));
        assert_eq!(game.hint().unwrap().len(), 4);
    }

    #[test]
    fn paused_game_rejects_weapons() {
        let mut game: Game = Game::new(fixture());
        game.pause();
        assert!(!game.apply_weapon(0));
        game.resume();
        assert!(game.apply_weapon(0));
    }

    #[test]
    fn game_serialization_round_trip() {
        let mut game: Game = Game::new(fixture());
        assert!(game.apply_weapon(0));

        let json: String = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.heads, game.heads);
        assert_eq!(restored.hp, game.hp);
        assert_eq!(restored.puzzle.optimal_turns, game.puzzle.optimal_turns);
        // The weapons are resolved back from the catalogs, names included.
        assert_eq!(restored.puzzle.weapons, game.puzzle.weapons);
    }
}
