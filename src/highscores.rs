/*
highscores.rs

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

//! Manage the high scores.
//!
//! The [`HighScores`] object maintains the list of the fastest hydra kills.
//! This object is saved when the player slays the hydra and makes it to the scoreboard, and
//! is restored when Hydraheads starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`]
//! object.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Number of entries in the scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represents a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Score {
    /// How long it took to slay the hydra.
    pub time: Duration,

    /// Number of hits beyond the optimal count.
    pub extra_hits: usize,

    /// Head count of the hydra at the start of the fight.
    pub start_heads: u64,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HighScores {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        time: Duration,
        extra_hits: usize,
        start_heads: u64,
    ) -> Option<usize> {
        let mut new_score_position: Option<usize> = None;
        let mut tmp_top: Vec<Score> = Vec::with_capacity(BOARD_SIZE);
        let mut i: usize = 0;

        for score in &self.top {
            // Insert the new score to the temporary board
            if time < score.time && new_score_position.is_none() {
                new_score_position = Some(i + 1);
                tmp_top.push(Score {
                    time,
                    extra_hits,
                    start_heads,
                    when: SystemTime::now(),
                });
                i += 1;
            }
            // Do not add more scores than the board size
            if i >= BOARD_SIZE {
                break;
            }
            tmp_top.push(*score);
            i += 1;
        }
        // If the board is not full and the new score has not been added yet, then add the new
        // score at the end of the board
        if i < BOARD_SIZE && new_score_position.is_none() {
            new_score_position = Some(i + 1);
            tmp_top.push(Score {
                time,
                extra_hits,
                start_heads,
                when: SystemTime::now(),
            });
        }
        self.top = tmp_top;
        new_score_position
    }

    /// Return the sorted list of [`Score`] objects.
    pub fn get_scores(&self) -> &[Score] {
        &self.top
    }

    /// Return whether the scoreboard is empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_score_takes_the_top_spot() {
        let mut scores: HighScores = HighScores::new();
        assert!(scores.is_empty());
        assert_eq!(scores.add_score(Duration::from_secs(90), 2, 42), Some(1));
        assert_eq!(scores.get_scores().len(), 1);
    }

    #[test]
    fn faster_kills_rank_higher() {
        let mut scores: HighScores = HighScores::new();
        scores.add_score(Duration::from_secs(120), 0, 30);
        scores.add_score(Duration::from_secs(60), 3, 50);
        assert_eq!(scores.add_score(Duration::from_secs(90), 1, 40), Some(2));

        let times: Vec<u64> = scores
            .get_scores()
            .iter()
            .map(|s| s.time.as_secs())
            .collect();
        assert_eq!(times, [60, 90, 120]);
    }

    #[test]
    fn board_is_capped() {
        let mut scores: HighScores = HighScores::new();
        for i in 0..BOARD_SIZE {
            assert!(
                scores
                    .add_score(Duration::from_secs(10 + i as u64), 0, 20)
                    .is_some()
            );
        }
        // Slower than every entry of the full board: rejected.
        assert_eq!(scores.add_score(Duration::from_secs(600), 0, 20), None);
        assert_eq!(scores.get_scores().len(), BOARD_SIZE);

        // Fast enough: inserted, and the board keeps its size.
        assert_eq!(scores.add_score(Duration::from_secs(5), 0, 20), Some(1));
        assert_eq!(scores.get_scores().len(), BOARD_SIZE);
    }
}
