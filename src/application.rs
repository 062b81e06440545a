/*
application.rs

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

//! Interactive terminal game.
//!
//! The application owns the [`Game`] value and drives it from standard input commands.
//! When Hydraheads starts, a saved fight is restored if one exists, otherwise a new puzzle is
//! generated.
//! When the player quits with a fight in progress, the fight is saved so that it can be
//! finished later.
//! Victories are recorded in the high-score board.

use chrono::{DateTime, Local};
use log::debug;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::game::{Game, Outcome};
use crate::generator::puzzle::{Generator, PuzzleError};
use crate::generator::solver::SolverError;
use crate::highscores::HighScores;
use crate::saver::game::SaverGame;
use crate::saver::highscores::SaverHighScores;

/// Player command read from standard input.
enum Command {
    /// Use the weapon with the given index (0 to 2).
    Weapon(usize),

    /// Give up on the current hydra and fight a new one.
    NewGame,

    /// Show the optimal continuation.
    Hint,

    /// Pause or resume the fight.
    Pause,

    /// Show the high scores.
    Scores,

    /// Show the command list.
    Help,

    /// Quit, saving the fight in progress.
    Quit,
}

/// Run the interactive game and return the process exit code.
pub fn run() -> u8 {
    let data_dir: PathBuf = match data_dir() {
        Ok(d) => d,
        Err(error) => {
            eprintln!("Cannot create the data directory: {error}");
            return 1;
        }
    };
    let saver_game: SaverGame = SaverGame::new(data_dir.clone());
    let saver_scores: SaverHighScores = SaverHighScores::new(data_dir);

    let mut highscores: HighScores = match saver_scores.get_highscores() {
        Ok(Some(h)) => h,
        Ok(None) => HighScores::new(),
        Err(error) => {
            debug!("Error getting the high scores: {error}");
            // Delete the file in error for trying to resolve the issue for the next start
            saver_scores.delete_save();
            HighScores::new()
        }
    };

    let mut generator: Generator = Generator::new();

    debug!("Getting the saved game");
    let mut game: Game = match saver_game.get_game() {
        Ok(Some(g)) => {
            println!("Resuming the saved fight.");
            g
        }
        Ok(None) => match new_game(&mut generator) {
            Some(g) => g,
            None => return 1,
        },
        Err(error) => {
            debug!("Error getting the saved game: {error}");
            // Delete the file in error for trying to resolve the issue for the next start
            saver_game.delete_save();
            match new_game(&mut generator) {
                Some(g) => g,
                None => return 1,
            }
        }
    };

    print_help();

    loop {
        print_status(&game);

        if game.outcome() != Outcome::Playing {
            saver_game.delete_save();
            finish(&game, &mut highscores, &saver_scores);
            loop {
                println!("Type n to fight a new hydra, or q to quit.");
                match read_command() {
                    Command::NewGame => break,
                    Command::Quit => return 0,
                    Command::Scores => print_scores(&highscores),
                    _ => {}
                }
            }
            game = match new_game(&mut generator) {
                Some(g) => g,
                None => return 1,
            };
            continue;
        }

        match read_command() {
            Command::Weapon(index) => {
                if !game.apply_weapon(index) {
                    println!("You cannot use that weapon now.");
                }
            }
            Command::Hint => print_hint(&game),
            Command::Pause => {
                if game.paused {
                    game.resume();
                    println!("The fight resumes.");
                } else {
                    game.pause();
                    println!("The fight is paused. Type p to resume.");
                }
            }
            Command::NewGame => {
                saver_game.delete_save();
                game = match new_game(&mut generator) {
                    Some(g) => g,
                    None => return 1,
                };
            }
            Command::Scores => print_scores(&highscores),
            Command::Help => print_help(),
            Command::Quit => {
                if let Err(error) = saver_game.save_game(&game) {
                    eprintln!("Cannot save the fight: {error}");
                    return 1;
                }
                println!("Fight saved. See you soon.");
                return 0;
            }
        }
    }
}

/// Return the directory where the saved game and the high scores are stored, creating it if
/// need be.
fn data_dir() -> Result<PathBuf, Box<dyn Error>> {
    let base: PathBuf = match env::var_os("XDG_DATA_HOME") {
        Some(d) if !d.is_empty() => PathBuf::from(d),
        _ => {
            let home = env::var_os("HOME").ok_or("HOME is not set")?;
            PathBuf::from(home).join(".local").join("share")
        }
    };
    let dir: PathBuf = base.join("hydraheads");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Generate a new puzzle and announce the hydra.
fn new_game(generator: &mut Generator) -> Option<Game> {
    match generator.generate() {
        Ok(puzzle) => {
            println!();
            println!(
                "A {} hydra with {} heads appears!",
                puzzle.color, puzzle.start_heads
            );
            Some(Game::new(puzzle))
        }
        Err(PuzzleError::NoSolvablePuzzle) => {
            eprintln!("Cannot generate a solvable hydra");
            None
        }
    }
}

/// Print the head count, the hit points, and the weapon list.
fn print_status(game: &Game) {
    if game.paused {
        return;
    }
    println!();
    println!("Heads: {}    Your HP: {}", game.heads, game.hp);
    for (i, weapon) in game.weapons().iter().enumerate() {
        println!(
            "  [{}] {}{}",
            i + 1,
            weapon.label(),
            if weapon.can_use(game.heads) {
                ""
            } else {
                "  (not usable)"
            }
        );
    }
}

/// Print the end-of-fight message and record a victory in the high scores.
fn finish(game: &Game, highscores: &mut HighScores, saver: &SaverHighScores) {
    let outcome: Outcome = game.outcome();
    match outcome {
        Outcome::FlawlessVictory => println!(
            "You are a hydra-slaying expert! You killed the hydra with the fewest hits \
             possible!"
        ),
        Outcome::NarrowVictory => println!("You killed the hydra just in time!"),
        Outcome::Victory => println!("Congratulations, you killed the hydra!"),
        Outcome::Overrun => println!("Aaa! The hydra is out of control!"),
        Outcome::Defeat => println!("Oh dear, the hydra killed you."),
        Outcome::Playing => return,
    }

    if matches!(
        outcome,
        Outcome::FlawlessVictory | Outcome::NarrowVictory | Outcome::Victory
    ) {
        let (h, m, s) = game.get_duration_hms();
        println!("Time: {h:02}:{m:02}:{s:02}");
        if let Some(position) = highscores.add_score(
            game.get_duration(),
            game.extra_hits(),
            game.puzzle.start_heads,
        ) {
            println!("You made it to the scoreboard at position {position}!");
            if let Err(error) = saver.save_highscores(highscores) {
                debug!("Cannot save the high scores: {error}");
            }
        }
    }
}

/// Print the optimal continuation as a move count and weapon initials.
fn print_hint(game: &Game) {
    match game.hint() {
        Ok(sequence) => {
            let initials: Vec<String> = sequence
                .iter()
                .map(|w| w.name.chars().take(1).collect())
                .collect();
            println!("{} - {}", sequence.len(), initials.join(","));
        }
        Err(SolverError::NoSolution) => println!("No way to reach zero heads from here."),
        Err(SolverError::BudgetExceeded) => println!("The solver gave up searching from here."),
    }
}

/// Print the high-score board.
fn print_scores(highscores: &HighScores) {
    if highscores.is_empty() {
        println!("No hydra slain yet.");
        return;
    }
    for (i, score) in highscores.get_scores().iter().enumerate() {
        let secs: u64 = score.time.as_secs();
        let when: DateTime<Local> = score.when.into();
        println!(
            "{:2}. {:02}:{:02}:{:02}  {:3} starting heads  {:2} extra hits  {}",
            i + 1,
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60,
            score.start_heads,
            score.extra_hits,
            when.format("%Y-%m-%d %H:%M")
        );
    }
}

/// Print the command list.
fn print_help() {
    println!(
        "
Commands:
  1, 2, 3  use a weapon
  h        show the optimal continuation
  p        pause or resume the fight
  s        show the high scores
  n        fight a new hydra
  q        quit (the fight is saved)"
    );
}

/// Read and parse the next player command from standard input.
fn read_command() -> Command {
    print!("> ");
    let _ = io::stdout().flush();

    let mut line: String = String::new();
    match io::stdin().lock().read_line(&mut line) {
        // End of input: quit without prompting again.
        Ok(0) | Err(_) => Command::Quit,
        Ok(_) => match line.trim() {
            "1" => Command::Weapon(0),
            "2" => Command::Weapon(1),
            "3" => Command::Weapon(2),
            "n" => Command::NewGame,
            "h" => Command::Hint,
            "p" => Command::Pause,
            "s" => Command::Scores,
            "q" => Command::Quit,
            _ => Command::Help,
        },
    }
}
