/*
main.rs

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

mod application;
mod cli_options;
mod game;
mod generator;
mod highscores;
mod saver;

use std::process::ExitCode;

fn main() -> ExitCode {
    // In command-line mode, Hydraheads solves configurations and generates puzzles for
    // developers. Otherwise the interactive game starts.
    if let Some(ret) = cli_options::parse() {
        return ExitCode::from(ret);
    }

    ExitCode::from(application::run())
}
