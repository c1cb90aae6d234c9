/*
generator.rs

Copyright 2025 Hervé Quatremain

This file is part of Jumpgrid.

Jumpgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Jumpgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Jumpgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate number maze puzzles.
//!
//! A puzzle is a rectangular [`grid::Grid`] where each cell holds a [`direction::Direction`] and
//! a number of steps. Solving the puzzle means finding the border cell from which following the
//! jumps, cell after cell, lands exactly on the goal.
//!
//! To generate a puzzle, create a [`puzzle::Generator`] object and use its
//! [`puzzle::Generator::generate`] method. It returns a [`puzzle::Puzzle`] object, which holds
//! the complete grid and its solution.
//!
//! The generation is done in two passes over the grid:
//!
//! * A winning path is carved from a border cell to the goal. The path is represented by a
//!   [`path::Path`] object and is produced by a [`random_path::RandomPath`] object.
//!   If the random walk gets stuck, the generator starts again from a fresh grid.
//!   The geometry helpers in [`coordinates`] convert each jump of the path into a cell.
//!
//! * All the other cells are filled by [`blanks::fill_blanks`]. They jump from blank cell to
//!   blank cell, and finally out of the grid.
//!
//! The random number generator is always provided by the caller, so that a seeded generator
//! produces the same puzzles again.

pub mod blanks;
pub mod coordinates;
pub mod direction;
pub mod grid;
pub mod path;
pub mod puzzle;
pub mod random_path;
