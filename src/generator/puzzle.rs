/*
puzzle.rs

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

//! Generate complete puzzles.
//!
//! A [`Generator`] object builds a [`Puzzle`] in three steps:
//!
//! 1. A goal cell is selected away from the border, and a start cell on the border.
//! 2. A winning path is carved from the start cell to the goal by using
//!    [`random_path::RandomPath`], and the jumps are written into the grid.
//! 3. The remaining blank cells are filled by [`blanks::fill_blanks`].
//!
//! If the walk gets stuck in step 2, the generator starts again on a fresh grid. After
//! [`GenerationConfig::max_attempts`] failures, generation is abandoned.

use log::{Level, debug, log_enabled};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use super::blanks;
use super::coordinates::{self, Coordinate, GeometryError};
use super::grid::{Cell, Grid, GridError};
use super::path::Path;
use super::random_path::{RandomPath, RandomPathError};
use crate::config::GenerationConfig;

/// Smallest grid dimension. A 3x3 grid is the smallest grid with a cell away from the border.
pub const MIN_GRID_SIZE: usize = 3;

/// Decorator for the start cell of the winning path.
pub const START_DECORATOR: &str = "s";

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerationError {
    /// The grid has no room for a goal away from the border.
    GridTooSmall { rows: usize, columns: usize },

    /// The grid exceeds the configured maximum size.
    GridTooLarge {
        rows: usize,
        columns: usize,
        max: usize,
    },

    /// No winning path was found.
    NoPath { attempts: usize },

    /// The walk exceeded its iteration ceiling. Walks never revisit a cell, so this is a bug.
    IterationsExceeded(usize),

    /// A grid invariant was broken. This is a bug.
    Grid(GridError),

    /// Two consecutive path cells are not collinear. This is a bug.
    Geometry(GeometryError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerationError::GridTooSmall { rows, columns } => write!(
                f,
                "grid {rows}x{columns} is too small (minimum is {MIN_GRID_SIZE}x{MIN_GRID_SIZE})"
            ),
            GenerationError::GridTooLarge { rows, columns, max } => {
                write!(f, "grid {rows}x{columns} is too large (maximum is {max}x{max})")
            }
            GenerationError::NoPath { attempts } => {
                write!(f, "no winning path found after {attempts} attempts")
            }
            GenerationError::IterationsExceeded(limit) => {
                write!(f, "bug: random walk abandoned after {limit} iterations")
            }
            GenerationError::Grid(e) => write!(f, "bug: {e}"),
            GenerationError::Geometry(e) => write!(f, "bug: {e}"),
        }
    }
}

impl Error for GenerationError {}

impl From<GridError> for GenerationError {
    fn from(e: GridError) -> Self {
        GenerationError::Grid(e)
    }
}

impl From<GeometryError> for GenerationError {
    fn from(e: GeometryError) -> Self {
        GenerationError::Geometry(e)
    }
}

/// How a walk through the grid ends.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Trace {
    /// The walk landed on the goal.
    Goal,

    /// The walk jumped out of the grid.
    Exit,

    /// The walk came back to a cell already visited.
    Loop,

    /// The walk landed on a cell without a direction.
    Stuck,
}

/// Finished puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    /// Complete grid.
    pub grid: Grid,

    /// Start cell of the winning path (on the border).
    pub start: Coordinate,

    /// Position of the start cell along the border. See [`coordinates::perimeter_to_coordinate`].
    pub start_index: usize,

    /// Goal cell.
    pub goal: Coordinate,

    /// Winning path, from [`Puzzle::start`] to [`Puzzle::goal`].
    pub winning_path: Path,

    /// Number of carving attempts it took to get the winning path.
    pub attempts: usize,
}

impl Puzzle {
    /// Follow the jumps from the given cell.
    ///
    /// Return how the walk ends and the list of the cells visited, including the first one.
    pub fn trace(&self, from: Coordinate) -> (Trace, Vec<Coordinate>) {
        trace(&self.grid, from)
    }

    /// Whether following the jumps from the start cell leads to the goal along the winning path.
    pub fn is_solvable(&self) -> bool {
        let (end, visited) = self.trace(self.start);
        end == Trace::Goal && visited == *self.winning_path.get()
    }
}

/// Follow the jumps in the grid from the given cell.
pub fn trace(grid: &Grid, from: Coordinate) -> (Trace, Vec<Coordinate>) {
    let mut visited: Vec<Coordinate> = Vec::new();
    let mut seen: HashSet<Coordinate> = HashSet::new();
    let mut current: Coordinate = from;

    loop {
        if !seen.insert(current) {
            return (Trace::Loop, visited);
        }
        visited.push(current);

        let cell: &Cell = grid.get(current);
        if cell.is_goal() {
            return (Trace::Goal, visited);
        }
        if !cell.direction.is_move() {
            return (Trace::Stuck, visited);
        }
        match cell.direction.apply(current, cell.number) {
            Some(next) if grid.contains(next) => current = next,
            _ => return (Trace::Exit, visited),
        }
    }
}

/// [`Generator`] object.
pub struct Generator {
    /// Number of lines in the grid.
    pub rows: usize,

    /// Number of cells per line.
    pub columns: usize,

    /// Soft number of jumps in the winning path.
    pub path_length: usize,

    /// Number of carving attempts before giving up.
    pub max_attempts: usize,

    /// Total number of walk iterations for the last puzzle, over all the attempts.
    pub iteration: usize,

    /// Duration in seconds it took to carve the winning path of the last puzzle.
    pub duration: f32,
}

impl Generator {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// The grid must be at least 3x3, and no side can exceed
    /// [`GenerationConfig::max_grid_size`].
    pub fn new(
        rows: usize,
        columns: usize,
        config: &GenerationConfig,
    ) -> Result<Self, GenerationError> {
        if rows < MIN_GRID_SIZE || columns < MIN_GRID_SIZE {
            return Err(GenerationError::GridTooSmall { rows, columns });
        }
        if rows > config.max_grid_size || columns > config.max_grid_size {
            return Err(GenerationError::GridTooLarge {
                rows,
                columns,
                max: config.max_grid_size,
            });
        }
        Ok(Self {
            rows,
            columns,
            path_length: config.path_length,
            max_attempts: config.max_attempts.max(1),
            iteration: 0,
            duration: 0.0,
        })
    }

    /// Generate and return a complete puzzle.
    ///
    /// # Errors
    ///
    /// The method returns [`GenerationError::NoPath`] if no winning path could be carved after
    /// [`Generator::max_attempts`] attempts. Other errors are bugs.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Puzzle, GenerationError> {
        self.iteration = 0;
        self.duration = 0.0;
        debug!("Grid size {}x{}", self.rows, self.columns);

        for attempt in 1..=self.max_attempts {
            let mut grid: Grid = Grid::new(self.rows, self.columns);

            // Pick a goal away from the border
            let goal: Coordinate = Coordinate::new(
                rng.random_range(1..self.columns - 1),
                rng.random_range(1..self.rows - 1),
            );
            grid.set(goal, Cell::goal());

            // Pick a start cell on the border
            let start_index: usize =
                rng.random_range(0..coordinates::perimeter_length(self.rows, self.columns));
            let start: Coordinate =
                match coordinates::perimeter_to_coordinate(self.rows, self.columns, start_index) {
                    Some(c) => c,
                    None => continue,
                };

            debug!("Attempt {attempt}: goal = {goal}  start = {start} (index {start_index})");

            let mut random_path: RandomPath =
                RandomPath::new(&grid, start, goal, self.path_length);
            let res: Result<Path, RandomPathError> = random_path.generate(&grid, rng);
            self.iteration += random_path.iteration;
            self.duration += random_path.duration;

            let winning_path: Path = match res {
                Ok(p) => p,
                Err(RandomPathError::DeadEnd(partial)) => {
                    debug!("    Dead end after {} cells, retrying", partial.len());
                    continue;
                }
                Err(RandomPathError::IterationsExceeded(limit)) => {
                    return Err(GenerationError::IterationsExceeded(limit));
                }
            };

            grid.add_decorator(start, START_DECORATOR);
            Self::carve(&mut grid, &winning_path)?;
            if log_enabled!(Level::Debug) {
                debug!("Winning path written:");
                grid.debug();
            }

            blanks::fill_blanks(&mut grid, &winning_path, rng)?;
            if log_enabled!(Level::Debug) {
                debug!("Complete grid:");
                grid.debug();
            }

            return Ok(Puzzle {
                grid,
                start,
                start_index,
                goal,
                winning_path,
                attempts: attempt,
            });
        }
        Err(GenerationError::NoPath {
            attempts: self.max_attempts,
        })
    }

    /// Write the jumps of the path into the grid. The last cell (the goal) is left untouched.
    pub fn carve(grid: &mut Grid, path: &Path) -> Result<(), GenerationError> {
        for (from, to) in path.hops() {
            let cell: Cell = coordinates::cell_from_coordinate_pair(from, to)?;
            grid.set_direction(from, cell.direction)?;
            grid.set_number(from, cell.number);
        }
        Ok(())
    }
}
