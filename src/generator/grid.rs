/*
grid.rs

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

//! Puzzle grid.
//!
//! The [`Grid`] object owns all the [`Cell`] objects of the puzzle. Each cell stores a
//! [`Direction`] and a number of steps. Two cell states are special:
//!
//! * A blank cell has no direction and a number of 1. All the cells start blank.
//! * The goal cell has no direction and a number of 0. There is only one goal per puzzle.
//!
//! The direction of a cell can only be set once. Setting it again is a bug in the generator,
//! and [`Grid::set_direction`] returns an error in that case.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::coordinates::Coordinate;
use super::direction::Direction;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The cell already has a direction.
    DirectionAlreadySet {
        coordinate: Coordinate,
        direction: Direction,
        number: usize,
    },

    /// The number of cells does not match the grid dimensions.
    InvalidLayout { expected: usize, found: usize },

    /// The number of cells does not fit in memory addresses.
    TooLarge { rows: usize, columns: usize },

    /// Unknown direction letter in a hand-written grid.
    UnknownDirection(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::DirectionAlreadySet {
                coordinate,
                direction,
                number,
            } => write!(
                f,
                "overwriting existing direction ({coordinate}: {number} {direction})"
            ),
            GridError::InvalidLayout { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            GridError::TooLarge { rows, columns } => {
                write!(f, "grid {rows}x{columns} has too many cells")
            }
            GridError::UnknownDirection(c) => write!(f, "unknown direction code '{c}'"),
        }
    }
}

impl Error for GridError {}

/// Content of a grid position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Direction of the jump.
    pub direction: Direction,

    /// Number of steps of the jump.
    pub number: usize,

    /// Free-form markers. The generator marks the winning start cell with `s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorators: Option<String>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(direction: Direction, number: usize) -> Self {
        Self {
            direction,
            number,
            decorators: None,
        }
    }

    /// Cell not yet assigned.
    pub fn blank() -> Self {
        Self::new(Direction::None, 1)
    }

    /// Goal cell.
    pub fn goal() -> Self {
        Self::new(Direction::None, 0)
    }

    /// Whether the cell is still waiting for a direction (and is not the goal).
    pub fn is_blank(&self) -> bool {
        self.direction == Direction::None && self.number != 0
    }

    /// Whether the cell is the goal.
    pub fn is_goal(&self) -> bool {
        self.direction == Direction::None && self.number == 0
    }

    /// Whether the cell carries the given decorator.
    pub fn has_decorator(&self, decorator: &str) -> bool {
        self.decorators
            .as_deref()
            .is_some_and(|d| d.contains(decorator))
    }
}

/// Rectangular puzzle grid.
///
/// The grid has `rows` lines of `columns` cells. See [`super::coordinates`] for the way
/// [`Coordinate`] objects address the cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of lines (vertical extent, bounds [`Coordinate::col`]).
    pub rows: usize,

    /// Number of cells per line (horizontal extent, bounds [`Coordinate::row`]).
    pub columns: usize,

    /// Cells, line by line.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a [`Grid`] object with all the cells blank.
    ///
    /// The dimensions are trusted. [`super::puzzle::Generator::new`] bounds them, and grids read
    /// from a file go through [`Grid::validate`].
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::blank(); rows * columns],
        }
    }

    /// Build a grid from a list of numbers and a string of direction letters.
    ///
    /// Both are given line by line. Whitespace in `directions` is ignored so that the letters
    /// can be laid out like the grid.
    ///
    /// ```
    /// use jumpgrid::generator::grid::Grid;
    ///
    /// let grid = Grid::from_raw(&[1, 2, 1, 3, 2, 3, 2, 3, 1], "rrl rrd rrd", 3, 3).unwrap();
    /// assert_eq!(grid.num_blanks(), 0);
    /// ```
    pub fn from_raw(
        numbers: &[usize],
        directions: &str,
        rows: usize,
        columns: usize,
    ) -> Result<Self, GridError> {
        let letters: Vec<char> = directions.chars().filter(|c| !c.is_whitespace()).collect();
        let expected: usize = cell_count(rows, columns)?;
        if numbers.len() != expected {
            return Err(GridError::InvalidLayout {
                expected,
                found: numbers.len(),
            });
        }
        if letters.len() != expected {
            return Err(GridError::InvalidLayout {
                expected,
                found: letters.len(),
            });
        }

        let mut cells: Vec<Cell> = Vec::with_capacity(expected);
        for (number, letter) in numbers.iter().zip(letters) {
            let direction: Direction =
                Direction::from_short(letter).ok_or(GridError::UnknownDirection(letter))?;
            cells.push(Cell::new(direction, *number));
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Verify that the number of cells matches the dimensions. Grids read from a file may not.
    pub fn validate(&self) -> Result<(), GridError> {
        let expected: usize = cell_count(self.rows, self.columns)?;
        if self.cells.len() != expected {
            return Err(GridError::InvalidLayout {
                expected,
                found: self.cells.len(),
            });
        }
        Ok(())
    }

    /// Whether the coordinate is inside the grid.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.columns && coordinate.col < self.rows
    }

    /// Whether the coordinate is on the border of the grid.
    pub fn is_on_edge(&self, coordinate: Coordinate) -> bool {
        coordinate.row == 0
            || coordinate.col == 0
            || coordinate.row + 1 >= self.columns
            || coordinate.col + 1 >= self.rows
    }

    fn index(&self, coordinate: Coordinate) -> usize {
        assert!(
            self.contains(coordinate),
            "coordinate {coordinate} outside the {}x{} grid",
            self.rows,
            self.columns
        );
        coordinate.col * self.columns + coordinate.row
    }

    /// Return the cell at the given coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, coordinate: Coordinate) -> &Cell {
        &self.cells[self.index(coordinate)]
    }

    /// Replace the cell at the given coordinate. No check is done on the previous content.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn set(&mut self, coordinate: Coordinate, cell: Cell) {
        let i: usize = self.index(coordinate);
        self.cells[i] = cell;
    }

    /// Set the direction of a cell that does not have one yet.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DirectionAlreadySet`] if the cell already has a direction.
    pub fn set_direction(
        &mut self,
        coordinate: Coordinate,
        direction: Direction,
    ) -> Result<(), GridError> {
        let i: usize = self.index(coordinate);
        let cell: &mut Cell = &mut self.cells[i];
        if cell.direction != Direction::None {
            return Err(GridError::DirectionAlreadySet {
                coordinate,
                direction: cell.direction,
                number: cell.number,
            });
        }
        cell.direction = direction;
        Ok(())
    }

    /// Set the number of steps of a cell.
    pub fn set_number(&mut self, coordinate: Coordinate, number: usize) {
        let i: usize = self.index(coordinate);
        self.cells[i].number = number;
    }

    /// Append a decorator to the cell.
    pub fn add_decorator(&mut self, coordinate: Coordinate, decorator: &str) {
        let i: usize = self.index(coordinate);
        self.cells[i]
            .decorators
            .get_or_insert_with(String::new)
            .push_str(decorator);
    }

    /// Number of cells between the coordinate and the border of the grid in the given
    /// direction. The distance is 0 if the cell is already on that border.
    pub fn distance_to_edge(&self, coordinate: Coordinate, direction: Direction) -> usize {
        match direction {
            Direction::Up => coordinate.col,
            Direction::Down => self.rows.saturating_sub(coordinate.col + 1),
            Direction::Left => coordinate.row,
            Direction::Right => self.columns.saturating_sub(coordinate.row + 1),
            Direction::None => 0,
        }
    }

    /// Iterate over all the coordinates of the grid, line by line.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let columns: usize = self.columns;
        (0..self.rows).flat_map(move |col| (0..columns).map(move |row| Coordinate::new(row, col)))
    }

    /// Iterate over all the cells, each with its coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &Cell)> {
        self.coordinates().zip(self.cells.iter())
    }

    /// Return the coordinate of the goal cell, if any.
    pub fn goal(&self) -> Option<Coordinate> {
        self.cells()
            .find(|(_, cell)| cell.is_goal())
            .map(|(coordinate, _)| coordinate)
    }

    /// Number of cells still blank.
    pub fn num_blanks(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blank()).count()
    }

    /// Print the grid in the debug log.
    pub fn debug(&self) {
        for line in self.to_string().lines() {
            debug!("{line}");
        }
    }
}

/// Number of cells in a `rows` x `columns` grid.
fn cell_count(rows: usize, columns: usize) -> Result<usize, GridError> {
    rows.checked_mul(columns).ok_or(GridError::TooLarge { rows, columns })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells.chunks(self.columns.max(1)) {
            for cell in line {
                write!(f, "{} {}, ", cell.number, cell.direction)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
