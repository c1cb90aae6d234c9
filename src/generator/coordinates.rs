/*
coordinates.rs

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

//! Grid coordinates and the geometry helpers built on them.
//!
//! A [`Coordinate`] stores a `row` and a `col` index, but the naming does not follow the usual
//! matrix convention:
//!
//! * `row` is the horizontal position, in `0..columns`. Moving [`Direction::Right`] increases it.
//! * `col` is the vertical position, in `0..rows`. Moving [`Direction::Down`] increases it.
//!
//! The perimeter walk, the jump directions, and the edge distances all rely on that convention.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::grid::Cell;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GeometryError {
    /// The two coordinates share neither the row nor the column.
    NotCollinear(Coordinate, Coordinate),

    /// The two coordinates are identical, so there is no jump between them.
    SamePosition(Coordinate),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeometryError::NotCollinear(a, b) => {
                write!(f, "coordinates {a} and {b} are not collinear")
            }
            GeometryError::SamePosition(a) => write!(f, "no jump from {a} to itself"),
        }
    }
}

impl Error for GeometryError {}

/// Position of a cell in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Horizontal index.
    pub row: usize,

    /// Vertical index.
    pub col: usize,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Number of cells on the border of a `rows` x `columns` grid.
pub fn perimeter_length(rows: usize, columns: usize) -> usize {
    let mut edges: usize = 2 * rows;
    if columns > 2 {
        edges += 2 * (columns - 2);
    }
    edges
}

/// Map a perimeter index to the coordinate of a border cell.
///
/// The walk starts in the top-left corner, runs along the first row from left to right, goes
/// down the last column, comes back along the last row from right to left, and finally climbs
/// the first column. Every border cell is visited exactly once for indexes in
/// `0..perimeter_length(rows, columns)`.
///
/// Return [`None`] if the index is past the end of the perimeter.
pub fn perimeter_to_coordinate(rows: usize, columns: usize, index: usize) -> Option<Coordinate> {
    if rows < 2 || columns < 2 || index >= perimeter_length(rows, columns) {
        return None;
    }

    // Top row, left to right
    if index < columns {
        return Some(Coordinate::new(index, 0));
    }
    // Right column, going down
    if index < columns + rows - 1 {
        return Some(Coordinate::new(columns - 1, index - columns + 1));
    }
    // Bottom row, right to left
    if index < 2 * columns + rows - 3 {
        return Some(Coordinate::new(2 * columns + rows - 3 - index, rows - 1));
    }
    // Left column, going up
    Some(Coordinate::new(0, 2 * columns + 2 * rows - 4 - index))
}

/// Whether the two coordinates share the row or the column.
pub fn cells_are_collinear(a: Coordinate, b: Coordinate) -> bool {
    a.row == b.row || a.col == b.col
}

/// Return the cell (direction and number of steps) that jumps from `start` to `dest`.
///
/// # Errors
///
/// The coordinates must be collinear and distinct.
pub fn cell_from_coordinate_pair(start: Coordinate, dest: Coordinate) -> Result<Cell, GeometryError> {
    if start == dest {
        return Err(GeometryError::SamePosition(start));
    }
    if start.row == dest.row {
        let direction: Direction = if dest.col > start.col {
            Direction::Down
        } else {
            Direction::Up
        };
        return Ok(Cell::new(direction, start.col.abs_diff(dest.col)));
    }
    if start.col == dest.col {
        let direction: Direction = if dest.row > start.row {
            Direction::Right
        } else {
            Direction::Left
        };
        return Ok(Cell::new(direction, start.row.abs_diff(dest.row)));
    }
    Err(GeometryError::NotCollinear(start, dest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn perimeter_5x3() {
        let expected = [
            c(0, 0),
            c(1, 0),
            c(2, 0),
            c(2, 1),
            c(2, 2),
            c(2, 3),
            c(2, 4),
            c(1, 4),
            c(0, 4),
            c(0, 3),
            c(0, 2),
            c(0, 1),
        ];
        assert_eq!(perimeter_length(5, 3), expected.len());
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(perimeter_to_coordinate(5, 3, i), Some(*e), "index {i}");
        }
        assert_eq!(perimeter_to_coordinate(5, 3, expected.len()), None);
    }

    #[test]
    fn perimeter_3x3() {
        let expected = [
            c(0, 0),
            c(1, 0),
            c(2, 0),
            c(2, 1),
            c(2, 2),
            c(1, 2),
            c(0, 2),
            c(0, 1),
        ];
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(perimeter_to_coordinate(3, 3, i), Some(*e), "index {i}");
        }
    }

    #[test]
    fn perimeter_visits_every_border_cell_once() {
        for (rows, columns) in [(5, 3), (4, 4), (3, 3), (3, 5), (7, 4), (10, 10)] {
            let len: usize = perimeter_length(rows, columns);
            assert_eq!(len, 2 * rows + 2 * columns - 4);

            let mut seen: HashSet<Coordinate> = HashSet::new();
            let mut previous: Option<Coordinate> = None;
            for i in 0..len {
                let p: Coordinate = perimeter_to_coordinate(rows, columns, i).unwrap();
                assert!(p.row < columns && p.col < rows, "{p} outside {rows}x{columns}");
                assert!(
                    p.row == 0 || p.col == 0 || p.row == columns - 1 || p.col == rows - 1,
                    "{p} is not on the border"
                );
                assert!(seen.insert(p), "{p} visited twice");
                // Consecutive indexes are neighbours on the border
                if let Some(q) = previous {
                    assert_eq!(p.row.abs_diff(q.row) + p.col.abs_diff(q.col), 1);
                }
                previous = Some(p);
            }

            // The successor of the last index wraps to the first one
            let last: Coordinate = perimeter_to_coordinate(rows, columns, len - 1).unwrap();
            let first: Coordinate = perimeter_to_coordinate(rows, columns, len % len).unwrap();
            assert_eq!(first, c(0, 0));
            assert_eq!(last.row.abs_diff(first.row) + last.col.abs_diff(first.col), 1);
        }
    }

    #[test]
    fn collinearity() {
        assert!(cells_are_collinear(c(1, 4), c(1, 0)));
        assert!(cells_are_collinear(c(3, 2), c(0, 2)));
        assert!(!cells_are_collinear(c(3, 2), c(2, 3)));
    }

    #[test]
    fn cell_from_same_row() {
        assert_eq!(
            cell_from_coordinate_pair(c(1, 0), c(1, 2)),
            Ok(Cell::new(Direction::Down, 2))
        );
        assert_eq!(
            cell_from_coordinate_pair(c(4, 5), c(4, 1)),
            Ok(Cell::new(Direction::Up, 4))
        );
    }

    #[test]
    fn cell_from_same_column() {
        assert_eq!(
            cell_from_coordinate_pair(c(9, 6), c(6, 6)),
            Ok(Cell::new(Direction::Left, 3))
        );
        assert_eq!(
            cell_from_coordinate_pair(c(0, 2), c(5, 2)),
            Ok(Cell::new(Direction::Right, 5))
        );
    }

    #[test]
    fn cell_from_pair_rejects_bad_input() {
        assert_eq!(
            cell_from_coordinate_pair(c(2, 3), c(1, 1)),
            Err(GeometryError::NotCollinear(c(2, 3), c(1, 1)))
        );
        assert_eq!(
            cell_from_coordinate_pair(c(2, 3), c(2, 3)),
            Err(GeometryError::SamePosition(c(2, 3)))
        );
    }
}
