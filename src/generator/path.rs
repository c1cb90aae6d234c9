/*
path.rs

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

//! Winning path through the grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::coordinates::{Coordinate, cells_are_collinear};

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Path {
    /// Path as an ordered list of coordinates, in visiting order.
    path: Vec<Coordinate>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the coordinate in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Coordinate>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(path: Vec<Coordinate>) -> Self {
        let visited: HashSet<Coordinate> = path.iter().copied().collect();
        Self { path, visited }
    }
}

impl From<Path> for Vec<Coordinate> {
    fn from(path: Path) -> Self {
        path.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, coordinate: Coordinate) {
        self.path.push(coordinate);
        self.visited.insert(coordinate);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) -> Option<Coordinate> {
        let last: Option<Coordinate> = self.path.pop();
        if let Some(c) = last {
            self.visited.remove(&c);
        }
        last
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.visited.contains(&coordinate)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Coordinate> {
        &self.path
    }

    /// Return the position of the given cell in the path.
    pub fn position(&self, coordinate: Coordinate) -> Option<usize> {
        self.path.iter().position(|c| *c == coordinate)
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<Coordinate> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Coordinate> {
        self.path.last().copied()
    }

    /// Iterate over the jumps of the path, as `(from, to)` pairs.
    pub fn hops(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether every jump stays on a line or a column and no cell is visited twice.
    pub fn is_consistent(&self) -> bool {
        self.visited.len() == self.path.len() && self.hops().all(|(a, b)| cells_are_collinear(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn push_pop_contains() {
        let mut path: Path = Path::new(4);
        assert!(path.is_empty());
        path.push(c(0, 1));
        path.push(c(2, 1));
        path.push(c(2, 2));
        assert_eq!(path.len(), 3);
        assert!(path.contains(c(2, 1)));
        assert_eq!(path.position(c(2, 2)), Some(2));
        assert_eq!(path.get_first(), Some(c(0, 1)));
        assert_eq!(path.pop(), Some(c(2, 2)));
        assert!(!path.contains(c(2, 2)));
        assert_eq!(path.get_last(), Some(c(2, 1)));

        path.clear();
        assert_eq!(path.pop(), None);
        assert_eq!(path.get_last(), None);
    }

    #[test]
    fn consistency() {
        let good: Path = Path::from(vec![c(0, 1), c(2, 1), c(2, 3), c(1, 3)]);
        assert!(good.is_consistent());
        assert_eq!(good.hops().count(), 3);

        let diagonal: Path = Path::from(vec![c(0, 1), c(2, 2)]);
        assert!(!diagonal.is_consistent());

        let twice: Path = Path::from(vec![c(1, 1), c(1, 2), c(1, 1)]);
        assert!(!twice.is_consistent());
    }

    #[test]
    fn serialized_as_list() {
        let path: Path = Path::from(vec![c(0, 1), c(2, 1)]);
        let json: String = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"row":0,"col":1},{"row":2,"col":1}]"#);

        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert!(back.contains(c(2, 1)));
    }
}
