/*
direction.rs

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

//! Jump directions.
//!
//! Directions follow the grid convention described in [`super::coordinates`]:
//! [`Direction::Up`] and [`Direction::Down`] move along the `col` index, and
//! [`Direction::Left`] and [`Direction::Right`] move along the `row` index.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::coordinates::Coordinate;

/// Direction stored in a grid cell.
///
/// The first four variants are the moving directions. [`Direction::None`] is used by the
/// blank cells and by the goal cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, FromRepr)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::None => write!(f, "none"),
        }
    }
}

impl Direction {
    /// The four directions a cell can point to.
    pub const MOVES: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Draw a moving direction uniformly. Never returns [`Direction::None`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_repr(rng.random_range(0..Self::MOVES.len() as u8)).unwrap_or(Direction::Right)
    }

    /// Decode the one-letter form used by hand-written grids (`u`, `d`, `l`, `r`, and `n`).
    pub fn from_short(short: char) -> Option<Self> {
        match short.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            'n' => Some(Direction::None),
            _ => None,
        }
    }

    /// Whether the direction moves at all.
    pub fn is_move(self) -> bool {
        self != Direction::None
    }

    /// Apply `steps` jumps in this direction from `from`.
    ///
    /// Return [`None`] when the jump would go below zero on either axis. Jumps past the far
    /// edges are not detected here, see [`super::grid::Grid::contains`].
    pub fn apply(self, from: Coordinate, steps: usize) -> Option<Coordinate> {
        match self {
            Direction::Up => from.col.checked_sub(steps).map(|col| Coordinate::new(from.row, col)),
            Direction::Down => Some(Coordinate::new(from.row, from.col + steps)),
            Direction::Left => from.row.checked_sub(steps).map(|row| Coordinate::new(row, from.col)),
            Direction::Right => Some(Coordinate::new(from.row + steps, from.col)),
            Direction::None => Some(from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_never_returns_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let d = Direction::random(&mut rng);
            assert!(d.is_move());
            seen[d as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "all four directions should be drawn");
    }

    #[test]
    fn short_codes() {
        assert_eq!(Direction::from_short('u'), Some(Direction::Up));
        assert_eq!(Direction::from_short('D'), Some(Direction::Down));
        assert_eq!(Direction::from_short('l'), Some(Direction::Left));
        assert_eq!(Direction::from_short('r'), Some(Direction::Right));
        assert_eq!(Direction::from_short('n'), Some(Direction::None));
        assert_eq!(Direction::from_short('x'), None);
    }

    #[test]
    fn apply_follows_axis_convention() {
        let c = Coordinate::new(2, 3);
        assert_eq!(Direction::Down.apply(c, 2), Some(Coordinate::new(2, 5)));
        assert_eq!(Direction::Up.apply(c, 3), Some(Coordinate::new(2, 0)));
        assert_eq!(Direction::Up.apply(c, 4), None);
        assert_eq!(Direction::Right.apply(c, 1), Some(Coordinate::new(3, 3)));
        assert_eq!(Direction::Left.apply(c, 3), None);
        assert_eq!(Direction::None.apply(c, 9), Some(c));
    }

    #[test]
    fn serialized_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "\"left\"");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
