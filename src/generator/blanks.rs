/*
blanks.rs

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

//! Fill the cells that the winning path did not use.
//!
//! Each blank cell gets a random direction. The number of steps makes the cell jump to another
//! blank cell ahead in that direction, or out of the grid when there is none. Because a cell
//! only ever jumps to a cell that is still blank, the filled cells form chains that end outside
//! the grid and never lead to the winning path or to the goal.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::coordinates::Coordinate;
use super::direction::Direction;
use super::grid::{Grid, GridError};
use super::path::Path;

/// Give a direction and a number of steps to every blank cell outside the winning path.
///
/// The cells are processed line by line. Return the number of filled cells.
///
/// # Errors
///
/// Returns a [`GridError`] if a cell selected for filling already has a direction, which would
/// be a bug.
pub fn fill_blanks<R: Rng + ?Sized>(
    grid: &mut Grid,
    winning_path: &Path,
    rng: &mut R,
) -> Result<usize, GridError> {
    let blanks: Vec<Coordinate> = grid
        .cells()
        .filter(|(coordinate, cell)| cell.is_blank() && !winning_path.contains(*coordinate))
        .map(|(coordinate, _)| coordinate)
        .collect();
    debug!("Filling {} blank cells", blanks.len());

    for coordinate in &blanks {
        let direction: Direction = Direction::random(rng);
        grid.set_direction(*coordinate, direction)?;

        // Only the cells ahead on the same line or column can be reached. Blank cells are
        // evaluated now, so the cells filled earlier in this pass are excluded.
        let distance: usize = grid.distance_to_edge(*coordinate, direction);
        let destinations: Vec<usize> = (1..=distance)
            .filter(|steps| {
                direction
                    .apply(*coordinate, *steps)
                    .is_some_and(|c| grid.get(c).is_blank() && !winning_path.contains(c))
            })
            .collect();

        let steps: usize = match destinations.choose(rng) {
            Some(s) => *s,
            // Nothing ahead: jump out of the grid
            None => distance + 1,
        };
        grid.set_number(*coordinate, steps);
    }
    Ok(blanks.len())
}
