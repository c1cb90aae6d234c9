/*
random_path.rs

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

//! Carve a random winning path from a border cell to the goal.
//!
//! The walk jumps from cell to cell along lines and columns. The intermediate cells are never
//! on the border of the grid, and a cell is never visited twice. When the walk has used its
//! step budget, it jumps straight to the goal as soon as the goal is on the same line or column.
//!
//! The walk does not try alternate branches. When it gets stuck, it drops its last cell and
//! returns a [`RandomPathError::DeadEnd`] error with the partial path. The caller can then try
//! again with other start and goal cells.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::coordinates::{Coordinate, cells_are_collinear};
use super::grid::Grid;
use super::path::Path;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// The walk got stuck before reaching the goal. The partial path is returned.
    DeadEnd(Path),

    /// The walk made more jumps than [`RandomPath::max_iterations`].
    IterationsExceeded(usize),
}

impl fmt::Display for RandomPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomPathError::DeadEnd(path) => {
                write!(f, "dead end after {} cells", path.len())
            }
            RandomPathError::IterationsExceeded(limit) => {
                write!(f, "walk abandoned after {limit} iterations")
            }
        }
    }
}

impl Error for RandomPathError {}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Border cell where the path starts.
    pub start: Coordinate,

    /// Goal cell where the path ends.
    pub goal: Coordinate,

    /// Soft number of jumps before heading for the goal.
    pub target_steps: usize,

    /// Number of iterations it took to generate the last random path.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,

    /// Number of jumps after which the walk is abandoned with
    /// [`RandomPathError::IterationsExceeded`]. Defaults to the number of cells in the grid.
    /// Cells are never visited twice, so a walk stops before reaching that default.
    pub max_iterations: usize,

    /// Time when the path generation started. Used to compute the [`RandomPath::duration`].
    start_time: Instant,
}

impl RandomPath {
    /// Create the object.
    pub fn new(grid: &Grid, start: Coordinate, goal: Coordinate, target_steps: usize) -> Self {
        Self {
            start,
            goal,
            target_steps,
            iteration: 0,
            duration: 0.0,
            max_iterations: grid.rows * grid.columns,
            start_time: Instant::now(),
        }
    }

    /// Generate and return a random path from [`RandomPath::start`] to [`RandomPath::goal`].
    ///
    /// The grid is only read, to enumerate the cells. Writing the path into the grid is up to
    /// the caller.
    ///
    /// # Errors
    ///
    /// The method returns [`RandomPathError::DeadEnd`] if the walk gets stuck. In that case the
    /// method can be retried.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Path, RandomPathError> {
        self.iteration = 0;
        self.duration = 0.0;
        self.start_time = Instant::now();

        debug!(
            "Finding path to goal {}  start = {}  target steps = {}",
            self.goal, self.start, self.target_steps
        );

        let mut path: Path = Path::new(self.target_steps + 2);
        path.push(self.start);
        let res: Result<(), RandomPathError> =
            self.find_path(grid, self.start, self.target_steps, &mut path, rng);
        self.duration = self.start_time.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        match res {
            Err(e) => Err(e),
            Ok(()) => {
                if log_enabled!(Level::Debug) {
                    let s: Vec<String> = path.get().iter().map(|c| c.to_string()).collect();
                    debug!("Winning path: {}", s.join(", "));
                }
                Ok(path)
            }
        }
    }

    /// Walk from cell to cell until the goal is reached.
    fn find_path<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        mut current: Coordinate,
        mut steps_left: usize,
        path: &mut Path,
        rng: &mut R,
    ) -> Result<(), RandomPathError> {
        loop {
            if current == self.goal {
                debug!("    Reached goal");
                return Ok(());
            }

            self.iteration += 1;
            if self.iteration > self.max_iterations {
                debug!("    Giving up after {} iterations", self.max_iterations);
                return Err(RandomPathError::IterationsExceeded(self.max_iterations));
            }

            let candidates: Vec<Coordinate> = self.candidates(grid, current, path);
            if candidates.is_empty() {
                debug!("    Back: no eligible cell from {current}");
                path.pop();
                return Err(RandomPathError::DeadEnd(path.clone()));
            }

            let next: Coordinate = if steps_left < 2 && candidates.contains(&self.goal) {
                debug!("    Straight to goal from {current}");
                self.goal
            } else {
                match candidates.choose(rng) {
                    Some(c) => *c,
                    None => return Err(RandomPathError::DeadEnd(path.clone())),
                }
            };
            debug!("    Jumping {current} -> {next}  ({} candidates)", candidates.len());

            path.push(next);
            current = next;
            steps_left = steps_left.saturating_sub(1);
        }
    }

    /// Cells reachable from `current` in one jump: same line or column, not on the border of
    /// the grid, and not already in the path.
    fn candidates(&self, grid: &Grid, current: Coordinate, path: &Path) -> Vec<Coordinate> {
        grid.coordinates()
            .filter(|c| cells_are_collinear(current, *c))
            .filter(|c| !path.contains(*c))
            .filter(|c| !grid.is_on_edge(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::coordinates::perimeter_to_coordinate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn single_interior_cell() {
        // In a 3x3 grid, the only interior cell is the goal
        let grid: Grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut random_path = RandomPath::new(&grid, c(1, 0), c(1, 1), 6);
        let path: Path = random_path.generate(&grid, &mut rng).unwrap();
        assert_eq!(path.get(), &vec![c(1, 0), c(1, 1)]);
    }

    #[test]
    fn corner_start_is_a_dead_end() {
        // The line and the column of a corner cell are all on the border
        let grid: Grid = Grid::new(5, 5);
        let mut rng = StdRng::seed_from_u64(1);
        let mut random_path = RandomPath::new(&grid, c(0, 0), c(2, 2), 6);
        match random_path.generate(&grid, &mut rng) {
            Err(RandomPathError::DeadEnd(partial)) => assert!(partial.is_empty()),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn generated_paths_are_valid() {
        for (rows, columns) in [(4, 4), (5, 3), (3, 5), (6, 8), (10, 10)] {
            let grid: Grid = Grid::new(rows, columns);
            let goal: Coordinate = c(columns / 2, rows / 2);
            let len: usize = crate::generator::coordinates::perimeter_length(rows, columns);

            for seed in 0..40 {
                let mut rng = StdRng::seed_from_u64(seed);
                let start: Coordinate = perimeter_to_coordinate(rows, columns, seed as usize % len).unwrap();
                let mut random_path = RandomPath::new(&grid, start, goal, 6);

                let path: Path = match random_path.generate(&grid, &mut rng) {
                    Ok(p) => p,
                    Err(RandomPathError::DeadEnd(partial)) => {
                        assert!(partial.is_consistent());
                        continue;
                    }
                    Err(e) => panic!("{e}"),
                };
                assert!(path.is_consistent(), "{:?}", path.get());
                assert_eq!(path.get_first(), Some(start));
                assert_eq!(path.get_last(), Some(goal));
                for p in &path.get()[1..] {
                    assert!(!grid.is_on_edge(*p), "{p} is on the border");
                }
                assert!(random_path.iteration >= path.len() - 1);
            }
        }
    }

    #[test]
    fn same_seed_same_path() {
        let grid: Grid = Grid::new(8, 8);
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            RandomPath::new(&grid, c(3, 0), c(5, 5), 6).generate(&grid, &mut rng)
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn iteration_ceiling() {
        let grid: Grid = Grid::new(8, 8);
        let mut rng = StdRng::seed_from_u64(4);
        let mut random_path = RandomPath::new(&grid, c(3, 0), c(5, 5), 6);
        assert_eq!(random_path.max_iterations, 64);

        random_path.max_iterations = 0;
        assert_eq!(
            random_path.generate(&grid, &mut rng),
            Err(RandomPathError::IterationsExceeded(0))
        );
        assert_eq!(random_path.iteration, 1);

        // A ceiling above the number of interior cells is never reached
        random_path.max_iterations = 37;
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let res = random_path.generate(&grid, &mut rng);
            assert!(!matches!(res, Err(RandomPathError::IterationsExceeded(_))));
            assert!(random_path.iteration <= 37);
        }
    }
}
