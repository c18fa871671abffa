//! The world.

use crate::{
    cells::{Coord, GREEN},
    grid::Grid,
};

/// The world.
///
/// Holds the current board together with the bookkeeping of one tracked
/// cell: how many generations that cell has been observed in the green
/// state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    /// The current board.
    grid: Grid,

    /// Number of generations requested by the last call to
    /// [`play`](Self::play).
    generations: usize,

    /// The coordinates of the tracked cell.
    tracked: Coord,

    /// How many generations the tracked cell has been green.
    ///
    /// The count accumulates over repeated calls to [`play`](Self::play);
    /// it is only reset by starting from a new world.
    greens: usize,
}

impl World {
    /// Creates a world starting from the given grid.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generations: 0,
            tracked: (0, 0),
            greens: 0,
        }
    }

    /// Advances the world by one generation.
    pub fn step(&mut self) {
        self.grid = self.grid.step();
    }

    /// Runs the world for `n` generations, watching the cell at `(x, y)`.
    ///
    /// After every generation the tracked cell is inspected in the freshly
    /// produced board, and the green counter grows by one whenever the cell
    /// is green. The coordinates are not validated: a coordinate outside
    /// the grid is simply never observed green.
    pub fn play(&mut self, n: usize, x: isize, y: isize) {
        self.generations = n;
        self.tracked = (x, y);
        for _ in 0..n {
            self.step();
            if self.grid.get((x, y)) == Some(GREEN) {
                self.greens += 1;
            }
        }
    }

    /// The current board.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations requested by the last call to
    /// [`play`](Self::play).
    #[inline]
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// The coordinates of the tracked cell.
    #[inline]
    pub fn tracked(&self) -> Coord {
        self.tracked
    }

    /// How many generations the tracked cell has been green.
    #[inline]
    pub fn green_count(&self) -> usize {
        self.greens
    }
}
