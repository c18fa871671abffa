//! The game board.

use crate::{
    cells::{Coord, State, GREEN, RED},
    error::Error,
    rules,
};
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Largest allowed height or width of a grid.
const MAX_SIZE: isize = 1000;

/// A rectangular board of red and green cells.
///
/// The grid is the single source of truth for the current board state.
/// Evolving the board with [`step`](Self::step) produces a fresh grid;
/// the grid being read is never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    height: isize,
    /// Number of columns.
    width: isize,
    /// The cells, row by row.
    cells: Box<[State]>,
}

impl Grid {
    /// Creates a grid where every cell is set to red or green
    /// by a fair coin flip from `rng`.
    ///
    /// Both `height` and `width` must lie between 1 and 1000.
    pub fn random<R: Rng + ?Sized>(
        height: isize,
        width: isize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        check_size(height, width)?;
        let cells = (0..height * width)
            .map(|_| State(rng.gen_range(0..2)))
            .collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Creates a grid from explicit rows of cell states.
    ///
    /// Both dimensions must lie between 1 and 1000, every row must be as long
    /// as the first one, and every state must be [`RED`] or [`GREEN`].
    /// Otherwise an error is returned and no grid is produced.
    pub fn from_rows(rows: Vec<Vec<State>>) -> Result<Self, Error> {
        let height = rows.len() as isize;
        let width = rows.first().map_or(0, Vec::len) as isize;
        check_size(height, width)?;
        let mut cells = Vec::with_capacity((height * width) as usize);
        for (x, row) in rows.iter().enumerate() {
            if row.len() != width as usize {
                return Err(Error::UnevenRow(x, row.len(), width as usize));
            }
            for (y, &state) in row.iter().enumerate() {
                if state != RED && state != GREEN {
                    return Err(Error::InvalidState((x as isize, y as isize), state));
                }
                cells.push(state);
            }
        }
        Ok(Self {
            height,
            width,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> isize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> isize {
        self.width
    }

    /// The state of the cell at `coord`,
    /// or `None` if the coordinate lies outside the grid.
    pub fn get(&self, (x, y): Coord) -> Option<State> {
        if (0..self.height).contains(&x) && (0..self.width).contains(&y) {
            Some(self.cells[(x * self.width + y) as usize])
        } else {
            None
        }
    }

    /// Counts the neighbors of the cell at `coord` whose state equals `state`.
    ///
    /// A cell has at most 8 neighbors, fewer on the boundary, where the
    /// out-of-grid offsets are simply omitted. The cell itself is never
    /// counted, so the result is always between 0 and 8.
    pub fn neighbor_count(&self, (x, y): Coord, state: State) -> usize {
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) && self.get((x + dx, y + dy)) == Some(state) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Produces the next generation of the board.
    ///
    /// Every cell's next state is computed by the transition rules against
    /// this grid, so no cell can observe another cell's already-updated
    /// state. The new grid has the same dimensions; this grid is unchanged.
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|x| (0..self.width).map(move |y| (x, y)))
            .map(|coord| rules::next_state(self, coord))
            .collect();
        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }
}

fn check_size(height: isize, width: isize) -> Result<(), Error> {
    if !(1..=MAX_SIZE).contains(&height) {
        return Err(Error::HeightOutOfRange(height));
    }
    if !(1..=MAX_SIZE).contains(&width) {
        return Err(Error::WidthOutOfRange(width));
    }
    Ok(())
}

/// Displays the grid as rows of `0`/`1` digits, one row per line.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for x in 0..self.height {
            for y in 0..self.width {
                write!(f, "{}", self.cells[(x * self.width + y) as usize])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses a grid from the format written by [`Display`]:
/// one row of digits per line.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| {
                        c.to_digit(10)
                            .map(|d| State(d as usize))
                            .ok_or(Error::UnexpectedChar(c))
                    })
                    .collect()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}
