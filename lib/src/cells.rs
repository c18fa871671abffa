//! Cells in the cellular automaton.

use std::{
    fmt::{Display, Error, Formatter},
    ops::Not,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub usize);

/// The Red state.
pub const RED: State = State(0);
/// The Green state.
pub const GREEN: State = State(1);

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            GREEN => RED,
            _ => GREEN,
        }
    }
}

/// Displays the state as a single digit.
impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`. Both coordinates are 0-indexed.
pub type Coord = (isize, isize);
