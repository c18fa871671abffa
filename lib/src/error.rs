//! All kinds of errors in this crate.

use crate::cells::{Coord, State};
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Height should be a number between 1 and 1000, not {0}.
    HeightOutOfRange(isize),
    /// Width should be a number between 1 and 1000, not {0}.
    WidthOutOfRange(isize),
    /// Row {0} has {1} cells, but rows of {2} cells were expected.
    UnevenRow(usize, usize, usize),
    /// Cell at {0:?} has invalid state: {1:?}.
    InvalidState(Coord, State),
    /// Unexpected character {0:?} in grid text.
    UnexpectedChar(char),
}
