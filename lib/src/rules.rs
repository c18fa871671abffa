//! The two fixed transition rules of the automaton.
//!
//! Both rules decide a cell's next state from the number of its green
//! neighbors. There is no rule-string parsing and no other rule set.

use crate::{
    cells::{Coord, State, GREEN, RED},
    grid::Grid,
};

/// Next state for a cell that is currently green.
///
/// The cell stays [`GREEN`] if and only if exactly 2, 3 or 6 of its
/// neighbors are green.
pub fn green_rule(grid: &Grid, coord: Coord) -> State {
    match grid.neighbor_count(coord, GREEN) {
        2 | 3 | 6 => GREEN,
        _ => RED,
    }
}

/// Next state for a cell that is currently red.
///
/// The counted state is the successor of the cell's own state, which for a
/// red cell is green. The cell becomes [`GREEN`] if and only if exactly 3
/// or 6 of its neighbors have that state.
pub fn red_rule(grid: &Grid, coord: Coord) -> State {
    let target = State(RED.0 + 1);
    match grid.neighbor_count(coord, target) {
        3 | 6 => GREEN,
        _ => RED,
    }
}

/// Next state for the cell at `coord`, choosing the rule
/// by the cell's current state.
pub fn next_state(grid: &Grid, coord: Coord) -> State {
    match grid.get(coord) {
        Some(GREEN) => green_rule(grid, coord),
        _ => red_rule(grid, coord),
    }
}
