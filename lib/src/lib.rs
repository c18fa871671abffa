//! A simulator for a Game-of-Life-like automaton of red and green cells.

mod cells;
mod config;
mod error;
mod grid;
pub mod rules;
mod world;

pub use cells::{Coord, State, GREEN, RED};
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
pub use world::World;
