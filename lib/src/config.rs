//! World configuration.

use crate::{error::Error, grid::Grid, world::World};
use educe::Educe;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration,
/// with a random starting grid.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Height.
    #[educe(Default = 16)]
    pub height: isize,

    /// Width.
    #[educe(Default = 16)]
    pub width: isize,

    /// Seed for the random starting grid.
    ///
    /// `None` means that the grid is seeded from entropy,
    /// so every run starts from a different board.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(height: isize, width: isize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    /// Sets the seed for the random starting grid.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Creates a world from the configuration.
    ///
    /// The starting grid is filled by fair coin flips from the configured
    /// seed, or from entropy when no seed is set.
    pub fn world(&self) -> Result<World, Error> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.world_with_rng(&mut rng)
    }

    /// Creates a world from the configuration,
    /// using an explicitly passed random source.
    pub fn world_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<World, Error> {
        let grid = Grid::random(self.height, self.width, rng)?;
        Ok(World::new(grid))
    }
}
