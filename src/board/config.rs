//! Screen geometry the board needs to turn clicks into grid coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::types::Coordinate;

/// Default tile edge in pixels. A board cell spans two tiles.
pub const DEFAULT_TILE_SIZE: i32 = 32;

/// Board placement on screen.
///
/// `origin` is measured in tiles, `padding` in pixels. With the defaults the
/// top-left cell starts at pixel (64, 64) and each cell is 64 pixels wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub tile_size: i32,
    pub origin: Coordinate,
    pub padding: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            tile_size: DEFAULT_TILE_SIZE,
            origin: Coordinate::new(1, 1),
            padding: DEFAULT_TILE_SIZE,
        }
    }
}

impl BoardConfig {
    pub fn new(tile_size: i32, origin: Coordinate, padding: i32) -> Result<Self, ConfigError> {
        if tile_size <= 0 {
            return Err(ConfigError::InvalidTileSize { size: tile_size });
        }
        if padding < 0 {
            return Err(ConfigError::InvalidPadding { padding });
        }
        Ok(BoardConfig {
            tile_size,
            origin,
            padding,
        })
    }

    /// Edge of one grid cell in pixels
    #[inline]
    #[must_use]
    pub const fn cell_size(&self) -> i32 {
        self.tile_size * 2
    }

    /// Pixel position of the board's top-left corner
    #[must_use]
    pub fn top_left(&self) -> Coordinate {
        self.origin * self.tile_size + Coordinate::new(self.padding, self.padding)
    }

    /// Grid cell under pixel `px`, or `None` when the point is off the board.
    #[must_use]
    pub fn px_to_grid(&self, px: Coordinate) -> Option<Coordinate> {
        let cell = (px - self.top_left()) / self.cell_size();
        cell.in_bounds().then_some(cell)
    }

    /// Pixel position of the top-left corner of `cell`.
    #[must_use]
    pub fn grid_to_px(&self, cell: Coordinate) -> Coordinate {
        self.top_left() + cell * self.cell_size()
    }
}
