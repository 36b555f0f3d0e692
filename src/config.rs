//! Game constants and the settings built from them.

use anyhow::{bail, Result};

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;
pub const CELL_SIZE: f32 = 20.0; // pixels per cell, rendering only
pub const DROP_INTERVAL: f32 = 0.5; // seconds between gravity steps

/// Widest piece in the catalog; a narrower board could never spawn it.
const MIN_BOARD_WIDTH: usize = 4;
/// Every piece reaches its second matrix row when it spawns.
const MIN_BOARD_HEIGHT: usize = 2;

/// Board and timing settings, fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
    pub drop_interval: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            drop_interval: DROP_INTERVAL,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_BOARD_WIDTH {
            bail!(
                "board width must be at least {} cells, got {}",
                MIN_BOARD_WIDTH,
                self.width
            );
        }
        if self.height < MIN_BOARD_HEIGHT {
            bail!(
                "board height must be at least {} cells, got {}",
                MIN_BOARD_HEIGHT,
                self.height
            );
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            bail!("cell size must be a positive number of pixels, got {}", self.cell_size);
        }
        if !(self.drop_interval.is_finite() && self.drop_interval > 0.0) {
            bail!(
                "drop interval must be a positive number of seconds, got {}",
                self.drop_interval
            );
        }
        Ok(())
    }

    pub fn window_width(&self) -> f32 {
        self.width as f32 * self.cell_size
    }

    pub fn window_height(&self) -> f32 {
        self.height as f32 * self.cell_size
    }
}
