//! Session configuration.
//!
//! Everything here is fixed for the lifetime of a [`Session`](crate::Session);
//! grid dimensions in particular cannot change once the board exists.

use crate::domain::MIN_DIMENSION;
use crate::error::{Error, Result};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub columns: usize,
    pub rows: usize,
    /// Edge length of one block in world units.
    pub cell_size: f32,
    /// Seconds per simulation tick.
    pub tick_seconds: f32,
    /// Terrain levels raised during construction; also the tallest terrain stack.
    pub max_terrain_level: u32,
    pub max_building_height: u32,
    /// Fraction of the remaining distance each offset moves per frame, in (0, 1].
    pub easing: f32,
    /// Terrain sampler parameters.
    pub noise_scale: f32,
    pub noise_octaves: u32,
    pub noise_falloff: f32,
    /// Seed for board randomization and terrain; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 48,
            rows: 48,
            cell_size: 20.0,
            tick_seconds: 0.1,
            max_terrain_level: 5,
            max_building_height: 15,
            easing: 0.2,
            noise_scale: 0.1,
            noise_octaves: 10,
            noise_falloff: 0.5,
            seed: None,
        }
    }
}

impl Config {
    /// Reject settings a session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.columns < MIN_DIMENSION || self.rows < MIN_DIMENSION {
            return Err(Error::GridTooSmall {
                columns: self.columns,
                rows: self.rows,
                minimum: MIN_DIMENSION,
            });
        }
        let tick_ok = self.tick_seconds.is_finite() && self.tick_seconds > 0.0;
        if !tick_ok || self.tick_interval().is_zero() {
            return Err(Error::invalid_config(format!(
                "tick_seconds must be positive, got {}",
                self.tick_seconds
            )));
        }
        if !(self.easing > 0.0 && self.easing <= 1.0) {
            return Err(Error::invalid_config(format!(
                "easing must be in (0, 1], got {}",
                self.easing
            )));
        }
        if self.max_terrain_level == 0 {
            return Err(Error::invalid_config("max_terrain_level must be at least 1"));
        }
        if self.max_building_height == 0 {
            return Err(Error::invalid_config("max_building_height must be at least 1"));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(Error::invalid_config("cell_size must be positive"));
        }
        Ok(())
    }

    /// Tick period rounded to whole microseconds, so that a frame of
    /// exactly `tick_seconds` counts as one full tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros((f64::from(self.tick_seconds) * 1e6).round() as u64)
    }
}
