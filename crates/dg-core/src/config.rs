//! Generator configuration
//!
//! Defaults come from [`crate::consts`]. A config can be loaded from a JSON
//! file where every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dungeon::BreachPolicy;
use crate::error::ConfigError;
use crate::{
    GRID_HEIGHT, GRID_WIDTH, MAX_PLACEMENT_ATTEMPTS, MAX_ROOMS, MIN_ROOMS, ROOM_BUFFER,
    ROOM_MAX_SIZE, ROOM_MIN_SIZE, ROOM_SIZE_FLOOR,
};

/// Tunables for a [`crate::DungeonGenerator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in tiles
    pub grid_width: usize,
    /// Grid height in tiles
    pub grid_height: usize,
    /// Smallest room side, wall border included
    pub room_min_size: usize,
    /// Largest room side, wall border included
    pub room_max_size: usize,
    /// Lowest target room count the caller may request
    pub min_rooms: usize,
    /// Highest target room count; also the room sequence capacity
    pub max_rooms: usize,
    /// Rejection-sampling ceiling per room slot
    pub max_placement_attempts: u32,
    /// What a corridor does to the walls it crosses
    pub breach_policy: BreachPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            room_min_size: ROOM_MIN_SIZE,
            room_max_size: ROOM_MAX_SIZE,
            min_rooms: MIN_ROOMS,
            max_rooms: MAX_ROOMS,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            breach_policy: BreachPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that every room the generator can sample fits the grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_min_size > self.room_max_size {
            return Err(ConfigError::EmptySizeRange {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        if self.room_min_size < ROOM_SIZE_FLOOR {
            return Err(ConfigError::RoomTooSmall {
                min: self.room_min_size,
                floor: ROOM_SIZE_FLOOR,
            });
        }
        if self.min_rooms == 0 || self.min_rooms > self.max_rooms {
            return Err(ConfigError::InvalidCountRange {
                min: self.min_rooms,
                max: self.max_rooms,
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        // Room plus the 1-tile margin on each side plus the edge clearance.
        let needed = self.room_max_size + 2 * (ROOM_BUFFER + 1);
        if self.grid_width < needed || self.grid_height < needed {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                room_max_size: self.room_max_size,
            });
        }
        Ok(())
    }

    /// Clamp a requested target room count into `min_rooms..=max_rooms`
    pub fn clamp_room_count(&self, requested: usize) -> usize {
        requested.clamp(self.min_rooms, self.max_rooms)
    }

    /// Move a target room count by `delta`, staying within bounds
    pub fn step_room_count(&self, current: usize, delta: isize) -> usize {
        let stepped = current.saturating_add_signed(delta);
        self.clamp_room_count(stepped)
    }

    /// Check whether a target room count needs no clamping
    pub fn room_count_in_range(&self, target: usize) -> bool {
        (self.min_rooms..=self.max_rooms).contains(&target)
    }
}
