//! Generator errors
//!
//! Placement exhaustion and degenerate layouts are not errors; they show up
//! in [`crate::GenerationReport`]. These types cover misuse by the caller:
//! a configuration that cannot produce a valid layout or a room count that
//! was not clamped first.

use thiserror::Error;

/// Configuration problems, detected before any generation run
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Room size range {min}..={max} is empty")]
    EmptySizeRange { min: usize, max: usize },

    #[error("Minimum room size {min} is below {floor}; the center would land on a wall")]
    RoomTooSmall { min: usize, floor: usize },

    #[error("Room count range {min}..={max} is invalid")]
    InvalidCountRange { min: usize, max: usize },

    #[error("Placement attempt ceiling must be at least 1")]
    NoPlacementAttempts,

    #[error("Grid {width}x{height} cannot hold a {room_max_size}-tile room with its clearance")]
    GridTooSmall {
        width: usize,
        height: usize,
        room_max_size: usize,
    },
}

/// Errors surfaced by a generation run
#[derive(Debug, Error)]
pub enum DungeonError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Target room count {target} is outside {min}..={max}")]
    TargetOutOfRange { target: usize, min: usize, max: usize },

    #[error("Room sequence is full ({capacity} rooms)")]
    RoomCapacityExceeded { capacity: usize },
}
