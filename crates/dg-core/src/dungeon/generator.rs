//! Generation run orchestration
//!
//! Owns the state, the config and the RNG. Each [`DungeonGenerator::generate`]
//! call runs reset, placement with corridors, and exit selection to
//! completion before returning.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::corridor::connect_rooms;
use super::exit::select_exit;
use super::placement::{place_start_room, try_place_room};
use super::DungeonState;
use crate::config::GeneratorConfig;
use crate::error::DungeonError;
use crate::rng::DungeonRng;

/// Summary of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Requested room count, start room included
    pub target_rooms: usize,
    /// Rooms actually placed
    pub placed_rooms: usize,
    /// Slots abandoned after exhausting every placement attempt
    pub skipped_rooms: usize,
    /// Corridors dug, as `(newest, partner)` room indices in placement order
    pub links: Vec<(usize, usize)>,
    /// Index of the room holding the exit
    pub exit_room: usize,
    /// Only the start room was placed and the exit reuses the entrance
    pub degenerate: bool,
    /// Seed of the generator's RNG stream
    pub seed: u64,
}

/// Room-and-corridor dungeon generator
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    config: GeneratorConfig,
    rng: DungeonRng,
    state: DungeonState,
}

impl DungeonGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new(config: GeneratorConfig) -> Result<Self, DungeonError> {
        Self::with_rng(config, DungeonRng::from_entropy())
    }

    /// Create a generator that reproduces layouts for `seed`
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self, DungeonError> {
        Self::with_rng(config, DungeonRng::new(seed))
    }

    pub fn with_rng(config: GeneratorConfig, rng: DungeonRng) -> Result<Self, DungeonError> {
        config.validate()?;
        let state = DungeonState::new(config.grid_width, config.grid_height, config.max_rooms);
        Ok(Self { config, rng, state })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Read-only view of the last run's output
    pub fn state(&self) -> &DungeonState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Clear the grid and room list without generating
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Run a full generation for `target` rooms, start room included
    ///
    /// `target` must already be clamped to the configured range.
    pub fn generate(&mut self, target: usize) -> Result<GenerationReport, DungeonError> {
        if !self.config.room_count_in_range(target) {
            return Err(DungeonError::TargetOutOfRange {
                target,
                min: self.config.min_rooms,
                max: self.config.max_rooms,
            });
        }

        self.state.reset();
        place_start_room(&mut self.state, &self.config, &mut self.rng)?;

        let mut skipped_rooms = 0;
        let mut links = Vec::with_capacity(target.saturating_sub(1));
        for _ in 1..target {
            if try_place_room(&mut self.state, &self.config, &mut self.rng)?.is_none() {
                skipped_rooms += 1;
                continue;
            }
            // Link the new room to any room placed before it.
            let newest = self.state.room_count() - 1;
            let partner = self.rng.index(newest);
            if connect_rooms(
                &mut self.state,
                newest,
                partner,
                self.config.breach_policy,
                &mut self.rng,
            )
            .is_some()
            {
                links.push((newest, partner));
            }
        }

        let exit = select_exit(&mut self.state);
        let report = GenerationReport {
            target_rooms: target,
            placed_rooms: self.state.room_count(),
            skipped_rooms,
            links,
            exit_room: exit.map_or(0, |choice| choice.room_index),
            degenerate: exit.is_none_or(|choice| choice.fallback),
            seed: self.rng.seed(),
        };

        info!(
            target = report.target_rooms,
            placed = report.placed_rooms,
            skipped = report.skipped_rooms,
            corridors = report.links.len(),
            exit_room = report.exit_room,
            seed = report.seed,
            "generated dungeon"
        );
        Ok(report)
    }
}
