//! # rust-2048
//!
//! The rules engine of a 2048-style sliding-tile puzzle: a fixed 4×4 grid
//! of numbered tiles that slide and merge along one of four directions,
//! spawn new tiles, and detect terminal states.
//!
//! ## Design Principles
//!
//! 1. **Tagged entities**: Every tile has a unique `TileId` for its whole
//!    lifetime. The store is the single source of truth; the occupancy
//!    matrix is a per-move projection, derived and discarded.
//!
//! 2. **Injectable randomness**: Spawn placement draws from a seeded
//!    `GameRng` passed in by the caller. Movement and terminal detection
//!    are fully deterministic and testable without randomness.
//!
//! 3. **Fatal invariants**: Duplicate live positions or a matrix id with
//!    no backing tile are engine defects, not runtime errors. They panic.
//!
//! ## Architecture
//!
//! One move runs: filtered tile snapshot → occupancy matrix → recursive
//! slide/merge traversal → spawn (only if the board changed) → terminal
//! check. The traversal resolves each line far-edge-first, so a chain of
//! equal tiles merges pairwise starting nearest the direction of travel.
//!
//! ## Modules
//!
//! - `core`: tile identity, grid geometry, tile store, RNG
//! - `engine`: slide/merge traversal, spawn placement, terminal detection
//! - `game`: session composition — score, history, game-over tracking

pub mod core;
pub mod engine;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Axis, Direction, GameRng, GameRngState, OccupancyMatrix, Position, Tile, TileId, TileStore,
    Traversal, GRID_SIZE,
};

pub use crate::engine::{
    apply_move, is_stuck, new_game, slide, spawn_tiles, MoveOutcome, MoveResult,
    FOUR_TILE_PROBABILITY,
};

pub use crate::game::{Game, GameBuilder, MoveRecord, StepResult};
