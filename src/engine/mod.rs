//! The rules algorithms: slide/merge traversal, spawn placement, and
//! terminal-state detection.
//!
//! All three operate on a `TileStore` handed in by the caller for the
//! duration of one move. `apply_move` is the composition entry point;
//! `slide`, `spawn_tiles`, and `is_stuck` are the individual phases.

pub mod movement;
pub mod spawn;
pub mod terminal;

pub use movement::{apply_move, slide, MoveOutcome, MoveResult};
pub use spawn::{new_game, spawn_tiles, FOUR_TILE_PROBABILITY};
pub use terminal::is_stuck;
