//! Session composition: one playthrough of the puzzle.
//!
//! `Game` owns everything a single session needs — the tile store, the
//! seeded RNG, the id counter, the accumulated score, the game-over flag,
//! and a move history. The engine modules stay stateless; this is the
//! one place their phases are wired together in order.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::grid::{Direction, Position, GRID_SIZE};
use crate::core::rng::GameRng;
use crate::core::store::TileStore;
use crate::engine::movement::apply_move;
use crate::engine::spawn::new_game;
use crate::engine::terminal::is_stuck;

/// One history entry: an effective move and what it scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The direction played.
    pub direction: Direction,
    /// Points the move scored.
    pub score_delta: u32,
    /// 0-based position in the session's move sequence.
    pub sequence: u32,
}

/// Result of one `Game::step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the board changed (and tiles were spawned).
    pub changed: bool,
    /// Points earned from merges in this move.
    pub score_delta: u32,
    /// Whether the game is over (no legal moves remaining).
    pub game_over: bool,
}

/// Builder for a game session.
pub struct GameBuilder {
    initial_spawn: usize,
    spawn_per_move: usize,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            initial_spawn: 2,
            spawn_per_move: 1,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles spawned when the game starts (default 2).
    pub fn initial_spawn(mut self, count: usize) -> Self {
        assert!(
            (1..=GRID_SIZE * GRID_SIZE).contains(&count),
            "Initial spawn must be 1-{}",
            GRID_SIZE * GRID_SIZE
        );
        self.initial_spawn = count;
        self
    }

    /// Tiles spawned after each effective move (default 1).
    pub fn spawn_per_move(mut self, count: usize) -> Self {
        assert!(count >= 1, "Must spawn at least 1 tile per move");
        self.spawn_per_move = count;
        self
    }

    /// Build the session and seed the opening board.
    pub fn build(self, seed: u64) -> Game {
        let mut rng = GameRng::new(seed);
        let (tiles, next_id) = new_game(self.initial_spawn, &mut rng);
        Game {
            tiles,
            rng,
            next_id,
            score: 0,
            over: false,
            initial_spawn: self.initial_spawn,
            spawn_per_move: self.spawn_per_move,
            history: Vector::new(),
        }
    }
}

/// A game session.
#[derive(Clone)]
pub struct Game {
    tiles: TileStore,
    rng: GameRng,
    next_id: u32,
    score: u32,
    over: bool,
    initial_spawn: usize,
    spawn_per_move: usize,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Create a session with default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameBuilder::new().build(seed)
    }

    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Play one move.
    ///
    /// A direction with no legal effect reports `changed: false`: nothing
    /// moves, spawns, scores, or gets recorded. Once the game is over
    /// every further step is a no-op.
    pub fn step(&mut self, direction: Direction) -> StepResult {
        if self.over {
            return StepResult {
                changed: false,
                score_delta: 0,
                game_over: true,
            };
        }

        let result = apply_move(
            direction,
            &self.tiles,
            self.next_id,
            self.spawn_per_move,
            &mut self.rng,
        );
        self.tiles = result.tiles;
        self.next_id = result.next_id;

        if result.changed {
            self.score += result.score_delta;
            let sequence = self.history.len() as u32;
            self.history.push_back(MoveRecord {
                direction,
                score_delta: result.score_delta,
                sequence,
            });
            self.over = is_stuck(&self.tiles.to_matrix(), &self.tiles);
        }

        StepResult {
            changed: result.changed,
            score_delta: result.score_delta,
            game_over: self.over,
        }
    }

    /// Throw the board away and start over with a new seed.
    pub fn reset(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        let (tiles, next_id) = new_game(self.initial_spawn, &mut self.rng);
        self.tiles = tiles;
        self.next_id = next_id;
        self.score = 0;
        self.over = false;
        self.history = Vector::new();
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether no legal move remains.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The current tile collection.
    #[must_use]
    pub fn tiles(&self) -> &TileStore {
        &self.tiles
    }

    /// Every effective move played so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Dense value grid for display layers. Empty cells are 0.
    #[must_use]
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let matrix = self.tiles.to_matrix();
        let mut values = [[0; GRID_SIZE]; GRID_SIZE];
        for pos in Position::all() {
            if let Some(id) = matrix.get(pos) {
                values[pos.row][pos.col] = self.tiles.tile_unchecked(id).value;
            }
        }
        values
    }
}
