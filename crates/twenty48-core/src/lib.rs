//! twenty48-core: the game-state engine for a 4x4 sliding-tile merge game
//!
//! This crate provides:
//! - A `Game` owning the grid, score, and empty-cell bookkeeping, with move
//!   application, tile spawning, terminal detection, and restart
//! - A `TileRng` random source for spawn placement and spawn values
//!
//! Quick start:
//! ```
//! use twenty48_core::engine::{Game, Move};
//! use twenty48_core::rng::TileRng;
//!
//! // Seed once at process start; restarts reuse the same stream.
//! let mut game = Game::new(TileRng::seed_from_u64(42));
//! assert_eq!(game.empty_count(), 14);
//! assert_eq!(game.score(), 0);
//!
//! game.apply_move(Move::Left);
//! // At most three tiles exist after one move from a fresh board.
//! assert!(game.empty_count() >= 13);
//! ```
//!
//! Rendering and keyboard capture are deliberately absent: the engine is
//! pure state, driven from the outside one move at a time.

pub mod engine;
pub mod rng;
