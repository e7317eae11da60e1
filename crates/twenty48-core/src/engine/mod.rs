//! Engine module: the owned game state and the line-oriented move
//! resolution that drives it.
//!
//! - `Game` owns the grid, score, and empty-cell bookkeeping.
//! - `ops` holds the per-line compact/merge/compact walk and the full-grid
//!   scans it relies on.

mod ops;
pub mod state;

pub use state::{Game, Grid, Move, Score, Tile, CELL_COUNT, DEFAULT_SPAWN_LOW_RATE, GRID_SIZE};
