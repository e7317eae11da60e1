use std::fmt;

use serde::{Deserialize, Serialize};

use super::ops;
use crate::rng::TileRng;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 4;
/// Total number of cells.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Default percent chance that a spawned tile is a 2; the rest are 4s.
pub const DEFAULT_SPAWN_LOW_RATE: u8 = 90;

/// A cell value: 0 for empty, otherwise a power of two (2, 4, 8, ...).
pub type Tile = u32;
/// Accumulated score.
pub type Score = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// 4x4 grid of tile values, flat in row-major order.
///
/// Index 0 is the top-left cell, index 15 the bottom-right. Tiles hold
/// their face value (2, 4, 8, ...); 0 denotes an empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid(pub(crate) [Tile; CELL_COUNT]);

impl Grid {
    /// A constant empty grid (all zeros).
    pub const EMPTY: Grid = Grid([0; CELL_COUNT]);

    /// Tile value at a flat row-major index.
    ///
    /// ```
    /// use twenty48_core::engine::Grid;
    /// let grid = Grid::from([0; 16]);
    /// assert_eq!(grid.get(15), 0);
    /// ```
    #[inline]
    pub fn get(&self, idx: usize) -> Tile {
        self.0[idx]
    }

    /// Tile value at (row, col).
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Tile {
        self.0[row * GRID_SIZE + col]
    }

    /// Borrow the flat row-major cell array.
    #[inline]
    pub fn cells(&self) -> &[Tile; CELL_COUNT] {
        &self.0
    }

    /// Iterate over rows as fixed-size slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.0.chunks(GRID_SIZE)
    }
}

impl From<[Tile; CELL_COUNT]> for Grid {
    fn from(cells: [Tile; CELL_COUNT]) -> Self {
        Grid(cells)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f)?;
            for &tile in row {
                write!(f, "{:<6}", tile)?;
            }
        }
        Ok(())
    }
}

/// The owned game state: grid, score, empty-cell bookkeeping, the latched
/// game-over flag, and the random source feeding tile spawns.
///
/// All mutation goes through [`Game::apply_move`], [`Game::spawn_tile`],
/// and [`Game::restart`]; the grid and score are observable only through
/// read-only accessors. After every completed operation the empty-cell
/// list equals the exact set of zero cells in the grid.
pub struct Game {
    grid: Grid,
    score: Score,
    empty_cells: Vec<usize>,
    game_over: bool,
    spawn_low_rate: u8,
    rng: TileRng,
}

impl Game {
    /// Start a new game: empty grid, zero score, two spawned tiles.
    ///
    /// The random source lives for the whole process and survives
    /// restarts; seed it once at startup.
    ///
    /// ```
    /// use twenty48_core::engine::Game;
    /// use twenty48_core::rng::TileRng;
    ///
    /// let game = Game::new(TileRng::seed_from_u64(42));
    /// assert_eq!(game.empty_count(), 14);
    /// assert_eq!(game.score(), 0);
    /// ```
    pub fn new(rng: TileRng) -> Self {
        Self::with_spawn_low_rate(rng, DEFAULT_SPAWN_LOW_RATE)
    }

    /// Like [`Game::new`] with a custom percent chance of spawning a 2.
    pub fn with_spawn_low_rate(rng: TileRng, spawn_low_rate: u8) -> Self {
        let mut game = Game {
            grid: Grid::EMPTY,
            score: 0,
            empty_cells: Vec::with_capacity(CELL_COUNT),
            game_over: false,
            spawn_low_rate,
            rng,
        };
        game.restart();
        game
    }

    /// Reset to the start-of-game state: all cells cleared, score zeroed,
    /// game-over flag dropped, two fresh tiles spawned from the same
    /// random source.
    pub fn restart(&mut self) {
        self.grid = Grid::EMPTY;
        self.score = 0;
        self.game_over = false;
        self.empty_cells.clear();
        self.empty_cells.extend(0..CELL_COUNT);
        self.spawn_tile();
        self.spawn_tile();
    }

    /// Slide and merge toward `direction`, then spawn one tile if anything
    /// moved or merged. Returns whether the grid changed.
    ///
    /// A move that changes nothing spawns nothing, and once the game-over
    /// flag has latched (see [`Game::is_game_over`]) moves are absorbed
    /// as no-ops until [`Game::restart`].
    pub fn apply_move(&mut self, direction: Move) -> bool {
        if self.game_over {
            return false;
        }
        let mut spawn_needed = false;
        for line in 0..GRID_SIZE {
            let cells = ops::line_cells(direction, line);
            let (moved, points) = ops::resolve_line(&mut self.grid, &cells);
            spawn_needed |= moved;
            self.score += points;
        }
        self.rescan_empty();
        if spawn_needed {
            self.spawn_tile();
        }
        spawn_needed
    }

    /// Place a 2 (or, rarely, a 4) into a uniformly chosen empty cell.
    /// No-op when the grid is full.
    pub fn spawn_tile(&mut self) {
        if self.empty_cells.is_empty() {
            return;
        }
        let pick = self.rng.uniform_index(self.empty_cells.len());
        let cell = self.empty_cells[pick];
        self.grid.0[cell] = self.rng.biased_value(self.spawn_low_rate, 2, 4);
        self.rescan_empty();
    }

    /// Terminal-state check: true when no cell is empty and no two
    /// horizontally or vertically adjacent cells hold equal values.
    ///
    /// Latches the internal game-over flag when it evaluates true; only
    /// [`Game::restart`] clears it again.
    pub fn is_game_over(&mut self) -> bool {
        if !self.empty_cells.is_empty() {
            return false;
        }
        if ops::has_adjacent_pair(&self.grid) {
            return false;
        }
        self.game_over = true;
        true
    }

    /// Read-only view of the grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current score.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Number of empty cells tracked by the engine.
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty_cells.len()
    }

    fn rescan_empty(&mut self) {
        ops::collect_empty(&self.grid, &mut self.empty_cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full grid with no adjacent equal pair anywhere.
    const DEADLOCK: [Tile; CELL_COUNT] = [
        2, 4, 2, 4, //
        4, 2, 4, 2, //
        2, 4, 2, 4, //
        4, 2, 4, 2,
    ];

    #[test]
    fn new_game_spawns_exactly_two_small_tiles() {
        let game = Game::new(TileRng::seed_from_u64(42));
        let tiles: Vec<Tile> = game.grid().cells().iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|&v| v == 2 || v == 4));
        assert_eq!(game.empty_count(), 14);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn merge_doubles_the_tile_and_scores_its_value() {
        let mut game = Game::new(TileRng::seed_from_u64(3));
        game.grid = Grid::from([
            2, 2, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        game.score = 0;
        game.rescan_empty();

        assert!(game.apply_move(Move::Left));
        assert_eq!(game.grid().get(0), 4);
        assert_eq!(game.score(), 4);
        // One tile merged away, one spawned back in.
        assert_eq!(game.empty_count(), 14);
    }

    #[test]
    fn ineffective_move_spawns_nothing() {
        let mut game = Game::new(TileRng::seed_from_u64(3));
        game.grid = Grid::from([
            2, 0, 0, 0, //
            4, 0, 0, 0, //
            8, 0, 0, 0, //
            16, 0, 0, 0,
        ]);
        game.rescan_empty();
        let before = *game.grid().cells();

        assert!(!game.apply_move(Move::Left));
        assert_eq!(*game.grid().cells(), before);
        assert_eq!(game.empty_count(), 12);
    }

    #[test]
    fn deadlocked_grid_latches_game_over_and_rejects_moves() {
        let mut game = Game::new(TileRng::seed_from_u64(7));
        game.grid = Grid::from(DEADLOCK);
        game.rescan_empty();

        assert!(game.is_game_over());
        assert!(!game.apply_move(Move::Left));
        assert_eq!(*game.grid().cells(), DEADLOCK);
    }

    #[test]
    fn one_adjacent_pair_keeps_the_game_alive() {
        let mut game = Game::new(TileRng::seed_from_u64(7));
        let mut cells = DEADLOCK;
        cells[1] = 2; // row 0 becomes [2, 2, 2, 4]
        game.grid = Grid::from(cells);
        game.rescan_empty();

        assert!(!game.is_game_over());
        assert!(game.apply_move(Move::Left));
    }

    #[test]
    fn game_over_needs_a_full_grid() {
        let mut game = Game::new(TileRng::seed_from_u64(7));
        let mut cells = DEADLOCK;
        cells[5] = 0;
        game.grid = Grid::from(cells);
        game.rescan_empty();

        assert!(!game.is_game_over());
    }

    #[test]
    fn restart_resets_to_a_fresh_game() {
        let mut game = Game::new(TileRng::seed_from_u64(5));
        for _ in 0..10 {
            game.apply_move(Move::Left);
            game.apply_move(Move::Down);
        }
        game.restart();

        assert_eq!(game.score(), 0);
        assert_eq!(game.empty_count(), 14);
        let tiles: Vec<Tile> = game.grid().cells().iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|&v| v == 2 || v == 4));
        assert!(!game.is_game_over());
    }

    #[test]
    fn restart_clears_a_latched_game_over() {
        let mut game = Game::new(TileRng::seed_from_u64(9));
        game.grid = Grid::from(DEADLOCK);
        game.rescan_empty();
        assert!(game.is_game_over());

        game.restart();
        assert!(!game.is_game_over());
        assert!(game.apply_move(Move::Left) || game.apply_move(Move::Right));
    }

    #[test]
    fn spawn_on_full_grid_is_a_no_op() {
        let mut game = Game::new(TileRng::seed_from_u64(11));
        game.grid = Grid::from(DEADLOCK);
        game.rescan_empty();

        game.spawn_tile();
        assert_eq!(*game.grid().cells(), DEADLOCK);
        assert_eq!(game.empty_count(), 0);
    }

    #[test]
    fn spawn_rate_hundred_spawns_only_twos() {
        let mut game = Game::with_spawn_low_rate(TileRng::seed_from_u64(8), 100);
        for _ in 0..14 {
            game.spawn_tile();
        }
        assert_eq!(game.empty_count(), 0);
        assert!(game.grid().cells().iter().all(|&v| v == 2));
    }

    #[test]
    fn same_seed_same_session() {
        let mut a = Game::new(TileRng::seed_from_u64(99));
        let mut b = Game::new(TileRng::seed_from_u64(99));
        for mv in [Move::Left, Move::Up, Move::Right, Move::Down, Move::Left, Move::Down] {
            a.apply_move(mv);
            b.apply_move(mv);
            assert_eq!(a.grid().cells(), b.grid().cells());
            assert_eq!(a.score(), b.score());
        }
    }

    #[test]
    fn invariants_hold_across_random_play() {
        let mut game = Game::new(TileRng::seed_from_u64(1234));
        let moves = [Move::Left, Move::Down, Move::Right, Move::Up];
        for turn in 0..500 {
            game.apply_move(moves[turn % moves.len()]);

            let zeros: Vec<usize> = game
                .grid
                .cells()
                .iter()
                .enumerate()
                .filter(|(_, &v)| v == 0)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(game.empty_cells, zeros);
            for &v in game.grid.cells() {
                assert!(v == 0 || (v >= 2 && v.is_power_of_two()), "bad tile {v}");
            }

            if game.is_game_over() {
                break;
            }
        }
    }
}
