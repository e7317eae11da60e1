use super::state::{Grid, Move, Score, GRID_SIZE};

/// Flat indices of one line, ordered from the target edge inward.
///
/// Rows for Left/Right, columns for Up/Down; `line` selects which row or
/// column. Index 0 is the cell tiles slide toward.
pub(crate) fn line_cells(direction: Move, line: usize) -> [usize; GRID_SIZE] {
    let mut cells = [0usize; GRID_SIZE];
    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = match direction {
            Move::Left => line * GRID_SIZE + i,
            Move::Right => line * GRID_SIZE + (GRID_SIZE - 1 - i),
            Move::Up => i * GRID_SIZE + line,
            Move::Down => (GRID_SIZE - 1 - i) * GRID_SIZE + line,
        };
    }
    cells
}

/// Slide one line toward its target edge: compact, merge the first
/// adjacent equal pair, compact again. Returns whether anything moved or
/// merged, and the points earned by the merge.
pub(crate) fn resolve_line(grid: &mut Grid, cells: &[usize; GRID_SIZE]) -> (bool, Score) {
    let mut moved = false;

    // Compact toward the target edge, preserving order. A value landing
    // on a slot that holds something else means a tile moved.
    let mut len = 0;
    for j in 0..GRID_SIZE {
        let val = grid.0[cells[j]];
        if val == 0 {
            continue;
        }
        if grid.0[cells[len]] != val {
            grid.0[cells[len]] = val;
            moved = true;
        }
        len += 1;
    }

    // Merge pass: the first adjacent equal pair from the target edge
    // wins, then the scan stops. At most one merge per line per move;
    // a run like [2,2,2,2] resolves only its first pair.
    let mut points: Score = 0;
    for j in 0..len.saturating_sub(1) {
        let val = grid.0[cells[j]];
        if val != 0 && val == grid.0[cells[j + 1]] {
            let doubled = val * 2;
            grid.0[cells[j]] = doubled;
            grid.0[cells[j + 1]] = 0;
            points = Score::from(doubled);
            moved = true;
            break;
        }
    }

    // Close the merge gap and zero-fill the rest of the line.
    let mut fill = 0;
    for j in 0..len {
        let val = grid.0[cells[j]];
        if val == 0 {
            continue;
        }
        grid.0[cells[fill]] = val;
        fill += 1;
    }
    for j in fill..GRID_SIZE {
        grid.0[cells[j]] = 0;
    }

    (moved, points)
}

/// True when some horizontally or vertically adjacent pair holds equal
/// values. Only meaningful on a full grid; empty cells would compare
/// equal to each other too.
pub(crate) fn has_adjacent_pair(grid: &Grid) -> bool {
    for i in 0..GRID_SIZE {
        for j in 0..GRID_SIZE - 1 {
            if grid.at(i, j) == grid.at(i, j + 1) {
                return true;
            }
            if grid.at(j, i) == grid.at(j + 1, i) {
                return true;
            }
        }
    }
    false
}

/// Rebuild the empty-cell list by a full row-major scan.
pub(crate) fn collect_empty(grid: &Grid, out: &mut Vec<usize>) {
    out.clear();
    out.extend(
        grid.0
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| i),
    );
}
