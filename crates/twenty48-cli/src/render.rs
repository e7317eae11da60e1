//! Frame rendering: instructions, grid, and the game-over banner.
//!
//! Raw mode is active while frames are drawn, so every line ends with an
//! explicit carriage return.

use std::io::Write;

use crossterm::{cursor, execute, terminal};
use twenty48_core::engine::{Game, Grid, Score};

/// Clear the screen and draw a full frame for the current state.
pub fn draw_frame(out: &mut impl Write, game: &mut Game) -> anyhow::Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    draw_manual(out)?;
    draw_grid(out, game.grid())?;
    if game.is_game_over() {
        draw_game_over(out, game.score())?;
    }
    out.flush()?;
    Ok(())
}

fn draw_manual(out: &mut impl Write) -> anyhow::Result<()> {
    write!(out, "TWENTY48\r\n")?;
    write!(out, "Manual:\r\n")?;
    write!(out, "  Press 'h'/'j'/'k'/'l' to move left/down/up/right;\r\n")?;
    write!(out, "  Press 'R' to Restart;\r\n")?;
    write!(out, "  Press 'Q' to Quit;\r\n\r\n")?;
    Ok(())
}

fn draw_grid(out: &mut impl Write, grid: &Grid) -> anyhow::Result<()> {
    for row in grid.rows() {
        write!(out, "\t")?;
        for &tile in row {
            if tile == 0 {
                write!(out, "-     ")?;
            } else {
                write!(out, "{:<6}", tile)?;
            }
        }
        write!(out, "\r\n")?;
    }
    write!(out, "\r\n")?;
    Ok(())
}

fn draw_game_over(out: &mut impl Write, score: Score) -> anyhow::Result<()> {
    write!(out, "Game Over!\r\n")?;
    write!(out, "Your score is {}!\r\n", score)?;
    write!(out, "Press 'R' to Restart or 'Q' to Quit!\r\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cells_render_left_aligned_with_placeholder() {
        let grid = Grid::from([
            2, 0, 16, 1024, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let mut buf = Vec::new();
        draw_grid(&mut buf, &grid).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("\t2     -     16    1024  "));
        assert_eq!(lines.next(), Some("\t-     -     -     -     "));
    }

    #[test]
    fn game_over_banner_includes_the_score() {
        let mut buf = Vec::new();
        draw_game_over(&mut buf, 1234).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Game Over!"));
        assert!(text.contains("Your score is 1234!"));
    }
}
