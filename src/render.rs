//! Text rendering of boards. Pure presentation: reads cell markers through
//! the board's accessors and holds no game logic.

use std::io::{self, Write};

use crate::board::{Board, Cell};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Whether un-hit ship cells are shown or displayed as water.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Show ship identifiers (own board, post-game reveal).
    RevealAll,
    /// Un-hit ships render as water (target boards).
    HideShips,
}

/// Glyph for one cell under the given visibility mode.
pub fn cell_glyph(cell: Cell, visibility: Visibility) -> char {
    match cell {
        Cell::Water => '~',
        Cell::Miss => 'M',
        Cell::Hit => 'H',
        Cell::Sunk => 'S',
        Cell::Ship(id) => match visibility {
            Visibility::RevealAll => id,
            Visibility::HideShips => '~',
        },
    }
}

/// Write a titled board: column header 1-10, row labels A-J.
pub fn render_board<W: Write>(
    out: &mut W,
    board: &Board,
    title: &str,
    visibility: Visibility,
) -> io::Result<()> {
    writeln!(out, "\n{}:", title)?;
    write!(out, "  ")?;
    for col in 1..=BOARD_SIZE {
        write!(out, "{} ", col)?;
    }
    writeln!(out)?;
    for row in 0..BOARD_SIZE {
        write!(out, "{} ", (b'A' + row as u8) as char)?;
        for col in 0..BOARD_SIZE {
            let glyph = cell_glyph(board.cell(Coord::new(row, col)), visibility);
            write!(out, "{} ", glyph)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
