//! Collision detection - the single validity check for every positional change.

use crate::board::Board;
use crate::pieces::ActivePiece;
use crate::types::{COLUMNS, ROWS};

/// Whether `piece` overlaps a settled cell or leaves the grid.
///
/// A filled cell collides when its column is outside `0..COLUMNS`, its row is
/// at or below `ROWS`, or the board cell under it is non-zero. Rows above the
/// top edge (negative) are only checked against the column bounds.
pub fn collides(board: &Board, piece: &ActivePiece) -> bool {
    piece
        .cells()
        .any(|(x, y, _)| cell_collides(board, x, y))
}

#[inline(always)]
fn cell_collides(board: &Board, x: i8, y: i8) -> bool {
    if x < 0 || x as usize >= COLUMNS {
        return true;
    }
    if y < 0 {
        return false;
    }
    if y as usize >= ROWS {
        return true;
    }
    board.is_occupied(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn spawned_piece_on_empty_board_is_free() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&board, &ActivePiece::spawn(kind)));
        }
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        assert!(collides(&board, &ActivePiece::at(PieceKind::O, -1, 0)));
        assert!(collides(&board, &ActivePiece::at(PieceKind::O, 11, 0)));
        assert!(collides(&board, &ActivePiece::at(PieceKind::O, 0, 19)));
        assert!(!collides(&board, &ActivePiece::at(PieceKind::O, 10, 18)));
    }

    #[test]
    fn rows_above_the_top_only_check_columns() {
        let board = Board::new();
        assert!(!collides(&board, &ActivePiece::at(PieceKind::O, 0, -2)));
        assert!(!collides(&board, &ActivePiece::at(PieceKind::I, 4, -1)));
        assert!(collides(&board, &ActivePiece::at(PieceKind::I, 9, -1)));
    }

    #[test]
    fn settled_cells_collide() {
        let mut board = Board::new();
        board.set(6, 1, 3);
        // T at (5,0): [0,2,0] / [2,2,2] covers (6,0) and (5..=7,1)
        assert!(collides(&board, &ActivePiece::at(PieceKind::T, 5, 0)));
        // Shape's empty corner over an occupied cell is fine
        board.clear();
        board.set(5, 0, 3);
        assert!(!collides(&board, &ActivePiece::at(PieceKind::T, 5, 0)));
    }
}
