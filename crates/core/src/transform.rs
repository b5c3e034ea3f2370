//! Piece transforms - horizontal moves and rotation, validated by collision.
//!
//! Rejected transforms leave the piece exactly as it was. Rotation has no wall
//! kicks: it tries a clockwise turn, then the opposite quarter turn, and gives up.

use log::trace;

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::ActivePiece;

/// Shift the piece one column left (`-1`) or right (`+1`).
///
/// Returns `false` and leaves the piece untouched if the new position collides.
pub fn try_shift(board: &Board, piece: &mut ActivePiece, direction: i8) -> bool {
    debug_assert!(direction == -1 || direction == 1);

    piece.x += direction;
    if collides(board, piece) {
        piece.x -= direction;
        trace!("shift {:+} rejected at x={}", direction, piece.x);
        return false;
    }
    true
}

/// Rotate the piece a quarter turn clockwise.
///
/// If the clockwise matrix collides, the fallback is that matrix turned a
/// further half turn (three quarters from the original). If both collide the
/// original matrix and x are restored. `y` never changes.
pub fn try_rotate(board: &Board, piece: &mut ActivePiece) -> bool {
    let original = piece.matrix;
    let original_x = piece.x;

    let rotated = original.rotate_cw();
    piece.matrix = rotated;
    if !collides(board, piece) {
        return true;
    }

    piece.matrix = rotated.rotate_cw().rotate_cw();
    if !collides(board, piece) {
        trace!("rotate fell back to counter-clockwise at x={}", piece.x);
        return true;
    }

    piece.matrix = original;
    piece.x = original_x;
    trace!("rotate rejected at ({}, {})", piece.x, piece.y);
    false
}
