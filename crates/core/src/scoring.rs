//! Scoring module - classic line-clear points, no level multiplier.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows in a single merge.
///
/// A merge completes at most four rows; larger counts (scripted boards) score
/// as four.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}
