//! Pieces module - shape matrices and the active piece
//!
//! Every piece is a small matrix of cell values: `0` is empty, every filled
//! cell carries the piece's id. Rotation derives a new matrix (transpose, then
//! reverse the rows); templates are never mutated.

use crate::types::{Cell, PieceKind, COLUMNS, EMPTY, PIECE_KINDS};

/// Largest side of any shape matrix (the I piece is 1x4 / 4x1)
pub const MAX_SHAPE_DIM: usize = 4;

/// A rows x cols matrix of cell values, stored in a fixed 4x4 block.
///
/// Cells outside `rows x cols` are always empty, so derived `PartialEq`
/// compares patterns exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[Cell; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from row slices. All rows must have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::ShapeMatrix;
    ///
    /// let s = ShapeMatrix::from_rows(&[&[0, 3, 3], &[3, 3, 0]]);
    /// assert_eq!((s.rows(), s.cols()), (2, 3));
    /// assert_eq!(s.get(1, 0), 3);
    /// ```
    pub const fn from_rows(rows: &[&[Cell]]) -> Self {
        let h = rows.len();
        assert!(h > 0 && h <= MAX_SHAPE_DIM);
        let w = rows[0].len();
        assert!(w > 0 && w <= MAX_SHAPE_DIM);

        let mut cells = [[EMPTY; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < h {
            assert!(rows[y].len() == w);
            let mut x = 0;
            while x < w {
                cells[y][x] = rows[y][x];
                x += 1;
            }
            y += 1;
        }

        Self {
            rows: h as u8,
            cols: w as u8,
            cells,
        }
    }

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Cell at column `x`, row `y`. Empty outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols() || y >= self.rows() {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Filled cells as `(dx, dy, value)` offsets from the top-left corner
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        (0..self.rows()).flat_map(move |y| {
            (0..self.cols()).filter_map(move |x| {
                let v = self.cells[y][x];
                (v != EMPTY).then_some((x as i8, y as i8, v))
            })
        })
    }

    /// Rows as slices trimmed to the matrix width
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y][..self.cols()]
    }

    /// Clockwise quarter turn: transpose and reverse the rows.
    ///
    /// Row `i` of the result is column `i` of `self` read bottom to top.
    pub fn rotate_cw(&self) -> Self {
        let (h, w) = (self.rows(), self.cols());
        let mut cells = [[EMPTY; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(w) {
            for (j, out) in out_row.iter_mut().enumerate().take(h) {
                *out = self.cells[h - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Canonical templates, indexed by `PieceKind::id() - 1`.
///
/// Seven distinct shapes, so a uniform draw gives each one a 1/7 chance.
/// Slot 6 is a real J (the mirror of L), not a second T: T is intentionally
/// not drawn twice as often as the others.
const SHAPES: [ShapeMatrix; PIECE_KINDS] = [
    // O
    ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
    // T
    ShapeMatrix::from_rows(&[&[0, 2, 0], &[2, 2, 2]]),
    // S
    ShapeMatrix::from_rows(&[&[0, 3, 3], &[3, 3, 0]]),
    // Z
    ShapeMatrix::from_rows(&[&[4, 4, 0], &[0, 4, 4]]),
    // I
    ShapeMatrix::from_rows(&[&[5, 5, 5, 5]]),
    // J
    ShapeMatrix::from_rows(&[&[6, 6, 6], &[0, 0, 6]]),
    // L
    ShapeMatrix::from_rows(&[&[7, 7, 7], &[7, 0, 0]]),
];

/// Get the spawn-orientation template for a piece kind
pub fn get_shape(kind: PieceKind) -> ShapeMatrix {
    SHAPES[(kind.id() - 1) as usize]
}

/// Column at which a shape of the given width spawns
pub fn spawn_x(shape_width: usize) -> i8 {
    (COLUMNS / 2) as i8 - (shape_width / 2) as i8
}

/// The currently falling piece: a shape plus the board position of its
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of `kind` at its canonical spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = get_shape(kind);
        Self {
            kind,
            matrix,
            x: spawn_x(matrix.cols()),
            y: 0,
        }
    }

    /// Place an arbitrary piece (fixtures and replays)
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            matrix: get_shape(kind),
            x,
            y,
        }
    }

    /// Board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.matrix
            .filled_cells()
            .map(move |(dx, dy, v)| (self.x + dx, self.y + dy, v))
    }
}
