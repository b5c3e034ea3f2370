//! Piece tests - templates, rotation and the active piece

use blockfall::core::{get_shape, ActivePiece, PieceGenerator};
use blockfall::types::{PieceKind, COLUMNS};

#[test]
fn test_every_template_carries_its_id() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        let filled: Vec<_> = shape.filled_cells().collect();
        assert_eq!(filled.len(), 4, "{:?} should have 4 cells", kind);
        assert!(filled.iter().all(|&(_, _, v)| v == kind.id()));
    }
}

#[test]
fn test_templates_are_distinct_under_rotation() {
    // Compare filled-cell patterns, ignoring the id each template carries.
    let pattern = |kind: PieceKind, turns: usize| {
        let mut shape = get_shape(kind);
        for _ in 0..turns {
            shape = shape.rotate_cw();
        }
        shape
            .filled_cells()
            .map(|(dx, dy, _)| (dx, dy))
            .collect::<Vec<_>>()
    };

    for (i, &a) in PieceKind::ALL.iter().enumerate() {
        for &b in &PieceKind::ALL[i + 1..] {
            for turns in 0..4 {
                assert_ne!(pattern(a, 0), pattern(b, turns), "{:?} vs {:?}", a, b);
            }
        }
    }
}

#[test]
fn test_j_mirrors_l() {
    let j = get_shape(PieceKind::J);
    let l = get_shape(PieceKind::L);
    for y in 0..j.rows() {
        let mirrored: Vec<_> = l.row(y).iter().rev().map(|&v| v != 0).collect();
        let filled: Vec<_> = j.row(y).iter().map(|&v| v != 0).collect();
        assert_eq!(filled, mirrored);
    }
}

#[test]
fn test_o_rotation_is_invariant() {
    let o = get_shape(PieceKind::O);
    assert_eq!(o.rotate_cw(), o);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        let back = shape.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    let i = get_shape(PieceKind::I);
    assert_eq!((i.rows(), i.cols()), (1, 4));

    let vertical = i.rotate_cw();
    assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
}

#[test]
fn test_t_rotates_clockwise() {
    // [0 2 0]      [2 0]
    // [2 2 2]  ->  [2 2]
    //              [2 0]
    let t = get_shape(PieceKind::T).rotate_cw();
    assert_eq!(t.row(0), &[2, 0]);
    assert_eq!(t.row(1), &[2, 2]);
    assert_eq!(t.row(2), &[2, 0]);
}

#[test]
fn test_spawn_is_centred_at_top() {
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind);
        let w = piece.matrix.cols() as i8;
        assert_eq!(piece.y, 0);
        assert_eq!(piece.x, COLUMNS as i8 / 2 - w / 2);
    }
}

#[test]
fn test_active_cells_are_offset_by_position() {
    let piece = ActivePiece::at(PieceKind::I, 3, 7);
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(3, 7, 5), (4, 7, 5), (5, 7, 5), (6, 7, 5)]);
}

#[test]
fn test_generator_is_reproducible() {
    let mut a = PieceGenerator::new(99);
    let mut b = PieceGenerator::new(99);
    for _ in 0..50 {
        assert_eq!(a.next_kind(), b.next_kind());
    }
}
