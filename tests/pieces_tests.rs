//! Piece model tests - spawning, movement and rotation

use blockfall::core::pieces::{get_spawn_shape, template};
use blockfall::core::{SimpleRng, Tetromino};
use blockfall::types::{PieceKind, PIECE_COLORS, SPAWN_X};
use rand::rngs::mock::StepRng;

fn bits(piece: &Tetromino) -> Vec<Vec<u8>> {
    piece.shape().to_bits()
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_invariants_for_many_seeds() {
    for seed in 0..500u32 {
        let piece = Tetromino::spawn(&mut SimpleRng::new(seed));
        let kind = piece.kind();
        let expected = template(kind);

        assert!(piece.shape_index() <= 6);
        assert_eq!(piece.shape().rows(), expected.len(), "seed {}", seed);
        assert_eq!(piece.shape().cols(), expected[0].len(), "seed {}", seed);
        assert_eq!(piece.x(), SPAWN_X);
        assert_eq!(piece.y(), -(expected.len() as i32));
        assert_eq!(piece.color(), PIECE_COLORS[piece.shape_index()]);
    }
}

#[test]
fn test_spawn_covers_every_kind() {
    let mut rng = SimpleRng::new(12345);
    let mut seen = [false; PieceKind::COUNT];
    for _ in 0..700 {
        seen[Tetromino::spawn(&mut rng).shape_index()] = true;
    }
    assert!(seen.iter().all(|&s| s), "kinds seen: {:?}", seen);
}

#[test]
fn test_spawn_sequence_repeats_for_seed() {
    let kinds = |seed| {
        let mut rng = SimpleRng::new(seed);
        (0..20)
            .map(|_| Tetromino::spawn(&mut rng).kind())
            .collect::<Vec<_>>()
    };
    assert_eq!(kinds(31337), kinds(31337));
}

#[test]
fn test_spawn_with_fixed_source() {
    // An all-zero source always selects shape index 0.
    let mut rng = StepRng::new(0, 0);
    let piece = Tetromino::spawn(&mut rng);
    assert_eq!(piece.kind(), PieceKind::I);
    assert_eq!(bits(&piece), vec![vec![1, 1, 1, 1]]);
    assert_eq!(piece.position(), (3, -1));
}

#[test]
fn test_new_matches_template_for_every_kind() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        let expected: Vec<Vec<u8>> = template(kind).iter().map(|r| r.to_vec()).collect();
        assert_eq!(bits(&piece), expected, "{:?}", kind);
        assert_eq!(piece.color(), kind.color());
    }
}

#[test]
fn test_pieces_do_not_share_rows() {
    let mut a = Tetromino::new(PieceKind::T);
    let b = Tetromino::new(PieceKind::T);

    a.rotate_cw();

    assert_eq!(b.shape(), &get_spawn_shape(PieceKind::T));
    assert_eq!(bits(&b), vec![vec![1, 1, 1], vec![0, 1, 0]]);
    assert_eq!(template(PieceKind::T)[0], &[1, 1, 1]);
    assert_eq!(template(PieceKind::T)[1], &[0, 1, 0]);
    assert_ne!(a.shape(), b.shape());
}

// ============== Movement Tests ==============

#[test]
fn test_move_composes() {
    let mut stepped = Tetromino::new(PieceKind::Z);
    stepped.move_by(1, 0);
    stepped.move_by(2, 3);

    let mut single = Tetromino::new(PieceKind::Z);
    single.move_by(3, 3);

    assert_eq!(stepped.position(), single.position());
    assert_eq!(stepped.position(), (6, 1));
}

#[test]
fn test_move_is_unbounded() {
    let mut piece = Tetromino::new(PieceKind::O);
    piece.move_by(-100, 1000);
    assert_eq!(piece.position(), (-97, 998));
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        for direction in [1, 0, -1] {
            let mut piece = Tetromino::new(kind);
            let (rows, cols) = piece.shape().dimensions();
            piece.rotate(direction);
            assert_eq!(
                piece.shape().dimensions(),
                (cols, rows),
                "{:?} direction {}",
                kind,
                direction
            );
        }
    }
}

#[test]
fn test_o_piece_rotation_invariant() {
    let spawn = get_spawn_shape(PieceKind::O);
    let mut piece = Tetromino::new(PieceKind::O);
    for direction in [1, 1, -1, 0, 1, -3, -1, 2] {
        piece.rotate(direction);
        assert_eq!(piece.shape(), &spawn);
    }
}

#[test]
fn test_l_rotation_vectors() {
    let mut cw = Tetromino::new(PieceKind::L);
    cw.rotate_cw();
    assert_eq!(bits(&cw), vec![vec![1, 1], vec![0, 1], vec![0, 1]]);

    let mut ccw = Tetromino::new(PieceKind::L);
    ccw.rotate_ccw();
    assert_eq!(bits(&ccw), vec![vec![1, 0], vec![1, 0], vec![1, 1]]);
}

#[test]
fn test_i_rotation_vectors() {
    let mut piece = Tetromino::new(PieceKind::I);
    piece.rotate_cw();
    assert_eq!(bits(&piece), vec![vec![1], vec![1], vec![1], vec![1]]);
    piece.rotate_cw();
    assert_eq!(bits(&piece), vec![vec![1, 1, 1, 1]]);
}

#[test]
fn test_s_rotation_vectors() {
    let mut piece = Tetromino::new(PieceKind::S);
    piece.rotate_cw();
    assert_eq!(bits(&piece), vec![vec![0, 1], vec![1, 1], vec![1, 0]]);
}

/// Clockwise is transpose + reverse each row; counter-clockwise is transpose +
/// reverse row order. Pin what that pair does on every template.
#[test]
fn test_rotation_pair_round_trips() {
    for kind in PieceKind::ALL {
        let spawn = get_spawn_shape(kind);

        let mut piece = Tetromino::new(kind);
        piece.rotate_cw();
        piece.rotate_ccw();
        assert_eq!(piece.shape(), &spawn, "cw then ccw, {:?}", kind);

        piece.rotate_ccw();
        piece.rotate_cw();
        assert_eq!(piece.shape(), &spawn, "ccw then cw, {:?}", kind);
    }
}

#[test]
fn test_four_turns_are_identity() {
    for kind in PieceKind::ALL {
        let spawn = get_spawn_shape(kind);
        let mut cw = Tetromino::new(kind);
        let mut ccw = Tetromino::new(kind);
        for _ in 0..4 {
            cw.rotate_cw();
            ccw.rotate_ccw();
        }
        assert_eq!(cw.shape(), &spawn, "{:?}", kind);
        assert_eq!(ccw.shape(), &spawn, "{:?}", kind);
    }
}

#[test]
fn test_cw_equals_three_ccw() {
    for kind in PieceKind::ALL {
        let mut cw = Tetromino::new(kind);
        cw.rotate_cw();

        let mut ccw = Tetromino::new(kind);
        for _ in 0..3 {
            ccw.rotate_ccw();
        }
        assert_eq!(cw.shape(), ccw.shape(), "{:?}", kind);
    }
}

#[test]
fn test_rotation_keeps_cell_count_and_anchor() {
    let mut piece = Tetromino::new(PieceKind::J);
    piece.move_by(4, 10);
    for _ in 0..7 {
        piece.rotate_cw();
        assert_eq!(piece.shape().filled_count(), 4);
        assert_eq!(piece.cells().count(), 4);
        assert_eq!(piece.position(), (7, 8));
    }
}
