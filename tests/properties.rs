use itertools::iproduct;
#[allow(unused_imports)]
use pretty_assertions::{assert_eq, assert_ne};

use sfen_kifu::*;

const IBISHA_SFEN: &str = "lnsgkgsnl/1r5b1/p1pppp1p1/6p1p/9/2P6/PP1PPPPPP/1B5R1/LNSGKGSNL b - 1";
const IBISHA_MOVES: &str =
    "7f7e 7a7b 1g1f 5a4b 6i7h 7b8c 2g2f 8c8d 2f2e 8d7e 2e2d 2c2d 2h2d 4a3b 2d2h P*2c";

/// 玉以外の駒の総数(盤上と両陣営の手駒の合計)を返す。
fn count_nonking(pos: &Position) -> u32 {
    let on_board = pos
        .board()
        .iter()
        .filter(|&(_, pc)| pc != NO_PIECE && pc.kind() != KING)
        .count() as u32;

    on_board + pos.hand(BLACK).count() + pos.hand(WHITE).count()
}

#[test]
fn test_row_count() {
    for n in 1..=12 {
        let board = vec!["9"; n].join("/");
        let res = Position::from_sfen(format!("{} b - 1", board));
        if n == 9 {
            assert!(res.is_ok());
        } else {
            assert_eq!(res, Err(Error::BoardRowCount(n)));
        }
    }
}

#[test]
fn test_pieces_are_conserved() {
    let mut pos = Position::from_sfen(IBISHA_SFEN).unwrap();
    let total = count_nonking(&pos);

    for mv in IBISHA_MOVES.split_ascii_whitespace() {
        pos.apply(mv, false).unwrap();
        assert_eq!(count_nonking(&pos), total, "{}", mv);
    }

    assert_eq!(pos.hand(BLACK)[PAWN], 1);
    assert_eq!(pos.hand(WHITE)[PAWN], 1);
}

#[test]
fn test_turn_alternates() {
    let mut pos = Position::from_sfen(IBISHA_SFEN).unwrap();

    for mv in IBISHA_MOVES.split_ascii_whitespace() {
        let side = pos.side_to_move();
        let ply = pos.ply();

        pos.apply(mv, false).unwrap();

        assert_eq!(pos.side_to_move(), side.inv());
        assert_eq!(pos.ply(), ply + 1);
    }

    assert_eq!(pos.ply(), 17);
}

#[test]
fn test_promotion_is_not_repeated() {
    let mut pos = Position::from_sfen("k8/9/4g4/9/4P4/9/9/9/8K b - 1").unwrap();
    let sq = |s: &str| match resolve(s).unwrap() {
        Coord::Square(sq) => sq,
        coord => panic!("unexpected coord: {:?}", coord),
    };

    pos.apply("5e5d+", false).unwrap();
    pos.apply("9a9b", false).unwrap();

    // 成駒はもう成れない。局面は変わらない。
    let pos_before = pos.clone();
    assert_eq!(
        pos.apply("5d5e+", false),
        Err(Error::AlreadyPromoted(Piece::new(BLACK, PRO_PAWN)))
    );
    assert_eq!(pos, pos_before);

    pos.apply("5d4d", false).unwrap();
    assert_eq!(pos.board()[sq("4d")], Piece::new(BLACK, PRO_PAWN));

    // 取られた成駒は成っていない駒として手駒になり、打てばまた成れる。
    pos.apply("5c4d", false).unwrap();
    assert_eq!(pos.hand(WHITE)[PAWN], 1);
    pos.apply("1i1h", false).unwrap();
    pos.apply("P*4e", false).unwrap();
    assert_eq!(pos.board()[sq("4e")], Piece::new(WHITE, PAWN));
    pos.apply("1h1g", false).unwrap();
    pos.apply("4e4f+", false).unwrap();
    assert_eq!(pos.board()[sq("4f")], Piece::new(WHITE, PRO_PAWN));
}

#[test]
fn test_capture_own_piece_fails() {
    let mut pos = Position::startpos();
    pos.apply("7g7f", false).unwrap();

    let pos_before = pos.clone();
    let err = pos.apply("8b8c", false).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::State);
    assert!(matches!(err, Error::CaptureOwnPiece(_)));
    assert_eq!(pos, pos_before);
}

/// "同" 表記の適用前後を比較する。
/// 直前の手と筋・段が一致する手だけが書き換えられていなければならない。
fn check_same_square(sfen: &str, mvs: &str) {
    let mvs: Vec<&str> = mvs.split_ascii_whitespace().collect();

    let mut pos = Position::from_sfen(sfen).unwrap();
    let opts = RunOptions {
        kifu: true,
        compress_same: false,
    };
    let raw = pos.apply_moves(&mvs, opts).unwrap().unwrap();

    let mut pos = Position::from_sfen(sfen).unwrap();
    let compressed = pos.apply_moves(&mvs, RunOptions::with_kifu()).unwrap().unwrap();

    assert_eq!(raw.len(), compressed.len());
    assert_eq!(compressed[0], raw[0]);

    let span = |s: &str| s.chars().skip(1).take(2).collect::<String>();
    for i in 1..raw.len() {
        if span(&raw[i]) == span(&raw[i - 1]) {
            assert!(compressed[i].contains('同'), "{}", compressed[i]);
            assert_eq!(
                compressed[i].chars().skip(2).collect::<String>(),
                raw[i].chars().skip(3).collect::<String>()
            );
        } else {
            assert_eq!(compressed[i], raw[i]);
        }
    }
}

#[test]
fn test_same_square_scenarios() {
    check_same_square(
        "lnsgkgsnl/1r5b1/ppppppppp/9/9/2P6/PP1PPPPPP/1B5R1/LNSGKGSNL b - 1",
        "7f7e 3c3d 2g2f 3d3e 2f2e 8c8d 2e2d",
    );
    check_same_square(IBISHA_SFEN, IBISHA_MOVES);
    check_same_square(STARTPOS_SFEN, "7g7f 3c3d 8h2b+ 3a2b B*4e B*3c 4e3c+ 2b3c");
}

#[test]
fn test_coord_bijection() {
    for (file, rank) in iproduct!(1..=9_u32, 'a'..='i') {
        let s = format!("{}{}", file, rank);

        let sq = match resolve(&s).unwrap() {
            Coord::Square(sq) => sq,
            coord => panic!("unexpected coord: {:?}", coord),
        };

        assert_eq!(sq.row(), (rank as u8 - b'a') as usize);
        assert_eq!(sq.col(), (9 - file) as usize);
        assert_eq!(sq.to_string(), s);
    }
}

#[test]
fn test_drop_exhaustion() {
    let mut pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 3P 1").unwrap();

    for (i, dst) in ["9g", "8g", "7g"].into_iter().enumerate() {
        pos.apply(&format!("P*{}", dst), false).unwrap();
        assert_eq!(pos.hand(BLACK)[PAWN], 2 - i as u32);

        let mv = if i % 2 == 0 { "5a5b" } else { "5b5a" };
        pos.apply(mv, false).unwrap();
    }

    let pos_before = pos.clone();
    let err = pos.apply("P*6g", false).unwrap_err();

    assert_eq!(err, Error::EmptyHand(Piece::new(BLACK, PAWN)));
    assert_eq!(err.kind(), ErrorKind::State);
    assert_eq!(pos, pos_before);
}
