use std::fmt::Write as _;

use crate::moves::Move;
use crate::position::Position;
use crate::shogi::*;

/// 局面を sfen 局面文字列 `"<盤面> <手番> <手駒> <手数>"` にエンコードする。
/// 合法性チェックは一切行わない。
pub fn sfen_encode_position(pos: &Position) -> String {
    let mut s = String::new();

    sfen_encode_board(pos.board(), &mut s);
    s.push(' ');

    s.push(pos.side_to_move().to_sfen());
    s.push(' ');

    sfen_encode_hands(pos.hands(), &mut s);
    s.push(' ');

    write!(s, "{}", pos.ply()).unwrap();

    s
}

/// 盤面を sfen 盤面文字列にエンコードし、既存の文字列に追記する。
fn sfen_encode_board(board: &Board, s: &mut String) {
    for row in 0..9 {
        if row != 0 {
            s.push('/');
        }

        let mut run_blank = 0;
        for col in 0..9 {
            let pc = board[Square::from_row_col(row, col)];
            if pc == NO_PIECE {
                run_blank += 1;
                continue;
            }
            if run_blank > 0 {
                write!(s, "{}", run_blank).unwrap();
                run_blank = 0;
            }
            write!(s, "{}", pc).unwrap();
        }
        if run_blank > 0 {
            write!(s, "{}", run_blank).unwrap();
        }
    }
}

/// 両陣営の手駒を sfen 手駒文字列にエンコードし、既存の文字列に追記する。
///
/// 先手、後手の順に、駒種は飛、角、金、銀、桂、香、歩の順に並べる。
fn sfen_encode_hands(hands: &Hands, s: &mut String) {
    if hands.is_empty() {
        s.push('-');
        return;
    }

    for side in Side::iter() {
        for pk in PieceKind::iter_hand() {
            let n = hands[side][pk];
            if n == 0 {
                continue;
            }

            if n >= 2 {
                write!(s, "{}", n).unwrap();
            }
            write!(s, "{}", Piece::new(side, pk)).unwrap();
        }
    }
}

/// 指し手を sfen 指し手文字列にエンコードする。
pub fn sfen_encode_move(mv: Move) -> String {
    mv.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sfen::sfen_decode_position;

    #[test]
    fn test_roundtrip() {
        for sfen in [
            crate::STARTPOS_SFEN,
            "8l/1+R7/9/4k4/9/9/9/9/+p3K4 w RB2G10Pn2l 25",
            "9/9/9/9/9/9/9/9/9 b - 0",
        ] {
            let pos = sfen_decode_position(sfen).unwrap();
            assert_eq!(sfen_encode_position(&pos), sfen);
        }
    }

    #[test]
    fn test_encode_move() {
        let mv = Move::new_drop(
            KNIGHT,
            Square::from_file_rank(3, 3).unwrap(),
        );
        assert_eq!(sfen_encode_move(mv), "N*3c");
    }
}
