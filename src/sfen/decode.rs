use log::trace;

use crate::error::{Error, Result};
use crate::moves::Move;
use crate::position::Position;
use crate::shogi::*;

/// sfen 局面文字列 `"<盤面> <手番> <手駒> <手数>"` をデコードし、局面を返す。
/// 構文はチェックするが、合法性チェックは一切行わない。
///
/// 文字列の先頭と末尾の空白は無視される。
pub fn sfen_decode_position(s: impl AsRef<str>) -> Result<Position> {
    // 先頭と末尾の空白は無視する。
    let s = s.as_ref().trim();

    let tokens: Vec<&str> = s.split_ascii_whitespace().collect();
    let (board_s, side_s, hands_s, ply_s) = match tokens.as_slice() {
        [board_s, side_s, hands_s, ply_s] => (*board_s, *side_s, *hands_s, *ply_s),
        _ => return Err(Error::PositionFieldCount(tokens.len())),
    };

    let board = sfen_decode_board(board_s)?;
    let side_to_move = sfen_decode_side(side_s)?;
    let hands = sfen_decode_hands(hands_s)?;
    let ply = sfen_decode_ply(ply_s)?;

    trace!("decoded position: {}", s);

    Ok(Position::new(side_to_move, board, hands, ply))
}

/// sfen 盤面文字列をデコードし、その盤面を返す。合法性チェックは一切行わない。
fn sfen_decode_board(s: &str) -> Result<Board> {
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != 9 {
        return Err(Error::BoardRowCount(rows.len()));
    }

    let mut board = Board::empty();

    for (row, row_s) in rows.into_iter().enumerate() {
        sfen_decode_board_row(row_s, row, &mut board)?;
    }

    Ok(board)
}

fn sfen_decode_board_row(s: &str, row: usize, board: &mut Board) -> Result<()> {
    #[derive(Debug)]
    struct State<'a> {
        board: &'a mut Board,
        row: usize,
        col: usize,
        promo: bool,
    }
    impl<'a> State<'a> {
        fn new(board: &'a mut Board, row: usize) -> Self {
            Self {
                board,
                row,
                col: 0,
                promo: false,
            }
        }
        /// 1 文字処理する。エラーの中身は呼び出し側で付ける。
        fn update(&mut self, c: char) -> std::result::Result<(), RowError> {
            match c {
                '+' => {
                    if self.promo {
                        return Err(RowError::Piece);
                    }
                    self.promo = true;
                }
                '1'..='9' => {
                    if self.promo {
                        return Err(RowError::Piece);
                    }
                    self.advance(c as usize - '0' as usize)?;
                }
                _ => {
                    let pc = Piece::from_sfen(c, self.promo).ok_or(RowError::Piece)?;
                    let col = self.col;
                    self.advance(1)?;
                    self.board[Square::from_row_col(self.row, col)] = pc;
                    self.promo = false;
                }
            }
            Ok(())
        }
        fn finalize(&self) -> std::result::Result<(), RowError> {
            if self.promo {
                return Err(RowError::Piece);
            }
            if self.col != 9 {
                return Err(RowError::Width);
            }
            Ok(())
        }
        fn advance(&mut self, n: usize) -> std::result::Result<(), RowError> {
            if self.col + n > 9 {
                return Err(RowError::Width);
            }
            self.col += n;
            Ok(())
        }
    }

    enum RowError {
        Piece,
        Width,
    }

    let to_error = |e: RowError| match e {
        RowError::Piece => Error::BoardPiece(s.to_owned()),
        RowError::Width => Error::BoardRowWidth(s.to_owned()),
    };

    let mut state = State::new(board, row);
    for c in s.chars() {
        state.update(c).map_err(to_error)?;
    }
    state.finalize().map_err(to_error)?;

    Ok(())
}

/// sfen 手番文字列をデコードし、手番の陣営を返す。
fn sfen_decode_side(s: &str) -> Result<Side> {
    match s {
        "b" => Ok(BLACK),
        "w" => Ok(WHITE),
        _ => Err(Error::Turn(s.to_owned())),
    }
}

/// sfen 手駒文字列をデコードし、両陣営の手駒を返す。合法性チェックは一切行わない。
///
/// 各トークンは省略可能な枚数(省略時 1)と駒の 1 文字からなる。
/// 同じ駒が複数回現れた場合は最後のものが有効になる。
fn sfen_decode_hands(s: &str) -> Result<Hands> {
    let mut hands = Hands::empty();

    if s == "-" {
        return Ok(hands);
    }

    let err = || Error::HandString(s.to_owned());

    let mut count: Option<u32> = None;
    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            let n = count.unwrap_or(0);
            let n = n.checked_mul(10).and_then(|n| n.checked_add(d));
            count = Some(n.ok_or_else(err)?);
            continue;
        }

        let side = if c.is_ascii_lowercase() { WHITE } else { BLACK };
        let pk = PieceKind::from_sfen(c.to_ascii_uppercase())
            .filter(|pk| pk.is_hand())
            .ok_or_else(err)?;
        hands[side][pk] = count.take().unwrap_or(1);
    }

    if count.is_some() {
        return Err(err());
    }

    Ok(hands)
}

/// sfen 手数文字列をデコードし、その手数を返す。
fn sfen_decode_ply(s: &str) -> Result<u32> {
    s.parse().map_err(|_| Error::PlyString(s.to_owned()))
}

/// sfen 指し手文字列をデコードし、その指し手を返す。
/// 構文はチェックするが、合法性チェックは一切行わない。
///
/// 文字列の先頭と末尾の空白は無視される。
pub fn sfen_decode_move(s: impl AsRef<str>) -> Result<Move> {
    s.as_ref().trim().parse()
}
