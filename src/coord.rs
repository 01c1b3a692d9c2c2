//! 座標文字列("7f", "P*" など)と内部表現の相互変換。

use crate::error::{Error, Result};
use crate::shogi::*;

/// 座標文字列の解釈結果。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Coord {
    /// 盤上のマス。
    Square(Square),
    /// 駒打ちの打つ駒種(陣営の区別なし)。
    Drop(PieceKind),
}

/// 2 文字の座標文字列を解釈する。
///
/// 2 文字目が '*' なら 1 文字目を打つ駒種とみなす(P, L, N, S, G, B, R, K のみ)。
/// そうでなければ `<筋 1-9><段 a-i>` のマス表記とみなす。
pub fn resolve(s: &str) -> Result<Coord> {
    let mut it = s.chars();
    match (it.next(), it.next(), it.next()) {
        (Some(c0), Some(c1), None) => resolve_chars(c0, c1),
        _ => Err(Error::CoordinateLength(s.to_owned())),
    }
}

/// `resolve()` の文字単位版。指し手文字列のデコードから直接呼ばれる。
pub(crate) fn resolve_chars(c0: char, c1: char) -> Result<Coord> {
    if c1 == '*' {
        return PieceKind::from_sfen(c0)
            .map(Coord::Drop)
            .ok_or(Error::DropPiece(c0));
    }

    let file = c0.to_digit(10).unwrap_or(0);
    let rank = match c1 {
        'a'..='i' => u32::from(c1 as u8 - b'a') + 1,
        _ => 0,
    };

    Square::from_file_rank(file, rank)
        .map(Coord::Square)
        .ok_or_else(|| Error::Coordinate(format!("{}{}", c0, c1)))
}
