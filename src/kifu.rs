//! 日本語棋譜表記。
//!
//! 1 手ぶんの表記は `<手番記号><筋><段><駒名>[成](<移動元>)` の形をとる。
//! 例: "▲7六歩(77)", "△2二銀(31)", "▲5五角(--)"(駒打ち)。

use log::debug;

use crate::moves::Move;
use crate::shogi::*;

/// 段の漢数字。一段目から順に並ぶ。
const RANK_KANJI: [&str; 9] = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 1 手ぶんの棋譜。`Display` で棋譜文字列になる。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct KifuMove {
    side_to_move: Side,
    mv: Move,
    piece: Piece,
}

impl KifuMove {
    /// `side_to_move` は指し手を適用した *後* の手番、`piece` は動かす前の駒。
    pub fn new(side_to_move: Side, mv: Move, piece: Piece) -> Self {
        Self {
            side_to_move,
            mv,
            piece,
        }
    }

    pub fn mv(&self) -> Move {
        self.mv
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// 手番記号を返す。
    ///
    /// 指した後の手番で決める: 先手番になったなら "△"、後手番になったなら "▲"。
    pub fn marker(&self) -> &'static str {
        if self.side_to_move == BLACK {
            "△"
        } else {
            "▲"
        }
    }
}

impl std::fmt::Display for KifuMove {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let dst = self.mv.dst();

        f.write_str(self.marker())?;
        write!(f, "{}{}", dst.file(), RANK_KANJI[dst.row()])?;
        // 駒名は成りを含めて引く。
        write!(f, "{}", self.piece.kind())?;

        if self.mv.is_promotion() {
            f.write_str("成")?;
        }

        match self.mv.src() {
            Some(src) => write!(f, "({}{})", src.file(), src.rank()),
            None => f.write_str("(--)"),
        }
    }
}

/// 直前の手と同じマスに指した手を "同" 表記に書き換える。
///
/// 末尾から先頭に向かって走査し、各要素の 1..3 文字目(筋と段)を直前の要素のそれと比較する。
/// 一致したら手番記号を残して筋と段を "同" に置き換える。
/// 書き換えはその場で行う。書き換えた要素が以降の比較に使われることはない。
pub fn compress_same_square(kifus: &mut [String]) {
    for i in (1..kifus.len()).rev() {
        if dst_span(&kifus[i]) != dst_span(&kifus[i - 1]) {
            continue;
        }

        let marker: String = kifus[i].chars().take(1).collect();
        let rest: String = kifus[i].chars().skip(3).collect();
        let rewritten = format!("{}同{}", marker, rest);
        debug!("same square: {} -> {}", kifus[i], rewritten);

        kifus[i] = rewritten;
    }
}

/// 棋譜文字列の筋と段の部分(手番記号の直後の 2 文字)を返す。
fn dst_span(kifu: &str) -> String {
    kifu.chars().skip(1).take(2).collect()
}
