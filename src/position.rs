use log::debug;

use crate::error::{Error, Result};
use crate::kifu::KifuMove;
use crate::moves::Move;
use crate::sfen::{sfen_decode_position, sfen_encode_position};
use crate::shogi::*;

/// 平手初期局面の sfen 局面文字列。
pub const STARTPOS_SFEN: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// 局面。
///
/// 指し手を適用するたびにその場で更新される。合法性は一切問わない。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    board: Board,
    hands: Hands,
    side_to_move: Side,
    ply: u32,
}

impl Position {
    /// 手番、盤面、両陣営の手駒、手数を指定して局面を作る。
    /// 合法性チェックは一切行わない。
    pub fn new(side_to_move: Side, board: Board, hands: Hands, ply: u32) -> Self {
        Self {
            board,
            hands,
            side_to_move,
            ply,
        }
    }

    /// 平手初期局面を返す。
    pub fn startpos() -> Self {
        // 定数文字列のデコードは失敗しない。
        sfen_decode_position(STARTPOS_SFEN).unwrap()
    }

    /// sfen 局面文字列から局面を作る。
    pub fn from_sfen(s: impl AsRef<str>) -> Result<Self> {
        sfen_decode_position(s)
    }

    /// sfen 局面文字列を返す。
    pub fn to_sfen(&self) -> String {
        sfen_encode_position(self)
    }

    /// 手数を返す。
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// 手番を返す。
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// 盤面への参照を返す。
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 両陣営の手駒への参照を返す。
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    /// 指定した陣営の手駒への参照を返す。
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    /// sfen 指し手文字列を適用する。
    /// `want_kifu` が真なら、その指し手の棋譜文字列を返す。
    pub fn apply(&mut self, s: &str, want_kifu: bool) -> Result<Option<String>> {
        let mv: Move = s.parse()?;
        let kifu = self.do_move(mv)?;

        Ok(want_kifu.then(|| kifu.to_string()))
    }

    /// 指し手で局面を進め、棋譜生成用の情報を返す。
    ///
    /// 失敗する条件は全て局面を変更する前に判定するので、
    /// エラーを返した場合の局面は呼び出し前と変わらない。
    ///
    /// * 駒打ちの場合、手番側の手駒にその駒がなければならない。
    /// * 盤上の駒を動かす場合、移動元に駒がなければならない。
    /// * 移動先に駒があれば、それは相手の駒かつ玉以外でなければならない(駒打ちでも同様)。
    /// * 成る場合、動かす駒は成れる駒でなければならない。
    pub fn do_move(&mut self, mv: Move) -> Result<KifuMove> {
        let us = self.side_to_move;
        let dst = mv.dst();

        // 移動元の駒を求める。
        let pc_src = match mv {
            Move::Drop { kind, .. } => {
                let pc = Piece::new(us, kind);
                if !kind.is_hand() || self.hands[us][kind] == 0 {
                    return Err(Error::EmptyHand(pc));
                }
                pc
            }
            Move::Walk { src, .. } => {
                let pc = self.board[src];
                if pc == NO_PIECE {
                    return Err(Error::EmptySource(src));
                }
                pc
            }
        };

        // 移動先の駒。移動元と移動先が同じなら、移動元は既に空いているものとして扱う。
        let pc_captured = match mv {
            Move::Walk { src, .. } if src == dst => NO_PIECE,
            _ => self.board[dst],
        };
        if pc_captured != NO_PIECE {
            if pc_captured.side() == us {
                return Err(Error::CaptureOwnPiece(dst));
            }
            if pc_captured.kind() == KING {
                return Err(Error::CaptureKing(dst));
            }
        }

        // 移動後の駒を求める(成りの場合は成るということ)。
        let pc_dst = if mv.is_promotion() {
            if pc_src.is_promoted() {
                return Err(Error::AlreadyPromoted(pc_src));
            }
            if !pc_src.kind().is_promotable() {
                return Err(Error::NotPromotable(pc_src));
            }
            pc_src.to_promoted()
        } else {
            pc_src
        };

        // ここから先は失敗しない。
        match mv {
            Move::Drop { kind, .. } => self.hands[us][kind] -= 1,
            Move::Walk { src, .. } => self.board[src] = NO_PIECE,
        }
        if pc_captured != NO_PIECE {
            self.hands[us][pc_captured.to_raw_kind()] += 1;
        }
        self.board[dst] = pc_dst;

        self.side_to_move = self.side_to_move.inv();
        self.ply += 1;

        let kifu = KifuMove::new(self.side_to_move, mv, pc_src);
        debug!("ply {}: {} {}", self.ply - 1, mv, kifu);

        Ok(kifu)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "後手 手駒: {}", self.hands[WHITE])?;
        write!(f, "{}", self.board)?;
        writeln!(f, "先手 手駒: {}", self.hands[BLACK])?;
        writeln!(f, "手番: {}", self.side_to_move)?;
        writeln!(f, "手数: {}", self.ply)?;

        Ok(())
    }
}
