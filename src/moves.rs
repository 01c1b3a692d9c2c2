//! 指し手。

use crate::coord::{resolve_chars, Coord};
use crate::error::{Error, Result};
use crate::shogi::*;

/// 指し手。盤上の駒を動かす手と駒打ちの 2 種類がある。
///
/// 合法性は一切問わない。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Move {
    /// 盤上の駒を動かす手。
    Walk {
        src: Square,
        dst: Square,
        promotion: bool,
    },
    /// 駒打ち。`kind` は陣営の区別なしの駒種。
    Drop { kind: PieceKind, dst: Square },
}

impl Move {
    pub const fn new_walk(src: Square, dst: Square) -> Self {
        Self::Walk {
            src,
            dst,
            promotion: false,
        }
    }

    pub const fn new_walk_promotion(src: Square, dst: Square) -> Self {
        Self::Walk {
            src,
            dst,
            promotion: true,
        }
    }

    pub const fn new_drop(kind: PieceKind, dst: Square) -> Self {
        Self::Drop { kind, dst }
    }

    /// 移動先を返す。
    pub const fn dst(self) -> Square {
        match self {
            Self::Walk { dst, .. } | Self::Drop { dst, .. } => dst,
        }
    }

    /// 移動元を返す。駒打ちなら `None`。
    pub const fn src(self) -> Option<Square> {
        match self {
            Self::Walk { src, .. } => Some(src),
            Self::Drop { .. } => None,
        }
    }

    pub const fn is_drop(self) -> bool {
        matches!(self, Self::Drop { .. })
    }

    pub const fn is_promotion(self) -> bool {
        matches!(self, Self::Walk { promotion: true, .. })
    }
}

/// sfen 指し手文字列をデコードする。
///
/// 4 文字(成らない手、駒打ち)または末尾が '+' の 5 文字(成る手)でなければならない。
impl std::str::FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let cs: Vec<char> = s.chars().collect();

        let promotion = match cs.len() {
            4 => false,
            5 if cs[4] == '+' => true,
            _ => return Err(Error::MoveLength(s.to_owned())),
        };

        let before = resolve_chars(cs[0], cs[1])?;
        let dst = match resolve_chars(cs[2], cs[3])? {
            Coord::Square(sq) => sq,
            Coord::Drop(_) => return Err(Error::MoveString(s.to_owned())),
        };

        match before {
            Coord::Square(src) => Ok(Self::Walk {
                src,
                dst,
                promotion,
            }),
            // 打った駒は成れない。
            Coord::Drop(_) if promotion => Err(Error::MoveString(s.to_owned())),
            Coord::Drop(kind) => Ok(Self::Drop { kind, dst }),
        }
    }
}

/// sfen 指し手文字列("7g7f", "2b8h+", "P*5e" など)。
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::Walk {
                src,
                dst,
                promotion,
            } => {
                write!(f, "{}{}", src, dst)?;
                if promotion {
                    f.write_str("+")?;
                }
                Ok(())
            }
            Self::Drop { kind, dst } => write!(f, "{}*{}", kind.to_sfen(), dst),
        }
    }
}
