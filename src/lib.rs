//! sfen 局面の追跡と日本語棋譜の生成。
//!
//! sfen 局面文字列から局面を作り、sfen 指し手文字列を順に適用しながら
//! "▲7六歩(77)" 形式の棋譜を出力する。合法性チェックは一切行わない。

mod batch;
mod coord;
mod error;
mod kifu;
mod moves;
mod position;
mod sfen;
mod shogi;

pub use self::batch::*;
pub use self::coord::*;
pub use self::error::*;
pub use self::kifu::*;
pub use self::moves::*;
pub use self::position::*;
pub use self::sfen::*;
pub use self::shogi::*;
