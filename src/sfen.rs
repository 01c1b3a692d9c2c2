//! sfen 局面文字列、指し手文字列のエンコード/デコード。

mod decode;
mod encode;

pub use self::decode::*;
pub use self::encode::*;
