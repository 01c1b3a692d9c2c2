//! 指し手列の一括適用。

use log::debug;

use crate::error::Result;
use crate::kifu::compress_same_square;
use crate::position::Position;

/// `Position::apply_moves()` の動作設定。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RunOptions {
    /// 棋譜文字列を収集するか。
    pub kifu: bool,
    /// 収集した棋譜で、直前と同じマスへの手を "同" 表記にするか。
    pub compress_same: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            kifu: false,
            compress_same: true,
        }
    }
}

impl RunOptions {
    /// 棋譜を収集する設定を返す。"同" 表記は有効。
    pub fn with_kifu() -> Self {
        Self {
            kifu: true,
            ..Self::default()
        }
    }
}

impl Position {
    /// sfen 指し手文字列の列を先頭から順に適用する。
    ///
    /// `opts.kifu` が真なら棋譜文字列の列を返す。
    /// 途中の指し手でエラーになった場合、局面はその直前の指し手まで適用された状態になる。
    pub fn apply_moves<I, S>(&mut self, mvs: I, opts: RunOptions) -> Result<Option<Vec<String>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kifus = Vec::<String>::new();

        for mv in mvs {
            if let Some(kifu) = self.apply(mv.as_ref(), opts.kifu)? {
                kifus.push(kifu);
            }
        }

        if !opts.kifu {
            return Ok(None);
        }

        if opts.compress_same {
            compress_same_square(&mut kifus);
        }
        debug!("applied {} moves, now ply {}", kifus.len(), self.ply());

        Ok(Some(kifus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::shogi::*;

    #[test]
    fn test_without_kifu() {
        let mut pos = Position::startpos();

        let res = pos.apply_moves(["7g7f", "3c3d"], RunOptions::default()).unwrap();

        assert_eq!(res, None);
        assert_eq!(pos.ply(), 3);
        assert_eq!(pos.side_to_move(), BLACK);
    }

    #[test]
    fn test_compress_toggle() {
        let mvs = ["7g7f", "3c3d", "8h2b+", "3a2b"];

        let mut pos = Position::startpos();
        let kifus = pos.apply_moves(mvs, RunOptions::with_kifu()).unwrap().unwrap();
        assert_eq!(kifus, ["▲7六歩(77)", "△3四歩(33)", "▲2二角成(88)", "△同銀(31)"]);

        let mut pos = Position::startpos();
        let opts = RunOptions {
            kifu: true,
            compress_same: false,
        };
        let kifus = pos.apply_moves(mvs, opts).unwrap().unwrap();
        assert_eq!(kifus, ["▲7六歩(77)", "△3四歩(33)", "▲2二角成(88)", "△2二銀(31)"]);
    }

    #[test]
    fn test_stops_at_error() {
        let mut pos = Position::startpos();

        let res = pos.apply_moves(["7g7f", "5e5d", "3c3d"], RunOptions::with_kifu());

        assert_eq!(
            res,
            Err(Error::EmptySource(Square::from_file_rank(5, 5).unwrap()))
        );
        assert_eq!(pos.ply(), 2);
        assert_eq!(pos.side_to_move(), WHITE);
    }
}
