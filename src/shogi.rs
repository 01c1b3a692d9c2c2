//! 将棋の基本要素たち。
//!
//! 駒などは enum ではなく、いわゆる newtype で表現する。
//! 成駒や陣営の切り替えをビット演算で済ませられるように内部値を割り当てている。
//!
//! マスの内部値は sfen の並びに合わせている:
//!
//! * 段インデックスは一段目('a')が 0、九段目('i')が 8。
//! * 列インデックスは９筋が 0、１筋が 8。
//! * マスは９一, ８一, ..., １一, ９二, ..., １九 の順。

use std::iter::FusedIterator;

/// 陣営。`BLACK` が先手、`WHITE` が後手。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Side(u32);

pub const BLACK: Side = Side(0);
pub const WHITE: Side = Side(1);

impl Side {
    /// 敵陣営を返す。
    pub const fn inv(self) -> Side {
        Self(self.0 ^ 1)
    }

    /// 陣営を昇順に列挙する。(`BLACK`、`WHITE` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [BLACK, WHITE].into_iter()
    }

    /// sfen の手番文字を返す。
    pub const fn to_sfen(self) -> char {
        if self.0 == BLACK.0 {
            'b'
        } else {
            'w'
        }
    }
}

impl From<Side> for usize {
    fn from(side: Side) -> Self {
        side.0 as Self
    }
}

impl std::fmt::Debug for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            BLACK => write!(f, "BLACK"),
            WHITE => write!(f, "WHITE"),
            _ => write!(f, "Side({})", self.0),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            BLACK => write!(f, "先手"),
            _ => write!(f, "後手"),
        }
    }
}

/// 盤面のマス。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 段インデックス(0..9)と列インデックス(0..9)を指定してマスを作る。
    pub const fn from_row_col(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);

        Self((row * 9 + col) as u8)
    }

    /// 筋(1..=9)と段(1..=9)を指定してマスを作る。盤面外なら `None` を返す。
    pub const fn from_file_rank(file: u32, rank: u32) -> Option<Self> {
        if 1 <= file && file <= 9 && 1 <= rank && rank <= 9 {
            Some(Self::from_row_col((rank - 1) as usize, (9 - file) as usize))
        } else {
            None
        }
    }

    /// 段インデックスを返す。一段目が 0。
    pub const fn row(self) -> usize {
        (self.0 / 9) as usize
    }

    /// 列インデックスを返す。９筋が 0。
    pub const fn col(self) -> usize {
        (self.0 % 9) as usize
    }

    /// 筋(1..=9)を返す。
    pub const fn file(self) -> u32 {
        9 - self.col() as u32
    }

    /// 段(1..=9)を返す。
    pub const fn rank(self) -> u32 {
        self.row() as u32 + 1
    }

    /// 全てのマスを昇順に列挙する。
    pub fn iter() -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator {
        (0..81).map(Self)
    }
}

impl From<Square> for usize {
    fn from(sq: Square) -> Self {
        sq.0 as Self
    }
}

impl std::fmt::Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SQ_{}{}", self.file(), self.rank())
    }
}

/// sfen のマス表記("7f" など)。
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rank = char::from(b'a' + self.row() as u8);
        write!(f, "{}{}", self.file(), rank)
    }
}

/// 駒種(陣営の区別なし)。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct PieceKind(u32);

// 値が連続で、かつ (1 << 3) を OR することで成駒になる。

pub const NO_PIECE_KIND: PieceKind = PieceKind(0);
pub const PAWN: PieceKind = PieceKind(1);
pub const LANCE: PieceKind = PieceKind(2);
pub const KNIGHT: PieceKind = PieceKind(3);
pub const SILVER: PieceKind = PieceKind(4);
pub const BISHOP: PieceKind = PieceKind(5);
pub const ROOK: PieceKind = PieceKind(6);
pub const GOLD: PieceKind = PieceKind(7);
pub const KING: PieceKind = PieceKind(8);
pub const PRO_PAWN: PieceKind = PieceKind(9);
pub const PRO_LANCE: PieceKind = PieceKind(10);
pub const PRO_KNIGHT: PieceKind = PieceKind(11);
pub const PRO_SILVER: PieceKind = PieceKind(12);
pub const HORSE: PieceKind = PieceKind(13);
pub const DRAGON: PieceKind = PieceKind(14);

impl PieceKind {
    /// 成れる駒種かどうかを返す。
    pub const fn is_promotable(self) -> bool {
        PAWN.0 <= self.0 && self.0 <= ROOK.0
    }

    /// 成駒かどうかを返す。
    pub const fn is_promoted(self) -> bool {
        PRO_PAWN.0 <= self.0 && self.0 <= DRAGON.0
    }

    /// 手駒となりうる駒種かどうかを返す。
    pub const fn is_hand(self) -> bool {
        PAWN.0 <= self.0 && self.0 <= GOLD.0
    }

    /// 成った駒種を返す。`self` は成れる駒種でなければならない。
    pub const fn to_promoted(self) -> Self {
        debug_assert!(self.is_promotable());

        Self(self.0 | (1 << 3))
    }

    /// 成っていない駒種を返す。`self` は玉であってはならない。
    pub const fn to_raw(self) -> Self {
        debug_assert!(self.0 != KING.0);

        Self(self.0 & 7)
    }

    /// 成っていない駒種の sfen 文字(先手、大文字)から駒種を得る。
    pub fn from_sfen(c: char) -> Option<Self> {
        match c {
            'K' => Some(KING),
            'R' => Some(ROOK),
            'B' => Some(BISHOP),
            'G' => Some(GOLD),
            'S' => Some(SILVER),
            'N' => Some(KNIGHT),
            'L' => Some(LANCE),
            'P' => Some(PAWN),
            _ => None,
        }
    }

    /// 成りを除いた sfen 文字(先手、大文字)を返す。
    pub fn to_sfen(self) -> char {
        let raw = if self.0 == KING.0 { KING } else { self.to_raw() };
        match raw {
            KING => 'K',
            ROOK => 'R',
            BISHOP => 'B',
            GOLD => 'G',
            SILVER => 'S',
            KNIGHT => 'N',
            LANCE => 'L',
            _ => 'P',
        }
    }

    /// 手駒となりうる駒種を sfen の手駒表記順に列挙する。(飛、角、金、銀、桂、香、歩の順)
    pub fn iter_hand(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [ROOK, BISHOP, GOLD, SILVER, KNIGHT, LANCE, PAWN].into_iter()
    }
}

impl std::fmt::Debug for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            NO_PIECE_KIND => write!(f, "NO_PIECE_KIND"),
            PAWN => write!(f, "PAWN"),
            LANCE => write!(f, "LANCE"),
            KNIGHT => write!(f, "KNIGHT"),
            SILVER => write!(f, "SILVER"),
            BISHOP => write!(f, "BISHOP"),
            ROOK => write!(f, "ROOK"),
            GOLD => write!(f, "GOLD"),
            KING => write!(f, "KING"),
            PRO_PAWN => write!(f, "PRO_PAWN"),
            PRO_LANCE => write!(f, "PRO_LANCE"),
            PRO_KNIGHT => write!(f, "PRO_KNIGHT"),
            PRO_SILVER => write!(f, "PRO_SILVER"),
            HORSE => write!(f, "HORSE"),
            DRAGON => write!(f, "DRAGON"),
            _ => write!(f, "PieceKind({})", self.0),
        }
    }
}

/// 棋譜で使う駒名。
impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match *self {
            PAWN => "歩",
            LANCE => "香",
            KNIGHT => "桂",
            SILVER => "銀",
            BISHOP => "角",
            ROOK => "飛",
            GOLD => "金",
            KING => "玉",
            PRO_PAWN => "と",
            PRO_LANCE => "成香",
            PRO_KNIGHT => "成桂",
            PRO_SILVER => "成銀",
            HORSE => "馬",
            DRAGON => "龍",
            _ => "・",
        };
        f.write_str(name)
    }
}

/// 駒(陣営の区別あり)。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Piece(u32);

// 先手の駒に (1 << 4) を OR することで後手の駒になる。

pub const NO_PIECE: Piece = Piece(0);

impl Piece {
    /// 陣営と駒種を指定して駒を作る。
    pub const fn new(side: Side, pk: PieceKind) -> Self {
        debug_assert!(PAWN.0 <= pk.0 && pk.0 <= DRAGON.0);

        Self((side.0 << 4) | pk.0)
    }

    /// sfen の盤上駒表記から駒を得る。大文字が先手、小文字が後手。
    /// `promoted` は直前に '+' があったかどうか。成れない駒に '+' が付いていたら `None`。
    pub fn from_sfen(c: char, promoted: bool) -> Option<Self> {
        let side = if c.is_ascii_lowercase() { WHITE } else { BLACK };
        let pk = PieceKind::from_sfen(c.to_ascii_uppercase())?;
        match (promoted, pk.is_promotable()) {
            (false, _) => Some(Self::new(side, pk)),
            (true, true) => Some(Self::new(side, pk.to_promoted())),
            (true, false) => None,
        }
    }

    /// 所属陣営を返す。`self` は実際の駒でなければならない。
    pub const fn side(self) -> Side {
        debug_assert!(self.0 != NO_PIECE.0);

        Side((self.0 >> 4) & 1)
    }

    /// 駒種を返す。
    pub const fn kind(self) -> PieceKind {
        PieceKind(self.0 & 0xF)
    }

    /// 成駒かどうかを返す。
    pub const fn is_promoted(self) -> bool {
        self.kind().is_promoted()
    }

    /// 成った駒を返す。`self` は成れる駒でなければならない。
    pub const fn to_promoted(self) -> Self {
        debug_assert!(self.kind().is_promotable());

        Self(self.0 | (1 << 3))
    }

    /// 成っていない駒種を返す。`self` は玉であってはならない。
    pub const fn to_raw_kind(self) -> PieceKind {
        self.kind().to_raw()
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if *self == NO_PIECE {
            return write!(f, "NO_PIECE");
        }
        write!(f, "{}", self)
    }
}

/// sfen の盤上駒表記("+p" など)。
impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if *self == NO_PIECE {
            return Ok(());
        }
        if self.is_promoted() {
            f.write_str("+")?;
        }
        let c = self.kind().to_sfen();
        let c = if self.side() == WHITE {
            c.to_ascii_lowercase()
        } else {
            c
        };
        write!(f, "{}", c)
    }
}

/// 盤面。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Board([Piece; 81]);

impl Board {
    /// 空の盤面を返す。
    pub const fn empty() -> Self {
        Self([NO_PIECE; 81])
    }

    /// (マス, 駒) を昇順に列挙する。空白マスも含む。
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().map(move |sq| (sq, self[sq]))
    }
}

impl std::ops::Index<Square> for Board {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[usize::from(sq)]
    }
}

impl std::ops::IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.0[usize::from(sq)]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                let pc = self[Square::from_row_col(row, col)];
                if pc == NO_PIECE {
                    f.write_str(" ・")?;
                    continue;
                }
                f.write_str(if pc.side() == BLACK { " " } else { "v" })?;
                // 成駒は一文字で表す。
                match pc.kind() {
                    PRO_LANCE => f.write_str("杏")?,
                    PRO_KNIGHT => f.write_str("圭")?,
                    PRO_SILVER => f.write_str("全")?,
                    pk => write!(f, "{}", pk)?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// 手駒。
///
/// 駒種の内部値でインデックスアクセスする単純な配列。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Hand([u32; 8]);

impl Hand {
    /// 空の手駒を返す。
    pub const fn empty() -> Self {
        Self([0; 8])
    }

    /// 手駒が空かどうかを返す。
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// 手駒の総数を返す。
    pub fn count(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl std::ops::Index<PieceKind> for Hand {
    type Output = u32;

    /// 手駒とならない駒種を渡してはならない。
    fn index(&self, pk: PieceKind) -> &Self::Output {
        debug_assert!(pk.is_hand());

        &self.0[pk.0 as usize]
    }
}

impl std::ops::IndexMut<PieceKind> for Hand {
    /// 手駒とならない駒種を渡してはならない。
    fn index_mut(&mut self, pk: PieceKind) -> &mut Self::Output {
        debug_assert!(pk.is_hand());

        &mut self.0[pk.0 as usize]
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("なし");
        }

        for pk in PieceKind::iter_hand() {
            let n = self[pk];
            if n == 0 {
                continue;
            }

            write!(f, "{}", pk)?;
            if n >= 2 {
                write!(f, "{}", n)?;
            }
        }

        Ok(())
    }
}

/// 両陣営の手駒。`Side` でインデックスアクセスできる。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Hands([Hand; 2]);

impl Hands {
    /// 両陣営とも空の手駒を返す。
    pub const fn empty() -> Self {
        Self([Hand::empty(); 2])
    }

    /// 両陣営とも手駒が空かどうかを返す。
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Hand::is_empty)
    }
}

impl std::ops::Index<Side> for Hands {
    type Output = Hand;

    fn index(&self, side: Side) -> &Self::Output {
        &self.0[usize::from(side)]
    }
}

impl std::ops::IndexMut<Side> for Hands {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.0[usize::from(side)]
    }
}
