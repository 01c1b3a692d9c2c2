//! エラー型。
//!
//! 入力文字列の書式が壊れているもの(`ErrorKind::Format`)と、
//! 書式は正しいが局面の状態と矛盾するもの(`ErrorKind::State`)に大別される。

use thiserror::Error;

use crate::shogi::*;

/// エラーの大分類。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// 局面文字列、指し手文字列、座標の書式エラー。
    Format,
    /// 局面の状態と矛盾する操作。
    State,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("position string must have exactly 4 fields, but got {0}")]
    PositionFieldCount(usize),

    #[error("board string must have exactly 9 rows, but got {0}")]
    BoardRowCount(usize),

    #[error("board row must have exactly 9 columns: {0}")]
    BoardRowWidth(String),

    #[error("invalid board piece in row: {0}")]
    BoardPiece(String),

    #[error("invalid hand string: {0}")]
    HandString(String),

    #[error("invalid ply string: {0}")]
    PlyString(String),

    #[error("turn must be b or w, but got {0}")]
    Turn(String),

    #[error("move string must be 4 characters, or 5 characters ending with '+': {0}")]
    MoveLength(String),

    #[error("invalid move string: {0}")]
    MoveString(String),

    #[error("coordinate must be 2 characters: {0}")]
    CoordinateLength(String),

    #[error("invalid coordinate: {0}")]
    Coordinate(String),

    #[error("drop piece must be one of P, L, N, S, G, B, R, K: {0}")]
    DropPiece(char),

    #[error("no {0} in hand")]
    EmptyHand(Piece),

    #[error("no piece at {0}")]
    EmptySource(Square),

    #[error("piece is already promoted: {0}")]
    AlreadyPromoted(Piece),

    #[error("piece cannot be promoted: {0}")]
    NotPromotable(Piece),

    #[error("cannot capture own piece at {0}")]
    CaptureOwnPiece(Square),

    #[error("cannot capture king at {0}")]
    CaptureKing(Square),
}

impl Error {
    /// エラーの大分類を返す。
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PositionFieldCount(_)
            | Self::BoardRowCount(_)
            | Self::BoardRowWidth(_)
            | Self::BoardPiece(_)
            | Self::HandString(_)
            | Self::PlyString(_)
            | Self::MoveLength(_)
            | Self::MoveString(_)
            | Self::CoordinateLength(_)
            | Self::Coordinate(_)
            | Self::DropPiece(_) => ErrorKind::Format,
            Self::Turn(_)
            | Self::EmptyHand(_)
            | Self::EmptySource(_)
            | Self::AlreadyPromoted(_)
            | Self::NotPromotable(_)
            | Self::CaptureOwnPiece(_)
            | Self::CaptureKing(_) => ErrorKind::State,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
