//! Error types for the structural boundaries that can fail: FEN parsing is
//! the only place this crate accepts untrusted input.

use std::num::ParseIntError;

#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum FenError {
    #[error("fen should contain 6 space-separated fields, found {0}")]
    WrongFieldCount(usize),
    #[error("piece placement field has {0} ranks, expected 8")]
    WrongRankCount(usize),
    #[error("rank {rank} describes {files} files, expected 8")]
    WrongFileCount { rank: usize, files: usize },
    #[error("'{0}' is not a recognized piece glyph")]
    UnknownPieceGlyph(char),
    #[error("side to move must be `w` or `b`, found `{0}`")]
    InvalidSideToMove(String),
    #[error("castling rights must use only `K`, `Q`, `k`, `q`, or `-`, found `{0}`")]
    InvalidCastlingRights(String),
    #[error("'{0}' is not a valid en passant square")]
    InvalidEnPassantSquare(String),
    #[error("halfmove clock must be a non-negative integer: {0}")]
    InvalidHalfmoveClock(#[source] ParseIntError),
    #[error("fullmove number must be a non-negative integer: {0}")]
    InvalidFullmoveNumber(#[source] ParseIntError),
    #[error("board has {white} white king(s) and {black} black king(s), expected one each")]
    InvalidKingCount { white: u32, black: u32 },
}
