use thiserror::Error;

use crate::board::{Board, BoardError, BLANK, MAX_DIM};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("board has {0} cells, which is not a square grid of dimension 2..={MAX_DIM}")]
    NotSquare(usize),
    #[error("unrecognized token {0:?} (expected a tile number or 'X')")]
    BadToken(String),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses a board from whitespace-separated row-major tokens. The blank is
/// written as `X` (any case); the dimension is inferred from the token
/// count. Tile validation is delegated to `Board::from_tiles`.
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let mut tiles = Vec::new();
    for tok in text.split_whitespace() {
        if tok.eq_ignore_ascii_case("x") {
            tiles.push(BLANK);
        } else {
            let v: u8 = tok
                .parse()
                .map_err(|_| ParseError::BadToken(tok.to_string()))?;
            tiles.push(v);
        }
    }
    let size = (2..=MAX_DIM)
        .find(|n| n * n == tiles.len())
        .ok_or(ParseError::NotSquare(tiles.len()))?;
    Ok(Board::from_tiles(size, tiles)?)
}
