//! The compact board notation: eight `/`-separated rank segments from rank 8
//! down to rank 1, each listing files a to h as piece letters or digit runs
//! of empty squares, e.g. `6Q1/2Q5/8/8/7Q/3Q4/8/Q7`.

use crate::board::{Piece, Position, Square};
use pest::Parser;
use std::str::FromStr;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "board_string/grammar.pest"]
struct BoardStringParser;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardStringError {
    #[error("malformed board string: {0}")]
    Syntax(#[from] pest::error::Error<Rule>),
    #[error("rank {rank} spans {files} files, expected 8")]
    RankLength { rank: i8, files: i32 },
}

pub fn decode(board: &str) -> Result<Position, BoardStringError> {
    let ranks = BoardStringParser::parse(Rule::board, board)?
        .flat_map(|pair| pair.into_inner())
        .filter(|pair| pair.as_rule() == Rule::rank);

    let mut position = Position::new();

    for (row, rank_pair) in ranks.enumerate() {
        let rank = 8 - row as i8;
        let mut file = 1;

        for token in rank_pair.into_inner() {
            match token.as_rule() {
                Rule::gap => file += gap_length(token.as_str()),
                Rule::piece => {
                    let piece = token.as_str().chars().next().and_then(Piece::from_board_char);

                    if let (true, Some(piece)) = (file <= 8, piece) {
                        position.place(Square::at(file as i8, rank), piece);
                    }

                    file += 1;
                }
                _ => {}
            }
        }

        if file != 9 {
            return Err(BoardStringError::RankLength {
                rank,
                files: file - 1,
            });
        }
    }

    Ok(position)
}

fn gap_length(digits: &str) -> i32 {
    digits.bytes().map(|digit| i32::from(digit - b'0')).sum()
}

/// Always produces the canonical form, with maximal digit runs.
pub fn encode(position: &Position) -> String {
    let mut board = String::with_capacity(71);

    for rank in (1..=8).rev() {
        let mut gap = 0;

        for file in 1..=8 {
            match position.piece_at(file, rank) {
                Some(piece) => {
                    if gap > 0 {
                        board.push_str(&gap.to_string());
                        gap = 0;
                    }
                    board.push(piece.board_char());
                }
                None => gap += 1,
            }
        }

        if gap > 0 {
            board.push_str(&gap.to_string());
        }

        if rank > 1 {
            board.push('/');
        }
    }

    board
}

impl FromStr for Position {
    type Err = BoardStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
