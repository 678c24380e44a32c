use super::{from_table, pick};
use crate::board::{Mode, Piece, PieceType, Position, Square};
use rand::Rng;

/// Curated dominating sets of eight bishops, used as they stand.
const EIGHT_BISHOPS: [&str; 12] = [
    "3B4/3B4/3B4/3B4/3B4/3B4/3B4/3B4",
    "4B3/4B3/4B3/4B3/4B3/4B3/4B3/4B3",
    "8/8/8/BBBBBBBB/8/8/8/8",
    "8/8/8/8/BBBBBBBB/8/8/8",
    "8/3BB3/8/3BB3/8/3BB3/8/3BB3",
    "8/8/2BBBB2/8/8/2BBBB2/8/8",
    "8/8/2BB1B2/5B2/2B5/2B1BB2/8/8",
    "8/8/2BB1B2/5B2/2B5/4B3/8/3BB3",
    "3B4/8/8/2BB1B2/B4B2/2B5/4B3/8",
    "8/3BB3/1B4B1/8/2B2B2/2B2B2/8/8",
    "8/3B4/8/3B4/1B1B1B1B/3B4/8/3B4",
    "3B4/8/2B1B3/4B2B/1B6/3BB3/8/8",
];

const A1: Square = Square::at(1, 1);
const A8: Square = Square::at(1, 8);
const H1: Square = Square::at(8, 1);
const H8: Square = Square::at(8, 8);

pub(super) fn solve<G: Rng>(mode: Mode, rng: &mut G) -> Position {
    match mode {
        Mode::Max => Position::filled(edges(rng), Piece::white(PieceType::Bishop)),
        Mode::Min => from_table(rng, &EIGHT_BISHOPS),
    }
}

/// Fourteen bishops on the rim. One corner from each long diagonal, then each
/// of the six remaining diagonal pairs is settled by a pair of opposite edge
/// squares, either on the a and h files or on the first and last ranks.
fn edges<G: Rng>(rng: &mut G) -> Vec<Square> {
    let mut squares = vec![*pick(rng, &[A1, H8]), *pick(rng, &[A8, H1])];

    for i in 2..=7 {
        if rng.gen() {
            squares.push(Square::at(1, i));
            squares.push(Square::at(8, 9 - i));
        } else {
            squares.push(Square::at(i, 1));
            squares.push(Square::at(9 - i, 8));
        }
    }

    squares
}
