use super::pick;
use crate::board::{Mode, Piece, PieceType, Position, Square};
use crate::symmetry::Symmetry;
use log::{debug, trace};
use rand::Rng;

/// Samples per 2x2 block before falling back to its upper-right cell.
const MAX_ATTEMPTS: usize = 64;

/// Already-placed kings can only sit left of or below the block being filled.
const PLACED_NEIGHBOURS: [(i8, i8); 5] = [(-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];

pub(super) fn solve<G: Rng>(mode: Mode, rng: &mut G) -> Position {
    let kings = match mode {
        Mode::Max => independent(rng),
        Mode::Min => dominating(rng),
    };

    let symmetry = rng.gen::<Symmetry>();
    trace!("king solution transformed by {:?}", symmetry);

    Position::filled(kings, Piece::white(PieceType::King)).transformed(symmetry)
}

/// One king in each of the sixteen 2x2 blocks, filled file pair by file
/// pair from the bottom.
fn independent<G: Rng>(rng: &mut G) -> Vec<Square> {
    let mut placed = Position::new();

    for file in (1..=8).step_by(2) {
        for rank in (1..=8).step_by(2) {
            let square = (0..MAX_ATTEMPTS)
                .map(|_| block_cell(file, rank, rng))
                .find(|&square| !has_placed_neighbour(&placed, square))
                .unwrap_or_else(|| {
                    debug!("no free cell sampled in block at {}", Square::at(file, rank));
                    // Its left and lower neighbours lie inside the block.
                    Square::at(file + 1, rank + 1)
                });

            placed.place(square, Piece::white(PieceType::King));
        }
    }

    placed.squares().collect()
}

/// A cell of the block whose lower-left corner is (`file`, `rank`), weighted
/// 2:1 towards the lower and left cells.
fn block_cell<G: Rng>(file: i8, rank: i8, rng: &mut G) -> Square {
    let file_offset = *pick(rng, &[0i8, 0, 1]);
    let rank_offset = *pick(rng, &[0i8, 0, 1]);

    Square::at(file + file_offset, rank + rank_offset)
}

fn has_placed_neighbour(placed: &Position, square: Square) -> bool {
    PLACED_NEIGHBOURS.iter().any(|&(file_delta, rank_delta)| {
        placed.is_occupied(square.file() + file_delta, square.rank() + rank_delta)
    })
}

const A1: Square = Square::at(1, 1);
const A2: Square = Square::at(1, 2);
const A4: Square = Square::at(1, 4);
const A5: Square = Square::at(1, 5);
const A7: Square = Square::at(1, 7);
const A8: Square = Square::at(1, 8);
const B1: Square = Square::at(2, 1);
const B2: Square = Square::at(2, 2);
const B4: Square = Square::at(2, 4);
const B5: Square = Square::at(2, 5);
const B7: Square = Square::at(2, 7);
const B8: Square = Square::at(2, 8);
const D1: Square = Square::at(4, 1);
const D2: Square = Square::at(4, 2);
const D4: Square = Square::at(4, 4);
const D7: Square = Square::at(4, 7);
const E1: Square = Square::at(5, 1);
const E2: Square = Square::at(5, 2);
const E7: Square = Square::at(5, 7);
const G1: Square = Square::at(7, 1);
const G2: Square = Square::at(7, 2);
const G4: Square = Square::at(7, 4);
const G5: Square = Square::at(7, 5);
const G7: Square = Square::at(7, 7);
const H1: Square = Square::at(8, 1);
const H2: Square = Square::at(8, 2);

/// Nine kings covering the board. Two anchors sit near the centre; each later
/// king picks from a small set of cells, and whenever an earlier king took
/// the inner option the later one is forced towards the edge to close the gap.
fn dominating<G: Rng>(rng: &mut G) -> Vec<Square> {
    let north = *pick(rng, &[D7, E7]);
    let east = *pick(rng, &[G4, G5]);

    // e7 leaves c6 and the north-west corner to b7.
    let north_west = if north == E7 {
        B7
    } else {
        *pick(rng, &[A7, A8, B7, B8])
    };

    // g5 leaves f3 and the south-east corner to g2.
    let south_east = if east == G5 {
        G2
    } else {
        *pick(rng, &[G1, G2, H1, H2])
    };

    let west = if north_west.rank() == 8 {
        *pick(rng, &[A5, B5])
    } else {
        *pick(rng, &[A5, B5, A4, B4])
    };

    let south = if south_east.file() == 8 {
        *pick(rng, &[E1, E2])
    } else {
        *pick(rng, &[E1, E2, D1, D2])
    };

    let south_west = match (west.rank() == 5, south.file() == 5) {
        (true, true) => B2,
        (true, false) => *pick(rng, &[A2, B2]),
        (false, true) => *pick(rng, &[B1, B2]),
        (false, false) => *pick(rng, &[A1, B1, A2, B2]),
    };

    vec![
        D4, G7, north, east, north_west, south_east, west, south, south_west,
    ]
}
