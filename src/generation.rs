//! One example solution per call, for any piece type and mode.
//!
//! Every generator is correct by construction or samples a table of known
//! solutions, so nothing here consults the validity checks.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use crate::board::{Mode, PieceType, Position};
use crate::board_string;
use log::trace;
use rand::Rng;

pub fn solve<G: Rng>(kind: PieceType, mode: Mode, rng: &mut G) -> Position {
    match kind {
        PieceType::King => king::solve(mode, rng),
        PieceType::Queen => queen::solve(mode, rng),
        PieceType::Rook => rook::solve(mode, rng),
        PieceType::Bishop => bishop::solve(mode, rng),
        PieceType::Knight => knight::solve(mode, rng),
        PieceType::Pawn => pawn::solve(mode, rng),
    }
}

/// Like [`solve`], but takes the piece by name (`"king"`, `"queen"`, ...).
/// Unknown names give an empty position.
pub fn solve_named<G: Rng>(name: &str, mode: Mode, rng: &mut G) -> Position {
    match PieceType::from_name(name) {
        Some(kind) => solve(kind, mode, rng),
        None => Position::new(),
    }
}

pub fn random_solution(kind: PieceType, mode: Mode) -> Position {
    solve(kind, mode, &mut rand::thread_rng())
}

fn pick<'a, T, G: Rng>(rng: &mut G, options: &'a [T]) -> &'a T {
    &options[rng.gen_range(0, options.len())]
}

fn from_table<G: Rng>(rng: &mut G, table: &[&str]) -> Position {
    let index = rng.gen_range(0, table.len());
    trace!("using table entry {} of {}", index, table.len());

    decode_known(table[index])
}

fn decode_known(board: &str) -> Position {
    board_string::decode(board).expect("solution tables hold valid board strings")
}

#[cfg(test)]
fn decode_table(table: &[&str]) -> Vec<Position> {
    table
        .iter()
        .map(|board| board_string::decode(board).unwrap())
        .collect()
}
