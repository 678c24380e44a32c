use crate::board::{Mode, Piece, PieceType, Position, Square};
use crate::symmetry::Symmetry;
use rand::seq::SliceRandom;
use rand::Rng;

pub(super) fn solve<G: Rng>(mode: Mode, rng: &mut G) -> Position {
    let rook = Piece::white(PieceType::Rook);

    match mode {
        // A random permutation: file `files[i]` gets its rook on rank `i + 1`.
        Mode::Max => {
            let mut files: Vec<i8> = (1..=8).collect();
            files.shuffle(rng);

            let squares = files
                .into_iter()
                .zip(1..=8)
                .map(|(file, rank)| Square::at(file, rank));

            Position::filled(squares, rook)
        }
        // One rook on every file covers every square. Transposing gives one
        // on every rank instead.
        Mode::Min => {
            let squares = (1..=8).map(|file| Square::at(file, rng.gen_range(1, 9)));
            let rooks = Position::filled(squares, rook);

            if rng.gen_bool(0.5) {
                rooks.transformed(Symmetry::Transpose)
            } else {
                rooks
            }
        }
    }
}
