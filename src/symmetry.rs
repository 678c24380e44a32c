//! The eight symmetries of the board, used to turn one canonical solution
//! into up to eight distinct ones.
//!
//! Only kings, queens, rooks and bishops attack symmetrically under every
//! transform. Pawns attack forwards only, so callers must not assume a
//! transformed pawn position keeps its validity.

use crate::board::{Position, Square};
use crate::board_string::{self, BoardStringError};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    /// Reverse the rank order.
    FlipVertical,
    /// Reverse the file order within each rank.
    FlipHorizontal,
    Rotate180,
    /// Swap the roles of file and rank.
    Transpose,
    TransposeFlipVertical,
    TransposeFlipHorizontal,
    TransposeRotate180,
}

static ALL: [Symmetry; 8] = [
    Symmetry::Identity,
    Symmetry::FlipVertical,
    Symmetry::FlipHorizontal,
    Symmetry::Rotate180,
    Symmetry::Transpose,
    Symmetry::TransposeFlipVertical,
    Symmetry::TransposeFlipHorizontal,
    Symmetry::TransposeRotate180,
];

impl Symmetry {
    /// All eight, in the order `get_symmetries` returns them.
    pub fn all() -> std::slice::Iter<'static, Symmetry> {
        ALL.iter()
    }

    fn transposes(self) -> bool {
        match self {
            Symmetry::Transpose
            | Symmetry::TransposeFlipVertical
            | Symmetry::TransposeFlipHorizontal
            | Symmetry::TransposeRotate180 => true,
            _ => false,
        }
    }

    fn flips_ranks(self) -> bool {
        match self {
            Symmetry::FlipVertical
            | Symmetry::Rotate180
            | Symmetry::TransposeFlipVertical
            | Symmetry::TransposeRotate180 => true,
            _ => false,
        }
    }

    fn flips_files(self) -> bool {
        match self {
            Symmetry::FlipHorizontal
            | Symmetry::Rotate180
            | Symmetry::TransposeFlipHorizontal
            | Symmetry::TransposeRotate180 => true,
            _ => false,
        }
    }

    /// Transpose first, then flip.
    pub fn apply_to_square(self, square: Square) -> Square {
        let mut square = square;

        if self.transposes() {
            square = square.transpose();
        }
        if self.flips_ranks() {
            square = square.flip_rank();
        }
        if self.flips_files() {
            square = square.flip_file();
        }

        square
    }

    /// Transforms a board string. The flips work on the text directly, only
    /// the transposing symmetries need to decode it.
    pub fn apply(self, board: &str) -> Result<String, BoardStringError> {
        let board = if self.transposes() {
            transpose(board)?
        } else {
            board.to_owned()
        };

        Ok(match (self.flips_ranks(), self.flips_files()) {
            (false, false) => board,
            (true, false) => flip_vertical(&board),
            (false, true) => flip_horizontal(&board),
            (true, true) => rotate_180(&board),
        })
    }
}

impl Distribution<Symmetry> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symmetry {
        ALL[rng.gen_range(0, ALL.len())]
    }
}

impl Position {
    pub fn transformed(&self, symmetry: Symmetry) -> Position {
        self.iter()
            .map(|(square, piece)| (symmetry.apply_to_square(square), piece))
            .collect()
    }
}

fn flip_vertical(board: &str) -> String {
    board.split('/').rev().collect::<Vec<_>>().join("/")
}

fn flip_horizontal(board: &str) -> String {
    board
        .split('/')
        .map(|rank| rank.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

fn rotate_180(board: &str) -> String {
    board.chars().rev().collect()
}

fn transpose(board: &str) -> Result<String, BoardStringError> {
    let position = board_string::decode(board)?;

    Ok(board_string::encode(&position.transformed(Symmetry::Transpose)))
}

/// The orbit of `board` under the eight symmetries. The first element is
/// `board` itself; duplicates appear when the position is symmetric.
pub fn get_symmetries(board: &str) -> Result<[String; 8], BoardStringError> {
    let transposed = transpose(board)?;
    let transposed_vertical = flip_vertical(&transposed);
    let transposed_horizontal = flip_horizontal(&transposed);
    let transposed_rotated = rotate_180(&transposed);

    Ok([
        board.to_owned(),
        flip_vertical(board),
        flip_horizontal(board),
        rotate_180(board),
        transposed,
        transposed_vertical,
        transposed_horizontal,
        transposed_rotated,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceType};
    use crate::board_string::{decode, encode};
    use insta::assert_snapshot;
    use quickcheck_macros::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const FIVE_QUEENS: &str = "6Q1/2Q5/8/8/7Q/3Q4/8/Q7";

    #[test]
    fn orbit_starts_with_the_input() {
        let orbit = get_symmetries(FIVE_QUEENS).unwrap();

        assert_eq!(orbit.len(), 8);
        assert_eq!(orbit[0], FIVE_QUEENS);
    }

    #[test]
    fn identity_keeps_non_canonical_text() {
        let board = "44/8/8/8/8/8/8/8";

        assert_eq!(get_symmetries(board).unwrap()[0], board);
    }

    #[test]
    fn named_transforms() {
        let orbit = get_symmetries(FIVE_QUEENS).unwrap();

        assert_snapshot!(orbit[1].as_str(), @"Q7/8/3Q4/7Q/8/8/2Q5/6Q1");
        assert_snapshot!(orbit[2].as_str(), @"1Q6/5Q2/8/8/Q7/4Q3/8/7Q");
        assert_snapshot!(orbit[3].as_str(), @"7Q/8/4Q3/Q7/8/8/5Q2/1Q6");
        assert_snapshot!(orbit[4].as_str(), @"3Q4/7Q/8/8/2Q5/6Q1/8/Q7");
        assert_snapshot!(orbit[5].as_str(), @"Q7/8/6Q1/2Q5/8/8/7Q/3Q4");
        assert_snapshot!(orbit[6].as_str(), @"4Q3/Q7/8/8/5Q2/1Q6/8/7Q");
        assert_snapshot!(orbit[7].as_str(), @"7Q/8/1Q6/5Q2/8/8/Q7/4Q3");
    }

    #[test]
    fn orbit_matches_apply() {
        let orbit = get_symmetries(FIVE_QUEENS).unwrap();

        for (symmetry, expected) in Symmetry::all().zip(orbit.iter()) {
            assert_eq!(&symmetry.apply(FIVE_QUEENS).unwrap(), expected, "{:?}", symmetry);
        }
    }

    #[test]
    fn symmetric_positions_repeat() {
        let orbit = get_symmetries("8/8/8/8/8/8/8/8").unwrap();

        assert!(orbit.iter().all(|board| board == "8/8/8/8/8/8/8/8"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(get_symmetries("8/8/8").is_err());
    }

    #[test]
    fn corner_visits_all_four_corners() {
        let corner = Position::filled(vec![Square::at(1, 1)], Piece::white(PieceType::Rook));

        let corners: HashSet<_> = Symmetry::all()
            .map(|&symmetry| encode(&corner.transformed(symmetry)))
            .collect();

        assert_eq!(corners.len(), 4);
    }

    #[test]
    fn square_transforms_are_bijections() {
        for &symmetry in Symmetry::all() {
            let image: HashSet<_> = Square::all()
                .map(|square| symmetry.apply_to_square(square))
                .collect();

            assert_eq!(image.len(), 64, "{:?}", symmetry);
        }
    }

    #[test]
    fn samples_every_symmetry() {
        let mut rng = StdRng::seed_from_u64(7);

        let seen: HashSet<Symmetry> = (0..500).map(|_| rng.gen()).collect();

        assert_eq!(seen.len(), 8);
    }

    #[quickcheck]
    fn text_and_position_transforms_agree(position: Position) {
        let board = encode(&position);

        for &symmetry in Symmetry::all() {
            let text = symmetry.apply(&board).unwrap();

            assert_eq!(decode(&text).unwrap(), position.transformed(symmetry));
            assert_eq!(text, encode(&position.transformed(symmetry)));
        }
    }
}
