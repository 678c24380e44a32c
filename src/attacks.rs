//! How each piece type attacks. Pieces never block one another here: a
//! queen attacks along the whole of her lines, whatever stands between.

use crate::board::{PieceType, Position, Square};

const KING_LEAPS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const KNIGHT_LEAPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

// Every pawn attacks towards rank 8.
const PAWN_LEAPS: [(i8, i8); 2] = [(-1, 1), (1, 1)];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reach {
    /// Attacks every square sharing one of the selected lines.
    Lines { orthogonal: bool, diagonal: bool },
    /// Attacks the squares at these (file, rank) offsets.
    Leaps(&'static [(i8, i8)]),
}

impl PieceType {
    pub fn reach(self) -> Reach {
        match self {
            PieceType::King => Reach::Leaps(&KING_LEAPS),
            PieceType::Queen => Reach::Lines {
                orthogonal: true,
                diagonal: true,
            },
            PieceType::Rook => Reach::Lines {
                orthogonal: true,
                diagonal: false,
            },
            PieceType::Bishop => Reach::Lines {
                orthogonal: false,
                diagonal: true,
            },
            PieceType::Knight => Reach::Leaps(&KNIGHT_LEAPS),
            PieceType::Pawn => Reach::Leaps(&PAWN_LEAPS),
        }
    }
}

/// Whether a piece of type `kind` on `from` attacks `to`.
pub fn attacks(kind: PieceType, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    let file_delta = to.file() - from.file();
    let rank_delta = to.rank() - from.rank();

    match kind.reach() {
        Reach::Lines {
            orthogonal,
            diagonal,
        } => {
            (orthogonal && (file_delta == 0 || rank_delta == 0))
                || (diagonal && file_delta.abs() == rank_delta.abs())
        }
        Reach::Leaps(leaps) => leaps.contains(&(file_delta, rank_delta)),
    }
}

/// The ranks, files and both diagonal families touched by the pieces of a
/// position, one bit per line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Lines {
    ranks: u16,
    files: u16,
    diagonals: u32,
    anti_diagonals: u32,
}

impl Lines {
    pub fn of(position: &Position) -> Lines {
        let mut lines = Lines::default();

        for square in position.squares() {
            lines.ranks |= Lines::rank_bit(square);
            lines.files |= Lines::file_bit(square);
            lines.diagonals |= Lines::diagonal_bit(square);
            lines.anti_diagonals |= Lines::anti_diagonal_bit(square);
        }

        lines
    }

    fn rank_bit(square: Square) -> u16 {
        1 << square.rank()
    }

    fn file_bit(square: Square) -> u16 {
        1 << square.file()
    }

    // `file + rank` runs from 2 to 16.
    fn diagonal_bit(square: Square) -> u32 {
        1 << square.diagonal()
    }

    // `file - rank` runs from -7 to 7.
    fn anti_diagonal_bit(square: Square) -> u32 {
        1 << (square.anti_diagonal() + 8)
    }

    pub fn rank_count(self) -> u32 {
        self.ranks.count_ones()
    }

    pub fn file_count(self) -> u32 {
        self.files.count_ones()
    }

    pub fn diagonal_count(self) -> u32 {
        self.diagonals.count_ones()
    }

    pub fn anti_diagonal_count(self) -> u32 {
        self.anti_diagonals.count_ones()
    }

    /// Whether `square` lies on an occupied rank or file.
    pub fn covers_orthogonally(self, square: Square) -> bool {
        self.ranks & Lines::rank_bit(square) != 0 || self.files & Lines::file_bit(square) != 0
    }

    /// Whether `square` lies on an occupied diagonal of either family.
    pub fn covers_diagonally(self, square: Square) -> bool {
        self.diagonals & Lines::diagonal_bit(square) != 0
            || self.anti_diagonals & Lines::anti_diagonal_bit(square) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn square(label: &str) -> Square {
        label.parse().unwrap()
    }

    #[test]
    fn king_attacks_its_neighbourhood() {
        let centre = square("d4");

        let attacked: Vec<_> = Square::all()
            .filter(|&to| attacks(PieceType::King, centre, to))
            .map(|to| to.to_string())
            .collect();

        assert_eq!(
            attacked,
            vec!["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"]
        );
    }

    #[test]
    fn sliders_ignore_blockers() {
        assert!(attacks(PieceType::Rook, square("a1"), square("a8")));
        assert!(attacks(PieceType::Bishop, square("a1"), square("h8")));
        assert!(attacks(PieceType::Queen, square("h1"), square("a8")));
        assert!(!attacks(PieceType::Bishop, square("a1"), square("a2")));
        assert!(!attacks(PieceType::Rook, square("a1"), square("b2")));
        assert!(!attacks(PieceType::Queen, square("a1"), square("b3")));
    }

    #[test]
    fn knight_leaps() {
        let from = square("b1");

        assert!(attacks(PieceType::Knight, from, square("a3")));
        assert!(attacks(PieceType::Knight, from, square("c3")));
        assert!(attacks(PieceType::Knight, from, square("d2")));
        assert!(!attacks(PieceType::Knight, from, square("b3")));
        assert!(!attacks(PieceType::Knight, from, square("c2")));
    }

    #[test]
    fn pawns_only_attack_forwards() {
        assert!(attacks(PieceType::Pawn, square("d4"), square("c5")));
        assert!(attacks(PieceType::Pawn, square("d4"), square("e5")));
        assert!(!attacks(PieceType::Pawn, square("d4"), square("c3")));
        assert!(!attacks(PieceType::Pawn, square("d4"), square("d5")));
    }

    #[test]
    fn nothing_attacks_its_own_square() {
        for &kind in PieceType::all() {
            assert!(!attacks(kind, square("e4"), square("e4")));
        }
    }

    #[test]
    fn lines_count_distinct_values() {
        let position = Position::filled(
            vec![square("a1"), square("b3"), square("c2")],
            Piece::white(PieceType::Queen),
        );

        let lines = Lines::of(&position);

        assert_eq!(lines.rank_count(), 3);
        assert_eq!(lines.file_count(), 3);
        // a1 and c2 give 2 and 5, b3 gives 5.
        assert_eq!(lines.diagonal_count(), 2);
        assert_eq!(lines.anti_diagonal_count(), 3);
        assert!(lines.covers_orthogonally(square("a7")));
        assert!(lines.covers_diagonally(square("h8")));
        assert!(!lines.covers_diagonally(square("h1")));
    }
}
