use super::{Piece, PieceType, Square};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;
use std::ops::Index;

/// A sparse board: only occupied squares are stored, so a missing key is an
/// empty square.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pieces: BTreeMap<Square, Piece>,
}

impl Position {
    pub fn new() -> Position {
        Position::default()
    }

    /// A position with `piece` on every one of `squares`.
    pub fn filled<I: IntoIterator<Item = Square>>(squares: I, piece: Piece) -> Position {
        squares.into_iter().map(|square| (square, piece)).collect()
    }

    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.pieces.insert(square, piece)
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.pieces.get(&square).copied()
    }

    /// Looks up any coordinate pair. Anything off the board is empty.
    pub fn piece_at(&self, file: i8, rank: i8) -> Option<Piece> {
        Square::new(file, rank).and_then(|square| self.get(square))
    }

    pub fn is_occupied(&self, file: i8, rank: i8) -> bool {
        self.piece_at(file, rank).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Occupied squares in board order (a1, a2, ..., h8).
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.pieces.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&square, &piece)| (square, piece))
    }

    pub fn counts(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();

        for piece in self.pieces.values() {
            counts.0[piece.kind.index()] += 1;
        }

        counts
    }

    /// The piece type on the board, if there is exactly one.
    pub fn single_type(&self) -> Option<PieceType> {
        let mut present = self.counts().present();

        match (present.next(), present.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }
}

impl FromIterator<(Square, Piece)> for Position {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(iter: I) -> Self {
        Position {
            pieces: iter.into_iter().collect(),
        }
    }
}

/// Rank 8 at the top, `.` for empty squares.
impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for rank in (1..=8).rev() {
            for file in 1..=8 {
                let cell = self.piece_at(file, rank).map_or('.', Piece::board_char);
                write!(f, "{}", cell)?;
            }

            if rank > 1 {
                f.write_str("\n")?;
            }
        }

        Ok(())
    }
}

/// Number of pieces of each type in a position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceCounts([usize; 6]);

impl PieceCounts {
    /// Types with at least one piece, in `PieceType::all()` order.
    pub fn present(self) -> impl Iterator<Item = PieceType> {
        PieceType::all()
            .copied()
            .filter(move |kind| self[*kind] > 0)
    }

    /// The most numerous type. Ties go to the type listed first in
    /// `PieceType::all()`.
    pub fn majority(self) -> Option<PieceType> {
        PieceType::all()
            .rev()
            .copied()
            .filter(|kind| self[*kind] > 0)
            .max_by_key(|kind| self[*kind])
    }
}

impl Index<PieceType> for PieceCounts {
    type Output = usize;

    fn index(&self, kind: PieceType) -> &usize {
        &self.0[kind.index()]
    }
}
