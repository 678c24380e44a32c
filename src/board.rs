mod position;
mod square;

pub use position::{PieceCounts, Position};
pub use square::{file_index, file_letter, Square};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square label {0:?}")]
    Square(String),
    #[error("unknown piece type {0:?}")]
    PieceType(String),
    #[error("unknown mode {0:?}, expected MAX or MIN")]
    Mode(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub fn all() -> std::slice::Iter<'static, PieceType> {
        static ALL: [PieceType; 6] = [
            PieceType::King,
            PieceType::Queen,
            PieceType::Rook,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Pawn,
        ];

        ALL.iter()
    }

    /// Position of this type in `PieceType::all()`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceType> {
        match letter.to_ascii_uppercase() {
            'K' => Some(PieceType::King),
            'Q' => Some(PieceType::Queen),
            'R' => Some(PieceType::Rook),
            'B' => Some(PieceType::Bishop),
            'N' => Some(PieceType::Knight),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Pawn => "pawn",
        }
    }

    pub fn from_name(name: &str) -> Option<PieceType> {
        PieceType::all()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// The best placement count known for this piece, i.e. the target a
    /// player is shown for the given mode.
    pub fn best_known(self, mode: Mode) -> usize {
        match mode {
            Mode::Max => match self {
                PieceType::King => 16,
                PieceType::Queen => 8,
                PieceType::Rook => 8,
                PieceType::Bishop => 14,
                PieceType::Knight => 32,
                PieceType::Pawn => 32,
            },
            Mode::Min => match self {
                PieceType::King => 9,
                PieceType::Queen => 5,
                PieceType::Rook => 8,
                PieceType::Bishop => 8,
                PieceType::Knight => 12,
                PieceType::Pawn => 32,
            },
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let single_letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => PieceType::from_letter(letter),
            _ => None,
        };

        single_letter
            .or_else(|| PieceType::from_name(s))
            .ok_or_else(|| ParseError::PieceType(s.to_owned()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    pub fn letter(self) -> char {
        match self {
            Colour::White => 'w',
            Colour::Black => 'b',
        }
    }
}

/// A piece as stored in a position, e.g. `wK`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub colour: Colour,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(colour: Colour, kind: PieceType) -> Piece {
        Piece { colour, kind }
    }

    pub fn white(kind: PieceType) -> Piece {
        Piece::new(Colour::White, kind)
    }

    /// The board-string letter: upper case for white, lower case for black.
    pub fn board_char(self) -> char {
        match self.colour {
            Colour::White => self.kind.letter(),
            Colour::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_board_char(letter: char) -> Option<Piece> {
        let kind = PieceType::from_letter(letter)?;
        let colour = if letter.is_ascii_uppercase() {
            Colour::White
        } else {
            Colour::Black
        };

        Some(Piece::new(colour, kind))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.colour.letter(), self.kind.letter())
    }
}

/// The objective a position is judged against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Place as many mutually non-attacking pieces as possible.
    Max,
    /// Place as few pieces as possible while every square is attacked or occupied.
    Min,
}

impl Mode {
    pub fn both() -> std::slice::Iter<'static, Mode> {
        static BOTH: [Mode; 2] = [Mode::Max, Mode::Min];
        BOTH.iter()
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Mode::Max => "MAX",
            Mode::Min => "MIN",
        })
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(Mode::Max)
        } else if s.eq_ignore_ascii_case("min") {
            Ok(Mode::Min)
        } else {
            Err(ParseError::Mode(s.to_owned()))
        }
    }
}
