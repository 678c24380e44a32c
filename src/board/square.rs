use super::ParseError;
use std::char;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The letter for a file index, `1 => 'a'` through `8 => 'h'`.
///
/// Total over every integer: `0` and `9` give the characters either side of
/// the alphabet (`` '`' `` and `'i'`), anything unrepresentable gives U+FFFD.
pub fn file_letter(file: i32) -> char {
    u32::try_from(96 + i64::from(file))
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Inverse of [`file_letter`].
pub fn file_index(letter: char) -> i32 {
    letter as i32 - 96
}

/// One of the 64 squares. File and rank both run from 1 to 8.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    pub fn new(file: i8, rank: i8) -> Option<Square> {
        if Square::on_board(file, rank) {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Caller guarantees `1 <= file, rank <= 8`.
    pub(crate) const fn at(file: i8, rank: i8) -> Square {
        Square { file, rank }
    }

    pub fn on_board(file: i8, rank: i8) -> bool {
        (1..=8).contains(&file) && (1..=8).contains(&rank)
    }

    /// All squares, file-major: a1, a2, ..., a8, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8).flat_map(|file| (1..=8).map(move |rank| Square { file, rank }))
    }

    pub fn file(self) -> i8 {
        self.file
    }

    pub fn rank(self) -> i8 {
        self.rank
    }

    /// `file + rank`, constant along lines running a8 to h1.
    pub fn diagonal(self) -> i8 {
        self.file + self.rank
    }

    /// `file - rank`, constant along lines running a1 to h8.
    pub fn anti_diagonal(self) -> i8 {
        self.file - self.rank
    }

    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        Square::new(self.file + file_delta, self.rank + rank_delta)
    }

    pub fn flip_rank(self) -> Square {
        Square::at(self.file, 9 - self.rank)
    }

    pub fn flip_file(self) -> Square {
        Square::at(9 - self.file, self.rank)
    }

    pub fn transpose(self) -> Square {
        Square::at(self.rank, self.file)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", file_letter(self.file.into()), self.rank)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let square = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                let file = i8::try_from(file_index(file)).ok();
                let rank = rank.to_digit(10).map(|rank| rank as i8);

                file.zip(rank).and_then(|(file, rank)| Square::new(file, rank))
            }
            _ => None,
        };

        square.ok_or_else(|| ParseError::Square(s.to_owned()))
    }
}
