use crate::attacks::{attacks, Lines, Reach};
use crate::board::{Mode, PieceType, Position, Square};
use log::trace;
use std::collections::BTreeSet;

/// Whether nothing has been placed yet.
pub fn is_empty(position: &Position) -> bool {
    position.is_empty()
}

/// Judges a position against a mode. Empty positions and positions mixing
/// piece types always fail.
pub fn is_valid(position: &Position, mode: Mode) -> bool {
    let kind = match position.single_type() {
        Some(kind) => kind,
        None => return false,
    };

    match mode {
        Mode::Max => is_independent(position, kind),
        Mode::Min => is_dominating(position, kind),
    }
}

fn is_independent(position: &Position, kind: PieceType) -> bool {
    match kind.reach() {
        Reach::Lines {
            orthogonal,
            diagonal,
        } => {
            let lines = Lines::of(position);
            let count = position.len() as u32;

            (!orthogonal || (lines.rank_count() == count && lines.file_count() == count))
                && (!diagonal
                    || (lines.diagonal_count() == count && lines.anti_diagonal_count() == count))
        }
        Reach::Leaps(leaps) => position.squares().all(|square| {
            !leaps.iter().any(|&(file_delta, rank_delta)| {
                occupied_at(position, square.offset(file_delta, rank_delta))
            })
        }),
    }
}

fn occupied_at(position: &Position, square: Option<Square>) -> bool {
    square.map_or(false, |square| position.get(square).is_some())
}

fn is_dominating(position: &Position, kind: PieceType) -> bool {
    let lines = Lines::of(position);

    Square::all().all(|square| {
        let covered = is_covered(position, kind, lines, square);
        if !covered {
            trace!("{} is not covered by any {}", square, kind);
        }
        covered
    })
}

fn is_covered(position: &Position, kind: PieceType, lines: Lines, square: Square) -> bool {
    match kind.reach() {
        Reach::Lines {
            orthogonal,
            diagonal,
        } => {
            (orthogonal && lines.covers_orthogonally(square))
                || (diagonal && lines.covers_diagonally(square))
        }
        // Off-board attacker squares read as empty.
        Reach::Leaps(leaps) => {
            position.get(square).is_some()
                || leaps.iter().any(|&(file_delta, rank_delta)| {
                    occupied_at(position, square.offset(-file_delta, -rank_delta))
                })
        }
    }
}

/// The squares that stop `position` from being valid for `mode`.
///
/// With more than one piece type on the board these are the squares of every
/// type but the most numerous (ties keep the type listed first in
/// `PieceType::all()`). Otherwise MAX reports each square in an attacking pair
/// and MIN reports each square nothing covers. An empty result on a
/// non-empty board means the position is valid; use [`is_empty`] to tell an
/// empty board apart.
pub fn find_issues(position: &Position, mode: Mode) -> Vec<Square> {
    let counts = position.counts();

    if counts.present().nth(1).is_some() {
        let majority = counts.majority();

        return position
            .iter()
            .filter(|(_, piece)| Some(piece.kind) != majority)
            .map(|(square, _)| square)
            .collect();
    }

    let kind = counts.present().next();

    match mode {
        Mode::Max => kind.map_or_else(Vec::new, |kind| attacking_squares(position, kind)),
        Mode::Min => {
            let lines = Lines::of(position);

            Square::all()
                .filter(|&square| match kind {
                    Some(kind) => !is_covered(position, kind, lines, square),
                    None => true,
                })
                .collect()
        }
    }
}

fn attacking_squares(position: &Position, kind: PieceType) -> Vec<Square> {
    let occupied: Vec<_> = position.squares().collect();
    let mut interference = BTreeSet::new();

    for (i, &a) in occupied.iter().enumerate() {
        for &b in &occupied[i + 1..] {
            if attacks(kind, a, b) || attacks(kind, b, a) {
                interference.insert(a);
                interference.insert(b);
            }
        }
    }

    interference.into_iter().collect()
}
