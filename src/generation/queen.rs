use super::from_table;
use crate::board::{Mode, Position};
use rand::Rng;

/// Every solution of the eight queens puzzle.
const EIGHT_QUEENS: [&str; 92] = [
    "3Q4/1Q6/6Q1/2Q5/5Q2/7Q/4Q3/Q7",
    "4Q3/1Q6/3Q4/6Q1/2Q5/7Q/5Q2/Q7",
    "2Q5/4Q3/1Q6/7Q/5Q2/3Q4/6Q1/Q7",
    "2Q5/5Q2/3Q4/1Q6/7Q/4Q3/6Q1/Q7",
    "4Q3/6Q1/Q7/2Q5/7Q/5Q2/3Q4/1Q6",
    "3Q4/5Q2/7Q/2Q5/Q7/6Q1/4Q3/1Q6",
    "2Q5/5Q2/7Q/Q7/3Q4/6Q1/4Q3/1Q6",
    "4Q3/2Q5/7Q/3Q4/6Q1/Q7/5Q2/1Q6",
    "4Q3/6Q1/3Q4/Q7/2Q5/7Q/5Q2/1Q6",
    "3Q4/Q7/4Q3/7Q/5Q2/2Q5/6Q1/1Q6",
    "2Q5/5Q2/3Q4/Q7/7Q/4Q3/6Q1/1Q6",
    "3Q4/6Q1/4Q3/2Q5/Q7/5Q2/7Q/1Q6",
    "5Q2/3Q4/1Q6/7Q/4Q3/6Q1/Q7/2Q5",
    "5Q2/3Q4/6Q1/Q7/7Q/1Q6/4Q3/2Q5",
    "Q7/6Q1/3Q4/5Q2/7Q/1Q6/4Q3/2Q5",
    "5Q2/7Q/1Q6/3Q4/Q7/6Q1/4Q3/2Q5",
    "5Q2/1Q6/6Q1/Q7/3Q4/7Q/4Q3/2Q5",
    "3Q4/6Q1/Q7/7Q/4Q3/1Q6/5Q2/2Q5",
    "4Q3/7Q/3Q4/Q7/6Q1/1Q6/5Q2/2Q5",
    "3Q4/7Q/Q7/4Q3/6Q1/1Q6/5Q2/2Q5",
    "1Q6/6Q1/4Q3/7Q/Q7/3Q4/5Q2/2Q5",
    "Q7/6Q1/4Q3/7Q/1Q6/3Q4/5Q2/2Q5",
    "1Q6/4Q3/6Q1/3Q4/Q7/7Q/5Q2/2Q5",
    "3Q4/1Q6/6Q1/4Q3/Q7/7Q/5Q2/2Q5",
    "4Q3/6Q1/Q7/3Q4/1Q6/7Q/5Q2/2Q5",
    "5Q2/3Q4/Q7/4Q3/7Q/1Q6/6Q1/2Q5",
    "4Q3/Q7/3Q4/5Q2/7Q/1Q6/6Q1/2Q5",
    "4Q3/1Q6/5Q2/Q7/6Q1/3Q4/7Q/2Q5",
    "5Q2/2Q5/6Q1/1Q6/7Q/4Q3/Q7/3Q4",
    "1Q6/6Q1/2Q5/5Q2/7Q/4Q3/Q7/3Q4",
    "6Q1/2Q5/Q7/5Q2/7Q/4Q3/1Q6/3Q4",
    "4Q3/Q7/7Q/5Q2/2Q5/6Q1/1Q6/3Q4",
    "Q7/4Q3/7Q/5Q2/2Q5/6Q1/1Q6/3Q4",
    "2Q5/5Q2/7Q/Q7/4Q3/6Q1/1Q6/3Q4",
    "5Q2/2Q5/Q7/6Q1/4Q3/7Q/1Q6/3Q4",
    "6Q1/4Q3/2Q5/Q7/5Q2/7Q/1Q6/3Q4",
    "6Q1/2Q5/7Q/1Q6/4Q3/Q7/5Q2/3Q4",
    "4Q3/2Q5/Q7/6Q1/1Q6/7Q/5Q2/3Q4",
    "1Q6/4Q3/6Q1/Q7/2Q5/7Q/5Q2/3Q4",
    "2Q5/5Q2/1Q6/4Q3/7Q/Q7/6Q1/3Q4",
    "5Q2/Q7/4Q3/1Q6/7Q/2Q5/6Q1/3Q4",
    "7Q/2Q5/Q7/5Q2/1Q6/4Q3/6Q1/3Q4",
    "1Q6/7Q/5Q2/Q7/2Q5/4Q3/6Q1/3Q4",
    "4Q3/6Q1/1Q6/5Q2/2Q5/Q7/7Q/3Q4",
    "2Q5/5Q2/1Q6/6Q1/4Q3/Q7/7Q/3Q4",
    "5Q2/1Q6/6Q1/Q7/2Q5/4Q3/7Q/3Q4",
    "2Q5/6Q1/1Q6/7Q/5Q2/3Q4/Q7/4Q3",
    "5Q2/2Q5/6Q1/1Q6/3Q4/7Q/Q7/4Q3",
    "3Q4/1Q6/6Q1/2Q5/5Q2/7Q/Q7/4Q3",
    "6Q1/Q7/2Q5/7Q/5Q2/3Q4/1Q6/4Q3",
    "Q7/5Q2/7Q/2Q5/6Q1/3Q4/1Q6/4Q3",
    "2Q5/7Q/3Q4/6Q1/Q7/5Q2/1Q6/4Q3",
    "5Q2/2Q5/6Q1/3Q4/Q7/7Q/1Q6/4Q3",
    "6Q1/3Q4/1Q6/7Q/5Q2/Q7/2Q5/4Q3",
    "3Q4/5Q2/7Q/1Q6/6Q1/Q7/2Q5/4Q3",
    "1Q6/5Q2/Q7/6Q1/3Q4/7Q/2Q5/4Q3",
    "1Q6/3Q4/5Q2/7Q/2Q5/Q7/6Q1/4Q3",
    "2Q5/5Q2/7Q/1Q6/3Q4/Q7/6Q1/4Q3",
    "5Q2/2Q5/Q7/7Q/3Q4/1Q6/6Q1/4Q3",
    "7Q/3Q4/Q7/2Q5/5Q2/1Q6/6Q1/4Q3",
    "3Q4/7Q/Q7/2Q5/5Q2/1Q6/6Q1/4Q3",
    "1Q6/5Q2/7Q/2Q5/Q7/3Q4/6Q1/4Q3",
    "6Q1/1Q6/5Q2/2Q5/Q7/3Q4/7Q/4Q3",
    "2Q5/5Q2/1Q6/6Q1/Q7/3Q4/7Q/4Q3",
    "3Q4/6Q1/2Q5/7Q/1Q6/4Q3/Q7/5Q2",
    "3Q4/7Q/4Q3/2Q5/Q7/6Q1/1Q6/5Q2",
    "2Q5/4Q3/7Q/3Q4/Q7/6Q1/1Q6/5Q2",
    "3Q4/1Q6/7Q/4Q3/6Q1/Q7/2Q5/5Q2",
    "4Q3/6Q1/1Q6/3Q4/7Q/Q7/2Q5/5Q2",
    "6Q1/3Q4/1Q6/4Q3/7Q/Q7/2Q5/5Q2",
    "7Q/1Q6/3Q4/Q7/6Q1/4Q3/2Q5/5Q2",
    "6Q1/1Q6/3Q4/Q7/7Q/4Q3/2Q5/5Q2",
    "4Q3/Q7/7Q/3Q4/1Q6/6Q1/2Q5/5Q2",
    "3Q4/Q7/4Q3/7Q/1Q6/6Q1/2Q5/5Q2",
    "4Q3/1Q6/7Q/Q7/3Q4/6Q1/2Q5/5Q2",
    "2Q5/6Q1/1Q6/7Q/4Q3/Q7/3Q4/5Q2",
    "2Q5/Q7/6Q1/4Q3/7Q/1Q6/3Q4/5Q2",
    "7Q/1Q6/4Q3/2Q5/Q7/6Q1/3Q4/5Q2",
    "2Q5/4Q3/1Q6/7Q/Q7/6Q1/3Q4/5Q2",
    "2Q5/4Q3/6Q1/Q7/3Q4/1Q6/7Q/5Q2",
    "4Q3/1Q6/3Q4/5Q2/7Q/2Q5/Q7/6Q1",
    "5Q2/2Q5/4Q3/7Q/Q7/3Q4/1Q6/6Q1",
    "4Q3/7Q/3Q4/Q7/2Q5/5Q2/1Q6/6Q1",
    "3Q4/1Q6/4Q3/7Q/5Q2/Q7/2Q5/6Q1",
    "3Q4/5Q2/Q7/4Q3/1Q6/7Q/2Q5/6Q1",
    "5Q2/2Q5/Q7/7Q/4Q3/1Q6/3Q4/6Q1",
    "4Q3/2Q5/Q7/5Q2/7Q/1Q6/3Q4/6Q1",
    "3Q4/1Q6/7Q/5Q2/Q7/2Q5/4Q3/6Q1",
    "5Q2/2Q5/4Q3/6Q1/Q7/3Q4/1Q6/7Q",
    "5Q2/3Q4/6Q1/Q7/2Q5/4Q3/1Q6/7Q",
    "3Q4/6Q1/4Q3/1Q6/5Q2/Q7/2Q5/7Q",
    "4Q3/6Q1/1Q6/5Q2/2Q5/Q7/3Q4/7Q",
];

/// Five queens covering the board, one per symmetry class. The other
/// members come from applying a random symmetry.
const FIVE_QUEENS: [&str; 6] = [
    "6Q1/2Q5/8/8/7Q/3Q4/8/Q7",
    "6Q1/8/1Q6/8/4Q3/7Q/8/3Q4",
    "8/8/3Q4/6Q1/4Q3/2Q5/5Q2/8",
    "6Q1/8/4Q3/3Q4/2Q5/8/Q7/8",
    "8/2Q5/8/6Q1/3Q4/Q7/8/4Q3",
    "7Q/8/3Q4/Q7/8/5Q2/8/2Q5",
];

pub(super) fn solve<G: Rng>(mode: Mode, rng: &mut G) -> Position {
    match mode {
        Mode::Max => from_table(rng, &EIGHT_QUEENS),
        Mode::Min => {
            let queens = from_table(rng, &FIVE_QUEENS);
            queens.transformed(rng.gen())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::decode_table;
    use crate::symmetry::Symmetry;
    use crate::validity::is_valid;
    use std::collections::HashSet;

    #[test]
    fn eight_queens_table_is_complete() {
        let solutions = decode_table(&EIGHT_QUEENS);
        let distinct: HashSet<_> = solutions.iter().collect();

        assert_eq!(distinct.len(), 92);
        assert!(solutions
            .iter()
            .all(|queens| queens.len() == 8 && is_valid(queens, Mode::Max)));
    }

    #[test]
    fn eight_queens_table_is_closed_under_symmetry() {
        let solutions: HashSet<_> = decode_table(&EIGHT_QUEENS).into_iter().collect();

        for queens in &solutions {
            for &symmetry in Symmetry::all() {
                assert!(solutions.contains(&queens.transformed(symmetry)));
            }
        }
    }

    #[test]
    fn five_queens_dominate_in_every_orientation() {
        let mut orbit = HashSet::new();

        for queens in decode_table(&FIVE_QUEENS) {
            assert_eq!(queens.len(), 5);

            for &symmetry in Symmetry::all() {
                let transformed = queens.transformed(symmetry);

                assert!(is_valid(&transformed, Mode::Min));
                orbit.insert(transformed);
            }
        }

        // Disjoint orbits. The fourth entry is its own mirror in the a8-h1 diagonal.
        assert_eq!(orbit.len(), 8 * 5 + 4);
    }
}
