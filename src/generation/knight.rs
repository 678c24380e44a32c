use super::from_table;
use crate::board::{Mode, Position};
use rand::Rng;

/// Knights on every square of one colour.
const ONE_COLOUR: [&str; 2] = [
    "N1N1N1N1/1N1N1N1N/N1N1N1N1/1N1N1N1N/N1N1N1N1/1N1N1N1N/N1N1N1N1/1N1N1N1N",
    "1N1N1N1N/N1N1N1N1/1N1N1N1N/N1N1N1N1/1N1N1N1N/N1N1N1N1/1N1N1N1N/N1N1N1N1",
];

/// The two twelve-knight dominating sets, mirror images of each other.
const TWELVE_KNIGHTS: [&str; 2] = [
    "8/5N2/1NN1NN2/2N5/5N2/2NN1NN1/2N5/8",
    "8/2N5/2NN1NN1/5N2/2N5/1NN1NN2/5N2/8",
];

pub(super) fn solve<G: Rng>(mode: Mode, rng: &mut G) -> Position {
    match mode {
        Mode::Max => from_table(rng, &ONE_COLOUR),
        Mode::Min => from_table(rng, &TWELVE_KNIGHTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::decode_table;
    use crate::symmetry::Symmetry;
    use crate::validity::is_valid;

    #[test]
    fn one_colour_is_independent() {
        for knights in decode_table(&ONE_COLOUR) {
            assert_eq!(knights.len(), 32);
            assert!(is_valid(&knights, Mode::Max));
        }
    }

    #[test]
    fn twelve_knights_dominate() {
        let sets = decode_table(&TWELVE_KNIGHTS);

        for knights in &sets {
            assert_eq!(knights.len(), 12);
            assert!(is_valid(knights, Mode::Min));
        }

        assert_eq!(sets[0].transformed(Symmetry::FlipHorizontal), sets[1]);
    }
}
