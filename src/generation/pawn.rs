use super::{decode_known, from_table};
use crate::board::{Mode, Position};
use rand::Rng;

/// Thirty-two pawns that never attack one another: either full ranks with a
/// gap above each, or full files with a gap beside each.
const THIRTY_TWO_PAWNS: [&str; 10] = [
    "PPPPPPPP/8/PPPPPPPP/8/PPPPPPPP/8/PPPPPPPP/8",
    "PPPPPPPP/8/PPPPPPPP/8/PPPPPPPP/8/8/PPPPPPPP",
    "PPPPPPPP/8/PPPPPPPP/8/8/PPPPPPPP/8/PPPPPPPP",
    "PPPPPPPP/8/8/PPPPPPPP/8/PPPPPPPP/8/PPPPPPPP",
    "8/PPPPPPPP/8/PPPPPPPP/8/PPPPPPPP/8/PPPPPPPP",
    "P1P1P1P1/P1P1P1P1/P1P1P1P1/P1P1P1P1/P1P1P1P1/P1P1P1P1/P1P1P1P1/P1P1P1P1",
    "P1P1P2P/P1P1P2P/P1P1P2P/P1P1P2P/P1P1P2P/P1P1P2P/P1P1P2P/P1P1P2P",
    "P1P2P1P/P1P2P1P/P1P2P1P/P1P2P1P/P1P2P1P/P1P2P1P/P1P2P1P/P1P2P1P",
    "P2P1P1P/P2P1P1P/P2P1P1P/P2P1P1P/P2P1P1P/P2P1P1P/P2P1P1P/P2P1P1P",
    "1P1P1P1P/1P1P1P1P/1P1P1P1P/1P1P1P1P/1P1P1P1P/1P1P1P1P/1P1P1P1P/1P1P1P1P",
];

/// Pawns only cover the rank ahead, so the first rank needs pawns of its own
/// and every other rank needs a full rank below it.
const COVERING_PAWNS: &str = "8/PPPPPPPP/8/PPPPPPPP/8/PPPPPPPP/8/PPPPPPPP";

pub(super) fn solve<G: Rng>(mode: Mode, rng: &mut G) -> Position {
    match mode {
        Mode::Max => from_table(rng, &THIRTY_TWO_PAWNS),
        Mode::Min => decode_known(COVERING_PAWNS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_string::encode;
    use crate::generation::decode_table;
    use crate::validity::is_valid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn table_entries_are_independent() {
        let entries = decode_table(&THIRTY_TWO_PAWNS);
        let distinct: HashSet<_> = entries.iter().collect();

        assert_eq!(distinct.len(), 10);
        for pawns in &entries {
            assert_eq!(pawns.len(), 32);
            assert!(is_valid(pawns, Mode::Max), "\n{}", pawns);
        }
    }

    #[test]
    fn covering_pawns_are_fixed() {
        let mut rng = StdRng::seed_from_u64(30);

        for _ in 0..20 {
            let pawns = solve(Mode::Min, &mut rng);

            assert_eq!(encode(&pawns), COVERING_PAWNS);
            assert!(is_valid(&pawns, Mode::Min));
        }
    }

    #[test]
    fn covering_pawns_draw_nothing_from_the_rng() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut untouched = rng.clone();

        solve(Mode::Min, &mut rng);

        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }
}
