use chess_placement::board::{Mode, PieceType};
use chess_placement::{board_string, generation};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn run(
    kind: PieceType,
    mode: Mode,
    count: usize,
    seed: Option<u64>,
    diagram: bool,
) -> String {
    info!(
        "{} {} solutions for {} ({} pieces)",
        count,
        mode,
        kind,
        kind.best_known(mode)
    );

    match seed {
        Some(seed) => render(kind, mode, count, diagram, &mut StdRng::seed_from_u64(seed)),
        None => render(kind, mode, count, diagram, &mut rand::thread_rng()),
    }
}

fn render<G: Rng>(
    kind: PieceType,
    mode: Mode,
    count: usize,
    diagram: bool,
    rng: &mut G,
) -> String {
    let mut output = String::new();

    for _ in 0..count {
        let position = generation::solve(kind, mode, rng);

        output.push_str(&format!("{}\n", board_string::encode(&position)));
        if diagram {
            output.push_str(&format!("{}\n\n", position));
        }
    }

    output
}
