mod check;
mod solve;
mod symmetries;

use chess_placement::board::{Mode, PieceType};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::error::Error;

fn mode_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("mode")
        .help("max: as many pieces as possible, none attacked. min: as few as possible, covering every square")
        .short("m")
        .long("mode")
        .possible_values(&["max", "min"])
        .case_insensitive(true)
        .required(true)
        .takes_value(true)
}

fn board_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("board")
        .help("A board string, rank 8 first, e.g. 8/8/8/3Q4/8/8/8/8")
        .required(true)
        .index(1)
}

fn diagram_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("diagram")
        .help("Also draw the board")
        .short("d")
        .long("diagram")
}

fn mode_of(matches: &ArgMatches) -> Result<Mode, Box<dyn Error>> {
    Ok(matches.value_of("mode").unwrap_or_default().parse()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = App::new("Chess Placement")
        .about("Single-piece placement puzzles on the 8x8 board")
        .subcommand(
            SubCommand::with_name("solve")
                .about("Print example solutions for a piece type and mode")
                .arg(
                    Arg::with_name("piece")
                        .help("king, queen, rook, bishop, knight or pawn")
                        .short("p")
                        .long("piece")
                        .required(true)
                        .takes_value(true),
                )
                .arg(mode_arg())
                .arg(
                    Arg::with_name("count")
                        .help("The number of solutions to print")
                        .short("n")
                        .long("count")
                        .default_value("1")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seed for reproducible output")
                        .long("seed")
                        .takes_value(true),
                )
                .arg(diagram_arg()),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("Judge a board string and list the squares at fault")
                .arg(board_arg())
                .arg(mode_arg())
                .arg(diagram_arg()),
        )
        .subcommand(
            SubCommand::with_name("symmetries")
                .about("Print the eight symmetric images of a board string")
                .arg(board_arg()),
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    let output = match matches.subcommand() {
        ("solve", Some(matches)) => {
            let kind: PieceType = matches.value_of("piece").unwrap_or_default().parse()?;
            let count: usize = matches.value_of("count").unwrap_or("1").parse()?;
            let seed = match matches.value_of("seed") {
                Some(seed) => Some(seed.parse::<u64>()?),
                None => None,
            };

            solve::run(
                kind,
                mode_of(matches)?,
                count,
                seed,
                matches.is_present("diagram"),
            )
        }
        ("check", Some(matches)) => check::run(
            matches.value_of("board").unwrap_or_default(),
            mode_of(matches)?,
            matches.is_present("diagram"),
        )?,
        ("symmetries", Some(matches)) => {
            symmetries::run(matches.value_of("board").unwrap_or_default())?
        }
        _ => String::new(),
    };

    print!("{}", output);

    Ok(())
}
