use chess_placement::board::{Mode, Square};
use chess_placement::board_string::{self, BoardStringError};
use chess_placement::validity::{find_issues, is_empty, is_valid};

pub fn run(board: &str, mode: Mode, diagram: bool) -> Result<String, BoardStringError> {
    let position = board_string::decode(board)?;
    let mut output = String::new();

    let verdict = if is_empty(&position) {
        "empty"
    } else if is_valid(&position, mode) {
        "valid"
    } else {
        "invalid"
    };

    let issues = find_issues(&position, mode);

    output.push_str(&format!("{} {}: {}\n", mode, position.len(), verdict));
    if !issues.is_empty() {
        output.push_str(&format!("issues: {}\n", labels(&issues)));
    }
    if diagram {
        output.push_str(&format!("{}\n", position));
    }

    Ok(output)
}

fn labels(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|square| square.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn valid_board() {
        let output = run("6Q1/2Q5/8/8/7Q/3Q4/8/Q7", Mode::Min, false).unwrap();

        assert_snapshot!(output.trim_end(), @"MIN 5: valid");
    }

    #[test]
    fn attacking_pair() {
        let output = run("8/8/8/8/8/8/8/KK6", Mode::Max, false).unwrap();

        assert_eq!(output, "MAX 2: invalid\nissues: a1 b1\n");
    }

    #[test]
    fn empty_board() {
        let output = run("8/8/8/8/8/8/8/8", Mode::Max, false).unwrap();

        assert_snapshot!(output.trim_end(), @"MAX 0: empty");
    }

    #[test]
    fn diagram() {
        let output = run("8/8/8/8/8/8/8/K7", Mode::Max, true).unwrap();

        assert!(output.ends_with("........\nK.......\n"));
    }

    #[test]
    fn malformed_board() {
        assert!(run("8/8", Mode::Max, false).is_err());
    }
}
