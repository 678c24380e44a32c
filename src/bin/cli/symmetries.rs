use chess_placement::board_string::BoardStringError;
use chess_placement::symmetry::{get_symmetries, Symmetry};

pub fn run(board: &str) -> Result<String, BoardStringError> {
    let mut output = String::new();

    for (symmetry, image) in Symmetry::all().zip(get_symmetries(board)?.iter()) {
        output.push_str(&format!("{:<24} {}\n", format!("{:?}", symmetry), image));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_lines() {
        let output = run("6Q1/2Q5/8/8/7Q/3Q4/8/Q7").unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Identity "));
        assert!(lines[0].ends_with(" 6Q1/2Q5/8/8/7Q/3Q4/8/Q7"));
        assert!(lines[4].ends_with(" 3Q4/7Q/8/8/2Q5/6Q1/8/Q7"));
    }

    #[test]
    fn malformed_board() {
        assert!(run("QQQQQQQQQ/8/8/8/8/8/8/8").is_err());
    }
}
