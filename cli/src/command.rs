/// One parsed line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch between reveal mode and flag mode.
    ToggleFlag,
    /// Act on a 1-based `(row, col)` position in the current mode.
    Act(usize, usize),
}

/// Parses an input line: `f` (any case) toggles flagging, otherwise the
/// line must be a 1-based `ROW COL` pair. Anything else is `None` and is
/// reported to the player without touching the game.
pub fn parse(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;

    if first.eq_ignore_ascii_case("f") {
        return tokens.next().is_none().then_some(Command::ToggleFlag);
    }

    let row = first.parse().ok()?;
    let col = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Command::Act(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_case_insensitive() {
        assert_eq!(parse("f"), Some(Command::ToggleFlag));
        assert_eq!(parse("F"), Some(Command::ToggleFlag));
        assert_eq!(parse("  f  "), Some(Command::ToggleFlag));
    }

    #[test]
    fn coordinates_parse_as_row_then_col() {
        assert_eq!(parse("3 7"), Some(Command::Act(3, 7)));
        assert_eq!(parse(" 12\t1 "), Some(Command::Act(12, 1)));
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("x y"), None);
        assert_eq!(parse("3"), None);
        assert_eq!(parse("3 4 5"), None);
        assert_eq!(parse("f 2"), None);
        assert_eq!(parse("-1 2"), None);
        assert_eq!(parse("3.5 2"), None);
    }
}
