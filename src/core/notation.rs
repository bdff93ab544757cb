//! Text notation for moves and final choices
//!
//! Moves are written `25 + 3` (spaces optional). `stop` or an empty line asks
//! to stop. A final choice is a single integer.

use super::{Command, Number, Proposal};
use std::fmt;

/// Error type for unreadable input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not shaped like `<number> <operator> <number>`
    Format(String),
    InvalidNumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(text) => write!(f, "Cannot read '{text}', expected e.g. 25 + 3"),
            Self::InvalidNumber(token) => write!(f, "'{token}' is not a whole number"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse one line of player input into a command
///
/// The operator symbol is not checked here; unknown operators are reported
/// by the engine.
///
/// # Errors
/// Returns `ParseError` if the line is neither `stop` nor a three-part move
/// with integer operands.
///
/// # Examples
/// ```
/// use countdown_numbers::core::notation::parse_command;
/// use countdown_numbers::core::{Command, Proposal};
///
/// assert_eq!(parse_command("25 x 3"), Ok(Command::Combine(Proposal::new(25, 3, "x"))));
/// assert_eq!(parse_command("100/4"), Ok(Command::Combine(Proposal::new(100, 4, "/"))));
/// assert_eq!(parse_command("STOP"), Ok(Command::Stop));
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let text = input.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("stop") {
        return Ok(Command::Stop);
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (lhs, symbol, rhs) = match tokens.as_slice() {
        [lhs, symbol, rhs] => (*lhs, *symbol, *rhs),
        [compact] => split_compact(compact).ok_or_else(|| ParseError::Format(text.to_string()))?,
        _ => return Err(ParseError::Format(text.to_string())),
    };

    Ok(Command::Combine(Proposal::new(
        parse_number(lhs)?,
        parse_number(rhs)?,
        symbol,
    )))
}

/// Parse the numbers given as a final choice
///
/// Returns every integer on the line; the engine decides whether exactly one
/// was given.
///
/// # Errors
/// Returns `ParseError::InvalidNumber` for any token that is not an integer.
pub fn parse_choice(input: &str) -> Result<Vec<Number>, ParseError> {
    input.split_whitespace().map(parse_number).collect()
}

fn parse_number(token: &str) -> Result<Number, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

/// Split `25+3` into its three parts
fn split_compact(text: &str) -> Option<(&str, &str, &str)> {
    let op_start = text.find(|c: char| !c.is_ascii_digit())?;
    let rest = &text[op_start..];
    let op_len = rest.find(|c: char| c.is_ascii_digit())?;
    if op_start == 0 {
        return None;
    }
    Some((&text[..op_start], &rest[..op_len], &rest[op_len..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combine(lhs: Number, symbol: &str, rhs: Number) -> Command {
        Command::Combine(Proposal::new(lhs, rhs, symbol))
    }

    #[test]
    fn parse_spaced_moves() {
        assert_eq!(parse_command("25 + 3"), Ok(combine(25, "+", 3)));
        assert_eq!(parse_command("  7 × 3 "), Ok(combine(7, "×", 3)));
        assert_eq!(parse_command("75 ÷ 25"), Ok(combine(75, "÷", 25)));
    }

    #[test]
    fn parse_compact_moves() {
        assert_eq!(parse_command("25-21"), Ok(combine(25, "-", 21)));
        assert_eq!(parse_command("8x3"), Ok(combine(8, "x", 3)));
        assert_eq!(parse_command("75÷25"), Ok(combine(75, "÷", 25)));
    }

    #[test]
    fn unknown_operator_is_kept_for_the_engine() {
        assert_eq!(parse_command("5 % 2"), Ok(combine(5, "%", 2)));
    }

    #[test]
    fn stop_and_empty_lines() {
        assert_eq!(parse_command(""), Ok(Command::Stop));
        assert_eq!(parse_command("   "), Ok(Command::Stop));
        assert_eq!(parse_command("stop"), Ok(Command::Stop));
        assert_eq!(parse_command("Stop"), Ok(Command::Stop));
    }

    #[test]
    fn malformed_moves() {
        assert!(matches!(parse_command("25 +"), Err(ParseError::Format(_))));
        assert!(matches!(parse_command("25"), Err(ParseError::Format(_))));
        assert!(matches!(parse_command("+3"), Err(ParseError::Format(_))));
        assert!(matches!(parse_command("1 + 2 + 3"), Err(ParseError::Format(_))));
        assert_eq!(
            parse_command("a + 3"),
            Err(ParseError::InvalidNumber("a".to_string()))
        );
        assert_eq!(
            parse_command("-3 + 4"),
            Err(ParseError::InvalidNumber("-3".to_string()))
        );
    }

    #[test]
    fn parse_choices() {
        assert_eq!(parse_choice("47"), Ok(vec![47]));
        assert_eq!(parse_choice(" 12 47 "), Ok(vec![12, 47]));
        assert_eq!(parse_choice(""), Ok(vec![]));
        assert_eq!(
            parse_choice("4x"),
            Err(ParseError::InvalidNumber("4x".to_string()))
        );
    }
}
