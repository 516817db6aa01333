//! Parsing a typed reaction response.
//!
//! Cards are numbered from 1 as shown to the player. `0`, `done` or `x`
//! finishes the selection; an empty line reacts to nothing. Tokens may be
//! separated by spaces or commas.

use crate::core::SelectionError;
use crate::engine::ReactionPick;

/// Parse one line of player input into reaction picks.
///
/// Only the syntax is checked here. Whether the picks are legal for the
/// round is decided by `ReactionSelection::validate`.
pub fn parse_reaction_input(line: &str) -> Result<Vec<ReactionPick>, SelectionError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<ReactionPick, SelectionError> {
    if token.eq_ignore_ascii_case("done") || token.eq_ignore_ascii_case("x") {
        return Ok(ReactionPick::Done);
    }
    match token.parse::<usize>() {
        Ok(0) => Ok(ReactionPick::Done),
        Ok(number) => Ok(ReactionPick::Card(number - 1)),
        Err(_) => Err(SelectionError::Unparseable(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(
            parse_reaction_input("1 3").unwrap(),
            vec![ReactionPick::Card(0), ReactionPick::Card(2)]
        );
        assert_eq!(
            parse_reaction_input(" 2,4 ").unwrap(),
            vec![ReactionPick::Card(1), ReactionPick::Card(3)]
        );
    }

    #[test]
    fn test_terminators() {
        assert!(parse_reaction_input("").unwrap().is_empty());
        assert!(parse_reaction_input(" , ").unwrap().is_empty());
        assert_eq!(parse_reaction_input("0").unwrap(), vec![ReactionPick::Done]);
        assert_eq!(parse_reaction_input("DONE").unwrap(), vec![ReactionPick::Done]);
        assert_eq!(
            parse_reaction_input("2 x").unwrap(),
            vec![ReactionPick::Card(1), ReactionPick::Done]
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(
            parse_reaction_input("1 two"),
            Err(SelectionError::Unparseable("two".to_string()))
        );
        assert_eq!(
            parse_reaction_input("-1"),
            Err(SelectionError::Unparseable("-1".to_string()))
        );
    }
}
