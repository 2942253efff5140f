use std::str::FromStr;

use sweeper_core::{Coord, Coord2, Difficulty};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Restart(Option<i64>),
    Difficulty(Difficulty),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command, type `h` for help")]
    Empty,
    #[error("Unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("Expected a row and a column")]
    MissingCoordinate,
    #[error("`{0}` is not a valid number")]
    BadNumber(String),
    #[error("Expected easy, medium or hard")]
    MissingDifficulty,
    #[error("Unknown difficulty `{0}`, expected easy, medium or hard")]
    BadDifficulty(String),
    #[error("Unexpected extra input `{0}`")]
    Trailing(String),
}

pub const HELP: &str = "\
r <row> <col>  reveal a cell
f <row> <col>  toggle a flag
n [mines]      start a new game (mines clamped to 10..=20)
d <tier>       set AI difficulty: easy, medium or hard
h              show this help
q              quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words)?),
            "n" | "new" | "restart" => Command::Restart(words.next().map(parse_number).transpose()?),
            "d" | "difficulty" => Command::Difficulty(parse_difficulty(words.next())?),
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words.next().ok_or(CommandError::MissingCoordinate)?;
        word.parse()
            .map_err(|_| CommandError::BadNumber(word.to_owned()))
    };
    Ok((next()?, next()?))
}

fn parse_difficulty(word: Option<&str>) -> Result<Difficulty, CommandError> {
    let word = word.ok_or(CommandError::MissingDifficulty)?;
    match word.to_ascii_lowercase().as_str() {
        "e" | "easy" => Ok(Difficulty::Easy),
        "m" | "medium" => Ok(Difficulty::Medium),
        "h" | "hard" => Ok(Difficulty::Hard),
        _ => Err(CommandError::BadDifficulty(word.to_owned())),
    }
}

fn parse_number(word: &str) -> Result<i64, CommandError> {
    word.parse()
        .map_err(|_| CommandError::BadNumber(word.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("r 3 4".parse::<Command>(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  F 0 9 ".parse::<Command>(), Ok(Command::Flag((0, 9))));
        assert_eq!("reveal 1 2".parse::<Command>(), Ok(Command::Reveal((1, 2))));
    }

    #[test]
    fn parses_restart_with_optional_mines() {
        assert_eq!("n".parse::<Command>(), Ok(Command::Restart(None)));
        assert_eq!("n 15".parse::<Command>(), Ok(Command::Restart(Some(15))));
        assert_eq!("new -3".parse::<Command>(), Ok(Command::Restart(Some(-3))));
    }

    #[test]
    fn parses_difficulty() {
        assert_eq!(
            "d hard".parse::<Command>(),
            Ok(Command::Difficulty(Difficulty::Hard))
        );
        assert_eq!(
            "difficulty M".parse::<Command>(),
            Ok(Command::Difficulty(Difficulty::Medium))
        );
        assert_eq!("d".parse::<Command>(), Err(CommandError::MissingDifficulty));
        assert_eq!(
            "d extreme".parse::<Command>(),
            Err(CommandError::BadDifficulty("extreme".into()))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "x 1 1".parse::<Command>(),
            Err(CommandError::Unknown("x".into()))
        );
        assert_eq!(
            "r 1".parse::<Command>(),
            Err(CommandError::MissingCoordinate)
        );
        assert_eq!(
            "r 1 300".parse::<Command>(),
            Err(CommandError::BadNumber("300".into()))
        );
        assert_eq!(
            "q now".parse::<Command>(),
            Err(CommandError::Trailing("now".into()))
        );
    }
}
