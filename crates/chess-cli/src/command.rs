//! Parsing of the lines typed at the prompt.

use chess_core::{Move, Square};
use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' is not a square (expected something like e4)")]
    BadSquare(String),

    #[error("'{0}' expects a square argument")]
    MissingSquare(&'static str),

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
}

/// A command entered by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move given in coordinate notation.
    Move(Move),
    /// Select a piece and show where it can go.
    Select(Square),
    /// Move the selected piece.
    To(Square),
    /// List destinations without selecting.
    Moves(Square),
    Undo,
    Board,
    Fen,
    History,
    New,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parses one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("").to_ascii_lowercase();
        match cmd.as_str() {
            "" => Ok(Command::Empty),
            "select" | "s" => Ok(Command::Select(square_arg("select", parts.next())?)),
            "to" | "t" => Ok(Command::To(square_arg("to", parts.next())?)),
            "moves" | "m" => Ok(Command::Moves(square_arg("moves", parts.next())?)),
            "undo" | "u" => Ok(Command::Undo),
            "board" | "b" => Ok(Command::Board),
            "fen" => Ok(Command::Fen),
            "history" => Ok(Command::History),
            "new" => Ok(Command::New),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Move::from_coordinate(other)
                .map(Command::Move)
                .ok_or_else(|| CommandError::Unknown(input.to_string())),
        }
    }
}

fn square_arg(command: &'static str, arg: Option<&str>) -> Result<Square, CommandError> {
    let text = arg.ok_or(CommandError::MissingSquare(command))?;
    Square::from_algebraic(text).ok_or_else(|| CommandError::BadSquare(text.to_string()))
}

pub const HELP: &str = "\
commands:
  e2e4          move a piece (from square, to square)
  select <sq>   select a piece and list its moves (alias: s)
  to <sq>       move the selected piece (alias: t)
  moves <sq>    list legal moves of a piece (alias: m)
  undo          take back the last move (alias: u)
  board         print the board (alias: b)
  fen           print the position as FEN
  history       list the moves played
  new           start a new game
  quit          leave (alias: q)";
