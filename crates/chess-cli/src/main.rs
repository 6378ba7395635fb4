//! Chess CLI - play a two-player game in the terminal.
//!
//! Reads commands from stdin, one per line, and drives the rules engine.
//! Logs go to stderr and are filtered by `--log-level` or `RUST_LOG`.

mod command;
mod config;
mod render;

use anyhow::Context;
use chess_rules::{CastlingPolicy, Game, LegalMove, UndoResult};
use clap::Parser;
use command::{Command, HELP};
use config::{CliConfig, DisplayConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chess CLI - two-player chess with move validation and undo.
#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Two-player chess in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this FEN position instead of the standard one
    #[arg(long)]
    fen: Option<String>,

    /// Castling policy, overriding the configuration file (standard or legacy)
    #[arg(long)]
    castling: Option<CastlingPolicy>,

    /// Log filter, e.g. "debug" or "chess_rules=trace" (defaults to RUST_LOG, then "warn")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let config_path = args.config.clone().unwrap_or_else(CliConfig::default_path);
    let mut config = CliConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(policy) = args.castling {
        config.rules.castling = policy;
    }
    tracing::info!("Castling policy: {}", config.rules.castling);

    let mut game = match &args.fen {
        Some(fen) => Game::from_fen(fen, config.rules).context("invalid --fen")?,
        None => Game::with_config(config.rules),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session {
        game: &mut game,
        display: config.display,
        highlights: Vec::new(),
    };

    write!(stdout, "{}", session.render())?;
    writeln!(stdout, "Type 'help' for commands.")?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => {
                let reply = session.handle(cmd);
                if !reply.is_empty() {
                    writeln!(stdout, "{}", reply.trim_end())?;
                }
            }
            Err(err) => writeln!(stdout, "{}", err)?,
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Interactive state kept beside the game: what to highlight and how to draw.
struct Session<'a> {
    game: &'a mut Game,
    display: DisplayConfig,
    highlights: Vec<LegalMove>,
}

impl Session<'_> {
    fn render(&self) -> String {
        render::board(&self.game.current_state(), &self.highlights, self.display)
    }

    /// Executes one command and returns the text to show.
    fn handle(&mut self, cmd: Command) -> String {
        match cmd {
            Command::Move(m) => {
                self.highlights.clear();
                let result = self.game.attempt_move(m.from, m.to);
                self.after_move(&result)
            }
            Command::Select(sq) => match self.game.select_square(sq) {
                Ok(moves) => {
                    let listed = render::destinations(&moves);
                    self.highlights = moves;
                    format!("{}{}", self.render(), listed)
                }
                Err(err) => err.to_string(),
            },
            Command::To(sq) => {
                self.highlights.clear();
                let result = self.game.attempt_selected_move(sq);
                self.after_move(&result)
            }
            Command::Moves(sq) => render::destinations(&self.game.legal_moves(sq)),
            Command::Undo => {
                self.highlights.clear();
                match self.game.undo() {
                    UndoResult::Restored => self.render(),
                    UndoResult::NoHistory => "nothing to undo".to_string(),
                }
            }
            Command::Board => self.render(),
            Command::Fen => self.game.to_fen(),
            Command::History => {
                let moves: Vec<String> = self
                    .game
                    .move_history()
                    .map(|m| m.to_coordinate())
                    .collect();
                if moves.is_empty() {
                    "no moves yet".to_string()
                } else {
                    moves.join(" ")
                }
            }
            Command::New => {
                self.highlights.clear();
                self.game.new_game();
                self.render()
            }
            Command::Help => HELP.to_string(),
            Command::Quit | Command::Empty => String::new(),
        }
    }

    fn after_move(&self, result: &chess_rules::MoveResult) -> String {
        let summary = render::move_result(result);
        if result.is_applied() {
            format!("{}\n{}", summary, self.render())
        } else {
            summary
        }
    }
}
