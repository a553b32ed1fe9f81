mod print;
mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use board_core::board::Board;
use board_core::square::Square;
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};

/// Environment variable holding the log filter, e.g. `debug`.
const LOG_ENV: &str = "CHESSBOARD_LOG";

#[derive(Parser, Debug, Clone)]
struct BoardParams {
    /// Starting layout as a 64-character board string, A1 first
    /// (e.g. "RNBQKBNRPPPPPPPP--------...pppppppprnbqkbnr")
    #[arg(long, value_name = "BOARD")]
    position: Option<String>,

    /// Draw pieces as letters instead of Unicode chess symbols
    #[arg(long)]
    ascii: bool,
}

#[derive(Parser, Debug)]
#[command(version, about = "Chessboard you move pieces on by clicking squares")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    board_params: BoardParams,

    /// Write log records to this file
    #[arg(long = "log-file", value_name = "FILE", value_hint = clap::ValueHint::FilePath, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Print the board, optionally after a sequence of clicks, and exit
    Print {
        /// Squares clicked in order, e.g. `e2 e4 g8 f6`
        #[arg(value_name = "SQUARE")]
        clicks: Vec<Square>,

        #[command(flatten)]
        board_params: BoardParams,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    if let Some(path) = &args.log_file {
        init_logger(path)?;
    }

    match args.command {
        Some(SubCommands::Print {
            clicks,
            board_params,
        }) => {
            let board = load_board(board_params.position.as_deref())?;
            print::print_after_clicks(board, &clicks, board_params.ascii);
            Ok(())
        }
        None => {
            let board = load_board(args.board_params.position.as_deref())?;
            tui::run(board, args.board_params.ascii).context("Terminal UI failed")
        }
    }
}

fn load_board(position: Option<&str>) -> Result<Board> {
    match position {
        Some(position) => Board::from_string(position)
            .with_context(|| format!("Invalid --position '{position}'")),
        None => Ok(Board::new()),
    }
}

/// Sends log records to `path`. The terminal itself is taken by the UI, so
/// there is no console logging.
fn init_logger(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
