//! Command-line interface for dicey_tictactoe.

use clap::{Parser, ValueEnum};

/// Who sits on the O side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentKind {
    /// Minimax-driven opponent.
    Ai,
    /// Second human sharing the terminal.
    Human,
}

/// Best-of-three tic-tac-toe with a dice roll-off
#[derive(Parser, Debug)]
#[command(name = "dicey_tictactoe")]
#[command(about = "Best-of-three tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent type
    #[arg(long, value_enum, default_value_t = OpponentKind::Ai)]
    pub opponent: OpponentKind,

    /// Search depth for the AI opponent (plies)
    #[arg(long, default_value_t = 1)]
    pub depth: u32,

    /// Display name for the first player (plays X)
    #[arg(long, default_value = "You")]
    pub name: String,

    /// Display name for the second human (human mode only)
    #[arg(long, default_value = "Player2")]
    pub opponent_name: String,

    /// Emit match events as JSON lines instead of formatted text
    #[arg(long)]
    pub json: bool,
}
