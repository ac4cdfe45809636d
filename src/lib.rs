//! Best-of-three tic-tac-toe with a dice-determined starting order.
//!
//! The core is a depth-bounded minimax search ([`Minimax`]) over the
//! 3x3 board with a heuristic static evaluator ([`evaluate`]) and a
//! randomized tie-break, plus the turn/match state machine
//! ([`Contest`]) that drives rounds to completion and accumulates
//! round wins. Everything a front-end needs flows through
//! [`MoveSource`] (moves in) and [`MatchEvent`] (progress out).
//!
//! # Example
//!
//! ```
//! use dicey_tictactoe::{Contest, Minimax, Side, TurnReport};
//!
//! let mut contest = Contest::new("You".into(), "Marie(AI)".into(), Side::X);
//! let mut engine = Minimax::new(1);
//!
//! let index = engine.find_best_move(contest.board(), Side::X).unwrap();
//! let report = contest.play(index).unwrap();
//! assert_eq!(report, TurnReport::Continue(Side::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cli;
mod contest;
mod dice;
mod error;
mod eval;
mod orchestrator;
mod players;
mod rules;
mod search;

pub use board::{Board, Cell, Side};
pub use cli::{Cli, OpponentKind};
pub use contest::{Contest, Contestant, Phase, RoundOutcome, TurnReport, WINS_NEEDED};
pub use dice::{DiceRoll, roll_off};
pub use error::GameError;
pub use eval::{LINES, evaluate, evaluate_line};
pub use orchestrator::{MatchEvent, Orchestrator};
pub use players::{AiMoveSource, HumanMoveSource, MoveSource};
pub use rules::{WIN_PATTERNS, has_won, is_over, round_winner};
pub use search::{FirstSelector, Minimax, MoveSelector, UniformSelector};
