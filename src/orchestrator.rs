//! Drives a match between two move sources and reports progress.

use crate::board::Side;
use crate::contest::{Contest, RoundOutcome, TurnReport};
use crate::players::MoveSource;
use anyhow::Result;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Progress events sent to the front-end. The core never reads
/// anything back from the rendering side.
#[derive(Debug, Clone, Serialize)]
pub enum MatchEvent {
    /// A new round began.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
        /// Name of the player opening the round.
        starting: String,
    },
    /// A human player is expected to pick a cell.
    AwaitingInput {
        /// Name of the player on move.
        name: String,
    },
    /// An automated player is computing its move.
    Thinking {
        /// Name of the player on move.
        name: String,
    },
    /// A move was applied.
    MoveMade {
        /// Name of the player that moved.
        name: String,
        /// Cell index played.
        index: usize,
    },
    /// The board changed; rendered form attached.
    BoardChanged(String),
    /// A round finished. `winner` is `None` on a draw.
    RoundOver {
        /// Name of the round winner, if any.
        winner: Option<String>,
        /// X's round wins after this round.
        score_x: u8,
        /// O's round wins after this round.
        score_o: u8,
    },
    /// The match finished.
    MatchOver {
        /// Name of the match winner.
        winner: String,
    },
}

/// Runs one match to completion with exactly one outstanding move
/// request at a time.
pub struct Orchestrator {
    contest: Contest,
    mover_x: Box<dyn MoveSource>,
    mover_o: Box<dyn MoveSource>,
    event_tx: mpsc::UnboundedSender<MatchEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator over an externally configured contest.
    pub fn new(
        contest: Contest,
        mover_x: Box<dyn MoveSource>,
        mover_o: Box<dyn MoveSource>,
        event_tx: mpsc::UnboundedSender<MatchEvent>,
    ) -> Self {
        Self {
            contest,
            mover_x,
            mover_o,
            event_tx,
        }
    }

    /// Runs the match until it is decided; returns the winner's name.
    pub async fn run(mut self) -> Result<String> {
        info!(starting = %self.contest.starting_side(), "Starting match");
        self.send_round_started()?;

        loop {
            let side = self.contest.current_side();
            let name = self.contest.contestant(side).name().to_string();
            let board = self.contest.board().clone();

            let automated = match side {
                Side::X => self.mover_x.is_automated(),
                Side::O => self.mover_o.is_automated(),
            };
            if automated {
                self.event_tx.send(MatchEvent::Thinking { name: name.clone() })?;
            } else {
                self.event_tx
                    .send(MatchEvent::AwaitingInput { name: name.clone() })?;
            }

            debug!(player = %name, "Waiting for move");
            let source = match side {
                Side::X => &mut self.mover_x,
                Side::O => &mut self.mover_o,
            };
            let index = source.propose_move(&board).await?;

            let report = self.contest.play(index)?;
            self.event_tx.send(MatchEvent::MoveMade { name, index })?;
            self.event_tx
                .send(MatchEvent::BoardChanged(self.contest.board().render()))?;

            match report {
                TurnReport::Continue(_) => {}
                TurnReport::RoundOver(outcome) => {
                    let winner = match outcome {
                        RoundOutcome::Won(side) => {
                            Some(self.contest.contestant(side).name().to_string())
                        }
                        RoundOutcome::Draw => None,
                    };
                    self.event_tx.send(MatchEvent::RoundOver {
                        winner,
                        score_x: self.contest.contestant(Side::X).wins(),
                        score_o: self.contest.contestant(Side::O).wins(),
                    })?;
                    self.contest.begin_next_round()?;
                    self.send_round_started()?;
                }
                TurnReport::MatchOver(side) => {
                    let winner = self.contest.contestant(side).name().to_string();
                    self.event_tx.send(MatchEvent::RoundOver {
                        winner: Some(winner.clone()),
                        score_x: self.contest.contestant(Side::X).wins(),
                        score_o: self.contest.contestant(Side::O).wins(),
                    })?;
                    info!(winner = %winner, "Match over");
                    self.event_tx
                        .send(MatchEvent::MatchOver { winner: winner.clone() })?;
                    return Ok(winner);
                }
            }
        }
    }

    fn send_round_started(&self) -> Result<()> {
        let starting = self
            .contest
            .contestant(self.contest.starting_side())
            .name()
            .to_string();
        self.event_tx.send(MatchEvent::RoundStarted {
            round: self.contest.round(),
            starting,
        })?;
        Ok(())
    }
}
