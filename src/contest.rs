//! Turn and match state machine with best-of-three scoring.

use crate::board::{Board, Side};
use crate::error::GameError;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Round wins needed to take the match.
pub const WINS_NEEDED: u8 = 3;

/// One of the two participants, with its accumulated round wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contestant {
    name: String,
    side: Side,
    wins: u8,
}

impl Contestant {
    fn new(name: String, side: Side) -> Self {
        Self {
            name,
            side,
            wins: 0,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned side.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Round wins so far (0..=3).
    pub fn wins(&self) -> u8 {
        self.wins
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The side completed a line.
    Won(Side),
    /// Full board, no line.
    Draw,
}

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A round is being played and a move is expected.
    InRound,
    /// The round ended; [`Contest::begin_next_round`] starts the next.
    RoundOver(RoundOutcome),
    /// The match is decided. Terminal.
    MatchOver(Side),
}

/// What a single applied move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// Play continues; the given side moves next.
    Continue(Side),
    /// The round (but not the match) ended.
    RoundOver(RoundOutcome),
    /// The move decided the match for the given side.
    MatchOver(Side),
}

/// Best-of-three match state: board, contestants, current mover, and
/// phase.
///
/// The starting side is supplied externally (the dice roll-off,
/// [`crate::roll_off`]) and re-used for every round of the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    board: Board,
    x: Contestant,
    o: Contestant,
    starting_side: Side,
    current_side: Side,
    phase: Phase,
    round: u32,
}

impl Contest {
    /// Creates a match between `x_name` and `o_name`, with
    /// `starting_side` opening every round.
    #[instrument]
    pub fn new(x_name: String, o_name: String, starting_side: Side) -> Self {
        info!(%starting_side, "Creating new match");
        Self {
            board: Board::new(),
            x: Contestant::new(x_name, Side::X),
            o: Contestant::new(o_name, Side::O),
            starting_side,
            current_side: starting_side,
            phase: Phase::InRound,
            round: 1,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side expected to move next while a round is in progress.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Side that opens every round of this match.
    pub fn starting_side(&self) -> Side {
        self.starting_side
    }

    /// Round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Contestant playing the given side.
    pub fn contestant(&self, side: Side) -> &Contestant {
        match side {
            Side::X => &self.x,
            Side::O => &self.o,
        }
    }

    fn contestant_mut(&mut self, side: Side) -> &mut Contestant {
        match side {
            Side::X => &mut self.x,
            Side::O => &mut self.o,
        }
    }

    /// Applies the current side's move at `index`.
    ///
    /// The move must come from [`Board::available_moves`]; anything
    /// else is refused with a [`GameError`] before the board is
    /// touched.
    #[instrument(skip(self), fields(round = self.round, side = %self.current_side))]
    pub fn play(&mut self, index: usize) -> Result<TurnReport, GameError> {
        match self.phase {
            Phase::MatchOver(_) => return Err(GameError::MatchFinished),
            Phase::RoundOver(_) => return Err(GameError::RoundClosed),
            Phase::InRound => {}
        }
        if index >= Board::SIZE {
            return Err(GameError::OutOfBounds { index });
        }
        if !self.board.is_empty(index) {
            return Err(GameError::InvalidMove { index });
        }

        let side = self.current_side;
        self.board.place(index, side);
        debug!(index, "Move applied");

        if let Some(winner) = rules::round_winner(&self.board) {
            let contestant = self.contestant_mut(winner);
            contestant.wins += 1;
            let wins = contestant.wins;
            info!(%winner, wins, "Round won");
            if wins >= WINS_NEEDED {
                info!(%winner, "Match decided");
                self.phase = Phase::MatchOver(winner);
                return Ok(TurnReport::MatchOver(winner));
            }
            self.phase = Phase::RoundOver(RoundOutcome::Won(winner));
            return Ok(TurnReport::RoundOver(RoundOutcome::Won(winner)));
        }

        if !self.board.has_available_move() {
            info!("Round drawn");
            self.phase = Phase::RoundOver(RoundOutcome::Draw);
            return Ok(TurnReport::RoundOver(RoundOutcome::Draw));
        }

        self.current_side = side.opponent();
        Ok(TurnReport::Continue(self.current_side))
    }

    /// Clears the board and opens the next round with the same
    /// starting side as every round of this match. Only valid from
    /// [`Phase::RoundOver`].
    #[instrument(skip(self))]
    pub fn begin_next_round(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::RoundOver(_) => {
                self.board.clear();
                self.current_side = self.starting_side;
                self.round += 1;
                self.phase = Phase::InRound;
                info!(round = self.round, starting = %self.starting_side, "Round started");
                Ok(())
            }
            Phase::MatchOver(_) => Err(GameError::MatchFinished),
            Phase::InRound => Err(GameError::RoundInProgress),
        }
    }
}
