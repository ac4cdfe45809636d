//! Depth-bounded minimax with a randomized tie-break.

use crate::board::{Board, Side};
use crate::eval;
use rand::Rng;

/// Selection strategy for choosing among equally acceptable candidate
/// moves. Injectable so tests can pin search outcomes down while
/// production keeps uniform randomness.
pub trait MoveSelector {
    /// Picks one index out of `count` candidates. `count` is always at
    /// least one.
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform random selection over the candidate list.
#[derive(Debug, Default)]
pub struct UniformSelector;

impl MoveSelector for UniformSelector {
    fn pick(&mut self, count: usize) -> usize {
        rand::rng().random_range(0..count)
    }
}

/// Always picks the first candidate. Makes search deterministic for
/// tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstSelector;

impl MoveSelector for FirstSelector {
    fn pick(&mut self, _count: usize) -> usize {
        0
    }
}

/// A scored move at one recursion level. `position` is `None` at a
/// leaf, where only the evaluation matters.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    score: i32,
    position: Option<usize>,
}

/// Minimax engine over the 3x3 board.
///
/// Not textbook minimax: at every recursion level the engine picks
/// uniformly among the moves tied for the best score, and the realized
/// pick's score is what the parent level consumes. On a completely
/// untouched board (nine candidates) the pick is uniform over all
/// moves regardless of score, so the opening is not exploitable by
/// memorizing one deterministic reply. See DESIGN.md.
#[derive(Debug)]
pub struct Minimax<S = UniformSelector> {
    depth: u32,
    selector: S,
}

impl Minimax<UniformSelector> {
    /// Creates an engine searching to `depth` plies with the
    /// production random tie-break.
    pub fn new(depth: u32) -> Self {
        Self::with_selector(depth, UniformSelector::default())
    }
}

impl<S: MoveSelector> Minimax<S> {
    /// Creates an engine with an explicit tie-break selector.
    pub fn with_selector(depth: u32, selector: S) -> Self {
        Self { depth, selector }
    }

    /// Configured search depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Best move for `side` on `board`, or `None` when the board is
    /// full. The input board is never mutated: search runs on an owned
    /// scratch copy with strict backtracking.
    pub fn find_best_move(&mut self, board: &Board, side: Side) -> Option<usize> {
        let mut scratch = board.clone();
        let best = self.minimax(&mut scratch, self.depth, side, side);
        debug_assert_eq!(&scratch, board, "search must restore every hypothetical move");
        best.position
    }

    fn minimax(&mut self, board: &mut Board, depth: u32, mover: Side, maximizing: Side) -> Candidate {
        let moves = board.available_moves();
        let mut best = Candidate {
            score: if mover == maximizing { -10_000 } else { 10_000 },
            position: None,
        };
        let mut scored = Vec::with_capacity(moves.len());

        if moves.is_empty() || depth == 0 {
            // Leaf or cutoff: static evaluation, no move choice.
            best.score = eval::evaluate(board, maximizing);
        } else {
            for index in moves {
                board.place(index, mover);
                let score = self
                    .minimax(board, depth - 1, mover.opponent(), maximizing)
                    .score;
                scored.push(Candidate {
                    score,
                    position: Some(index),
                });
                if (mover == maximizing && score > best.score)
                    || (mover != maximizing && score < best.score)
                {
                    best = Candidate {
                        score,
                        position: Some(index),
                    };
                }
                board.clear_cell(index);
            }
        }

        // Randomized tie-break, applied at every level: all candidates
        // on an untouched board, otherwise those tied with the best
        // score.
        if !scored.is_empty() {
            if scored.len() == Board::SIZE {
                best = scored[self.selector.pick(scored.len())];
            } else {
                let ties: Vec<Candidate> = scored
                    .into_iter()
                    .filter(|candidate| candidate.score == best.score)
                    .collect();
                best = ties[self.selector.pick(ties.len())];
            }
        }

        best
    }
}
