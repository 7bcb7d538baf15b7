use std::time::Instant;

use log::debug;

use crate::game::{CubeState, GameState, Player};

use super::agent::Agent;
use super::heuristics::{Heuristic, OpenLineHeuristic, ThreatHeuristic};

/// The state/move provider contract the search engine works against.
pub trait Position: Clone {
    /// The player whose turn it is.
    fn mover(&self) -> Player;

    /// All states reachable by one legal move, in provider order. Empty
    /// exactly when the mover has no legal move; the order fixes which
    /// successor wins ties at the root.
    fn successors(&self) -> Vec<Self>;

    /// The canonical no-op successor, played when `successors` is empty.
    fn pass(&self) -> Self;
}

impl Position for GameState {
    fn mover(&self) -> Player {
        GameState::mover(self)
    }

    fn successors(&self) -> Vec<Self> {
        GameState::successors(self)
    }

    fn pass(&self) -> Self {
        GameState::pass(self)
    }
}

impl Position for CubeState {
    fn mover(&self) -> Player {
        CubeState::mover(self)
    }

    fn successors(&self) -> Vec<Self> {
        CubeState::successors(self)
    }

    fn pass(&self) -> Self {
        CubeState::pass(self)
    }
}

/// How the game tree is traversed. Plain minimax explores every node and
/// exists to cross-validate the pruning search: both must select the same
/// root move for any position and depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    AlphaBeta,
    Minimax,
}

/// Result of one root search: the value of the position and the index of
/// the successor to play, in provider order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub value: f64,
    pub best: usize,
}

/// One search invocation. The maximizer is fixed at construction and stays
/// constant through the recursion; nothing is shared across invocations.
struct Search<'a, S> {
    player_max: Player,
    heuristic: &'a dyn Heuristic<S>,
}

impl<S: Position> Search<'_, S> {
    /// Root max node. The best index starts at the first successor so the
    /// outcome is populated even when nothing improves on it; with a zero
    /// depth budget that first successor is returned without descending.
    fn root(&self, state: &S, successors: &[S], depth: usize, strategy: Strategy) -> SearchOutcome {
        debug_assert!(!successors.is_empty(), "root requires at least one successor");

        let mut best = 0;
        if depth == 0 {
            return SearchOutcome {
                value: self.heuristic.evaluate(state, self.player_max),
                best,
            };
        }

        match strategy {
            Strategy::AlphaBeta => {
                let mut alpha = f64::NEG_INFINITY;
                let beta = f64::INFINITY;
                let mut v = f64::NEG_INFINITY;
                for (i, next) in successors.iter().enumerate() {
                    v = v.max(self.alphabeta(next, depth - 1, alpha, beta));
                    // The recorded move changes only when the running value
                    // beats the current pruning threshold, not the running
                    // best. Intentional tie-break, keep as is.
                    if v > alpha {
                        best = i;
                    }
                    alpha = alpha.max(v);
                    if beta <= alpha {
                        break;
                    }
                }
                SearchOutcome { value: v, best }
            }
            Strategy::Minimax => {
                let mut v = f64::NEG_INFINITY;
                for (i, next) in successors.iter().enumerate() {
                    let value = self.minimax(next, depth - 1);
                    if value > v {
                        best = i;
                    }
                    v = v.max(value);
                }
                SearchOutcome { value: v, best }
            }
        }
    }

    /// Alpha-beta value of a state. A state with no successors is a leaf
    /// whatever the remaining depth.
    fn alphabeta(&self, state: &S, depth: usize, mut alpha: f64, mut beta: f64) -> f64 {
        let successors = state.successors();
        if successors.is_empty() || depth == 0 {
            return self.heuristic.evaluate(state, self.player_max);
        }

        if state.mover() == self.player_max {
            let mut v = f64::NEG_INFINITY;
            for next in &successors {
                v = v.max(self.alphabeta(next, depth - 1, alpha, beta));
                alpha = alpha.max(v);
                if beta <= alpha {
                    break;
                }
            }
            v
        } else {
            let mut v = f64::INFINITY;
            for next in &successors {
                v = v.min(self.alphabeta(next, depth - 1, alpha, beta));
                beta = beta.min(v);
                if beta <= alpha {
                    break;
                }
            }
            v
        }
    }

    /// Plain minimax value of a state, no pruning.
    fn minimax(&self, state: &S, depth: usize) -> f64 {
        let successors = state.successors();
        if successors.is_empty() || depth == 0 {
            return self.heuristic.evaluate(state, self.player_max);
        }

        if state.mover() == self.player_max {
            let mut v = f64::NEG_INFINITY;
            for next in &successors {
                v = v.max(self.minimax(next, depth - 1));
            }
            v
        } else {
            let mut v = f64::INFINITY;
            for next in &successors {
                v = v.min(self.minimax(next, depth - 1));
            }
            v
        }
    }
}

/// Depth-limited search agent over any [`Position`].
pub struct MinimaxAgent<S> {
    depth: usize,
    strategy: Strategy,
    heuristic: Box<dyn Heuristic<S>>,
}

impl MinimaxAgent<GameState> {
    /// Agent for the 4x4 board with the open-line evaluator.
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Strategy::AlphaBeta, Box::new(OpenLineHeuristic::default()))
    }
}

impl MinimaxAgent<CubeState> {
    /// Agent for the 4x4x4 cube with the attack/defense evaluator. The large
    /// branching factor makes depth 1 the usual budget here.
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Strategy::AlphaBeta, Box::new(ThreatHeuristic::default()))
    }
}

impl<S> MinimaxAgent<S> {
    pub fn with_heuristic(
        depth: usize,
        strategy: Strategy,
        heuristic: Box<dyn Heuristic<S>>,
    ) -> Self {
        MinimaxAgent {
            depth,
            strategy,
            heuristic,
        }
    }
}

impl<S: Position> MinimaxAgent<S> {
    /// Search the position and report its value together with the index of
    /// the successor to play. `None` when there is nothing to play; the
    /// engine is not invoked in that case.
    pub fn analyze(&self, state: &S) -> Option<SearchOutcome> {
        let successors = state.successors();
        if successors.is_empty() {
            return None;
        }

        let search = Search {
            player_max: state.mover(),
            heuristic: self.heuristic.as_ref(),
        };
        Some(search.root(state, &successors, self.depth, self.strategy))
    }
}

impl<S: Position> Agent<S> for MinimaxAgent<S> {
    fn select_move(&mut self, state: &S, _deadline: Instant) -> S {
        let Some(outcome) = self.analyze(state) else {
            // Must play the pass move when nothing else is possible.
            return state.pass();
        };

        let mut successors = state.successors();
        debug!(
            "{}: successor {} of {} (value {})",
            self.name(),
            outcome.best,
            successors.len(),
            outcome.value
        );
        successors.swap_remove(outcome.best)
    }

    fn name(&self) -> &str {
        match self.strategy {
            Strategy::AlphaBeta => "AlphaBeta",
            Strategy::Minimax => "Minimax",
        }
    }
}
