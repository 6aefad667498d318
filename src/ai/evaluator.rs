use tracing::debug;

use crate::ai::{CaptureMaximizer, MobilityMinimizer, MoveSelector, PositionalWeighting};
use crate::board::Board;
use crate::config::EvaluatorConfig;
use crate::types::Move;

/// Game stage, decided by how many pieces are on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Midgame,
    Endgame,
}

impl Phase {
    pub fn for_count(count: usize, config: &EvaluatorConfig) -> Self {
        if count < config.opening_until as usize {
            Self::Opening
        } else if count < config.endgame_from as usize {
            Self::Midgame
        } else {
            Self::Endgame
        }
    }

    pub fn selector(self) -> &'static dyn MoveSelector {
        match self {
            Self::Opening => &MobilityMinimizer,
            Self::Midgame => &PositionalWeighting,
            Self::Endgame => &CaptureMaximizer,
        }
    }
}

/// One-ply move chooser that switches heuristic with the game phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn phase(&self, board: &Board) -> Phase {
        Phase::for_count(board.piece_count(), &self.config)
    }

    /// Chooses one of `moves`, or `None` when there is nothing to choose from.
    /// Callers answer an empty legal move set with a pass.
    pub fn evaluate(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        let phase = self.phase(board);
        let chosen = phase.selector().select_move(board, moves);
        debug!(?phase, candidates = moves.len(), ?chosen, "evaluated moves");
        chosen
    }
}

impl MoveSelector for Evaluator {
    fn select_move(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        self.evaluate(board, moves)
    }
}
