pub mod evaluator;
pub mod heuristics;

pub use evaluator::{Evaluator, Phase};
pub use heuristics::{CaptureMaximizer, MobilityMinimizer, PositionalWeighting};

use crate::board::Board;
use crate::types::Move;

/// Picks one move out of a legal move set.
///
/// Implementations return `None` only when `moves` is empty. Ties go to the
/// move that comes first in `moves`.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, moves: &[Move]) -> Option<Move>;
}
