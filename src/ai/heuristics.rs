use std::cmp::Reverse;

use once_cell::sync::Lazy;

use crate::ai::MoveSelector;
use crate::board::{Board, Grid};
use crate::types::{BOARD_SIZE, Move, Position};

/// Weights for the top-left quadrant, indexed `[column][row]` (0-based).
const QUADRANT_WEIGHTS: [[i32; 4]; 4] = [
    [68, -12, 53, -8],
    [-12, -62, -33, -7],
    [53, -33, 26, 8],
    [-8, -7, 8, -18],
];

/// Quadrant table mirrored over both axes to cover all 64 cells, `[row][column]`.
static CELL_WEIGHTS: Lazy<[[i32; 8]; 8]> = Lazy::new(|| {
    let mut table = [[0; 8]; 8];
    for pos in Grid::positions() {
        let col = fold(pos.x - 1);
        let row = fold(pos.y - 1);
        table[(pos.y - 1) as usize][(pos.x - 1) as usize] = QUADRANT_WEIGHTS[col][row];
    }
    table
});

fn fold(coord: i8) -> usize {
    coord.min(BOARD_SIZE - 1 - coord) as usize
}

/// Positional value of a cell; passes are worth nothing.
pub fn cell_weight(pos: Position) -> i32 {
    if pos.is_pass() {
        return 0;
    }
    CELL_WEIGHTS[(pos.y - 1) as usize][(pos.x - 1) as usize]
}

/// Opening: leave the opponent as few replies as possible.
#[derive(Debug, Default, Clone, Copy)]
pub struct MobilityMinimizer;

impl MobilityMinimizer {
    /// Number of legal replies the opponent has after `mv`, or `None` if
    /// `mv` cannot be played.
    pub fn opponent_mobility(board: &Board, mv: Move) -> Option<usize> {
        let mut next = *board;
        next.apply(mv).ok()?;
        Some(next.legal_moves().len())
    }
}

impl MoveSelector for MobilityMinimizer {
    fn select_move(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        moves
            .iter()
            .filter_map(|&mv| Some((mv, Self::opponent_mobility(board, mv)?)))
            .min_by_key(|&(_, mobility)| mobility)
            .map(|(mv, _)| mv)
    }
}

/// Midgame: prefer corners and avoid the cells next to them.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalWeighting;

impl MoveSelector for PositionalWeighting {
    fn select_move(&self, _board: &Board, moves: &[Move]) -> Option<Move> {
        // min_by_key keeps the first of equal keys; max_by_key would keep the last.
        moves
            .iter()
            .copied()
            .min_by_key(|mv| Reverse(cell_weight(mv.at)))
    }
}

/// Endgame: flip as many pieces as possible right now.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaptureMaximizer;

impl MoveSelector for CaptureMaximizer {
    fn select_move(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        moves
            .iter()
            .filter_map(|&mv| Some((mv, board.captures(mv).ok()?.len())))
            .min_by_key(|&(_, captured)| Reverse(captured))
            .map(|(mv, _)| mv)
    }
}
