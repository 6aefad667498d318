use serde::{Deserialize, Serialize};

use crate::error::{EmptyTurn, IllegalMove};
use crate::types::{BOARD_SIZE, DIRECTIONS, Move, Piece, Position};

const WIDTH: usize = BOARD_SIZE as usize;

/// 8x8 piece storage addressed by 1-based [`Position`]s.
///
/// Cells are stored row-major as `cells[y - 1][x - 1]`; `get` and `set` are the
/// only places that translate between the two conventions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Piece; WIDTH]; WIDTH],
}

impl Grid {
    /// Returns the piece at `pos`, or `None` when `pos` is off the board.
    pub fn get(&self, pos: Position) -> Option<Piece> {
        let (row, col) = index_of(pos)?;
        Some(self.cells[row][col])
    }

    /// Stores `piece` at `pos` and returns the previous occupant.
    /// Off-board positions are left untouched and yield `None`.
    pub fn set(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        let (row, col) = index_of(pos)?;
        Some(std::mem::replace(&mut self.cells[row][col], piece))
    }

    /// All 64 positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|y| (1..=BOARD_SIZE).map(move |x| Position::new(x, y)))
    }

    pub fn rows(&self) -> &[[Piece; WIDTH]; WIDTH] {
        &self.cells
    }
}

fn index_of(pos: Position) -> Option<(usize, usize)> {
    pos.is_valid().then(|| ((pos.y - 1) as usize, (pos.x - 1) as usize))
}

/// Serialized form of a board; `pieces[row][col]` plus the side to move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardRecord {
    #[serde(alias = "Pieces")]
    pub pieces: Grid,
    #[serde(alias = "Next")]
    pub next: Piece,
}

/// Othello position: the grid plus whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord", into = "BoardRecord")]
pub struct Board {
    grid: Grid,
    next: Piece,
}

impl Board {
    pub fn new(grid: Grid, next: Piece) -> Result<Self, EmptyTurn> {
        if next == Piece::Empty {
            return Err(EmptyTurn);
        }
        Ok(Self { grid, next })
    }

    /// The usual starting position with black to move:
    /// (4,4)=white, (5,4)=black, (4,5)=black, (5,5)=white.
    pub fn standard() -> Self {
        let mut grid = Grid::default();
        grid.set(Position::new(4, 4), Piece::White);
        grid.set(Position::new(5, 4), Piece::Black);
        grid.set(Position::new(4, 5), Piece::Black);
        grid.set(Position::new(5, 5), Piece::White);
        Self {
            grid,
            next: Piece::Black,
        }
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.grid.get(pos)
    }

    /// Number of pieces placed on the board.
    pub fn piece_count(&self) -> usize {
        Grid::positions()
            .filter(|&pos| self.get(pos).is_some_and(|p| p != Piece::Empty))
            .count()
    }

    pub fn count(&self, piece: Piece) -> usize {
        Grid::positions()
            .filter(|&pos| self.get(pos) == Some(piece))
            .count()
    }

    /// Pieces of the side to move minus pieces of its opponent.
    pub fn score_difference(&self) -> i32 {
        self.count(self.next) as i32 - self.count(self.next.opposite()) as i32
    }

    /// Opponent pieces bracketed by `mv` along one direction.
    /// An unterminated run (edge of board or empty cell) captures nothing.
    pub fn captures_in_direction(&self, mv: Move, dir: (i8, i8)) -> Vec<Position> {
        let mut run = Vec::new();
        let mut pos = mv.at.step(dir);
        loop {
            match self.get(pos) {
                Some(piece) if piece == mv.player => return run,
                Some(piece) if piece == mv.player.opposite() && piece != Piece::Empty => {
                    run.push(pos);
                }
                _ => return Vec::new(),
            }
            pos = pos.step(dir);
        }
    }

    /// Every piece a non-pass move would flip, without playing it.
    pub fn captures(&self, mv: Move) -> Result<Vec<Position>, IllegalMove> {
        match self.get(mv.at) {
            Some(Piece::Empty) => {}
            Some(occupant) => {
                return Err(IllegalMove::Occupied {
                    attempted: mv,
                    occupant,
                });
            }
            None => return Err(IllegalMove::NoCaptures { attempted: mv }),
        }

        let captures: Vec<Position> = DIRECTIONS
            .iter()
            .flat_map(|&dir| self.captures_in_direction(mv, dir))
            .collect();

        if captures.is_empty() {
            return Err(IllegalMove::NoCaptures { attempted: mv });
        }
        Ok(captures)
    }

    /// Legal moves for the side to move in row-major order.
    /// Empty when the side to move has to pass.
    pub fn legal_moves(&self) -> Vec<Move> {
        Grid::positions()
            .map(|pos| Move::new(pos, self.next))
            .filter(|&mv| self.captures(mv).is_ok())
            .collect()
    }

    /// Plays `mv` (or a pass) and hands the turn to the opponent.
    /// Nothing is written when the move is rejected.
    pub fn apply(&mut self, mv: Move) -> Result<&mut Self, IllegalMove> {
        if mv.is_pass() {
            let available = self.legal_moves();
            if !available.is_empty() {
                return Err(IllegalMove::PassWithMovesAvailable {
                    attempted: mv,
                    available,
                });
            }
        } else {
            let captures = self.captures(mv)?;
            for pos in captures.into_iter().chain(std::iter::once(mv.at)) {
                self.grid.set(pos, mv.player);
            }
        }
        self.next = self.next.opposite();
        Ok(self)
    }

    /// Builds a board from a text diagram, `B`/`W` for pieces and `.` for empty.
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: [&str; WIDTH], next: Piece) -> Self {
        let mut grid = Grid::default();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let piece = match c {
                    'B' => Piece::Black,
                    'W' => Piece::White,
                    _ => Piece::Empty,
                };
                grid.set(Position::new(x as i8 + 1, y as i8 + 1), piece);
            }
        }
        Self::new(grid, next).expect("diagram boards have a side to move")
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = EmptyTurn;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        Self::new(record.pieces, record.next)
    }
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        Self {
            pieces: board.grid,
            next: board.next,
        }
    }
}
