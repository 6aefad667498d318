use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 8;

/// Offsets scanned from a candidate cell, as `(dx, dy)`.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Contents of one cell. On the wire: 0=empty, 1=black, 2=white.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Piece {
    #[default]
    Empty,
    Black,
    White,
}

impl Piece {
    pub fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
            Self::Empty => Self::Empty,
        }
    }
}

impl TryFrom<u8> for Piece {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Black),
            2 => Ok(Self::White),
            other => Err(format!("invalid piece value {other}, expected 0, 1 or 2")),
        }
    }
}

impl From<Piece> for u8 {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Empty => 0,
            Piece::Black => 1,
            Piece::White => 2,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Black => "black",
            Self::White => "white",
        };
        f.write_str(name)
    }
}

/// A board coordinate. Both axes run 1..=8; `x` is the column and `y` the row.
/// Anything outside that range denotes a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const PASS: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn is_valid(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y)
    }

    pub fn is_pass(self) -> bool {
        !self.is_valid()
    }

    pub fn step(self, (dx, dy): (i8, i8)) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// A placement (or a pass) by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub at: Position,
    pub player: Piece,
}

impl Move {
    pub const fn new(at: Position, player: Piece) -> Self {
        Self { at, player }
    }

    pub const fn pass(player: Piece) -> Self {
        Self::new(Position::PASS, player)
    }

    pub fn is_pass(&self) -> bool {
        self.at.is_pass()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            write!(f, "{} pass", self.player)
        } else {
            write!(f, "{} {}", self.player, self.at)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_swaps_players_and_keeps_empty() {
        assert_eq!(Piece::Black.opposite(), Piece::White);
        assert_eq!(Piece::White.opposite(), Piece::Black);
        assert_eq!(Piece::Empty.opposite(), Piece::Empty);
    }

    #[test]
    fn out_of_range_positions_are_passes() {
        assert!(Position::new(1, 1).is_valid());
        assert!(Position::new(8, 8).is_valid());
        assert!(Position::PASS.is_pass());
        assert!(Position::new(9, 4).is_pass());
        assert!(Position::new(4, -1).is_pass());
        assert!(Move::pass(Piece::White).is_pass());
    }

    #[test]
    fn piece_rejects_unknown_wire_values() {
        assert_eq!(Piece::try_from(2), Ok(Piece::White));
        let err = Piece::try_from(3).unwrap_err();
        assert!(err.contains("invalid piece value 3"));
    }
}
