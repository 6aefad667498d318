use std::fmt;

use crate::types::{Move, Piece, Position};

/// The error type for [`Board::apply()`](crate::board::Board::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    Occupied { attempted: Move, occupant: Piece },
    NoCaptures { attempted: Move },
    PassWithMovesAvailable { attempted: Move, available: Vec<Move> },
}

impl IllegalMove {
    pub fn attempted(&self) -> Move {
        match self {
            Self::Occupied { attempted, .. }
            | Self::NoCaptures { attempted }
            | Self::PassWithMovesAvailable { attempted, .. } => *attempted,
        }
    }
}

impl std::error::Error for IllegalMove {}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied {
                attempted,
                occupant,
            } => write!(
                f,
                "{attempted} illegal move: {} is occupied by {occupant}",
                attempted.at
            ),
            Self::NoCaptures { attempted } => {
                write!(f, "{attempted} illegal move: no pieces were captured")
            }
            Self::PassWithMovesAvailable {
                attempted,
                available,
            } => {
                write!(
                    f,
                    "{attempted} illegal move: there are valid moves available:"
                )?;
                for mv in available {
                    write!(f, " {}", mv.at)?;
                }
                Ok(())
            }
        }
    }
}

/// Raised when a board would violate its turn invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyTurn;

impl std::error::Error for EmptyTurn {}

impl fmt::Display for EmptyTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the side to move must be black (1) or white (2), not empty")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ThresholdsOutOfOrder { opening_until: u8, endgame_from: u8 },
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdsOutOfOrder {
                opening_until,
                endgame_from,
            } => write!(
                f,
                "opening threshold {opening_until} must not exceed endgame threshold {endgame_from}"
            ),
        }
    }
}

/// The error type for decoding a move request.
#[derive(Debug)]
pub enum RequestError {
    Json {
        input: String,
        err: serde_json::Error,
    },
    Config(ConfigError),
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { err, .. } => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { input, err } => write!(f, "invalid json {input}? {err}"),
            Self::Config(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl From<ConfigError> for RequestError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Pretty form of a list of positions, used in log lines.
pub(crate) fn join_positions(positions: impl IntoIterator<Item = Position>) -> String {
    positions
        .into_iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_error_lists_available_moves() {
        let err = IllegalMove::PassWithMovesAvailable {
            attempted: Move::pass(Piece::Black),
            available: vec![
                Move::new(Position::new(4, 3), Piece::Black),
                Move::new(Position::new(3, 4), Piece::Black),
            ],
        };

        assert_eq!(
            err.to_string(),
            "black pass illegal move: there are valid moves available: [4,3] [3,4]"
        );
        assert_eq!(err.attempted(), Move::pass(Piece::Black));
    }

    #[test]
    fn occupied_error_names_the_occupant() {
        let err = IllegalMove::Occupied {
            attempted: Move::new(Position::new(4, 4), Piece::White),
            occupant: Piece::Black,
        };

        assert!(err.to_string().ends_with("[4,4] is occupied by black"));
    }
}
