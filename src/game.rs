use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use web_time::Instant;

use crate::ai::Evaluator;
use crate::board::Board;
use crate::config::EvaluatorConfig;
use crate::error::{RequestError, join_positions};
use crate::types::Position;

/// A request for one move. The thresholds default when `config` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(alias = "Board")]
    pub board: Board,
    #[serde(default, alias = "Config")]
    pub config: Option<EvaluatorConfig>,
}

impl MoveRequest {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            config: None,
        }
    }

    pub fn from_json(input: &str) -> Result<Self, RequestError> {
        serde_json::from_str(input).map_err(|err| RequestError::Json {
            input: input.to_string(),
            err,
        })
    }

    pub fn evaluator(&self) -> Result<Evaluator, RequestError> {
        let config = self.config.unwrap_or_default().validated()?;
        Ok(Evaluator::new(config))
    }
}

/// Answer to a [`MoveRequest`]. Rendered as `[x,y]` or `PASS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Move(Position),
    Pass,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(pos) => write!(f, "{pos}"),
            Self::Pass => f.write_str("PASS"),
        }
    }
}

/// Picks the reply for `board`: a pass when the side to move is stuck,
/// otherwise whatever `evaluator` chooses.
pub fn decide(board: &Board, evaluator: &Evaluator) -> Reply {
    let started = Instant::now();
    let moves = board.legal_moves();
    if moves.is_empty() {
        info!(next = %board.next(), "no legal moves, passing");
        return Reply::Pass;
    }
    debug!(
        legal = %join_positions(moves.iter().map(|m| m.at)),
        "enumerated legal moves"
    );

    let reply = match evaluator.evaluate(board, &moves) {
        Some(mv) => Reply::Move(mv.at),
        None => Reply::Pass,
    };
    info!(%reply, elapsed = ?started.elapsed(), "chose move");
    reply
}

pub fn respond(request: &MoveRequest) -> Result<Reply, RequestError> {
    let board = &request.board;
    info!(
        next = %board.next(),
        pieces = board.piece_count(),
        score = board.score_difference(),
        "got board"
    );
    let evaluator = request.evaluator()?;
    Ok(decide(board, &evaluator))
}

/// Text endpoint: a JSON request in, `[x,y]`, `PASS` or an error line out.
pub fn reply_to_json(input: &str) -> String {
    match MoveRequest::from_json(input).and_then(|request| respond(&request)) {
        Ok(reply) => reply.to_string(),
        Err(err) => err.to_string(),
    }
}
