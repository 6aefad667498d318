use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

#[cfg(test)]
mod arbitrary;

pub use ai::{Evaluator, MoveSelector, Phase};
pub use board::{Board, Grid};
pub use config::EvaluatorConfig;
pub use error::{IllegalMove, RequestError};
pub use game::{MoveRequest, Reply, decide, reply_to_json, respond};
pub use types::{Move, Piece, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Chooses a move for a request object shaped like
/// `{ board: { pieces: number[8][8], next: 1 | 2 }, config?: {...} }`.
#[wasm_bindgen]
pub fn get_move(request: JsValue) -> Result<String, JsValue> {
    let request: MoveRequest = serde_wasm_bindgen::from_value(request)?;
    let reply = respond(&request).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(reply.to_string())
}

#[wasm_bindgen]
pub fn get_move_json(request: &str) -> String {
    reply_to_json(request)
}
