use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::settlement::validate_players;
use crate::api::AppState;
use crate::domain::{PlayerBalance, PlayerLedgerEntry};
use crate::engine;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct BalancesRequest {
    #[serde(default)]
    pub players_data: Vec<PlayerLedgerEntry>,
}

#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    pub balances: Vec<PlayerBalance>,
}

/// Poker-only net balances (no dinner, no pinned transfers), for live
/// display while a session is still running.
pub async fn post_balances(
    State(state): State<AppState>,
    Json(request): Json<BalancesRequest>,
) -> Result<Json<BalancesResponse>, AppError> {
    validate_players(&request.players_data, state.config.max_players_per_session)?;

    let balances = engine::compute_balances(&request.players_data);

    Ok(Json(BalancesResponse { balances }))
}
