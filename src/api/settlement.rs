use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::{
    PaidTransferMap, PinnedTransfer, PlayerBalance, PlayerLedgerEntry, SessionPaymentStatus,
    SuggestedTransfer,
};
use crate::engine;
use crate::error::AppError;

/// One session's settlement inputs, in the shape the owning CRUD layer
/// persists them.
#[derive(Debug, Deserialize)]
pub struct SettlementRequest {
    #[serde(default)]
    pub players_data: Vec<PlayerLedgerEntry>,
    #[serde(default)]
    pub recommendations: Vec<PinnedTransfer>,
    #[serde(default)]
    pub paid_transfers: PaidTransferMap,
}

#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub balances: Vec<PlayerBalance>,
    pub residual_balances: Vec<PlayerBalance>,
    pub transfers: Vec<SuggestedTransfer>,
    pub status: SessionPaymentStatus,
}

/// Input sanitation lives at this boundary; the engine itself trusts
/// its numeric inputs.
pub(crate) fn validate_players(
    players: &[PlayerLedgerEntry],
    max_players: usize,
) -> Result<(), AppError> {
    if players.len() > max_players {
        return Err(AppError::BadRequest(format!(
            "Too many players: {} (max {})",
            players.len(),
            max_players
        )));
    }

    for player in players {
        if player.name.key().is_empty() {
            return Err(AppError::BadRequest("Player name is empty".to_string()));
        }
        if player.buy_ins.iter().any(|amount| amount.is_negative()) {
            return Err(AppError::BadRequest(format!(
                "Negative buy-in for player {}",
                player.name
            )));
        }
        if player.cash_out.is_negative() {
            return Err(AppError::BadRequest(format!(
                "Negative cash-out for player {}",
                player.name
            )));
        }
        if player.dinner_amount.is_some_and(|amount| amount.is_negative()) {
            return Err(AppError::BadRequest(format!(
                "Negative dinner amount for player {}",
                player.name
            )));
        }
    }

    Ok(())
}

fn validate_pinned(pinned: &[PinnedTransfer]) -> Result<(), AppError> {
    for transfer in pinned {
        if !transfer.amount.is_positive() {
            return Err(AppError::BadRequest(format!(
                "Pinned transfer {} -> {} must have a positive amount",
                transfer.from, transfer.to
            )));
        }
    }
    Ok(())
}

pub async fn post_settlement(
    State(state): State<AppState>,
    Json(request): Json<SettlementRequest>,
) -> Result<Json<SettlementResponse>, AppError> {
    validate_players(&request.players_data, state.config.max_players_per_session)?;
    validate_pinned(&request.recommendations)?;

    let outcome = engine::settle_session(
        &request.players_data,
        &request.recommendations,
        &request.paid_transfers,
    );

    tracing::debug!(
        players = request.players_data.len(),
        pinned = request.recommendations.len(),
        transfers = outcome.transfers.len(),
        status = %outcome.status,
        "settlement recomputed"
    );

    Ok(Json(SettlementResponse {
        balances: outcome.balances,
        residual_balances: outcome.residual_balances,
        transfers: outcome.transfers,
        status: outcome.status,
    }))
}
