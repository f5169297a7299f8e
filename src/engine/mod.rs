//! Pure settlement engine for one poker session.
//!
//! Four stages, applied in order on every recompute:
//! balances -> dinner fold -> pinned constraints -> optimizer ->
//! payment-status reconciliation. Every stage is a deterministic pure
//! function, so recomputation after any input change is idempotent.

use crate::domain::{
    PaidTransferMap, PinnedTransfer, PlayerBalance, PlayerLedgerEntry, SessionPaymentStatus,
    SuggestedTransfer,
};

pub mod balance;
pub mod constraints;
pub mod optimizer;
pub mod reconcile;

pub use balance::compute_balances;
pub use constraints::apply_pinned_transfers;
pub use optimizer::{merge_transfers, optimize_transfers};
pub use reconcile::reconcile_payment_status;

/// Full settlement result for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementOutcome {
    /// Poker-only net balances (no dinner, no pinned transfers).
    pub balances: Vec<PlayerBalance>,
    /// Balances after dinner charges and pinned transfers; what the
    /// optimizer settled.
    pub residual_balances: Vec<PlayerBalance>,
    /// Merged transfer list: pinned entries first, optimizer output after.
    pub transfers: Vec<SuggestedTransfer>,
    /// Derived payment status.
    pub status: SessionPaymentStatus,
}

/// Run the full pipeline over one session's data.
pub fn settle_session(
    players: &[PlayerLedgerEntry],
    pinned: &[PinnedTransfer],
    paid_map: &PaidTransferMap,
) -> SettlementOutcome {
    let balances = compute_balances(players);
    let with_dinner = fold_dinner_charges(&balances, players);
    let residual_balances = apply_pinned_transfers(&with_dinner, pinned);
    let suggested = optimize_transfers(&residual_balances);
    let transfers = merge_transfers(pinned, suggested);
    let status = reconcile_payment_status(&transfers, paid_map, players);

    SettlementOutcome {
        balances,
        residual_balances,
        transfers,
        status,
    }
}

/// Subtract each player's unpaid dinner charge from their poker
/// balance. Paid dinners are already settled outside the transfer
/// graph and leave the balance alone.
pub fn fold_dinner_charges(
    balances: &[PlayerBalance],
    players: &[PlayerLedgerEntry],
) -> Vec<PlayerBalance> {
    let mut folded = balances.to_vec();

    for player in players {
        let Some(dinner) = player.dinner_amount else {
            continue;
        };
        if player.dinner_paid {
            continue;
        }
        if let Some(balance) = folded
            .iter_mut()
            .find(|balance| balance.name.matches(&player.name))
        {
            balance.net = balance.net - dinner;
        }
    }

    folded
}
