//! Payment-status reconciler: decides whether a session's obligations
//! are fully discharged.

use crate::domain::{
    PaidTransferMap, PlayerLedgerEntry, SessionPaymentStatus, SuggestedTransfer,
};

/// Derive the session's payment status from the merged transfer list,
/// the paid-transfer map, and each player's dinner flag.
///
/// An empty transfer list means there is nothing to settle: the status
/// is `completed` regardless of dinner flags. Otherwise the session is
/// `completed` only when every transfer is marked paid (by its
/// canonical key) and every player with a dinner charge has paid it.
pub fn reconcile_payment_status(
    transfers: &[SuggestedTransfer],
    paid_map: &PaidTransferMap,
    players: &[PlayerLedgerEntry],
) -> SessionPaymentStatus {
    if transfers.is_empty() {
        return SessionPaymentStatus::Completed;
    }

    let all_transfers_paid = transfers
        .iter()
        .all(|transfer| paid_map.is_paid(&transfer.key()));
    let all_dinners_paid = players
        .iter()
        .all(|player| player.dinner_amount.is_none() || player.dinner_paid);

    if all_transfers_paid && all_dinners_paid {
        SessionPaymentStatus::Completed
    } else {
        SessionPaymentStatus::Pending
    }
}
