//! Constraint applicator: folds organizer-pinned transfers into
//! balances, producing the residuals the optimizer must still settle.

use crate::domain::{PinnedTransfer, PlayerBalance};

/// Subtract each pinned transfer's effect from the named players'
/// balances, in input order. Returns a new list; the input is
/// untouched.
///
/// A transfer naming a player absent from the balance list is skipped
/// entirely; it is not an error.
///
/// Adjustments are sign-conditional and not clamped: paying reduces a
/// debtor's debt but overshoots past zero if the pinned amount exceeds
/// it, flipping the residual's sign. Downstream optimization depends
/// on this exact behavior.
pub fn apply_pinned_transfers(
    balances: &[PlayerBalance],
    pinned: &[PinnedTransfer],
) -> Vec<PlayerBalance> {
    let mut residual = balances.to_vec();

    for transfer in pinned {
        let payer = residual
            .iter()
            .position(|balance| balance.name.matches(&transfer.from));
        let receiver = residual
            .iter()
            .position(|balance| balance.name.matches(&transfer.to));
        let (Some(payer), Some(receiver)) = (payer, receiver) else {
            continue;
        };

        // Payer: a negative balance means money still owed, so the
        // payment shrinks the debt; otherwise it comes off the credit.
        if residual[payer].net.is_negative() {
            residual[payer].net = residual[payer].net + transfer.amount;
        } else {
            residual[payer].net = residual[payer].net - transfer.amount;
        }

        if residual[receiver].net.is_positive() {
            residual[receiver].net = residual[receiver].net - transfer.amount;
        } else {
            residual[receiver].net = residual[receiver].net + transfer.amount;
        }
    }

    residual
}
