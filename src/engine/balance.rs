//! Balance calculator: poker-only net position per distinct player.

use crate::domain::{PlayerBalance, PlayerLedgerEntry};

/// Derive each player's net poker balance (cash-out minus buy-ins).
///
/// Dinner charges are not applied here; the pipeline folds them in
/// before constraint application. Players are keyed case-insensitively
/// by name: duplicate names merge into one position, and the
/// first-seen spelling wins. Output order follows first appearance in
/// the input.
///
/// Numeric inputs are trusted; validation belongs to the caller.
pub fn compute_balances(players: &[PlayerLedgerEntry]) -> Vec<PlayerBalance> {
    let mut balances: Vec<PlayerBalance> = Vec::new();

    for player in players {
        let net = player.net_poker_balance();
        match balances
            .iter_mut()
            .find(|balance| balance.name.matches(&player.name))
        {
            Some(existing) => existing.net = existing.net + net,
            None => balances.push(PlayerBalance::new(player.name.clone(), net)),
        }
    }

    balances
}
