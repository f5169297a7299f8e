//! Transfer types: organizer-pinned instructions, optimizer output,
//! and the per-session paid-transfer map.

use crate::domain::{Money, PlayerName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An organizer-declared transfer.
///
/// A hard constraint, not a suggestion: it is always emitted verbatim
/// in the merged transfer list, and its effect is subtracted from the
/// two named players' balances before optimization runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedTransfer {
    /// Payer.
    pub from: PlayerName,
    /// Receiver.
    pub to: PlayerName,
    /// Positive amount.
    pub amount: Money,
}

impl PinnedTransfer {
    pub fn new(from: PlayerName, to: PlayerName, amount: Money) -> Self {
        PinnedTransfer { from, to, amount }
    }
}

/// A transfer in the merged settlement output.
///
/// `recommended` is true for organizer-pinned entries and false for
/// optimizer-generated ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTransfer {
    pub from: PlayerName,
    pub to: PlayerName,
    pub amount: Money,
    pub recommended: bool,
}

impl SuggestedTransfer {
    /// The canonical paid-map key for this transfer.
    pub fn key(&self) -> String {
        transfer_key(&self.from, &self.to)
    }
}

impl From<&PinnedTransfer> for SuggestedTransfer {
    fn from(pinned: &PinnedTransfer) -> Self {
        SuggestedTransfer {
            from: pinned.from.clone(),
            to: pinned.to.clone(),
            amount: pinned.amount,
            recommended: true,
        }
    }
}

/// Canonical transfer identity key: `"{from}_{to}"`.
///
/// Transfers have no persistent id; only their paid status survives
/// recomputation, keyed by this string.
pub fn transfer_key(from: &PlayerName, to: &PlayerName) -> String {
    format!("{}_{}", from.as_str(), to.as_str())
}

/// Per-session map from transfer key to "has been paid".
///
/// Keys not present in the map are unpaid. Stale keys for transfers no
/// longer in the list are ignored by the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaidTransferMap(pub HashMap<String, bool>);

impl PaidTransferMap {
    pub fn new() -> Self {
        PaidTransferMap(HashMap::new())
    }

    /// Mark the transfer identified by `key` as paid.
    pub fn mark_paid(&mut self, key: String) {
        self.0.insert(key, true);
    }

    /// Whether the transfer identified by `key` has been paid.
    pub fn is_paid(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }
}
