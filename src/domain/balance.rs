//! Per-player net balance, the intermediate between ledger entries and
//! the transfer optimizer.

use crate::domain::{Money, PlayerName};
use serde::{Deserialize, Serialize};

/// One player's net monetary position.
///
/// Positive means the table owes the player; negative means the player
/// owes the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBalance {
    pub name: PlayerName,
    pub net: Money,
}

impl PlayerBalance {
    pub fn new(name: PlayerName, net: Money) -> Self {
        PlayerBalance { name, net }
    }
}
