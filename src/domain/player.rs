//! Player ledger types: one player's participation in one session.

use crate::domain::Money;
use serde::{Deserialize, Serialize};

/// Player name.
///
/// Players are matched across a session by trimmed, case-insensitive
/// name (see [`PlayerName::key`]), not by a stable id. Two distinct
/// players who share a name are merged into one ledger position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerName(pub String);

impl PlayerName {
    /// Create a PlayerName from a string.
    pub fn new(name: String) -> Self {
        PlayerName(name)
    }

    /// Get the name as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized matching key: trimmed and lowercased.
    pub fn key(&self) -> String {
        self.0.trim().to_lowercase()
    }

    /// Returns true if two names refer to the same player.
    pub fn matches(&self, other: &PlayerName) -> bool {
        self.key() == other.key()
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerName {
    fn from(name: &str) -> Self {
        PlayerName(name.to_string())
    }
}

/// One player's ledger entry for one poker session.
///
/// Field names serialize in camelCase so stored `players_data` blobs
/// parse unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLedgerEntry {
    /// Player name (session-scoped identity, see [`PlayerName`]).
    pub name: PlayerName,
    /// Each buy-in event, in order.
    #[serde(default)]
    pub buy_ins: Vec<Money>,
    /// Amount taken off the table at session end (0 until cashed out).
    #[serde(default)]
    pub cash_out: Money,
    /// Shared-dinner charge, if the player took part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner_amount: Option<Money>,
    /// Whether the dinner charge was settled outside the transfer graph.
    #[serde(default)]
    pub dinner_paid: bool,
}

impl PlayerLedgerEntry {
    /// Create an entry with buy-ins and cash-out only (no dinner).
    pub fn new(name: PlayerName, buy_ins: Vec<Money>, cash_out: Money) -> Self {
        PlayerLedgerEntry {
            name,
            buy_ins,
            cash_out,
            dinner_amount: None,
            dinner_paid: false,
        }
    }

    /// Attach a dinner charge to this entry.
    pub fn with_dinner(mut self, amount: Money, paid: bool) -> Self {
        self.dinner_amount = Some(amount);
        self.dinner_paid = paid;
        self
    }

    /// Sum of all buy-in events.
    pub fn total_buy_in(&self) -> Money {
        self.buy_ins
            .iter()
            .fold(Money::zero(), |acc, buy_in| acc + *buy_in)
    }

    /// Net position from poker cash flow alone: cash-out minus buy-ins.
    pub fn net_poker_balance(&self) -> Money {
        self.cash_out - self.total_buy_in()
    }

    /// Net position including any unpaid dinner charge.
    pub fn net_balance(&self) -> Money {
        match self.dinner_amount {
            Some(dinner) if !self.dinner_paid => self.net_poker_balance() - dinner,
            _ => self.net_poker_balance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(s: &str) -> Money {
        Money::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_player_name_key_normalizes() {
        let a = PlayerName::from("  Alice ");
        let b = PlayerName::from("alice");
        assert!(a.matches(&b));
        assert_eq!(a.key(), "alice");
    }

    #[test]
    fn test_total_buy_in_sums_events() {
        let entry = PlayerLedgerEntry::new("A".into(), vec![m("50"), m("25.5")], m("0"));
        assert_eq!(entry.total_buy_in(), m("75.5"));
    }

    #[test]
    fn test_net_poker_balance() {
        let entry = PlayerLedgerEntry::new("A".into(), vec![m("50")], m("120"));
        assert_eq!(entry.net_poker_balance(), m("70"));
    }

    #[test]
    fn test_net_balance_subtracts_unpaid_dinner_only() {
        let unpaid = PlayerLedgerEntry::new("A".into(), vec![m("50")], m("120"))
            .with_dinner(m("20"), false);
        assert_eq!(unpaid.net_balance(), m("50"));

        let paid =
            PlayerLedgerEntry::new("A".into(), vec![m("50")], m("120")).with_dinner(m("20"), true);
        assert_eq!(paid.net_balance(), m("70"));
    }

    #[test]
    fn test_entry_parses_camel_case_payload() {
        let json = r#"{"name":"Dana","buyIns":[50,50],"cashOut":30,"dinnerAmount":15,"dinnerPaid":false}"#;
        let entry: PlayerLedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, PlayerName::from("Dana"));
        assert_eq!(entry.total_buy_in(), m("100"));
        assert_eq!(entry.dinner_amount, Some(m("15")));
        assert!(!entry.dinner_paid);
    }

    #[test]
    fn test_entry_defaults_for_missing_fields() {
        let json = r#"{"name":"Eve"}"#;
        let entry: PlayerLedgerEntry = serde_json::from_str(json).unwrap();
        assert!(entry.buy_ins.is_empty());
        assert_eq!(entry.cash_out, Money::zero());
        assert_eq!(entry.dinner_amount, None);
        assert!(!entry.dinner_paid);
    }
}
