//! Domain types for poker-session settlement.
//!
//! This module provides:
//! - Exact monetary arithmetic via the Money wrapper
//! - Player ledger entries with derived net positions
//! - Pinned/suggested transfers and the canonical transfer key
//! - The derived session payment status

pub mod balance;
pub mod money;
pub mod player;
pub mod status;
pub mod transfer;

pub use balance::PlayerBalance;
pub use money::Money;
pub use player::{PlayerLedgerEntry, PlayerName};
pub use status::SessionPaymentStatus;
pub use transfer::{transfer_key, PaidTransferMap, PinnedTransfer, SuggestedTransfer};
