pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use domain::{
    transfer_key, Money, PaidTransferMap, PinnedTransfer, PlayerBalance, PlayerLedgerEntry,
    PlayerName, SessionPaymentStatus, SuggestedTransfer,
};
pub use engine::{
    apply_pinned_transfers, compute_balances, merge_transfers, optimize_transfers,
    reconcile_payment_status, settle_session, SettlementOutcome,
};
pub use error::AppError;
