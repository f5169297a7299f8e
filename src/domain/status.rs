//! Session payment status, derived and never stored as ground truth.

use serde::{Deserialize, Serialize};

/// Whether a session's payment obligations are fully discharged.
///
/// Derived from the transfer list, the paid-transfer map, and each
/// player's dinner-paid flag; recomputed on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPaymentStatus {
    Pending,
    Completed,
}

impl std::fmt::Display for SessionPaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPaymentStatus::Pending => write!(f, "pending"),
            SessionPaymentStatus::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SessionPaymentStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&SessionPaymentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SessionPaymentStatus::Pending.to_string(), "pending");
        assert_eq!(SessionPaymentStatus::Completed.to_string(), "completed");
    }
}
