use crate::model::hours::HourAmount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a member's wallet as reported by `GET /wallet/balance`.
///
/// All aggregates are server-computed. The only fields mutated locally are
/// `balance` and `total_spent`, re-derived optimistically when a transfer
/// completes; they are reconciled against the server on the next full reload.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WalletBalance {
    /// Current spendable balance in hours. Non-negative by convention, but
    /// not enforced here.
    pub balance: HourAmount,

    /// Hours incoming but not yet settled.
    ///
    /// The API emits this alongside a `pending_in` compatibility alias; the
    /// alias is ignored as an unknown field so responses carrying both
    /// spellings decode cleanly.
    pub pending_incoming: HourAmount,

    /// Hours reserved by outgoing pending transfers.
    #[serde(default)]
    pub pending_outgoing: HourAmount,

    /// Lifetime hours earned.
    pub total_earned: HourAmount,

    /// Lifetime hours spent.
    pub total_spent: HourAmount,

    #[serde(default)]
    pub last_transaction_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_canonical_shape() {
        let json = r#"{
            "balance": "12.5",
            "pending_incoming": "2.0",
            "pending_outgoing": "0.5",
            "total_earned": "40",
            "total_spent": "27.5",
            "currency": "hours",
            "last_transaction_at": "2026-03-01T10:15:00Z"
        }"#;

        let balance: WalletBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.balance, "12.5".parse().unwrap());
        assert_eq!(balance.total_spent, "27.5".parse().unwrap());
        assert!(balance.last_transaction_at.is_some());
    }

    #[test]
    fn alias_fields_are_ignored() {
        // The API emits `pending_in`/`pending_out` compatibility aliases next
        // to the canonical names. They must not trip the decoder.
        let json = r#"{
            "balance": "1",
            "pending_incoming": "3",
            "pending_in": "3",
            "pending_out": "0",
            "total_earned": "1",
            "total_spent": "0"
        }"#;

        let balance: WalletBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.pending_incoming, "3".parse().unwrap());
        assert_eq!(balance.pending_outgoing, HourAmount::ZERO);
        assert_eq!(balance.last_transaction_at, None);
    }
}
