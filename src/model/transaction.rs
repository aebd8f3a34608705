use crate::model::hours::HourAmount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a transfer, from the viewing member's perspective.
///
/// Direction is raised to the type system: `amount` is always positive and a
/// debit is never represented as a negative credit.
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Hours received.
    Credit,
    /// Hours sent.
    Debit,
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    /// The API also reports `cancelled`, `disputed`, and `refunded`; all are
    /// terminal non-settled states and decode as `Failed`.
    #[serde(alias = "cancelled", alias = "disputed", alias = "refunded")]
    Failed,
}

/// The counterpart in an exchange.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Counterparty {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One entry in the member's transaction history, newest first.
///
/// `description` is free text, user- or system-supplied, and must be treated
/// as untrusted when exported.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Transaction {
    pub id: u64,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub status: TransactionStatus,
    pub amount: HourAmount,
    pub description: String,
    // The API also emits an `other_user` compatibility alias next to this
    // field; the alias is ignored as an unknown field.
    #[serde(default)]
    pub other_party: Option<Counterparty>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Client-side history filter. Derived view state, never persisted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TransactionFilter {
    #[default]
    All,
    Earned,
    Spent,
    Pending,
}

impl TransactionFilter {
    pub(crate) fn matches(self, tx: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Earned => tx.tx_type == TransactionType::Credit,
            Self::Spent => tx.tx_type == TransactionType::Debit,
            Self::Pending => tx.status == TransactionStatus::Pending,
        }
    }
}
