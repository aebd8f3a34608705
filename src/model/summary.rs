use crate::model::hours::HourAmount;
use crate::model::transaction::{Transaction, TransactionFilter, TransactionStatus, TransactionType};

/// Lifetime totals derived from a transaction sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TotalsSummary {
    /// Completed credits.
    pub earned: HourAmount,
    /// Completed debits.
    pub spent: HourAmount,
    /// Pending transactions of either direction.
    pub pending: HourAmount,
}

/// Return the order-preserving subsequence of `transactions` matching `filter`.
pub fn classify(transactions: &[Transaction], filter: TransactionFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .cloned()
        .collect()
}

/// Sum amounts into earned/spent/pending buckets.
///
/// Recomputed synchronously whenever the sequence or filter changes; at the
/// page sizes this view handles there is nothing worth caching.
pub fn summarize(transactions: &[Transaction]) -> TotalsSummary {
    let mut summary = TotalsSummary::default();

    for tx in transactions {
        match (tx.tx_type, tx.status) {
            (TransactionType::Credit, TransactionStatus::Completed) => summary.earned += tx.amount,
            (TransactionType::Debit, TransactionStatus::Completed) => summary.spent += tx.amount,
            (_, TransactionStatus::Pending) => summary.pending += tx.amount,
            (_, TransactionStatus::Failed) => {}
        }
    }

    summary
}
