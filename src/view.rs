use crate::client::WalletApi;
use crate::export::{self, CsvDownload};
use crate::model::{
    classify, summarize, HourAmount, TotalsSummary, Transaction, TransactionFilter, WalletBalance,
};
use crate::view::pager::Pager;
use chrono::{NaiveDate, Utc};
use std::fmt;
use tracing::{debug, warn};

pub mod pager;

/// Overall state of the wallet view.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ViewState {
    /// Not yet initialized.
    Idle,
    /// Balance snapshot loaded; the view renders.
    Ready,
    /// The balance fetch failed. Nothing renders except a retry affordance.
    Failed,
}

/// A user-facing notification queued by the view. The embedding UI drains the
/// queue with [`WalletView::take_notices`] and renders each as a toast.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notice {
    /// A transfer completed; names the amount and counterparty.
    TransferSent {
        amount: HourAmount,
        counterparty: String,
    },
    /// A transaction page fetch failed. Prior data stays visible.
    HistoryUnavailable,
    /// Export was requested with nothing to export.
    NothingToExport,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransferSent {
                amount,
                counterparty,
            } => write!(f, "You sent {amount} hours to {counterparty}."),
            Self::HistoryUnavailable => {
                write!(f, "Could not load your transaction history. Try again.")
            }
            Self::NothingToExport => write!(f, "There are no transactions to export yet."),
        }
    }
}

/// The wallet ledger view controller.
///
/// Exclusively owns the balance snapshot and the newest-first transaction
/// sequence for the lifetime of the view. One instance per active view; no
/// cross-view sharing. All network traffic goes through the injected
/// [`WalletApi`] client.
pub struct WalletView<C> {
    client: C,
    state: ViewState,
    balance: Option<WalletBalance>,
    transactions: Vec<Transaction>,
    filter: TransactionFilter,
    pager: Pager,
    notices: Vec<Notice>,
}

impl<C: WalletApi> WalletView<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: ViewState::Idle,
            balance: None,
            transactions: Vec::new(),
            filter: TransactionFilter::default(),
            pager: Pager::new(),
            notices: Vec::new(),
        }
    }

    /// Request the balance snapshot and the first transaction page.
    ///
    /// The two requests are independent: a balance failure puts the whole
    /// view into [`ViewState::Failed`], while a transactions failure alone
    /// leaves the view usable and queues a [`Notice::HistoryUnavailable`].
    pub fn initialize(&mut self) {
        self.balance = None;
        self.transactions.clear();
        self.filter = TransactionFilter::default();
        self.pager = Pager::new();

        match self.client.balance() {
            Ok(balance) => {
                debug!("Balance snapshot loaded: {balance:?}");
                self.balance = Some(balance);
                self.state = ViewState::Ready;
            }
            Err(err) => {
                warn!("Balance fetch failed: {err}");
                self.state = ViewState::Failed;
            }
        }

        self.fetch_page();
    }

    /// Full reload after a balance failure. Re-fetches everything, which is
    /// also the point where an optimistic balance is reconciled against the
    /// server.
    pub fn retry(&mut self) {
        self.initialize();
    }

    /// Re-request the transaction page that failed. The balance snapshot is
    /// not re-fetched.
    pub fn retry_transactions(&mut self) {
        self.fetch_page();
    }

    /// Fetch the next history page. No-op while a load is in flight or after
    /// the collection is exhausted.
    pub fn load_more(&mut self) {
        self.fetch_page();
    }

    fn fetch_page(&mut self) {
        // The owned sequence length is the cursor, so pages keep lining up
        // after a completed transfer prepends an entry.
        let Some(req) = self.pager.begin(self.transactions.len()) else {
            return;
        };

        match self.client.transactions(req.limit, req.offset) {
            Ok(page) => {
                debug!("Received {} transactions at offset {}", page.len(), req.offset);
                let received = page.len();
                self.transactions.extend(page);
                self.pager.complete(received);
            }
            Err(err) => {
                warn!("Transaction history fetch failed: {err}");
                self.pager.fail();
                if self.state == ViewState::Ready {
                    self.notices.push(Notice::HistoryUnavailable);
                }
            }
        }
    }

    /// Switch the history filter. Pure local recomputation; never triggers
    /// network traffic and never resets pagination, which always walks the
    /// unfiltered superset.
    pub fn set_filter(&mut self, filter: TransactionFilter) {
        self.filter = filter;
    }

    /// Record a transfer the send-credits flow has already completed against
    /// the server. Applied atomically: prepend the transaction, re-derive the
    /// balance optimistically, queue the success notice. Infallible.
    pub fn record_transfer_completion(&mut self, tx: Transaction) {
        let counterparty = tx
            .other_party
            .as_ref()
            .map(|party| party.name.clone())
            .unwrap_or_else(|| "another member".to_string());
        let amount = tx.amount;

        self.transactions.insert(0, tx);

        if let Some(balance) = &mut self.balance {
            balance.balance -= amount;
            balance.total_spent += amount;
        }

        self.notices.push(Notice::TransferSent {
            amount,
            counterparty,
        });
    }

    /// Export the full (unfiltered) transaction sequence as CSV, dated today.
    pub fn export_csv(&mut self) -> Option<CsvDownload> {
        self.export_csv_on(Utc::now().date_naive())
    }

    /// Export with an explicit date for the filename.
    pub fn export_csv_on(&mut self, exported_on: NaiveDate) -> Option<CsvDownload> {
        if self.transactions.is_empty() {
            self.notices.push(Notice::NothingToExport);
            return None;
        }

        match export::transactions_csv(&self.transactions, exported_on) {
            Ok(download) => Some(download),
            Err(err) => {
                // Writing into an in-memory buffer; only reachable through an
                // allocator-level failure.
                warn!("CSV export failed: {err}");
                None
            }
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn balance(&self) -> Option<&WalletBalance> {
        self.balance.as_ref()
    }

    pub fn filter(&self) -> TransactionFilter {
        self.filter
    }

    /// The full owned sequence, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The subsequence matching the current filter.
    pub fn visible_transactions(&self) -> Vec<Transaction> {
        classify(&self.transactions, self.filter)
    }

    /// Earned/spent/pending totals over the full sequence.
    pub fn totals(&self) -> TotalsSummary {
        summarize(&self.transactions)
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    pub fn is_loading(&self) -> bool {
        self.pager.is_loading()
    }

    /// Drain queued notifications, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
