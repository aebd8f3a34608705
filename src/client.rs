use crate::model::{Transaction, WalletBalance};
use thiserror::Error;

pub mod rest;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be read.
    #[error("Wallet API transport error")]
    Transport(#[from] ureq::Error),

    /// The server answered with a non-success status.
    #[error("Wallet API returned HTTP {0}")]
    Status(u16),

    /// The response body did not match the expected shape. Decoding fails
    /// closed: a shape mismatch is a fetch error, never a partial value.
    #[error("Unexpected wallet API response shape")]
    Decode(#[from] serde_json::Error),
}

/// The public interface for the wallet API.
///
/// Exists as a trait so that unit tests can mock the client responses, and so
/// the view controller receives an already-authenticated client by injection
/// rather than reading ambient session state.
pub trait WalletApi {
    /// Get the member's current balance snapshot.
    fn balance(&self) -> Result<WalletBalance, ClientError>;

    /// Get one page of the member's transaction history, newest first.
    fn transactions(&self, limit: usize, offset: usize) -> Result<Vec<Transaction>, ClientError>;
}
