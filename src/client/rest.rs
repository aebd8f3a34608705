use super::{ClientError, WalletApi};
use crate::model::{Transaction, WalletBalance};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{info, trace};
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Agent;

/// A simple wallet REST client.
///
/// Carries the session token handed over at construction and sends it as a
/// bearer `Authorization` header on every request.
pub struct RestClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl RestClient {
    /// Create a new client for the given API server, authenticated with the
    /// given session token.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use hourwallet::client::rest::RestClient;
    /// let client = RestClient::new("https://timebank.example.org/api/v1", "session-token");
    /// ```
    pub fn new(base_url: &str, session_token: &str) -> Self {
        let agent = Agent::from(
            Agent::config_builder()
                // Non-2xx statuses are part of the error taxonomy, not a
                // transport failure.
                .http_status_as_error(false)
                .tls_config(
                    TlsConfig::builder()
                        .provider(TlsProvider::NativeTls)
                        .build(),
                )
                .build(),
        );

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Bearer {session_token}"),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);

        info!("Fetching `{url}`");
        let start = Instant::now();

        let mut req = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json");
        for (key, value) in query {
            req = req.query(*key, value);
        }

        let mut resp = req.call()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        // Single decode step. A shape mismatch fails the whole fetch.
        let body = resp.body_mut().read_to_string()?;
        let value: T = serde_json::from_str(&body)?;

        let dur = start.elapsed();
        info!("`{url}` received in {dur:?}");
        trace!("{body}");

        Ok(value)
    }
}

impl WalletApi for RestClient {
    fn balance(&self) -> Result<WalletBalance, ClientError> {
        self.get_json("/wallet/balance", &[])
    }

    fn transactions(&self, limit: usize, offset: usize) -> Result<Vec<Transaction>, ClientError> {
        self.get_json(
            "/wallet/transactions",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
    }
}
