//! HTTP client implementation for the TT REST API.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::api::{
    AccountsService, LedgerService, MonitorService, ProductDataService, UsersService,
};
use crate::auth::{Authenticator, Credentials};
use crate::{Environment, Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the TT REST API 2.0.
///
/// The client provides access to the per-endpoint services through accessor
/// methods. It manages authentication, request identifiers, and response
/// parsing; every call is sequential and awaited to completion.
///
/// # Example
///
/// ```no_run
/// use ttrest_rs::{Credentials, Environment, TTRestClient};
///
/// # async fn example() -> ttrest_rs::Result<()> {
/// let credentials = Credentials::new(
///     Environment::Uat,
///     "api-key",
///     "api-key:secret",
///     "MyApp",
///     "MyCompany",
/// );
/// let client = TTRestClient::new(credentials)?;
///
/// // Fetch every account page and print the merged response
/// let accounts = client.accounts().all_accounts(false).await?;
/// println!("{accounts:#}");
/// # Ok(())
/// # }
/// ```
pub struct TTRestClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) auth: Authenticator,
    pub(crate) config: ClientConfig,
}

impl TTRestClient {
    /// Create a new client with default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let auth = Authenticator::new(credentials).with_gateway_url(config.gateway_url.clone());
        Self::with_authenticator(auth, config)
    }

    /// Create a new client around an existing [`Authenticator`].
    ///
    /// Useful when several clients should share one cached token.
    pub fn with_authenticator(auth: Authenticator, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, auth, config }),
        })
    }

    /// Get the account service (`ttaccount`).
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the user service (`ttuser`).
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the ledger service for fills and orders (`ttledger`).
    pub fn ledger(&self) -> LedgerService {
        LedgerService::new(self.inner.clone())
    }

    /// Get the monitor service for positions and credit (`ttmonitor`).
    pub fn monitor(&self) -> MonitorService {
        MonitorService::new(self.inner.clone())
    }

    /// Get the product data service (`ttpds`).
    pub fn product_data(&self) -> ProductDataService {
        ProductDataService::new(self.inner.clone())
    }

    /// Get a reference to the authenticator.
    pub fn authenticator(&self) -> &Authenticator {
        &self.inner.auth
    }

    /// Get the environment this client talks to.
    pub fn environment(&self) -> Environment {
        self.inner.auth.credentials().environment()
    }
}

impl ClientInner {
    /// Build a full URL for an endpoint family, e.g.
    /// `https://apigateway.trade.tt/ttledger/ext_uat_cert/fills`.
    pub(crate) fn service_url(&self, endpoint: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.gateway_url,
            endpoint,
            self.auth.credentials().environment().path_segment(),
            path
        )
    }

    /// Send an authenticated GET request.
    pub(crate) async fn get(&self, url: &str) -> Result<Value> {
        let request = self.http.get(url);
        self.send(url, request).await
    }

    /// Send an authenticated GET request with query parameters.
    pub(crate) async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<Value> {
        let request = self.http.get(url).query(query);
        self.send(url, request).await
    }

    /// Attach a fresh request identifier and the authentication headers, send
    /// the request, and parse the response.
    async fn send(&self, url: &str, request: reqwest::RequestBuilder) -> Result<Value> {
        tracing::debug!(%url, "HTTP GET request to TT REST API 2.0");

        let request = request.query(&[("requestId", self.auth.credentials().request_id())]);
        let response = self.auth.authenticate(request).await?.send().await?;

        if response.status() != reqwest::StatusCode::OK {
            let status = response.status().as_u16();
            let body: Value = response.json().await.unwrap_or_default();
            return Err(Error::request(status, body));
        }

        Ok(response.json().await?)
    }
}

impl Clone for TTRestClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for TTRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TTRestClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> TTRestClient {
        let credentials = Credentials::new(
            Environment::Uat,
            "key",
            "key:secret",
            "MyApp",
            "MyCompany",
        );
        TTRestClient::new(credentials).unwrap()
    }

    #[test]
    fn test_service_url_includes_environment_segment() {
        let client = test_client();
        assert_eq!(
            client.inner.service_url("ttledger", "fills"),
            "https://apigateway.trade.tt/ttledger/ext_uat_cert/fills"
        );
    }

    #[test]
    fn test_service_url_respects_gateway_override() {
        let credentials = Credentials::new(
            Environment::Live,
            "key",
            "key:secret",
            "MyApp",
            "MyCompany",
        );
        let config = ClientConfig::default().with_gateway_url("http://127.0.0.1:4010");
        let client = TTRestClient::with_config(credentials, config).unwrap();

        assert_eq!(
            client.inner.service_url("ttaccount", "accounts"),
            "http://127.0.0.1:4010/ttaccount/ext_prod_live/accounts"
        );
    }
}
