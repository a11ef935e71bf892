//! Token management for TT REST API authentication.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::client::DEFAULT_GATEWAY_URL;
use crate::{Error, Result};

use super::Credentials;

/// Handles authentication against the TT ttid service.
///
/// The authenticator owns the application [`Credentials`] and a cached bearer
/// token. The token is acquired lazily on the first request that needs one and
/// reused for the lifetime of the authenticator; TT tokens are long-lived and
/// the client tracks no expiry. A data call rejected with 401 does *not*
/// trigger re-acquisition - call [`Authenticator::refresh`] if the gateway
/// invalidates a token early.
///
/// # Example
///
/// ```no_run
/// use ttrest_rs::{Authenticator, Credentials, Environment};
///
/// # async fn example() -> ttrest_rs::Result<()> {
/// let credentials = Credentials::new(
///     Environment::Uat,
///     "api-key",
///     "api-key:secret",
///     "MyApp",
///     "MyCompany",
/// );
/// let auth = Authenticator::new(credentials);
///
/// let request = reqwest::Client::new().get("https://apigateway.trade.tt/ttledger/ext_uat_cert/fills");
/// let request = auth.authenticate(request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Authenticator {
    credentials: Credentials,
    gateway_url: String,
    token: Arc<RwLock<Option<SecretString>>>,
}

impl Authenticator {
    /// Create an authenticator for the given credentials, using the standard
    /// TT API gateway.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Override the gateway base URL the token exchange is sent to.
    pub fn with_gateway_url(mut self, gateway_url: impl Into<String>) -> Self {
        self.gateway_url = gateway_url.into();
        self
    }

    /// The credentials this authenticator signs requests with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns `true` if a token has been acquired and cached.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Perform the token exchange and cache the resulting bearer token.
    ///
    /// Sends `grant_type=user_app&app_key=<secret>` to
    /// `POST {gateway}/ttid/{environment}/token` with the API key as the
    /// `x-api-key` header. On success the cached token is replaced with
    /// `"<Token-type> <access-token>"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenAcquisition`] on any non-200 response; a
    /// previously cached token is left in place.
    pub async fn acquire_token(&self) -> Result<SecretString> {
        let client = reqwest::Client::new();
        let url = format!(
            "{}/ttid/{}/token",
            self.gateway_url,
            self.credentials.environment().path_segment()
        );

        tracing::debug!(%url, "requesting token from TT ttid service");

        let response = client
            .post(&url)
            .header("x-api-key", self.credentials.api_key())
            .query(&[("requestId", self.credentials.request_id())])
            .form(&[
                ("grant_type", "user_app"),
                ("app_key", self.credentials.secret_key().expose_secret().as_str()),
            ])
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            let status = response.status().as_u16();
            let body: Value = response.json().await.unwrap_or_default();
            return Err(Error::token_acquisition(status, body));
        }

        let token_response: TokenResponse = response.json().await?;
        let token = SecretString::from(format!(
            "{} {}",
            capitalize(&token_response.token_type),
            token_response.access_token
        ));

        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Discard the cached token and acquire a fresh one.
    ///
    /// The cache is only replaced if the exchange succeeds.
    pub async fn refresh(&self) -> Result<()> {
        self.acquire_token().await.map(|_| ())
    }

    /// Decorate a request with the TT authentication headers.
    ///
    /// Acquires a token first if none is cached, waiting for the exchange to
    /// complete before the request proceeds. Sets the `x-api-key` header and
    /// the `Authorization` header holding the cached bearer token, and returns
    /// the decorated builder.
    pub async fn authenticate(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        let token = self.token().await?;

        Ok(request
            .header("x-api-key", self.credentials.api_key())
            .header(
                reqwest::header::AUTHORIZATION,
                token.expose_secret().as_str(),
            ))
    }

    async fn token(&self) -> Result<SecretString> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }
        self.acquire_token().await
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("credentials", &self.credentials)
            .field("gateway_url", &self.gateway_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token_type: String,
    access_token: String,
}

/// Uppercase the first character and lowercase the rest, so a `token_type` of
/// `"bearer"` yields an `Authorization` scheme of `"Bearer"`.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
