//! Account service for the `ttaccount` endpoint family.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{fetch_all_pages, ClientInner};
use crate::models::AccountId;
use crate::Result;

const ENDPOINT: &str = "ttaccount";

/// Service for account and account-limit operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: ttrest_rs::TTRestClient) -> ttrest_rs::Result<()> {
/// // All accounts associated with the application key, across every page
/// let response = client.accounts().all_accounts(false).await?;
/// for account in response["accounts"].as_array().unwrap() {
///     println!("{} {}", account["accountId"], account["name"]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get one page of the accounts associated with the application key.
    ///
    /// Set `mine_only` to return only the accounts the authenticated user can
    /// trade through. Pass the previous page's `nextPageKey` to continue a
    /// paginated listing; the result array lives under `"accounts"`.
    pub async fn accounts(&self, mine_only: bool, next_page_key: Option<String>) -> Result<Value> {
        let mut query = vec![("mineOnly", mine_only.to_string())];
        if let Some(key) = next_page_key {
            query.push(("nextPageKey", key));
        }

        let url = self.inner.service_url(ENDPOINT, "accounts");
        self.inner.get_with_query(&url, &query).await
    }

    /// Get all accounts associated with the application key, merging every
    /// page into one response.
    pub async fn all_accounts(&self, mine_only: bool) -> Result<Value> {
        fetch_all_pages(|cursor| self.accounts(mine_only, cursor), "accounts").await
    }

    /// Get one page of the risk limits configured for an account.
    ///
    /// The result array lives under `"accountLimits"`.
    pub async fn limits(
        &self,
        account_id: &AccountId,
        next_page_key: Option<String>,
    ) -> Result<Value> {
        let mut query = Vec::new();
        if let Some(key) = next_page_key {
            query.push(("nextPageKey", key));
        }

        let url = self
            .inner
            .service_url(ENDPOINT, &format!("account/{account_id}/limits"));
        self.inner.get_with_query(&url, &query).await
    }

    /// Get all risk limits configured for an account, merging every page into
    /// one response.
    pub async fn all_limits(&self, account_id: &AccountId) -> Result<Value> {
        fetch_all_pages(|cursor| self.limits(account_id, cursor), "accountLimits").await
    }
}
