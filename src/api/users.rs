//! User service for the `ttuser` endpoint family.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{fetch_all_pages, ClientInner};
use crate::models::UserId;
use crate::Result;

const ENDPOINT: &str = "ttuser";

/// Service for user, user-account, and user-limit operations.
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get one page of the users associated with the application key.
    ///
    /// The result array lives under `"users"`.
    pub async fn users(&self, next_page_key: Option<String>) -> Result<Value> {
        let url = self.inner.service_url(ENDPOINT, "users");
        self.inner
            .get_with_query(&url, &cursor_query(next_page_key))
            .await
    }

    /// Get all users associated with the application key, merging every page
    /// into one response.
    pub async fn all_users(&self) -> Result<Value> {
        fetch_all_pages(|cursor| self.users(cursor), "users").await
    }

    /// Get one page of the accounts associated with a user.
    ///
    /// The result array lives under `"accounts"`.
    pub async fn accounts(
        &self,
        user_id: &UserId,
        next_page_key: Option<String>,
    ) -> Result<Value> {
        let url = self
            .inner
            .service_url(ENDPOINT, &format!("user/{user_id}/accounts"));
        self.inner
            .get_with_query(&url, &cursor_query(next_page_key))
            .await
    }

    /// Get all accounts associated with a user, merging every page into one
    /// response.
    pub async fn all_accounts(&self, user_id: &UserId) -> Result<Value> {
        fetch_all_pages(|cursor| self.accounts(user_id, cursor), "accounts").await
    }

    /// Get one page of the limits associated with a user.
    ///
    /// The result array lives under `"userLimits"`.
    pub async fn limits(&self, user_id: &UserId, next_page_key: Option<String>) -> Result<Value> {
        let url = self
            .inner
            .service_url(ENDPOINT, &format!("user/{user_id}/limits"));
        self.inner
            .get_with_query(&url, &cursor_query(next_page_key))
            .await
    }

    /// Get all limits associated with a user, merging every page into one
    /// response.
    pub async fn all_limits(&self, user_id: &UserId) -> Result<Value> {
        fetch_all_pages(|cursor| self.limits(user_id, cursor), "userLimits").await
    }
}

fn cursor_query(next_page_key: Option<String>) -> Vec<(&'static str, String)> {
    match next_page_key {
        Some(key) => vec![("nextPageKey", key)],
        None => Vec::new(),
    }
}
