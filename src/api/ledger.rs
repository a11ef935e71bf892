//! Ledger service for the `ttledger` endpoint family: fills and orders.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{AccountId, OrderId};
use crate::{Error, Result};

const ENDPOINT: &str = "ttledger";

/// Service for fill and order history operations.
///
/// # Example
///
/// ```no_run
/// use ttrest_rs::api::FillsQuery;
/// use ttrest_rs::AccountId;
///
/// # async fn example(client: ttrest_rs::TTRestClient) -> ttrest_rs::Result<()> {
/// let query = FillsQuery {
///     account_id: Some(AccountId::from(123588)),
///     ..Default::default()
/// };
/// let fills = client.ledger().fills(query).await?;
/// # Ok(())
/// # }
/// ```
pub struct LedgerService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing fills.
///
/// Timestamps are nanoseconds since the Unix epoch. `min_timestamp` and
/// `max_timestamp` bound a time window and must be supplied together.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillsQuery {
    /// Restrict to fills of one account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    /// Start of the time window, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_timestamp: Option<i64>,
    /// End of the time window, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_timestamp: Option<i64>,
    /// Restrict to fills of one order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    /// Restrict to fills of one product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Include over-the-counter fills
    #[serde(rename = "includeOTC")]
    pub include_otc: bool,
}

impl LedgerService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get today's fills, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] when only one of `min_timestamp` and
    /// `max_timestamp` is supplied.
    pub async fn fills(&self, query: FillsQuery) -> Result<Value> {
        if query.min_timestamp.is_some() != query.max_timestamp.is_some() {
            return Err(Error::Usage(
                "minTimestamp and maxTimestamp must be supplied together".into(),
            ));
        }

        let url = self.inner.service_url(ENDPOINT, "fills");
        self.inner.get_with_query(&url, &query).await
    }

    /// Get today's orders for all accounts associated with the application
    /// key.
    pub async fn orders(&self) -> Result<Value> {
        let url = self.inner.service_url(ENDPOINT, "orders");
        self.inner.get(&url).await
    }

    /// Get a single order by ID.
    pub async fn order(&self, order_id: &OrderId) -> Result<Value> {
        let url = self
            .inner
            .service_url(ENDPOINT, &format!("orders/{order_id}"));
        self.inner.get(&url).await
    }

    /// Get the enumerated values used in order data fields, for decoding
    /// order and fill records.
    pub async fn order_data(&self) -> Result<Value> {
        let url = self.inner.service_url(ENDPOINT, "orderdata");
        self.inner.get(&url).await
    }
}
