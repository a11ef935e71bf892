//! Monitor service for the `ttmonitor` endpoint family: positions, SODs, and
//! credit utilization.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::AccountId;
use crate::Result;

const ENDPOINT: &str = "ttmonitor";

/// How position quantities are scaled in monitor responses.
///
/// Instruments whose position can be displayed in flow default to flow; this
/// selector overrides that per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleQty {
    /// Quantities as a number of contracts
    Contracts,
    /// Quantities in flow
    Flow,
}

impl ScaleQty {
    fn as_query_value(self) -> &'static str {
        match self {
            ScaleQty::Contracts => "0",
            ScaleQty::Flow => "1",
        }
    }
}

/// Service for position and credit monitoring.
///
/// Positions are based on today's fills; start-of-day records (SODs) are
/// included in the responses and P&L is expressed in the instrument's
/// currency.
pub struct MonitorService {
    inner: Arc<ClientInner>,
}

impl MonitorService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get instrument-level positions, for all accounts associated with the
    /// application key or restricted to `account_ids`.
    pub async fn position(
        &self,
        account_ids: &[AccountId],
        scale_qty: Option<ScaleQty>,
    ) -> Result<Value> {
        self.scoped_position("position", account_ids, scale_qty)
            .await
    }

    /// Get instrument-level positions for a single account.
    pub async fn position_for_account(
        &self,
        account_id: &AccountId,
        scale_qty: Option<ScaleQty>,
    ) -> Result<Value> {
        self.account_position(&format!("position/{account_id}"), scale_qty)
            .await
    }

    /// Get product-level positions, for all accounts associated with the
    /// application key or restricted to `account_ids`.
    pub async fn product_position(
        &self,
        account_ids: &[AccountId],
        scale_qty: Option<ScaleQty>,
    ) -> Result<Value> {
        self.scoped_position("productposition", account_ids, scale_qty)
            .await
    }

    /// Get product-level positions for a single account.
    pub async fn product_position_for_account(
        &self,
        account_id: &AccountId,
        scale_qty: Option<ScaleQty>,
    ) -> Result<Value> {
        self.account_position(&format!("productposition/{account_id}"), scale_qty)
            .await
    }

    /// Get product-family-level positions, for all accounts associated with
    /// the application key or restricted to `account_ids`.
    pub async fn product_family_position(
        &self,
        account_ids: &[AccountId],
        scale_qty: Option<ScaleQty>,
    ) -> Result<Value> {
        self.scoped_position("productfamilyposition", account_ids, scale_qty)
            .await
    }

    /// Get product-family-level positions for a single account.
    pub async fn product_family_position_for_account(
        &self,
        account_id: &AccountId,
        scale_qty: Option<ScaleQty>,
    ) -> Result<Value> {
        self.account_position(&format!("productfamilyposition/{account_id}"), scale_qty)
            .await
    }

    /// Get credit limit and credit utilization details for an account.
    pub async fn credit_utilization(
        &self,
        account_id: &AccountId,
        include_product_pos: Option<bool>,
    ) -> Result<Value> {
        let mut query = vec![("accountId", account_id.to_string())];
        if let Some(include) = include_product_pos {
            query.push(("includeProductPos", include.to_string()));
        }

        let url = self.inner.service_url(ENDPOINT, "creditutilization");
        self.inner.get_with_query(&url, &query).await
    }

    /// Get start-of-day records for an account.
    pub async fn sod(&self, account_id: &AccountId) -> Result<Value> {
        let url = self.inner.service_url(ENDPOINT, &format!("sod/{account_id}"));
        self.inner.get(&url).await
    }

    /// Shared query construction for the position endpoints that accept a
    /// comma-separated account list.
    async fn scoped_position(
        &self,
        path: &str,
        account_ids: &[AccountId],
        scale_qty: Option<ScaleQty>,
    ) -> Result<Value> {
        let mut query = Vec::new();
        if !account_ids.is_empty() {
            let ids = account_ids
                .iter()
                .map(AccountId::as_str)
                .collect::<Vec<_>>()
                .join(",");
            query.push(("accountIds", ids));
        }
        if let Some(scale) = scale_qty {
            query.push(("scaleQty", scale.as_query_value().to_string()));
        }

        let url = self.inner.service_url(ENDPOINT, path);
        self.inner.get_with_query(&url, &query).await
    }

    async fn account_position(&self, path: &str, scale_qty: Option<ScaleQty>) -> Result<Value> {
        let mut query = Vec::new();
        if let Some(scale) = scale_qty {
            query.push(("scaleQty", scale.as_query_value().to_string()));
        }

        let url = self.inner.service_url(ENDPOINT, path);
        self.inner.get_with_query(&url, &query).await
    }
}
