//! Product data service for the `ttpds` endpoint family.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::InstrumentId;
use crate::Result;

const ENDPOINT: &str = "ttpds";

/// Service for reference and product data lookups.
pub struct ProductDataService {
    inner: Arc<ClientInner>,
}

impl ProductDataService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the definition of a single instrument.
    pub async fn instrument(&self, instrument_id: &InstrumentId) -> Result<Value> {
        let url = self
            .inner
            .service_url(ENDPOINT, &format!("instrument/{instrument_id}"));
        self.inner.get(&url).await
    }
}
