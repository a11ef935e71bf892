//! HTTP client and service layer for the TT REST API.
//!
//! This module provides the main entry point [`TTRestClient`] and the shared
//! plumbing every endpoint service is built on: the authenticated GET core and
//! the cursor-pagination aggregator.
//!
//! # Example
//!
//! ```no_run
//! use ttrest_rs::{Credentials, Environment, TTRestClient};
//!
//! # async fn example() -> ttrest_rs::Result<()> {
//! let credentials = Credentials::new(
//!     Environment::Uat,
//!     "api-key",
//!     "api-key:secret",
//!     "MyApp",
//!     "MyCompany",
//! );
//! let client = TTRestClient::new(credentials)?;
//!
//! let fills = client.ledger().fills(Default::default()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod paginated;

pub use config::{ClientConfig, DEFAULT_GATEWAY_URL};
pub use http::TTRestClient;
pub use paginated::fetch_all_pages;
pub(crate) use http::ClientInner;
