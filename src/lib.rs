//! # ttrest-rs
//!
//! A Rust client for the Trading Technologies (TT) REST API 2.0.
//!
//! This crate wraps the TT gateway's endpoint families - accounts, users,
//! ledger (fills/orders), monitor (positions/credit), and product data -
//! behind one authenticated HTTP core with transparent cursor pagination.
//!
//! ## Features
//!
//! - **Authentication**: lazy token exchange against the ttid service, with
//!   the bearer token cached and attached to every request
//! - **Pagination**: `all_*` methods walk the `lastPage`/`nextPageKey` chain
//!   and merge every page into a single response
//! - **Pass-through JSON**: responses are returned as [`serde_json::Value`],
//!   exactly as the gateway sent them
//! - **Type-safe addressing**: ID newtypes and a closed [`Environment`] enum
//!   keep URLs well-formed at compile time
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ttrest_rs::{Credentials, Environment, TTRestClient};
//!
//! #[tokio::main]
//! async fn main() -> ttrest_rs::Result<()> {
//!     // Credentials as issued in the TT setup app. The secret has the form
//!     // "key:secret" and the API key is its first half.
//!     let credentials = Credentials::new(
//!         Environment::Uat,
//!         "00000000-0000-0000-0000-000000000000",
//!         "00000000-0000-0000-0000-000000000000:11111111-1111-1111-1111-111111111111",
//!         "MyApp",
//!         "MyCompany",
//!     );
//!     let client = TTRestClient::new(credentials)?;
//!
//!     // Print today's fills. The token is acquired on this first call and
//!     // reused afterwards.
//!     let fills = client.ledger().fills(Default::default()).await?;
//!     println!("{}", serde_json::to_string_pretty(&fills)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! Listing endpoints are limited to around 500 records per response. Each
//! service exposes the raw single-page call and an aggregating variant:
//!
//! ```rust,no_run
//! # async fn example(client: ttrest_rs::TTRestClient) -> ttrest_rs::Result<()> {
//! // One page, with the cursor handled manually:
//! let page = client.users().users(None).await?;
//!
//! // Every page, merged into one response with `lastPage` exhausted:
//! let everyone = client.users().all_users().await?;
//! assert!(everyone["users"].as_array().is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Authenticator, Credentials};
pub use client::{ClientConfig, TTRestClient, DEFAULT_GATEWAY_URL};
pub use error::{Error, Result};
pub use models::{AccountId, Environment, InstrumentId, OrderId, UserId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use ttrest_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AccountsService, FillsQuery, LedgerService, MonitorService, ProductDataService, ScaleQty,
        UsersService,
    };
    pub use crate::auth::{Authenticator, Credentials};
    pub use crate::client::{ClientConfig, TTRestClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{AccountId, Environment, InstrumentId, OrderId, UserId};
}
