//! API service modules for the TT REST endpoint families.
//!
//! Each service wraps one endpoint family (`ttaccount`, `ttuser`, `ttledger`,
//! `ttmonitor`, `ttpds`) and returns the gateway's JSON responses as
//! [`serde_json::Value`] pass-throughs. Listing endpoints come in pairs: a
//! single-page method taking an optional `nextPageKey`, and an `all_*` method
//! that aggregates every page.

mod accounts;
mod ledger;
mod monitor;
mod pds;
mod users;

pub use accounts::AccountsService;
pub use ledger::{FillsQuery, LedgerService};
pub use monitor::{MonitorService, ScaleQty};
pub use pds::ProductDataService;
pub use users::UsersService;
