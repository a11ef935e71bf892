//! Data models for the TT REST API.
//!
//! TT responses are passed through as raw [`serde_json::Value`] objects (the
//! payload schemas vary per endpoint and market), so the models here are the
//! strongly-typed primitives used to *address* the API:
//!
//! - [`primitives`] - ID newtypes (`AccountId`, `UserId`, ...) and
//!   [`Environment`](primitives::Environment)

pub mod primitives;

pub use primitives::*;
