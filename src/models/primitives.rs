//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around the identifiers the TT
//! REST API uses in URLs, to prevent mixing up different kinds of IDs at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id.to_string())
            }
        }
    };
}

id_newtype! {
    /// A strongly-typed TT account ID.
    ///
    /// Account IDs are returned by `AccountsService::accounts` and referenced
    /// by the monitor and ledger endpoints.
    ///
    /// # Example
    ///
    /// ```
    /// use ttrest_rs::AccountId;
    ///
    /// let account = AccountId::from(123588);
    /// assert_eq!(account.as_str(), "123588");
    /// ```
    AccountId
}

id_newtype! {
    /// A strongly-typed TT user ID, as returned by `UsersService::users`.
    UserId
}

id_newtype! {
    /// A strongly-typed TT order ID.
    OrderId
}

id_newtype! {
    /// A strongly-typed TT instrument ID for product-data lookups.
    InstrumentId
}

/// Deployment environment for the TT REST API.
///
/// Each environment maps to a fixed path segment in every request URL:
/// `{gateway}/{endpoint}/{segment}/...`.
///
/// # Example
///
/// ```
/// use ttrest_rs::Environment;
///
/// let env = Environment::Uat;
/// assert_eq!(env.path_segment(), "ext_uat_cert");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// User Acceptance Testing / certification environment.
    #[default]
    Uat,
    /// Production environment - real orders and real fills.
    Live,
}

impl Environment {
    /// Get the URL path segment for this environment.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Environment::Uat => "ext_uat_cert",
            Environment::Live => "ext_prod_live",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Uat => write!(f, "uat"),
            Environment::Live => write!(f, "live"),
        }
    }
}
