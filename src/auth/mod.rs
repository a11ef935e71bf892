//! Authentication for the TT REST API.
//!
//! TT uses a token-exchange flow: the application posts its secret key to the
//! ttid service once and receives a long-lived bearer token, which is then
//! attached (together with the API key) to every data request.
//!
//! ```no_run
//! use ttrest_rs::{Authenticator, Credentials, Environment};
//!
//! let credentials = Credentials::new(
//!     Environment::Uat,
//!     "api-key",
//!     "api-key:secret",
//!     "MyApp",
//!     "MyCompany",
//! );
//! let auth = Authenticator::new(credentials);
//! ```

mod authenticator;
mod credentials;

pub use authenticator::Authenticator;
pub use credentials::Credentials;
