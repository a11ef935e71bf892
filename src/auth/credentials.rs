//! Application credentials for the TT REST API.

use secrecy::SecretString;
use uuid::Uuid;

use crate::models::Environment;

/// Credentials identifying an application to the TT REST API.
///
/// Credentials are immutable once constructed. The application secret is
/// expected in the form `key:secret`, exactly as issued in the TT setup app;
/// it is sent as the `app_key` grant field during the token exchange.
///
/// # Example
///
/// ```
/// use ttrest_rs::{Credentials, Environment};
///
/// let credentials = Credentials::new(
///     Environment::Uat,
///     "00000000-0000-0000-0000-000000000000",
///     "00000000-0000-0000-0000-000000000000:11111111-1111-1111-1111-111111111111",
///     "MyApp",
///     "MyCompany",
/// );
/// assert_eq!(credentials.app_name(), "MyApp");
/// ```
#[derive(Clone)]
pub struct Credentials {
    environment: Environment,
    api_key: String,
    secret_key: SecretString,
    app_name: String,
    company_name: String,
}

impl Credentials {
    /// Create a new set of credentials.
    pub fn new(
        environment: Environment,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        app_name: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
            app_name: app_name.into(),
            company_name: company_name.into(),
        }
    }

    /// The environment these credentials are registered for.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The API key, sent as the `x-api-key` header on every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The application name registered with TT.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The company name registered with TT.
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub(crate) fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }

    /// Generate a fresh request identifier.
    ///
    /// Every TT request carries a `requestId` query parameter in the format
    /// `"{app_name}-{company_name}--{uuid}"`, unique per call.
    pub fn request_id(&self) -> String {
        format!(
            "{}-{}--{}",
            self.app_name,
            self.company_name,
            Uuid::new_v4()
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("environment", &self.environment)
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("app_name", &self.app_name)
            .field("company_name", &self.company_name)
            .finish()
    }
}
