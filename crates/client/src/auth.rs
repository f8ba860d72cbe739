//! Request authentication.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// How requests authenticate against the Dashboards server.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic credentials (security plugin internal users).
    Basic {
        username: String,
        password: SecretString,
    },
    /// Bearer token.
    ApiToken { token: SecretString },
}

impl AuthStrategy {
    /// Attach credentials to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
        }
    }
}

impl From<&ism_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &ism_config::AuthStrategy) -> Self {
        match strategy {
            ism_config::AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            ism_config::AuthStrategy::ApiToken { token } => Self::ApiToken {
                token: token.clone(),
            },
        }
    }
}
