//! Authenticated access to Secret Server REST resources.
//!
//! [`ResourceAccessor`] is the single seam the rest of the SDK talks
//! through: one authenticated request against a named resource, raw
//! response bytes back. [`RestAccessor`] is the production implementation;
//! it owns base-URL derivation and OAuth2 password-grant token
//! acquisition, and maps HTTP status classes onto the error taxonomy.

use async_trait::async_trait;
pub use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::config::{Configuration, UserCredential};
use crate::error::Error;

/// Performs one authenticated request against a named resource.
///
/// Implementations must support concurrent in-flight calls; a single
/// logical SDK operation issues one or more of them in sequence.
#[async_trait]
pub trait ResourceAccessor: Send + Sync {
    async fn access(
        &self,
        method: Method,
        resource: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, Error>;
}

/// Shape of the `/oauth2/token` response; only the access token is used.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// REST implementation of [`ResourceAccessor`].
///
/// Holds only a `reqwest::Client` and the configuration; safe to share
/// across tasks.
#[derive(Debug, Clone)]
pub struct RestAccessor {
    http: reqwest::Client,
    base_url: String,
    credentials: UserCredential,
}

impl RestAccessor {
    /// Build the user-agent string from the crate version.
    fn user_agent() -> String {
        format!("tss-sdk/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Create an accessor from the given configuration.
    pub fn new(config: &Configuration) -> Result<Self, Error> {
        let base_url = config.base_url()?;
        let http = reqwest::Client::builder()
            .user_agent(Self::user_agent())
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build reqwest client");

        Ok(Self {
            http,
            base_url,
            credentials: config.credentials.clone(),
        })
    }

    /// Obtain an access token via the OAuth2 password grant.
    ///
    /// Acquired per call; this layer holds no token state.
    async fn grant_token(&self) -> Result<String, Error> {
        let url = format!("{}/oauth2/token", self.base_url);
        let params = [
            ("grant_type", "password"),
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
        ];

        let resp = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(Error::Network)?;

        match resp.status().as_u16() {
            200 => {
                let token = resp
                    .json::<TokenResponse>()
                    .await
                    .map_err(Error::Network)?;
                Ok(token.access_token)
            }
            // The token endpoint reports bad credentials as 400.
            400 | 401 | 403 => Err(Error::Unauthorized),
            429 => Err(Error::RateLimited),
            500..=599 => Err(Error::ServerError),
            other => Err(Error::UnexpectedStatus(other)),
        }
    }
}

#[async_trait]
impl ResourceAccessor for RestAccessor {
    async fn access(
        &self,
        method: Method,
        resource: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, Error> {
        let token = self.grant_token().await?;

        let url = if path.is_empty() {
            format!("{}/api/v1/{}", self.base_url, resource)
        } else {
            format!("{}/api/v1/{}/{}", self.base_url, resource, path)
        };
        debug!(%method, %url, "accessing resource");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(token)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let resp = request.send().await.map_err(Error::Network)?;
        match resp.status().as_u16() {
            200..=299 => resp
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(Error::Network),
            401 | 403 => Err(Error::Unauthorized),
            404 => Err(Error::NotFound(format!("{resource}/{path}"))),
            429 => Err(Error::RateLimited),
            500..=599 => Err(Error::ServerError),
            other => Err(Error::UnexpectedStatus(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
