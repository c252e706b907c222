//! Client configuration.
//!
//! A [`Configuration`] names a Secret Server instance either by cloud
//! tenant or by explicit server URL, plus the credential used for the
//! OAuth2 password grant. It is `Deserialize`-able so embedding
//! applications can load it from their own config files.

use std::fmt;

use serde::Deserialize;

use crate::error::Error;

/// Domain appended to the tenant name when no explicit server URL is set.
const TENANT_DOMAIN: &str = "secretservercloud.com";

/// Username and password for the OAuth2 password grant.
#[derive(Clone, Default, Deserialize)]
pub struct UserCredential {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Connection settings for a Secret Server instance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    pub credentials: UserCredential,
    /// Cloud tenant name; ignored when `server_url` is set.
    #[serde(default)]
    pub tenant: String,
    /// Explicit base URL, for on-premises instances.
    #[serde(default)]
    pub server_url: String,
}

impl Configuration {
    /// Derives the base URL: an explicit `server_url` wins, otherwise the
    /// cloud URL for `tenant`.
    pub(crate) fn base_url(&self) -> Result<String, Error> {
        let url = if !self.server_url.is_empty() {
            self.server_url.trim_end_matches('/').to_owned()
        } else if !self.tenant.is_empty() {
            format!("https://{}.{}", self.tenant, TENANT_DOMAIN)
        } else {
            return Err(Error::Config(
                "either tenant or server_url must be set".into(),
            ));
        };
        validate_url_scheme(&url)?;
        Ok(url)
    }
}

/// Require `https://`, allowing `http://` only for localhost.
fn validate_url_scheme(url: &str) -> Result<(), Error> {
    if url.starts_with("https://") {
        return Ok(());
    }
    if let Some(host_part) = url.strip_prefix("http://") {
        let host = host_part.split('/').next().unwrap_or("");
        let host_no_port = host.split(':').next().unwrap_or("");
        if host_no_port == "localhost" || host_no_port == "127.0.0.1" {
            return Ok(());
        }
        return Err(Error::Config(format!(
            "insecure HTTP URL rejected: {url} (http:// is permitted for localhost only)"
        )));
    }
    Err(Error::Config(format!(
        "unsupported URL scheme: {url} (only https:// is allowed)"
    )))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_derives_cloud_url() {
        let config = Configuration {
            tenant: "example".into(),
            ..Configuration::default()
        };
        assert_eq!(
            config.base_url().unwrap(),
            "https://example.secretservercloud.com"
        );
    }

    #[test]
    fn server_url_wins_over_tenant() {
        let config = Configuration {
            tenant: "example".into(),
            server_url: "https://vault.internal/SecretServer/".into(),
            ..Configuration::default()
        };
        assert_eq!(
            config.base_url().unwrap(),
            "https://vault.internal/SecretServer"
        );
    }

    #[test]
    fn missing_tenant_and_url_is_config_error() {
        let err = Configuration::default().base_url().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn localhost_http_accepted() {
        for url in ["http://localhost:8080", "http://127.0.0.1:8080"] {
            let config = Configuration {
                server_url: url.into(),
                ..Configuration::default()
            };
            assert_eq!(config.base_url().unwrap(), url);
        }
    }

    #[test]
    fn remote_http_rejected() {
        let config = Configuration {
            server_url: "http://vault.example.com".into(),
            ..Configuration::default()
        };
        let err = config.base_url().unwrap_err();
        assert!(format!("{err}").contains("insecure HTTP URL rejected"));
    }

    #[test]
    fn unknown_scheme_rejected() {
        let config = Configuration {
            server_url: "ftp://vault.example.com".into(),
            ..Configuration::default()
        };
        let err = config.base_url().unwrap_err();
        assert!(format!("{err}").contains("unsupported URL scheme"));
    }

    #[test]
    fn credential_debug_redacts_password() {
        let credential = UserCredential {
            username: "app".into(),
            password: "hunter2".into(),
        };
        let debug = format!("{credential:?}");
        assert!(debug.contains("app"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn configuration_deserializes() {
        let json = r#"{
            "credentials": {"username": "app", "password": "pw"},
            "tenant": "example"
        }"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config.credentials.username, "app");
        assert_eq!(config.tenant, "example");
        assert!(config.server_url.is_empty());
    }
}
