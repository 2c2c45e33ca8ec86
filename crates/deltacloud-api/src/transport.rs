// HTTP transport
//
// The client talks to the network through the `HttpTransport` trait so tests
// and embedders can substitute their own I/O. The bundled implementation
// drives `reqwest` with optional Basic auth and maps HTTP status classes
// onto crate errors before any body reaches the unmarshallers.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::Error;
use crate::request::Request;

/// TLS verification mode.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Accept any certificate (for self-signed lab servers).
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("deltacloud-api/0.1.0");

        match &self.tls {
            TlsMode::System => {}
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        Ok(builder.build()?)
    }
}

/// Username/password pair applied as HTTP Basic auth on every request.
///
/// Deltacloud servers pass these through to the backend cloud, so they are
/// whatever the driver expects (EC2 access key + secret, RHEV-M user, ...).
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// Pluggable I/O seam: deliver one described request, return the raw body.
///
/// Implementations must resolve non-2xx statuses to errors so the
/// unmarshallers only ever see payload documents.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(&self, request: &Request) -> Result<String, Error>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    credentials: Option<Credentials>,
}

impl ReqwestTransport {
    /// Build a transport from a config and optional credentials.
    pub fn new(config: &TransportConfig, credentials: Option<Credentials>) -> Result<Self, Error> {
        Ok(Self {
            http: config.build_client()?,
            credentials,
        })
    }

    async fn handle_response(response: reqwest::Response) -> Result<String, Error> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(Error::Authentication {
                message: format!("server rejected credentials (HTTP {status})"),
            });
        }
        if !status.is_success() {
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                url,
                // Server error pages can be huge; keep a preview.
                message: body.chars().take(200).collect(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(&self, request: &Request) -> Result<String, Error> {
        debug!("{} {}", request.method(), request.url());
        let mut builder = self
            .http
            .request(request.method().clone(), request.url().clone());
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(
                &credentials.username,
                Some(credentials.password.expose_secret()),
            );
        }
        if !request.form().is_empty() {
            builder = builder.form(request.form());
        }
        let response = builder.send().await?;
        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_config_builds_a_client() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        config.build_client().unwrap();
    }

    #[test]
    fn lax_tls_config_builds_a_client() {
        let config = TransportConfig {
            tls: TlsMode::DangerAcceptInvalid,
            ..TransportConfig::default()
        };
        config.build_client().unwrap();
    }

    #[test]
    fn credentials_debug_redacts_the_password() {
        let credentials = Credentials::new("mockuser", "mockpassword".to_owned().into());
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("mockuser"));
        assert!(!rendered.contains("mockpassword"));
    }
}
