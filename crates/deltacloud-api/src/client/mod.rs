// Deltacloud client facade
//
// `DeltacloudClient` composes request descriptors, hands them to the
// transport, and unmarshals XML response bodies into model types. Endpoint
// modules (instances, images, ...) are implemented as inherent methods via
// separate files to keep this module focused on construction and plumbing.

mod actions;
mod capability;
mod images;
mod instances;
mod keys;
mod profiles;
mod realms;

use std::sync::Arc;

use secrecy::SecretString;
use url::Url;

use crate::error::Error;
use crate::request::Request;
use crate::transport::{Credentials, HttpTransport, ReqwestTransport, TransportConfig};

/// Client for one Deltacloud server.
///
/// Cheap to share: every operation takes `&self` and the transport sits
/// behind an `Arc`, so one client can serve many concurrent tasks.
pub struct DeltacloudClient {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
}

impl DeltacloudClient {
    /// Create an anonymous client with the default transport.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::from_config(base_url, &TransportConfig::default(), None)
    }

    /// Create a client that sends HTTP Basic credentials on every request.
    pub fn with_credentials(
        base_url: &str,
        username: impl Into<String>,
        password: SecretString,
    ) -> Result<Self, Error> {
        Self::from_config(
            base_url,
            &TransportConfig::default(),
            Some(Credentials::new(username, password)),
        )
    }

    /// Create a client from an explicit transport config.
    pub fn from_config(
        base_url: &str,
        transport: &TransportConfig,
        credentials: Option<Credentials>,
    ) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(transport, credentials)?;
        Self::with_transport(base_url, transport)
    }

    /// Create a client on a caller-supplied transport (custom I/O, fakes).
    pub fn with_transport<T>(base_url: &str, transport: T) -> Result<Self, Error>
    where
        T: HttpTransport + 'static,
    {
        Ok(Self {
            base_url: Self::normalize_base_url(base_url)?,
            transport: Arc::new(transport),
        })
    }

    /// The normalized base URL (always slash-terminated).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Parse and validate the base URL at construction time.
    ///
    /// Guarantees the trailing slash so `Url::join` extends the path
    /// instead of replacing its last segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::Configuration {
                url: raw.to_owned(),
                reason: "URL cannot serve as a request base".into(),
            });
        }
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::Configuration {
                    url: raw.to_owned(),
                    reason: format!("unsupported scheme \"{other}\""),
                });
            }
        }
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    pub(crate) async fn send(&self, request: &Request) -> Result<String, Error> {
        self.transport.request(request).await
    }

    /// Wrap a failure with the high-level operation it interrupted.
    pub(crate) fn operation_failed(&self, operation: &'static str, source: Error) -> Error {
        Error::Operation {
            operation,
            base_url: self.base_url.to_string(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn base_url_gains_a_trailing_slash() {
        let url = DeltacloudClient::normalize_base_url("http://localhost:3001/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/api/");

        let url = DeltacloudClient::normalize_base_url("http://localhost:3001/api/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/api/");

        let url = DeltacloudClient::normalize_base_url("http://localhost:3001").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/");
    }

    #[test]
    fn relative_base_url_is_rejected() {
        assert!(matches!(
            DeltacloudClient::normalize_base_url("localhost/api"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        assert!(matches!(
            DeltacloudClient::normalize_base_url("mailto:admin@example.com"),
            Err(Error::Configuration { .. })
        ));
        assert!(matches!(
            DeltacloudClient::normalize_base_url("ftp://example.com/api"),
            Err(Error::Configuration { .. })
        ));
    }
}
