// API entry point and driver discovery.

use tracing::debug;

use crate::error::Error;
use crate::model::{Api, Driver};
use crate::request::Request;
use crate::unmarshal;

use super::DeltacloudClient;

impl DeltacloudClient {
    /// Fetch the API entry point document.
    ///
    /// `GET {base}` returns the server's driver name and API version.
    pub async fn api(&self) -> Result<Api, Error> {
        debug!("fetching api entry point");
        let body = self.send(&Request::api(self.base_url())).await?;
        unmarshal::from_xml(&body)
    }

    /// Identify which backend driver the server is running.
    ///
    /// A probe, not an operation: every failure (unreachable server, bad
    /// credentials, malformed entry point) resolves to [`Driver::Unknown`]
    /// instead of an error. The cause is logged at debug level.
    pub async fn server_type(&self) -> Driver {
        match self.api().await {
            Ok(api) => api.driver,
            Err(error) => {
                debug!("capability lookup failed: {error}");
                Driver::Unknown
            }
        }
    }
}
