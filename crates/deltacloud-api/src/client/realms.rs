// Realm endpoints
//
// Realm fetches wrap their failures with operation context so callers see
// which cloud refused them, not just the low-level cause.

use tracing::debug;

use crate::error::Error;
use crate::model::Realm;
use crate::request::Request;
use crate::unmarshal;

use super::DeltacloudClient;

impl DeltacloudClient {
    /// List the realms instances can be launched into.
    ///
    /// `GET {base}/realms`
    ///
    /// Failures are wrapped as `could not get realms on cloud at "{base}"`.
    pub async fn list_realms(&self) -> Result<Vec<Realm>, Error> {
        debug!("listing realms");
        let outcome = async {
            let body = self.send(&Request::realms(self.base_url())?).await?;
            unmarshal::list_from_xml(&body)
        }
        .await;
        outcome.map_err(|e| self.operation_failed("get realms", e))
    }

    /// Fetch a single realm by id.
    ///
    /// `GET {base}/realms/{id}`
    ///
    /// Failures are wrapped like [`list_realms`](Self::list_realms).
    pub async fn get_realm(&self, realm_id: &str) -> Result<Realm, Error> {
        debug!("fetching realm {realm_id}");
        let outcome = async {
            let body = self
                .send(&Request::realm(self.base_url(), realm_id)?)
                .await?;
            unmarshal::from_xml(&body)
        }
        .await;
        outcome.map_err(|e| self.operation_failed("get realms", e))
    }
}
