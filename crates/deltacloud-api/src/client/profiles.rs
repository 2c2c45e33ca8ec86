// Hardware profile endpoints
//
// Failures are wrapped with operation context, same as the realm
// endpoints.

use tracing::debug;

use crate::error::Error;
use crate::model::HardwareProfile;
use crate::request::Request;
use crate::unmarshal;

use super::DeltacloudClient;

impl DeltacloudClient {
    /// List the hardware profiles the backend offers.
    ///
    /// `GET {base}/hardware_profiles`
    ///
    /// Failures are wrapped as
    /// `could not get hardware profiles on cloud at "{base}"`.
    pub async fn list_hardware_profiles(&self) -> Result<Vec<HardwareProfile>, Error> {
        debug!("listing hardware profiles");
        let outcome = async {
            let body = self
                .send(&Request::hardware_profiles(self.base_url())?)
                .await?;
            unmarshal::list_from_xml(&body)
        }
        .await;
        outcome.map_err(|e| self.operation_failed("get hardware profiles", e))
    }

    /// Fetch a single hardware profile by id.
    ///
    /// `GET {base}/hardware_profiles/{id}`
    ///
    /// Failures are wrapped like
    /// [`list_hardware_profiles`](Self::list_hardware_profiles).
    pub async fn get_hardware_profile(&self, profile_id: &str) -> Result<HardwareProfile, Error> {
        debug!("fetching hardware profile {profile_id}");
        let outcome = async {
            let body = self
                .send(&Request::hardware_profile(self.base_url(), profile_id)?)
                .await?;
            unmarshal::from_xml(&body)
        }
        .await;
        outcome.map_err(|e| self.operation_failed("get hardware profiles", e))
    }
}
