// Credential (key pair) endpoints.

use tracing::debug;

use crate::error::Error;
use crate::model::Key;
use crate::request::Request;
use crate::unmarshal;

use super::DeltacloudClient;

impl DeltacloudClient {
    /// List the credentials stored on the backend.
    ///
    /// `GET {base}/keys`
    pub async fn list_keys(&self) -> Result<Vec<Key>, Error> {
        debug!("listing keys");
        let body = self.send(&Request::keys(self.base_url())?).await?;
        unmarshal::list_from_xml(&body)
    }

    /// Fetch a single credential by id.
    ///
    /// `GET {base}/keys/{id}`
    pub async fn get_key(&self, key_id: &str) -> Result<Key, Error> {
        debug!("fetching key {key_id}");
        let body = self.send(&Request::key(self.base_url(), key_id)?).await?;
        unmarshal::from_xml(&body)
    }

    /// Create a new key pair named `name`.
    ///
    /// `POST {base}/keys` with a `keyname` form parameter. The returned
    /// [`Key`] carries the PEM-encoded private key; the server does not
    /// hand it out again, so persist it from this response if you need it.
    pub async fn create_key(&self, name: &str) -> Result<Key, Error> {
        debug!("creating key {name}");
        let body = self
            .send(&Request::create_key(self.base_url(), name)?)
            .await?;
        unmarshal::from_xml(&body)
    }
}
