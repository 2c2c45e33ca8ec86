// Instance endpoints
//
// Instances are the busiest resource: list/fetch plus creation with
// placement, sizing, and key parameters. Creation POSTs form fields and
// unmarshals the single instance the server echoes back.

use tracing::debug;

use crate::error::Error;
use crate::model::Instance;
use crate::request::{CreateInstanceParams, Request};
use crate::unmarshal;

use super::DeltacloudClient;

impl DeltacloudClient {
    /// List all instances visible to the caller.
    ///
    /// `GET {base}/instances`
    pub async fn list_instances(&self) -> Result<Vec<Instance>, Error> {
        let request = Request::instances(self.base_url())?;
        debug!("listing instances");
        let body = self.send(&request).await?;
        unmarshal::list_from_xml(&body)
    }

    /// Fetch a single instance by id.
    ///
    /// `GET {base}/instances/{id}`
    pub async fn get_instance(&self, instance_id: &str) -> Result<Instance, Error> {
        let request = Request::instance(self.base_url(), instance_id)?;
        debug!("fetching instance {instance_id}");
        let body = self.send(&request).await?;
        unmarshal::from_xml(&body)
    }

    /// Launch an instance from an image, leaving every other choice to the
    /// server's defaults.
    ///
    /// `POST {base}/instances`
    pub async fn create_instance(&self, image_id: &str) -> Result<Instance, Error> {
        self.create_instance_with(&CreateInstanceParams::new(image_id))
            .await
    }

    /// Launch an instance with explicit placement, sizing, and key choices.
    ///
    /// `POST {base}/instances`
    ///
    /// Some servers leave the key name out of the create response even when
    /// one was requested; the supplied key id is copied onto the result so
    /// callers can rely on it either way.
    pub async fn create_instance_with(
        &self,
        params: &CreateInstanceParams,
    ) -> Result<Instance, Error> {
        let request = Request::create_instance(self.base_url(), params)?;
        debug!("creating instance from image {}", params.image_id);
        let body = self.send(&request).await?;
        let mut instance: Instance = unmarshal::from_xml(&body)?;
        if let Some(key_id) = &params.key_id {
            instance.key_id = Some(key_id.clone());
        }
        Ok(instance)
    }
}
