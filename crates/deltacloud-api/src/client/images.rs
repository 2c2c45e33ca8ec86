// Image endpoints

use tracing::debug;

use crate::error::Error;
use crate::model::Image;
use crate::request::Request;
use crate::unmarshal;

use super::DeltacloudClient;

impl DeltacloudClient {
    /// List all images available to launch from.
    ///
    /// `GET {base}/images`
    pub async fn list_images(&self) -> Result<Vec<Image>, Error> {
        let request = Request::images(self.base_url())?;
        debug!("listing images");
        let body = self.send(&request).await?;
        unmarshal::list_from_xml(&body)
    }

    /// Fetch a single image by id.
    ///
    /// `GET {base}/images/{id}`
    pub async fn get_image(&self, image_id: &str) -> Result<Image, Error> {
        let request = Request::image(self.base_url(), image_id)?;
        debug!("fetching image {image_id}");
        let body = self.send(&request).await?;
        unmarshal::from_xml(&body)
    }
}
