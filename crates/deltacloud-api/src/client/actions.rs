// Action dispatch.
//
// Servers advertise actions as rel/href/method link triples on each
// resource; requests follow the advertised href and method verbatim.

use tracing::debug;

use crate::error::Error;
use crate::model::Action;
use crate::request::Request;

use super::DeltacloudClient;

impl DeltacloudClient {
    /// Invoke an [`Action`] advertised on an instance or key.
    ///
    /// The request follows the action's `href` and `method` exactly as the
    /// server advertised them. Returns the raw response body; most drivers
    /// answer with the updated instance document, some with an empty body.
    pub async fn perform_action(&self, action: &Action) -> Result<String, Error> {
        debug!(
            "performing action {}",
            action.name.as_deref().unwrap_or("?")
        );
        self.send(&Request::action(action)?).await
    }
}
