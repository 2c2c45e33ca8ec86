use serde::{Deserialize, Serialize};

/// A server-advertised follow-up operation on a resource.
///
/// Resources embed `<actions><link rel="stop" href="..." method="post"/>`
/// link elements; each becomes one `Action`. Feed one to
/// [`DeltacloudClient::perform_action`](crate::DeltacloudClient::perform_action)
/// to execute it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Action {
    /// Action name from the `rel` attribute (`start`, `stop`, ...).
    pub name: Option<String>,
    /// Absolute target URL from the `href` attribute.
    pub url: Option<String>,
    /// Lowercase HTTP method from the `method` attribute; `None` means GET.
    pub method: Option<String>,
}

impl Action {
    pub const START: &'static str = "start";
    pub const STOP: &'static str = "stop";
    pub const REBOOT: &'static str = "reboot";
    pub const DESTROY: &'static str = "destroy";

    /// Returns `true` if this action carries the given `rel` name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}
