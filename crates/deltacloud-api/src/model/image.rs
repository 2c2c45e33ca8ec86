use serde::{Deserialize, Serialize};

/// A machine image an instance can be launched from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub id: Option<String>,
    pub owner_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// CPU architecture the image targets, e.g. `x86_64` or `i386`.
    pub architecture: Option<String>,
}
