use serde::{Deserialize, Serialize};

use super::Action;

/// A credential for reaching instances, usually an SSH keypair.
///
/// The PEM material is only returned once, in the response to the create
/// call; subsequent fetches carry the fingerprint but not the private key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Key {
    pub id: Option<String>,
    pub fingerprint: Option<String>,
    /// Private key material, present only on creation.
    pub pem: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Key {
    /// Look up an advertised action by `rel` name.
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.is_named(name))
    }
}
