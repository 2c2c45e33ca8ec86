use serde::{Deserialize, Serialize};

use super::Action;

/// A running (or stopped) virtual machine.
///
/// References to other resources (`image_id`, `realm_id`, `profile_id`,
/// `key_id`) are carried as plain ids; fetch the full resource through the
/// client when needed. The `actions` list is whatever the server advertised
/// for the instance's current state, so `can_stop()` on a stopped instance
/// is simply `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Instance {
    pub id: Option<String>,
    pub name: Option<String>,
    pub owner_id: Option<String>,
    /// Id of the image the instance was launched from.
    pub image_id: Option<String>,
    /// Id of the hardware profile sizing the instance.
    pub profile_id: Option<String>,
    /// Id of the realm the instance lives in.
    pub realm_id: Option<String>,
    /// Lifecycle state as reported, e.g. `RUNNING`, `STOPPED`, `PENDING`.
    pub state: Option<String>,
    /// Name of the key the instance was launched with, when key auth is used.
    pub key_id: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub public_addresses: Vec<String>,
    #[serde(default)]
    pub private_addresses: Vec<String>,
}

impl Instance {
    /// Look up an advertised action by `rel` name.
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.is_named(name))
    }

    pub fn can_start(&self) -> bool {
        self.action(Action::START).is_some()
    }

    pub fn can_stop(&self) -> bool {
        self.action(Action::STOP).is_some()
    }

    pub fn can_reboot(&self) -> bool {
        self.action(Action::REBOOT).is_some()
    }

    pub fn can_destroy(&self) -> bool {
        self.action(Action::DESTROY).is_some()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn stopped_instance() -> Instance {
        Instance {
            id: Some("inst1".into()),
            state: Some("STOPPED".into()),
            actions: vec![
                Action {
                    name: Some("start".into()),
                    url: Some("http://localhost/api/instances/inst1/start".into()),
                    method: Some("post".into()),
                },
                Action {
                    name: Some("destroy".into()),
                    url: Some("http://localhost/api/instances/inst1".into()),
                    method: Some("delete".into()),
                },
            ],
            ..Instance::default()
        }
    }

    #[test]
    fn action_lookup_matches_rel_name() {
        let instance = stopped_instance();
        let start = instance.action("start").unwrap();
        assert_eq!(start.method.as_deref(), Some("post"));
        assert!(instance.action("reboot").is_none());
    }

    #[test]
    fn predicates_follow_advertised_actions() {
        let instance = stopped_instance();
        assert!(instance.can_start());
        assert!(instance.can_destroy());
        assert!(!instance.can_stop());
        assert!(!instance.can_reboot());
    }
}
