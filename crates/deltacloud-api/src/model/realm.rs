use serde::{Deserialize, Serialize};

/// A datacenter-like partition instances are launched into.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Realm {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Driver-specific capacity limit; empty or absent means unlimited.
    pub limit: Option<String>,
    /// `AVAILABLE` or `UNAVAILABLE`.
    pub state: Option<String>,
}
