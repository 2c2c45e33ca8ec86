use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend driver a Deltacloud server is running against.
///
/// Parsed from the `driver` attribute of the top-level `<api>` element.
/// Anything the crate does not recognize (including an absent attribute)
/// maps to [`Driver::Unknown`] rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    Mock,
    Ec2,
    Gogrid,
    Opennebula,
    Rackspace,
    Rhevm,
    #[default]
    Unknown,
}

impl Driver {
    /// The lowercase wire name of this driver.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Ec2 => "ec2",
            Self::Gogrid => "gogrid",
            Self::Opennebula => "opennebula",
            Self::Rackspace => "rackspace",
            Self::Rhevm => "rhevm",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for Driver {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "mock" => Self::Mock,
            "ec2" => Self::Ec2,
            "gogrid" => Self::Gogrid,
            "opennebula" => Self::Opennebula,
            "rackspace" => Self::Rackspace,
            "rhevm" => Self::Rhevm,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level server descriptor from `GET {base}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Api {
    /// Backend driver the server fronts.
    pub driver: Driver,
    /// Deltacloud API version string, e.g. `"0.3.0"`.
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_parses_known_names_case_insensitively() {
        assert_eq!(Driver::from("ec2"), Driver::Ec2);
        assert_eq!(Driver::from("EC2"), Driver::Ec2);
        assert_eq!(Driver::from("Mock"), Driver::Mock);
        assert_eq!(Driver::from("rhevm"), Driver::Rhevm);
    }

    #[test]
    fn driver_falls_back_to_unknown() {
        assert_eq!(Driver::from("vsphere"), Driver::Unknown);
        assert_eq!(Driver::from(""), Driver::Unknown);
        assert_eq!(Driver::default(), Driver::Unknown);
    }

    #[test]
    fn driver_displays_wire_name() {
        assert_eq!(Driver::Opennebula.to_string(), "opennebula");
    }
}
