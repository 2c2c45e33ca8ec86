use serde::{Deserialize, Serialize};

/// A hardware sizing offered by the backend (memory, storage, CPU, arch).
///
/// Profiles are bags of named properties rather than fixed fields because
/// drivers disagree about which dimensions they expose and whether a
/// dimension is a fixed value, a range, or an enumerated set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl HardwareProfile {
    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name.as_deref() == Some(name))
    }

    pub fn memory(&self) -> Option<&Property> {
        self.property("memory")
    }

    pub fn storage(&self) -> Option<&Property> {
        self.property("storage")
    }

    pub fn cpu(&self) -> Option<&Property> {
        self.property("cpu")
    }

    pub fn architecture(&self) -> Option<&Property> {
        self.property("architecture")
    }
}

/// One dimension of a hardware profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Property {
    pub name: Option<String>,
    /// `fixed`, `range`, or `enum`.
    pub kind: Option<String>,
    /// Unit for numeric properties, e.g. `MB` or `GB`.
    pub unit: Option<String>,
    /// Default (or only) value for this dimension.
    pub value: Option<String>,
    /// Bounds when `kind` is `range`.
    pub range: Option<PropertyRange>,
    /// Allowed values when `kind` is `enum`.
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Inclusive bounds of a `range` property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyRange {
    pub first: Option<String>,
    pub last: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn named_lookups_find_properties() {
        let profile = HardwareProfile {
            id: Some("m1-small".into()),
            properties: vec![
                Property {
                    name: Some("memory".into()),
                    kind: Some("fixed".into()),
                    unit: Some("MB".into()),
                    value: Some("1740".into()),
                    ..Property::default()
                },
                Property {
                    name: Some("architecture".into()),
                    kind: Some("fixed".into()),
                    value: Some("i386".into()),
                    ..Property::default()
                },
            ],
        };

        assert_eq!(profile.memory().unwrap().value.as_deref(), Some("1740"));
        assert_eq!(
            profile.architecture().unwrap().value.as_deref(),
            Some("i386")
        );
        assert!(profile.storage().is_none());
        assert!(profile.property("iops").is_none());
    }
}
