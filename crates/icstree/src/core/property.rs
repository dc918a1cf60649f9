//! Parameterized property values (RFC 5545 §3.1, §3.2).

use std::collections::BTreeMap;

use serde::Serialize;

/// A property whose raw key carried `;`-separated parameters.
///
/// A bare property (no parameters) is stored in the tree as a plain string;
/// only a parameterized one is promoted to this record, which therefore has
/// to carry its own name. Parameter values are kept raw, exactly as they
/// appeared on the wire; no unescaping is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Property {
    /// Canonical base property name.
    pub name: String,
    /// Primary value, exactly as it appeared after the `:`.
    pub value: String,
    /// Canonical parameter name to raw parameter value.
    #[serde(flatten)]
    pub params: BTreeMap<String, String>,
}

impl Property {
    /// Creates a property with no parameters yet.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            params: BTreeMap::new(),
        }
    }

    /// Sets a parameter, replacing any existing parameter with the same name.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Returns the value of the parameter with the given canonical name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns whether this property has a parameter with the given name.
    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_params() {
        let mut prop = Property::new("dtstart", "20120630T060000");
        prop.set_param("tzid", "America/Los_Angeles");

        assert_eq!(prop.param("tzid"), Some("America/Los_Angeles"));
        assert!(prop.has_param("tzid"));
        assert!(!prop.has_param("value"));
    }

    #[test]
    fn set_param_replaces() {
        let mut prop = Property::new("attendee", "mailto:a@b.com");
        prop.set_param("role", "CHAIR");
        prop.set_param("role", "REQ-PARTICIPANT");

        assert_eq!(prop.param("role"), Some("REQ-PARTICIPANT"));
        assert_eq!(prop.params.len(), 1);
    }
}
