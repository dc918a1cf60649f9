//! Component tree nodes (RFC 5545 §3.4-3.6).

use std::collections::BTreeMap;

use serde::Serialize;

use super::Property;

/// One slot of a component map.
///
/// A slot holds whatever the document put at that name: a bare property
/// value, a parameterized property, or child components. Sibling components
/// with the same name are collected into an ordered list, but a name that
/// occurs exactly once stays unwrapped; consumers that want a uniform view
/// should go through [`Entry::components`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// Bare property value.
    Value(String),
    /// Parameterized property.
    Property(Property),
    /// Single child component.
    Component(Component),
    /// Two or more same-named sibling components, in document order.
    Components(Vec<Component>),
}

impl Entry {
    /// Returns the bare property value, if that is what this entry holds.
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the parameterized property, if that is what this entry holds.
    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Self::Property(property) => Some(property),
            _ => None,
        }
    }

    /// Returns the single child component, if that is what this entry holds.
    ///
    /// A multi-occurrence [`Entry::Components`] list yields `None` here; use
    /// [`Entry::components`] for a shape-independent view.
    #[must_use]
    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Self::Component(component) => Some(component),
            _ => None,
        }
    }

    /// Returns the child components as a slice, regardless of whether the
    /// entry is a single component or a list. Property entries yield an
    /// empty slice.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        match self {
            Self::Component(component) => std::slice::from_ref(component),
            Self::Components(components) => components,
            Self::Value(_) | Self::Property(_) => &[],
        }
    }
}

/// A node in the parsed tree: a mapping from canonical name to [`Entry`].
///
/// The tree is fully owned and holds no back-references; the root component
/// returned by [`crate::parse`] contains the top-level components of the
/// document (typically one `VCalendar`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Component {
    entries: BTreeMap<String, Entry>,
}

impl Component {
    /// Creates an empty component.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this component has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry stored under the given canonical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Iterates over entries in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Stores a bare property value, replacing any existing entry.
    pub fn insert_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), Entry::Value(value.into()));
    }

    /// Stores a parameterized property under its own name, replacing any
    /// existing entry.
    pub fn insert_property(&mut self, property: Property) {
        self.entries
            .insert(property.name.clone(), Entry::Property(property));
    }

    /// Appends a child component under the given name.
    ///
    /// The first occurrence is stored bare; a second same-named sibling
    /// promotes the slot to an ordered list. A property previously stored at
    /// the name is replaced.
    pub fn push_component(&mut self, name: impl Into<String>, child: Component) {
        let name = name.into();
        match self.entries.remove(&name) {
            Some(Entry::Component(first)) => {
                self.entries
                    .insert(name, Entry::Components(vec![first, child]));
            }
            Some(Entry::Components(mut siblings)) => {
                siblings.push(child);
                self.entries.insert(name, Entry::Components(siblings));
            }
            _ => {
                self.entries.insert(name, Entry::Component(child));
            }
        }
    }

    /// Returns the bare property value stored under the given name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_value()
    }

    /// Returns the parameterized property stored under the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.get(name)?.as_property()
    }

    /// Returns the single child component stored under the given name.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.get(name)?.as_component()
    }

    /// Returns the child components stored under the given name, single or
    /// list, as a slice. Absent names yield an empty slice.
    #[must_use]
    pub fn components(&self, name: &str) -> &[Component] {
        match self.get(name) {
            Some(entry) => entry.components(),
            None => &[],
        }
    }

    /// Returns all `VCalendar` children.
    #[must_use]
    pub fn calendars(&self) -> &[Component] {
        self.components("VCalendar")
    }

    /// Returns all `VEvent` children.
    #[must_use]
    pub fn events(&self) -> &[Component] {
        self.components("VEvent")
    }

    /// Returns all `VTimeZone` children.
    #[must_use]
    pub fn timezones(&self) -> &[Component] {
        self.components("VTimeZone")
    }

    /// Returns all `valarm` children.
    #[must_use]
    pub fn alarms(&self) -> &[Component] {
        self.components("valarm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_component_stays_bare() {
        let mut root = Component::new();
        root.push_component("VEvent", Component::new());

        assert!(root.component("VEvent").is_some());
        assert_eq!(root.components("VEvent").len(), 1);
    }

    #[test]
    fn second_sibling_promotes_to_list() {
        let mut event = Component::new();
        let mut alarm1 = Component::new();
        alarm1.insert_value("action", "EMAIL");
        let mut alarm2 = Component::new();
        alarm2.insert_value("action", "DISPLAY");

        event.push_component("valarm", alarm1);
        event.push_component("valarm", alarm2);

        assert!(event.component("valarm").is_none());
        let alarms = event.alarms();
        assert_eq!(alarms.len(), 2);
        assert_eq!(alarms[0].value("action"), Some("EMAIL"));
        assert_eq!(alarms[1].value("action"), Some("DISPLAY"));
    }

    #[test]
    fn component_replaces_property_at_same_name() {
        let mut root = Component::new();
        root.insert_value("valarm", "bogus");
        root.push_component("valarm", Component::new());

        assert!(root.value("valarm").is_none());
        assert_eq!(root.components("valarm").len(), 1);
    }

    #[test]
    fn insert_value_overwrites() {
        let mut component = Component::new();
        component.insert_value("summary", "first");
        component.insert_value("summary", "second");

        assert_eq!(component.value("summary"), Some("second"));
        assert_eq!(component.len(), 1);
    }

    #[test]
    fn entry_components_view() {
        let entry = Entry::Value("2.0".to_string());
        assert!(entry.components().is_empty());
        assert_eq!(entry.as_value(), Some("2.0"));
    }
}
