//! Typed field names and the accumulated value mapping for the wizard. The
//! field set is closed; anything outside it is rejected at the parsing
//! boundary rather than carried along as an untyped bag.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The closed set of fields the form collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldName {
    Username,
    Email,
    Password,
}

impl FieldName {
    /// Wire name, used both as the JSON key and as the input element name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error for strings outside the closed field-name set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFieldName(String);

impl fmt::Display for UnknownFieldName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownFieldName {}

impl FromStr for FieldName {
    type Err = UnknownFieldName;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(UnknownFieldName(other.to_string())),
        }
    }
}

/// One submitted field from the active step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: FieldName,
    pub value: String,
}

/// Field values accumulated across accepted steps. Keys keep their first-
/// insertion order so the submission body lists fields in collection order.
/// Created empty when the wizard mounts and discarded with the component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<(FieldName, String)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one submitted field: an existing key is overwritten in place, a
    /// new key is appended, and every other key is preserved untouched.
    pub fn merge(&mut self, entry: FieldEntry) {
        match self
            .entries
            .iter_mut()
            .find(|(name, _)| *name == entry.name)
        {
            Some((_, value)) => *value = entry.value,
            None => self.entries.push((entry.name, entry.value)),
        }
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: FieldName, value: &str) -> FieldEntry {
        FieldEntry {
            name,
            value: value.to_string(),
        }
    }

    #[test]
    fn field_names_round_trip_through_their_wire_names() {
        for name in [FieldName::Username, FieldName::Email, FieldName::Password] {
            assert_eq!(name.as_str().parse::<FieldName>(), Ok(name));
        }
    }

    #[test]
    fn strings_outside_the_closed_set_are_rejected() {
        assert!("_token".parse::<FieldName>().is_err());
        assert!("".parse::<FieldName>().is_err());
        assert!("Username".parse::<FieldName>().is_err());
    }

    #[test]
    fn merge_preserves_previously_collected_keys() {
        let mut values = FieldValues::new();
        values.merge(entry(FieldName::Username, "jsmith"));
        values.merge(entry(FieldName::Email, "jsmith@example.com"));

        assert_eq!(values.get(FieldName::Username), Some("jsmith"));
        assert_eq!(values.get(FieldName::Email), Some("jsmith@example.com"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn merge_overwrites_an_existing_key_in_place() {
        let mut values = FieldValues::new();
        values.merge(entry(FieldName::Username, "jsmith"));
        values.merge(entry(FieldName::Email, "jsmith@example.com"));
        values.merge(entry(FieldName::Username, "jdoe"));

        assert_eq!(values.get(FieldName::Username), Some("jdoe"));
        assert_eq!(values.len(), 2);
        // Overwriting does not move the key to the back.
        let json = serde_json::to_string(&values).expect("serializes");
        assert_eq!(json, r#"{"username":"jdoe","email":"jsmith@example.com"}"#);
    }

    #[test]
    fn a_new_wizard_starts_with_no_values() {
        let values = FieldValues::new();
        assert!(values.is_empty());
        assert_eq!(values.get(FieldName::Password), None);
    }

    #[test]
    fn serializes_accumulated_keys_in_collection_order() {
        let mut values = FieldValues::new();
        values.merge(entry(FieldName::Username, "jsmith"));
        values.merge(entry(FieldName::Email, "jsmith@example.com"));
        values.merge(entry(FieldName::Password, "secret"));

        let json = serde_json::to_string(&values).expect("serializes");
        assert_eq!(
            json,
            r#"{"username":"jsmith","email":"jsmith@example.com","password":"secret"}"#
        );
    }
}
