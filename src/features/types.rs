//! Feature records displayed by the table.

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

/// Opaque attribute record returned by a feature loader.
///
/// The attribute shape is owned entirely by the loader that produced the
/// record; the table stores and exposes it without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Feature {
    /// Attribute name to value, as decoded from the loader's payload.
    attributes: Map<String, Value>,
}

impl Feature {
    /// Wraps a decoded attribute map.
    #[must_use]
    pub const fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Returns the value of a named attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns all attributes of the record.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Names of the record's attributes.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Feature {
    fn from(attributes: Map<String, Value>) -> Self {
        Self::new(attributes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn test_feature_decodes_from_attribute_object() {
        let feature: Feature =
            serde_json::from_value(json!({"id": 1, "name": "Pianosa"})).unwrap();

        expect_that!(feature.attribute("id"), some(eq(&json!(1))));
        expect_that!(feature.attribute("name"), some(eq(&json!("Pianosa"))));
        expect_that!(feature.attribute("missing"), none());
    }

    #[googletest::test]
    fn test_feature_rejects_non_object_payload() {
        let result: Result<Feature, _> = serde_json::from_value(json!([1, 2, 3]));

        expect_that!(result, err(anything()));
    }

    #[googletest::test]
    fn test_attribute_names_lists_all_keys() {
        let feature: Feature =
            serde_json::from_value(json!({"id": 1, "name": "Pianosa"})).unwrap();

        let names: Vec<&str> = feature.attribute_names().collect();

        expect_that!(names, unordered_elements_are![eq(&"id"), eq(&"name")]);
    }
}
