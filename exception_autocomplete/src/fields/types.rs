//! Field descriptor types
//!
//! A `FieldDescriptor` mirrors one entry of an index-pattern field list. The
//! declared `type` is modelled as a closed enum with an `Other` arm so that
//! unrecognized types still round-trip and fall through to the generic paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared (Kibana-level) type of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Number,
    Date,
    Boolean,
    Ip,
    GeoPoint,
    GeoShape,
    Attachment,
    Murmur3,
    Histogram,
    Conflict,
    Object,
    Nested,
    Unknown,
    /// Any declared type this crate has no dedicated handling for
    Other(std::string::String),
}

impl FieldType {
    /// Parse field type from string (exact match, case-sensitive)
    pub fn parse(s: &str) -> Self {
        match s {
            "string" => Self::String,
            "number" => Self::Number,
            "date" => Self::Date,
            "boolean" => Self::Boolean,
            "ip" => Self::Ip,
            "geo_point" => Self::GeoPoint,
            "geo_shape" => Self::GeoShape,
            "attachment" => Self::Attachment,
            "murmur3" => Self::Murmur3,
            "histogram" => Self::Histogram,
            "conflict" => Self::Conflict,
            "object" => Self::Object,
            "nested" => Self::Nested,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Ip => "ip",
            Self::GeoPoint => "geo_point",
            Self::GeoShape => "geo_shape",
            Self::Attachment => "attachment",
            Self::Murmur3 => "murmur3",
            Self::Histogram => "histogram",
            Self::Conflict => "conflict",
            Self::Object => "object",
            Self::Nested => "nested",
            Self::Unknown => "unknown",
            Self::Other(other) => other,
        }
    }
}

impl From<std::string::String> for FieldType {
    fn from(value: std::string::String) -> Self {
        Self::parse(&value)
    }
}

impl From<FieldType> for std::string::String {
    fn from(value: FieldType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested field information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedSubType {
    pub path: String,
}

/// Multi-field information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSubType {
    pub parent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSubType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<NestedSubType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi: Option<MultiSubType>,
}

/// Field metadata supplied by the field-metadata collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Underlying storage types, in mapping order
    #[serde(default)]
    pub es_types: Vec<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub scripted: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub aggregatable: bool,
    #[serde(default)]
    pub read_from_doc_values: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<FieldSubType>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            es_types: Vec::new(),
            count: 0,
            scripted: false,
            searchable: true,
            aggregatable: true,
            read_from_doc_values: true,
            sub_type: None,
        }
    }

    pub fn with_es_types<I, S>(mut self, es_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.es_types = es_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sub_type(mut self, sub_type: FieldSubType) -> Self {
        self.sub_type = Some(sub_type);
        self
    }

    /// Declared boolean, or backed by a boolean storage type
    pub fn is_boolean(&self) -> bool {
        self.field_type == FieldType::Boolean || self.has_es_type("boolean")
    }

    pub fn is_nested(&self) -> bool {
        self.field_type == FieldType::Nested
    }

    pub fn is_date(&self) -> bool {
        self.field_type == FieldType::Date
    }

    pub fn has_es_type(&self, es_type: &str) -> bool {
        self.es_types.iter().any(|t| t == es_type)
    }

    /// Path of the enclosing nested object, if any
    pub fn nested_path(&self) -> Option<&str> {
        self.sub_type
            .as_ref()
            .and_then(|sub| sub.nested.as_ref())
            .map(|nested| nested.path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_round_trip() {
        for name in ["string", "number", "date", "boolean", "nested", "geo_point"] {
            assert_eq!(FieldType::parse(name).as_str(), name);
        }
        assert_eq!(
            FieldType::parse("date_range"),
            FieldType::Other("date_range".to_string())
        );
        assert_eq!(FieldType::parse("Boolean"), FieldType::Other("Boolean".to_string()));
    }

    #[test]
    fn test_boolean_detection() {
        let declared = FieldDescriptor::new("ssl", FieldType::Boolean);
        assert!(declared.is_boolean());

        let storage_only =
            FieldDescriptor::new("flag", FieldType::Conflict).with_es_types(["keyword", "boolean"]);
        assert!(storage_only.is_boolean());

        let keyword = FieldDescriptor::new("host", FieldType::String).with_es_types(["keyword"]);
        assert!(!keyword.is_boolean());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "name": "parent.child",
            "type": "string",
            "esTypes": ["keyword"],
            "count": 2,
            "scripted": false,
            "searchable": true,
            "aggregatable": true,
            "readFromDocValues": true,
            "subType": { "nested": { "path": "parent" } }
        }"#;

        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.field_type, FieldType::String);
        assert_eq!(field.es_types, vec!["keyword".to_string()]);
        assert!(field.read_from_doc_values);
        assert_eq!(field.nested_path(), Some("parent"));
    }

    #[test]
    fn test_serialize_keeps_unknown_type() {
        let field = FieldDescriptor::new("shape", FieldType::parse("shape"));
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "shape");
        assert!(json.get("subType").is_none());
    }
}
