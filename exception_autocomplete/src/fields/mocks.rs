//! Stub index-pattern field list shared by unit tests

use super::{parse_field_list, FieldDescriptor};

const STUB_FIELDS: &str = r#"[
    {
        "name": "bytes",
        "type": "number",
        "esTypes": ["long"],
        "count": 10,
        "scripted": false,
        "searchable": true,
        "aggregatable": true,
        "readFromDocValues": true
    },
    {
        "name": "ssl",
        "type": "boolean",
        "esTypes": ["boolean"],
        "count": 20,
        "scripted": false,
        "searchable": true,
        "aggregatable": true,
        "readFromDocValues": true
    },
    {
        "name": "@timestamp",
        "type": "date",
        "esTypes": ["date"],
        "count": 30,
        "scripted": false,
        "searchable": true,
        "aggregatable": true,
        "readFromDocValues": true
    },
    {
        "name": "machine.os",
        "type": "string",
        "esTypes": ["text"],
        "count": 0,
        "scripted": false,
        "searchable": true,
        "aggregatable": false,
        "readFromDocValues": false
    },
    {
        "name": "machine.os.raw",
        "type": "string",
        "esTypes": ["keyword"],
        "count": 0,
        "scripted": false,
        "searchable": true,
        "aggregatable": true,
        "readFromDocValues": true,
        "subType": { "multi": { "parent": "machine.os" } }
    },
    {
        "name": "ip",
        "type": "ip",
        "esTypes": ["ip"],
        "count": 0,
        "scripted": false,
        "searchable": true,
        "aggregatable": true,
        "readFromDocValues": true
    },
    {
        "name": "nestedField.child",
        "type": "string",
        "esTypes": ["text"],
        "count": 0,
        "scripted": false,
        "searchable": true,
        "aggregatable": false,
        "readFromDocValues": false,
        "subType": { "nested": { "path": "nestedField" } }
    }
]"#;

pub(crate) fn stub_fields() -> Vec<FieldDescriptor> {
    parse_field_list(STUB_FIELDS).expect("stub field list is valid JSON")
}

/// Look up a stub field by name
pub(crate) fn get_field(name: &str) -> FieldDescriptor {
    stub_fields()
        .into_iter()
        .find(|field| field.name == name)
        .unwrap_or_else(|| panic!("no stub field named {}", name))
}
