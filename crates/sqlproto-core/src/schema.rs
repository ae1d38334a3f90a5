//! In-memory proto3 schema model
//!
//! Built once per translation pass and immutable afterwards. The schema
//! exclusively owns its messages, enums, and import list; mutation goes
//! through the `add_*` methods, which enforce the tag-uniqueness and
//! import-deduplication invariants.

use crate::error::TranslateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntax version tag written into every generated document
pub const SYNTAX_PROTO3: &str = "proto3";

/// Root of the generated schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Syntax version (always [`SYNTAX_PROTO3`])
    pub syntax: String,

    /// Package name, taken from the source database schema name
    pub package: String,

    /// Distinct import paths in first-seen order
    pub imports: Vec<String>,

    /// Messages in first-appearance table order
    pub messages: Vec<Message>,

    /// Enums in column-discovery order
    pub enums: Vec<Enum>,
}

impl Schema {
    /// Create an empty proto3 schema for a package
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            syntax: SYNTAX_PROTO3.to_string(),
            package: package.into(),
            imports: Vec::new(),
            messages: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Record an import path; no-op if it is already present
    pub fn add_import(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.imports.iter().any(|existing| *existing == path) {
            self.imports.push(path);
        }
    }
}

/// A record type generated from one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Singularized camel-case table name
    pub name: String,

    /// Fields in column-discovery order
    pub fields: Vec<Field>,
}

impl Message {
    /// Create a message with no fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, rejecting tag collisions within this message
    pub fn add_field(&mut self, field: Field) -> Result<(), TranslateError> {
        if let Some(existing) = self.fields.iter().find(|f| f.tag == field.tag) {
            return Err(TranslateError::DuplicateTag {
                owner: self.name.clone(),
                existing: existing.name.clone(),
                tag: field.tag,
            });
        }
        self.fields.push(field);
        Ok(())
    }
}

/// A single message field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Resolved proto type name
    pub type_name: String,

    /// Field name (the column name, unchanged)
    pub name: String,

    /// Positive tag, unique within the owning message
    pub tag: u32,
}

impl Field {
    /// Create a field
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, tag: u32) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            tag,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {}", self.type_name, self.name, self.tag)
    }
}

/// An enumeration synthesized from a column's fixed value set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    /// Table+column derived name
    pub name: String,

    /// Values in declaration order
    pub values: Vec<EnumValue>,
}

impl Enum {
    /// Create an enum with no values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Append a value, rejecting tag collisions within this enum
    pub fn add_value(&mut self, value: EnumValue) -> Result<(), TranslateError> {
        if let Some(existing) = self.values.iter().find(|v| v.tag == value.tag) {
            return Err(TranslateError::DuplicateTag {
                owner: self.name.clone(),
                existing: existing.name.clone(),
                tag: value.tag,
            });
        }
        self.values.push(value);
        Ok(())
    }
}

/// A single enum value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Normalized uppercase name
    pub name: String,

    /// Positive tag, 1-based and sequential in declaration order
    pub tag: u32,
}

impl EnumValue {
    /// Create an enum value
    pub fn new(name: impl Into<String>, tag: u32) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_are_deduplicated_in_first_seen_order() {
        let mut schema = Schema::new("shop");
        schema.add_import("google/protobuf/timestamp.proto");
        schema.add_import("google/protobuf/duration.proto");
        schema.add_import("google/protobuf/timestamp.proto");

        assert_eq!(
            schema.imports,
            vec![
                "google/protobuf/timestamp.proto".to_string(),
                "google/protobuf/duration.proto".to_string(),
            ]
        );
    }

    #[test]
    fn message_rejects_duplicate_tags() {
        let mut msg = Message::new("User");
        msg.add_field(Field::new("int32", "id", 1)).unwrap();
        msg.add_field(Field::new("string", "name", 2)).unwrap();

        let err = msg.add_field(Field::new("string", "email", 2)).unwrap_err();
        assert_eq!(
            err,
            TranslateError::DuplicateTag {
                owner: "User".to_string(),
                existing: "name".to_string(),
                tag: 2,
            }
        );
        // The colliding field was not appended
        assert_eq!(msg.fields.len(), 2);
    }

    #[test]
    fn enum_rejects_duplicate_tags() {
        let mut en = Enum::new("UserStatus");
        en.add_value(EnumValue::new("ACTIVE", 1)).unwrap();

        let err = en.add_value(EnumValue::new("BANNED", 1)).unwrap_err();
        assert!(matches!(err, TranslateError::DuplicateTag { tag: 1, .. }));
        assert_eq!(en.values.len(), 1);
    }

    #[test]
    fn field_and_value_display() {
        assert_eq!(Field::new("int32", "id", 1).to_string(), "int32 id = 1");
        assert_eq!(EnumValue::new("ACTIVE", 1).to_string(), "ACTIVE = 1");
    }

    #[test]
    fn schema_serializes_to_json() {
        let mut schema = Schema::new("shop");
        let mut msg = Message::new("User");
        msg.add_field(Field::new("int32", "id", 1)).unwrap();
        schema.messages.push(msg);

        let json = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }
}
