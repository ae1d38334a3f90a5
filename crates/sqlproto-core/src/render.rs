//! Textual serialization of the schema model
//!
//! Output layout: syntax line, package line, import block, message blocks,
//! enum blocks, each section separated by a blank line and the document
//! ending in one. The renderer assumes a well-formed model (names are
//! pre-sanitized, tags already validated) and does not re-check invariants.

use crate::schema::{Enum, Message, Schema};

/// Serialize a schema to `.proto` text. Deterministic: identical models
/// produce byte-identical output.
pub fn render(schema: &Schema) -> String {
    let mut out = String::new();

    out.push_str(&format!("syntax = \"{}\";\n\n", schema.syntax));
    out.push_str(&format!("package {};\n\n", schema.package));

    if !schema.imports.is_empty() {
        for path in &schema.imports {
            out.push_str(&format!("import \"{}\";\n", path));
        }
        out.push('\n');
    }

    for message in &schema.messages {
        render_message(&mut out, message);
        out.push('\n');
    }

    for en in &schema.enums {
        render_enum(&mut out, en);
        out.push('\n');
    }

    out
}

fn render_message(out: &mut String, message: &Message) {
    out.push_str(&format!("message {} {{\n", message.name));
    for field in &message.fields {
        out.push_str(&format!("  {};\n", field));
    }
    out.push_str("}\n");
}

fn render_enum(out: &mut String, en: &Enum) {
    out.push_str(&format!("enum {} {{\n", en.name));
    for value in &en.values {
        out.push_str(&format!("  {};\n", value));
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EnumValue, Field};
    use pretty_assertions::assert_eq;

    fn sample_schema() -> Schema {
        let mut schema = Schema::new("app");
        schema.add_import("google/protobuf/timestamp.proto");

        let mut user = Message::new("User");
        user.add_field(Field::new("int32", "id", 1)).unwrap();
        user.add_field(Field::new("UserStatus", "status", 2)).unwrap();
        user.add_field(Field::new("google.protobuf.Timestamp", "created_at", 3))
            .unwrap();
        schema.messages.push(user);

        let mut status = Enum::new("UserStatus");
        status.add_value(EnumValue::new("ACTIVE", 1)).unwrap();
        status.add_value(EnumValue::new("BANNED", 2)).unwrap();
        schema.enums.push(status);

        schema
    }

    #[test]
    fn renders_expected_document() {
        let expected = "\
syntax = \"proto3\";

package app;

import \"google/protobuf/timestamp.proto\";

message User {
  int32 id = 1;
  UserStatus status = 2;
  google.protobuf.Timestamp created_at = 3;
}

enum UserStatus {
  ACTIVE = 1;
  BANNED = 2;
}
";
        assert_eq!(render(&sample_schema()), expected);
    }

    #[test]
    fn render_is_deterministic() {
        let schema = sample_schema();
        assert_eq!(render(&schema), render(&schema));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let schema = Schema::new("bare");
        assert_eq!(render(&schema), "syntax = \"proto3\";\n\npackage bare;\n\n");
    }
}
