//! Native column type to proto field type mapping
//!
//! The mapping is an exhaustive match on the lowercased native type name.
//! Anything outside the table fails with
//! [`TranslateError::UnsupportedType`] rather than producing a silently
//! empty type: a schema where any column fails to typecheck is unusable.

use crate::column::ColumnDescriptor;
use crate::error::TranslateError;
use crate::naming;
use crate::schema::{Enum, EnumValue};
use regex::Regex;
use std::sync::LazyLock;

/// Well-known import registered for date/time columns
pub const TIMESTAMP_IMPORT: &str = "google/protobuf/timestamp.proto";

/// First parenthesized group of an `enum(...)`/`set(...)` type string
static VALUE_LIST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.+?)\)").unwrap());

/// Result of mapping one column: the resolved field type plus any side
/// effects the caller must apply to the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// Proto type name to use for the field
    pub type_name: String,

    /// Enum synthesized from the column's value list, if any
    pub new_enum: Option<Enum>,

    /// Import path the schema must carry, if any
    pub import: Option<&'static str>,
}

impl MappedType {
    fn plain(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            new_enum: None,
            import: None,
        }
    }
}

/// Map a column descriptor to a proto field type.
///
/// Matching is case-insensitive on the native type name. `enum` and `set`
/// columns synthesize a new [`Enum`] named after table and column;
/// date/time columns resolve to `google.protobuf.Timestamp` and request
/// the well-known import.
pub fn map_column(col: &ColumnDescriptor) -> Result<MappedType, TranslateError> {
    let mapped = match col.data_type.to_lowercase().as_str() {
        "char" | "varchar" | "text" | "tinytext" | "mediumtext" | "longtext" => {
            MappedType::plain("string")
        }
        "enum" | "set" => {
            let en = synthesize_enum(col)?;
            MappedType {
                type_name: en.name.clone(),
                new_enum: Some(en),
                import: None,
            }
        }
        "binary" | "varbinary" | "blob" | "mediumblob" | "longblob" => MappedType::plain("bytes"),
        "date" | "time" | "datetime" | "timestamp" => MappedType {
            type_name: "google.protobuf.Timestamp".to_string(),
            new_enum: None,
            import: Some(TIMESTAMP_IMPORT),
        },
        "tinyint" | "bool" => MappedType::plain("bool"),
        "smallint" | "int" | "mediumint" | "bigint" => MappedType::plain("int32"),
        "float" | "double" | "decimal" => MappedType::plain("float"),
        _ => {
            return Err(TranslateError::UnsupportedType {
                data_type: col.data_type.clone(),
                table: col.table_name.clone(),
                column: col.column_name.clone(),
            })
        }
    };

    Ok(mapped)
}

/// Build an enum from the column's quoted literal list.
///
/// The full type string is expected to look like `enum('a','b')`; the
/// parenthesized group is split on commas and quote characters, empty
/// tokens discarded, and tags assigned 1-based in list order.
fn synthesize_enum(col: &ColumnDescriptor) -> Result<Enum, TranslateError> {
    let captures = VALUE_LIST.captures(&col.column_type).ok_or_else(|| {
        TranslateError::InvalidEnumDefinition {
            column_type: col.column_type.clone(),
            table: col.table_name.clone(),
            column: col.column_name.clone(),
        }
    })?;

    let mut en = Enum::new(naming::enum_name(&col.table_name, &col.column_name));

    let literals = captures[1]
        .split(|c| c == ',' || c == '\'')
        .filter(|token| !token.is_empty());

    for (i, literal) in literals.enumerate() {
        en.add_value(EnumValue::new(naming::enum_value_name(literal), i as u32 + 1))?;
    }

    Ok(en)
}
