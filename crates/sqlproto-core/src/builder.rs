//! Schema construction from an ordered column sequence
//!
//! Columns must arrive in catalog order (table-major, then ordinal
//! position); the builder never re-sorts. Grouping state is local to one
//! `build_schema` call, so a run holds no state beyond the returned schema.

use crate::column::ColumnDescriptor;
use crate::error::TranslateError;
use crate::naming;
use crate::schema::{Field, Message, Schema};
use crate::type_map;
use std::collections::HashMap;

/// Translate a column sequence into a schema for the given package.
///
/// Each column is appended to its table's message (created on first sight,
/// kept in first-appearance order) with the next sequential tag. Enum and
/// import side effects from the type mapper are applied to the schema as
/// they occur. The first error aborts the whole translation; no partial
/// schema is returned.
pub fn build_schema(
    package: impl Into<String>,
    columns: &[ColumnDescriptor],
) -> Result<Schema, TranslateError> {
    let mut schema = Schema::new(package);
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for col in columns {
        let message_name = naming::message_name(&col.table_name);
        let idx = *by_name.entry(message_name.clone()).or_insert_with(|| {
            schema.messages.push(Message::new(message_name));
            schema.messages.len() - 1
        });

        let mapped = type_map::map_column(col)?;
        if let Some(en) = mapped.new_enum {
            schema.enums.push(en);
        }
        if let Some(path) = mapped.import {
            schema.add_import(path);
        }

        let message = &mut schema.messages[idx];
        let tag = message.fields.len() as u32 + 1;
        message.add_field(Field::new(mapped.type_name, col.column_name.clone(), tag))?;
    }

    Ok(schema)
}
