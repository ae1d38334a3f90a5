//! Translation error types
//!
//! Every failure in the engine is surfaced through [`TranslateError`]; a
//! failed translation produces no partial schema.

use thiserror::Error;

/// Errors produced while translating catalog metadata into a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A column's native type has no mapping rule
    #[error("no compatible protobuf type for `{data_type}` (column `{table}`.`{column}`)")]
    UnsupportedType {
        data_type: String,
        table: String,
        column: String,
    },

    /// A field or enum value was added with a tag already taken in its owner
    #[error("tag `{tag}` in `{owner}` is already in use by `{existing}`")]
    DuplicateTag {
        owner: String,
        existing: String,
        tag: u32,
    },

    /// An `enum`/`set` column's full type string carried no parseable
    /// parenthesized value list
    #[error("cannot parse value list from `{column_type}` (column `{table}`.`{column}`)")]
    InvalidEnumDefinition {
        column_type: String,
        table: String,
        column: String,
    },
}
