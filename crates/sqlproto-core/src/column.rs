//! Column descriptors as read from INFORMATION_SCHEMA.COLUMNS

use serde::{Deserialize, Serialize};

/// Nullability state of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nullability {
    /// Definitely nullable
    Yes,

    /// Definitely not nullable
    No,

    /// Cannot determine nullability
    Unknown,
}

impl Nullability {
    /// Parse the catalog's `IS_NULLABLE` column ("YES"/"NO")
    pub fn from_catalog(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "YES" => Self::Yes,
            "NO" => Self::No,
            _ => Self::Unknown,
        }
    }
}

/// One row of the catalog's column projection
///
/// Mirrors `SELECT TABLE_NAME, COLUMN_NAME, IS_NULLABLE, DATA_TYPE,
/// CHARACTER_MAXIMUM_LENGTH, NUMERIC_PRECISION, NUMERIC_SCALE, COLUMN_TYPE`.
/// Read-only input to the translation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Owning table name
    pub table_name: String,

    /// Column name
    pub column_name: String,

    /// Whether the column accepts NULL
    pub nullable: Nullability,

    /// Native data type name (e.g. `varchar`, `enum`, `timestamp`)
    pub data_type: String,

    /// Character length limit, if any
    pub character_maximum_length: Option<u64>,

    /// Numeric precision, if any
    pub numeric_precision: Option<u64>,

    /// Numeric scale, if any
    pub numeric_scale: Option<u64>,

    /// Full native type string (e.g. `enum('active','banned')`);
    /// needed to parse enumerated value lists
    pub column_type: String,
}

impl ColumnDescriptor {
    /// Create a descriptor with just the fields most tests and callers need;
    /// `column_type` defaults to the bare data type name.
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        let data_type = data_type.into();
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            nullable: Nullability::Unknown,
            data_type: data_type.clone(),
            character_maximum_length: None,
            numeric_precision: None,
            numeric_scale: None,
            column_type: data_type,
        }
    }

    /// Set the full native type string
    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = column_type.into();
        self
    }

    /// Set nullability
    pub fn with_nullability(mut self, nullable: Nullability) -> Self {
        self.nullable = nullable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullability_from_catalog() {
        assert_eq!(Nullability::from_catalog("YES"), Nullability::Yes);
        assert_eq!(Nullability::from_catalog("no"), Nullability::No);
        assert_eq!(Nullability::from_catalog(""), Nullability::Unknown);
    }

    #[test]
    fn descriptor_defaults() {
        let col = ColumnDescriptor::new("users", "status", "enum")
            .with_column_type("enum('active','banned')")
            .with_nullability(Nullability::No);

        assert_eq!(col.data_type, "enum");
        assert_eq!(col.column_type, "enum('active','banned')");
        assert_eq!(col.nullable, Nullability::No);
        assert_eq!(col.character_maximum_length, None);
    }
}
