//! sqlproto core
//!
//! Translation engine from relational catalog metadata to a proto3 schema
//! model. The pipeline is: a sequence of [`ColumnDescriptor`]s goes into
//! [`build_schema`], which groups columns into messages, maps native column
//! types to proto field types (synthesizing enums for `enum`/`set` columns),
//! and returns a [`Schema`] that [`render`] serializes to `.proto` text.
//!
//! This crate performs no I/O; catalog retrieval lives in `sqlproto-catalog`.

pub mod builder;
pub mod column;
pub mod error;
pub mod naming;
pub mod render;
pub mod schema;
pub mod type_map;

pub use builder::build_schema;
pub use column::{ColumnDescriptor, Nullability};
pub use error::TranslateError;
pub use render::render;
pub use schema::{Enum, EnumValue, Field, Message, Schema, SYNTAX_PROTO3};
pub use type_map::{map_column, MappedType, TIMESTAMP_IMPORT};
