//! Core types and traits for activerow.
//!
//! This crate provides the foundational abstractions for the active-record
//! mapping layer:
//!
//! - `Record` trait for struct-to-table mapping, with `RecordHooks`
//! - `FieldDef` descriptors for declared columns
//! - `Connection` trait: the boundary with the SQL execution engine
//! - `Row`/`Value` for dynamically-typed results and parameters
//! - `Errors` bag for field-level validation errors

pub mod connection;
pub mod error;
pub mod errors;
pub mod field;
pub mod record;
pub mod row;
pub mod value;

pub use connection::{Connection, ConnectionConfig, ExecResult};
pub use error::{
    ConnectionError, ConnectionErrorKind, Error, MultipleRowsError, QueryError, QueryErrorKind,
    Result, TypeError,
};
pub use errors::Errors;
pub use field::{DefaultValue, FieldDef};
pub use record::{Record, RecordHooks};
pub use row::{ColumnInfo, FromValue, Row};
pub use value::Value;
