//! activerow - a minimal synchronous active-record mapping layer.
//!
//! Applications declare record types with an explicit field-descriptor
//! table, then create, fetch, update, and query rows through those types
//! instead of assembling SQL by hand for every operation. The SQL execution
//! engine stays external behind the [`Connection`] trait; one shared handle
//! is registered once at startup in a [`Registry`] and injected into every
//! operation.
//!
//! # Quick Start
//!
//! ```ignore
//! use activerow::prelude::*;
//!
//! struct User {
//!     id: Option<i64>,
//!     name: String,
//!     email: String,
//! }
//!
//! impl Record for User {
//!     const TABLE_NAME: &'static str = "user";
//!
//!     fn fields() -> &'static [FieldDef] {
//!         static FIELDS: &[FieldDef] = &[FieldDef::new("name"), FieldDef::new("email")];
//!         FIELDS
//!     }
//!
//!     fn to_row(&self) -> Vec<(&'static str, Value)> {
//!         vec![
//!             ("name", Value::from(self.name.clone())),
//!             ("email", Value::from(self.email.clone())),
//!         ]
//!     }
//!
//!     fn from_row(row: &Row) -> Result<Self> {
//!         Ok(Self {
//!             id: row.opt_named("id")?,
//!             name: row.opt_named("name")?.unwrap_or_default(),
//!             email: row.opt_named("email")?.unwrap_or_default(),
//!         })
//!     }
//!
//!     fn primary_key(&self) -> Option<i64> {
//!         self.id
//!     }
//!
//!     fn set_primary_key(&mut self, id: i64) {
//!         self.id = Some(id);
//!     }
//! }
//!
//! impl RecordHooks for User {}
//!
//! fn example(db: &Registry) -> Result<()> {
//!     let mut user = User {
//!         id: None,
//!         name: "ivan".to_string(),
//!         email: "myemail@email.com".to_string(),
//!     };
//!     user.save(db)?;
//!
//!     let found = User::get(db, "\"email\" = $1", &[Value::from("myemail@email.com")])?;
//!     let all_ivans = User::where_(db, "\"name\" = $1", &[Value::from("ivan")])?;
//!     let count = User::where_count(db, "\"name\" = $1", &[Value::from("ivan")])?;
//!     Ok(())
//! }
//! ```

// Re-export all public types from the core crate
pub use activerow_core::{
    Connection, ConnectionConfig, ConnectionError, ConnectionErrorKind, DefaultValue, Error,
    Errors, ExecResult, FieldDef, FromValue, MultipleRowsError, QueryError, QueryErrorKind,
    Record, RecordHooks, Result, Row, TypeError, Value,
};

pub mod ops;
pub mod registry;

pub use ops::ActiveRecord;
pub use registry::Registry;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::{
        ActiveRecord, Connection, ConnectionConfig, DefaultValue, Error, Errors, FieldDef,
        Record, RecordHooks, Registry, Result, Row, Value,
    };
}
