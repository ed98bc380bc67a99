//! Record trait for active-record struct mapping.
//!
//! A record type is a plain struct plus an implementation of [`Record`]:
//! table metadata consts, a `static` descriptor table, and the conversions
//! between the struct and a database row. Query code stays generic and
//! builds instances of the calling type through [`Record::from_row`], so
//! a fetch on a concrete type always yields that type.

use crate::Result;
use crate::field::FieldDef;
use crate::row::Row;
use crate::value::Value;

/// Trait for types that map to a database table.
///
/// # Example
///
/// ```ignore
/// use activerow_core::{FieldDef, Record, Row, Value};
///
/// struct User {
///     id: Option<i64>,
///     name: String,
///     email: String,
/// }
///
/// impl Record for User {
///     const TABLE_NAME: &'static str = "user";
///
///     fn fields() -> &'static [FieldDef] {
///         static FIELDS: &[FieldDef] = &[FieldDef::new("name"), FieldDef::new("email")];
///         FIELDS
///     }
///     // ...
/// }
/// ```
pub trait Record: Sized + Send + Sync {
    /// The name of the database table. By convention the lower-cased type
    /// name.
    const TABLE_NAME: &'static str;

    /// The primary key column name.
    const PRIMARY_KEY: &'static str = "id";

    /// The descriptor table for this type's declared fields, in declaration
    /// order. Built once; identical for every instance of the type.
    fn fields() -> &'static [FieldDef];

    /// Convert this instance to (column, value) pairs, one per declared
    /// field, in declaration order. The primary key is not included.
    fn to_row(&self) -> Vec<(&'static str, Value)>;

    /// Construct an instance from a database row.
    ///
    /// The row is authoritative: the primary-key column and every declared
    /// field present in the row are assigned directly, bypassing defaults.
    fn from_row(row: &Row) -> Result<Self>;

    /// Get the primary key value, `None` until the first successful save.
    fn primary_key(&self) -> Option<i64>;

    /// Set the primary key after the backend assigns it on insert.
    fn set_primary_key(&mut self, id: i64);

    /// The declared field names, in declaration order.
    ///
    /// Contains exactly the names in the descriptor table; methods, hooks,
    /// and undeclared struct members never appear.
    fn properties() -> Vec<&'static str> {
        Self::fields().iter().map(|f| f.name).collect()
    }

    /// Check if this instance has never been saved.
    fn is_new(&self) -> bool {
        self.primary_key().is_none()
    }

    /// Construct an instance from named values, applying declared defaults.
    ///
    /// For each declared field: the supplied value if present, else the
    /// descriptor's default, else NULL. Names that match no declared field
    /// are ignored. The primary key starts unset. No database access.
    fn from_values(values: &[(&str, Value)]) -> Result<Self> {
        let fields = Self::fields();
        let mut names = Vec::with_capacity(fields.len() + 1);
        let mut row_values = Vec::with_capacity(fields.len() + 1);

        names.push(Self::PRIMARY_KEY.to_string());
        row_values.push(Value::Null);

        for field in fields {
            let supplied = values
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, value)| value.clone());
            names.push(field.name.to_string());
            row_values.push(supplied.unwrap_or_else(|| field.initial_value()));
        }

        Self::from_row(&Row::new(names, row_values))
    }
}

/// Lifecycle hooks invoked by `save`.
///
/// Both hooks default to no-ops; record types override the ones they care
/// about. `on_create` runs exactly once per instance, synchronously after a
/// successful insert and before `save` returns; `on_update` runs after every
/// subsequent successful update.
pub trait RecordHooks: Record {
    /// Called after the first successful save of an instance.
    fn on_create(&mut self) {}

    /// Called after every successful save other than the first.
    fn on_update(&mut self) {}
}
