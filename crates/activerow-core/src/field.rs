//! Field descriptor definitions.
//!
//! A record type declares its persisted columns as a `static` table of
//! [`FieldDef`]s, built once at type-definition time. That table is the
//! single source of column names, declaration order, and defaults for
//! everything the crate does: generated SQL, construction, rehydration.

use crate::value::Value;

/// A declared default for a field, in const-constructible form.
///
/// `Value` itself cannot appear in `static` descriptor tables because its
/// `Text` variant owns a `String`; this mirror holds only const-friendly
/// scalars and converts on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// SQL NULL
    Null,
    /// Boolean default
    Bool(bool),
    /// Integer default
    Int(i64),
    /// Floating point default
    Double(f64),
    /// Text default
    Text(&'static str),
}

impl DefaultValue {
    /// Materialize this default as a bindable `Value`.
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Null => Value::Null,
            DefaultValue::Bool(v) => Value::Bool(v),
            DefaultValue::Int(v) => Value::Int(v),
            DefaultValue::Double(v) => Value::Double(v),
            DefaultValue::Text(s) => Value::Text(s.to_string()),
        }
    }
}

/// Metadata about a declared record field.
///
/// The name is bound once at declaration and is immutable thereafter. A
/// field is distinguishable from ordinary struct members by its presence in
/// the type's descriptor table, not by naming convention.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Field name, also the database column name
    pub name: &'static str,
    /// Declared default, if any
    pub default: Option<DefaultValue>,
}

impl FieldDef {
    /// Create a field descriptor with no default.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    /// Set the declared default value.
    pub const fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// The value a freshly constructed instance gets for this field when
    /// the caller supplies none: the declared default, else the NULL
    /// sentinel.
    pub fn initial_value(&self) -> Value {
        match self.default {
            Some(default) => default.to_value(),
            None => Value::Null,
        }
    }
}
