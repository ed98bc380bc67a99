//! Persistence and query operations for record types.
//!
//! `ActiveRecord` is implemented for every `Record + RecordHooks` type via a
//! blanket impl; record types get `save`, `get`, `where_`, `where_count`,
//! and `object_query` for free. All SQL is assembled here from the type's
//! descriptor table: double-quoted identifiers, `$N` placeholders, columns
//! in declaration order.

use std::sync::Arc;

use activerow_core::{
    Connection, Error, MultipleRowsError, QueryErrorKind, Record, RecordHooks, Result, Row, Value,
};

use crate::registry::Registry;

/// Create/read/update/query operations, available on every record type.
///
/// Statement failures from the backend propagate unchanged; there is no
/// partial-success state for `save` — either the statement executes and the
/// hook fires, or the call fails and the instance is untouched.
pub trait ActiveRecord: Record + RecordHooks {
    /// Persist this instance.
    ///
    /// Inserts when the primary key is unset, assigning the backend's
    /// insert-id and firing `on_create` exactly once for the instance.
    /// Updates the full row keyed by primary key otherwise, firing
    /// `on_update`. Repeated saves are idempotent full-row rewrites.
    fn save(&mut self, db: &Registry) -> Result<()> {
        match self.primary_key() {
            None => insert_record(self, db),
            Some(id) => update_record(self, db, id),
        }
    }

    /// Fetch the single row matching a WHERE fragment.
    ///
    /// Returns `Ok(None)` for zero matches. The caller asserts uniqueness:
    /// two or more matches fail with `Error::MultipleRows` rather than
    /// silently returning the first row.
    fn get(db: &Registry, condition: &str, params: &[Value]) -> Result<Option<Self>> {
        let conn = db.connection()?;
        let sql = select_sql(Self::TABLE_NAME, condition);
        tracing::debug!(sql = %sql, "executing get");
        let rows = conn.query(&sql, params)?;
        match rows.as_slice() {
            [] => Ok(None),
            [row] => Ok(Some(Self::from_row(row)?)),
            rows => Err(Error::MultipleRows(MultipleRowsError {
                table: Self::TABLE_NAME.to_string(),
                condition: condition.to_string(),
                count: rows.len(),
            })),
        }
    }

    /// Fetch every row matching a WHERE fragment, in backend order.
    ///
    /// Returns an empty vec, never an error, for zero matches.
    fn where_(db: &Registry, condition: &str, params: &[Value]) -> Result<Vec<Self>> {
        let conn = db.connection()?;
        let sql = select_sql(Self::TABLE_NAME, condition);
        tracing::debug!(sql = %sql, "executing where");
        let rows = conn.query(&sql, params)?;
        hydrate(&rows)
    }

    /// Count the rows matching a WHERE fragment without materializing them.
    fn where_count(db: &Registry, condition: &str, params: &[Value]) -> Result<u64> {
        let conn = db.connection()?;
        let sql = count_sql(Self::TABLE_NAME, condition);
        tracing::debug!(sql = %sql, "executing where_count");
        match conn.get(&sql, params)? {
            Some(row) => {
                let count: i64 = row.get_as(0)?;
                Ok(u64::try_from(count).unwrap_or(0))
            }
            None => Ok(0),
        }
    }

    /// Run a complete caller-supplied statement and rehydrate every
    /// returned row into the calling type.
    ///
    /// The escape hatch for queries `where_`/`get` cannot express: custom
    /// ordering, joins, projections.
    fn object_query(db: &Registry, sql: &str, params: &[Value]) -> Result<Vec<Self>> {
        let conn = db.connection()?;
        tracing::debug!(sql = %sql, "executing object_query");
        let rows = conn.query(sql, params)?;
        hydrate(&rows)
    }
}

impl<T: Record + RecordHooks> ActiveRecord for T {}

#[tracing::instrument(level = "debug", skip(rec, db), fields(table = T::TABLE_NAME))]
fn insert_record<T: Record + RecordHooks>(rec: &mut T, db: &Registry) -> Result<()> {
    let conn: Arc<dyn Connection> = db.connection()?;
    let row = rec.to_row();
    let columns: Vec<&'static str> = row.iter().map(|(column, _)| *column).collect();
    let params: Vec<Value> = row.into_iter().map(|(_, value)| value).collect();

    let sql = insert_sql(T::TABLE_NAME, &columns);
    tracing::debug!(sql = %sql, "executing insert");
    let result = conn.execute(&sql, &params)?;

    let id = result.last_insert_id.ok_or_else(|| {
        Error::query(
            QueryErrorKind::Database,
            format!("insert into '{}' returned no insert id", T::TABLE_NAME),
        )
    })?;
    rec.set_primary_key(id);
    rec.on_create();
    Ok(())
}

#[tracing::instrument(level = "debug", skip(rec, db), fields(table = T::TABLE_NAME))]
fn update_record<T: Record + RecordHooks>(rec: &mut T, db: &Registry, id: i64) -> Result<()> {
    let conn: Arc<dyn Connection> = db.connection()?;
    let row = rec.to_row();
    let columns: Vec<&'static str> = row.iter().map(|(column, _)| *column).collect();
    let mut params: Vec<Value> = row.into_iter().map(|(_, value)| value).collect();
    params.push(Value::Int(id));

    let sql = update_sql(T::TABLE_NAME, &columns, T::PRIMARY_KEY);
    tracing::debug!(sql = %sql, "executing update");
    conn.execute(&sql, &params)?;

    rec.on_update();
    Ok(())
}

/// Rehydrate rows into instances of the calling type.
fn hydrate<T: Record>(rows: &[Row]) -> Result<Vec<T>> {
    rows.iter().map(T::from_row).collect()
}

// INSERT INTO "t" ("c1", "c2") VALUES ($1, $2)
fn insert_sql(table: &str, columns: &[&'static str]) -> String {
    let col_list: String = columns
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders: String = (1..=columns.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table, col_list, placeholders
    )
}

// UPDATE "t" SET "c1" = $1, "c2" = $2 WHERE "id" = $3
fn update_sql(table: &str, columns: &[&'static str], pk: &str) -> String {
    let set_clause: String = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("\"{}\" = ${}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE \"{}\" SET {} WHERE \"{}\" = ${}",
        table,
        set_clause,
        pk,
        columns.len() + 1
    )
}

fn select_sql(table: &str, condition: &str) -> String {
    format!("SELECT * FROM \"{}\" WHERE {}", table, condition)
}

fn count_sql(table: &str, condition: &str) -> String {
    format!("SELECT COUNT(*) FROM \"{}\" WHERE {}", table, condition)
}
