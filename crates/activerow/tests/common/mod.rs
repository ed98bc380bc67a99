//! Shared test support: an in-memory `Connection` and a sample record type.
//!
//! `MemoryConnection` stores rows per table and understands the statement
//! shapes the crate emits (plus `ORDER BY` for full caller-supplied
//! queries), so save/fetch round trips are observable without a real
//! backend.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use activerow::prelude::*;
use activerow_core::row::ColumnInfo;
use activerow_core::{ExecResult, QueryErrorKind};

#[derive(Default)]
struct Table {
    next_id: i64,
    /// Column order: primary key first, then insert columns.
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// An in-memory backend storing rows per table.
#[derive(Default)]
pub struct MemoryConnection {
    tables: Mutex<HashMap<String, Table>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored for a table.
    pub fn row_count(&self, table: &str) -> usize {
        let tables = self.tables.lock().unwrap();
        tables.get(table).map_or(0, |t| t.rows.len())
    }
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"')
}

// "$3" -> 2
fn param_index(token: &str) -> usize {
    token
        .trim()
        .strip_prefix('$')
        .and_then(|n| n.parse::<usize>().ok())
        .expect("placeholder token")
        - 1
}

fn unsupported(sql: &str) -> Error {
    Error::query(
        QueryErrorKind::Syntax,
        format!("unsupported statement: {sql}"),
    )
}

fn cmp_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Double(x), Value::Double(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// A parsed `"col" = $N` equality condition.
struct Condition {
    column: String,
    param: usize,
}

impl Condition {
    fn parse(fragment: &str) -> Result<Self> {
        let (col, param) = fragment
            .split_once(" = ")
            .ok_or_else(|| unsupported(fragment))?;
        Ok(Self {
            column: unquote(col).to_string(),
            param: param_index(param),
        })
    }

    fn matches(&self, table: &Table, row: &[Value], params: &[Value]) -> bool {
        let Some(idx) = table.columns.iter().position(|c| *c == self.column) else {
            return false;
        };
        row[idx] == params[self.param]
    }
}

impl Connection for MemoryConnection {
    fn execute(&self, sql: &str, params: &[Value]) -> Result<ExecResult> {
        let mut tables = self.tables.lock().unwrap();

        if let Some(rest) = sql.strip_prefix("INSERT INTO ") {
            let (table_name, rest) = rest.split_once(" (").ok_or_else(|| unsupported(sql))?;
            let (cols, _) = rest
                .split_once(") VALUES (")
                .ok_or_else(|| unsupported(sql))?;
            let columns: Vec<String> = cols.split(", ").map(|c| unquote(c).to_string()).collect();

            let table = tables.entry(unquote(table_name).to_string()).or_default();
            if table.columns.is_empty() {
                table.columns = std::iter::once("id".to_string()).chain(columns).collect();
            }
            table.next_id += 1;
            let id = table.next_id;
            let mut row = vec![Value::Int(id)];
            row.extend(params.iter().cloned());
            table.rows.push(row);
            return Ok(ExecResult {
                rows_affected: 1,
                last_insert_id: Some(id),
            });
        }

        if let Some(rest) = sql.strip_prefix("UPDATE ") {
            let (table_name, rest) = rest.split_once(" SET ").ok_or_else(|| unsupported(sql))?;
            let (set_part, where_part) =
                rest.split_once(" WHERE ").ok_or_else(|| unsupported(sql))?;
            let assignments: Vec<Condition> = set_part
                .split(", ")
                .map(Condition::parse)
                .collect::<Result<_>>()?;
            let condition = Condition::parse(where_part)?;

            let table = tables
                .get_mut(unquote(table_name))
                .ok_or_else(|| unsupported(sql))?;
            let mut affected = 0;
            let columns = table.columns.clone();
            let Some(cond_idx) = columns.iter().position(|c| *c == condition.column) else {
                return Ok(ExecResult::default());
            };
            for row in &mut table.rows {
                if row[cond_idx] != params[condition.param] {
                    continue;
                }
                for assignment in &assignments {
                    if let Some(idx) = columns.iter().position(|c| *c == assignment.column) {
                        row[idx] = params[assignment.param].clone();
                    }
                }
                affected += 1;
            }
            return Ok(ExecResult {
                rows_affected: affected,
                last_insert_id: None,
            });
        }

        Err(unsupported(sql))
    }

    fn get(&self, sql: &str, params: &[Value]) -> Result<Option<Row>> {
        Ok(self.query(sql, params)?.into_iter().next())
    }

    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let tables = self.tables.lock().unwrap();

        if let Some(rest) = sql.strip_prefix("SELECT COUNT(*) FROM ") {
            let (table_name, cond) = rest.split_once(" WHERE ").ok_or_else(|| unsupported(sql))?;
            let count = match tables.get(unquote(table_name)) {
                Some(table) => {
                    let condition = Condition::parse(cond)?;
                    table
                        .rows
                        .iter()
                        .filter(|row| condition.matches(table, row.as_slice(), params))
                        .count()
                }
                None => 0,
            };
            return Ok(vec![Row::new(
                vec!["COUNT(*)".to_string()],
                vec![Value::Int(count as i64)],
            )]);
        }

        let rest = sql
            .strip_prefix("SELECT * FROM ")
            .ok_or_else(|| unsupported(sql))?;

        // table ["WHERE" cond] ["ORDER BY" col ["DESC"]]
        let (table_name, cond, order) = match rest.split_once(" WHERE ") {
            Some((table_name, tail)) => match tail.split_once(" ORDER BY ") {
                Some((cond, order)) => (table_name, Some(cond), Some(order)),
                None => (table_name, Some(tail), None),
            },
            None => match rest.split_once(" ORDER BY ") {
                Some((table_name, order)) => (table_name, None, Some(order)),
                None => (rest, None, None),
            },
        };

        let Some(table) = tables.get(unquote(table_name)) else {
            return Ok(vec![]);
        };

        let mut selected: Vec<Vec<Value>> = match cond {
            Some(cond) => {
                let condition = Condition::parse(cond)?;
                table
                    .rows
                    .iter()
                    .filter(|row| condition.matches(table, row.as_slice(), params))
                    .cloned()
                    .collect()
            }
            None => table.rows.clone(),
        };

        if let Some(order) = order {
            let descending = order.trim().ends_with(" DESC") || order.trim().ends_with(" desc");
            let column = unquote(order.trim().trim_end_matches(" DESC").trim_end_matches(" desc"));
            if let Some(idx) = table.columns.iter().position(|c| c == column) {
                selected.sort_by(|a, b| cmp_values(&a[idx], &b[idx]));
                if descending {
                    selected.reverse();
                }
            }
        }

        let columns = Arc::new(ColumnInfo::new(table.columns.clone()));
        Ok(selected
            .into_iter()
            .map(|values| Row::with_columns(Arc::clone(&columns), values))
            .collect())
    }
}

/// A sample record type with a hook-observable field, mirroring how an
/// application declares one.
#[derive(Debug)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    /// Not a declared field; written by the hook overrides below.
    pub last_hook: &'static str,
}

impl User {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            last_hook: "",
        }
    }
}

impl Record for User {
    const TABLE_NAME: &'static str = "user";

    fn fields() -> &'static [FieldDef] {
        static FIELDS: &[FieldDef] = &[FieldDef::new("name"), FieldDef::new("email")];
        FIELDS
    }

    fn to_row(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::from(self.name.clone())),
            ("email", Value::from(self.email.clone())),
        ]
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.opt_named("id")?,
            name: row.opt_named("name")?.unwrap_or_default(),
            email: row.opt_named("email")?.unwrap_or_default(),
            last_hook: "",
        })
    }

    fn primary_key(&self) -> Option<i64> {
        self.id
    }

    fn set_primary_key(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl RecordHooks for User {
    fn on_create(&mut self) {
        self.last_hook = "on_create_called";
    }

    fn on_update(&mut self) {
        self.last_hook = "on_update_called";
    }
}

/// A registry with a fresh in-memory backend registered.
pub fn registry_with_memory_db() -> (Registry, Arc<MemoryConnection>) {
    let conn = Arc::new(MemoryConnection::new());
    let registry = Registry::new();
    registry.register(conn.clone());
    (registry, conn)
}
