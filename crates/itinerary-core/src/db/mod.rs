//! Database operations and SQLite management for the itinerary store.
//!
//! This module owns the single SQLite connection used by the application. It
//! handles opening the store, schema management, and the parameterised
//! execution primitives that the entity queries are built on.

use std::path::Path;

use jiff::{fmt::temporal::DateTimePrinter, Timestamp};
use log::debug;
use rusqlite::{types::Type, Connection, OptionalExtension, Params, Row};

use crate::error::{DatabaseResultExt, Result};

pub mod day_queries;
pub mod details;
pub mod migrations;
pub mod ordering;
pub mod plan_queries;
pub mod review_queries;
pub mod stop_queries;

/// Fixed file name of the itinerary database.
pub const DATABASE_FILE_NAME: &str = "travel_planner.db";

/// Outcome of an INSERT, UPDATE or DELETE statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunResult {
    /// Rowid of the most recent successful INSERT on the connection
    pub last_insert_row_id: u64,
    /// Number of rows changed by the statement
    pub changes: usize,
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("opening itinerary store at {}", path.as_ref().display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database with the full schema.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Runs a statement (or batch) that returns no rows.
    pub fn exec(&self, sql: &str) -> Result<()> {
        exec(&self.connection, sql)
    }

    /// Runs a parameterised INSERT, UPDATE or DELETE.
    pub fn run<P: Params>(&self, sql: &str, params: P) -> Result<RunResult> {
        run(&self.connection, sql, params)
    }

    /// Runs a parameterised SELECT and maps every row.
    pub fn query_all<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        query_all(&self.connection, sql, params, map)
    }

    /// Runs a parameterised SELECT and maps the first row, if any.
    pub fn query_one<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        query_one(&self.connection, sql, params, map)
    }
}

// The free functions take `&Connection` so they work on both the handle and an
// open `Transaction` (which derefs to `Connection`).

pub(crate) fn exec(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute_batch(sql).db_context("Failed to execute statement")
}

pub(crate) fn run<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<RunResult> {
    let mut stmt = conn
        .prepare_cached(sql)
        .db_context("Failed to prepare statement")?;
    let changes = stmt.execute(params).db_context("Failed to execute statement")?;

    Ok(RunResult {
        last_insert_row_id: conn.last_insert_rowid() as u64,
        changes,
    })
}

pub(crate) fn query_all<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare_cached(sql).db_context("Failed to prepare query")?;

    let rows = stmt
        .query_map(params, map)
        .db_context("Failed to run query")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch rows")?;

    Ok(rows)
}

pub(crate) fn query_one<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Option<T>>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare_cached(sql).db_context("Failed to prepare query")?;

    stmt.query_row(params, map)
        .optional()
        .db_context("Failed to fetch row")
}

/// Returns whether a row with the given key exists, using an
/// `SELECT EXISTS(...)` statement.
pub(crate) fn exists(conn: &Connection, sql: &str, id: u64) -> Result<bool> {
    conn.prepare_cached(sql)
        .and_then(|mut stmt| stmt.query_row([id as i64], |row| row.get(0)))
        .db_context("Failed to check row existence")
}

/// Renders a timestamp as UTC RFC 3339 text with exactly three fractional
/// digits, so that stored timestamps sort chronologically as strings.
pub(crate) fn timestamp_text(timestamp: &Timestamp) -> String {
    DateTimePrinter::new()
        .precision(Some(3))
        .timestamp_to_string(timestamp)
}

/// Reads a TEXT column and parses it, reporting parse failures as a column
/// conversion error.
pub(crate) fn parse_text_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    row.get::<_, String>(idx)?
        .parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
