//! Read-only queries against the corpus database.
//!
//! The corpus is built by other tools; this server never writes to it. Every
//! listing is ordered by id and paginated with 1-based pages: page `n` covers
//! rows `(n - 1) * size .. n * size`.

use std::path::Path;

use common::endpoints::SourceFilter;
use common::model::{Context, Lemma, Source, SourceKind, Status, StatusVal};
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, OpenFlags, OptionalExtension, Row};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("query task failed: {0}")]
    Task(String),
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub page_size: u32,
}

impl Page {
    fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.page_size)
    }
}

/// Opens the corpus without write access.
pub fn open(path: &Path) -> Result<Connection, DbError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

fn lemma_from_row(row: &Row) -> rusqlite::Result<Lemma> {
    Ok(Lemma {
        id: row.get("id")?,
        lemma: row.get("lemma")?,
        created: row.get("created")?,
        status_id: row.get("status_id")?,
        found_in_source: row.get("found_in_source")?,
    })
}

fn status_from_row(row: &Row) -> rusqlite::Result<Status> {
    let value: String = row.get("status")?;
    let status = value.parse::<StatusVal>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
    })?;
    Ok(Status {
        id: row.get("id")?,
        status,
    })
}

fn source_from_row(row: &Row) -> rusqlite::Result<Source> {
    Ok(Source {
        id: row.get("id")?,
        title: row.get("title")?,
        source_kind_id: row.get("source_kind_id")?,
        author: row.get("author")?,
        lang: row.get("lang")?,
        removed_lemmata_num: row.get("removed_lemmata_num")?,
    })
}

fn source_kind_from_row(row: &Row) -> rusqlite::Result<SourceKind> {
    Ok(SourceKind {
        id: row.get("id")?,
        kind: row.get("kind")?,
    })
}

fn context_from_row(row: &Row) -> rusqlite::Result<Context> {
    Ok(Context {
        id: row.get("id")?,
        context_value: row.get("context_value")?,
        created: row.get("created")?,
        source_id: row.get("source_id")?,
    })
}

const LEMMA_COLUMNS: &str = "id, lemma, created, status_id, found_in_source";
const SOURCE_COLUMNS: &str = "id, title, source_kind_id, author, lang, removed_lemmata_num";
const CONTEXT_COLUMNS: &str = "c.id AS id, c.context_value AS context_value, c.created AS created, c.source_id AS source_id";

pub fn get_lemma(conn: &Connection, lemma_id: i64) -> Result<Option<Lemma>, DbError> {
    let sql = format!("SELECT {LEMMA_COLUMNS} FROM lemma WHERE id = ?1");
    Ok(conn
        .query_row(&sql, params![lemma_id], lemma_from_row)
        .optional()?)
}

pub fn get_status(conn: &Connection, status_id: i64) -> Result<Option<Status>, DbError> {
    Ok(conn
        .query_row(
            "SELECT id, status FROM lemma_status WHERE id = ?1",
            params![status_id],
            status_from_row,
        )
        .optional()?)
}

pub fn get_source(conn: &Connection, source_id: i64) -> Result<Option<Source>, DbError> {
    let sql = format!("SELECT {SOURCE_COLUMNS} FROM source WHERE id = ?1");
    Ok(conn
        .query_row(&sql, params![source_id], source_from_row)
        .optional()?)
}

pub fn get_source_kind(conn: &Connection, kind_id: i64) -> Result<Option<SourceKind>, DbError> {
    Ok(conn
        .query_row(
            "SELECT id, kind FROM source_kind WHERE id = ?1",
            params![kind_id],
            source_kind_from_row,
        )
        .optional()?)
}

pub fn get_context(conn: &Connection, context_id: i64) -> Result<Option<Context>, DbError> {
    let sql = format!("SELECT {CONTEXT_COLUMNS} FROM context c WHERE c.id = ?1");
    Ok(conn
        .query_row(&sql, params![context_id], context_from_row)
        .optional()?)
}

/// Lemmata whose status is `status`.
pub fn status_lemmata(
    conn: &Connection,
    status: StatusVal,
    page: Page,
) -> Result<Vec<Lemma>, DbError> {
    let sql = format!(
        "SELECT {LEMMA_COLUMNS} FROM lemma
         WHERE status_id IN (SELECT id FROM lemma_status WHERE status = ?1)
         ORDER BY id LIMIT ?2 OFFSET ?3"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![status.as_str(), page.limit(), page.offset()],
        lemma_from_row,
    )?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn contexts(conn: &Connection, page: Page) -> Result<Vec<Context>, DbError> {
    let sql = format!("SELECT {CONTEXT_COLUMNS} FROM context c ORDER BY c.id LIMIT ?1 OFFSET ?2");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![page.limit(), page.offset()], context_from_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn source_contexts(
    conn: &Connection,
    source_id: i64,
    page: Page,
) -> Result<Vec<Context>, DbError> {
    let sql = format!(
        "SELECT {CONTEXT_COLUMNS} FROM context c WHERE c.source_id = ?1
         ORDER BY c.id LIMIT ?2 OFFSET ?3"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![source_id, page.limit(), page.offset()],
        context_from_row,
    )?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Contexts in which `lemma_id` occurs, each listed once.
pub fn lemma_contexts(
    conn: &Connection,
    lemma_id: i64,
    page: Page,
) -> Result<Vec<Context>, DbError> {
    let sql = format!(
        "SELECT {CONTEXT_COLUMNS} FROM context c
         WHERE c.id IN (SELECT context_id FROM lemma_context WHERE lemma_id = ?1)
         ORDER BY c.id LIMIT ?2 OFFSET ?3"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![lemma_id, page.limit(), page.offset()],
        context_from_row,
    )?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Sources matching every filter that is set.
pub fn sources(
    conn: &Connection,
    filter: &SourceFilter,
    page: Page,
) -> Result<Vec<Source>, DbError> {
    let mut conditions: Vec<String> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(kind_id) = filter.source_kind_id {
        values.push(Value::Integer(kind_id));
        conditions.push(format!("source_kind_id = ?{}", values.len()));
    }
    if let Some(author) = &filter.author {
        values.push(Value::Text(author.clone()));
        conditions.push(format!("author = ?{}", values.len()));
    }
    if let Some(lang) = &filter.lang {
        values.push(Value::Text(lang.clone()));
        conditions.push(format!("lang = ?{}", values.len()));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    values.push(Value::Integer(page.limit()));
    let limit_index = values.len();
    values.push(Value::Integer(page.offset()));
    let offset_index = values.len();

    let sql = format!(
        "SELECT {SOURCE_COLUMNS} FROM source {where_clause}
         ORDER BY id LIMIT ?{limit_index} OFFSET ?{offset_index}"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), source_from_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
