//! SQLite-backed entity store
//!
//! Owns the relational schema for authors, tags, quotes and the quote↔tag
//! join table. The connection is guarded by an async mutex so handlers can
//! share one store across concurrent requests; all SQL runs while the lock
//! is held.
//!
//! Write-time invariants enforced here:
//! - quote text must contain at least 3 word tokens
//! - (first_name, last_name, birth_date) unique per author
//! - tag names unique
//! - quotes cascade-delete with their author; tags never cascade into quotes

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::store::error::{StoreError, StoreResult};
use crate::store::filter::FilterSet;
use crate::store::types::{
    validate_quote_text, Author, AuthorUpdate, NewAuthor, NewQuote, Quote, QuoteOrdering,
    QuoteUpdate, Tag,
};

/// Timestamp storage format: UTC, microsecond precision, lexicographically
/// sortable so `ORDER BY created_at` is chronological.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parameters common to all list endpoints
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Substring search across the entity's searchable fields
    pub search: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

/// Parameters for quote listings
#[derive(Debug, Clone, Default)]
pub struct QuoteListQuery {
    /// Predicates produced by the declared list filter
    pub filters: FilterSet,
    /// Substring search across id, text, author first/last name
    pub search: Option<String>,
    pub ordering: QuoteOrdering,
    pub limit: u32,
    pub offset: u32,
}

/// The entity store
pub struct QuoteStore {
    conn: Mutex<Connection>,
}

impl QuoteStore {
    /// Open (or create) the store at the given path
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            ",
        )?;

        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (tests)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> StoreResult<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS authors (
                id TEXT PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL DEFAULT '',
                birth_date TEXT NOT NULL,
                death_date TEXT,
                UNIQUE (first_name, last_name, birth_date)
            );

            CREATE TABLE IF NOT EXISTS tags (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS quotes (
                id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                created_at TEXT NOT NULL,
                author_id TEXT NOT NULL REFERENCES authors(id) ON DELETE CASCADE
            );

            CREATE TABLE IF NOT EXISTS quote_tags (
                quote_id TEXT NOT NULL REFERENCES quotes(id) ON DELETE CASCADE,
                tag_id TEXT NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
                PRIMARY KEY (quote_id, tag_id)
            );

            CREATE INDEX IF NOT EXISTS idx_quotes_created ON quotes(created_at);
            CREATE INDEX IF NOT EXISTS idx_quotes_author ON quotes(author_id);
            CREATE INDEX IF NOT EXISTS idx_quote_tags_tag ON quote_tags(tag_id);
            ",
        )?;
        Ok(())
    }

    /// Cheap connectivity check for readiness probes
    pub async fn health_check(&self) -> bool {
        let conn = self.conn.lock().await;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .is_ok()
    }

    // ============================================
    // AUTHORS
    // ============================================

    /// Create an author
    pub async fn create_author(&self, new: NewAuthor) -> StoreResult<Author> {
        validate_author_fields(&new.first_name, &new.last_name)?;

        let author = Author {
            id: Uuid::new_v4(),
            first_name: new.first_name,
            last_name: new.last_name,
            birth_date: new.birth_date,
            death_date: new.death_date,
        };

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO authors (id, first_name, last_name, birth_date, death_date)
             VALUES (?, ?, ?, ?, ?)",
            params![
                author.id.to_string(),
                author.first_name,
                author.last_name,
                format_date(author.birth_date),
                author.death_date.map(format_date),
            ],
        )
        .map_err(map_constraint_error)?;

        tracing::info!(author_id = %author.id, "Created author");
        Ok(author)
    }

    /// Fetch an author by id
    pub async fn get_author(&self, id: Uuid) -> StoreResult<Author> {
        let conn = self.conn.lock().await;
        let result = conn.prepare_cached(
            "SELECT id, first_name, last_name, birth_date, death_date
             FROM authors WHERE id = ?",
        )?
        .query_row(params![id.to_string()], row_to_author)
        .map_err(|e| not_found_or("Author", id, e));
        result
    }

    /// List authors ordered by id, with optional substring search
    pub async fn list_authors(&self, query: &ListQuery) -> StoreResult<(Vec<Author>, u64)> {
        let conn = self.conn.lock().await;

        let (where_sql, pattern) = match &query.search {
            Some(term) if !term.is_empty() => (
                " WHERE (id LIKE ? ESCAPE '\\' OR first_name LIKE ? ESCAPE '\\' OR last_name LIKE ? ESCAPE '\\')",
                Some(like_pattern(term)),
            ),
            _ => ("", None),
        };

        let count_sql = format!("SELECT COUNT(*) FROM authors{}", where_sql);
        let page_sql = format!(
            "SELECT id, first_name, last_name, birth_date, death_date
             FROM authors{} ORDER BY id LIMIT ? OFFSET ?",
            where_sql
        );

        let count: u64 = match &pattern {
            Some(p) => conn.query_row(&count_sql, params![p, p, p], |row| row.get(0))?,
            None => conn.query_row(&count_sql, [], |row| row.get(0))?,
        };

        let mut stmt = conn.prepare_cached(&page_sql)?;
        let rows = match &pattern {
            Some(p) => stmt.query_map(params![p, p, p, query.limit, query.offset], row_to_author)?,
            None => stmt.query_map(params![query.limit, query.offset], row_to_author)?,
        };

        let authors = rows.collect::<Result<Vec<_>, _>>()?;
        Ok((authors, count))
    }

    /// Apply a partial update to an author
    pub async fn update_author(&self, id: Uuid, update: AuthorUpdate) -> StoreResult<Author> {
        if let Some(first_name) = &update.first_name {
            validate_author_fields(first_name, update.last_name.as_deref().unwrap_or(""))?;
        } else if let Some(last_name) = &update.last_name {
            if last_name.len() > 100 {
                return Err(StoreError::validation(
                    "last_name",
                    "Ensure this field has no more than 100 characters.",
                ));
            }
        }

        {
            let conn = self.conn.lock().await;

            let mut sets = Vec::new();
            let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

            if let Some(first_name) = update.first_name {
                sets.push("first_name = ?");
                values.push(Box::new(first_name));
            }
            if let Some(last_name) = update.last_name {
                sets.push("last_name = ?");
                values.push(Box::new(last_name));
            }
            if let Some(birth_date) = update.birth_date {
                sets.push("birth_date = ?");
                values.push(Box::new(format_date(birth_date)));
            }
            if let Some(death_date) = update.death_date {
                sets.push("death_date = ?");
                values.push(Box::new(death_date.map(format_date)));
            }

            if !sets.is_empty() {
                let sql = format!("UPDATE authors SET {} WHERE id = ?", sets.join(", "));
                values.push(Box::new(id.to_string()));

                let refs: Vec<&dyn rusqlite::ToSql> = values.iter().map(|v| v.as_ref()).collect();
                let changed = conn
                    .execute(&sql, &refs[..])
                    .map_err(map_constraint_error)?;

                if changed == 0 {
                    return Err(StoreError::not_found("Author", id.to_string()));
                }
            }
        }

        self.get_author(id).await
    }

    /// Delete an author; cascades to their quotes
    pub async fn delete_author(&self, id: Uuid) -> StoreResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM authors WHERE id = ?", params![id.to_string()])?;
        if changed == 0 {
            return Err(StoreError::not_found("Author", id.to_string()));
        }
        tracing::info!(author_id = %id, "Deleted author (quotes cascade)");
        Ok(())
    }

    // ============================================
    // TAGS
    // ============================================

    /// Create a tag with a unique name
    pub async fn create_tag(&self, name: &str) -> StoreResult<Tag> {
        validate_tag_name(name)?;

        let tag = Tag {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO tags (id, name) VALUES (?, ?)",
            params![tag.id.to_string(), tag.name],
        )
        .map_err(map_constraint_error)?;

        Ok(tag)
    }

    /// Fetch a tag by id
    pub async fn get_tag(&self, id: Uuid) -> StoreResult<Tag> {
        let conn = self.conn.lock().await;
        let result = conn.prepare_cached("SELECT id, name FROM tags WHERE id = ?")?
            .query_row(params![id.to_string()], row_to_tag)
            .map_err(|e| not_found_or("Tag", id, e));
        result
    }

    /// List tags ordered by name, with optional substring search
    pub async fn list_tags(&self, query: &ListQuery) -> StoreResult<(Vec<Tag>, u64)> {
        let conn = self.conn.lock().await;

        let (where_sql, pattern) = match &query.search {
            Some(term) if !term.is_empty() => (
                " WHERE (id LIKE ? ESCAPE '\\' OR name LIKE ? ESCAPE '\\')",
                Some(like_pattern(term)),
            ),
            _ => ("", None),
        };

        let count_sql = format!("SELECT COUNT(*) FROM tags{}", where_sql);
        let page_sql = format!(
            "SELECT id, name FROM tags{} ORDER BY name LIMIT ? OFFSET ?",
            where_sql
        );

        let count: u64 = match &pattern {
            Some(p) => conn.query_row(&count_sql, params![p, p], |row| row.get(0))?,
            None => conn.query_row(&count_sql, [], |row| row.get(0))?,
        };

        let mut stmt = conn.prepare_cached(&page_sql)?;
        let rows = match &pattern {
            Some(p) => stmt.query_map(params![p, p, query.limit, query.offset], row_to_tag)?,
            None => stmt.query_map(params![query.limit, query.offset], row_to_tag)?,
        };

        let tags = rows.collect::<Result<Vec<_>, _>>()?;
        Ok((tags, count))
    }

    /// Rename a tag
    pub async fn update_tag(&self, id: Uuid, name: &str) -> StoreResult<Tag> {
        validate_tag_name(name)?;

        let conn = self.conn.lock().await;
        let changed = conn
            .execute(
                "UPDATE tags SET name = ? WHERE id = ?",
                params![name, id.to_string()],
            )
            .map_err(map_constraint_error)?;

        if changed == 0 {
            return Err(StoreError::not_found("Tag", id.to_string()));
        }

        Ok(Tag {
            id,
            name: name.to_string(),
        })
    }

    /// Delete a tag; quotes referencing it are untouched
    pub async fn delete_tag(&self, id: Uuid) -> StoreResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM tags WHERE id = ?", params![id.to_string()])?;
        if changed == 0 {
            return Err(StoreError::not_found("Tag", id.to_string()));
        }
        Ok(())
    }

    // ============================================
    // QUOTES
    // ============================================

    /// Create a quote, linking any given tags, in one transaction
    ///
    /// The created quote is only visible to readers after the transaction
    /// commits; callers fire post-commit hooks (notifications) after this
    /// returns.
    pub async fn create_quote(&self, new: NewQuote) -> StoreResult<Quote> {
        validate_quote_text(&new.text)?;

        let quote = Quote {
            id: Uuid::new_v4(),
            text: new.text,
            created_at: Utc::now(),
            author_id: new.author_id,
        };

        let mut conn = self.conn.lock().await;

        if !author_exists(&conn, new.author_id)? {
            return Err(StoreError::validation(
                "author_id",
                format!("Author {} does not exist.", new.author_id),
            ));
        }
        for tag_id in &new.tags {
            if !tag_exists(&conn, *tag_id)? {
                return Err(StoreError::validation(
                    "tags",
                    format!("Tag {} does not exist.", tag_id),
                ));
            }
        }

        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO quotes (id, text, created_at, author_id) VALUES (?, ?, ?, ?)",
            params![
                quote.id.to_string(),
                quote.text,
                format_timestamp(quote.created_at),
                quote.author_id.to_string(),
            ],
        )?;
        for tag_id in &new.tags {
            tx.execute(
                "INSERT OR IGNORE INTO quote_tags (quote_id, tag_id) VALUES (?, ?)",
                params![quote.id.to_string(), tag_id.to_string()],
            )?;
        }
        tx.commit()?;

        tracing::info!(quote_id = %quote.id, author_id = %quote.author_id, "Created quote");
        Ok(quote)
    }

    /// Fetch a quote by id
    pub async fn get_quote(&self, id: Uuid) -> StoreResult<Quote> {
        let conn = self.conn.lock().await;
        let result = conn.prepare_cached(
            "SELECT id, text, created_at, author_id FROM quotes WHERE id = ?",
        )?
        .query_row(params![id.to_string()], row_to_quote)
        .map_err(|e| not_found_or("Quote", id, e));
        result
    }

    /// List quotes with declared filters, search, ordering and pagination
    pub async fn list_quotes(&self, query: &QuoteListQuery) -> StoreResult<(Vec<Quote>, u64)> {
        let conn = self.conn.lock().await;

        let mut clauses: Vec<String> = Vec::new();
        let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        for predicate in query.filters.predicates() {
            let placeholders = vec!["?"; predicate.values.len()].join(", ");
            let clause = match predicate.target {
                "author_id" => format!("q.author_id IN ({})", placeholders),
                "tag_id" => format!(
                    "q.id IN (SELECT quote_id FROM quote_tags WHERE tag_id IN ({}))",
                    placeholders
                ),
                other => return Err(StoreError::UnknownFilterTarget(other.to_string())),
            };
            clauses.push(clause);
            for value in &predicate.values {
                values.push(Box::new(value.clone()));
            }
        }

        if let Some(term) = query.search.as_deref().filter(|t| !t.is_empty()) {
            clauses.push(
                "(q.id LIKE ? ESCAPE '\\' OR q.text LIKE ? ESCAPE '\\' \
                 OR a.first_name LIKE ? ESCAPE '\\' OR a.last_name LIKE ? ESCAPE '\\')"
                    .to_string(),
            );
            let pattern = like_pattern(term);
            for _ in 0..4 {
                values.push(Box::new(pattern.clone()));
            }
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };

        let order_sql = match query.ordering {
            QuoteOrdering::CreatedAt => "q.created_at ASC, q.id",
            QuoteOrdering::CreatedAtDesc => "q.created_at DESC, q.id",
        };

        let from_sql = "FROM quotes q JOIN authors a ON a.id = q.author_id";

        let count_sql = format!("SELECT COUNT(*) {}{}", from_sql, where_sql);
        let refs: Vec<&dyn rusqlite::ToSql> = values.iter().map(|v| v.as_ref()).collect();
        let count: u64 = conn.query_row(&count_sql, &refs[..], |row| row.get(0))?;

        let page_sql = format!(
            "SELECT q.id, q.text, q.created_at, q.author_id {}{} ORDER BY {} LIMIT ? OFFSET ?",
            from_sql, where_sql, order_sql
        );
        values.push(Box::new(query.limit));
        values.push(Box::new(query.offset));
        let refs: Vec<&dyn rusqlite::ToSql> = values.iter().map(|v| v.as_ref()).collect();

        let mut stmt = conn.prepare_cached(&page_sql)?;
        let rows = stmt.query_map(&refs[..], row_to_quote)?;
        let quotes = rows.collect::<Result<Vec<_>, _>>()?;

        Ok((quotes, count))
    }

    /// Apply a partial update to a quote; `created_at` never changes
    pub async fn update_quote(&self, id: Uuid, update: QuoteUpdate) -> StoreResult<Quote> {
        if let Some(text) = &update.text {
            validate_quote_text(text)?;
        }

        {
            let mut conn = self.conn.lock().await;

            if !quote_exists(&conn, id)? {
                return Err(StoreError::not_found("Quote", id.to_string()));
            }
            if let Some(author_id) = update.author_id {
                if !author_exists(&conn, author_id)? {
                    return Err(StoreError::validation(
                        "author_id",
                        format!("Author {} does not exist.", author_id),
                    ));
                }
            }
            if let Some(tags) = &update.tags {
                for tag_id in tags {
                    if !tag_exists(&conn, *tag_id)? {
                        return Err(StoreError::validation(
                            "tags",
                            format!("Tag {} does not exist.", tag_id),
                        ));
                    }
                }
            }

            let tx = conn.transaction()?;
            if let Some(text) = update.text {
                tx.execute(
                    "UPDATE quotes SET text = ? WHERE id = ?",
                    params![text, id.to_string()],
                )?;
            }
            if let Some(author_id) = update.author_id {
                tx.execute(
                    "UPDATE quotes SET author_id = ? WHERE id = ?",
                    params![author_id.to_string(), id.to_string()],
                )?;
            }
            if let Some(tags) = update.tags {
                // Replacing the full tag set, per the write contract
                tx.execute(
                    "DELETE FROM quote_tags WHERE quote_id = ?",
                    params![id.to_string()],
                )?;
                for tag_id in tags {
                    tx.execute(
                        "INSERT OR IGNORE INTO quote_tags (quote_id, tag_id) VALUES (?, ?)",
                        params![id.to_string(), tag_id.to_string()],
                    )?;
                }
            }
            tx.commit()?;
        }

        self.get_quote(id).await
    }

    /// Delete a quote; its tags survive
    pub async fn delete_quote(&self, id: Uuid) -> StoreResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM quotes WHERE id = ?", params![id.to_string()])?;
        if changed == 0 {
            return Err(StoreError::not_found("Quote", id.to_string()));
        }
        Ok(())
    }

    /// Fetch the tags attached to a quote, ordered by name
    pub async fn quote_tags(&self, id: Uuid) -> StoreResult<Vec<Tag>> {
        let conn = self.conn.lock().await;

        if !quote_exists(&conn, id)? {
            return Err(StoreError::not_found("Quote", id.to_string()));
        }

        let mut stmt = conn.prepare_cached(
            "SELECT t.id, t.name FROM tags t
             JOIN quote_tags qt ON qt.tag_id = t.id
             WHERE qt.quote_id = ?
             ORDER BY t.name",
        )?;
        let rows = stmt.query_map(params![id.to_string()], row_to_tag)?;
        let tags = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }
}

// ============================================
// Row mapping & helpers
// ============================================

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn like_pattern(term: &str) -> String {
    // Escape LIKE metacharacters so search terms match literally
    let escaped = term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    format!("%{}%", escaped)
}

fn parse_uuid(idx: usize, value: String) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(&value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_date(idx: usize, value: String) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_timestamp(idx: usize, value: String) -> rusqlite::Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(&value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn row_to_author(row: &rusqlite::Row<'_>) -> rusqlite::Result<Author> {
    let death: Option<String> = row.get(4)?;
    Ok(Author {
        id: parse_uuid(0, row.get(0)?)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        birth_date: parse_date(3, row.get(3)?)?,
        death_date: death.map(|d| parse_date(4, d)).transpose()?,
    })
}

fn row_to_tag(row: &rusqlite::Row<'_>) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: parse_uuid(0, row.get(0)?)?,
        name: row.get(1)?,
    })
}

fn row_to_quote(row: &rusqlite::Row<'_>) -> rusqlite::Result<Quote> {
    Ok(Quote {
        id: parse_uuid(0, row.get(0)?)?,
        text: row.get(1)?,
        created_at: parse_timestamp(2, row.get(2)?)?,
        author_id: parse_uuid(3, row.get(3)?)?,
    })
}

fn author_exists(conn: &Connection, id: Uuid) -> StoreResult<bool> {
    exists(conn, "SELECT 1 FROM authors WHERE id = ?", id)
}

fn tag_exists(conn: &Connection, id: Uuid) -> StoreResult<bool> {
    exists(conn, "SELECT 1 FROM tags WHERE id = ?", id)
}

fn quote_exists(conn: &Connection, id: Uuid) -> StoreResult<bool> {
    exists(conn, "SELECT 1 FROM quotes WHERE id = ?", id)
}

fn exists(conn: &Connection, sql: &str, id: Uuid) -> StoreResult<bool> {
    match conn.query_row(sql, params![id.to_string()], |row| row.get::<_, i64>(0)) {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn not_found_or(entity: &'static str, id: Uuid, err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => StoreError::not_found(entity, id.to_string()),
        other => other.into(),
    }
}

/// Translate SQLite uniqueness violations into field-keyed conflicts
fn map_constraint_error(err: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(code, Some(message)) = &err {
        if code.code == rusqlite::ErrorCode::ConstraintViolation {
            if message.contains("tags.name") {
                return StoreError::conflict("name", "Tag with this name already exists.");
            }
            if message.contains("authors.first_name") {
                return StoreError::conflict(
                    "non_field_errors",
                    "The fields first_name, last_name, birth_date must make a unique set.",
                );
            }
        }
    }
    err.into()
}

fn validate_author_fields(first_name: &str, last_name: &str) -> StoreResult<()> {
    if first_name.is_empty() {
        return Err(StoreError::validation(
            "first_name",
            "This field may not be blank.",
        ));
    }
    if first_name.len() > 100 {
        return Err(StoreError::validation(
            "first_name",
            "Ensure this field has no more than 100 characters.",
        ));
    }
    if last_name.len() > 100 {
        return Err(StoreError::validation(
            "last_name",
            "Ensure this field has no more than 100 characters.",
        ));
    }
    Ok(())
}

fn validate_tag_name(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::validation("name", "This field may not be blank."));
    }
    if name.len() > 50 {
        return Err(StoreError::validation(
            "name",
            "Ensure this field has no more than 50 characters.",
        ));
    }
    Ok(())
}
