use std::sync::{Arc, Mutex};

use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;

const STORED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The only boundary between the service and storage. Documents are flat
/// field maps stored as JSON, one row per document, keyed by a generated
/// id and tagged with their collection name.
#[derive(Clone)]
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Inserts a record into the named collection and returns the
    /// generated identifier. Records serialize to flat field maps; the
    /// typed models guarantee that shape. No retries; a storage fault
    /// surfaces as-is.
    pub fn insert<T: Serialize>(&self, collection: &str, record: &T) -> Result<String, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let body = serde_json::to_string(record)?;
        let created_at = Utc::now().naive_utc().format(STORED_AT_FORMAT).to_string();

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO documents (id, collection, body, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![id, collection, body, created_at],
        )?;

        tracing::debug!(collection, id = %id, "document inserted");
        Ok(id)
    }

    /// Returns up to `limit` documents from the named collection, newest
    /// first (insertion order descending, rowid as tiebreak). Each document
    /// carries its identifier and an ISO 8601 `created_at`.
    pub fn query(&self, collection: &str, limit: i64) -> Result<Vec<Value>, AppError> {
        // A negative LIMIT means "no limit" to SQLite; clamp it out.
        let limit = limit.max(0);

        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, body, created_at FROM documents
             WHERE collection = ?1
             ORDER BY created_at DESC, rowid DESC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![collection, limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut docs = vec![];
        for row in rows {
            let (id, body, created_at) = row?;
            docs.push(serialize_document(&id, &body, &created_at)?);
        }
        Ok(docs)
    }

    /// Distinct collection names. Advisory only; callers that cannot fail
    /// (the diagnostic endpoint) swallow the error into a degraded report.
    pub fn collection_names(&self) -> Result<Vec<String>, AppError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT DISTINCT collection FROM documents ORDER BY collection")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = vec![];
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, AppError> {
        self.conn
            .lock()
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))
    }
}

/// Transport serialization for one stored document: the body fields pass
/// through unchanged, `id` is merged in, and `created_at` is rendered as
/// ISO 8601. These are the only two fields with a rewrite rule.
fn serialize_document(id: &str, body: &str, created_at: &str) -> Result<Value, AppError> {
    let mut fields: Map<String, Value> = serde_json::from_str(body)?;

    let iso = NaiveDateTime::parse_from_str(created_at, STORED_AT_FORMAT)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_else(|_| created_at.to_string());

    fields.insert("id".to_string(), Value::String(id.to_string()));
    fields.insert("created_at".to_string(), Value::String(iso));

    Ok(Value::Object(fields))
}
