//! Cache bucket storage. Buckets are named and versioned; activation
//! deletes every bucket whose name differs from the current one, which
//! is the only supported migration path.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, params};

use super::fetch::HttpResponse;
use crate::errors::AppResult;
use crate::utils::time::now_ms;

pub trait CacheStore {
    fn get(&self, cache: &str, key: &str) -> AppResult<Option<HttpResponse>>;
    fn put(&self, cache: &str, key: &str, resp: &HttpResponse) -> AppResult<()>;
    fn cache_names(&self) -> AppResult<Vec<String>>;
    fn delete_cache(&self, cache: &str) -> AppResult<()>;
    fn len(&self, cache: &str) -> AppResult<usize>;

    fn is_empty(&self, cache: &str) -> AppResult<bool> {
        Ok(self.len(cache)? == 0)
    }
}

/// Production store: all buckets share one SQLite table keyed by
/// `(cache, key)`. Last writer wins on a key, consistent with an
/// eventually-consistent cache.
pub struct SqliteCacheStore {
    conn: Connection,
}

impl SqliteCacheStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS cache_entries (
                cache        TEXT NOT NULL,
                key          TEXT NOT NULL,
                url          TEXT NOT NULL,
                status       INTEGER NOT NULL,
                content_type TEXT NOT NULL,
                body         BLOB NOT NULL,
                stored_at    INTEGER NOT NULL,
                PRIMARY KEY (cache, key)
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

impl CacheStore for SqliteCacheStore {
    fn get(&self, cache: &str, key: &str) -> AppResult<Option<HttpResponse>> {
        let entry = self
            .conn
            .query_row(
                "SELECT url, status, content_type, body
                 FROM cache_entries WHERE cache = ?1 AND key = ?2",
                params![cache, key],
                |row| {
                    Ok(HttpResponse {
                        url: row.get(0)?,
                        status: row.get(1)?,
                        content_type: row.get(2)?,
                        body: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(entry)
    }

    fn put(&self, cache: &str, key: &str, resp: &HttpResponse) -> AppResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO cache_entries
             (cache, key, url, status, content_type, body, stored_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                cache,
                key,
                resp.url,
                resp.status,
                resp.content_type,
                resp.body,
                now_ms()
            ],
        )?;
        Ok(())
    }

    fn cache_names(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT cache FROM cache_entries ORDER BY cache")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    fn delete_cache(&self, cache: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM cache_entries WHERE cache = ?1", params![cache])?;
        Ok(())
    }

    fn len(&self, cache: &str) -> AppResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM cache_entries WHERE cache = ?1",
            params![cache],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

/// In-memory fake for tests.
#[derive(Default)]
pub struct MemoryCacheStore {
    buckets: Mutex<HashMap<String, HashMap<String, HttpResponse>>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, cache: &str, key: &str) -> AppResult<Option<HttpResponse>> {
        Ok(self
            .buckets
            .lock()
            .unwrap()
            .get(cache)
            .and_then(|bucket| bucket.get(key))
            .cloned())
    }

    fn put(&self, cache: &str, key: &str, resp: &HttpResponse) -> AppResult<()> {
        self.buckets
            .lock()
            .unwrap()
            .entry(cache.to_string())
            .or_default()
            .insert(key.to_string(), resp.clone());
        Ok(())
    }

    fn cache_names(&self) -> AppResult<Vec<String>> {
        let mut names: Vec<String> = self.buckets.lock().unwrap().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn delete_cache(&self, cache: &str) -> AppResult<()> {
        self.buckets.lock().unwrap().remove(cache);
        Ok(())
    }

    fn len(&self, cache: &str) -> AppResult<usize> {
        Ok(self
            .buckets
            .lock()
            .unwrap()
            .get(cache)
            .map(|bucket| bucket.len())
            .unwrap_or(0))
    }
}
