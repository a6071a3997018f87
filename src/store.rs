use std::fs;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::config;
use crate::error::AppError;
use crate::favorites::Favorites;

pub const FAVORITES_KEY: &str = "favorites";

/// Key-value store backed by a local SQLite file.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    pub fn open() -> Result<Self, AppError> {
        Self::open_at(&config::db_path()?)
    }

    pub fn open_at(db_path: &Path) -> Result<Self, AppError> {
        if let Some(dir) = db_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, AppError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), AppError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv(
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES(?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn load_favorites(&self) -> Result<Favorites, AppError> {
        let raw = self.get(FAVORITES_KEY)?;
        Ok(Favorites::decode(raw.as_deref()))
    }

    pub fn save_favorites(&self, favorites: &Favorites) -> Result<(), AppError> {
        self.put(FAVORITES_KEY, &favorites.encode())
    }
}
