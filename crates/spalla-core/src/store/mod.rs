//! Table-like store operations over SQLite.
//!
//! This module is the concrete backing for the remote-store contract the
//! board relies on: select with order/limit, insert, update by id, delete
//! by id. Connections are opened per operation by the sync layer; the
//! schema is applied idempotently on every open.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, StoreResultExt};

pub mod child_queries;
pub mod mentee_queries;
pub mod task_queries;
mod schema;

/// How many task rows a full load fetches, newest first.
pub const REMOTE_FETCH_LIMIT: u32 = 200;

/// Store connection and operations handler.
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Opens a store connection and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).store_context("Failed to open store connection")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }
}
