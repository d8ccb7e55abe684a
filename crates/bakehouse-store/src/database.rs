//! [`Database`] — the lifecycle manager and the root of the data-access
//! facade.
//!
//! One `Database` owns the single engine handle for the process. Every
//! facade operation funnels through [`Database::handle`], which awaits the
//! one shared initialization before any SQL runs, so callers never sequence
//! initialization themselves and no caller can observe a partially-hydrated
//! engine.

use rusqlite::{OptionalExtension as _, types::Value};
use tokio::sync::{OnceCell, RwLock};
use tokio_rusqlite::Connection;

use crate::{
  Error, Result, engine,
  image::ImageStore,
  schema,
};

/// The embedded database: an in-memory engine plus the image store its full
/// state is flushed to after every mutation.
pub struct Database<S: ImageStore> {
  images: S,
  conn:   RwLock<Option<Connection>>,
  init:   OnceCell<()>,
}

impl<S: ImageStore> Database<S> {
  /// Build an uninitialized database over `images`. No I/O happens until the
  /// first operation (or an explicit [`Database::ensure_initialized`]).
  pub fn new(images: S) -> Self {
    Self {
      images,
      conn: RwLock::new(None),
      init: OnceCell::new(),
    }
  }

  // ─── Lifecycle ─────────────────────────────────────────────────────────

  /// Await the one shared initialization, starting it if nobody has yet.
  ///
  /// Concurrent first callers all wait on the same in-flight attempt; only
  /// one `initialize` ever runs per success. A failed attempt is not cached:
  /// the next caller retries from scratch.
  pub async fn ensure_initialized(&self) -> Result<()> {
    self.init.get_or_try_init(|| self.initialize()).await?;
    Ok(())
  }

  /// Synchronous, side-effect-free readiness probe.
  pub fn is_initialized(&self) -> bool {
    self.init.initialized()
  }

  /// Load the engine: hydrate from the stored image when one exists,
  /// otherwise bootstrap a fresh schema and persist its image immediately.
  async fn initialize(&self) -> Result<()> {
    let stored = self.images.load().await.map_err(Error::ImageRead)?;
    match stored {
      Some(image) => {
        let conn = engine::hydrate(&image).await?;
        *self.conn.write().await = Some(conn);
        tracing::info!(bytes = image.len(), "database hydrated from stored image");
      }
      None => {
        let conn = engine::open_blank().await?;
        schema::bootstrap(&conn).await?;
        self.persist_with(&conn).await?;
        *self.conn.write().await = Some(conn);
        tracing::info!("fresh database bootstrapped and persisted");
      }
    }
    Ok(())
  }

  /// The live engine handle; initializes first if needed.
  pub(crate) async fn handle(&self) -> Result<Connection> {
    self.ensure_initialized().await?;
    self.conn.read().await.clone().ok_or(Error::NotInitialized)
  }

  /// Swap in a replacement engine. Used by restore only.
  pub(crate) async fn replace_handle(&self, conn: Connection) {
    *self.conn.write().await = Some(conn);
  }

  // ─── Persistence ───────────────────────────────────────────────────────

  /// Serialize the engine's full state and write it to the image store,
  /// replacing the prior image.
  pub async fn persist(&self) -> Result<()> {
    let conn = self.handle().await?;
    self.persist_with(&conn).await
  }

  pub(crate) async fn persist_with(&self, conn: &Connection) -> Result<()> {
    let image = engine::snapshot(conn).await?;
    self.images.save(&image).await.map_err(Error::Persist)?;
    tracing::debug!(bytes = image.len(), "database image persisted");
    Ok(())
  }

  // ─── SQL primitives ────────────────────────────────────────────────────

  /// Run a read-only statement, mapping every result row. No persistence
  /// side effect.
  pub async fn query<T, F>(
    &self,
    sql: &str,
    params: Vec<Value>,
    map_row: F,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
    F: Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let conn = self.handle().await?;
    let sql = sql.to_owned();
    let rows = conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), |row| map_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// Run a read-only statement expected to yield at most one row.
  pub async fn query_single<T, F>(
    &self,
    sql: &str,
    params: Vec<Value>,
    map_row: F,
  ) -> Result<Option<T>>
  where
    T: Send + 'static,
    F: FnOnce(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let conn = self.handle().await?;
    let sql = sql.to_owned();
    let row = conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params_from_iter(params), map_row)
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  /// Run a mutating statement, then flush the full image.
  ///
  /// An [`Error::Sql`] means the engine rejected the statement. An
  /// [`Error::Persist`] means the statement applied in memory but the flush
  /// failed — durable storage is stale until the next successful flush.
  pub async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<usize> {
    let conn = self.handle().await?;
    let sql = sql.to_owned();
    let affected = conn
      .call(move |conn| {
        Ok(conn.execute(&sql, rusqlite::params_from_iter(params))?)
      })
      .await?;
    self.persist_with(&conn).await?;
    Ok(affected)
  }

  /// Run an insert, return the generated row id, then flush the full image.
  ///
  /// The insert and the id read happen in one engine-thread round-trip, so
  /// no other statement can interleave between them.
  pub async fn insert(&self, sql: &str, params: Vec<Value>) -> Result<i64> {
    let conn = self.handle().await?;
    let sql = sql.to_owned();
    let id = conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params_from_iter(params))?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    self.persist_with(&conn).await?;
    Ok(id)
  }
}
