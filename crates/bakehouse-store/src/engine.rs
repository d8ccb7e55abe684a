//! Orchestration of the embedded SQLite engine: blank engines, hydration
//! from image bytes, and snapshots back to image bytes.
//!
//! Hydration and snapshotting go through the engine's online-backup API via
//! a uuid-named scratch file, copying every page between the file and the
//! in-memory database.

use std::{path::PathBuf, time::Duration};

use rusqlite::backup::Backup;
use tokio_rusqlite::Connection;

use crate::{Error, Result};

/// First bytes of every SQLite database image.
const IMAGE_MAGIC: &[u8] = b"SQLite format 3\0";

/// Pages copied per backup step. The source is in-memory with no concurrent
/// writer to yield to, so steps are large.
const PAGES_PER_STEP: std::os::raw::c_int = 512;

/// Disable foreign-key enforcement on a connection. The schema declares
/// foreign keys for documentation only; enforcement stays off so deletes do
/// not cascade and dangling references are the caller's responsibility.
async fn disable_foreign_keys(conn: &Connection) -> Result<()> {
  conn
    .call(|conn| {
      conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
      Ok(())
    })
    .await
    .map_err(Error::EngineLoad)
}

/// Open a blank in-memory engine.
pub(crate) async fn open_blank() -> Result<Connection> {
  let conn =
    Connection::open_in_memory().await.map_err(Error::EngineLoad)?;
  disable_foreign_keys(&conn).await?;
  Ok(conn)
}

fn scratch_path() -> PathBuf {
  std::env::temp_dir().join(format!("bakehouse-{}.db", uuid::Uuid::new_v4()))
}

/// Copy every page of `src` into `dst`, replacing `dst`'s entire contents.
fn copy_pages(
  src: &rusqlite::Connection,
  dst: &mut rusqlite::Connection,
) -> rusqlite::Result<()> {
  let backup = Backup::new(src, dst)?;
  backup.run_to_completion(PAGES_PER_STEP, Duration::ZERO, None)?;
  Ok(())
}

/// Load a database image into a fresh in-memory engine.
///
/// A new connection is built and returned only if every page of the image
/// reads cleanly; any previously running engine is untouched. Rejects bytes
/// without the SQLite header before touching the filesystem.
pub(crate) async fn hydrate(image: &[u8]) -> Result<Connection> {
  if !image.starts_with(IMAGE_MAGIC) {
    return Err(Error::CorruptImage("missing SQLite header".into()));
  }

  let conn = Connection::open_in_memory().await.map_err(Error::EngineLoad)?;
  disable_foreign_keys(&conn).await?;
  let image = image.to_vec();
  let outcome = conn
    .call(move |dst| {
      let path = scratch_path();
      let result = (|| {
        std::fs::write(&path, &image)
          .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;
        let src = rusqlite::Connection::open(&path)?;
        copy_pages(&src, dst)?;
        // The backup copies pages without parsing them; a structurally
        // broken image only shows up when the result is walked.
        let verdict: String =
          dst.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if verdict != "ok" {
          return Err(tokio_rusqlite::Error::Other(verdict.into()));
        }
        Ok(())
      })();
      let _ = std::fs::remove_file(&path);
      result
    })
    .await;

  match outcome {
    Ok(()) => Ok(conn),
    Err(e) => Err(Error::CorruptImage(e.to_string())),
  }
}

/// Serialize the engine's current state to image bytes.
pub(crate) async fn snapshot(conn: &Connection) -> Result<Vec<u8>> {
  let image = conn
    .call(move |src| {
      let path = scratch_path();
      let result = (|| {
        let mut dst = rusqlite::Connection::open(&path)?;
        copy_pages(src, &mut dst)?;
        drop(dst);
        std::fs::read(&path)
          .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))
      })();
      let _ = std::fs::remove_file(&path);
      result
    })
    .await?;
  Ok(image)
}
