//! Full-image backup and restore.
//!
//! A backup is the raw database image, exactly what the image store holds.
//! Restore replaces the entire running state; nothing is merged.

use bytes::Bytes;
use chrono::Utc;

use crate::{Database, Result, engine, image::ImageStore};

/// Name prefix of exported backup artifacts.
pub const PRODUCT_NAME: &str = "bakehouse";

/// A downloadable backup artifact.
#[derive(Debug, Clone)]
pub struct BackupFile {
  /// `bakehouse_backup_<YYYY-MM-DD>.db`
  pub filename: String,
  /// Raw database image, `application/octet-stream` on the wire.
  pub bytes:    Bytes,
}

impl<S: ImageStore> Database<S> {
  /// Serialize the current state into a date-stamped backup artifact.
  ///
  /// Pure read: no mutation, no flush.
  pub async fn export_image(&self) -> Result<BackupFile> {
    let conn = self.handle().await?;
    let image = engine::snapshot(&conn).await?;
    let stamp = Utc::now().format("%Y-%m-%d");
    Ok(BackupFile {
      filename: format!("{PRODUCT_NAME}_backup_{stamp}.db"),
      bytes:    Bytes::from(image),
    })
  }

  /// Replace the entire database with `image` and flush it.
  ///
  /// The image is hydrated into a fresh engine first; if its bytes cannot be
  /// loaded this returns [`crate::Error::CorruptImage`] and the running
  /// database is untouched. Only after a clean load is the live handle
  /// swapped and the store updated.
  pub async fn import_image(&self, image: &[u8]) -> Result<()> {
    self.ensure_initialized().await?;
    let fresh = engine::hydrate(image).await?;
    self.replace_handle(fresh).await;
    self.persist().await?;
    tracing::info!(bytes = image.len(), "database restored from backup image");
    Ok(())
  }
}
