//! Handlers for backup download and restore upload.

use std::sync::Arc;

use axum::{
  extract::State,
  http::{StatusCode, header},
  response::IntoResponse,
};
use bytes::Bytes;

use bakehouse_store::{Database, ImageStore};

use crate::error::ApiError;

/// `GET /backup` — the full database image as a date-stamped download.
pub async fn download<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<impl IntoResponse, ApiError> {
  let backup = db.export_image().await?;
  let headers = [
    (header::CONTENT_TYPE, "application/octet-stream".to_string()),
    (
      header::CONTENT_DISPOSITION,
      format!("attachment; filename=\"{}\"", backup.filename),
    ),
  ];
  Ok((headers, backup.bytes))
}

/// `POST /restore` — body is a raw database image; replaces all state.
///
/// Corrupt bytes are rejected with 422 and the running database is left
/// untouched.
pub async fn restore<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  body: Bytes,
) -> Result<StatusCode, ApiError> {
  db.import_image(&body).await?;
  Ok(StatusCode::NO_CONTENT)
}
