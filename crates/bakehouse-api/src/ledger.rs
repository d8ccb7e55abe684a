//! Handlers for bookkeeping and asset endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use bakehouse_core::ledger::{
  Asset, BookkeepingEntry, NewAsset, NewBookkeepingEntry,
};
use bakehouse_store::{Database, ImageStore};

use crate::{CreatedId, error::ApiError};

// ─── Bookkeeping ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RangeParams {
  pub from: Option<NaiveDate>,
  pub to:   Option<NaiveDate>,
}

/// `GET /bookkeeping[?from=YYYY-MM-DD&to=YYYY-MM-DD]`
pub async fn list_entries<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Query(params): Query<RangeParams>,
) -> Result<Json<Vec<BookkeepingEntry>>, ApiError> {
  Ok(Json(db.get_bookkeeping_entries(params.from, params.to).await?))
}

/// `POST /bookkeeping`
pub async fn create_entry<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewBookkeepingEntry>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_bookkeeping_entry(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /bookkeeping/{id}`
pub async fn update_entry<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewBookkeepingEntry>,
) -> Result<StatusCode, ApiError> {
  db.update_bookkeeping_entry(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /bookkeeping/{id}`
pub async fn delete_entry<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_bookkeeping_entry(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Assets ───────────────────────────────────────────────────────────────────

/// `GET /assets`
pub async fn list_assets<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<Asset>>, ApiError> {
  Ok(Json(db.get_assets().await?))
}

/// `POST /assets`
pub async fn create_asset<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewAsset>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_asset(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /assets/{id}`
pub async fn update_asset<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewAsset>,
) -> Result<StatusCode, ApiError> {
  db.update_asset(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /assets/{id}`
pub async fn delete_asset<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_asset(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
