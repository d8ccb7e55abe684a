//! Handlers for delivery and return endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;

use bakehouse_core::sales::{
  DeliveryStatus, IndividualDelivery, IndividualDeliveryDetail,
  NewIndividualDelivery, NewSalesReturn, NewStoreDelivery, SalesReturn,
  SalesReturnDetail, StoreDelivery, StoreDeliveryDetail,
};
use bakehouse_store::{Database, ImageStore};

use crate::{CreatedId, error::ApiError};

// ─── Store deliveries ─────────────────────────────────────────────────────────

/// `GET /store-deliveries`
pub async fn list_store_deliveries<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<StoreDelivery>>, ApiError> {
  Ok(Json(db.get_store_deliveries().await?))
}

/// `GET /store-deliveries/{id}` — header plus line items.
pub async fn get_store_delivery<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<StoreDeliveryDetail>, ApiError> {
  let detail = db
    .get_store_delivery(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("delivery {id} not found")))?;
  Ok(Json(detail))
}

/// `POST /store-deliveries` — header plus line items in one body.
pub async fn create_store_delivery<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewStoreDelivery>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_store_delivery(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /store-deliveries/{id}` — rewrites the header and line items.
pub async fn update_store_delivery<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewStoreDelivery>,
) -> Result<StatusCode, ApiError> {
  db.update_store_delivery(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: DeliveryStatus,
}

/// `PUT /store-deliveries/{id}/status`
pub async fn set_delivery_status<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<StatusBody>,
) -> Result<StatusCode, ApiError> {
  db.set_store_delivery_status(id, body.status).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /store-deliveries/{id}`
pub async fn delete_store_delivery<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_store_delivery(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Individual deliveries ────────────────────────────────────────────────────

/// `GET /individual-deliveries`
pub async fn list_individual_deliveries<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<IndividualDelivery>>, ApiError> {
  Ok(Json(db.get_individual_deliveries().await?))
}

/// `GET /individual-deliveries/{id}`
pub async fn get_individual_delivery<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<IndividualDeliveryDetail>, ApiError> {
  let detail = db
    .get_individual_delivery(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("delivery {id} not found")))?;
  Ok(Json(detail))
}

/// `POST /individual-deliveries`
pub async fn create_individual_delivery<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewIndividualDelivery>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_individual_delivery(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /individual-deliveries/{id}` — rewrites the header and line items.
pub async fn update_individual_delivery<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewIndividualDelivery>,
) -> Result<StatusCode, ApiError> {
  db.update_individual_delivery(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /individual-deliveries/{id}`
pub async fn delete_individual_delivery<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_individual_delivery(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Returns ──────────────────────────────────────────────────────────────────

/// `GET /returns`
pub async fn list_returns<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<SalesReturn>>, ApiError> {
  Ok(Json(db.get_returns().await?))
}

/// `GET /returns/{id}`
pub async fn get_return<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<SalesReturnDetail>, ApiError> {
  let detail = db
    .get_return(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("return {id} not found")))?;
  Ok(Json(detail))
}

/// `POST /returns`
pub async fn create_return<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewSalesReturn>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_return(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /returns/{id}` — rewrites the header and line items.
pub async fn update_return<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewSalesReturn>,
) -> Result<StatusCode, ApiError> {
  db.update_return(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /returns/{id}`
pub async fn delete_return<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_return(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
