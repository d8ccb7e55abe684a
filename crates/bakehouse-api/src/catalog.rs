//! Handlers for master-data endpoints: cities, price areas, stores, and
//! products (with area prices and package contents).

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;

use bakehouse_core::catalog::{
  AreaPrice, City, NewPackageItem, NewProduct, NewStore, PackageItem,
  PriceArea, Product, Store, StoreOverview,
};
use bakehouse_store::{Database, ImageStore};

use crate::{CreatedId, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct NameBody {
  pub name: String,
}

// ─── Cities ───────────────────────────────────────────────────────────────────

/// `GET /cities`
pub async fn list_cities<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<City>>, ApiError> {
  Ok(Json(db.get_cities().await?))
}

/// `POST /cities` — body: `{"name":"Semarang"}`
pub async fn create_city<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NameBody>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_city(body.name).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /cities/{id}`
pub async fn rename_city<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NameBody>,
) -> Result<StatusCode, ApiError> {
  db.update_city(id, body.name).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /cities/{id}`
pub async fn delete_city<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_city(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Price areas ──────────────────────────────────────────────────────────────

/// `GET /price-areas`
pub async fn list_areas<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<PriceArea>>, ApiError> {
  Ok(Json(db.get_price_areas().await?))
}

/// `POST /price-areas`
pub async fn create_area<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NameBody>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_price_area(body.name).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /price-areas/{id}`
pub async fn rename_area<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NameBody>,
) -> Result<StatusCode, ApiError> {
  db.update_price_area(id, body.name).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /price-areas/{id}`
pub async fn delete_area<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_price_area(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Stores ───────────────────────────────────────────────────────────────────

/// `GET /stores`
pub async fn list_stores<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<StoreOverview>>, ApiError> {
  Ok(Json(db.get_stores().await?))
}

/// `GET /stores/{id}`
pub async fn get_store<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<Store>, ApiError> {
  let store = db
    .get_store(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("store {id} not found")))?;
  Ok(Json(store))
}

/// `POST /stores`
pub async fn create_store<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewStore>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_store(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /stores/{id}`
pub async fn update_store<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewStore>,
) -> Result<StatusCode, ApiError> {
  db.update_store(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /stores/{id}`
pub async fn delete_store<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_store(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Products ─────────────────────────────────────────────────────────────────

/// `GET /products`
pub async fn list_products<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<Product>>, ApiError> {
  Ok(Json(db.get_products().await?))
}

/// `GET /products/{id}`
pub async fn get_product<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
  let product = db
    .get_product(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;
  Ok(Json(product))
}

/// `POST /products`
pub async fn create_product<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewProduct>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_product(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /products/{id}`
pub async fn update_product<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewProduct>,
) -> Result<StatusCode, ApiError> {
  db.update_product(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /products/{id}`
pub async fn delete_product<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_product(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Area prices ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AreaPriceBody {
  pub area_id: i64,
  pub price:   f64,
}

/// `GET /products/{id}/area-prices`
pub async fn list_area_prices<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<AreaPrice>>, ApiError> {
  Ok(Json(db.get_product_area_prices(id).await?))
}

/// `PUT /products/{id}/area-prices` — upserts on (product, area).
pub async fn set_area_price<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<AreaPriceBody>,
) -> Result<Json<CreatedId>, ApiError> {
  let row_id = db
    .set_product_area_price(id, body.area_id, body.price)
    .await?;
  Ok(Json(CreatedId { id: row_id }))
}

/// `DELETE /area-prices/{id}`
pub async fn delete_area_price<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_product_area_price(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Package contents ─────────────────────────────────────────────────────────

/// `GET /products/{id}/package-items`
pub async fn list_package_items<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<PackageItem>>, ApiError> {
  Ok(Json(db.get_package_items(id).await?))
}

/// `PUT /products/{id}/package-items` — replaces the contents wholesale.
pub async fn set_package_items<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<Vec<NewPackageItem>>,
) -> Result<StatusCode, ApiError> {
  db.set_package_items(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}
