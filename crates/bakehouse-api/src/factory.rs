//! Handlers for factory endpoints: raw materials, productions, stock
//! reductions, recipes, and cost records.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;

use bakehouse_core::factory::{
  CostRecord, FactoryProduction, NewCostRecord, NewFactoryProduction,
  NewRawMaterial, NewStockReduction, ProductionDetail, RawMaterial,
  RecipeItem, StockReduction,
};
use bakehouse_store::{Database, ImageStore};

use crate::{CreatedId, error::ApiError};

// ─── Raw materials ────────────────────────────────────────────────────────────

/// `GET /raw-materials`
pub async fn list_materials<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<RawMaterial>>, ApiError> {
  Ok(Json(db.get_raw_materials().await?))
}

/// `POST /raw-materials`
pub async fn create_material<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewRawMaterial>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_raw_material(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /raw-materials/{id}`
pub async fn update_material<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewRawMaterial>,
) -> Result<StatusCode, ApiError> {
  db.update_raw_material(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /raw-materials/{id}`
pub async fn delete_material<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_raw_material(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Productions ──────────────────────────────────────────────────────────────

/// `GET /productions`
pub async fn list_productions<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<FactoryProduction>>, ApiError> {
  Ok(Json(db.get_factory_productions().await?))
}

/// `GET /productions/{id}` — header plus consumed materials.
pub async fn get_production<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<ProductionDetail>, ApiError> {
  let detail = db
    .get_factory_production(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("production {id} not found")))?;
  Ok(Json(detail))
}

/// `POST /productions`
pub async fn create_production<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewFactoryProduction>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_factory_production(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /productions/{id}` — rewrites the header and consumed materials.
pub async fn update_production<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewFactoryProduction>,
) -> Result<StatusCode, ApiError> {
  db.update_factory_production(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /productions/{id}`
pub async fn delete_production<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_factory_production(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Stock reductions ─────────────────────────────────────────────────────────

/// `GET /stock-reductions`
pub async fn list_reductions<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<StockReduction>>, ApiError> {
  Ok(Json(db.get_stock_reductions().await?))
}

/// `POST /stock-reductions`
pub async fn create_reduction<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewStockReduction>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_stock_reduction(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `DELETE /stock-reductions/{id}`
pub async fn delete_reduction<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_stock_reduction(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Recipes ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecipeItemBody {
  pub material_id: i64,
  pub quantity:    f64,
}

/// `GET /products/{id}/recipe`
pub async fn get_recipe<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<RecipeItem>>, ApiError> {
  Ok(Json(db.get_product_recipe(id).await?))
}

/// `PUT /products/{id}/recipe` — upserts one ingredient.
pub async fn set_recipe_item<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<RecipeItemBody>,
) -> Result<Json<CreatedId>, ApiError> {
  let row_id = db
    .set_recipe_item(id, body.material_id, body.quantity)
    .await?;
  Ok(Json(CreatedId { id: row_id }))
}

/// `DELETE /recipe-items/{id}`
pub async fn delete_recipe_item<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_recipe_item(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Cost records ─────────────────────────────────────────────────────────────

/// `GET /cost-records`
pub async fn list_cost_records<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<CostRecord>>, ApiError> {
  Ok(Json(db.get_cost_records().await?))
}

/// `PUT /cost-records` — upserts on the product.
pub async fn set_cost_record<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewCostRecord>,
) -> Result<Json<CreatedId>, ApiError> {
  let id = db.set_cost_record(body).await?;
  Ok(Json(CreatedId { id }))
}

/// `DELETE /cost-records/{id}`
pub async fn delete_cost_record<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_cost_record(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
