//! Handlers for employee and payroll endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;

use bakehouse_core::staff::{Employee, NewEmployee, NewPayroll, Payroll};
use bakehouse_store::{Database, ImageStore};

use crate::{CreatedId, error::ApiError};

// ─── Employees ────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list_employees<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
  Ok(Json(db.get_employees().await?))
}

/// `GET /employees/{id}`
pub async fn get_employee<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError> {
  let employee = db
    .get_employee(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;
  Ok(Json(employee))
}

/// `POST /employees`
pub async fn create_employee<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewEmployee>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_employee(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /employees/{id}`
pub async fn update_employee<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewEmployee>,
) -> Result<StatusCode, ApiError> {
  db.update_employee(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /employees/{id}`
pub async fn delete_employee<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_employee(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Payrolls ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PayrollParams {
  pub employee_id: Option<i64>,
}

/// `GET /payrolls[?employee_id=<id>]`
pub async fn list_payrolls<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Query(params): Query<PayrollParams>,
) -> Result<Json<Vec<Payroll>>, ApiError> {
  Ok(Json(db.get_payrolls(params.employee_id).await?))
}

/// `POST /payrolls`
pub async fn create_payroll<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<NewPayroll>,
) -> Result<impl IntoResponse, ApiError> {
  let id = db.add_payroll(body).await?;
  Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// `PUT /payrolls/{id}`
pub async fn update_payroll<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<NewPayroll>,
) -> Result<StatusCode, ApiError> {
  db.update_payroll(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /payrolls/{id}`
pub async fn delete_payroll<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  db.delete_payroll(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
