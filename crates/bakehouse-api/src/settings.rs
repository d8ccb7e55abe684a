//! Handlers for settings, user accounts, and PIN verification.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use bakehouse_core::settings::{
  AdminSettings, LoginOutcome, NewUserAccount, UserAccount,
};
use bakehouse_store::{Database, ImageStore};

use crate::error::ApiError;

// ─── Settings ─────────────────────────────────────────────────────────────────

/// `GET /settings`
pub async fn get_settings<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<AdminSettings>, ApiError> {
  Ok(Json(db.get_admin_settings().await?))
}

/// `PUT /settings` — replaces the singleton row.
pub async fn update_settings<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<AdminSettings>,
) -> Result<Json<AdminSettings>, ApiError> {
  db.update_admin_settings(body).await?;
  Ok(Json(db.get_admin_settings().await?))
}

// ─── Authentication ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PinBody {
  pub pin: String,
}

#[derive(Debug, Deserialize)]
pub struct MenuPinBody {
  pub menu_id: String,
  pub pin:     String,
}

#[derive(Debug, Serialize)]
pub struct Verification {
  pub valid: bool,
}

/// `POST /login` — body: `{"pin":"123456"}`
pub async fn login<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<PinBody>,
) -> Result<Json<LoginOutcome>, ApiError> {
  Ok(Json(db.login(&body.pin).await?))
}

/// `POST /verify-pin`
pub async fn verify_pin<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<PinBody>,
) -> Result<Json<Verification>, ApiError> {
  let valid = db.verify_pin(&body.pin).await?;
  Ok(Json(Verification { valid }))
}

/// `POST /verify-menu-pin`
pub async fn verify_menu_pin<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<MenuPinBody>,
) -> Result<Json<Verification>, ApiError> {
  let valid = db.verify_menu_pin(&body.menu_id, &body.pin).await?;
  Ok(Json(Verification { valid }))
}

// ─── Users ────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list_users<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
) -> Result<Json<Vec<UserAccount>>, ApiError> {
  Ok(Json(db.get_users().await?))
}

/// `PUT /users` — replaces the whole user list.
pub async fn replace_users<S: ImageStore>(
  State(db): State<Arc<Database<S>>>,
  Json(body): Json<Vec<NewUserAccount>>,
) -> Result<Json<Vec<UserAccount>>, ApiError> {
  Ok(Json(db.replace_users(body).await?))
}
