//! JSON HTTP API for Bakehouse.
//!
//! Exposes an axum [`Router`] over a [`bakehouse_store::Database`]. Every
//! handler goes through the database's initialization gate, so the router can
//! serve requests immediately after startup; the first request pays for the
//! engine load.

pub mod backup;
pub mod catalog;
pub mod error;
pub mod factory;
pub mod ledger;
pub mod sales;
pub mod settings;
pub mod staff;

use std::sync::Arc;

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{delete, get, post, put},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use bakehouse_store::{Database, ImageStore};

pub use error::ApiError;

/// Restore uploads carry a whole database image.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Body of every create/upsert response.
#[derive(Debug, Serialize)]
pub struct CreatedId {
  pub id: i64,
}

/// Build a fully-materialised router for `db`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S: ImageStore>(db: Arc<Database<S>>) -> Router<()> {
  Router::new()
    // Master data
    .route("/cities", get(catalog::list_cities::<S>).post(catalog::create_city::<S>))
    .route("/cities/{id}", put(catalog::rename_city::<S>).delete(catalog::delete_city::<S>))
    .route("/price-areas", get(catalog::list_areas::<S>).post(catalog::create_area::<S>))
    .route("/price-areas/{id}", put(catalog::rename_area::<S>).delete(catalog::delete_area::<S>))
    .route("/stores", get(catalog::list_stores::<S>).post(catalog::create_store::<S>))
    .route(
      "/stores/{id}",
      get(catalog::get_store::<S>)
        .put(catalog::update_store::<S>)
        .delete(catalog::delete_store::<S>),
    )
    .route("/products", get(catalog::list_products::<S>).post(catalog::create_product::<S>))
    .route(
      "/products/{id}",
      get(catalog::get_product::<S>)
        .put(catalog::update_product::<S>)
        .delete(catalog::delete_product::<S>),
    )
    .route(
      "/products/{id}/area-prices",
      get(catalog::list_area_prices::<S>).put(catalog::set_area_price::<S>),
    )
    .route("/area-prices/{id}", delete(catalog::delete_area_price::<S>))
    .route(
      "/products/{id}/package-items",
      get(catalog::list_package_items::<S>).put(catalog::set_package_items::<S>),
    )
    // Sales
    .route(
      "/store-deliveries",
      get(sales::list_store_deliveries::<S>).post(sales::create_store_delivery::<S>),
    )
    .route(
      "/store-deliveries/{id}",
      get(sales::get_store_delivery::<S>)
        .put(sales::update_store_delivery::<S>)
        .delete(sales::delete_store_delivery::<S>),
    )
    .route("/store-deliveries/{id}/status", put(sales::set_delivery_status::<S>))
    .route(
      "/individual-deliveries",
      get(sales::list_individual_deliveries::<S>)
        .post(sales::create_individual_delivery::<S>),
    )
    .route(
      "/individual-deliveries/{id}",
      get(sales::get_individual_delivery::<S>)
        .put(sales::update_individual_delivery::<S>)
        .delete(sales::delete_individual_delivery::<S>),
    )
    .route("/returns", get(sales::list_returns::<S>).post(sales::create_return::<S>))
    .route(
      "/returns/{id}",
      get(sales::get_return::<S>)
        .put(sales::update_return::<S>)
        .delete(sales::delete_return::<S>),
    )
    // Staff
    .route("/employees", get(staff::list_employees::<S>).post(staff::create_employee::<S>))
    .route(
      "/employees/{id}",
      get(staff::get_employee::<S>)
        .put(staff::update_employee::<S>)
        .delete(staff::delete_employee::<S>),
    )
    .route("/payrolls", get(staff::list_payrolls::<S>).post(staff::create_payroll::<S>))
    .route(
      "/payrolls/{id}",
      put(staff::update_payroll::<S>).delete(staff::delete_payroll::<S>),
    )
    // Factory
    .route(
      "/raw-materials",
      get(factory::list_materials::<S>).post(factory::create_material::<S>),
    )
    .route(
      "/raw-materials/{id}",
      put(factory::update_material::<S>).delete(factory::delete_material::<S>),
    )
    .route(
      "/productions",
      get(factory::list_productions::<S>).post(factory::create_production::<S>),
    )
    .route(
      "/productions/{id}",
      get(factory::get_production::<S>)
        .put(factory::update_production::<S>)
        .delete(factory::delete_production::<S>),
    )
    .route(
      "/stock-reductions",
      get(factory::list_reductions::<S>).post(factory::create_reduction::<S>),
    )
    .route("/stock-reductions/{id}", delete(factory::delete_reduction::<S>))
    .route(
      "/products/{id}/recipe",
      get(factory::get_recipe::<S>).put(factory::set_recipe_item::<S>),
    )
    .route("/recipe-items/{id}", delete(factory::delete_recipe_item::<S>))
    .route(
      "/cost-records",
      get(factory::list_cost_records::<S>).put(factory::set_cost_record::<S>),
    )
    .route("/cost-records/{id}", delete(factory::delete_cost_record::<S>))
    // Ledger
    .route("/bookkeeping", get(ledger::list_entries::<S>).post(ledger::create_entry::<S>))
    .route(
      "/bookkeeping/{id}",
      put(ledger::update_entry::<S>).delete(ledger::delete_entry::<S>),
    )
    .route("/assets", get(ledger::list_assets::<S>).post(ledger::create_asset::<S>))
    .route(
      "/assets/{id}",
      put(ledger::update_asset::<S>).delete(ledger::delete_asset::<S>),
    )
    // Settings & auth
    .route(
      "/settings",
      get(settings::get_settings::<S>).put(settings::update_settings::<S>),
    )
    .route("/login", post(settings::login::<S>))
    .route("/verify-pin", post(settings::verify_pin::<S>))
    .route("/verify-menu-pin", post(settings::verify_menu_pin::<S>))
    .route("/users", get(settings::list_users::<S>).put(settings::replace_users::<S>))
    // Backup
    .route("/backup", get(backup::download::<S>))
    .route("/restore", post(backup::restore::<S>))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .layer(TraceLayer::new_for_http())
    .with_state(db)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use bakehouse_store::MemoryImageStore;
  use tower::ServiceExt as _;

  fn make_db() -> Arc<Database<MemoryImageStore>> {
    Arc::new(Database::new(MemoryImageStore::new()))
  }

  async fn send(
    db: Arc<Database<MemoryImageStore>>,
    method: &str,
    uri: &str,
    body: Option<&str>,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(json) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(json.to_string())
      }
      None => Body::empty(),
    };
    let req = builder.body(body).unwrap();
    router(db).oneshot(req).await.unwrap()
  }

  async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn login_with_seeded_admin_pin() {
    let db = make_db();
    let resp = send(db, "POST", "/login", Some(r#"{"pin":"123456"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["role"], "admin");
  }

  #[tokio::test]
  async fn login_with_unknown_pin_fails() {
    let db = make_db();
    let resp = send(db, "POST", "/login", Some(r#"{"pin":"000000"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["role"], serde_json::Value::Null);
  }

  #[tokio::test]
  async fn city_create_and_list_round_trip() {
    let db = make_db();

    let resp = send(
      db.clone(),
      "POST",
      "/cities",
      Some(r#"{"name":"Semarang"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["id"], 1);

    let resp = send(db, "GET", "/cities", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Semarang");
  }

  #[tokio::test]
  async fn missing_store_returns_404() {
    let db = make_db();
    let resp = send(db, "GET", "/stores/42", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn backup_download_has_attachment_headers() {
    let db = make_db();
    let resp = send(db, "GET", "/backup", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert_eq!(ct, "application/octet-stream");
    let cd = resp
      .headers()
      .get(header::CONTENT_DISPOSITION)
      .unwrap()
      .to_str()
      .unwrap();
    assert!(cd.contains("bakehouse_backup_"), "disposition: {cd}");
    assert!(cd.ends_with(".db\""), "disposition: {cd}");
  }

  #[tokio::test]
  async fn restore_of_corrupt_bytes_is_422_and_state_survives() {
    let db = make_db();
    send(db.clone(), "POST", "/cities", Some(r#"{"name":"Semarang"}"#)).await;

    let req = Request::builder()
      .method("POST")
      .uri("/restore")
      .body(Body::from("not a database image"))
      .unwrap();
    let resp = router(db.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = send(db, "GET", "/cities", None).await;
    let json = body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn backup_restores_into_another_instance() {
    let source = make_db();
    send(source.clone(), "POST", "/cities", Some(r#"{"name":"Semarang"}"#)).await;

    let resp = send(source, "GET", "/backup", None).await;
    let image = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    let target = make_db();
    let req = Request::builder()
      .method("POST")
      .uri("/restore")
      .body(Body::from(image))
      .unwrap();
    let resp = router(target.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(target, "GET", "/cities", None).await;
    let json = body_json(resp).await;
    assert_eq!(json[0]["name"], "Semarang");
  }

  #[tokio::test]
  async fn delivery_status_update_via_api() {
    let db = make_db();
    send(db.clone(), "POST", "/cities", Some(r#"{"name":"Semarang"}"#)).await;
    send(db.clone(), "POST", "/price-areas", Some(r#"{"name":"Kota"}"#)).await;
    send(
      db.clone(),
      "POST",
      "/stores",
      Some(r#"{"name":"Toko Maju","city_id":1,"area_id":1,"address":null,"phone":null}"#),
    )
    .await;

    let resp = send(
      db.clone(),
      "POST",
      "/store-deliveries",
      Some(
        r#"{"store_id":1,"employee_id":null,"delivery_date":"2024-03-01","note":null,"items":[]}"#,
      ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(
      db.clone(),
      "PUT",
      "/store-deliveries/1/status",
      Some(r#"{"status":"paid"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(db, "GET", "/store-deliveries/1", None).await;
    let json = body_json(resp).await;
    assert_eq!(json["delivery"]["status"], "paid");
  }
}
