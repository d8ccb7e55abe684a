//! Integration tests for [`Database`] against an in-memory image store.

use std::sync::Arc;

use chrono::NaiveDate;

use bakehouse_core::{
  catalog::{NewProduct, NewStore, ProductKind},
  factory::{NewFactoryProduction, NewProductionMaterial, NewRawMaterial, NewStockReduction},
  ledger::{EntryKind, NewBookkeepingEntry},
  sales::{DeliveryStatus, NewLineItem, NewSalesReturn, NewStoreDelivery},
  settings::{MenuLock, NewUserAccount, UserRole},
  staff::NewEmployee,
};

use crate::{Database, Error, MemoryImageStore, schema};

fn date(s: &str) -> NaiveDate {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

async fn fresh() -> (Arc<MemoryImageStore>, Database<Arc<MemoryImageStore>>) {
  let images = Arc::new(MemoryImageStore::new());
  let db = Database::new(images.clone());
  db.ensure_initialized().await.expect("cold start");
  (images, db)
}

fn product(name: &str, stock: f64) -> NewProduct {
  NewProduct {
    name: name.into(),
    unit: "box".into(),
    base_price: 10_000.0,
    stock,
    kind: ProductKind::Single,
  }
}

async fn seed_store(db: &Database<Arc<MemoryImageStore>>) -> (i64, i64, i64) {
  let city_id = db.add_city("Semarang".into()).await.unwrap();
  let area_id = db.add_price_area("Kota".into()).await.unwrap();
  let store_id = db
    .add_store(NewStore {
      name:    "Toko Maju".into(),
      city_id,
      area_id,
      address: None,
      phone:   None,
    })
    .await
    .unwrap();
  (city_id, area_id, store_id)
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn cold_start_seeds_default_users() {
  let (_, db) = fresh().await;

  let users = db.get_users().await.unwrap();
  assert_eq!(users.len(), 2);
  assert_eq!(users[0].name, "Admin");
  assert_eq!(users[0].role, UserRole::Admin);
  assert_eq!(users[0].pin, "123456");
  assert_eq!(users[1].name, "Kasir");
  assert_eq!(users[1].role, UserRole::Kasir);
  assert_eq!(users[1].pin, "654321");
}

#[tokio::test]
async fn cold_start_persists_fresh_image() {
  let (images, db) = fresh().await;
  assert!(db.is_initialized());
  assert!(images.stored().is_some(), "bootstrap must flush an image");
}

#[tokio::test]
async fn bootstrap_twice_never_duplicates_seeds() {
  let (_, db) = fresh().await;

  let conn = db.handle().await.unwrap();
  schema::bootstrap(&conn).await.unwrap();

  assert_eq!(db.get_users().await.unwrap().len(), 2);
  let settings = db.get_admin_settings().await.unwrap();
  assert_eq!(settings.pin, "123456");
  assert_eq!(settings.user_list.len(), 2);
}

#[tokio::test]
async fn concurrent_first_calls_share_one_initialization() {
  let images = Arc::new(MemoryImageStore::new());
  let db = Arc::new(Database::new(images.clone()));

  let mut handles = Vec::new();
  for _ in 0..8 {
    let db = db.clone();
    handles.push(tokio::spawn(async move { db.ensure_initialized().await }));
  }
  for handle in handles {
    handle.await.unwrap().unwrap();
  }

  assert!(db.is_initialized());
  // One bootstrap, one flush. A second initialize would have flushed again.
  assert_eq!(images.save_count(), 1);
  assert_eq!(db.get_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn initialization_failure_is_retryable() {
  let images = Arc::new(MemoryImageStore::new());
  images.set_fail_writes(true);
  let db = Database::new(images.clone());

  // Bootstrap succeeds in memory but the fresh-image flush fails.
  let err = db.ensure_initialized().await.unwrap_err();
  assert!(matches!(err, Error::Persist(_)));
  assert!(!db.is_initialized());

  images.set_fail_writes(false);
  db.ensure_initialized().await.unwrap();
  assert!(db.is_initialized());
  assert_eq!(db.get_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn restart_reads_back_mutations() {
  let (images, db) = fresh().await;
  let id = db.add_city("Semarang".into()).await.unwrap();
  drop(db);

  // A new Database over the same store simulates a process restart.
  let restarted = Database::new(images.clone());
  let cities = restarted.get_cities().await.unwrap();
  assert_eq!(cities.len(), 1);
  assert_eq!(cities[0].id, id);
  assert_eq!(cities[0].name, "Semarang");
}

#[tokio::test]
async fn persist_failure_surfaces_as_unsaved_data() {
  let (images, db) = fresh().await;
  images.set_fail_writes(true);

  let err = db.add_city("Kudus".into()).await.unwrap_err();
  assert!(matches!(err, Error::Persist(_)));

  // The in-memory mutation already happened; memory and storage disagree.
  let cities = db.get_cities().await.unwrap();
  assert_eq!(cities.len(), 1);

  images.set_fail_writes(false);
  let restarted = Database::new(images.clone());
  assert!(restarted.get_cities().await.unwrap().is_empty());
}

// ─── Backup / restore ────────────────────────────────────────────────────────

#[tokio::test]
async fn export_import_round_trips_every_table() {
  let (_, db) = fresh().await;
  let (_, area_id, store_id) = seed_store(&db).await;
  let product_id = db.add_product(product("Nastar", 12.0)).await.unwrap();
  db.set_product_area_price(product_id, area_id, 15_000.0)
    .await
    .unwrap();
  db.add_store_delivery(NewStoreDelivery {
    store_id,
    employee_id: None,
    delivery_date: date("2024-03-01"),
    note: None,
    items: vec![NewLineItem { product_id, quantity: 3.0, unit_price: 15_000.0 }],
  })
  .await
  .unwrap();

  let backup = db.export_image().await.unwrap();
  assert!(backup.filename.starts_with("bakehouse_backup_"));
  assert!(backup.filename.ends_with(".db"));

  let (_, other) = fresh().await;
  other.import_image(&backup.bytes).await.unwrap();

  assert_eq!(
    other.get_cities().await.unwrap(),
    db.get_cities().await.unwrap()
  );
  assert_eq!(
    other.get_products().await.unwrap(),
    db.get_products().await.unwrap()
  );
  assert_eq!(
    other.get_store_deliveries().await.unwrap(),
    db.get_store_deliveries().await.unwrap()
  );
  assert_eq!(other.get_users().await.unwrap(), db.get_users().await.unwrap());
}

#[tokio::test]
async fn export_does_not_flush() {
  let (images, db) = fresh().await;
  let saves_before = images.save_count();
  db.export_image().await.unwrap();
  assert_eq!(images.save_count(), saves_before);
}

#[tokio::test]
async fn corrupt_restore_is_rejected_and_leaves_data_intact() {
  let (_, db) = fresh().await;
  db.add_city("Semarang".into()).await.unwrap();

  let err = db.import_image(b"definitely not a database").await.unwrap_err();
  assert!(matches!(err, Error::CorruptImage(_)));

  let cities = db.get_cities().await.unwrap();
  assert_eq!(cities.len(), 1);
  assert_eq!(cities[0].name, "Semarang");
}

#[tokio::test]
async fn truncated_image_is_rejected() {
  let (_, db) = fresh().await;
  let backup = db.export_image().await.unwrap();

  // A valid header followed by garbage must not replace the live engine.
  let mut mangled = backup.bytes.to_vec();
  mangled.truncate(100);
  let err = db.import_image(&mangled).await.unwrap_err();
  assert!(matches!(err, Error::CorruptImage(_)));
  assert_eq!(db.get_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn restore_updates_durable_storage() {
  let (_, db) = fresh().await;
  db.add_city("Semarang".into()).await.unwrap();
  let backup = db.export_image().await.unwrap();

  let (other_images, other) = fresh().await;
  other.import_image(&backup.bytes).await.unwrap();

  let restarted = Database::new(other_images.clone());
  assert_eq!(restarted.get_cities().await.unwrap().len(), 1);
}

// ─── Cities & stores ─────────────────────────────────────────────────────────

#[tokio::test]
async fn add_city_returns_first_id() {
  let (_, db) = fresh().await;
  let id = db.add_city("Semarang".into()).await.unwrap();
  assert_eq!(id, 1);

  let cities = db.get_cities().await.unwrap();
  assert_eq!(cities.len(), 1);
  assert_eq!(cities[0].id, 1);
  assert_eq!(cities[0].name, "Semarang");
}

#[tokio::test]
async fn update_and_delete_city() {
  let (_, db) = fresh().await;
  let id = db.add_city("Semarang".into()).await.unwrap();
  db.update_city(id, "Kudus".into()).await.unwrap();
  assert_eq!(db.get_cities().await.unwrap()[0].name, "Kudus");

  db.delete_city(id).await.unwrap();
  assert!(db.get_cities().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_city_leaves_store_reference_dangling() {
  let (_, db) = fresh().await;
  let (city_id, _, store_id) = seed_store(&db).await;

  db.delete_city(city_id).await.unwrap();

  // No cascade, no auto-null: the store still points at the deleted id.
  let store = db.get_store(store_id).await.unwrap().unwrap();
  assert_eq!(store.city_id, city_id);

  let overview = db.get_stores().await.unwrap();
  assert_eq!(overview.len(), 1);
  assert_eq!(overview[0].city_name, None);
  assert_eq!(overview[0].area_name.as_deref(), Some("Kota"));
}

#[tokio::test]
async fn store_crud_round_trip() {
  let (_, db) = fresh().await;
  let (city_id, area_id, store_id) = seed_store(&db).await;

  db.update_store(
    store_id,
    NewStore {
      name:    "Toko Maju Jaya".into(),
      city_id,
      area_id,
      address: Some("Jl. Pandanaran 1".into()),
      phone:   None,
    },
  )
  .await
  .unwrap();

  let store = db.get_store(store_id).await.unwrap().unwrap();
  assert_eq!(store.name, "Toko Maju Jaya");
  assert_eq!(store.address.as_deref(), Some("Jl. Pandanaran 1"));
  assert_eq!(store.phone, None);

  db.delete_store(store_id).await.unwrap();
  assert!(db.get_store(store_id).await.unwrap().is_none());
}

// ─── Products & prices ───────────────────────────────────────────────────────

#[tokio::test]
async fn set_product_area_price_upserts() {
  let (_, db) = fresh().await;
  let area_id = db.add_price_area("Kota".into()).await.unwrap();
  let product_id = db.add_product(product("Nastar", 0.0)).await.unwrap();

  db.set_product_area_price(product_id, area_id, 15_000.0)
    .await
    .unwrap();
  db.set_product_area_price(product_id, area_id, 17_500.0)
    .await
    .unwrap();

  let prices = db.get_product_area_prices(product_id).await.unwrap();
  assert_eq!(prices.len(), 1);
  assert_eq!(prices[0].price, 17_500.0);
}

#[tokio::test]
async fn package_items_are_replaced_wholesale() {
  let (_, db) = fresh().await;
  let a = db.add_product(product("Nastar", 0.0)).await.unwrap();
  let b = db.add_product(product("Kastengel", 0.0)).await.unwrap();
  let package = db
    .add_product(NewProduct { kind: ProductKind::Package, ..product("Parcel", 0.0) })
    .await
    .unwrap();

  db.set_package_items(
    package,
    vec![
      bakehouse_core::catalog::NewPackageItem { product_id: a, quantity: 2.0 },
      bakehouse_core::catalog::NewPackageItem { product_id: b, quantity: 1.0 },
    ],
  )
  .await
  .unwrap();
  db.set_package_items(
    package,
    vec![bakehouse_core::catalog::NewPackageItem { product_id: a, quantity: 3.0 }],
  )
  .await
  .unwrap();

  let items = db.get_package_items(package).await.unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].product_id, a);
  assert_eq!(items[0].quantity, 3.0);
}

#[tokio::test]
async fn product_kind_check_constraint_rejects_bad_values() {
  let (_, db) = fresh().await;
  let err = db
    .insert(
      "INSERT INTO products (name, unit, base_price, stock, kind)
       VALUES ('x', 'box', 1, 0, 'bundle')",
      vec![],
    )
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Sql(_)));
}

// ─── Deliveries & returns ────────────────────────────────────────────────────

#[tokio::test]
async fn store_delivery_composite_add_and_stock() {
  let (_, db) = fresh().await;
  let (_, _, store_id) = seed_store(&db).await;
  let product_id = db.add_product(product("Nastar", 10.0)).await.unwrap();

  let delivery_id = db
    .add_store_delivery(NewStoreDelivery {
      store_id,
      employee_id: None,
      delivery_date: date("2024-03-01"),
      note: Some("morning run".into()),
      items: vec![NewLineItem { product_id, quantity: 4.0, unit_price: 12_000.0 }],
    })
    .await
    .unwrap();

  let detail = db.get_store_delivery(delivery_id).await.unwrap().unwrap();
  assert_eq!(detail.delivery.status, DeliveryStatus::Unpaid);
  assert_eq!(detail.items.len(), 1);
  assert_eq!(detail.items[0].quantity, 4.0);

  let stock = db.get_product(product_id).await.unwrap().unwrap().stock;
  assert_eq!(stock, 6.0);

  db.set_store_delivery_status(delivery_id, DeliveryStatus::Paid)
    .await
    .unwrap();
  let detail = db.get_store_delivery(delivery_id).await.unwrap().unwrap();
  assert_eq!(detail.delivery.status, DeliveryStatus::Paid);

  db.delete_store_delivery(delivery_id).await.unwrap();
  assert!(db.get_store_delivery(delivery_id).await.unwrap().is_none());
}

#[tokio::test]
async fn updating_a_delivery_replaces_items_and_rebalances_stock() {
  let (_, db) = fresh().await;
  let (_, _, store_id) = seed_store(&db).await;
  let nastar = db.add_product(product("Nastar", 10.0)).await.unwrap();
  let kastengel = db.add_product(product("Kastengel", 10.0)).await.unwrap();

  let delivery_id = db
    .add_store_delivery(NewStoreDelivery {
      store_id,
      employee_id: None,
      delivery_date: date("2024-03-01"),
      note: None,
      items: vec![NewLineItem { product_id: nastar, quantity: 4.0, unit_price: 12_000.0 }],
    })
    .await
    .unwrap();
  assert_eq!(db.get_product(nastar).await.unwrap().unwrap().stock, 6.0);

  db.update_store_delivery(
    delivery_id,
    NewStoreDelivery {
      store_id,
      employee_id: None,
      delivery_date: date("2024-03-02"),
      note: None,
      items: vec![NewLineItem { product_id: kastengel, quantity: 2.0, unit_price: 11_000.0 }],
    },
  )
  .await
  .unwrap();

  // The old item's quantity came back; the new item's quantity left.
  assert_eq!(db.get_product(nastar).await.unwrap().unwrap().stock, 10.0);
  assert_eq!(db.get_product(kastengel).await.unwrap().unwrap().stock, 8.0);

  let detail = db.get_store_delivery(delivery_id).await.unwrap().unwrap();
  assert_eq!(detail.delivery.delivery_date, date("2024-03-02"));
  assert_eq!(detail.items.len(), 1);
  assert_eq!(detail.items[0].product_id, kastengel);
}

#[tokio::test]
async fn failed_line_item_leaves_header_behind() {
  let (_, db) = fresh().await;
  let (_, _, store_id) = seed_store(&db).await;

  // Second item violates NOT NULL via a bad statement issued mid-sequence.
  // Composite writes are not transactional: the header and first item stay.
  let delivery_id = db
    .add_store_delivery(NewStoreDelivery {
      store_id,
      employee_id: None,
      delivery_date: date("2024-03-01"),
      note: None,
      items: vec![],
    })
    .await
    .unwrap();
  let err = db
    .insert(
      "INSERT INTO delivery_items (delivery_id, delivery_kind, product_id, quantity, unit_price)
       VALUES (?1, 'truck', 1, 1, 1)",
      vec![delivery_id.into()],
    )
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Sql(_)));

  let headers = db.get_store_deliveries().await.unwrap();
  assert_eq!(headers.len(), 1, "orphaned header persists");
}

#[tokio::test]
async fn returns_restock_products() {
  let (_, db) = fresh().await;
  let (_, _, store_id) = seed_store(&db).await;
  let product_id = db.add_product(product("Nastar", 5.0)).await.unwrap();

  let return_id = db
    .add_return(NewSalesReturn {
      store_id,
      return_date: date("2024-03-08"),
      note: None,
      items: vec![NewLineItem { product_id, quantity: 2.0, unit_price: 12_000.0 }],
    })
    .await
    .unwrap();

  let stock = db.get_product(product_id).await.unwrap().unwrap().stock;
  assert_eq!(stock, 7.0);

  let detail = db.get_return(return_id).await.unwrap().unwrap();
  assert_eq!(detail.items.len(), 1);

  db.delete_return(return_id).await.unwrap();
  assert!(db.get_return(return_id).await.unwrap().is_none());
}

// ─── Staff ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn employee_optional_fields_round_trip() {
  let (_, db) = fresh().await;
  let id = db
    .add_employee(NewEmployee {
      name:       "Sari".into(),
      role:       "baker".into(),
      phone:      None,
      address:    Some("Jl. Melati 3".into()),
      birth_date: Some(date("1994-05-17")),
      hired_date: None,
      daily_wage: 90_000.0,
    })
    .await
    .unwrap();

  let employee = db.get_employee(id).await.unwrap().unwrap();
  assert_eq!(employee.phone, None);
  assert_eq!(employee.address.as_deref(), Some("Jl. Melati 3"));
  assert_eq!(employee.birth_date, Some(date("1994-05-17")));
  assert_eq!(employee.hired_date, None);
}

#[tokio::test]
async fn payrolls_filter_by_employee() {
  let (_, db) = fresh().await;
  let sari = db
    .add_employee(NewEmployee {
      name:       "Sari".into(),
      role:       "baker".into(),
      phone:      None,
      address:    None,
      birth_date: None,
      hired_date: None,
      daily_wage: 90_000.0,
    })
    .await
    .unwrap();

  db.add_payroll(bakehouse_core::staff::NewPayroll {
    employee_id:  sari,
    period_start: date("2024-03-01"),
    period_end:   date("2024-03-31"),
    base_pay:     2_000_000.0,
    bonus:        150_000.0,
    deductions:   50_000.0,
    total:        2_100_000.0,
    paid_date:    None,
    note:         None,
  })
  .await
  .unwrap();

  assert_eq!(db.get_payrolls(Some(sari)).await.unwrap().len(), 1);
  assert_eq!(db.get_payrolls(Some(sari + 1)).await.unwrap().len(), 0);
  assert_eq!(db.get_payrolls(None).await.unwrap().len(), 1);
}

// ─── Factory ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn production_moves_stock_both_ways() {
  let (_, db) = fresh().await;
  let product_id = db.add_product(product("Nastar", 0.0)).await.unwrap();
  let flour = db
    .add_raw_material(NewRawMaterial {
      name:        "Flour".into(),
      unit:        "kg".into(),
      stock:       100.0,
      unit_cost:   12_000.0,
      expiry_date: None,
    })
    .await
    .unwrap();

  let production_id = db
    .add_factory_production(NewFactoryProduction {
      product_id,
      production_date: date("2024-03-02"),
      quantity: 20.0,
      note: None,
      materials: vec![NewProductionMaterial { material_id: flour, quantity: 5.0 }],
    })
    .await
    .unwrap();

  assert_eq!(db.get_product(product_id).await.unwrap().unwrap().stock, 20.0);
  assert_eq!(db.get_raw_material(flour).await.unwrap().unwrap().stock, 95.0);

  let detail = db
    .get_factory_production(production_id)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(detail.materials.len(), 1);
}

#[tokio::test]
async fn stock_reduction_subtracts_material_stock() {
  let (_, db) = fresh().await;
  let flour = db
    .add_raw_material(NewRawMaterial {
      name:        "Flour".into(),
      unit:        "kg".into(),
      stock:       40.0,
      unit_cost:   12_000.0,
      expiry_date: None,
    })
    .await
    .unwrap();

  db.add_stock_reduction(NewStockReduction {
    material_id:    flour,
    reduction_date: date("2024-03-05"),
    quantity:       4.0,
    reason:         "spoiled".into(),
  })
  .await
  .unwrap();

  assert_eq!(db.get_raw_material(flour).await.unwrap().unwrap().stock, 36.0);
  assert_eq!(db.get_stock_reductions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn recipe_items_upsert() {
  let (_, db) = fresh().await;
  let product_id = db.add_product(product("Nastar", 0.0)).await.unwrap();
  let flour = db
    .add_raw_material(NewRawMaterial {
      name:        "Flour".into(),
      unit:        "kg".into(),
      stock:       0.0,
      unit_cost:   12_000.0,
      expiry_date: None,
    })
    .await
    .unwrap();

  db.set_recipe_item(product_id, flour, 0.5).await.unwrap();
  db.set_recipe_item(product_id, flour, 0.75).await.unwrap();

  let recipe = db.get_product_recipe(product_id).await.unwrap();
  assert_eq!(recipe.len(), 1);
  assert_eq!(recipe[0].quantity, 0.75);
}

#[tokio::test]
async fn cost_records_upsert_per_product() {
  let (_, db) = fresh().await;
  let product_id = db.add_product(product("Nastar", 0.0)).await.unwrap();

  let record = bakehouse_core::factory::NewCostRecord {
    product_id,
    material_cost: 6_000.0,
    labor_cost:    2_000.0,
    overhead_cost: 1_000.0,
    unit_cost:     9_000.0,
    computed_date: date("2024-03-01"),
  };
  db.set_cost_record(record.clone()).await.unwrap();
  db.set_cost_record(bakehouse_core::factory::NewCostRecord {
    unit_cost: 9_500.0,
    ..record
  })
  .await
  .unwrap();

  let records = db.get_cost_records().await.unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].unit_cost, 9_500.0);

  let one = db.get_cost_record(product_id).await.unwrap().unwrap();
  assert_eq!(one.material_cost, 6_000.0);
}

// ─── Ledger ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn bookkeeping_date_range_filter() {
  let (_, db) = fresh().await;
  for (day, amount) in [("2024-03-01", 100.0), ("2024-03-15", 200.0), ("2024-04-01", 300.0)] {
    db.add_bookkeeping_entry(NewBookkeepingEntry {
      entry_date:  date(day),
      description: "sale".into(),
      kind:        EntryKind::Income,
      amount,
      category:    None,
    })
    .await
    .unwrap();
  }

  let march = db
    .get_bookkeeping_entries(Some(date("2024-03-01")), Some(date("2024-03-31")))
    .await
    .unwrap();
  assert_eq!(march.len(), 2);

  let all = db.get_bookkeeping_entries(None, None).await.unwrap();
  assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn bookkeeping_kind_check_constraint() {
  let (_, db) = fresh().await;
  let err = db
    .insert(
      "INSERT INTO bookkeeping_entries (entry_date, description, kind, amount)
       VALUES ('2024-03-01', 'x', 'transfer', 1)",
      vec![],
    )
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Sql(_)));
}

// ─── Settings & auth ─────────────────────────────────────────────────────────

#[tokio::test]
async fn login_with_seeded_pins() {
  let (_, db) = fresh().await;

  let admin = db.login("123456").await.unwrap();
  assert!(admin.success);
  assert_eq!(admin.role, Some(UserRole::Admin));

  let kasir = db.login("654321").await.unwrap();
  assert!(kasir.success);
  assert_eq!(kasir.role, Some(UserRole::Kasir));

  let nobody = db.login("000000").await.unwrap();
  assert!(!nobody.success);
  assert_eq!(nobody.role, None);
}

#[tokio::test]
async fn verify_pin_against_settings() {
  let (_, db) = fresh().await;
  assert!(db.verify_pin("123456").await.unwrap());
  assert!(!db.verify_pin("999999").await.unwrap());
}

#[tokio::test]
async fn menu_pin_verification() {
  let (_, db) = fresh().await;

  let mut settings = db.get_admin_settings().await.unwrap();
  settings.menu_locks = vec![MenuLock { menu_id: "payroll".into(), pin: "4321".into() }];
  settings.hidden_menus = vec!["assets".into()];
  db.update_admin_settings(settings).await.unwrap();

  assert!(db.verify_menu_pin("payroll", "4321").await.unwrap());
  assert!(!db.verify_menu_pin("payroll", "0000").await.unwrap());
  // An unlocked menu never verifies.
  assert!(!db.verify_menu_pin("bookkeeping", "4321").await.unwrap());

  let settings = db.get_admin_settings().await.unwrap();
  assert_eq!(settings.hidden_menus, vec!["assets".to_string()]);
}

#[tokio::test]
async fn replace_users_refreshes_denormalized_list() {
  let (_, db) = fresh().await;

  let users = db
    .replace_users(vec![
      NewUserAccount { name: "Owner".into(), role: UserRole::Admin, pin: "111111".into() },
      NewUserAccount { name: "Shift A".into(), role: UserRole::Kasir, pin: "222222".into() },
      NewUserAccount { name: "Shift B".into(), role: UserRole::Kasir, pin: "333333".into() },
    ])
    .await
    .unwrap();
  assert_eq!(users.len(), 3);

  let settings = db.get_admin_settings().await.unwrap();
  assert_eq!(settings.user_list, users);

  let login = db.login("222222").await.unwrap();
  assert!(login.success);
  assert_eq!(login.role, Some(UserRole::Kasir));
  assert!(!db.login("123456").await.unwrap().success);
}
