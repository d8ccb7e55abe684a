//! Relational schema and first-run seeding.
//!
//! The DDL is idempotent (`CREATE TABLE IF NOT EXISTS`) and ordered parents
//! before children. Foreign keys are declared for documentation and tooling
//! only; enforcement stays off, so deleting a parent row leaves child
//! references dangling and sequencing deletes correctly is the caller's
//! responsibility.

use rusqlite::params;
use tokio_rusqlite::Connection;

use bakehouse_core::settings::UserAccount;

use crate::{Result, codec};

/// Default PIN seeded into the admin user and the settings row.
pub(crate) const DEFAULT_ADMIN_PIN: &str = "123456";
/// Default PIN seeded into the cashier user.
pub(crate) const DEFAULT_KASIR_PIN: &str = "654321";

/// Full schema DDL.
pub(crate) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS cities (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS price_areas (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS stores (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    city_id  INTEGER NOT NULL REFERENCES cities(id),
    area_id  INTEGER NOT NULL REFERENCES price_areas(id),
    address  TEXT,
    phone    TEXT
);

CREATE TABLE IF NOT EXISTS products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    unit        TEXT NOT NULL,
    base_price  REAL NOT NULL,
    stock       REAL NOT NULL DEFAULT 0,
    kind        TEXT NOT NULL DEFAULT 'single' CHECK (kind IN ('single', 'package'))
);

CREATE TABLE IF NOT EXISTS product_area_prices (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id  INTEGER NOT NULL REFERENCES products(id),
    area_id     INTEGER NOT NULL REFERENCES price_areas(id),
    price       REAL NOT NULL,
    UNIQUE (product_id, area_id)
);

CREATE TABLE IF NOT EXISTS package_items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    package_id  INTEGER NOT NULL REFERENCES products(id),
    product_id  INTEGER NOT NULL REFERENCES products(id),
    quantity    REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS employees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    role        TEXT NOT NULL,
    phone       TEXT,
    address     TEXT,
    birth_date  TEXT,
    hired_date  TEXT,
    daily_wage  REAL NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS store_deliveries (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    store_id       INTEGER NOT NULL REFERENCES stores(id),
    employee_id    INTEGER REFERENCES employees(id),
    delivery_date  TEXT NOT NULL,
    status         TEXT NOT NULL DEFAULT 'unpaid' CHECK (status IN ('unpaid', 'paid')),
    note           TEXT
);

CREATE TABLE IF NOT EXISTS individual_deliveries (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    customer       TEXT NOT NULL,
    employee_id    INTEGER REFERENCES employees(id),
    delivery_date  TEXT NOT NULL,
    note           TEXT
);

-- Line items for both delivery kinds; delivery_id resolves against the
-- header table named by delivery_kind.
CREATE TABLE IF NOT EXISTS delivery_items (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    delivery_id    INTEGER NOT NULL,
    delivery_kind  TEXT NOT NULL CHECK (delivery_kind IN ('store', 'individual')),
    product_id     INTEGER NOT NULL REFERENCES products(id),
    quantity       REAL NOT NULL,
    unit_price     REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS returns (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    store_id     INTEGER NOT NULL REFERENCES stores(id),
    return_date  TEXT NOT NULL,
    note         TEXT
);

CREATE TABLE IF NOT EXISTS return_items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    return_id   INTEGER NOT NULL REFERENCES returns(id),
    product_id  INTEGER NOT NULL REFERENCES products(id),
    quantity    REAL NOT NULL,
    unit_price  REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS payrolls (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id   INTEGER NOT NULL REFERENCES employees(id),
    period_start  TEXT NOT NULL,
    period_end    TEXT NOT NULL,
    base_pay      REAL NOT NULL,
    bonus         REAL NOT NULL DEFAULT 0,
    deductions    REAL NOT NULL DEFAULT 0,
    total         REAL NOT NULL,
    paid_date     TEXT,
    note          TEXT
);

CREATE TABLE IF NOT EXISTS raw_materials (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    unit         TEXT NOT NULL,
    stock        REAL NOT NULL DEFAULT 0,
    unit_cost    REAL NOT NULL,
    expiry_date  TEXT
);

CREATE TABLE IF NOT EXISTS factory_productions (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id       INTEGER NOT NULL REFERENCES products(id),
    production_date  TEXT NOT NULL,
    quantity         REAL NOT NULL,
    note             TEXT
);

CREATE TABLE IF NOT EXISTS production_materials (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    production_id  INTEGER NOT NULL REFERENCES factory_productions(id),
    material_id    INTEGER NOT NULL REFERENCES raw_materials(id),
    quantity       REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS stock_reductions (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    material_id     INTEGER NOT NULL REFERENCES raw_materials(id),
    reduction_date  TEXT NOT NULL,
    quantity        REAL NOT NULL,
    reason          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS product_recipes (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id   INTEGER NOT NULL REFERENCES products(id),
    material_id  INTEGER NOT NULL REFERENCES raw_materials(id),
    quantity     REAL NOT NULL,
    UNIQUE (product_id, material_id)
);

CREATE TABLE IF NOT EXISTS hpp (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id     INTEGER NOT NULL REFERENCES products(id),
    material_cost  REAL NOT NULL,
    labor_cost     REAL NOT NULL,
    overhead_cost  REAL NOT NULL,
    unit_cost      REAL NOT NULL,
    computed_date  TEXT NOT NULL,
    UNIQUE (product_id)
);

CREATE TABLE IF NOT EXISTS bookkeeping_entries (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    entry_date   TEXT NOT NULL,
    description  TEXT NOT NULL,
    kind         TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
    amount       REAL NOT NULL,
    category     TEXT
);

CREATE TABLE IF NOT EXISTS assets (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL,
    purchase_date   TEXT,
    purchase_price  REAL NOT NULL,
    quantity        REAL NOT NULL DEFAULT 1,
    note            TEXT
);

CREATE TABLE IF NOT EXISTS users (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    role  TEXT NOT NULL CHECK (role IN ('admin', 'kasir')),
    pin   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS admin_settings (
    id            INTEGER PRIMARY KEY CHECK (id = 1),
    pin           TEXT NOT NULL,
    menu_locks    TEXT NOT NULL DEFAULT '[]',
    hidden_menus  TEXT NOT NULL DEFAULT '[]',
    user_list     TEXT NOT NULL DEFAULT '[]'
);
";

/// Create all tables and seed defaults into a genuinely empty database.
///
/// Safe to run against an existing schema: table creation is idempotent and
/// seeding is guarded by row-count checks, so seed rows are never duplicated.
pub(crate) async fn bootstrap(conn: &Connection) -> Result<()> {
  conn
    .call(|conn| {
      conn.execute_batch(SCHEMA)?;

      let user_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?;
      if user_count == 0 {
        conn.execute(
          "INSERT INTO users (name, role, pin) VALUES ('Admin', 'admin', ?1)",
          params![DEFAULT_ADMIN_PIN],
        )?;
        conn.execute(
          "INSERT INTO users (name, role, pin) VALUES ('Kasir', 'kasir', ?1)",
          params![DEFAULT_KASIR_PIN],
        )?;
      }

      let settings_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM admin_settings", [], |r| r.get(0))?;
      if settings_count == 0 {
        // The settings row carries a denormalized copy of the user list.
        let accounts = {
          let mut stmt =
            conn.prepare("SELECT id, name, role, pin FROM users ORDER BY id")?;
          stmt
            .query_map([], |row| {
              Ok(UserAccount {
                id:   row.get(0)?,
                name: row.get(1)?,
                role: codec::role_col(row, 2)?,
                pin:  row.get(3)?,
              })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        let user_list = serde_json::to_string(&accounts)
          .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;
        conn.execute(
          "INSERT INTO admin_settings (id, pin, menu_locks, hidden_menus, user_list)
           VALUES (1, ?1, '[]', '[]', ?2)",
          params![DEFAULT_ADMIN_PIN, user_list],
        )?;
      }

      Ok(())
    })
    .await?;

  tracing::debug!("schema created and defaults seeded");
  Ok(())
}
