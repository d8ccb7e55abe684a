//! Product operations, including area-price overrides and package contents.

use bakehouse_core::catalog::{
  AreaPrice, NewPackageItem, NewProduct, PackageItem, Product,
};

use crate::{Database, Result, codec, image::ImageStore};

fn product_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
  Ok(Product {
    id:         row.get(0)?,
    name:       row.get(1)?,
    unit:       row.get(2)?,
    base_price: row.get(3)?,
    stock:      row.get(4)?,
    kind:       codec::product_kind_col(row, 5)?,
  })
}

const PRODUCT_COLS: &str = "id, name, unit, base_price, stock, kind";

impl<S: ImageStore> Database<S> {
  pub async fn get_products(&self) -> Result<Vec<Product>> {
    self
      .query(
        &format!("SELECT {PRODUCT_COLS} FROM products ORDER BY name"),
        vec![],
        product_row,
      )
      .await
  }

  pub async fn get_product(&self, id: i64) -> Result<Option<Product>> {
    self
      .query_single(
        &format!("SELECT {PRODUCT_COLS} FROM products WHERE id = ?1"),
        vec![id.into()],
        product_row,
      )
      .await
  }

  pub async fn add_product(&self, input: NewProduct) -> Result<i64> {
    self
      .insert(
        "INSERT INTO products (name, unit, base_price, stock, kind)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        vec![
          input.name.into(),
          input.unit.into(),
          input.base_price.into(),
          input.stock.into(),
          input.kind.as_str().to_owned().into(),
        ],
      )
      .await
  }

  pub async fn update_product(&self, id: i64, input: NewProduct) -> Result<()> {
    self
      .execute(
        "UPDATE products
         SET name = ?1, unit = ?2, base_price = ?3, stock = ?4, kind = ?5
         WHERE id = ?6",
        vec![
          input.name.into(),
          input.unit.into(),
          input.base_price.into(),
          input.stock.into(),
          input.kind.as_str().to_owned().into(),
          id.into(),
        ],
      )
      .await?;
    Ok(())
  }

  pub async fn delete_product(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM products WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }

  // ─── Area prices ───────────────────────────────────────────────────────

  pub async fn get_product_area_prices(
    &self,
    product_id: i64,
  ) -> Result<Vec<AreaPrice>> {
    self
      .query(
        "SELECT id, product_id, area_id, price
         FROM product_area_prices WHERE product_id = ?1 ORDER BY area_id",
        vec![product_id.into()],
        |row| {
          Ok(AreaPrice {
            id:         row.get(0)?,
            product_id: row.get(1)?,
            area_id:    row.get(2)?,
            price:      row.get(3)?,
          })
        },
      )
      .await
  }

  /// Upsert the price of a product in an area, keyed by (product, area).
  /// Check-then-act over two statements; the single-writer engine keeps the
  /// pair race-free within a process.
  pub async fn set_product_area_price(
    &self,
    product_id: i64,
    area_id: i64,
    price: f64,
  ) -> Result<i64> {
    let existing: Option<i64> = self
      .query_single(
        "SELECT id FROM product_area_prices WHERE product_id = ?1 AND area_id = ?2",
        vec![product_id.into(), area_id.into()],
        |row| row.get(0),
      )
      .await?;

    match existing {
      Some(id) => {
        self
          .execute(
            "UPDATE product_area_prices SET price = ?1 WHERE id = ?2",
            vec![price.into(), id.into()],
          )
          .await?;
        Ok(id)
      }
      None => {
        self
          .insert(
            "INSERT INTO product_area_prices (product_id, area_id, price)
             VALUES (?1, ?2, ?3)",
            vec![product_id.into(), area_id.into(), price.into()],
          )
          .await
      }
    }
  }

  pub async fn delete_product_area_price(&self, id: i64) -> Result<()> {
    self
      .execute(
        "DELETE FROM product_area_prices WHERE id = ?1",
        vec![id.into()],
      )
      .await?;
    Ok(())
  }

  // ─── Package contents ──────────────────────────────────────────────────

  pub async fn get_package_items(
    &self,
    package_id: i64,
  ) -> Result<Vec<PackageItem>> {
    self
      .query(
        "SELECT id, package_id, product_id, quantity
         FROM package_items WHERE package_id = ?1 ORDER BY id",
        vec![package_id.into()],
        |row| {
          Ok(PackageItem {
            id:         row.get(0)?,
            package_id: row.get(1)?,
            product_id: row.get(2)?,
            quantity:   row.get(3)?,
          })
        },
      )
      .await
  }

  /// Replace a package's contents wholesale.
  pub async fn set_package_items(
    &self,
    package_id: i64,
    items: Vec<NewPackageItem>,
  ) -> Result<()> {
    self
      .execute(
        "DELETE FROM package_items WHERE package_id = ?1",
        vec![package_id.into()],
      )
      .await?;
    for item in items {
      self
        .insert(
          "INSERT INTO package_items (package_id, product_id, quantity)
           VALUES (?1, ?2, ?3)",
          vec![
            package_id.into(),
            item.product_id.into(),
            item.quantity.into(),
          ],
        )
        .await?;
    }
    Ok(())
  }
}
