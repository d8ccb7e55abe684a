//! Raw-material operations and manual stock reductions.

use bakehouse_core::factory::{
  NewRawMaterial, NewStockReduction, RawMaterial, StockReduction,
};

use crate::{Database, Result, codec, image::ImageStore};

fn material_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawMaterial> {
  Ok(RawMaterial {
    id:          row.get(0)?,
    name:        row.get(1)?,
    unit:        row.get(2)?,
    stock:       row.get(3)?,
    unit_cost:   row.get(4)?,
    expiry_date: codec::opt_date_col(row, 5)?,
  })
}

const MATERIAL_COLS: &str = "id, name, unit, stock, unit_cost, expiry_date";

impl<S: ImageStore> Database<S> {
  pub async fn get_raw_materials(&self) -> Result<Vec<RawMaterial>> {
    self
      .query(
        &format!("SELECT {MATERIAL_COLS} FROM raw_materials ORDER BY name"),
        vec![],
        material_row,
      )
      .await
  }

  pub async fn get_raw_material(&self, id: i64) -> Result<Option<RawMaterial>> {
    self
      .query_single(
        &format!("SELECT {MATERIAL_COLS} FROM raw_materials WHERE id = ?1"),
        vec![id.into()],
        material_row,
      )
      .await
  }

  pub async fn add_raw_material(&self, input: NewRawMaterial) -> Result<i64> {
    self
      .insert(
        "INSERT INTO raw_materials (name, unit, stock, unit_cost, expiry_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        vec![
          input.name.into(),
          input.unit.into(),
          input.stock.into(),
          input.unit_cost.into(),
          input.expiry_date.map(codec::encode_date).into(),
        ],
      )
      .await
  }

  pub async fn update_raw_material(
    &self,
    id: i64,
    input: NewRawMaterial,
  ) -> Result<()> {
    self
      .execute(
        "UPDATE raw_materials
         SET name = ?1, unit = ?2, stock = ?3, unit_cost = ?4, expiry_date = ?5
         WHERE id = ?6",
        vec![
          input.name.into(),
          input.unit.into(),
          input.stock.into(),
          input.unit_cost.into(),
          input.expiry_date.map(codec::encode_date).into(),
          id.into(),
        ],
      )
      .await?;
    Ok(())
  }

  pub async fn delete_raw_material(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM raw_materials WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }

  // ─── Stock reductions ──────────────────────────────────────────────────

  pub async fn get_stock_reductions(&self) -> Result<Vec<StockReduction>> {
    self
      .query(
        "SELECT id, material_id, reduction_date, quantity, reason
         FROM stock_reductions ORDER BY reduction_date DESC, id DESC",
        vec![],
        |row| {
          Ok(StockReduction {
            id:             row.get(0)?,
            material_id:    row.get(1)?,
            reduction_date: codec::date_col(row, 2)?,
            quantity:       row.get(3)?,
            reason:         row.get(4)?,
          })
        },
      )
      .await
  }

  /// Record a write-off and subtract it from the material's stock.
  pub async fn add_stock_reduction(
    &self,
    input: NewStockReduction,
  ) -> Result<i64> {
    let id = self
      .insert(
        "INSERT INTO stock_reductions (material_id, reduction_date, quantity, reason)
         VALUES (?1, ?2, ?3, ?4)",
        vec![
          input.material_id.into(),
          codec::encode_date(input.reduction_date).into(),
          input.quantity.into(),
          input.reason.into(),
        ],
      )
      .await?;
    self
      .execute(
        "UPDATE raw_materials SET stock = stock - ?1 WHERE id = ?2",
        vec![input.quantity.into(), input.material_id.into()],
      )
      .await?;
    Ok(id)
  }

  /// Delete the record only; the stock subtraction it made is kept.
  pub async fn delete_stock_reduction(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM stock_reductions WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
