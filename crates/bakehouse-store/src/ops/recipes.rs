//! Recipe and cost-record operations. Both are upsert-style, keyed by a
//! natural composite key: (product, material) for recipes, product for cost
//! records.

use bakehouse_core::factory::{CostRecord, NewCostRecord, RecipeItem};

use crate::{Database, Result, codec, image::ImageStore};

fn cost_record_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CostRecord> {
  Ok(CostRecord {
    id:            row.get(0)?,
    product_id:    row.get(1)?,
    material_cost: row.get(2)?,
    labor_cost:    row.get(3)?,
    overhead_cost: row.get(4)?,
    unit_cost:     row.get(5)?,
    computed_date: codec::date_col(row, 6)?,
  })
}

const COST_COLS: &str = "id, product_id, material_cost, labor_cost, \
                         overhead_cost, unit_cost, computed_date";

impl<S: ImageStore> Database<S> {
  // ─── Recipes ───────────────────────────────────────────────────────────

  pub async fn get_product_recipe(
    &self,
    product_id: i64,
  ) -> Result<Vec<RecipeItem>> {
    self
      .query(
        "SELECT id, product_id, material_id, quantity
         FROM product_recipes WHERE product_id = ?1 ORDER BY id",
        vec![product_id.into()],
        |row| {
          Ok(RecipeItem {
            id:          row.get(0)?,
            product_id:  row.get(1)?,
            material_id: row.get(2)?,
            quantity:    row.get(3)?,
          })
        },
      )
      .await
  }

  /// Upsert one ingredient of a product's recipe.
  pub async fn set_recipe_item(
    &self,
    product_id: i64,
    material_id: i64,
    quantity: f64,
  ) -> Result<i64> {
    let existing: Option<i64> = self
      .query_single(
        "SELECT id FROM product_recipes WHERE product_id = ?1 AND material_id = ?2",
        vec![product_id.into(), material_id.into()],
        |row| row.get(0),
      )
      .await?;

    match existing {
      Some(id) => {
        self
          .execute(
            "UPDATE product_recipes SET quantity = ?1 WHERE id = ?2",
            vec![quantity.into(), id.into()],
          )
          .await?;
        Ok(id)
      }
      None => {
        self
          .insert(
            "INSERT INTO product_recipes (product_id, material_id, quantity)
             VALUES (?1, ?2, ?3)",
            vec![product_id.into(), material_id.into(), quantity.into()],
          )
          .await
      }
    }
  }

  pub async fn delete_recipe_item(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM product_recipes WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }

  // ─── Cost records ──────────────────────────────────────────────────────

  pub async fn get_cost_records(&self) -> Result<Vec<CostRecord>> {
    self
      .query(
        &format!("SELECT {COST_COLS} FROM hpp ORDER BY product_id"),
        vec![],
        cost_record_row,
      )
      .await
  }

  pub async fn get_cost_record(
    &self,
    product_id: i64,
  ) -> Result<Option<CostRecord>> {
    self
      .query_single(
        &format!("SELECT {COST_COLS} FROM hpp WHERE product_id = ?1"),
        vec![product_id.into()],
        cost_record_row,
      )
      .await
  }

  /// Upsert the cost record of a product.
  pub async fn set_cost_record(&self, input: NewCostRecord) -> Result<i64> {
    let existing: Option<i64> = self
      .query_single(
        "SELECT id FROM hpp WHERE product_id = ?1",
        vec![input.product_id.into()],
        |row| row.get(0),
      )
      .await?;

    match existing {
      Some(id) => {
        self
          .execute(
            "UPDATE hpp
             SET material_cost = ?1, labor_cost = ?2, overhead_cost = ?3,
                 unit_cost = ?4, computed_date = ?5
             WHERE id = ?6",
            vec![
              input.material_cost.into(),
              input.labor_cost.into(),
              input.overhead_cost.into(),
              input.unit_cost.into(),
              codec::encode_date(input.computed_date).into(),
              id.into(),
            ],
          )
          .await?;
        Ok(id)
      }
      None => {
        self
          .insert(
            "INSERT INTO hpp
               (product_id, material_cost, labor_cost, overhead_cost,
                unit_cost, computed_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            vec![
              input.product_id.into(),
              input.material_cost.into(),
              input.labor_cost.into(),
              input.overhead_cost.into(),
              input.unit_cost.into(),
              codec::encode_date(input.computed_date).into(),
            ],
          )
          .await
      }
    }
  }

  pub async fn delete_cost_record(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM hpp WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
