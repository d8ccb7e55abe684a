//! Factory-production operations.
//!
//! Adding a production is a composite write: the header, one row per
//! consumed material (each also subtracting raw-material stock), and an
//! increment of the produced product's stock. Statements run independently,
//! each with its own flush.

use bakehouse_core::factory::{
  FactoryProduction, NewFactoryProduction, ProductionDetail, ProductionMaterial,
};

use crate::{Database, Result, codec, image::ImageStore};

fn production_row(
  row: &rusqlite::Row<'_>,
) -> rusqlite::Result<FactoryProduction> {
  Ok(FactoryProduction {
    id:              row.get(0)?,
    product_id:      row.get(1)?,
    production_date: codec::date_col(row, 2)?,
    quantity:        row.get(3)?,
    note:            row.get(4)?,
  })
}

impl<S: ImageStore> Database<S> {
  pub async fn get_factory_productions(
    &self,
  ) -> Result<Vec<FactoryProduction>> {
    self
      .query(
        "SELECT id, product_id, production_date, quantity, note
         FROM factory_productions ORDER BY production_date DESC, id DESC",
        vec![],
        production_row,
      )
      .await
  }

  pub async fn get_factory_production(
    &self,
    id: i64,
  ) -> Result<Option<ProductionDetail>> {
    let production = self
      .query_single(
        "SELECT id, product_id, production_date, quantity, note
         FROM factory_productions WHERE id = ?1",
        vec![id.into()],
        production_row,
      )
      .await?;
    let Some(production) = production else { return Ok(None) };
    let materials = self
      .query(
        "SELECT id, production_id, material_id, quantity
         FROM production_materials WHERE production_id = ?1 ORDER BY id",
        vec![id.into()],
        |row| {
          Ok(ProductionMaterial {
            id:            row.get(0)?,
            production_id: row.get(1)?,
            material_id:   row.get(2)?,
            quantity:      row.get(3)?,
          })
        },
      )
      .await?;
    Ok(Some(ProductionDetail { production, materials }))
  }

  pub async fn add_factory_production(
    &self,
    input: NewFactoryProduction,
  ) -> Result<i64> {
    let production_id = self
      .insert(
        "INSERT INTO factory_productions (product_id, production_date, quantity, note)
         VALUES (?1, ?2, ?3, ?4)",
        vec![
          input.product_id.into(),
          codec::encode_date(input.production_date).into(),
          input.quantity.into(),
          input.note.into(),
        ],
      )
      .await?;
    for material in &input.materials {
      self
        .insert(
          "INSERT INTO production_materials (production_id, material_id, quantity)
           VALUES (?1, ?2, ?3)",
          vec![
            production_id.into(),
            material.material_id.into(),
            material.quantity.into(),
          ],
        )
        .await?;
      self
        .execute(
          "UPDATE raw_materials SET stock = stock - ?1 WHERE id = ?2",
          vec![material.quantity.into(), material.material_id.into()],
        )
        .await?;
    }
    self
      .execute(
        "UPDATE products SET stock = stock + ?1 WHERE id = ?2",
        vec![input.quantity.into(), input.product_id.into()],
      )
      .await?;
    Ok(production_id)
  }

  /// Rewrite a production run wholesale: the old run's stock movements are
  /// backed out, then the new header, materials, and movements are applied.
  /// A missing run is left untouched.
  pub async fn update_factory_production(
    &self,
    id: i64,
    input: NewFactoryProduction,
  ) -> Result<()> {
    let Some(old) = self.get_factory_production(id).await? else {
      return Ok(());
    };

    for material in &old.materials {
      self
        .execute(
          "UPDATE raw_materials SET stock = stock + ?1 WHERE id = ?2",
          vec![material.quantity.into(), material.material_id.into()],
        )
        .await?;
    }
    self
      .execute(
        "UPDATE products SET stock = stock - ?1 WHERE id = ?2",
        vec![
          old.production.quantity.into(),
          old.production.product_id.into(),
        ],
      )
      .await?;
    self
      .execute(
        "DELETE FROM production_materials WHERE production_id = ?1",
        vec![id.into()],
      )
      .await?;

    self
      .execute(
        "UPDATE factory_productions
         SET product_id = ?1, production_date = ?2, quantity = ?3, note = ?4
         WHERE id = ?5",
        vec![
          input.product_id.into(),
          codec::encode_date(input.production_date).into(),
          input.quantity.into(),
          input.note.into(),
          id.into(),
        ],
      )
      .await?;
    for material in &input.materials {
      self
        .insert(
          "INSERT INTO production_materials (production_id, material_id, quantity)
           VALUES (?1, ?2, ?3)",
          vec![
            id.into(),
            material.material_id.into(),
            material.quantity.into(),
          ],
        )
        .await?;
      self
        .execute(
          "UPDATE raw_materials SET stock = stock - ?1 WHERE id = ?2",
          vec![material.quantity.into(), material.material_id.into()],
        )
        .await?;
    }
    self
      .execute(
        "UPDATE products SET stock = stock + ?1 WHERE id = ?2",
        vec![input.quantity.into(), input.product_id.into()],
      )
      .await?;
    Ok(())
  }

  /// Delete a production and its material rows. Stock adjustments made when
  /// it was recorded are kept.
  pub async fn delete_factory_production(&self, id: i64) -> Result<()> {
    self
      .execute(
        "DELETE FROM production_materials WHERE production_id = ?1",
        vec![id.into()],
      )
      .await?;
    self
      .execute(
        "DELETE FROM factory_productions WHERE id = ?1",
        vec![id.into()],
      )
      .await?;
    Ok(())
  }
}
