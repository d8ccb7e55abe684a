//! Asset operations.

use bakehouse_core::ledger::{Asset, NewAsset};

use crate::{Database, Result, codec, image::ImageStore};

fn asset_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Asset> {
  Ok(Asset {
    id:             row.get(0)?,
    name:           row.get(1)?,
    purchase_date:  codec::opt_date_col(row, 2)?,
    purchase_price: row.get(3)?,
    quantity:       row.get(4)?,
    note:           row.get(5)?,
  })
}

impl<S: ImageStore> Database<S> {
  pub async fn get_assets(&self) -> Result<Vec<Asset>> {
    self
      .query(
        "SELECT id, name, purchase_date, purchase_price, quantity, note
         FROM assets ORDER BY name",
        vec![],
        asset_row,
      )
      .await
  }

  pub async fn add_asset(&self, input: NewAsset) -> Result<i64> {
    self
      .insert(
        "INSERT INTO assets (name, purchase_date, purchase_price, quantity, note)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        vec![
          input.name.into(),
          input.purchase_date.map(codec::encode_date).into(),
          input.purchase_price.into(),
          input.quantity.into(),
          input.note.into(),
        ],
      )
      .await
  }

  pub async fn update_asset(&self, id: i64, input: NewAsset) -> Result<()> {
    self
      .execute(
        "UPDATE assets
         SET name = ?1, purchase_date = ?2, purchase_price = ?3,
             quantity = ?4, note = ?5
         WHERE id = ?6",
        vec![
          input.name.into(),
          input.purchase_date.map(codec::encode_date).into(),
          input.purchase_price.into(),
          input.quantity.into(),
          input.note.into(),
          id.into(),
        ],
      )
      .await?;
    Ok(())
  }

  pub async fn delete_asset(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM assets WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
