//! Price-area operations.

use bakehouse_core::catalog::PriceArea;

use crate::{Database, Result, image::ImageStore};

impl<S: ImageStore> Database<S> {
  pub async fn get_price_areas(&self) -> Result<Vec<PriceArea>> {
    self
      .query(
        "SELECT id, name FROM price_areas ORDER BY name",
        vec![],
        |row| Ok(PriceArea { id: row.get(0)?, name: row.get(1)? }),
      )
      .await
  }

  pub async fn add_price_area(&self, name: String) -> Result<i64> {
    self
      .insert(
        "INSERT INTO price_areas (name) VALUES (?1)",
        vec![name.into()],
      )
      .await
  }

  pub async fn update_price_area(&self, id: i64, name: String) -> Result<()> {
    self
      .execute(
        "UPDATE price_areas SET name = ?1 WHERE id = ?2",
        vec![name.into(), id.into()],
      )
      .await?;
    Ok(())
  }

  pub async fn delete_price_area(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM price_areas WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
