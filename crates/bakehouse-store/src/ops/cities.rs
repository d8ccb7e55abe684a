//! City operations.

use bakehouse_core::catalog::City;

use crate::{Database, Result, image::ImageStore};

impl<S: ImageStore> Database<S> {
  pub async fn get_cities(&self) -> Result<Vec<City>> {
    self
      .query("SELECT id, name FROM cities ORDER BY name", vec![], |row| {
        Ok(City { id: row.get(0)?, name: row.get(1)? })
      })
      .await
  }

  pub async fn add_city(&self, name: String) -> Result<i64> {
    self
      .insert("INSERT INTO cities (name) VALUES (?1)", vec![name.into()])
      .await
  }

  pub async fn update_city(&self, id: i64, name: String) -> Result<()> {
    self
      .execute(
        "UPDATE cities SET name = ?1 WHERE id = ?2",
        vec![name.into(), id.into()],
      )
      .await?;
    Ok(())
  }

  /// Stores referencing the city keep their dangling `city_id`.
  pub async fn delete_city(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM cities WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
