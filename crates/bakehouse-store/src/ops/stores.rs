//! Store operations.

use bakehouse_core::catalog::{NewStore, Store, StoreOverview};

use crate::{Database, Result, image::ImageStore};

fn store_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Store> {
  Ok(Store {
    id:      row.get(0)?,
    name:    row.get(1)?,
    city_id: row.get(2)?,
    area_id: row.get(3)?,
    address: row.get(4)?,
    phone:   row.get(5)?,
  })
}

impl<S: ImageStore> Database<S> {
  /// All stores with their city and area names resolved. Names are `None`
  /// when the referenced row has been deleted.
  pub async fn get_stores(&self) -> Result<Vec<StoreOverview>> {
    self
      .query(
        "SELECT s.id, s.name, s.city_id, s.area_id, s.address, s.phone,
                c.name, a.name
         FROM stores s
         LEFT JOIN cities c      ON c.id = s.city_id
         LEFT JOIN price_areas a ON a.id = s.area_id
         ORDER BY s.name",
        vec![],
        |row| {
          Ok(StoreOverview {
            id:        row.get(0)?,
            name:      row.get(1)?,
            city_id:   row.get(2)?,
            area_id:   row.get(3)?,
            address:   row.get(4)?,
            phone:     row.get(5)?,
            city_name: row.get(6)?,
            area_name: row.get(7)?,
          })
        },
      )
      .await
  }

  pub async fn get_store(&self, id: i64) -> Result<Option<Store>> {
    self
      .query_single(
        "SELECT id, name, city_id, area_id, address, phone
         FROM stores WHERE id = ?1",
        vec![id.into()],
        store_row,
      )
      .await
  }

  pub async fn add_store(&self, input: NewStore) -> Result<i64> {
    self
      .insert(
        "INSERT INTO stores (name, city_id, area_id, address, phone)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        vec![
          input.name.into(),
          input.city_id.into(),
          input.area_id.into(),
          input.address.into(),
          input.phone.into(),
        ],
      )
      .await
  }

  pub async fn update_store(&self, id: i64, input: NewStore) -> Result<()> {
    self
      .execute(
        "UPDATE stores
         SET name = ?1, city_id = ?2, area_id = ?3, address = ?4, phone = ?5
         WHERE id = ?6",
        vec![
          input.name.into(),
          input.city_id.into(),
          input.area_id.into(),
          input.address.into(),
          input.phone.into(),
          id.into(),
        ],
      )
      .await?;
    Ok(())
  }

  /// Deliveries and returns referencing the store are left in place.
  pub async fn delete_store(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM stores WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
