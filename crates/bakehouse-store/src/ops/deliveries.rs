//! Delivery operations: store deliveries, individual (door-to-door)
//! deliveries, and their shared line items.
//!
//! Composite adds insert the header and then each line item as independent
//! statements, each with its own image flush. A failure part-way leaves the
//! rows already inserted behind; callers should re-read before retrying.

use bakehouse_core::sales::{
  DeliveryItem, DeliveryKind, DeliveryStatus, IndividualDelivery,
  IndividualDeliveryDetail, NewIndividualDelivery, NewLineItem,
  NewStoreDelivery, StoreDelivery, StoreDeliveryDetail,
};

use crate::{Database, Result, codec, image::ImageStore};

fn store_delivery_row(
  row: &rusqlite::Row<'_>,
) -> rusqlite::Result<StoreDelivery> {
  Ok(StoreDelivery {
    id:            row.get(0)?,
    store_id:      row.get(1)?,
    employee_id:   row.get(2)?,
    delivery_date: codec::date_col(row, 3)?,
    status:        codec::delivery_status_col(row, 4)?,
    note:          row.get(5)?,
  })
}

fn individual_delivery_row(
  row: &rusqlite::Row<'_>,
) -> rusqlite::Result<IndividualDelivery> {
  Ok(IndividualDelivery {
    id:            row.get(0)?,
    customer:      row.get(1)?,
    employee_id:   row.get(2)?,
    delivery_date: codec::date_col(row, 3)?,
    note:          row.get(4)?,
  })
}

fn delivery_item_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DeliveryItem> {
  Ok(DeliveryItem {
    id:            row.get(0)?,
    delivery_id:   row.get(1)?,
    delivery_kind: codec::delivery_kind_col(row, 2)?,
    product_id:    row.get(3)?,
    quantity:      row.get(4)?,
    unit_price:    row.get(5)?,
  })
}

impl<S: ImageStore> Database<S> {
  async fn get_delivery_items(
    &self,
    delivery_id: i64,
    kind: DeliveryKind,
  ) -> Result<Vec<DeliveryItem>> {
    self
      .query(
        "SELECT id, delivery_id, delivery_kind, product_id, quantity, unit_price
         FROM delivery_items
         WHERE delivery_id = ?1 AND delivery_kind = ?2
         ORDER BY id",
        vec![delivery_id.into(), kind.as_str().to_owned().into()],
        delivery_item_row,
      )
      .await
  }

  async fn add_delivery_item(
    &self,
    delivery_id: i64,
    kind: DeliveryKind,
    item: &NewLineItem,
  ) -> Result<i64> {
    let id = self
      .insert(
        "INSERT INTO delivery_items
           (delivery_id, delivery_kind, product_id, quantity, unit_price)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        vec![
          delivery_id.into(),
          kind.as_str().to_owned().into(),
          item.product_id.into(),
          item.quantity.into(),
          item.unit_price.into(),
        ],
      )
      .await?;
    // Delivered goods leave product stock.
    self
      .execute(
        "UPDATE products SET stock = stock - ?1 WHERE id = ?2",
        vec![item.quantity.into(), item.product_id.into()],
      )
      .await?;
    Ok(id)
  }

  /// Credit every line item's quantity back to product stock, ahead of a
  /// wholesale item replacement.
  async fn restock_delivery_items(
    &self,
    delivery_id: i64,
    kind: DeliveryKind,
  ) -> Result<()> {
    let items = self.get_delivery_items(delivery_id, kind).await?;
    for item in items {
      self
        .execute(
          "UPDATE products SET stock = stock + ?1 WHERE id = ?2",
          vec![item.quantity.into(), item.product_id.into()],
        )
        .await?;
    }
    Ok(())
  }

  async fn delete_delivery_items(
    &self,
    delivery_id: i64,
    kind: DeliveryKind,
  ) -> Result<()> {
    self
      .execute(
        "DELETE FROM delivery_items WHERE delivery_id = ?1 AND delivery_kind = ?2",
        vec![delivery_id.into(), kind.as_str().to_owned().into()],
      )
      .await?;
    Ok(())
  }

  // ─── Store deliveries ──────────────────────────────────────────────────

  pub async fn get_store_deliveries(&self) -> Result<Vec<StoreDelivery>> {
    self
      .query(
        "SELECT id, store_id, employee_id, delivery_date, status, note
         FROM store_deliveries ORDER BY delivery_date DESC, id DESC",
        vec![],
        store_delivery_row,
      )
      .await
  }

  pub async fn get_store_delivery(
    &self,
    id: i64,
  ) -> Result<Option<StoreDeliveryDetail>> {
    let delivery = self
      .query_single(
        "SELECT id, store_id, employee_id, delivery_date, status, note
         FROM store_deliveries WHERE id = ?1",
        vec![id.into()],
        store_delivery_row,
      )
      .await?;
    let Some(delivery) = delivery else { return Ok(None) };
    let items = self.get_delivery_items(id, DeliveryKind::Store).await?;
    Ok(Some(StoreDeliveryDetail { delivery, items }))
  }

  pub async fn add_store_delivery(
    &self,
    input: NewStoreDelivery,
  ) -> Result<i64> {
    let delivery_id = self
      .insert(
        "INSERT INTO store_deliveries
           (store_id, employee_id, delivery_date, status, note)
         VALUES (?1, ?2, ?3, 'unpaid', ?4)",
        vec![
          input.store_id.into(),
          input.employee_id.into(),
          codec::encode_date(input.delivery_date).into(),
          input.note.into(),
        ],
      )
      .await?;
    for item in &input.items {
      self
        .add_delivery_item(delivery_id, DeliveryKind::Store, item)
        .await?;
    }
    Ok(delivery_id)
  }

  /// Rewrite the header and replace the line items wholesale. Old item
  /// quantities return to product stock before the new ones are debited;
  /// the payment status is kept.
  pub async fn update_store_delivery(
    &self,
    id: i64,
    input: NewStoreDelivery,
  ) -> Result<()> {
    self
      .execute(
        "UPDATE store_deliveries
         SET store_id = ?1, employee_id = ?2, delivery_date = ?3, note = ?4
         WHERE id = ?5",
        vec![
          input.store_id.into(),
          input.employee_id.into(),
          codec::encode_date(input.delivery_date).into(),
          input.note.into(),
          id.into(),
        ],
      )
      .await?;
    self.restock_delivery_items(id, DeliveryKind::Store).await?;
    self.delete_delivery_items(id, DeliveryKind::Store).await?;
    for item in &input.items {
      self.add_delivery_item(id, DeliveryKind::Store, item).await?;
    }
    Ok(())
  }

  pub async fn set_store_delivery_status(
    &self,
    id: i64,
    status: DeliveryStatus,
  ) -> Result<()> {
    self
      .execute(
        "UPDATE store_deliveries SET status = ?1 WHERE id = ?2",
        vec![status.as_str().to_owned().into(), id.into()],
      )
      .await?;
    Ok(())
  }

  /// Delete a delivery and its line items (children first). Product stock is
  /// not restored; use a return for goods that come back.
  pub async fn delete_store_delivery(&self, id: i64) -> Result<()> {
    self.delete_delivery_items(id, DeliveryKind::Store).await?;
    self
      .execute("DELETE FROM store_deliveries WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }

  // ─── Individual deliveries ─────────────────────────────────────────────

  pub async fn get_individual_deliveries(
    &self,
  ) -> Result<Vec<IndividualDelivery>> {
    self
      .query(
        "SELECT id, customer, employee_id, delivery_date, note
         FROM individual_deliveries ORDER BY delivery_date DESC, id DESC",
        vec![],
        individual_delivery_row,
      )
      .await
  }

  pub async fn get_individual_delivery(
    &self,
    id: i64,
  ) -> Result<Option<IndividualDeliveryDetail>> {
    let delivery = self
      .query_single(
        "SELECT id, customer, employee_id, delivery_date, note
         FROM individual_deliveries WHERE id = ?1",
        vec![id.into()],
        individual_delivery_row,
      )
      .await?;
    let Some(delivery) = delivery else { return Ok(None) };
    let items = self.get_delivery_items(id, DeliveryKind::Individual).await?;
    Ok(Some(IndividualDeliveryDetail { delivery, items }))
  }

  pub async fn add_individual_delivery(
    &self,
    input: NewIndividualDelivery,
  ) -> Result<i64> {
    let delivery_id = self
      .insert(
        "INSERT INTO individual_deliveries
           (customer, employee_id, delivery_date, note)
         VALUES (?1, ?2, ?3, ?4)",
        vec![
          input.customer.into(),
          input.employee_id.into(),
          codec::encode_date(input.delivery_date).into(),
          input.note.into(),
        ],
      )
      .await?;
    for item in &input.items {
      self
        .add_delivery_item(delivery_id, DeliveryKind::Individual, item)
        .await?;
    }
    Ok(delivery_id)
  }

  /// Rewrite the header and replace the line items wholesale, mirroring
  /// [`Database::update_store_delivery`].
  pub async fn update_individual_delivery(
    &self,
    id: i64,
    input: NewIndividualDelivery,
  ) -> Result<()> {
    self
      .execute(
        "UPDATE individual_deliveries
         SET customer = ?1, employee_id = ?2, delivery_date = ?3, note = ?4
         WHERE id = ?5",
        vec![
          input.customer.into(),
          input.employee_id.into(),
          codec::encode_date(input.delivery_date).into(),
          input.note.into(),
          id.into(),
        ],
      )
      .await?;
    self
      .restock_delivery_items(id, DeliveryKind::Individual)
      .await?;
    self
      .delete_delivery_items(id, DeliveryKind::Individual)
      .await?;
    for item in &input.items {
      self
        .add_delivery_item(id, DeliveryKind::Individual, item)
        .await?;
    }
    Ok(())
  }

  pub async fn delete_individual_delivery(&self, id: i64) -> Result<()> {
    self
      .delete_delivery_items(id, DeliveryKind::Individual)
      .await?;
    self
      .execute(
        "DELETE FROM individual_deliveries WHERE id = ?1",
        vec![id.into()],
      )
      .await?;
    Ok(())
  }
}
