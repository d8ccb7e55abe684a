//! Return operations. Returned goods go back into product stock.

use bakehouse_core::sales::{
  NewSalesReturn, ReturnItem, SalesReturn, SalesReturnDetail,
};

use crate::{Database, Result, codec, image::ImageStore};

fn return_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SalesReturn> {
  Ok(SalesReturn {
    id:          row.get(0)?,
    store_id:    row.get(1)?,
    return_date: codec::date_col(row, 2)?,
    note:        row.get(3)?,
  })
}

fn return_item_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReturnItem> {
  Ok(ReturnItem {
    id:         row.get(0)?,
    return_id:  row.get(1)?,
    product_id: row.get(2)?,
    quantity:   row.get(3)?,
    unit_price: row.get(4)?,
  })
}

impl<S: ImageStore> Database<S> {
  pub async fn get_returns(&self) -> Result<Vec<SalesReturn>> {
    self
      .query(
        "SELECT id, store_id, return_date, note
         FROM returns ORDER BY return_date DESC, id DESC",
        vec![],
        return_row,
      )
      .await
  }

  pub async fn get_return(&self, id: i64) -> Result<Option<SalesReturnDetail>> {
    let sales_return = self
      .query_single(
        "SELECT id, store_id, return_date, note FROM returns WHERE id = ?1",
        vec![id.into()],
        return_row,
      )
      .await?;
    let Some(sales_return) = sales_return else { return Ok(None) };
    let items = self
      .query(
        "SELECT id, return_id, product_id, quantity, unit_price
         FROM return_items WHERE return_id = ?1 ORDER BY id",
        vec![id.into()],
        return_item_row,
      )
      .await?;
    Ok(Some(SalesReturnDetail { sales_return, items }))
  }

  pub async fn add_return(&self, input: NewSalesReturn) -> Result<i64> {
    let return_id = self
      .insert(
        "INSERT INTO returns (store_id, return_date, note) VALUES (?1, ?2, ?3)",
        vec![
          input.store_id.into(),
          codec::encode_date(input.return_date).into(),
          input.note.into(),
        ],
      )
      .await?;
    for item in &input.items {
      self
        .insert(
          "INSERT INTO return_items (return_id, product_id, quantity, unit_price)
           VALUES (?1, ?2, ?3, ?4)",
          vec![
            return_id.into(),
            item.product_id.into(),
            item.quantity.into(),
            item.unit_price.into(),
          ],
        )
        .await?;
      self
        .execute(
          "UPDATE products SET stock = stock + ?1 WHERE id = ?2",
          vec![item.quantity.into(), item.product_id.into()],
        )
        .await?;
    }
    Ok(return_id)
  }

  /// Rewrite the header and replace the line items wholesale. The old items'
  /// restock is backed out before the new items restock.
  pub async fn update_return(
    &self,
    id: i64,
    input: NewSalesReturn,
  ) -> Result<()> {
    self
      .execute(
        "UPDATE returns SET store_id = ?1, return_date = ?2, note = ?3
         WHERE id = ?4",
        vec![
          input.store_id.into(),
          codec::encode_date(input.return_date).into(),
          input.note.into(),
          id.into(),
        ],
      )
      .await?;

    let old_items = self
      .query(
        "SELECT id, return_id, product_id, quantity, unit_price
         FROM return_items WHERE return_id = ?1 ORDER BY id",
        vec![id.into()],
        return_item_row,
      )
      .await?;
    for item in old_items {
      self
        .execute(
          "UPDATE products SET stock = stock - ?1 WHERE id = ?2",
          vec![item.quantity.into(), item.product_id.into()],
        )
        .await?;
    }
    self
      .execute("DELETE FROM return_items WHERE return_id = ?1", vec![id.into()])
      .await?;

    for item in &input.items {
      self
        .insert(
          "INSERT INTO return_items (return_id, product_id, quantity, unit_price)
           VALUES (?1, ?2, ?3, ?4)",
          vec![
            id.into(),
            item.product_id.into(),
            item.quantity.into(),
            item.unit_price.into(),
          ],
        )
        .await?;
      self
        .execute(
          "UPDATE products SET stock = stock + ?1 WHERE id = ?2",
          vec![item.quantity.into(), item.product_id.into()],
        )
        .await?;
    }
    Ok(())
  }

  /// Delete a return and its items. Stock adjustments made when the return
  /// was recorded are kept.
  pub async fn delete_return(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM return_items WHERE return_id = ?1", vec![id.into()])
      .await?;
    self
      .execute("DELETE FROM returns WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
