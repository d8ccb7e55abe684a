//! Bookkeeping operations.

use chrono::NaiveDate;

use bakehouse_core::ledger::{BookkeepingEntry, NewBookkeepingEntry};

use crate::{Database, Result, codec, image::ImageStore};

fn entry_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookkeepingEntry> {
  Ok(BookkeepingEntry {
    id:          row.get(0)?,
    entry_date:  codec::date_col(row, 1)?,
    description: row.get(2)?,
    kind:        codec::entry_kind_col(row, 3)?,
    amount:      row.get(4)?,
    category:    row.get(5)?,
  })
}

const ENTRY_COLS: &str = "id, entry_date, description, kind, amount, category";

impl<S: ImageStore> Database<S> {
  /// Entries, newest first, optionally restricted to an inclusive date range.
  pub async fn get_bookkeeping_entries(
    &self,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
  ) -> Result<Vec<BookkeepingEntry>> {
    // Dates are lexically comparable in their stored form.
    let from = from.map(codec::encode_date).unwrap_or_else(|| "0000-01-01".into());
    let to = to.map(codec::encode_date).unwrap_or_else(|| "9999-12-31".into());
    self
      .query(
        &format!(
          "SELECT {ENTRY_COLS} FROM bookkeeping_entries
           WHERE entry_date >= ?1 AND entry_date <= ?2
           ORDER BY entry_date DESC, id DESC"
        ),
        vec![from.into(), to.into()],
        entry_row,
      )
      .await
  }

  pub async fn add_bookkeeping_entry(
    &self,
    input: NewBookkeepingEntry,
  ) -> Result<i64> {
    self
      .insert(
        "INSERT INTO bookkeeping_entries
           (entry_date, description, kind, amount, category)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        vec![
          codec::encode_date(input.entry_date).into(),
          input.description.into(),
          input.kind.as_str().to_owned().into(),
          input.amount.into(),
          input.category.into(),
        ],
      )
      .await
  }

  pub async fn update_bookkeeping_entry(
    &self,
    id: i64,
    input: NewBookkeepingEntry,
  ) -> Result<()> {
    self
      .execute(
        "UPDATE bookkeeping_entries
         SET entry_date = ?1, description = ?2, kind = ?3, amount = ?4,
             category = ?5
         WHERE id = ?6",
        vec![
          codec::encode_date(input.entry_date).into(),
          input.description.into(),
          input.kind.as_str().to_owned().into(),
          input.amount.into(),
          input.category.into(),
          id.into(),
        ],
      )
      .await?;
    Ok(())
  }

  pub async fn delete_bookkeeping_entry(&self, id: i64) -> Result<()> {
    self
      .execute(
        "DELETE FROM bookkeeping_entries WHERE id = ?1",
        vec![id.into()],
      )
      .await?;
    Ok(())
  }
}
