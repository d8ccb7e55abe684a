//! Column-level helpers between domain types and their SQLite text
//! representations. Dates are stored as `YYYY-MM-DD`; enumerated columns
//! store the lowercase discriminant strings defined in `bakehouse-core`.

use chrono::NaiveDate;

use bakehouse_core::{
  catalog::ProductKind,
  ledger::EntryKind,
  sales::{DeliveryKind, DeliveryStatus},
  settings::UserRole,
};

pub(crate) const DATE_FMT: &str = "%Y-%m-%d";

pub(crate) fn encode_date(date: NaiveDate) -> String {
  date.format(DATE_FMT).to_string()
}

fn conversion_err(
  idx: usize,
  err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
  rusqlite::Error::FromSqlConversionFailure(
    idx,
    rusqlite::types::Type::Text,
    Box::new(err),
  )
}

pub(crate) fn date_col(
  row: &rusqlite::Row<'_>,
  idx: usize,
) -> rusqlite::Result<NaiveDate> {
  let text: String = row.get(idx)?;
  NaiveDate::parse_from_str(&text, DATE_FMT).map_err(|e| conversion_err(idx, e))
}

pub(crate) fn opt_date_col(
  row: &rusqlite::Row<'_>,
  idx: usize,
) -> rusqlite::Result<Option<NaiveDate>> {
  let text: Option<String> = row.get(idx)?;
  text
    .map(|t| {
      NaiveDate::parse_from_str(&t, DATE_FMT).map_err(|e| conversion_err(idx, e))
    })
    .transpose()
}

pub(crate) fn role_col(
  row: &rusqlite::Row<'_>,
  idx: usize,
) -> rusqlite::Result<UserRole> {
  let text: String = row.get(idx)?;
  UserRole::parse(&text).map_err(|e| conversion_err(idx, e))
}

pub(crate) fn product_kind_col(
  row: &rusqlite::Row<'_>,
  idx: usize,
) -> rusqlite::Result<ProductKind> {
  let text: String = row.get(idx)?;
  ProductKind::parse(&text).map_err(|e| conversion_err(idx, e))
}

pub(crate) fn delivery_status_col(
  row: &rusqlite::Row<'_>,
  idx: usize,
) -> rusqlite::Result<DeliveryStatus> {
  let text: String = row.get(idx)?;
  DeliveryStatus::parse(&text).map_err(|e| conversion_err(idx, e))
}

pub(crate) fn delivery_kind_col(
  row: &rusqlite::Row<'_>,
  idx: usize,
) -> rusqlite::Result<DeliveryKind> {
  let text: String = row.get(idx)?;
  DeliveryKind::parse(&text).map_err(|e| conversion_err(idx, e))
}

pub(crate) fn entry_kind_col(
  row: &rusqlite::Row<'_>,
  idx: usize,
) -> rusqlite::Result<EntryKind> {
  let text: String = row.get(idx)?;
  EntryKind::parse(&text).map_err(|e| conversion_err(idx, e))
}
