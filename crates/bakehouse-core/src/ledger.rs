//! Bookkeeping entries and fixed assets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Direction of a bookkeeping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
  Income,
  Expense,
}

impl EntryKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Income => "income",
      Self::Expense => "expense",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "income" => Ok(Self::Income),
      "expense" => Ok(Self::Expense),
      other => Err(Error::UnknownValue(format!("entry kind: {other:?}"))),
    }
  }
}

/// One line of the cash book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookkeepingEntry {
  pub id:          i64,
  pub entry_date:  NaiveDate,
  pub description: String,
  pub kind:        EntryKind,
  pub amount:      f64,
  pub category:    Option<String>,
}

/// Input for creating or updating a bookkeeping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookkeepingEntry {
  pub entry_date:  NaiveDate,
  pub description: String,
  pub kind:        EntryKind,
  pub amount:      f64,
  pub category:    Option<String>,
}

/// A fixed asset (oven, mixer, vehicle, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
  pub id:             i64,
  pub name:           String,
  pub purchase_date:  Option<NaiveDate>,
  pub purchase_price: f64,
  pub quantity:       f64,
  pub note:           Option<String>,
}

/// Input for creating or updating an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAsset {
  pub name:           String,
  pub purchase_date:  Option<NaiveDate>,
  pub purchase_price: f64,
  pub quantity:       f64,
  pub note:           Option<String>,
}
