//! Sales records: deliveries to stores, door-to-door (individual) deliveries,
//! their shared line items, and returns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Deliveries ──────────────────────────────────────────────────────────────

/// Payment state of a store delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
  Unpaid,
  Paid,
}

impl DeliveryStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Unpaid => "unpaid",
      Self::Paid => "paid",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "unpaid" => Ok(Self::Unpaid),
      "paid" => Ok(Self::Paid),
      other => Err(Error::UnknownValue(format!("delivery status: {other:?}"))),
    }
  }
}

/// Which header table a delivery line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryKind {
  Store,
  Individual,
}

impl DeliveryKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Store => "store",
      Self::Individual => "individual",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "store" => Ok(Self::Store),
      "individual" => Ok(Self::Individual),
      other => Err(Error::UnknownValue(format!("delivery kind: {other:?}"))),
    }
  }
}

/// Header of a delivery to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDelivery {
  pub id:            i64,
  pub store_id:      i64,
  pub employee_id:   Option<i64>,
  pub delivery_date: NaiveDate,
  pub status:        DeliveryStatus,
  pub note:          Option<String>,
}

/// Header of a direct sale to an individual customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualDelivery {
  pub id:            i64,
  pub customer:      String,
  pub employee_id:   Option<i64>,
  pub delivery_date: NaiveDate,
  pub note:          Option<String>,
}

/// One delivered product line. Line items for both delivery kinds share a
/// table, discriminated by `delivery_kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryItem {
  pub id:            i64,
  pub delivery_id:   i64,
  pub delivery_kind: DeliveryKind,
  pub product_id:    i64,
  pub quantity:      f64,
  pub unit_price:    f64,
}

/// Input line for a new delivery or return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLineItem {
  pub product_id: i64,
  pub quantity:   f64,
  pub unit_price: f64,
}

/// Input for a store delivery: header plus its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStoreDelivery {
  pub store_id:      i64,
  pub employee_id:   Option<i64>,
  pub delivery_date: NaiveDate,
  pub note:          Option<String>,
  pub items:         Vec<NewLineItem>,
}

/// Input for an individual delivery: header plus its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIndividualDelivery {
  pub customer:      String,
  pub employee_id:   Option<i64>,
  pub delivery_date: NaiveDate,
  pub note:          Option<String>,
  pub items:         Vec<NewLineItem>,
}

/// A store delivery with its line items attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDeliveryDetail {
  pub delivery: StoreDelivery,
  pub items:    Vec<DeliveryItem>,
}

/// An individual delivery with its line items attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualDeliveryDetail {
  pub delivery: IndividualDelivery,
  pub items:    Vec<DeliveryItem>,
}

// ─── Returns ─────────────────────────────────────────────────────────────────

/// Header of a return of unsold goods from a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReturn {
  pub id:          i64,
  pub store_id:    i64,
  pub return_date: NaiveDate,
  pub note:        Option<String>,
}

/// One returned product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnItem {
  pub id:         i64,
  pub return_id:  i64,
  pub product_id: i64,
  pub quantity:   f64,
  pub unit_price: f64,
}

/// Input for a return: header plus its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSalesReturn {
  pub store_id:    i64,
  pub return_date: NaiveDate,
  pub note:        Option<String>,
  pub items:       Vec<NewLineItem>,
}

/// A return with its line items attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReturnDetail {
  pub sales_return: SalesReturn,
  pub items:        Vec<ReturnItem>,
}
