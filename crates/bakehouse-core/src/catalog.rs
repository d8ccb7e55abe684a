//! Master-data records: cities, price areas, stores, products, and the
//! product-composition tables (area prices and package contents).

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Regions ─────────────────────────────────────────────────────────────────

/// A city stores are grouped under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
  pub id:   i64,
  pub name: String,
}

/// A pricing region. Products can carry a distinct price per area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceArea {
  pub id:   i64,
  pub name: String,
}

// ─── Stores ──────────────────────────────────────────────────────────────────

/// A retail store that receives deliveries. `city_id` and `area_id` reference
/// rows that may since have been deleted; nothing cascades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
  pub id:      i64,
  pub name:    String,
  pub city_id: i64,
  pub area_id: i64,
  pub address: Option<String>,
  pub phone:   Option<String>,
}

/// Input for creating or updating a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStore {
  pub name:    String,
  pub city_id: i64,
  pub area_id: i64,
  pub address: Option<String>,
  pub phone:   Option<String>,
}

/// A store joined with the names of its city and price area. The names are
/// `None` when the referenced row no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreOverview {
  pub id:        i64,
  pub name:      String,
  pub city_id:   i64,
  pub area_id:   i64,
  pub address:   Option<String>,
  pub phone:     Option<String>,
  pub city_name: Option<String>,
  pub area_name: Option<String>,
}

// ─── Products ────────────────────────────────────────────────────────────────

/// Whether a product is sold as-is or as a bundle of other products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
  Single,
  Package,
}

impl ProductKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Single => "single",
      Self::Package => "package",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "single" => Ok(Self::Single),
      "package" => Ok(Self::Package),
      other => Err(Error::UnknownValue(format!("product kind: {other:?}"))),
    }
  }
}

/// A sellable product. `base_price` applies wherever no area price is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id:         i64,
  pub name:       String,
  pub unit:       String,
  pub base_price: f64,
  pub stock:      f64,
  pub kind:       ProductKind,
}

/// Input for creating or updating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
  pub name:       String,
  pub unit:       String,
  pub base_price: f64,
  pub stock:      f64,
  pub kind:       ProductKind,
}

/// Area-specific price override for a product, keyed by (product, area).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPrice {
  pub id:         i64,
  pub product_id: i64,
  pub area_id:    i64,
  pub price:      f64,
}

/// One component of a package product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageItem {
  pub id:         i64,
  pub package_id: i64,
  pub product_id: i64,
  pub quantity:   f64,
}

/// Input line for replacing a package's contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPackageItem {
  pub product_id: i64,
  pub quantity:   f64,
}
