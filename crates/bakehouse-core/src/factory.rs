//! Factory records: raw materials, production runs, stock reductions,
//! product recipes, and per-product cost records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Raw materials ───────────────────────────────────────────────────────────

/// An ingredient held in factory stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
  pub id:          i64,
  pub name:        String,
  pub unit:        String,
  pub stock:       f64,
  pub unit_cost:   f64,
  pub expiry_date: Option<NaiveDate>,
}

/// Input for creating or updating a raw material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRawMaterial {
  pub name:        String,
  pub unit:        String,
  pub stock:       f64,
  pub unit_cost:   f64,
  pub expiry_date: Option<NaiveDate>,
}

// ─── Productions ─────────────────────────────────────────────────────────────

/// Header of one production run of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryProduction {
  pub id:              i64,
  pub product_id:      i64,
  pub production_date: NaiveDate,
  pub quantity:        f64,
  pub note:            Option<String>,
}

/// One material consumed by a production run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionMaterial {
  pub id:            i64,
  pub production_id: i64,
  pub material_id:   i64,
  pub quantity:      f64,
}

/// Input line for a production run's material consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductionMaterial {
  pub material_id: i64,
  pub quantity:    f64,
}

/// Input for a production run: header plus consumed materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFactoryProduction {
  pub product_id:      i64,
  pub production_date: NaiveDate,
  pub quantity:        f64,
  pub note:            Option<String>,
  pub materials:       Vec<NewProductionMaterial>,
}

/// A production run with its consumed materials attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionDetail {
  pub production: FactoryProduction,
  pub materials:  Vec<ProductionMaterial>,
}

// ─── Stock reductions ────────────────────────────────────────────────────────

/// A manual write-off of raw-material stock (spoilage, spills, recounts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReduction {
  pub id:             i64,
  pub material_id:    i64,
  pub reduction_date: NaiveDate,
  pub quantity:       f64,
  pub reason:         String,
}

/// Input for recording a stock reduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStockReduction {
  pub material_id:    i64,
  pub reduction_date: NaiveDate,
  pub quantity:       f64,
  pub reason:         String,
}

// ─── Recipes ─────────────────────────────────────────────────────────────────

/// One ingredient of a product's recipe, keyed by (product, material).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItem {
  pub id:          i64,
  pub product_id:  i64,
  pub material_id: i64,
  pub quantity:    f64,
}

// ─── Cost records ────────────────────────────────────────────────────────────

/// Cost-of-goods record for a product (one row per product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
  pub id:            i64,
  pub product_id:    i64,
  pub material_cost: f64,
  pub labor_cost:    f64,
  pub overhead_cost: f64,
  pub unit_cost:     f64,
  pub computed_date: NaiveDate,
}

/// Input for setting a product's cost record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCostRecord {
  pub product_id:    i64,
  pub material_cost: f64,
  pub labor_cost:    f64,
  pub overhead_cost: f64,
  pub unit_cost:     f64,
  pub computed_date: NaiveDate,
}
