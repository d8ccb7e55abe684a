//! Staff records: employees and payroll.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee. `role` is a free-text job title ("baker", "driver", …), not
/// an access level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub id:         i64,
  pub name:       String,
  pub role:       String,
  pub phone:      Option<String>,
  pub address:    Option<String>,
  pub birth_date: Option<NaiveDate>,
  pub hired_date: Option<NaiveDate>,
  pub daily_wage: f64,
}

/// Input for creating or updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
  pub name:       String,
  pub role:       String,
  pub phone:      Option<String>,
  pub address:    Option<String>,
  pub birth_date: Option<NaiveDate>,
  pub hired_date: Option<NaiveDate>,
  pub daily_wage: f64,
}

/// A payroll record for one employee over one period. `total` is stored as
/// given by the caller; the facade does not recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
  pub id:           i64,
  pub employee_id:  i64,
  pub period_start: NaiveDate,
  pub period_end:   NaiveDate,
  pub base_pay:     f64,
  pub bonus:        f64,
  pub deductions:   f64,
  pub total:        f64,
  pub paid_date:    Option<NaiveDate>,
  pub note:         Option<String>,
}

/// Input for creating or updating a payroll record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayroll {
  pub employee_id:  i64,
  pub period_start: NaiveDate,
  pub period_end:   NaiveDate,
  pub base_pay:     f64,
  pub bonus:        f64,
  pub deductions:   f64,
  pub total:        f64,
  pub paid_date:    Option<NaiveDate>,
  pub note:         Option<String>,
}
