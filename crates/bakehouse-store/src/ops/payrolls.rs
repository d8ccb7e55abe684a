//! Payroll operations.

use bakehouse_core::staff::{NewPayroll, Payroll};

use crate::{Database, Result, codec, image::ImageStore};

fn payroll_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Payroll> {
  Ok(Payroll {
    id:           row.get(0)?,
    employee_id:  row.get(1)?,
    period_start: codec::date_col(row, 2)?,
    period_end:   codec::date_col(row, 3)?,
    base_pay:     row.get(4)?,
    bonus:        row.get(5)?,
    deductions:   row.get(6)?,
    total:        row.get(7)?,
    paid_date:    codec::opt_date_col(row, 8)?,
    note:         row.get(9)?,
  })
}

const PAYROLL_COLS: &str = "id, employee_id, period_start, period_end, \
                            base_pay, bonus, deductions, total, paid_date, note";

impl<S: ImageStore> Database<S> {
  /// All payrolls, optionally restricted to one employee.
  pub async fn get_payrolls(
    &self,
    employee_id: Option<i64>,
  ) -> Result<Vec<Payroll>> {
    match employee_id {
      Some(eid) => {
        self
          .query(
            &format!(
              "SELECT {PAYROLL_COLS} FROM payrolls
               WHERE employee_id = ?1 ORDER BY period_start DESC"
            ),
            vec![eid.into()],
            payroll_row,
          )
          .await
      }
      None => {
        self
          .query(
            &format!(
              "SELECT {PAYROLL_COLS} FROM payrolls ORDER BY period_start DESC"
            ),
            vec![],
            payroll_row,
          )
          .await
      }
    }
  }

  pub async fn add_payroll(&self, input: NewPayroll) -> Result<i64> {
    self
      .insert(
        "INSERT INTO payrolls
           (employee_id, period_start, period_end, base_pay, bonus,
            deductions, total, paid_date, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        vec![
          input.employee_id.into(),
          codec::encode_date(input.period_start).into(),
          codec::encode_date(input.period_end).into(),
          input.base_pay.into(),
          input.bonus.into(),
          input.deductions.into(),
          input.total.into(),
          input.paid_date.map(codec::encode_date).into(),
          input.note.into(),
        ],
      )
      .await
  }

  pub async fn update_payroll(&self, id: i64, input: NewPayroll) -> Result<()> {
    self
      .execute(
        "UPDATE payrolls
         SET employee_id = ?1, period_start = ?2, period_end = ?3,
             base_pay = ?4, bonus = ?5, deductions = ?6, total = ?7,
             paid_date = ?8, note = ?9
         WHERE id = ?10",
        vec![
          input.employee_id.into(),
          codec::encode_date(input.period_start).into(),
          codec::encode_date(input.period_end).into(),
          input.base_pay.into(),
          input.bonus.into(),
          input.deductions.into(),
          input.total.into(),
          input.paid_date.map(codec::encode_date).into(),
          input.note.into(),
          id.into(),
        ],
      )
      .await?;
    Ok(())
  }

  pub async fn delete_payroll(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM payrolls WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
