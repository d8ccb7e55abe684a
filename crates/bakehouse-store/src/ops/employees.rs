//! Employee operations.

use bakehouse_core::staff::{Employee, NewEmployee};

use crate::{Database, Result, codec, image::ImageStore};

fn employee_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    id:         row.get(0)?,
    name:       row.get(1)?,
    role:       row.get(2)?,
    phone:      row.get(3)?,
    address:    row.get(4)?,
    birth_date: codec::opt_date_col(row, 5)?,
    hired_date: codec::opt_date_col(row, 6)?,
    daily_wage: row.get(7)?,
  })
}

const EMPLOYEE_COLS: &str =
  "id, name, role, phone, address, birth_date, hired_date, daily_wage";

impl<S: ImageStore> Database<S> {
  pub async fn get_employees(&self) -> Result<Vec<Employee>> {
    self
      .query(
        &format!("SELECT {EMPLOYEE_COLS} FROM employees ORDER BY name"),
        vec![],
        employee_row,
      )
      .await
  }

  pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
    self
      .query_single(
        &format!("SELECT {EMPLOYEE_COLS} FROM employees WHERE id = ?1"),
        vec![id.into()],
        employee_row,
      )
      .await
  }

  pub async fn add_employee(&self, input: NewEmployee) -> Result<i64> {
    self
      .insert(
        "INSERT INTO employees
           (name, role, phone, address, birth_date, hired_date, daily_wage)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        vec![
          input.name.into(),
          input.role.into(),
          input.phone.into(),
          input.address.into(),
          input.birth_date.map(codec::encode_date).into(),
          input.hired_date.map(codec::encode_date).into(),
          input.daily_wage.into(),
        ],
      )
      .await
  }

  pub async fn update_employee(&self, id: i64, input: NewEmployee) -> Result<()> {
    self
      .execute(
        "UPDATE employees
         SET name = ?1, role = ?2, phone = ?3, address = ?4,
             birth_date = ?5, hired_date = ?6, daily_wage = ?7
         WHERE id = ?8",
        vec![
          input.name.into(),
          input.role.into(),
          input.phone.into(),
          input.address.into(),
          input.birth_date.map(codec::encode_date).into(),
          input.hired_date.map(codec::encode_date).into(),
          input.daily_wage.into(),
          id.into(),
        ],
      )
      .await?;
    Ok(())
  }

  /// Payrolls and deliveries referencing the employee are left in place.
  pub async fn delete_employee(&self, id: i64) -> Result<()> {
    self
      .execute("DELETE FROM employees WHERE id = ?1", vec![id.into()])
      .await?;
    Ok(())
  }
}
