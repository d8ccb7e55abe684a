//! Admin settings, user accounts, and PIN verification.
//!
//! PIN comparison is plain-text equality against stored values, exactly as
//! the deployed product behaves. The settings row additionally carries a
//! denormalized JSON copy of the user list, which `replace_users` keeps in
//! step with the `users` table.

use bakehouse_core::settings::{
  AdminSettings, LoginOutcome, NewUserAccount, UserAccount,
};

use crate::{Database, Error, Result, codec, image::ImageStore};

fn user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserAccount> {
  Ok(UserAccount {
    id:   row.get(0)?,
    name: row.get(1)?,
    role: codec::role_col(row, 2)?,
    pin:  row.get(3)?,
  })
}

impl<S: ImageStore> Database<S> {
  // ─── Settings ──────────────────────────────────────────────────────────

  pub async fn get_admin_settings(&self) -> Result<AdminSettings> {
    let raw = self
      .query_single(
        "SELECT pin, menu_locks, hidden_menus, user_list
         FROM admin_settings WHERE id = 1",
        vec![],
        |row| {
          Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
          ))
        },
      )
      .await?
      .ok_or_else(|| Error::Decode("admin settings row missing".into()))?;

    Ok(AdminSettings {
      pin:          raw.0,
      menu_locks:   serde_json::from_str(&raw.1)?,
      hidden_menus: serde_json::from_str(&raw.2)?,
      user_list:    serde_json::from_str(&raw.3)?,
    })
  }

  /// Replace the singleton settings row wholesale.
  pub async fn update_admin_settings(
    &self,
    settings: AdminSettings,
  ) -> Result<()> {
    let menu_locks = serde_json::to_string(&settings.menu_locks)?;
    let hidden_menus = serde_json::to_string(&settings.hidden_menus)?;
    let user_list = serde_json::to_string(&settings.user_list)?;
    self
      .execute(
        "UPDATE admin_settings
         SET pin = ?1, menu_locks = ?2, hidden_menus = ?3, user_list = ?4
         WHERE id = 1",
        vec![
          settings.pin.into(),
          menu_locks.into(),
          hidden_menus.into(),
          user_list.into(),
        ],
      )
      .await?;
    Ok(())
  }

  // ─── Authentication ────────────────────────────────────────────────────

  /// Look the PIN up in `users`; a match logs in as that user's role.
  pub async fn login(&self, pin: &str) -> Result<LoginOutcome> {
    let role = self
      .query_single(
        "SELECT role FROM users WHERE pin = ?1 ORDER BY id LIMIT 1",
        vec![pin.to_owned().into()],
        |row| codec::role_col(row, 0),
      )
      .await?;
    Ok(LoginOutcome { success: role.is_some(), role })
  }

  /// Compare against the settings PIN.
  pub async fn verify_pin(&self, pin: &str) -> Result<bool> {
    let stored: Option<String> = self
      .query_single(
        "SELECT pin FROM admin_settings WHERE id = 1",
        vec![],
        |row| row.get(0),
      )
      .await?;
    Ok(stored.as_deref() == Some(pin))
  }

  /// Compare against the lock entry for `menu_id`. An unlocked menu never
  /// verifies; the UI only prompts for locked menus.
  pub async fn verify_menu_pin(&self, menu_id: &str, pin: &str) -> Result<bool> {
    let settings = self.get_admin_settings().await?;
    Ok(settings.lock_for(menu_id).is_some_and(|lock| lock.pin == pin))
  }

  // ─── Users ─────────────────────────────────────────────────────────────

  pub async fn get_users(&self) -> Result<Vec<UserAccount>> {
    self
      .query(
        "SELECT id, name, role, pin FROM users ORDER BY id",
        vec![],
        user_row,
      )
      .await
  }

  /// Replace the whole user list, then refresh the denormalized copy in the
  /// settings row.
  pub async fn replace_users(
    &self,
    accounts: Vec<NewUserAccount>,
  ) -> Result<Vec<UserAccount>> {
    self.execute("DELETE FROM users", vec![]).await?;
    for account in accounts {
      self
        .insert(
          "INSERT INTO users (name, role, pin) VALUES (?1, ?2, ?3)",
          vec![
            account.name.into(),
            account.role.as_str().to_owned().into(),
            account.pin.into(),
          ],
        )
        .await?;
    }

    let users = self.get_users().await?;
    let user_list = serde_json::to_string(&users)?;
    self
      .execute(
        "UPDATE admin_settings SET user_list = ?1 WHERE id = 1",
        vec![user_list.into()],
      )
      .await?;
    Ok(users)
  }
}
