//! Admin settings and user accounts.
//!
//! `admin_settings` is a singleton row holding the security PIN, the per-menu
//! lock and hide lists, and a denormalized copy of the user list. The list
//! columns are stored as JSON text and decoded into the types here.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Users ───────────────────────────────────────────────────────────────────

/// Access level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  Admin,
  Kasir,
}

impl UserRole {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Admin => "admin",
      Self::Kasir => "kasir",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "admin" => Ok(Self::Admin),
      "kasir" => Ok(Self::Kasir),
      other => Err(Error::UnknownValue(format!("user role: {other:?}"))),
    }
  }
}

/// A login account. PINs are stored and compared as plain text; this mirrors
/// the deployed behavior and is a known weakness of the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
  pub id:   i64,
  pub name: String,
  pub role: UserRole,
  pub pin:  String,
}

/// Input for replacing the user list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserAccount {
  pub name: String,
  pub role: UserRole,
  pub pin:  String,
}

/// Result of a PIN login attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginOutcome {
  pub success: bool,
  pub role:    Option<UserRole>,
}

// ─── Settings ────────────────────────────────────────────────────────────────

/// A PIN lock on a single menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLock {
  pub menu_id: String,
  pub pin:     String,
}

/// The decoded singleton settings row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSettings {
  pub pin:          String,
  pub menu_locks:   Vec<MenuLock>,
  pub hidden_menus: Vec<String>,
  pub user_list:    Vec<UserAccount>,
}

impl AdminSettings {
  /// Whether `menu_id` is locked, and if so with which PIN.
  pub fn lock_for(&self, menu_id: &str) -> Option<&MenuLock> {
    self.menu_locks.iter().find(|l| l.menu_id == menu_id)
  }
}
