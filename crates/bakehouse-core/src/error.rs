//! Error types for `bakehouse-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A stored discriminant string does not match any known variant.
  #[error("unknown stored value: {0}")]
  UnknownValue(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
