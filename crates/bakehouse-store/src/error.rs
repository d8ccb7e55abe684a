//! Error type for `bakehouse-store`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The engine runtime itself could not be brought up.
  #[error("database engine failed to load: {0}")]
  EngineLoad(#[source] tokio_rusqlite::Error),

  /// The serialization store could not be read during startup.
  #[error("stored database image could not be read: {0}")]
  ImageRead(#[source] std::io::Error),

  /// Image bytes the engine cannot load, during startup hydration or a
  /// restore. The previously running database (if any) is untouched.
  #[error("database image is not loadable: {0}")]
  CorruptImage(String),

  /// The engine rejected a statement: malformed SQL, a constraint violation,
  /// or a parameter type mismatch.
  #[error("database error: {0}")]
  Sql(#[from] tokio_rusqlite::Error),

  /// The mutation succeeded in memory but the image flush did not. Memory
  /// and durable storage disagree until the next successful flush.
  #[error("data modified but not saved: {0}")]
  Persist(#[source] std::io::Error),

  /// A stored value does not decode into its domain type.
  #[error("stored value could not be decoded: {0}")]
  Decode(String),

  /// A structured-text settings column failed to (de)serialize.
  #[error("settings payload error: {0}")]
  Settings(#[from] serde_json::Error),

  #[error("database is not initialized")]
  NotInitialized,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
