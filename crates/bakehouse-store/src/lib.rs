//! Embedded persistence layer for Bakehouse.
//!
//! The whole relational state lives in an in-process SQLite engine. After
//! every mutation the full database image is serialized and written back to
//! an [`ImageStore`], so durable storage always holds one complete snapshot
//! under a single key. Wraps [`tokio_rusqlite`] so all engine access runs on
//! a dedicated thread without blocking the async runtime.

mod codec;
mod engine;
mod ops;
mod schema;

pub mod backup;
pub mod database;
pub mod error;
pub mod image;

pub use backup::BackupFile;
pub use database::Database;
pub use error::{Error, Result};
pub use image::{FileImageStore, ImageStore, MemoryImageStore};

#[cfg(test)]
mod tests;
