//! Core types for the Bakehouse management backend.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod catalog;
pub mod error;
pub mod factory;
pub mod ledger;
pub mod sales;
pub mod settings;
pub mod staff;

pub use error::{Error, Result};
