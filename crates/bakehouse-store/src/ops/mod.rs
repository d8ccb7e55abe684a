//! The entity operation catalog — named, parameterized operations over the
//! schema, grouped per entity family. All of them go through the SQL
//! primitives on [`crate::Database`], so every mutation ends with a
//! full-image flush.

mod assets;
mod bookkeeping;
mod cities;
mod deliveries;
mod employees;
mod materials;
mod payrolls;
mod price_areas;
mod productions;
mod products;
mod recipes;
mod returns;
mod settings;
mod stores;
