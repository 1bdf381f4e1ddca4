pub mod error;
mod kenya;
pub mod location_table;
