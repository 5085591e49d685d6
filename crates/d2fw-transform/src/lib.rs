//! Fixed-width record transcoding.
//!
//! This crate turns rows of raw text cells into fixed-width lines:
//!
//! - **cell**: per-format conversion (time, dates, decimals)
//! - **padding**: zero or space padding to the declared field length
//! - **table**: row assembly, width checks and the date report aggregate

pub mod cell;
pub mod padding;
pub mod table;

// Re-export common functions for external use
pub use cell::{DateOrder, convert_cell, convert_date, convert_decimal, convert_time};
pub use padding::{display_len, pad};
pub use table::{TableConverter, convert_table};
