//! Input side of the conversion: delimited rows and the field layout.

pub mod error;
pub mod layout;
pub mod rows;

pub use error::LayoutLoadError;
pub use layout::{FORMAT_COLUMN, LENGTH_COLUMN, SKIP_COLUMN, load_layout};
pub use rows::{RowSourceOptions, read_rows};
