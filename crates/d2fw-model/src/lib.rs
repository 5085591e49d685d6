//! Data model for converting delimited records into fixed-width lines.
//!
//! - [`OutputFormat`]: conversion and padding rule of a field
//! - [`FieldSchema`] / [`Layout`]: the ordered field layout
//! - [`ConversionResult`] / [`DateBounds`]: what a table conversion yields
//! - [`SchemaError`], [`ConversionError`], [`ResourceError`]: the fatal error kinds

pub mod error;
pub mod format;
pub mod result;
pub mod schema;

pub use error::{ConversionError, ResourceError, SchemaError};
pub use format::{OutputFormat, UnknownFormat};
pub use result::{
    ConversionResult, DateBounds, MOST_RECENT_DATE_SENTINEL, OLDEST_DATE_SENTINEL,
};
pub use schema::{FieldSchema, Layout};
