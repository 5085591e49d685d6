//! Command-line front end for delimited2fixedwidth.

pub mod cli;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
