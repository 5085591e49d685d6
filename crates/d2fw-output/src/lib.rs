//! Output side of the conversion: writing fixed-width lines.
//!
//! Lines are joined with `\n` and the final line has no terminator.

mod sink;

pub use sink::{OutputOptions, check_destination, render_lines, write_lines};
