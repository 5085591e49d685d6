//! Line sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use d2fw_model::ResourceError;
use tracing::info;

/// Options controlling how the output file is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl OutputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Fail when `path` exists and overwriting is not allowed.
pub fn check_destination(path: &Path, options: &OutputOptions) -> Result<(), ResourceError> {
    if path.exists() && !options.overwrite {
        return Err(ResourceError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Join lines with `\n`, without a trailing newline.
pub fn render_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|line| line.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Write all lines to `path`.
///
/// Call this only once every line has been converted, so that a failed
/// run never leaves a partial file behind.
pub fn write_lines<S: AsRef<str>>(
    path: &Path,
    lines: &[S],
    options: &OutputOptions,
) -> Result<(), ResourceError> {
    check_destination(path, options)?;
    let file = File::create(path).map_err(|err| ResourceError::write(path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_lines(lines).as_bytes())
        .map_err(|err| ResourceError::write(path, err))?;
    writer.flush().map_err(|err| ResourceError::write(path, err))?;
    info!(path = %path.display(), lines = lines.len(), "wrote output");
    Ok(())
}
