use std::io::{self, Read};
use std::path::Path;

use rulegram_lib::SourceFile;

/// Source name reported for `-s/--source` text.
pub const INLINE_NAME: &str = "<inline>";
/// Source name reported for `-` (stdin).
pub const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("grammar is required: use a positional FILE or -s/--source")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error(transparent)]
    File(#[from] rulegram_lib::Error),
}

pub fn load_source(file: Option<&Path>, text: Option<&str>) -> Result<SourceFile, LoadError> {
    if let Some(text) = text {
        return Ok(SourceFile::new(INLINE_NAME, text));
    }

    let Some(path) = file else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        return load_stdin();
    }

    Ok(SourceFile::read(path)?)
}

fn load_stdin() -> Result<SourceFile, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(SourceFile::new(STDIN_NAME, &buf))
}
