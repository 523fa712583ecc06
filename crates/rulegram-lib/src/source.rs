//! Grammar source text split into physical lines.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// A named grammar source, stored as its physical lines.
///
/// The lexer works line by line and diagnostics quote whole lines, so the
/// text is split once up front and never reassembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    lines: Vec<String>,
}

impl SourceFile {
    /// Splits `text` on `\n` / `\r\n`. A trailing terminator does not open an
    /// extra empty line, so `""` has zero lines.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads the whole file; the handle is closed before this returns.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.to_string_lossy(), &text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 1-based line lookup. Lines past the end read as empty: `endoffile`
    /// sits on the line after the last one.
    pub fn line(&self, number: u32) -> &str {
        (number as usize)
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map_or("", String::as_str)
    }
}
