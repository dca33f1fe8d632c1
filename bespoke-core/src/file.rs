use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Read a previously generated file, treating a missing file as `None`.
pub fn read_existing(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Replace `path` with `content` atomically.
///
/// The content is written to a temporary file in the same directory, flushed
/// to disk and renamed over the destination. Readers observe either the old or
/// the new file, never a truncated one.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;

    // Keep the mode of the file being replaced.
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held identical content and was left untouched
    Unchanged,
}

/// Rules that determine how a generated file is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub create_parent_dirs: bool,
    pub skip_unchanged: bool,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            create_parent_dirs: true,
            skip_unchanged: true,
        }
    }
}

/// A rendered file waiting to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules).
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Override the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file according to its rules.
    ///
    /// `previous` is the content read before rendering, if any; it is used to
    /// detect unchanged output without reading the file a second time.
    pub fn write(&self, previous: Option<&str>) -> io::Result<WriteResult> {
        if self.rules.skip_unchanged && previous == Some(self.content.as_str()) {
            tracing::debug!(path = %self.path.display(), "content unchanged, skipping write");
            return Ok(WriteResult::Unchanged);
        }

        if self.rules.create_parent_dirs {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }

        write_atomic(&self.path, &self.content)?;
        tracing::debug!(path = %self.path.display(), bytes = self.content.len(), "file written");
        Ok(WriteResult::Written)
    }
}
