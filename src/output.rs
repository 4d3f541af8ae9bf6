//! Output management module
//!
//! Writes found words to stdout or a file, one per line, with buffering.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffer size for result writing (64KB)
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Where results go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{:?}", path),
        }
    }
}

/// Buffered line writer for results
pub struct OutputWriter {
    writer: BufWriter<Box<dyn Write>>,
    target: OutputTarget,
    lines_written: u64,
}

impl OutputWriter {
    /// Writer for standard output
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(io::stdout()), OutputTarget::Stdout)
    }

    /// Create (or truncate) a result file
    pub fn file(path: PathBuf) -> anyhow::Result<Self> {
        ensure_parent_dir(&path)?;

        let file: File = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| anyhow::anyhow!("Cannot create output file {:?}: {}", path, e))?;

        Ok(Self::from_writer(Box::new(file), OutputTarget::File(path)))
    }

    /// Stdout when `path` is None, otherwise the file
    pub fn create(path: Option<PathBuf>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::file(path),
            None => Ok(Self::stdout()),
        }
    }

    fn from_writer(inner: Box<dyn Write>, target: OutputTarget) -> Self {
        Self {
            writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, inner),
            target,
            lines_written: 0,
        }
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write every word on its own line
    pub fn write_words<S: AsRef<str>>(&mut self, words: &[S]) -> anyhow::Result<()> {
        for word in words {
            self.write_line(word.as_ref())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    pub fn is_stdout(&self) -> bool {
        self.target == OutputTarget::Stdout
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Ensure the directory holding `path` exists
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
