//! Wakachi file writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info};

use crate::error::Error;

/// Writes one space-separated line of tokens per call.
///
/// The file is created (or truncated) on [WakachiWriter::create].
pub struct WakachiWriter<W: Write> {
    path: PathBuf,
    inner: BufWriter<W>,
    nb_lines: u64,
}

impl WakachiWriter<File> {
    /// Create or truncate the file at `path`.
    pub fn create(path: &Path) -> Result<Self, Error> {
        info!("creating {:?}", path);
        let file = File::create(path)?;
        Ok(Self::new(path.to_path_buf(), file))
    }
}

impl<W: Write> WakachiWriter<W> {
    /// Wrap an arbitrary sink. `path` is only used for logging.
    pub fn new(path: PathBuf, inner: W) -> Self {
        Self {
            path,
            inner: BufWriter::new(inner),
            nb_lines: 0,
        }
    }

    /// Write `tokens` joined by single spaces, followed by a newline.
    pub fn write_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), Error> {
        let line = tokens.iter().map(|token| token.as_ref()).join(" ");
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.nb_lines += 1;
        Ok(())
    }

    /// number of lines written so far
    pub fn nb_lines(&self) -> u64 {
        self.nb_lines
    }

    /// Flush buffered lines and give back the sink.
    pub fn finish(self) -> Result<W, Error> {
        debug!("closing {:?} ({} lines)", self.path, self.nb_lines);
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}
