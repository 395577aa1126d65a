//! Run configuration.
use std::path::{Path, PathBuf};

/// Parameters of a tokenization run, fixed for its whole duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    root: PathBuf,
    normalize: bool,
    sub_folders: Vec<String>,
}

impl Config {
    /// An empty `sub_folders` means that every two-character sub folder of `root` is processed.
    pub fn new(root: PathBuf, normalize: bool, sub_folders: Vec<String>) -> Self {
        Self {
            root,
            normalize,
            sub_folders,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn normalize(&self) -> bool {
        self.normalize
    }

    pub fn sub_folders(&self) -> &[String] {
        &self.sub_folders
    }

    /// `<root>/norm` when normalizing, `<root>/asis` otherwise.
    pub fn output_dir(&self) -> PathBuf {
        let dir = if self.normalize { "norm" } else { "asis" };
        self.root.join(dir)
    }

    /// `<output_dir>/full_ja_<folder>.wakachi`
    pub fn output_file(&self, folder: &str) -> PathBuf {
        self.output_dir().join(format!("full_ja_{}.wakachi", folder))
    }
}
