use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Compression level used for the `--zstd` copy.
pub(crate) const ZSTD_LEVEL: i32 = 3;

#[derive(Clone, Debug, Default)]
pub struct Options {
    pub files: Vec<PathBuf>,
    pub zstd: Option<PathBuf>,

    pub append: bool,
    pub digest: bool,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    pub fn file<P: Into<PathBuf>>(mut self, path: P) -> Options {
        self.files.push(path.into());
        self
    }

    pub fn zstd<P: Into<PathBuf>>(mut self, path: P) -> Options {
        self.zstd = Some(path.into());
        self
    }

    pub fn append(mut self, append: bool) -> Options {
        self.append = append;
        self
    }

    pub fn digest(mut self, digest: bool) -> Options {
        self.digest = digest;
        self
    }

    /// Opens `path` for output, truncating it unless appending.
    pub fn open(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .append(self.append)
            .truncate(!self.append)
            .open(path)
    }
}
