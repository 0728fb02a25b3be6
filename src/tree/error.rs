use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to enumerate a directory during tree construction.
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: Not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

impl TraversalError {
    /// Path of the directory that could not be read.
    pub fn path(&self) -> &Path {
        match self {
            TraversalError::Read { path, .. } | TraversalError::NotADirectory { path } => path,
        }
    }
}
