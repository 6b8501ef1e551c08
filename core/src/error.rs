//! Error kinds reported by the lister and the navigator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowseError {
    /// The directory could not be opened. Missing paths, permission problems, and non-directory
    /// targets are not told apart.
    #[error("cannot open directory {path:?}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A push would take the navigator past its configured depth limit.
    #[error("navigation depth limit of {limit} reached")]
    DepthExceeded { limit: usize },
}

impl BrowseError {
    pub(crate) fn open_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenFailed { path: path.into(), source }
    }
}
