//! Error types for category builds.

use std::path::PathBuf;

use taxa_storage::StorageError;

use crate::lifecycle::BuildPhase;

/// Error raised by a [`CategoryBuild`](crate::CategoryBuild) hook.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Filesystem operation on the scratch directory failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A page could not be read from storage.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// A hook was called out of order.
    #[error("{hook} requires the build to be {expected}, but it is {actual}")]
    Phase {
        hook: &'static str,
        expected: BuildPhase,
        actual: BuildPhase,
    },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
