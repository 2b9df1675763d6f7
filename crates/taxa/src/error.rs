//! CLI error types.

use taxa_config::ConfigError;
use taxa_site::BuildError;
use taxa_storage::StorageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("Failed to serialize navigation: {0}")]
    Json(#[from] serde_json::Error),
}
