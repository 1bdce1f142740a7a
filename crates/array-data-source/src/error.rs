//! Error types for the data source.

use crate::index_path::IndexPath;

/// Result type alias for data source operations.
pub type Result<T> = std::result::Result<T, DataSourceError>;

/// Configuration errors detected while answering the host widget.
///
/// These never describe runtime conditions. Each one means the caller left
/// out a piece of setup the host needs, so the panicking entry points treat
/// them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataSourceError {
    /// Neither a default cell identifier nor a resolving identifier hook.
    #[error(
        "no cell identifier for {index_path}: set a default cell identifier or a cell identifier hook"
    )]
    MissingCellIdentifier { index_path: IndexPath },

    /// A supplementary view was requested without a supplementary identifier hook.
    #[error(
        "no supplementary identifier hook set for kind '{kind}' at {index_path}: it is required when supplementary views are requested"
    )]
    MissingSupplementaryIdentifier { kind: String, index_path: IndexPath },
}

impl DataSourceError {
    /// Create a missing cell identifier error.
    pub fn missing_cell_identifier(index_path: IndexPath) -> Self {
        Self::MissingCellIdentifier { index_path }
    }

    /// Create a missing supplementary identifier error.
    pub fn missing_supplementary_identifier(kind: impl Into<String>, index_path: IndexPath) -> Self {
        Self::MissingSupplementaryIdentifier {
            kind: kind.into(),
            index_path,
        }
    }

    /// Returns the index path the failing request was made for.
    pub fn index_path(&self) -> IndexPath {
        match self {
            Self::MissingCellIdentifier { index_path }
            | Self::MissingSupplementaryIdentifier { index_path, .. } => *index_path,
        }
    }
}
