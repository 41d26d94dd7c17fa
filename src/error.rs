//! Error types shared by the reader, relocator and orchestrator.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while organizing a directory.
///
/// `DirectoryAccess` and `Config` end a run. `DirectoryCreate` and `Move` are
/// scoped to a single file; the orchestrator reports them and moves on.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The target directory is missing, not a directory, or unreadable.
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A category subdirectory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be moved into its category directory.
    #[error("failed to move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filter configuration could not be loaded or compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;
