// Copyright 2025 Perf Summary Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading report documents.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single input file that could not be turned into a report document.
///
/// These are recoverable: the loader records them and moves on to the
/// next path.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not exist at load time.
    #[error("report file not found {}: {source}", .path.display())]
    Missing {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The path exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not a report document.
    #[error("malformed report {}: {source}", .path.display())]
    Malformed {
        /// Offending path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing { path, .. }
            | Self::Unreadable { path, .. }
            | Self::Malformed { path, .. } => path,
        }
    }

    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::Missing {
                path: path.to_path_buf(),
                source,
            }
        } else {
            Self::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
