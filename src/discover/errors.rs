//! Discovery error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised while indexing a project or tracing its includes.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("project root is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
