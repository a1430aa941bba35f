use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config directory cannot be used.
    #[error("config directory {} is unavailable: {reason}", path.display())]
    DirectoryUnavailable { path: PathBuf, reason: String },

    #[error("failed reading config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed parsing config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
