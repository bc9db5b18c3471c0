use statetree_core::StateError;
use std::path::PathBuf;
use thiserror::Error;

pub type StatusResult<T> = Result<T, StatusError>;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid state document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: StateError,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
